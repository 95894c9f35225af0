//! Template engine for rendering widget fragments.

use minijinja::{context, Environment};

use crate::traits::RenderContext;

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the embedded widget templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("search.html".to_string(), SEARCH_TEMPLATE.to_string())
            .expect("Failed to add search template");

        Self { env }
    }

    /// Render a widget template with the host context.
    pub fn render(&self, template: &str, ctx: &RenderContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            values => &ctx.values,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Three-tab search fragment. Tab buttons reference their panels through
// aria-controls; inactive panels carry the hidden attribute (the tab script
// on the host page toggles it).
const SEARCH_TEMPLATE: &str = r##"<div>
  <h2 class="visually-hidden">Search boxes – search Te Waharoa, the Library website, or Google Scholar</h2>
  <div class="search-boxes">
    <div id="te-waharoa-tab-box" class="lib-search-panel" role="tabpanel">
      <form id="te-waharoa-search-form" action="https://tewaharoa.victoria.ac.nz/discovery/search">
        <label for="te-waharoa-search-field" class="search-heading">Search Te Waharoa<span> – the Library’s discovery system</span></label>
        <div class="form-search">
          <input id="te-waharoa-search-field" class="search-input" name="twq" autocomplete="off" type="text" value="" placeholder="Find books, articles, online resources…">
          <input type="hidden" name="vid" value="64VUW_INST:VUWNUI">
          <button type="submit" class="no-icon button large primary">Search</button>
        </div>
      </form>
      <div class="sub-search-links">
        <a class="button flat" href="https://tewaharoa.victoria.ac.nz/discovery/search?vid=64VUW_INST:VUWNUI&amp;mode=advanced&amp;sortby=rank&amp;lang=en"><i class="icon-external"></i>advanced search</a>
      </div>
    </div>
    <div id="library-website-tab-box" class="lib-search-panel hidden" role="tabpanel" hidden>
      <form id="library-search-form" action="./?a=1782126">
        <label for="search-keyword" class="search-heading">Search the Library website</label>
        <div class="big-search-form field-container">
          <div class="form-search">
            <input id="search-keyword" class="search-input" name="query" autocomplete="off" type="text" value="" placeholder="Find information about the Library">
            <button type="submit" class="no-icon button large primary">Search</button>
          </div>
        </div>
      </form>
    </div>
    <div id="google-scholar-tab-box" class="lib-search-panel hidden" role="tabpanel" hidden>
      <form id="google-scholar-search-form" action="https://scholar.google.com/scholar">
        <label for="google-scholar-search-field" class="search-heading">Search Google Scholar</label>
        <div class="big-search-form field-container">
          <div class="form-search">
            <input id="google-scholar-search-field" class="search-input" name="q" autocomplete="off" type="text" value="" placeholder="Search Google Scholar">
            <input type="hidden" name="inst" value="13048756322741660347">
            <button type="submit" class="no-icon button large primary">Search</button>
          </div>
        </div>
      </form>
      <div class="sub-search-links">
        <a class="button flat" href="./?a=1783395">tips for using Google Scholar<i class="icon-arrow-right"></i></a>
      </div>
    </div>
  </div>
  <div class="search-tabs" role="tablist" aria-label="Select search box">
    <ul role="none">
      <li><button id="te-waharoa-tab" class="search-tab no-icon" role="tab" aria-controls="te-waharoa-tab-box" aria-selected="true">Te Waharoa</button></li>
      <li><button id="library-website-tab" class="search-tab no-icon" role="tab" aria-controls="library-website-tab-box" aria-selected="false">Library website</button></li>
      <li><button id="google-scholar-tab" class="search-tab no-icon" role="tab" aria-controls="google-scholar-tab-box" aria-selected="false">Google Scholar</button></li>
    </ul>
  </div>
</div>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_search_template() {
        let engine = TemplateEngine::new();

        let html = engine.render("search.html", &RenderContext::new()).unwrap();

        assert!(html.contains(r#"role="tablist""#));
        assert!(html.contains("Te Waharoa"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let engine = TemplateEngine::new();

        assert!(engine.render("missing.html", &RenderContext::new()).is_err());
    }
}
