//! The three-tab search widget.
//!
//! One fragment with three mutually exclusive search panels: Te Waharoa (the
//! Library's discovery system), the Library website, and Google Scholar.
//! Exactly one tab is selected and its panel shown; the other two panels
//! carry the `hidden` attribute until the host page's tab script swaps them.

use crate::templates::TemplateEngine;
use crate::traits::{ContentProvider, RenderContext, RenderError};

/// Search-box widget provider.
pub struct SearchWidget {
    templates: TemplateEngine,
}

impl SearchWidget {
    /// Create the provider with the embedded template.
    pub fn new() -> Self {
        Self {
            templates: TemplateEngine::new(),
        }
    }
}

impl Default for SearchWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for SearchWidget {
    fn name(&self) -> &'static str {
        "search"
    }

    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        Ok(self.templates.render("search.html", ctx)?)
    }
}
