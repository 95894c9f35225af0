//! Widget render command.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use libweb_content::{ContentProvider, ProviderRegistry, RenderContext};

/// Run the render command.
pub fn run(widget: &str, out: Option<PathBuf>) -> Result<()> {
    let registry = ProviderRegistry::with_builtins();

    let Some(provider) = registry.get(widget) else {
        bail!(
            "Unknown widget '{}' (available: {})",
            widget,
            registry.names().join(", ")
        );
    };

    let html = provider.render(&RenderContext::new())?;

    match out {
        Some(path) => {
            fs::write(&path, html)?;
            tracing::info!("Wrote {} fragment to {}", widget, path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_fragment_to_file() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("search.html");

        run("search", Some(out.clone())).unwrap();

        let html = fs::read_to_string(out).unwrap();
        assert!(html.contains(r#"role="tablist""#));
    }

    #[test]
    fn unknown_widget_is_an_error() {
        let err = run("hours", None).unwrap_err();

        assert!(err.to_string().contains("Unknown widget"));
        assert!(err.to_string().contains("search"));
    }
}
