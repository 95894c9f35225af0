//! Trait definitions for content providers.

use serde_json::{Map, Value};

/// Context handed in by the rendering host.
///
/// The host passes a value bag alongside every render call. The shipped
/// widgets do not currently read any key, but the parameter is part of the
/// host contract and providers must accept it.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct RenderContext {
    /// Host-supplied values, keyed by name.
    pub values: Map<String, Value>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Errors that can occur while rendering a fragment.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Trait for widget content providers.
pub trait ContentProvider: Send + Sync {
    /// Widget identifier used for registry lookup (e.g. "search")
    fn name(&self) -> &'static str;

    /// Render the widget's HTML fragment.
    ///
    /// Must be referentially stable: repeated calls with any context produce
    /// byte-identical output.
    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError>;
}
