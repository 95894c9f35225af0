//! Content providers for the library website's embeddable widgets.
//!
//! Each provider returns a self-contained HTML fragment that the site's
//! rendering host injects into a page. Providers are pure: the same context
//! always yields the same bytes.

pub mod registry;
pub mod search;
pub mod templates;
pub mod traits;

pub use registry::ProviderRegistry;
pub use search::SearchWidget;
pub use traits::{ContentProvider, RenderContext, RenderError};
