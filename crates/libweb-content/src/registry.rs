//! Registry of content providers, looked up by widget name.

use std::collections::HashMap;

use crate::search::SearchWidget;
use crate::traits::ContentProvider;

/// A registry of widget providers.
#[derive(Default)]
pub struct ProviderRegistry {
    /// Providers by name (lowercase)
    providers: HashMap<String, Box<dyn ContentProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the shipped widgets.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SearchWidget::new()));
        registry
    }

    /// Register a provider under its own name.
    pub fn register(&mut self, provider: Box<dyn ContentProvider>) {
        self.providers
            .insert(provider.name().to_lowercase(), provider);
    }

    /// Look up a provider by name.
    pub fn get(&self, name: &str) -> Option<&dyn ContentProvider> {
        self.providers.get(&name.to_lowercase()).map(|p| p.as_ref())
    }

    /// Whether a provider with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(&name.to_lowercase())
    }

    /// Registered widget names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}
