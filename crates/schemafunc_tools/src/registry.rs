//! Provider registry.
//!
//! The [`ProviderRegistry`] maps lowercase provider names to
//! [`SchemaProvider`] implementations. A default registry knows `openai`
//! and `anthropic`; third-party formats are added with
//! [`register`](ProviderRegistry::register).
//!
//! # Usage
//!
//! ```
//! use schemafunc_tools::{ProviderRegistry, SchemaProvider, ToolEnvelope};
//! use serde_json::{Value, json};
//!
//! struct GeminiProvider;
//!
//! impl SchemaProvider for GeminiProvider {
//!     fn format_schema(&self, envelope: &ToolEnvelope) -> Value {
//!         json!({"function_declarations": [envelope.function]})
//!     }
//!
//!     fn format_tool_kwargs(&self, schema: &Value) -> Value {
//!         json!({"tools": [schema]})
//!     }
//! }
//!
//! let mut registry = ProviderRegistry::default();
//! registry.register("Gemini", GeminiProvider);
//! assert_eq!(registry.names(), ["openai", "anthropic", "gemini"]);
//! ```

use crate::provider::{AnthropicProvider, OpenAiProvider, SchemaProvider};
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry of schema providers, keyed by lowercase name.
#[derive(Clone)]
pub struct ProviderRegistry {
    providers: IndexMap<String, Arc<dyn SchemaProvider>>,
}

impl core::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("openai", OpenAiProvider);
        registry.register("anthropic", AnthropicProvider);
        registry
    }
}

impl ProviderRegistry {
    /// Creates a registry with the built-in providers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry without any providers.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            providers: IndexMap::new(),
        }
    }

    /// Registers a provider under `name` (case-insensitive), replacing any
    /// provider already registered under it.
    pub fn register(&mut self, name: &str, provider: impl SchemaProvider + 'static) {
        let name = name.to_lowercase();
        if self
            .providers
            .insert(name.clone(), Arc::new(provider))
            .is_some()
        {
            tracing::debug!(provider = %name, "replaced schema provider");
        }
    }

    /// Returns a provider by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn SchemaProvider> {
        self.providers.get(&name.to_lowercase()).map(AsRef::as_ref)
    }

    /// Returns whether a provider with the given name is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.providers.contains_key(&name.to_lowercase())
    }

    /// Returns the names of all registered providers, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::ToolEnvelope;
    use serde_json::{Value, json};

    struct Echo;

    impl SchemaProvider for Echo {
        fn format_schema(&self, envelope: &ToolEnvelope) -> Value {
            json!(envelope.name())
        }

        fn format_tool_kwargs(&self, schema: &Value) -> Value {
            schema.clone()
        }
    }

    #[test]
    fn builtin_providers() {
        let registry = ProviderRegistry::new();
        assert_eq!(registry.names(), ["openai", "anthropic"]);
        assert!(registry.has("OpenAI"));
        assert!(registry.get("ANTHROPIC").is_some());
        assert!(registry.get("gemini").is_none());
        assert!(ProviderRegistry::empty().names().is_empty());
    }

    #[test]
    fn register_replaces_existing() {
        let mut registry = ProviderRegistry::new();
        registry.register("OpenAI", Echo);
        assert_eq!(registry.names(), ["openai", "anthropic"]);

        let envelope = ToolEnvelope::new("ping", Default::default());
        let provider = registry.get("openai").unwrap();
        assert_eq!(provider.format_schema(&envelope), json!("ping"));
    }
}
