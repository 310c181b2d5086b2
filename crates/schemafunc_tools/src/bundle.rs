//! A callable bundled with its tool schema.

use crate::envelope::{ToolEnvelope, generate_schema_with, to_call_kwargs};
use crate::provider::SchemaProvider;
use crate::registry::ProviderRegistry;
use schemafunc_schema::{FunctionSignature, SchemaError, SchemaGenerator};
use serde_json::Value;

/// A callable together with its signature, envelope and OpenAI call
/// arguments, all computed once at construction.
///
/// ```
/// use schemafunc_tools::{SchemaFunc, schemafunc};
///
/// /// Add two numbers.
/// ///
/// /// Args:
/// ///     a: First addend.
/// ///     b: Second addend.
/// #[schemafunc]
/// fn add(a: i64, b: i64) -> i64 {
///     a + b
/// }
///
/// let tool = SchemaFunc::new(add, add_signature()).unwrap();
/// assert_eq!((tool.func())(2, 3), 5);
/// assert_eq!(tool.envelope().function.description, "Add two numbers.");
/// assert_eq!(tool.openai_tool_kwargs()["tool_choice"]["function"]["name"], "add");
/// ```
#[derive(Debug, Clone)]
pub struct SchemaFunc<F> {
    func: F,
    signature: FunctionSignature,
    envelope: ToolEnvelope,
    openai_tool_kwargs: Value,
}

impl<F> SchemaFunc<F> {
    /// Bundles `func` with the schema generated from `signature` using
    /// default options.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the signature is malformed.
    pub fn new(func: F, signature: FunctionSignature) -> Result<Self, SchemaError> {
        Self::with_generator(func, signature, &SchemaGenerator::default())
    }

    /// Bundles `func` with the schema generated by `generator`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when generation fails.
    pub fn with_generator(
        func: F,
        signature: FunctionSignature,
        generator: &SchemaGenerator,
    ) -> Result<Self, SchemaError> {
        let envelope = generate_schema_with(generator, &signature)?;
        let openai_tool_kwargs = to_call_kwargs(&envelope);
        Ok(Self {
            func,
            signature,
            envelope,
            openai_tool_kwargs,
        })
    }

    /// The wrapped callable.
    #[must_use]
    pub fn func(&self) -> &F {
        &self.func
    }

    /// The signature the schema was generated from.
    #[must_use]
    pub fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    /// The generated envelope.
    #[must_use]
    pub fn envelope(&self) -> &ToolEnvelope {
        &self.envelope
    }

    /// Call arguments that force an OpenAI model to call this tool.
    #[must_use]
    pub fn openai_tool_kwargs(&self) -> &Value {
        &self.openai_tool_kwargs
    }

    /// Renders the envelope with `provider`.
    #[must_use]
    pub fn format_with(&self, provider: &dyn SchemaProvider) -> Value {
        provider.format_schema(&self.envelope)
    }

    /// Renders the envelope with the provider registered under `name`.
    #[must_use]
    pub fn provider_schema(&self, registry: &ProviderRegistry, name: &str) -> Option<Value> {
        registry.get(name).map(|provider| self.format_with(provider))
    }

    /// Call arguments of the provider registered under `name`.
    #[must_use]
    pub fn provider_tool_kwargs(&self, registry: &ProviderRegistry, name: &str) -> Option<Value> {
        let provider = registry.get(name)?;
        Some(provider.format_tool_kwargs(&self.format_with(provider)))
    }

    /// Returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.func
    }
}
