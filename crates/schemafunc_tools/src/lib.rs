//! Tool schema assembly for schemafunc.
//!
//! Wraps a generated [`SchemaDocument`] into the vendor-facing
//! [`ToolEnvelope`] and renders it for specific LLM providers.
//!
//! # Quick Start
//!
//! ```
//! use schemafunc_tools::{ProviderRegistry, SchemaFunc, schemafunc};
//!
//! /// Get the current weather in a given location.
//! ///
//! /// :param location: The city and state, e.g. San Francisco, CA
//! /// :param unit: Temperature unit.
//! #[schemafunc]
//! fn get_weather(location: &str, #[default("celsius")] unit: &str) -> String {
//!     format!("{location}: 21 {unit}")
//! }
//!
//! let tool = SchemaFunc::new(get_weather, get_weather_signature()).unwrap();
//! let registry = ProviderRegistry::default();
//! let anthropic = tool.provider_schema(&registry, "anthropic").unwrap();
//!
//! assert_eq!(anthropic["name"], "get_weather");
//! assert_eq!(anthropic["input_schema"]["required"], serde_json::json!(["location"]));
//! ```
//!
//! # Architecture
//!
//! - [`ToolEnvelope`] / [`assemble`]: `{"type": "function", "function": {...}}`
//! - [`generate_schema`] / [`to_call_kwargs`]: signature to envelope, envelope to call arguments
//! - [`SchemaProvider`]: vendor projections ([`OpenAiProvider`], [`AnthropicProvider`])
//! - [`ProviderRegistry`]: providers by name
//! - [`SchemaFunc`]: a callable bundled with its schema
//! - [`schemafunc`]: attribute macro generating a function's [`FunctionSignature`]

// Self-reference so `#[schemafunc]`-generated code can use `schemafunc_tools::` paths within this crate.
extern crate self as schemafunc_tools;

pub mod bundle;
pub mod envelope;
pub mod provider;
pub mod registry;

pub use bundle::SchemaFunc;
pub use envelope::{
    ToolEnvelope, ToolFunction, assemble, generate_schema, generate_schema_with, to_call_kwargs,
};
pub use provider::{AnthropicProvider, OpenAiProvider, SchemaProvider};
pub use registry::ProviderRegistry;

// Re-export the schema layer used by generated code.
pub use schemafunc_schema::{
    DescriptionMode, FunctionSignature, Parameter, ParameterInfo, SchemaDocument, SchemaError,
    SchemaGenerator, SchemaOptions,
};
pub use schemafunc_types::{RecordDef, TypeHint, TypeRegistry, TypeResolver};

// Re-export proc macros.
pub use schemafunc_macros::schemafunc;
