//! # schemafunc Internal Library
//!
//! Re-exports the schemafunc crates for convenience.

/// Docstring extraction.
pub use schemafunc_docs;

/// Type hints and their JSON Schema descriptors.
pub use schemafunc_types;

/// Parameter schema generation.
pub use schemafunc_schema;

/// Tool envelopes, providers and the `#[schemafunc]` macro.
pub use schemafunc_tools;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use schemafunc_docs::{DocModel, DocStyle};
    pub use schemafunc_schema::{
        DescriptionMode, FunctionSignature, Parameter, SchemaDocument, SchemaError,
        SchemaGenerator, SchemaOptions,
    };
    pub use schemafunc_tools::{
        AnthropicProvider, OpenAiProvider, ProviderRegistry, SchemaFunc, SchemaProvider,
        ToolEnvelope, generate_schema, schemafunc, to_call_kwargs,
    };
    pub use schemafunc_types::{RecordDef, TypeHint, TypeRegistry};
}
