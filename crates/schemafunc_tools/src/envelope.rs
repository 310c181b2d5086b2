//! The vendor-facing tool envelope.

use schemafunc_schema::{FunctionSignature, SchemaDocument, SchemaError, SchemaGenerator};
use serde::Serialize;
use serde_json::{Value, json};

/// `{"type": "function", "function": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolEnvelope {
    #[serde(rename = "type")]
    kind: EnvelopeKind,
    /// The described function.
    pub function: ToolFunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum EnvelopeKind {
    Function,
}

/// Name, description and parameters of a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFunction {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// Parameter schema.
    pub parameters: SchemaDocument,
}

impl ToolEnvelope {
    /// Wraps a schema document under a tool name.
    pub fn new(name: impl Into<String>, parameters: SchemaDocument) -> Self {
        Self {
            kind: EnvelopeKind::Function,
            function: ToolFunction {
                name: name.into(),
                description: parameters.description.clone(),
                parameters,
            },
        }
    }

    /// Tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// The envelope as JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.function.name,
                "description": self.function.description,
                "parameters": self.function.parameters.to_json(),
            }
        })
    }
}

/// Wraps `document` into an envelope named `callable_name`.
pub fn assemble(callable_name: impl Into<String>, document: SchemaDocument) -> ToolEnvelope {
    ToolEnvelope::new(callable_name, document)
}

/// Generates the envelope for `signature` with default options.
///
/// # Errors
///
/// Returns [`SchemaError`] when the signature is malformed.
pub fn generate_schema(signature: &FunctionSignature) -> Result<ToolEnvelope, SchemaError> {
    generate_schema_with(&SchemaGenerator::default(), signature)
}

/// Generates the envelope for `signature` with a configured generator.
///
/// # Errors
///
/// Returns [`SchemaError`] when the signature is malformed or a check
/// enabled in the generator's options fails.
pub fn generate_schema_with(
    generator: &SchemaGenerator,
    signature: &FunctionSignature,
) -> Result<ToolEnvelope, SchemaError> {
    let document = generator.generate(signature)?;
    Ok(assemble(&signature.name, document))
}

/// Call arguments that force the model to call this tool:
/// `{"tools": [envelope], "tool_choice": {"type": "function", "function": {"name": ...}}}`.
#[must_use]
pub fn to_call_kwargs(envelope: &ToolEnvelope) -> Value {
    json!({
        "tools": [envelope.to_json()],
        "tool_choice": {
            "type": "function",
            "function": {"name": envelope.name()},
        },
    })
}
