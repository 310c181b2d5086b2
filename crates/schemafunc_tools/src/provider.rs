//! Vendor-specific projections of a [`ToolEnvelope`].

use crate::envelope::ToolEnvelope;
use serde_json::{Value, json};

/// Converts an envelope into one vendor's tool format.
pub trait SchemaProvider: Send + Sync {
    /// Renders the vendor's tool schema.
    fn format_schema(&self, envelope: &ToolEnvelope) -> Value;

    /// Call arguments that offer `schema` (as produced by
    /// [`format_schema`](Self::format_schema)) to the model.
    fn format_tool_kwargs(&self, schema: &Value) -> Value;
}

/// OpenAI function calling: the envelope as is, with a forced `tool_choice`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiProvider;

impl SchemaProvider for OpenAiProvider {
    fn format_schema(&self, envelope: &ToolEnvelope) -> Value {
        envelope.to_json()
    }

    fn format_tool_kwargs(&self, schema: &Value) -> Value {
        json!({
            "tools": [schema],
            "tool_choice": {
                "type": "function",
                "function": {"name": schema["function"]["name"]},
            },
        })
    }
}

/// Anthropic tool use: flat `{name, description, input_schema}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicProvider;

impl SchemaProvider for AnthropicProvider {
    fn format_schema(&self, envelope: &ToolEnvelope) -> Value {
        json!({
            "name": envelope.function.name,
            "description": envelope.function.description,
            "input_schema": envelope.function.parameters.to_json(),
        })
    }

    fn format_tool_kwargs(&self, schema: &Value) -> Value {
        json!({ "tools": [schema] })
    }
}
