//! Schema types for function parameters.
//!
//! Provides [`ParameterInfo`] for individual parameter schemas and
//! [`SchemaDocument`] for the complete `parameters` object of a tool.

use indexmap::IndexMap;
use schemafunc_types::TypeDescriptor;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Schema information for a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterInfo {
    /// Parameter name.
    pub name: String,
    /// Resolved type.
    pub descriptor: TypeDescriptor,
    /// Parameter description from the docstring.
    pub description: Option<String>,
    /// Whether the parameter has a default and may be omitted.
    pub has_default: bool,
    /// Default value embedded in the schema.
    pub default_value: Option<Value>,
}

impl ParameterInfo {
    /// Creates a required parameter with the given name and type.
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            description: None,
            has_default: false,
            default_value: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the parameter optional, embedding `value` when given.
    #[must_use]
    pub fn with_default(mut self, value: Option<Value>) -> Self {
        self.has_default = true;
        self.default_value = value;
        self
    }

    /// Whether the parameter belongs in `required`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        !self.has_default
    }

    /// The property node: the type's schema plus `description` and `default`.
    #[must_use]
    pub fn to_property(&self) -> Value {
        let mut node = self.descriptor.to_schema_map();
        if let Some(description) = &self.description {
            node.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(default) = &self.default_value {
            node.insert("default".to_string(), default.clone());
        }
        Value::Object(node)
    }
}

/// The `parameters` object of a tool: ordered properties and the required set.
///
/// Serializes as `{"type": "object", "properties": {...}, "required": [...]}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    /// Function description.
    pub description: String,
    parameters: Vec<ParameterInfo>,
    properties: IndexMap<String, Value>,
    required: Vec<String>,
}

impl SchemaDocument {
    /// Creates an empty document with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Adds a parameter, keeping declaration order.
    #[must_use]
    pub fn add_parameter(mut self, param: ParameterInfo) -> Self {
        self.push(param);
        self
    }

    pub(crate) fn push(&mut self, param: ParameterInfo) {
        if param.is_required() {
            self.required.push(param.name.clone());
        }
        self.properties.insert(param.name.clone(), param.to_property());
        self.parameters.push(param);
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    /// Property nodes by parameter name.
    #[must_use]
    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.properties
    }

    /// Names of parameters without a default, in declaration order.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// The JSON Schema `parameters` object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }
}

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "object")?;
        map.serialize_entry("properties", &self.properties)?;
        map.serialize_entry("required", &self.required)?;
        map.end()
    }
}
