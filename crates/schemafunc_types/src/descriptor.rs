//! Resolved type shapes and their JSON Schema rendering.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Scalar JSON Schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `"string"`
    String,
    /// `"integer"`
    Integer,
    /// `"number"`
    Number,
    /// `"boolean"`
    Boolean,
    /// `"null"`
    Null,
}

impl PrimitiveKind {
    /// JSON Schema `type` keyword value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// A normalized type. Every variant renders as exactly one schema node.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TypeDescriptor {
    /// `{"type": <kind>}`
    Primitive(PrimitiveKind),
    /// `{"type": "array", "items": <item>}`
    Array(Box<TypeDescriptor>),
    /// `{"type": "object", ...}`
    Object(ObjectShape),
    /// `{"enum": [...]}`
    Enum(Vec<Value>),
    /// `{"anyOf": [...]}`
    Union(Vec<TypeDescriptor>),
    /// `{}`, accepts anything.
    #[default]
    Unknown,
}

/// Properties of an object-shaped descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectShape {
    /// Declared properties in declaration order.
    pub properties: IndexMap<String, TypeDescriptor>,
    /// Names of properties that must be present, in declaration order.
    pub required: Vec<String>,
    /// Policy for keys outside `properties`. `None` leaves it unconstrained.
    pub additional_properties: Option<AdditionalProperties>,
}

/// `additionalProperties` policy of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    /// Extra keys are rejected.
    Forbidden,
    /// Extra keys are allowed with values of this shape.
    Schema(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Shorthand for a primitive descriptor.
    #[must_use]
    pub const fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    /// Returns whether this is [`TypeDescriptor::Unknown`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Renders the JSON Schema node for this descriptor.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        match self {
            Self::Primitive(kind) => json!({ "type": kind.as_str() }),
            Self::Array(item) => json!({ "type": "array", "items": item.to_json_schema() }),
            Self::Object(shape) => shape.to_json_schema(),
            Self::Enum(values) => json!({ "enum": values }),
            Self::Union(variants) => json!({
                "anyOf": variants.iter().map(Self::to_json_schema).collect::<Vec<_>>()
            }),
            Self::Unknown => Value::Object(Map::new()),
        }
    }

    /// Renders the node as a JSON object map, ready for extra keywords such
    /// as `description` or `default`.
    #[must_use]
    pub fn to_schema_map(&self) -> Map<String, Value> {
        match self.to_json_schema() {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl ObjectShape {
    fn to_json_schema(&self) -> Value {
        let mut node = Map::new();
        node.insert("type".into(), Value::from("object"));
        if !self.properties.is_empty() {
            let properties = self
                .properties
                .iter()
                .map(|(name, descriptor)| (name.clone(), descriptor.to_json_schema()))
                .collect();
            node.insert("properties".into(), Value::Object(properties));
            node.insert("required".into(), json!(self.required));
        }
        match &self.additional_properties {
            Some(AdditionalProperties::Forbidden) => {
                node.insert("additionalProperties".into(), Value::Bool(false));
            }
            Some(AdditionalProperties::Schema(value)) => {
                node.insert("additionalProperties".into(), value.to_json_schema());
            }
            None => {}
        }
        Value::Object(node)
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_schema().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_render_their_type() {
        for (kind, name) in [
            (PrimitiveKind::String, "string"),
            (PrimitiveKind::Integer, "integer"),
            (PrimitiveKind::Number, "number"),
            (PrimitiveKind::Boolean, "boolean"),
            (PrimitiveKind::Null, "null"),
        ] {
            assert_eq!(
                TypeDescriptor::primitive(kind).to_json_schema(),
                json!({ "type": name })
            );
        }
    }

    #[test]
    fn unknown_is_the_empty_schema() {
        assert_eq!(TypeDescriptor::Unknown.to_json_schema(), json!({}));
        assert_eq!(
            TypeDescriptor::Array(Box::new(TypeDescriptor::Unknown)).to_json_schema(),
            json!({ "type": "array", "items": {} })
        );
    }

    #[test]
    fn objects_render_properties_in_order() {
        let mut shape = ObjectShape::default();
        shape
            .properties
            .insert("zeta".into(), TypeDescriptor::Primitive(PrimitiveKind::String));
        shape
            .properties
            .insert("alpha".into(), TypeDescriptor::Primitive(PrimitiveKind::Integer));
        shape.required.push("zeta".into());
        shape.additional_properties = Some(AdditionalProperties::Forbidden);

        let rendered = serde_json::to_string(&TypeDescriptor::Object(shape)).unwrap();
        assert_eq!(
            rendered,
            r#"{"type":"object","properties":{"zeta":{"type":"string"},"alpha":{"type":"integer"}},"required":["zeta"],"additionalProperties":false}"#
        );
    }

    #[test]
    fn maps_render_additional_properties() {
        let shape = ObjectShape {
            additional_properties: Some(AdditionalProperties::Schema(Box::new(
                TypeDescriptor::Primitive(PrimitiveKind::Integer),
            ))),
            ..ObjectShape::default()
        };
        assert_eq!(
            TypeDescriptor::Object(shape).to_json_schema(),
            json!({ "type": "object", "additionalProperties": { "type": "integer" } })
        );
    }

    #[test]
    fn enums_and_unions() {
        assert_eq!(
            TypeDescriptor::Enum(vec![json!("a"), json!("b")]).to_json_schema(),
            json!({ "enum": ["a", "b"] })
        );
        assert_eq!(
            TypeDescriptor::Union(vec![
                TypeDescriptor::Primitive(PrimitiveKind::String),
                TypeDescriptor::Primitive(PrimitiveKind::Integer),
            ])
            .to_json_schema(),
            json!({ "anyOf": [{ "type": "string" }, { "type": "integer" }] })
        );
    }
}
