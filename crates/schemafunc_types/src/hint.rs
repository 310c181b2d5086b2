//! Caller-supplied type descriptions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The declared type of a parameter or record field.
///
/// Hints mirror what a type annotation can say about a value. They are
/// built by hand, derived from a `schemars::JsonSchema` type with
/// [`TypeHint::of`], or parsed from a JSON Schema with
/// [`TypeHint::from_json_schema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeHint {
    /// The null type.
    Null,
    /// Text.
    String,
    /// Whole numbers.
    Integer,
    /// Floating point numbers.
    Number,
    /// `true` / `false`.
    Boolean,
    /// Explicitly any value.
    Any,
    /// Homogeneous list, set or variadic tuple. `None` when the element type
    /// was not given.
    Array(Option<Box<TypeHint>>),
    /// Key/value mapping. Both sides `None` for a bare mapping.
    Map {
        /// Key type; JSON objects only support string keys.
        key: Option<Box<TypeHint>>,
        /// Value type.
        value: Option<Box<TypeHint>>,
    },
    /// `T` or null.
    Optional(Box<TypeHint>),
    /// Any of several types, in declaration order.
    Union(Vec<TypeHint>),
    /// One of a fixed set of literal values.
    Literal(Vec<Value>),
    /// Record with named fields.
    Record(RecordDef),
    /// Reference to a type registered by name, possibly not yet defined.
    Named(String),
    /// A type that has no schema equivalent. The label is used in diagnostics.
    Opaque(String),
}

impl TypeHint {
    /// Homogeneous array of `item`.
    #[must_use]
    pub fn array(item: TypeHint) -> Self {
        Self::Array(Some(Box::new(item)))
    }

    /// Array without a declared element type.
    #[must_use]
    pub fn bare_array() -> Self {
        Self::Array(None)
    }

    /// String-keyed mapping with values of type `value`.
    #[must_use]
    pub fn map(value: TypeHint) -> Self {
        Self::Map {
            key: Some(Box::new(Self::String)),
            value: Some(Box::new(value)),
        }
    }

    /// Mapping with an explicit key type.
    #[must_use]
    pub fn map_with_key(key: TypeHint, value: TypeHint) -> Self {
        Self::Map {
            key: Some(Box::new(key)),
            value: Some(Box::new(value)),
        }
    }

    /// Mapping without declared key or value types.
    #[must_use]
    pub fn bare_map() -> Self {
        Self::Map {
            key: None,
            value: None,
        }
    }

    /// `inner` or null.
    #[must_use]
    pub fn optional(inner: TypeHint) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Union of `variants` in the given order.
    #[must_use]
    pub fn union(variants: impl IntoIterator<Item = TypeHint>) -> Self {
        Self::Union(variants.into_iter().collect())
    }

    /// Literal choice among `values`.
    #[must_use]
    pub fn literal<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Literal(values.into_iter().map(Into::into).collect())
    }

    /// Reference to a registered type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// A type with no schema equivalent.
    #[must_use]
    pub fn opaque(label: impl Into<String>) -> Self {
        Self::Opaque(label.into())
    }

    /// Returns whether null is an accepted value of this type.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Null | Self::Optional(_) => true,
            Self::Union(variants) => variants.iter().any(Self::is_nullable),
            Self::Literal(values) => values.iter().any(Value::is_null),
            _ => false,
        }
    }

    /// Returns whether a container without element types appears anywhere
    /// in this hint.
    #[must_use]
    pub fn contains_bare_generic(&self) -> bool {
        match self {
            Self::Array(None) | Self::Map { value: None, .. } => true,
            Self::Array(Some(item)) => item.contains_bare_generic(),
            Self::Map {
                key,
                value: Some(value),
            } => {
                key.as_deref().is_some_and(Self::contains_bare_generic)
                    || value.contains_bare_generic()
            }
            Self::Optional(inner) => inner.contains_bare_generic(),
            Self::Union(variants) => variants.iter().any(Self::contains_bare_generic),
            Self::Record(record) => record
                .fields
                .iter()
                .any(|field| field.hint.contains_bare_generic()),
            _ => false,
        }
    }
}

impl From<RecordDef> for TypeHint {
    fn from(record: RecordDef) -> Self {
        Self::Record(record)
    }
}

/// A record type with named fields, such as a struct or a typed dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDef {
    /// Type identity used by the cycle guard. Anonymous records are never
    /// considered recursive.
    pub name: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<RecordField>,
    /// Whether keys outside `fields` are rejected.
    pub closed: bool,
}

impl RecordDef {
    /// Creates an empty, open record with a type identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates an empty, open record without a type identity.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Adds a field. The field is required unless its type is nullable.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, hint: TypeHint) -> Self {
        let required = !hint.is_nullable();
        self.fields.push(RecordField {
            name: name.into(),
            hint,
            required,
        });
        self
    }

    /// Adds a field that may be omitted regardless of its type.
    #[must_use]
    pub fn optional_field(mut self, name: impl Into<String>, hint: TypeHint) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            hint,
            required: false,
        });
        self
    }

    /// Rejects keys outside the declared fields.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }
}

/// A single record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordField {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub hint: TypeHint,
    /// Whether the key must be present.
    pub required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullability() {
        assert!(TypeHint::Null.is_nullable());
        assert!(TypeHint::optional(TypeHint::Integer).is_nullable());
        assert!(TypeHint::union([TypeHint::String, TypeHint::Null]).is_nullable());
        assert!(!TypeHint::union([TypeHint::String, TypeHint::Integer]).is_nullable());
        assert!(!TypeHint::array(TypeHint::Null).is_nullable());
    }

    #[test]
    fn record_fields_default_to_required_unless_nullable() {
        let record = RecordDef::new("Movie")
            .field("title", TypeHint::String)
            .field("year", TypeHint::optional(TypeHint::Integer))
            .optional_field("rating", TypeHint::Number);

        let required: Vec<_> = record.fields.iter().map(|field| field.required).collect();
        assert_eq!(required, [true, false, false]);
    }

    #[test]
    fn bare_generics_are_found_at_any_depth() {
        assert!(TypeHint::bare_array().contains_bare_generic());
        assert!(TypeHint::bare_map().contains_bare_generic());
        assert!(TypeHint::optional(TypeHint::array(TypeHint::bare_map())).contains_bare_generic());
        assert!(
            TypeHint::Record(RecordDef::anonymous().field("tags", TypeHint::bare_array()))
                .contains_bare_generic()
        );
        assert!(!TypeHint::map(TypeHint::array(TypeHint::Integer)).contains_bare_generic());
    }
}
