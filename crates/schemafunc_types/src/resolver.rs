//! Type hint resolution.
//!
//! [`TypeResolver::resolve`] maps a [`TypeHint`] onto a [`TypeDescriptor`]:
//!
//! | Hint | Descriptor |
//! |------|------------|
//! | `Null`, scalars | `Primitive` |
//! | `Array(item)` | `Array(item)`, `Array(Unknown)` when untyped |
//! | `Map { String, V }` | `Object` with `additionalProperties: V` |
//! | `Optional(T)` | `T` |
//! | `Union` | `Union`, flattened and deduplicated |
//! | `Literal` | `Enum` |
//! | `Record` | `Object` |
//! | `Named` | the registered hint, `Unknown` when missing or recursive |
//! | `Any`, `Opaque` | `Unknown` |

use crate::descriptor::{AdditionalProperties, ObjectShape, PrimitiveKind, TypeDescriptor};
use crate::hint::{RecordDef, TypeHint};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;

/// Named type hints available to forward references.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeHint>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `hint` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, hint: impl Into<TypeHint>) {
        let name = name.into();
        if self.types.insert(name.clone(), hint.into()).is_some() {
            tracing::debug!(type_name = %name, "replaced registered type");
        }
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, hint: impl Into<TypeHint>) -> Self {
        self.register(name, hint);
        self
    }

    /// Returns the hint registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeHint> {
        self.types.get(name)
    }

    /// Returns whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }
}

/// Resolves type hints against a [`TypeRegistry`].
///
/// Resolution never fails. Shapes without a schema equivalent degrade to
/// [`TypeDescriptor::Unknown`] with a `warn` diagnostic; recursion is cut
/// with a `debug` diagnostic.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    registry: TypeRegistry,
}

impl TypeResolver {
    /// Creates a resolver with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver over an existing registry.
    #[must_use]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// The registry used for [`TypeHint::Named`] lookups.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Mutable access to the registry.
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Resolves `hint` starting from an empty resolution path.
    #[must_use]
    pub fn resolve_hint(&self, hint: &TypeHint) -> TypeDescriptor {
        self.resolve(hint, &mut HashSet::new())
    }

    /// Resolves `hint`.
    ///
    /// `seen` holds the type identities currently being expanded. Entries are
    /// removed again when their expansion finishes, so sibling references to
    /// the same type resolve normally and only true cycles are cut.
    pub fn resolve(&self, hint: &TypeHint, seen: &mut HashSet<String>) -> TypeDescriptor {
        match hint {
            TypeHint::Null => TypeDescriptor::Primitive(PrimitiveKind::Null),
            TypeHint::String => TypeDescriptor::Primitive(PrimitiveKind::String),
            TypeHint::Integer => TypeDescriptor::Primitive(PrimitiveKind::Integer),
            TypeHint::Number => TypeDescriptor::Primitive(PrimitiveKind::Number),
            TypeHint::Boolean => TypeDescriptor::Primitive(PrimitiveKind::Boolean),
            TypeHint::Any => TypeDescriptor::Unknown,
            TypeHint::Array(item) => {
                let item = match item {
                    Some(item) => self.resolve(item, seen),
                    None => TypeDescriptor::Unknown,
                };
                TypeDescriptor::Array(Box::new(item))
            }
            TypeHint::Map { key, value } => self.resolve_map(key.as_deref(), value.as_deref(), seen),
            TypeHint::Optional(_) | TypeHint::Union(_) => self.resolve_union(hint, seen),
            TypeHint::Literal(values) => resolve_literal(values),
            TypeHint::Record(record) => match &record.name {
                Some(name) => self.guarded(name, seen, |resolver, seen| {
                    resolver.resolve_record(record, seen)
                }),
                None => self.resolve_record(record, seen),
            },
            TypeHint::Named(name) => self.guarded(name, seen, |resolver, seen| {
                match resolver.registry.get(name) {
                    // The registered record shares the reference's identity.
                    Some(TypeHint::Record(record))
                        if record.name.as_deref().is_none_or(|own| own == name) =>
                    {
                        resolver.resolve_record(record, seen)
                    }
                    Some(registered) => resolver.resolve(registered, seen),
                    None => {
                        tracing::warn!(type_name = %name, "unresolved type reference");
                        TypeDescriptor::Unknown
                    }
                }
            }),
            TypeHint::Opaque(label) => {
                tracing::warn!(type_name = %label, "type has no schema equivalent");
                TypeDescriptor::Unknown
            }
        }
    }

    /// Expands `identity` once per resolution path.
    fn guarded(
        &self,
        identity: &str,
        seen: &mut HashSet<String>,
        expand: impl FnOnce(&Self, &mut HashSet<String>) -> TypeDescriptor,
    ) -> TypeDescriptor {
        if !seen.insert(identity.to_string()) {
            tracing::debug!(type_name = %identity, "recursive type reference cut");
            return TypeDescriptor::Unknown;
        }
        let descriptor = expand(self, seen);
        seen.remove(identity);
        descriptor
    }

    fn resolve_record(&self, record: &RecordDef, seen: &mut HashSet<String>) -> TypeDescriptor {
        let mut shape = ObjectShape::default();
        for field in &record.fields {
            let descriptor = self.resolve(&field.hint, seen);
            if shape.properties.insert(field.name.clone(), descriptor).is_some() {
                tracing::warn!(field = %field.name, "duplicate record field overrides earlier one");
                shape.required.retain(|name| name != &field.name);
            }
            if field.required {
                shape.required.push(field.name.clone());
            }
        }
        if record.closed {
            shape.additional_properties = Some(AdditionalProperties::Forbidden);
        }
        TypeDescriptor::Object(shape)
    }

    fn resolve_map(
        &self,
        key: Option<&TypeHint>,
        value: Option<&TypeHint>,
        seen: &mut HashSet<String>,
    ) -> TypeDescriptor {
        if let Some(key) = key
            && !is_string_key(key)
        {
            tracing::warn!(key = ?key, "mapping keys must be strings");
            return TypeDescriptor::Unknown;
        }
        let additional_properties = value
            .map(|value| AdditionalProperties::Schema(Box::new(self.resolve(value, seen))));
        TypeDescriptor::Object(ObjectShape {
            additional_properties,
            ..ObjectShape::default()
        })
    }

    fn resolve_union(&self, hint: &TypeHint, seen: &mut HashSet<String>) -> TypeDescriptor {
        let mut members = Vec::new();
        flatten_union(hint, &mut members);

        let non_null = members
            .iter()
            .filter(|member| !matches!(member, TypeHint::Null))
            .count();
        match non_null {
            0 if members.is_empty() => {
                tracing::warn!("empty union");
                return TypeDescriptor::Unknown;
            }
            0 => return TypeDescriptor::Primitive(PrimitiveKind::Null),
            1 => {
                if let Some(member) = members.iter().find(|member| !matches!(member, TypeHint::Null)) {
                    return self.resolve(member, seen);
                }
            }
            _ => {}
        }

        let mut variants: Vec<TypeDescriptor> = Vec::new();
        for member in members {
            match self.resolve(member, seen) {
                TypeDescriptor::Union(nested) => {
                    for variant in nested {
                        push_unique(&mut variants, variant);
                    }
                }
                variant => push_unique(&mut variants, variant),
            }
        }

        if variants.iter().any(TypeDescriptor::is_unknown) {
            return TypeDescriptor::Unknown;
        }
        if variants.len() == 1 {
            return variants.pop().unwrap_or_default();
        }
        TypeDescriptor::Union(variants)
    }
}

static NULL: TypeHint = TypeHint::Null;

fn flatten_union<'a>(hint: &'a TypeHint, members: &mut Vec<&'a TypeHint>) {
    match hint {
        TypeHint::Optional(inner) => {
            flatten_union(inner, members);
            members.push(&NULL);
        }
        TypeHint::Union(variants) => {
            for variant in variants {
                flatten_union(variant, members);
            }
        }
        other => members.push(other),
    }
}

fn push_unique(variants: &mut Vec<TypeDescriptor>, variant: TypeDescriptor) {
    if !variants.contains(&variant) {
        variants.push(variant);
    }
}

fn is_string_key(key: &TypeHint) -> bool {
    match key {
        TypeHint::String | TypeHint::Any => true,
        TypeHint::Literal(values) => values.iter().all(Value::is_string),
        _ => false,
    }
}

fn resolve_literal(values: &[Value]) -> TypeDescriptor {
    if values.is_empty() {
        tracing::warn!("literal without values");
        return TypeDescriptor::Unknown;
    }
    if let Some(value) = values.iter().find(|value| value.is_array() || value.is_object()) {
        tracing::warn!(value = %value, "literal values must be scalars");
        return TypeDescriptor::Unknown;
    }
    let mut unique: Vec<Value> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    }
    TypeDescriptor::Enum(unique)
}
