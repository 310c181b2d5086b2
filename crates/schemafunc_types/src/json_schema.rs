//! Bridge from `schemars` / JSON Schema to [`TypeHint`].

use crate::hint::{RecordDef, RecordField, TypeHint};
use schemars::{JsonSchema, SchemaGenerator};
use serde_json::{Map, Value};

impl TypeHint {
    /// Derives a hint from a type's `schemars` schema.
    ///
    /// ```
    /// use schemafunc_types::TypeHint;
    ///
    /// assert_eq!(TypeHint::of::<Vec<String>>(), TypeHint::array(TypeHint::String));
    /// ```
    #[must_use]
    pub fn of<T: JsonSchema + ?Sized>() -> Self {
        let schema = SchemaGenerator::default().into_root_schema_for::<T>();
        Self::from_json_schema(schema.as_value())
    }

    /// Reads a hint from a JSON Schema document.
    ///
    /// `$ref`s into `$defs` or `definitions` are inlined. A reference back
    /// into a definition that is already being expanded becomes
    /// [`TypeHint::Named`], which the resolver treats as a cycle.
    #[must_use]
    pub fn from_json_schema(schema: &Value) -> Self {
        let mut reader = SchemaReader::new(schema);
        match reader.root_name.clone() {
            Some(name) => {
                reader.stack.push(name);
                let hint = reader.read(schema);
                reader.stack.pop();
                hint
            }
            None => reader.read(schema),
        }
    }
}

struct SchemaReader<'a> {
    root: &'a Value,
    root_name: Option<String>,
    stack: Vec<String>,
}

impl<'a> SchemaReader<'a> {
    fn new(root: &'a Value) -> Self {
        let root_name = root
            .get("title")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        Self {
            root,
            root_name,
            stack: Vec::new(),
        }
    }

    fn read(&mut self, schema: &'a Value) -> TypeHint {
        let node = match schema {
            Value::Bool(true) => return TypeHint::Any,
            Value::Bool(false) => return TypeHint::opaque("never"),
            Value::Object(node) => node,
            _ => {
                tracing::warn!(schema = %schema, "schema is not an object");
                return TypeHint::Any;
            }
        };

        if let Some(reference) = node.get("$ref").and_then(Value::as_str) {
            return self.read_ref(reference);
        }
        if let Some(value) = node.get("const") {
            return TypeHint::Literal(vec![value.clone()]);
        }
        if let Some(values) = node.get("enum").and_then(Value::as_array) {
            return TypeHint::Literal(values.clone());
        }
        if let Some(variants) = node
            .get("anyOf")
            .or_else(|| node.get("oneOf"))
            .and_then(Value::as_array)
        {
            return self.read_alternatives(variants);
        }
        if let Some(parts) = node.get("allOf").and_then(Value::as_array) {
            return match parts.as_slice() {
                [single] => self.read(single),
                _ => {
                    tracing::warn!("allOf with several parts is not supported");
                    TypeHint::opaque("allOf")
                }
            };
        }

        match node.get("type") {
            Some(Value::String(kind)) => self.read_typed(node, kind),
            Some(Value::Array(kinds)) => {
                let variants: Vec<TypeHint> = kinds
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|kind| self.read_typed(node, kind))
                    .collect();
                match <[TypeHint; 1]>::try_from(variants) {
                    Ok([single]) => single,
                    Err(variants) => TypeHint::Union(variants),
                }
            }
            _ if node.contains_key("properties") => self.read_typed(node, "object"),
            _ if node.contains_key("items") => self.read_typed(node, "array"),
            _ => TypeHint::Any,
        }
    }

    fn read_ref(&mut self, reference: &str) -> TypeHint {
        let root = self.root;
        if reference == "#" {
            let name = self.root_name.clone().unwrap_or_else(|| "#".to_string());
            return self.expand(name, root);
        }

        let name = reference
            .rsplit('/')
            .next()
            .unwrap_or(reference)
            .replace("~1", "/")
            .replace("~0", "~");
        let definition = ["$defs", "definitions"].iter().find_map(|section| {
            let prefix = format!("#/{section}/");
            reference
                .starts_with(&prefix)
                .then(|| root.get(*section).and_then(|defs| defs.get(&name)))
                .flatten()
        });

        match definition {
            Some(definition) => self.expand(name, definition),
            None => TypeHint::Named(name),
        }
    }

    /// Inlines a definition unless it is already being expanded.
    fn expand(&mut self, name: String, definition: &'a Value) -> TypeHint {
        if self.stack.contains(&name) {
            return TypeHint::Named(name);
        }
        self.stack.push(name.clone());
        let mut hint = self.read(definition);
        self.stack.pop();

        if let TypeHint::Record(record) = &mut hint {
            record.name = Some(name);
        }
        hint
    }

    fn read_alternatives(&mut self, variants: &'a [Value]) -> TypeHint {
        let mut hints: Vec<TypeHint> = variants.iter().map(|variant| self.read(variant)).collect();
        if hints.len() == 1 {
            return hints.remove(0);
        }
        if !hints.is_empty() && hints.iter().all(|hint| matches!(hint, TypeHint::Literal(_))) {
            let values = hints
                .into_iter()
                .flat_map(|hint| match hint {
                    TypeHint::Literal(values) => values,
                    _ => Vec::new(),
                })
                .collect();
            return TypeHint::Literal(values);
        }
        TypeHint::Union(hints)
    }

    fn read_typed(&mut self, node: &'a Map<String, Value>, kind: &str) -> TypeHint {
        match kind {
            "null" => TypeHint::Null,
            "string" => TypeHint::String,
            "integer" => TypeHint::Integer,
            "number" => TypeHint::Number,
            "boolean" => TypeHint::Boolean,
            "array" => self.read_array(node),
            "object" => self.read_object(node),
            other => {
                tracing::warn!(kind = %other, "unknown JSON Schema type");
                TypeHint::opaque(other)
            }
        }
    }

    fn read_array(&mut self, node: &'a Map<String, Value>) -> TypeHint {
        if let Some(items) = node.get("items")
            && (items.is_object() || items == &Value::Bool(true))
        {
            return TypeHint::array(self.read(items));
        }
        if let Some(prefix) = node.get("prefixItems").and_then(Value::as_array) {
            let mut hints: Vec<TypeHint> = prefix.iter().map(|item| self.read(item)).collect();
            let Some(last) = hints.pop() else {
                return TypeHint::bare_array();
            };
            if hints.iter().all(|hint| hint == &last) {
                return TypeHint::array(last);
            }
            tracing::warn!("heterogeneous tuples are not supported");
            return TypeHint::opaque("tuple");
        }
        TypeHint::bare_array()
    }

    fn read_object(&mut self, node: &'a Map<String, Value>) -> TypeHint {
        let additional = node.get("additionalProperties");

        if let Some(properties) = node.get("properties").and_then(Value::as_object) {
            let required: Vec<&str> = node
                .get("required")
                .and_then(Value::as_array)
                .map(|names| names.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            let fields = properties
                .iter()
                .map(|(name, schema)| RecordField {
                    name: name.clone(),
                    hint: self.read(schema),
                    required: required.contains(&name.as_str()),
                })
                .collect();
            return TypeHint::Record(RecordDef {
                name: node.get("title").and_then(Value::as_str).map(ToString::to_string),
                fields,
                closed: matches!(additional, Some(Value::Bool(false))),
            });
        }

        match additional {
            Some(Value::Bool(false)) => TypeHint::Record(RecordDef::anonymous().closed(true)),
            Some(value @ (Value::Object(_) | Value::Bool(true))) => TypeHint::map(self.read(value)),
            _ => TypeHint::bare_map(),
        }
    }
}
