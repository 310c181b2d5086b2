//! Type hint resolution for schemafunc.
//!
//! A [`TypeHint`] describes the declared type of a parameter: scalars,
//! containers, optionals, unions, literals, records and forward references.
//! The [`TypeResolver`] turns a hint into a [`TypeDescriptor`], a closed set
//! of shapes each of which renders as exactly one JSON Schema node.
//!
//! Resolution is permissive. Hints it cannot express (opaque types,
//! unresolved forward references, recursive self-references) become
//! [`TypeDescriptor::Unknown`], which renders as the unconstrained schema
//! `{}`, and a `tracing` diagnostic is emitted instead of an error.
//!
//! # Architecture
//!
//! - [`TypeHint`] / [`RecordDef`]: caller-supplied type descriptions
//! - [`TypeDescriptor`] / [`ObjectShape`]: normalized, JSON-Schema-shaped result
//! - [`TypeResolver`] / [`TypeRegistry`]: resolution with named types and a cycle guard
//! - [`TypeHint::of`]: derives a hint from any `schemars::JsonSchema` type
//!
//! # Example
//!
//! ```
//! use schemafunc_types::{TypeHint, TypeResolver};
//!
//! let resolver = TypeResolver::new();
//! let descriptor = resolver.resolve_hint(&TypeHint::array(TypeHint::String));
//!
//! assert_eq!(
//!     descriptor.to_json_schema(),
//!     serde_json::json!({"type": "array", "items": {"type": "string"}})
//! );
//! ```

pub mod descriptor;
pub mod hint;
pub mod json_schema;
pub mod resolver;

pub use descriptor::{AdditionalProperties, ObjectShape, PrimitiveKind, TypeDescriptor};
pub use hint::{RecordDef, RecordField, TypeHint};
pub use resolver::{TypeRegistry, TypeResolver};
