//! Schema generation for schemafunc.
//!
//! Combines the docstring extractor and the type resolver: every parameter
//! of a [`FunctionSignature`] is resolved to a JSON Schema node, annotated
//! with its documented description and default, and collected into a
//! [`SchemaDocument`].
//!
//! # Example
//!
//! ```
//! use schemafunc_schema::{FunctionSignature, Parameter, SchemaGenerator};
//! use schemafunc_types::TypeHint;
//!
//! let signature = FunctionSignature::new("f")
//!     .with_docstring("Does X.\n:param foo: A string.\n:param bar: An integer.")
//!     .with_parameter(Parameter::new("foo", TypeHint::String))
//!     .with_parameter(Parameter::new("bar", TypeHint::Integer).with_default(&5));
//!
//! let document = SchemaGenerator::new().generate(&signature).unwrap();
//!
//! assert_eq!(document.description, "Does X.");
//! assert_eq!(
//!     document.to_json(),
//!     serde_json::json!({
//!         "type": "object",
//!         "properties": {
//!             "foo": {"type": "string", "description": "A string."},
//!             "bar": {"type": "integer", "description": "An integer.", "default": 5}
//!         },
//!         "required": ["foo"]
//!     })
//! );
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod options;
pub mod schema;
pub mod signature;

pub use builder::SchemaBuilder;
pub use error::SchemaError;
pub use generator::SchemaGenerator;
pub use options::{DescriptionMode, SchemaOptions};
pub use schema::{ParameterInfo, SchemaDocument};
pub use signature::{FunctionSignature, Parameter};
