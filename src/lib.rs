//! Generate LLM tool-calling JSON schemas from Rust function signatures
//! and their doc comments.
//!
//! ```
//! use schemafunc::prelude::*;
//!
//! /// Does X.
//! /// :param foo: A string.
//! /// :param bar: An integer.
//! #[schemafunc]
//! fn f(foo: String, #[default(5)] bar: i64) -> String {
//!     format!("{foo}{bar}")
//! }
//!
//! let envelope = generate_schema(&f_signature()).unwrap();
//! assert_eq!(envelope.function.description, "Does X.");
//! assert_eq!(envelope.to_json()["function"]["parameters"]["required"], serde_json::json!(["foo"]));
//! ```

pub use schemafunc_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use schemafunc_internal::prelude::*;
}
