//! Docstring extraction for schemafunc.
//!
//! Turns the raw documentation text attached to a callable into a
//! [`DocModel`]: a summary line, the leading prose, per-parameter
//! descriptions and an optional return description.
//!
//! Three conventions are recognized, each implemented as an independent,
//! stateless [`DocStrategy`]:
//!
//! - [`DocStyle::Tag`]: `:param name: text` / `:returns: text`
//! - [`DocStyle::Table`]: NumPy-style underlined sections
//!   (`name : type` + indented text) and pipe tables with
//!   name/type/description columns
//! - [`DocStyle::Section`]: `Args:` / `Parameters:` headers followed by
//!   `name: text` or `name (type): text` lines
//!
//! The convention is picked by a cheap marker scan. When markers of several
//! conventions are present, the tag style wins, then the table style, then
//! the section style. Extraction never fails: text that matches no
//! convention becomes summary-only.
//!
//! # Example
//!
//! ```
//! use schemafunc_docs::{DocModel, DocStyle};
//!
//! let doc = DocModel::extract(
//!     "Does X.\n:param foo: A string.\n:param bar: An integer.",
//!     &["foo", "bar"],
//! );
//!
//! assert_eq!(doc.summary, "Does X.");
//! assert_eq!(doc.style, Some(DocStyle::Tag));
//! assert_eq!(doc.parameter_description("foo"), Some("A string."));
//! assert_eq!(doc.parameter_description("bar"), Some("An integer."));
//! ```

mod model;
mod section;
mod strategy;
mod table;
mod tag;
mod text;

pub use model::{DocModel, DocParam, DocStyle};
pub use section::SectionStyle;
pub use strategy::{DocStrategy, STRATEGIES};
pub use table::TableStyle;
pub use tag::TagStyle;
pub use text::{CleanDoc, is_identifier};

/// Extracts a [`DocModel`] from raw docstring text.
///
/// Only entries whose names appear in `parameter_names` are kept; matching
/// is exact and case-sensitive.
#[must_use]
pub fn extract(raw: &str, parameter_names: &[&str]) -> DocModel {
    DocModel::extract(raw, parameter_names)
}
