//! Procedural macros for schemafunc.
//!
//! Provides `#[schemafunc]`, which describes a function's name, doc
//! comments and parameters as a `FunctionSignature`.

mod common;
mod crate_path;
mod signature_fn;

use proc_macro::TokenStream;

/// Generates a `<name>_signature()` constructor next to a function.
///
/// The function itself is emitted unchanged apart from the helper
/// attributes. Its doc comments become the docstring and each parameter's
/// type hint is derived from its `schemars::JsonSchema` implementation.
///
/// # Parameter Attributes
///
/// - `#[default(value)]`: the parameter is optional and `value` is embedded as its default
/// - `#[default]`: the parameter is optional, no default is embedded
/// - `#[hint(expr)]`: use the `TypeHint` expression instead of the parameter type
///
/// Parameters of type `impl Trait` without a `#[hint]` are left untyped.
///
/// # Example
///
/// ```
/// use schemafunc_tools::{SchemaGenerator, TypeHint, schemafunc};
///
/// /// Search for documents.
/// ///
/// /// :param query: The search query.
/// /// :param limit: Max results to return.
/// #[schemafunc]
/// fn search(query: &str, #[default(10)] limit: usize) -> Vec<String> {
///     vec![format!("{query}: {limit}")]
/// }
///
/// let document = SchemaGenerator::new().generate(&search_signature()).unwrap();
/// assert_eq!(document.required(), ["query"]);
/// assert_eq!(document.properties()["limit"]["default"], 10);
/// ```
#[proc_macro_attribute]
pub fn schemafunc(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[schemafunc] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    signature_fn::generate_signature_fn(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
