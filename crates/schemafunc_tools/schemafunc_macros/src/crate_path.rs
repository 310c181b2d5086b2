//! Auto-detection of the `schemafunc_tools` path for generated code.
//!
//! Crates that depend on `schemafunc_tools` directly get direct paths.
//! Crates that depend on the `schemafunc` umbrella crate instead are routed
//! through `schemafunc::schemafunc_tools`.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

const TOOLS_CRATE: &str = "schemafunc_tools";
const UMBRELLA_CRATE: &str = "schemafunc";

/// Returns the token path to `schemafunc_tools`.
///
/// Resolution order:
/// 1. Direct dependency (possibly renamed in `Cargo.toml`).
/// 2. The umbrella crate (`schemafunc::schemafunc_tools`).
/// 3. The literal crate name, so the compile error names the missing dependency.
pub(crate) fn tools_path() -> TokenStream {
    let tools = format_ident!("{}", TOOLS_CRATE);
    match crate_name(TOOLS_CRATE) {
        Ok(FoundCrate::Itself) => quote!(#tools),
        Ok(FoundCrate::Name(found)) => {
            let ident = format_ident!("{}", found);
            quote!(#ident)
        }
        Err(_) => match crate_name(UMBRELLA_CRATE) {
            Ok(FoundCrate::Name(found)) => {
                let umbrella = format_ident!("{}", found);
                quote!(#umbrella::#tools)
            }
            Ok(FoundCrate::Itself) => {
                let umbrella = format_ident!("{}", UMBRELLA_CRATE);
                quote!(#umbrella::#tools)
            }
            Err(_) => quote!(#tools),
        },
    }
}
