//! Code generation for `#[schemafunc]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{FnArg, ItemFn};

use crate::common::{
    DefaultValue, ParamInfo, clean_param, erase_lifetimes, extract_doc_comments, parse_param,
    schema_type, validate_signature,
};
use crate::crate_path::tools_path;

/// Emits the function unchanged (minus helper attributes) followed by a
/// `<name>_signature()` constructor describing it.
pub(crate) fn generate_signature_fn(input: &ItemFn) -> syn::Result<TokenStream> {
    validate_signature(&input.sig)?;

    let mut params = Vec::new();
    for arg in &input.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            params.push(parse_param(pat_type)?);
        }
    }

    let st = tools_path();
    let fn_name = &input.sig.ident;
    let fn_name_str = fn_name.unraw().to_string();
    let signature_fn = format_ident!("{}_signature", fn_name);

    let docstring = extract_doc_comments(&input.attrs)
        .map(|doc| quote! { .with_docstring(#doc) })
        .unwrap_or_default();
    let parameters: Vec<_> = params.iter().map(|param| parameter_expr(param, &st)).collect();

    let mut cleaned = input.clone();
    for arg in &mut cleaned.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            *pat_type = clean_param(pat_type);
        }
    }

    let vis = &input.vis;
    let doc = format!("Returns the schema signature of [`{fn_name_str}`].");

    Ok(quote! {
        #cleaned

        #[doc = #doc]
        #[must_use]
        #vis fn #signature_fn() -> #st::FunctionSignature {
            #st::FunctionSignature::new(#fn_name_str)
                #docstring
                #(
                    .with_parameter(#parameters)
                )*
        }
    })
}

fn parameter_expr(param: &ParamInfo, st: &TokenStream) -> TokenStream {
    let name = &param.name;
    let base = match (&param.hint, schema_type(&param.ty)) {
        (Some(hint), _) => quote! { #st::Parameter::new(#name, #hint) },
        (None, Some(ty)) => {
            let ty = erase_lifetimes(ty);
            quote! { #st::Parameter::new(#name, #st::TypeHint::of::<#ty>()) }
        }
        (None, None) => quote! { #st::Parameter::untyped(#name) },
    };
    match &param.default {
        Some(DefaultValue::Value(expr)) => quote! { #base.with_default(&(#expr)) },
        Some(DefaultValue::Unspecified) => quote! { #base.defaulted() },
        None => base,
    }
}
