//! Parsing helpers for `#[schemafunc]`.

use proc_macro2::TokenStream;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::visit_mut::VisitMut;
use syn::{
    Attribute, Expr, ExprLit, FnArg, GenericParam, Lifetime, Lit, Meta, Pat, PatType, Signature,
    Type,
};

/// Helper attributes consumed by the macro and removed from the output.
const HELPER_ATTRS: &[&str] = &["default", "hint"];

/// Rejects signatures that cannot be described as a tool.
pub(crate) fn validate_signature(sig: &Signature) -> syn::Result<()> {
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new_spanned(
            receiver,
            "#[schemafunc] cannot be applied to methods with a `self` receiver",
        ));
    }
    // Lifetimes are fine; schema types are emitted with them erased.
    if let Some(param) = sig
        .generics
        .params
        .iter()
        .find(|param| !matches!(param, GenericParam::Lifetime(_)))
    {
        return Err(syn::Error::new_spanned(
            param,
            "#[schemafunc] does not support type or const generic parameters",
        ));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new_spanned(
            variadic,
            "#[schemafunc] does not support variadic functions",
        ));
    }
    Ok(())
}

/// The default declared for a parameter.
#[derive(Debug, Clone)]
pub(crate) enum DefaultValue {
    /// `#[default(expr)]`: optional, with an embedded value.
    Value(TokenStream),
    /// `#[default]`: optional, value not embedded.
    Unspecified,
}

/// Parsed information about a single function parameter.
#[derive(Debug, Clone)]
pub(crate) struct ParamInfo {
    /// Parameter name, without any `r#` prefix.
    pub name: String,
    /// Declared type.
    pub ty: Type,
    /// Default from `#[default]` / `#[default(expr)]`.
    pub default: Option<DefaultValue>,
    /// Explicit type hint from `#[hint(expr)]`.
    pub hint: Option<Expr>,
}

/// Joins `///` lines into docstring text.
///
/// Each line loses the single space that follows `///`; deeper indentation
/// is kept so indented docstring blocks survive.
pub(crate) fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let mut docs = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("doc")
            && let Meta::NameValue(meta) = &attr.meta
            && let Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = &meta.value
        {
            let value = lit_str.value();
            for line in value.split('\n') {
                let line = line.strip_prefix(' ').unwrap_or(line);
                docs.push(line.trim_end().to_string());
            }
        }
    }

    if docs.iter().all(String::is_empty) {
        None
    } else {
        Some(docs.join("\n"))
    }
}

/// Parses a typed function parameter into a [`ParamInfo`].
pub(crate) fn parse_param(pat_type: &PatType) -> syn::Result<ParamInfo> {
    let Pat::Ident(pat_ident) = &*pat_type.pat else {
        return Err(syn::Error::new(
            pat_type.pat.span(),
            "#[schemafunc] parameters must be plain identifiers",
        ));
    };

    Ok(ParamInfo {
        name: pat_ident.ident.unraw().to_string(),
        ty: (*pat_type.ty).clone(),
        default: extract_default(&pat_type.attrs)?,
        hint: extract_hint(&pat_type.attrs)?,
    })
}

fn extract_default(attrs: &[Attribute]) -> syn::Result<Option<DefaultValue>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("default")) else {
        return Ok(None);
    };
    match &attr.meta {
        Meta::Path(_) => Ok(Some(DefaultValue::Unspecified)),
        Meta::List(list) => {
            list.parse_args::<Expr>()?;
            Ok(Some(DefaultValue::Value(list.tokens.clone())))
        }
        Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[default]` or `#[default(expr)]`",
        )),
    }
}

fn extract_hint(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("hint"))
        .map(Attribute::parse_args::<Expr>)
        .transpose()
}

/// Returns a copy of the parameter without macro helper attributes.
pub(crate) fn clean_param(pat_type: &PatType) -> PatType {
    let mut cleaned = pat_type.clone();
    cleaned
        .attrs
        .retain(|attr| !HELPER_ATTRS.iter().any(|name| attr.path().is_ident(name)));
    cleaned
}

/// The type whose schema describes the parameter: references are looked
/// through, `impl Trait` has none.
pub(crate) fn schema_type(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Reference(reference) => schema_type(&reference.elem),
        Type::Paren(paren) => schema_type(&paren.elem),
        Type::Group(group) => schema_type(&group.elem),
        Type::ImplTrait(_) | Type::Infer(_) => None,
        other => Some(other),
    }
}

/// Replaces every lifetime in `ty` with `'static`, so the type can be
/// named outside the function's generics.
pub(crate) fn erase_lifetimes(ty: &Type) -> Type {
    struct Eraser;

    impl VisitMut for Eraser {
        fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
            *lifetime = Lifetime::new("'static", lifetime.span());
        }
    }

    let mut erased = ty.clone();
    Eraser.visit_type_mut(&mut erased);
    erased
}
