//! Assembles a [`SchemaDocument`] from parameters and a doc model.

use crate::error::SchemaError;
use crate::options::{DescriptionMode, SchemaOptions};
use crate::schema::{ParameterInfo, SchemaDocument};
use crate::signature::{Parameter, check_unique};
use schemafunc_docs::DocModel;
use schemafunc_types::{TypeDescriptor, TypeResolver};

/// Walks a parameter list, resolving each type and attaching its docs.
#[derive(Debug, Clone, Copy)]
pub struct SchemaBuilder<'a> {
    resolver: &'a TypeResolver,
    options: &'a SchemaOptions,
}

impl<'a> SchemaBuilder<'a> {
    /// Creates a builder over a resolver and options.
    #[must_use]
    pub fn new(resolver: &'a TypeResolver, options: &'a SchemaOptions) -> Self {
        Self { resolver, options }
    }

    /// Builds the document.
    ///
    /// Parameters keep declaration order. A parameter is required exactly
    /// when it has no default, whatever its type. Ignored parameters are
    /// skipped entirely.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidSignature`] on duplicate names and
    /// [`SchemaError::BareGenericType`] for untyped containers when they
    /// are disallowed.
    pub fn build(
        &self,
        parameters: &[Parameter],
        doc: &DocModel,
    ) -> Result<SchemaDocument, SchemaError> {
        check_unique(parameters)?;

        let description = match self.options.description_mode {
            DescriptionMode::Summary => &doc.summary,
            DescriptionMode::Full => &doc.description,
        };
        let mut document = SchemaDocument::new(description.trim());

        for param in parameters {
            if self.options.is_ignored(&param.name) {
                continue;
            }
            document.push(self.parameter_info(param, doc)?);
        }
        Ok(document)
    }

    fn parameter_info(
        &self,
        param: &Parameter,
        doc: &DocModel,
    ) -> Result<ParameterInfo, SchemaError> {
        let descriptor = match &param.hint {
            Some(hint) => {
                if !self.options.allow_bare_generic_types && hint.contains_bare_generic() {
                    return Err(SchemaError::bare_generic_type(&param.name));
                }
                self.resolver.resolve_hint(hint)
            }
            None => {
                tracing::debug!(parameter = %param.name, "parameter has no type hint");
                TypeDescriptor::Unknown
            }
        };

        let mut info = ParameterInfo::new(&param.name, descriptor);
        if let Some(description) = doc.parameter_description(&param.name)
            && !description.is_empty()
        {
            info = info.with_description(description);
        }
        if param.has_default {
            let default = param
                .default_value
                .clone()
                .filter(|value| !value.is_null() || self.options.embed_null_defaults);
            info = info.with_default(default);
        }
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemafunc_types::TypeHint;
    use serde_json::json;

    fn build(parameters: &[Parameter], doc: &DocModel, options: &SchemaOptions) -> SchemaDocument {
        let resolver = TypeResolver::new();
        SchemaBuilder::new(&resolver, options).build(parameters, doc).unwrap()
    }

    #[test]
    fn missing_hint_is_unknown() {
        let document = build(
            &[Parameter::untyped("anything")],
            &DocModel::default(),
            &SchemaOptions::default(),
        );
        assert_eq!(document.properties()["anything"], json!({}));
        assert_eq!(document.required(), ["anything"]);
    }

    #[test]
    fn optional_type_without_default_stays_required() {
        let document = build(
            &[Parameter::new("limit", TypeHint::optional(TypeHint::Integer))],
            &DocModel::default(),
            &SchemaOptions::default(),
        );
        assert_eq!(document.properties()["limit"], json!({"type": "integer"}));
        assert_eq!(document.required(), ["limit"]);
    }

    #[test]
    fn null_defaults_are_omitted_unless_requested() {
        let params = [Parameter::new("unit", TypeHint::optional(TypeHint::String)).with_default(&None::<String>)];

        let document = build(&params, &DocModel::default(), &SchemaOptions::default());
        assert_eq!(document.properties()["unit"], json!({"type": "string"}));
        assert!(document.required().is_empty());

        let options = SchemaOptions::default().with_embed_null_defaults(true);
        let document = build(&params, &DocModel::default(), &options);
        assert_eq!(document.properties()["unit"], json!({"type": "string", "default": null}));
    }

    #[test]
    fn ignored_parameters_are_skipped() {
        let params = [
            Parameter::untyped("ctx"),
            Parameter::new("query", TypeHint::String),
        ];
        let options = SchemaOptions::default().with_ignored_arg("ctx");
        let document = build(&params, &DocModel::default(), &options);
        assert_eq!(document.properties().keys().collect::<Vec<_>>(), ["query"]);
        assert_eq!(document.required(), ["query"]);
    }

    #[test]
    fn description_mode_selects_prose() {
        let doc = DocModel::extract("Get weather.\n\nUses the API.\n\n:param city: City.", &["city"]);
        let params = [Parameter::new("city", TypeHint::String)];

        let document = build(&params, &doc, &SchemaOptions::default());
        assert_eq!(document.description, "Get weather.");

        let options = SchemaOptions::default().with_description_mode(DescriptionMode::Full);
        let document = build(&params, &doc, &options);
        assert_eq!(document.description, "Get weather.\n\nUses the API.");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let resolver = TypeResolver::new();
        let options = SchemaOptions::default();
        let result = SchemaBuilder::new(&resolver, &options).build(
            &[Parameter::untyped("a"), Parameter::untyped("a")],
            &DocModel::default(),
        );
        assert!(matches!(result, Err(SchemaError::InvalidSignature(_))));
    }

    #[test]
    fn bare_generics_can_be_rejected() {
        let resolver = TypeResolver::new();
        let params = [Parameter::new("items", TypeHint::bare_array())];

        let lenient = SchemaOptions::default();
        let document = SchemaBuilder::new(&resolver, &lenient)
            .build(&params, &DocModel::default())
            .unwrap();
        assert_eq!(document.properties()["items"], json!({"type": "array", "items": {}}));

        let strict = SchemaOptions::default().with_allow_bare_generic_types(false);
        assert_eq!(
            SchemaBuilder::new(&resolver, &strict).build(&params, &DocModel::default()),
            Err(SchemaError::bare_generic_type("items"))
        );
    }
}
