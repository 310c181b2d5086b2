//! End-to-end schema generation for a [`FunctionSignature`].

use crate::builder::SchemaBuilder;
use crate::error::SchemaError;
use crate::options::SchemaOptions;
use crate::schema::SchemaDocument;
use crate::signature::FunctionSignature;
use schemafunc_docs::DocModel;
use schemafunc_types::{TypeHint, TypeResolver};

/// Options plus a type resolver.
///
/// A generator is immutable while generating; register named types up
/// front with [`register_type`](Self::register_type).
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    options: SchemaOptions,
    resolver: TypeResolver,
}

impl SchemaGenerator {
    /// Creates a generator with default options and an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Registers a named type for [`TypeHint::Named`] references.
    pub fn register_type(&mut self, name: impl Into<String>, hint: impl Into<TypeHint>) {
        self.resolver.registry_mut().register(name, hint);
    }

    /// Generates the schema document for `signature`.
    ///
    /// # Errors
    ///
    /// Malformed metadata fails with [`SchemaError::Inspection`] or
    /// [`SchemaError::InvalidSignature`]. The docstring checks enabled in
    /// [`SchemaOptions`] fail with their own variants.
    pub fn generate(&self, signature: &FunctionSignature) -> Result<SchemaDocument, SchemaError> {
        signature.validate()?;

        let names: Vec<&str> = signature
            .parameters
            .iter()
            .map(|param| param.name.as_str())
            .filter(|name| !self.options.is_ignored(name))
            .collect();

        let docstring = signature.docstring();
        if docstring.is_none() && self.options.requires_docstring() {
            return Err(SchemaError::no_docstring(&signature.name));
        }
        let doc = DocModel::extract(docstring.unwrap_or_default(), &names);
        self.check_doc(signature, &doc, &names)?;

        let document = SchemaBuilder::new(&self.resolver, &self.options)
            .build(&signature.parameters, &doc)?;
        tracing::debug!(
            function = %signature.name,
            style = ?doc.style,
            properties = document.properties().len(),
            required = document.required().len(),
            "schema generated"
        );
        Ok(document)
    }

    fn check_doc(
        &self,
        signature: &FunctionSignature,
        doc: &DocModel,
        names: &[&str],
    ) -> Result<(), SchemaError> {
        if self.options.require_short_description && doc.summary.is_empty() {
            return Err(SchemaError::no_short_description(&signature.name));
        }

        if self.options.require_all_params_in_doc {
            let parameters: Vec<String> = names
                .iter()
                .filter(|name| !doc.is_documented(name))
                .map(ToString::to_string)
                .collect();
            if !parameters.is_empty() {
                return Err(SchemaError::ParameterNotDocumented { parameters });
            }
        }

        if self.options.require_descriptions_for_params {
            let parameters: Vec<String> = names
                .iter()
                .filter(|name| doc.is_documented(name))
                .filter(|name| doc.parameter_description(name).is_none_or(str::is_empty))
                .map(ToString::to_string)
                .collect();
            if !parameters.is_empty() {
                return Err(SchemaError::ParameterMissingDescription { parameters });
            }
        }

        Ok(())
    }
}
