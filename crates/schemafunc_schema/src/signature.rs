//! Callable metadata: the input to schema generation.

use crate::error::SchemaError;
use schemafunc_docs::is_identifier;
use schemafunc_types::TypeHint;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// A single declared parameter of a callable.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type. `None` when the parameter is unannotated.
    pub hint: Option<TypeHint>,
    /// Whether the callable supplies a value when the caller omits it.
    pub has_default: bool,
    /// The default value when it is known and serializable.
    pub default_value: Option<Value>,
}

impl Parameter {
    /// Creates a required parameter with a type hint.
    pub fn new(name: impl Into<String>, hint: TypeHint) -> Self {
        Self {
            name: name.into(),
            hint: Some(hint),
            has_default: false,
            default_value: None,
        }
    }

    /// Creates a required parameter without a type hint.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hint: None,
            has_default: false,
            default_value: None,
        }
    }

    /// Sets the type hint.
    #[must_use]
    pub fn with_hint(mut self, hint: TypeHint) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Gives the parameter a default value.
    ///
    /// A value that fails to serialize still makes the parameter optional;
    /// it is simply not embedded in the schema.
    #[must_use]
    pub fn with_default<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.has_default = true;
        self.default_value = match serde_json::to_value(value) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(parameter = %self.name, error = %err, "default value is not serializable");
                None
            }
        };
        self
    }

    /// Marks the parameter as having a default whose value is not known.
    #[must_use]
    pub fn defaulted(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// The name, docstring and parameters of a callable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionSignature {
    /// Function name, used as the tool name.
    pub name: String,
    /// Raw documentation text.
    pub docstring: Option<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl FunctionSignature {
    /// Creates a signature with no docstring and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the raw docstring.
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Parameter names in declaration order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|param| param.name.as_str()).collect()
    }

    /// Returns the docstring unless it is absent or blank.
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        self.docstring
            .as_deref()
            .filter(|docstring| !docstring.trim().is_empty())
    }

    /// Checks that the metadata describes a callable.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Inspection`] for a missing or malformed name,
    /// [`SchemaError::InvalidSignature`] for duplicate parameter names.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::inspection("function name is empty"));
        }
        if !is_identifier(&self.name) {
            return Err(SchemaError::inspection(format!(
                "`{}` is not a valid function name",
                self.name
            )));
        }
        if let Some(param) = self.parameters.iter().find(|param| !is_identifier(&param.name)) {
            return Err(SchemaError::inspection(format!(
                "`{}` is not a valid parameter name of `{}`",
                param.name, self.name
            )));
        }
        check_unique(&self.parameters)
    }
}

pub(crate) fn check_unique(parameters: &[Parameter]) -> Result<(), SchemaError> {
    let mut names = HashSet::with_capacity(parameters.len());
    for param in parameters {
        if !names.insert(param.name.as_str()) {
            return Err(SchemaError::invalid_signature(format!(
                "duplicate parameter name `{}`",
                param.name
            )));
        }
    }
    Ok(())
}
