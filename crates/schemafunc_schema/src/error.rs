//! Error types for schema generation.

use thiserror::Error;

/// Errors that can occur while generating a schema.
///
/// Only [`InvalidSignature`](Self::InvalidSignature) and
/// [`Inspection`](Self::Inspection) can occur with default options; the
/// remaining variants are raised by the strictness flags of
/// [`SchemaOptions`](crate::SchemaOptions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The parameter list cannot describe a callable, e.g. duplicate names.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Callable metadata is missing or malformed.
    #[error("Inspection error: {0}")]
    Inspection(String),

    /// A docstring is required but absent.
    #[error("Function `{function}` must have a docstring")]
    NoDocstring {
        /// Function name.
        function: String,
    },

    /// The docstring has no summary line.
    #[error("Function `{function}` must have a short description in its docstring")]
    NoShortDescription {
        /// Function name.
        function: String,
    },

    /// Parameters missing from the docstring.
    #[error(
        "The following parameters are not documented in the docstring: {}",
        .parameters.join(", ")
    )]
    ParameterNotDocumented {
        /// Undocumented parameter names, in declaration order.
        parameters: Vec<String>,
    },

    /// Documented parameters without description text.
    #[error(
        "The following parameters are missing descriptions in the docstring: {}",
        .parameters.join(", ")
    )]
    ParameterMissingDescription {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
    },

    /// A container type without element types.
    #[error("Parameter `{parameter}` has a bare generic type")]
    BareGenericType {
        /// Parameter name.
        parameter: String,
    },
}

impl SchemaError {
    /// Creates an [`InvalidSignature`](Self::InvalidSignature).
    pub fn invalid_signature(msg: impl Into<String>) -> Self {
        Self::InvalidSignature(msg.into())
    }

    /// Creates an [`Inspection`](Self::Inspection).
    pub fn inspection(msg: impl Into<String>) -> Self {
        Self::Inspection(msg.into())
    }

    /// Creates a [`NoDocstring`](Self::NoDocstring).
    pub fn no_docstring(function: impl Into<String>) -> Self {
        Self::NoDocstring {
            function: function.into(),
        }
    }

    /// Creates a [`NoShortDescription`](Self::NoShortDescription).
    pub fn no_short_description(function: impl Into<String>) -> Self {
        Self::NoShortDescription {
            function: function.into(),
        }
    }

    /// Creates a [`BareGenericType`](Self::BareGenericType).
    pub fn bare_generic_type(parameter: impl Into<String>) -> Self {
        Self::BareGenericType {
            parameter: parameter.into(),
        }
    }
}
