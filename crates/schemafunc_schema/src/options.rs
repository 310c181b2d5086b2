//! Schema generation options.

use serde::{Deserialize, Serialize};

/// Which docstring prose becomes the function description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionMode {
    /// First non-blank line only.
    #[default]
    Summary,
    /// All prose before the parameter documentation.
    Full,
}

/// Options controlling schema generation.
///
/// Defaults are lenient: nothing about the docstring is required and
/// untyped containers are accepted. Options deserialize from partial JSON,
/// with missing keys taking their default.
///
/// ```
/// use schemafunc_schema::SchemaOptions;
///
/// let options: SchemaOptions =
///     serde_json::from_str(r#"{"ignore_args": ["ctx"], "require_short_description": true}"#)
///         .unwrap();
/// assert!(options.is_ignored("ctx"));
/// assert!(options.allow_bare_generic_types);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaOptions {
    /// Parameters left out of the schema entirely.
    pub ignore_args: Vec<String>,
    /// Every parameter must appear in the docstring.
    pub require_all_params_in_doc: bool,
    /// Every documented parameter must have description text.
    pub require_descriptions_for_params: bool,
    /// The docstring must have a summary line.
    pub require_short_description: bool,
    /// Accept containers without element types.
    pub allow_bare_generic_types: bool,
    /// Source of the function description.
    pub description_mode: DescriptionMode,
    /// Embed `null` defaults instead of omitting them.
    pub embed_null_defaults: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            ignore_args: Vec::new(),
            require_all_params_in_doc: false,
            require_descriptions_for_params: false,
            require_short_description: false,
            allow_bare_generic_types: true,
            description_mode: DescriptionMode::Summary,
            embed_null_defaults: false,
        }
    }
}

impl SchemaOptions {
    /// Lenient defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a summary and a described entry for every parameter.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_all_params_in_doc: true,
            require_descriptions_for_params: true,
            require_short_description: true,
            ..Self::default()
        }
    }

    /// Leaves `name` out of the schema.
    #[must_use]
    pub fn with_ignored_arg(mut self, name: impl Into<String>) -> Self {
        self.ignore_args.push(name.into());
        self
    }

    /// Replaces the ignored parameter list.
    #[must_use]
    pub fn with_ignore_args<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_args = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets [`require_all_params_in_doc`](Self::require_all_params_in_doc).
    #[must_use]
    pub fn with_require_all_params_in_doc(mut self, value: bool) -> Self {
        self.require_all_params_in_doc = value;
        self
    }

    /// Sets [`require_descriptions_for_params`](Self::require_descriptions_for_params).
    #[must_use]
    pub fn with_require_descriptions_for_params(mut self, value: bool) -> Self {
        self.require_descriptions_for_params = value;
        self
    }

    /// Sets [`require_short_description`](Self::require_short_description).
    #[must_use]
    pub fn with_require_short_description(mut self, value: bool) -> Self {
        self.require_short_description = value;
        self
    }

    /// Sets [`allow_bare_generic_types`](Self::allow_bare_generic_types).
    #[must_use]
    pub fn with_allow_bare_generic_types(mut self, value: bool) -> Self {
        self.allow_bare_generic_types = value;
        self
    }

    /// Sets [`description_mode`](Self::description_mode).
    #[must_use]
    pub fn with_description_mode(mut self, mode: DescriptionMode) -> Self {
        self.description_mode = mode;
        self
    }

    /// Sets [`embed_null_defaults`](Self::embed_null_defaults).
    #[must_use]
    pub fn with_embed_null_defaults(mut self, value: bool) -> Self {
        self.embed_null_defaults = value;
        self
    }

    /// Returns whether `name` is left out of the schema.
    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_args.iter().any(|ignored| ignored == name)
    }

    /// Returns whether any option needs a docstring to check against.
    #[must_use]
    pub fn requires_docstring(&self) -> bool {
        self.require_all_params_in_doc
            || self.require_descriptions_for_params
            || self.require_short_description
    }
}
