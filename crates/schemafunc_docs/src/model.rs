//! The normalized documentation model.

use crate::strategy::STRATEGIES;
use crate::text::CleanDoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Docstring convention that produced a [`DocModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStyle {
    /// `:param name: text` tags.
    Tag,
    /// Underlined NumPy sections or pipe tables.
    Table,
    /// `Args:` / `Parameters:` headed sections.
    Section,
}

/// Documentation for a single parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocParam {
    /// Type name written in the docstring, if any (`name (int): ...`).
    pub type_name: Option<String>,
    /// Description text, with continuation lines joined by single spaces.
    ///
    /// `None` when the parameter is listed but carries no text.
    pub description: Option<String>,
}

/// Normalized documentation extracted from a docstring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocModel {
    /// First non-blank line, stripped. Empty when there is no docstring.
    pub summary: String,
    /// All prose preceding the first parameter/section marker.
    pub description: String,
    /// Documented parameters, restricted to the callable's parameter names.
    pub params: IndexMap<String, DocParam>,
    /// Return value description.
    pub returns: Option<String>,
    /// Convention the parameter block was parsed with, if any matched.
    pub style: Option<DocStyle>,
}

impl DocModel {
    /// Extracts a model from raw docstring text.
    ///
    /// Empty input yields an empty model. Entries for names outside
    /// `parameter_names` are dropped.
    #[must_use]
    pub fn extract(raw: &str, parameter_names: &[&str]) -> Self {
        let doc = CleanDoc::new(raw);
        if doc.is_empty() {
            return Self::default();
        }

        for strategy in STRATEGIES {
            if !strategy.detect(&doc) {
                continue;
            }
            if let Some(model) = strategy.parse(&doc, parameter_names) {
                tracing::trace!(style = ?strategy.style(), "docstring convention selected");
                return model;
            }
        }

        Self {
            summary: doc.summary(),
            description: doc.prose(doc.lines().len()),
            ..Self::default()
        }
    }

    /// Returns the description of a documented parameter.
    #[must_use]
    pub fn parameter_description(&self, name: &str) -> Option<&str> {
        self.params.get(name)?.description.as_deref()
    }

    /// Returns every parameter description, in docstring order.
    #[must_use]
    pub fn parameter_descriptions(&self) -> IndexMap<&str, &str> {
        self.params
            .iter()
            .filter_map(|(name, param)| Some((name.as_str(), param.description.as_deref()?)))
            .collect()
    }

    /// Returns whether the docstring lists the parameter at all.
    #[must_use]
    pub fn is_documented(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns whether nothing at all was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.params.is_empty() && self.returns.is_none()
    }
}
