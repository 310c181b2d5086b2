//! Strategy selection for docstring conventions.

use crate::model::{DocModel, DocParam, DocStyle};
use crate::section::SectionStyle;
use crate::table::TableStyle;
use crate::tag::TagStyle;
use crate::text::{CleanDoc, join_words};
use indexmap::IndexMap;

/// A stateless parser for one docstring convention.
pub trait DocStrategy: Sync {
    /// The convention this strategy parses.
    fn style(&self) -> DocStyle;

    /// Cheap scan for convention-specific marker tokens.
    fn detect(&self, doc: &CleanDoc) -> bool;

    /// Parses the docstring, returning `None` when nothing was recognized.
    fn parse(&self, doc: &CleanDoc, parameter_names: &[&str]) -> Option<DocModel>;
}

/// Strategies in tie-break order: the first to match and produce a
/// non-empty result wins.
pub static STRATEGIES: &[&dyn DocStrategy] = &[&TagStyle, &TableStyle, &SectionStyle];

/// A parameter entry found by a strategy, before name filtering.
#[derive(Debug, Default)]
pub(crate) struct Entry {
    pub name: String,
    pub type_name: Option<String>,
    pub text: Vec<String>,
}

impl Entry {
    pub(crate) fn new(name: impl Into<String>, type_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_name,
            text: Vec::new(),
        }
    }
}

/// Raw findings of a strategy.
#[derive(Debug, Default)]
pub(crate) struct Collected {
    pub entries: Vec<Entry>,
    pub returns: Option<Vec<String>>,
    /// Index of the first line that belongs to a marker block.
    pub first_marker: Option<usize>,
}

impl Collected {
    pub(crate) fn mark(&mut self, line: usize) {
        self.first_marker = Some(self.first_marker.map_or(line, |first| first.min(line)));
    }

    pub(crate) fn push_return_text(&mut self, text: &str) {
        self.returns.get_or_insert_with(Vec::new).push(text.to_string());
    }

    pub(crate) fn into_model(
        self,
        doc: &CleanDoc,
        style: DocStyle,
        parameter_names: &[&str],
    ) -> Option<DocModel> {
        if self.entries.is_empty() && self.returns.is_none() {
            return None;
        }

        let mut params: IndexMap<String, DocParam> = IndexMap::new();
        for entry in self.entries {
            if !parameter_names.contains(&entry.name.as_str()) {
                tracing::debug!(parameter = %entry.name, "ignoring docstring entry for unknown parameter");
                continue;
            }
            let param = params.entry(entry.name).or_default();
            if param.type_name.is_none() {
                param.type_name = entry.type_name;
            }
            if param.description.is_none() {
                param.description = join_words(&entry.text);
            }
        }

        // Marker lines never count as summary text.
        let description = doc.prose(self.first_marker.unwrap_or(doc.lines().len()));
        Some(DocModel {
            summary: CleanDoc::new(&description).summary(),
            description,
            params,
            returns: self.returns.and_then(|text| join_words(&text)),
            style: Some(style),
        })
    }
}
