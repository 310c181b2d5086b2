//! Docstring text normalization shared by all strategies.

use crate::section;

/// A docstring with tabs expanded, the first line stripped and the common
/// indentation of the remaining lines removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanDoc {
    lines: Vec<String>,
}

impl CleanDoc {
    /// Normalizes raw docstring text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let expanded = raw.replace('\t', "    ");
        let raw_lines: Vec<&str> = expanded.lines().collect();
        let Some((first, rest)) = raw_lines.split_first() else {
            return Self { lines: Vec::new() };
        };

        // A leading section header keeps its body indented below it.
        let header_first = section::is_bare_header(first);
        let margin = rest
            .iter()
            .chain(header_first.then_some(first))
            .filter(|line| !line.trim().is_empty())
            .map(|line| indent_of(line))
            .min()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(raw_lines.len());
        lines.push(if header_first {
            first[margin..].trim_end().to_string()
        } else {
            first.trim().to_string()
        });
        for line in rest {
            if line.trim().is_empty() {
                lines.push(String::new());
            } else {
                lines.push(line[margin..].trim_end().to_string());
            }
        }

        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        let leading = lines.iter().take_while(|line| line.is_empty()).count();
        lines.drain(..leading);

        Self { lines }
    }

    /// Normalized lines; blank lines are empty strings.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns whether the docstring has no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First non-blank line, stripped.
    #[must_use]
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// Prose in `lines[..end]`, line structure preserved, outer blanks trimmed.
    #[must_use]
    pub fn prose(&self, end: usize) -> String {
        let end = end.min(self.lines.len());
        self.lines[..end].join("\n").trim().to_string()
    }
}

/// Number of leading spaces.
pub(crate) fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Joins description fragments with single spaces, dropping blanks.
pub(crate) fn join_words<S: AsRef<str>>(fragments: &[S]) -> Option<String> {
    let joined = fragments
        .iter()
        .flat_map(|fragment| fragment.as_ref().split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() { None } else { Some(joined) }
}

/// Strips `*`/`**` prefixes (`*args`, `**kwargs`) and surrounding backticks.
pub(crate) fn normalize_name(raw: &str) -> &str {
    raw.trim().trim_matches('`').trim_start_matches('*')
}

/// Returns whether `name` looks like a parameter identifier: a letter or
/// `_` followed by letters, digits or `_`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
