//! Column-oriented conventions: NumPy underlined sections and pipe tables.

use crate::model::{DocModel, DocStyle};
use crate::strategy::{Collected, DocStrategy, Entry};
use crate::text::{CleanDoc, indent_of, is_identifier, normalize_name};

const PARAM_TITLES: &[&str] = &[
    "parameters",
    "params",
    "arguments",
    "args",
    "other parameters",
    "keyword arguments",
];
const RETURN_TITLES: &[&str] = &["returns", "return"];

const NAME_COLUMNS: &[&str] = &["name", "field", "parameter", "param", "argument", "arg"];
const TYPE_COLUMNS: &[&str] = &["type"];
const DESCRIPTION_COLUMNS: &[&str] = &["description", "desc"];

/// Parses field/type/description layouts.
///
/// NumPy sections:
///
/// ```text
/// Parameters
/// ----------
/// name : int
///     Description.
/// ```
///
/// Pipe tables:
///
/// ```text
/// | Name | Type | Description  |
/// |------|------|--------------|
/// | name | int  | Description. |
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Params,
    Returns,
    Other,
}

fn is_underline(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Classifies a NumPy section title at `index` (title line followed by dashes).
fn section_at(lines: &[String], index: usize) -> Option<Section> {
    let title = lines[index].trim();
    if title.is_empty() || !lines.get(index + 1).is_some_and(|next| is_underline(next)) {
        return None;
    }
    let title = title.to_ascii_lowercase();
    if PARAM_TITLES.contains(&title.as_str()) {
        Some(Section::Params)
    } else if RETURN_TITLES.contains(&title.as_str()) {
        Some(Section::Returns)
    } else {
        Some(Section::Other)
    }
}

/// Column positions of a pipe-table header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    name: usize,
    type_name: Option<usize>,
    description: usize,
}

fn split_row(line: &str) -> Option<Vec<&str>> {
    let inner = line.trim().strip_prefix('|')?;
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    Some(inner.split('|').map(str::trim).collect())
}

fn header_columns(line: &str) -> Option<Columns> {
    let cells = split_row(line)?;
    let find = |names: &[&str]| {
        cells
            .iter()
            .position(|cell| names.contains(&cell.to_ascii_lowercase().as_str()))
    };
    Some(Columns {
        name: find(NAME_COLUMNS)?,
        type_name: find(TYPE_COLUMNS),
        description: find(DESCRIPTION_COLUMNS)?,
    })
}

fn is_separator_row(line: &str) -> bool {
    split_row(line).is_some_and(|cells| {
        cells
            .iter()
            .all(|cell| !cell.is_empty() && cell.chars().all(|c| matches!(c, '-' | ':')))
    })
}

impl DocStrategy for TableStyle {
    fn style(&self) -> DocStyle {
        DocStyle::Table
    }

    fn detect(&self, doc: &CleanDoc) -> bool {
        let lines = doc.lines();
        (0..lines.len()).any(|index| {
            matches!(
                section_at(lines, index),
                Some(Section::Params | Section::Returns)
            ) || header_columns(&lines[index]).is_some()
        })
    }

    fn parse(&self, doc: &CleanDoc, parameter_names: &[&str]) -> Option<DocModel> {
        let lines = doc.lines();
        let mut collected = Collected::default();
        let mut index = 0;

        while index < lines.len() {
            if let Some(section) = section_at(lines, index) {
                collected.mark(index);
                let body_start = index + 2;
                let mut body_end = body_start;
                while body_end < lines.len() && section_at(lines, body_end).is_none() {
                    if header_columns(&lines[body_end]).is_some() {
                        break;
                    }
                    body_end += 1;
                }
                let base_indent = indent_of(&lines[index]);
                let body = &lines[body_start..body_end];
                match section {
                    Section::Params => collect_numpy_params(body, base_indent, &mut collected),
                    Section::Returns => collect_numpy_returns(body, base_indent, &mut collected),
                    Section::Other => {}
                }
                index = body_end;
                continue;
            }

            if let Some(columns) = header_columns(&lines[index]) {
                collected.mark(index);
                index = collect_table_rows(lines, index + 1, columns, &mut collected);
                continue;
            }

            index += 1;
        }

        collected.into_model(doc, DocStyle::Table, parameter_names)
    }
}

/// `name : type` at the base indent, description lines indented deeper.
fn collect_numpy_params(body: &[String], base_indent: usize, collected: &mut Collected) {
    let mut current: Vec<usize> = Vec::new();
    for line in body {
        if line.is_empty() {
            continue;
        }
        if indent_of(line) <= base_indent {
            current.clear();
            let (names, type_name) = match line.split_once(" : ").or_else(|| line.split_once(':')) {
                Some((names, type_name)) => {
                    let type_name = type_name.trim();
                    (names, (!type_name.is_empty()).then(|| type_name.to_string()))
                }
                None => (line.as_str(), None),
            };
            for name in names.split(',').map(normalize_name) {
                if is_identifier(name) {
                    collected.entries.push(Entry::new(name, type_name.clone()));
                    current.push(collected.entries.len() - 1);
                }
            }
            continue;
        }
        for &entry in &current {
            collected.entries[entry].text.push(line.clone());
        }
    }
}

/// Return sections list a type line followed by indented prose; the prose
/// wins when present.
fn collect_numpy_returns(body: &[String], base_indent: usize, collected: &mut Collected) {
    let (type_lines, prose): (Vec<&String>, Vec<&String>) = body
        .iter()
        .filter(|line| !line.is_empty())
        .partition(|line| indent_of(line) <= base_indent);

    let chosen = if prose.is_empty() { type_lines } else { prose };
    for line in chosen {
        collected.push_return_text(line);
    }
    if collected.returns.is_none() {
        collected.returns = Some(Vec::new());
    }
}

/// Consumes table rows starting at `start`, returning the first index past the table.
fn collect_table_rows(
    lines: &[String],
    start: usize,
    columns: Columns,
    collected: &mut Collected,
) -> usize {
    let mut index = start;
    let mut current: Option<usize> = None;

    while index < lines.len() {
        let line = &lines[index];
        let Some(cells) = split_row(line) else {
            break;
        };
        index += 1;
        if is_separator_row(line) {
            continue;
        }

        let cell = |position: usize| cells.get(position).copied().unwrap_or_default();
        let name = normalize_name(cell(columns.name));
        let description = cell(columns.description);

        if name.is_empty() {
            if let Some(entry) = current {
                collected.entries[entry].text.push(description.to_string());
            }
            continue;
        }
        if !is_identifier(name) {
            current = None;
            continue;
        }

        let type_name = columns
            .type_name
            .map(|position| cell(position).trim_matches('`'))
            .filter(|type_name| !type_name.is_empty())
            .map(ToString::to_string);
        let mut entry = Entry::new(name, type_name);
        entry.text.push(description.to_string());
        collected.entries.push(entry);
        current = Some(collected.entries.len() - 1);
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str, names: &[&str]) -> DocModel {
        let doc = CleanDoc::new(raw);
        assert!(TableStyle.detect(&doc), "table markers not detected in {raw:?}");
        TableStyle.parse(&doc, names).unwrap()
    }

    #[test]
    fn parses_numpy_style() {
        let doc = parse(
            "\n        A function with a docstring.\n\n        Parameters\n        ----------\n        a : int\n            The first arg.\n\n        Returns\n        -------\n        None\n        ",
            &["a"],
        );
        assert_eq!(doc.summary, "A function with a docstring.");
        assert_eq!(doc.description, "A function with a docstring.");
        assert_eq!(doc.parameter_description("a"), Some("The first arg."));
        assert_eq!(doc.params["a"].type_name.as_deref(), Some("int"));
        assert_eq!(doc.returns.as_deref(), Some("None"));
    }

    #[test]
    fn numpy_shared_entries_and_multiline_text() {
        let doc = parse(
            "S.\n\nParameters\n----------\nx, y : float\n    Coordinates in\n    degrees.\nlabel\n    Free text.\n\nReturns\n-------\nstr\n    The rendered point.\n",
            &["x", "y", "label"],
        );
        assert_eq!(doc.parameter_description("x"), Some("Coordinates in degrees."));
        assert_eq!(doc.parameter_description("y"), Some("Coordinates in degrees."));
        assert_eq!(doc.params["y"].type_name.as_deref(), Some("float"));
        assert_eq!(doc.parameter_description("label"), Some("Free text."));
        assert_eq!(doc.params["label"].type_name, None);
        assert_eq!(doc.returns.as_deref(), Some("The rendered point."));
    }

    #[test]
    fn parses_pipe_table() {
        let doc = parse(
            "Get the weather.\n\n| Name | Type | Description |\n|------|------|-------------|\n| `city` | str | The city name. |\n| unit | str | Celsius or |\n| | | fahrenheit. |\n\nMore prose.\n",
            &["city", "unit"],
        );
        assert_eq!(doc.description, "Get the weather.");
        assert_eq!(doc.parameter_description("city"), Some("The city name."));
        assert_eq!(doc.params["city"].type_name.as_deref(), Some("str"));
        assert_eq!(doc.parameter_description("unit"), Some("Celsius or fahrenheit."));
    }

    #[test]
    fn pipe_table_without_type_column() {
        let doc = parse("| Field | Description |\n| --- | --- |\n| q | Query. |", &["q"]);
        assert_eq!(doc.parameter_description("q"), Some("Query."));
        assert_eq!(doc.params["q"].type_name, None);
    }

    #[test]
    fn unrelated_tables_are_not_markers() {
        let doc = CleanDoc::new("S.\n\n| Key | Value |\n|-----|-------|\n| a | b |");
        assert!(!TableStyle.detect(&doc));
    }

    #[test]
    fn underline_needs_three_dashes() {
        assert!(is_underline("----------"));
        assert!(!is_underline("--"));
        assert!(!is_underline("-- x"));
    }
}
