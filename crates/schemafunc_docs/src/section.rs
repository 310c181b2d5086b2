//! `Args:` / `Parameters:` headed-section convention.

use crate::model::{DocModel, DocStyle};
use crate::strategy::{Collected, DocStrategy, Entry};
use crate::text::{CleanDoc, indent_of, is_identifier, normalize_name};

const PARAM_HEADERS: &[&str] = &[
    "args",
    "arguments",
    "parameters",
    "params",
    "keyword args",
    "keyword arguments",
    "kwargs",
    "other parameters",
];
const RETURN_HEADERS: &[&str] = &["returns", "return"];
const OTHER_HEADERS: &[&str] = &[
    "raises",
    "yields",
    "yield",
    "examples",
    "example",
    "note",
    "notes",
    "attributes",
    "see also",
    "warning",
    "warnings",
    "todo",
    "references",
];

/// Parses Google-style headed sections.
///
/// ```text
/// Args:
///     name (int): Description that may
///         continue on the next line.
/// Returns:
///     What comes back.
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    Params,
    Returns,
    Other,
}

/// Classifies a header line, returning any text after the colon.
fn parse_header(line: &str) -> Option<(Header, &str)> {
    let (title, rest) = line.trim().split_once(':')?;
    let title = title.trim().to_ascii_lowercase();
    let rest = rest.trim();

    if RETURN_HEADERS.contains(&title.as_str()) {
        return Some((Header::Returns, rest));
    }
    // Parameter and other headers own the whole line.
    if !rest.is_empty() {
        return None;
    }
    if PARAM_HEADERS.contains(&title.as_str()) {
        Some((Header::Params, rest))
    } else if OTHER_HEADERS.contains(&title.as_str()) {
        Some((Header::Other, rest))
    } else {
        None
    }
}

/// Header at `index`. An inline `Returns: text` on the first line is
/// prose, not a section.
fn header_at(lines: &[String], index: usize) -> Option<(Header, &str)> {
    match parse_header(&lines[index])? {
        (Header::Returns, inline) if index == 0 && !inline.is_empty() => None,
        header => Some(header),
    }
}

/// Returns whether `line` is a section header with nothing after the colon.
pub(crate) fn is_bare_header(line: &str) -> bool {
    matches!(parse_header(line), Some((_, "")))
}

/// Parses `name: text` or `name (type): text`.
fn parse_entry(line: &str) -> Option<(Entry, &str)> {
    let (head, text) = line.trim().split_once(':')?;
    let head = head.trim();

    let (name, type_name) = match head.split_once('(') {
        Some((name, rest)) => {
            let type_name = rest.strip_suffix(')')?.trim();
            let type_name = (!type_name.is_empty()).then(|| type_name.to_string());
            (name.trim(), type_name)
        }
        None => (head, None),
    };

    let name = normalize_name(name);
    if !is_identifier(name) {
        return None;
    }
    Some((Entry::new(name, type_name), text.trim()))
}

impl DocStrategy for SectionStyle {
    fn style(&self) -> DocStyle {
        DocStyle::Section
    }

    fn detect(&self, doc: &CleanDoc) -> bool {
        let lines = doc.lines();
        (0..lines.len()).any(|index| {
            matches!(
                header_at(lines, index),
                Some((Header::Params | Header::Returns, _))
            )
        })
    }

    fn parse(&self, doc: &CleanDoc, parameter_names: &[&str]) -> Option<DocModel> {
        let lines = doc.lines();
        let mut collected = Collected::default();
        let mut index = 0;

        while index < lines.len() {
            let line = &lines[index];
            let Some((header, inline)) = header_at(lines, index) else {
                index += 1;
                continue;
            };
            collected.mark(index);

            let header_indent = indent_of(line);
            let body_start = index + 1;
            let mut body_end = body_start;
            while body_end < lines.len() {
                let body_line = &lines[body_end];
                if !body_line.is_empty() && indent_of(body_line) <= header_indent {
                    break;
                }
                body_end += 1;
            }
            let body = &lines[body_start..body_end];

            match header {
                Header::Params => collect_params(body, &mut collected),
                Header::Returns => {
                    if !inline.is_empty() {
                        collected.push_return_text(inline);
                    }
                    for body_line in body {
                        collected.push_return_text(body_line);
                    }
                    if collected.returns.is_none() {
                        collected.returns = Some(Vec::new());
                    }
                }
                Header::Other => {}
            }
            index = body_end.max(index + 1);
        }

        collected.into_model(doc, DocStyle::Section, parameter_names)
    }
}

fn collect_params(body: &[String], collected: &mut Collected) {
    let Some(item_indent) = body
        .iter()
        .find(|line| !line.is_empty())
        .map(|line| indent_of(line))
    else {
        return;
    };

    let mut current: Option<usize> = None;
    for line in body {
        if line.is_empty() {
            continue;
        }
        if indent_of(line) <= item_indent
            && let Some((mut entry, text)) = parse_entry(line)
        {
            entry.text.push(text.to_string());
            collected.entries.push(entry);
            current = Some(collected.entries.len() - 1);
            continue;
        }
        if let Some(entry) = current {
            collected.entries[entry].text.push(line.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str, names: &[&str]) -> DocModel {
        let doc = CleanDoc::new(raw);
        assert!(SectionStyle.detect(&doc), "section markers not detected in {raw:?}");
        SectionStyle.parse(&doc, names).unwrap()
    }

    #[test]
    fn parses_google_style() {
        let doc = parse(
            "\n        A function with a docstring.\n\n        Args:\n            a (int): The first arg.\n\n        Returns:\n            None\n        ",
            &["a"],
        );
        assert_eq!(doc.summary, "A function with a docstring.");
        assert_eq!(doc.description, "A function with a docstring.");
        assert_eq!(doc.parameter_description("a"), Some("The first arg."));
        assert_eq!(doc.params["a"].type_name.as_deref(), Some("int"));
        assert_eq!(doc.returns.as_deref(), Some("None"));
        assert_eq!(doc.style, Some(DocStyle::Section));
    }

    #[test]
    fn parameters_header_without_types() {
        let doc = parse(
            "Example function.\n\nParameters:\n    param: The first parameter.\n",
            &["param"],
        );
        assert_eq!(doc.parameter_description("param"), Some("The first parameter."));
        assert_eq!(doc.params["param"].type_name, None);
    }

    #[test]
    fn continuation_lines_are_joined() {
        let doc = parse(
            "S.\n\nArgs:\n    ignore_args (Sequence[str], optional): Parameter names\n        to ignore. Defaults to ().\n    strict (bool): Raise on errors.\n",
            &["ignore_args", "strict"],
        );
        assert_eq!(
            doc.parameter_description("ignore_args"),
            Some("Parameter names to ignore. Defaults to ().")
        );
        assert_eq!(doc.params["ignore_args"].type_name.as_deref(), Some("Sequence[str], optional"));
        assert_eq!(doc.parameter_description("strict"), Some("Raise on errors."));
    }

    #[test]
    fn section_ends_at_dedent() {
        let doc = parse(
            "S.\n\nArgs:\n    a: First.\n\nTrailing prose that is not a description.\n",
            &["a"],
        );
        assert_eq!(doc.parameter_description("a"), Some("First."));
    }

    #[test]
    fn other_sections_are_skipped() {
        let doc = parse(
            "S.\n\nArgs:\n    a: First.\n\nRaises:\n    ValueError: If bad.\n\nReturns: The sum.\n",
            &["a", "ValueError"],
        );
        assert_eq!(doc.parameter_description("a"), Some("First."));
        assert!(!doc.is_documented("ValueError"));
        assert_eq!(doc.returns.as_deref(), Some("The sum."));
    }

    #[test]
    fn header_on_first_line() {
        let doc = parse("Args:\n    city: The city.\n    unit: The unit.", &["city", "unit"]);
        assert_eq!(doc.parameter_description("city"), Some("The city."));
        assert_eq!(doc.parameter_description("unit"), Some("The unit."));
        assert_eq!(doc.summary, "");
    }

    #[test]
    fn inline_returns_on_first_line_is_prose() {
        let doc = CleanDoc::new("Returns: the current weather for a city.");
        assert!(!SectionStyle.detect(&doc));

        let doc = parse("Get it.\nReturns: the current weather.", &[]);
        assert_eq!(doc.returns.as_deref(), Some("the current weather."));
    }

    #[test]
    fn header_classification() {
        assert_eq!(parse_header("Args:"), Some((Header::Params, "")));
        assert_eq!(parse_header("  Keyword Arguments:"), Some((Header::Params, "")));
        assert_eq!(parse_header("Returns: int"), Some((Header::Returns, "int")));
        assert_eq!(parse_header("Args: not a header"), None);
        assert_eq!(parse_header("example from:"), None);
    }
}
