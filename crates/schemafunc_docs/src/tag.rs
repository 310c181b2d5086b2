//! `:param name: text` convention.

use crate::model::{DocModel, DocStyle};
use crate::strategy::{Collected, DocStrategy, Entry};
use crate::text::{CleanDoc, is_identifier, normalize_name};

const PARAM_TAGS: &[&str] = &["param", "parameter", "arg", "argument", "key", "keyword"];
const RETURN_TAGS: &[&str] = &["return", "returns"];

/// Parses `:param name: text`, `:type name: T` and `:returns: text` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagStyle;

/// One recognized tag line.
#[derive(Debug, PartialEq, Eq)]
enum Tag<'a> {
    Param {
        name: &'a str,
        type_name: Option<String>,
        text: &'a str,
    },
    Type {
        name: &'a str,
        type_name: &'a str,
    },
    Returns(&'a str),
    /// `:raises X:`, `:rtype:` and friends. Ends the current entry.
    Other,
}

fn parse_tag(line: &str) -> Option<Tag<'_>> {
    let rest = line.trim().strip_prefix(':')?;
    let (head, text) = rest.split_once(':')?;
    let mut words: Vec<&str> = head.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let tag = words.remove(0);

    if PARAM_TAGS.contains(&tag) {
        let name = normalize_name(words.pop()?);
        if !is_identifier(name) {
            return Some(Tag::Other);
        }
        let type_name = (!words.is_empty()).then(|| words.join(" "));
        return Some(Tag::Param {
            name,
            type_name,
            text: text.trim(),
        });
    }

    if tag == "type" {
        let name = normalize_name(words.first()?);
        return Some(Tag::Type {
            name,
            type_name: text.trim(),
        });
    }

    if RETURN_TAGS.contains(&tag) && words.is_empty() {
        return Some(Tag::Returns(text.trim()));
    }

    Some(Tag::Other)
}

enum Current {
    None,
    Param(usize),
    Returns,
}

impl DocStrategy for TagStyle {
    fn style(&self) -> DocStyle {
        DocStyle::Tag
    }

    fn detect(&self, doc: &CleanDoc) -> bool {
        doc.lines().iter().any(|line| {
            matches!(
                parse_tag(line),
                Some(Tag::Param { .. } | Tag::Type { .. } | Tag::Returns(_))
            )
        })
    }

    fn parse(&self, doc: &CleanDoc, parameter_names: &[&str]) -> Option<DocModel> {
        let mut collected = Collected::default();
        let mut types: Vec<(String, String)> = Vec::new();
        let mut current = Current::None;

        for (index, line) in doc.lines().iter().enumerate() {
            let Some(tag) = parse_tag(line) else {
                match current {
                    Current::Param(entry) => collected.entries[entry].text.push(line.clone()),
                    Current::Returns => collected.push_return_text(line),
                    Current::None => {}
                }
                continue;
            };

            collected.mark(index);
            current = match tag {
                Tag::Param {
                    name,
                    type_name,
                    text,
                } => {
                    let mut entry = Entry::new(name, type_name);
                    entry.text.push(text.to_string());
                    collected.entries.push(entry);
                    Current::Param(collected.entries.len() - 1)
                }
                Tag::Type { name, type_name } => {
                    types.push((name.to_string(), type_name.to_string()));
                    Current::None
                }
                Tag::Returns(text) => {
                    collected.push_return_text(text);
                    Current::Returns
                }
                Tag::Other => Current::None,
            };
        }

        for (name, type_name) in types {
            if let Some(entry) = collected.entries.iter_mut().find(|entry| entry.name == name)
                && entry.type_name.is_none()
                && !type_name.is_empty()
            {
                entry.type_name = Some(type_name);
            }
        }

        collected.into_model(doc, DocStyle::Tag, parameter_names)
    }
}
