//! Cross-convention tests for docstring extraction.

use proptest::prelude::*;
use schemafunc_docs::{DocModel, DocStyle, extract};

fn tag_doc(summary: &str, params: &[(String, String)]) -> String {
    let mut doc = format!("{summary}\n\n");
    for (name, text) in params {
        doc.push_str(&format!(":param {name}: {text}\n"));
    }
    doc
}

fn section_doc(summary: &str, params: &[(String, String)]) -> String {
    let mut doc = format!("{summary}\n\nArgs:\n");
    for (name, text) in params {
        doc.push_str(&format!("    {name}: {text}\n"));
    }
    doc
}

fn numpy_doc(summary: &str, params: &[(String, String)]) -> String {
    let mut doc = format!("{summary}\n\nParameters\n----------\n");
    for (name, text) in params {
        doc.push_str(&format!("{name} : str\n    {text}\n"));
    }
    doc
}

fn pipe_doc(summary: &str, params: &[(String, String)]) -> String {
    let mut doc = format!("{summary}\n\n| Name | Type | Description |\n|---|---|---|\n");
    for (name, text) in params {
        doc.push_str(&format!("| {name} | str | {text} |\n"));
    }
    doc
}

// ─────────────────────────────────────────────────────────────────────
// Fixed scenarios
// ─────────────────────────────────────────────────────────────────────

#[test]
fn tag_and_section_styles_agree() {
    let tag = extract(
        "Get the weather.\n\n:param location: The city and state, e.g. San Francisco, CA",
        &["location"],
    );
    let section = extract(
        "Get the weather.\n\nArgs:\n    location (str): The city and state, e.g. San Francisco, CA",
        &["location"],
    );

    assert_eq!(tag.style, Some(DocStyle::Tag));
    assert_eq!(section.style, Some(DocStyle::Section));
    assert_eq!(
        tag.parameter_description("location"),
        section.parameter_description("location")
    );
    assert_eq!(tag.summary, section.summary);
}

#[test]
fn summary_is_first_nonblank_line_but_description_keeps_prose() {
    let doc = extract(
        "\n    Get the current weather\n\n    example from:\n    https://example.com/notebook\n\n    :param location: The city.\n    ",
        &["location"],
    );
    assert_eq!(doc.summary, "Get the current weather");
    assert_eq!(
        doc.description,
        "Get the current weather\n\nexample from:\nhttps://example.com/notebook"
    );
}

#[test]
fn rust_doc_comment_text_is_supported() {
    // Doc comments arrive one line per attribute with the leading space removed.
    let raw = "Search for documents.\n\nArgs:\n    query: The search query.\n    limit: Max results\n        to return.";
    let doc = extract(raw, &["query", "limit"]);
    assert_eq!(doc.parameter_description("query"), Some("The search query."));
    assert_eq!(doc.parameter_description("limit"), Some("Max results to return."));
}

#[test]
fn malformed_blocks_degrade_to_partial_models() {
    let doc = extract("Broken.\n\nArgs:\n    (int): no name\n    good: Kept.", &["good"]);
    assert_eq!(doc.summary, "Broken.");
    assert_eq!(doc.parameter_description("good"), Some("Kept."));

    let doc = extract("Only returns.\n\n:returns: A value.", &["a"]);
    assert!(doc.params.is_empty());
    assert_eq!(doc.returns.as_deref(), Some("A value."));
}

#[test]
fn absent_docstring_is_empty() {
    assert_eq!(extract("", &[]), DocModel::default());
}

// ─────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────

fn params_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-z][a-z0-9_]{0,8}", "[A-Za-z][A-Za-z0-9 ,.]{0,40}[a-z.]", 1..5)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn every_convention_yields_the_same_descriptions(params in params_strategy()) {
        let names: Vec<&str> = params.iter().map(|(name, _)| name.as_str()).collect();
        let docs = [
            extract(&tag_doc("Summary.", &params), &names),
            extract(&section_doc("Summary.", &params), &names),
            extract(&numpy_doc("Summary.", &params), &names),
            extract(&pipe_doc("Summary.", &params), &names),
        ];

        for doc in &docs {
            prop_assert_eq!(doc.summary.as_str(), "Summary.");
            for (name, text) in &params {
                let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
                prop_assert_eq!(doc.parameter_description(name), Some(expected.as_str()));
            }
        }
    }

    #[test]
    fn extraction_never_panics(raw in "(?s).{0,200}") {
        let doc = extract(&raw, &["a", "b"]);
        prop_assert!(doc.params.keys().all(|name| name == "a" || name == "b"));
    }
}
