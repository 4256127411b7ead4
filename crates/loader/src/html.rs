//! In-memory HTML page addressed by element id.
//!
//! [`HtmlDocument`] keeps the page as source text and parses it with
//! [`scraper`] (html5ever) for every operation. Lookup matches
//! `getElementById`: the first element in document order carrying the id,
//! skipping the inert contents of `<template>`.
//!
//! A page that is never written to is returned byte for byte. Once a
//! container is filled or a parent revealed, the source becomes the
//! serialization of the edited tree.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node};

use cisl_core::markup::escape_html;

use crate::page::Page;

/// An HTML page whose containers can be filled and revealed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    source: String,
}

impl HtmlDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_html(self) -> String {
        self.source
    }

    /// Current inner HTML of the element with this id.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        let document = Html::parse_document(&self.source);
        find_by_id(&document, id).map(|element| element.inner_html())
    }

    /// Value of attribute `name` on the parent of the element with this id.
    pub fn parent_attr(&self, id: &str, name: &str) -> Option<String> {
        let document = Html::parse_document(&self.source);
        let parent = find_by_id(&document, id)?
            .parent()
            .and_then(ElementRef::wrap)?;
        parent.value().attr(name).map(str::to_string)
    }
}

impl Page for HtmlDocument {
    fn has_container(&self, id: &str) -> bool {
        let document = Html::parse_document(&self.source);
        find_by_id(&document, id).is_some()
    }

    fn set_content(&mut self, id: &str, html: &str) {
        let mut document = Html::parse_document(&self.source);
        let Some(target) = find_by_id(&document, id).map(|element| element.id()) else {
            return;
        };

        let old_children: Vec<_> = document
            .tree
            .get(target)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default();
        for child in old_children {
            if let Some(mut child) = document.tree.get_mut(child) {
                child.detach();
            }
        }

        // Copy the parsed fragment under the target, parent before children.
        let fragment = Html::parse_fragment(html);
        let mut pending = vec![(*fragment.root_element(), target)];
        while let Some((from, into)) = pending.pop() {
            for child in from.children() {
                let Some(mut parent) = document.tree.get_mut(into) else {
                    break;
                };
                let copied = parent.append(child.value().clone()).id();
                pending.push((child, copied));
            }
        }

        self.source = serialize(&document);
    }

    fn reveal_parent(&mut self, id: &str) {
        let mut document = Html::parse_document(&self.source);
        let Some(parent) = find_by_id(&document, id)
            .and_then(|element| element.parent())
            .and_then(ElementRef::wrap)
        else {
            return;
        };

        let parent_id = parent.id();
        let Some(revealed) = revealed_element(parent.value()) else {
            tracing::debug!(id, tag = parent.value().name(), "Parent cannot be rebuilt, skipping");
            return;
        };

        if let Some(mut node) = document.tree.get_mut(parent_id) {
            *node.value() = revealed;
        }
        self.source = serialize(&document);
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().id() == Some(id))
        .find(|element| !in_template(element))
}

fn in_template(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "template")
}

/// Serialize the whole document, keeping its doctype.
fn serialize(document: &Html) -> String {
    let html = document.html();
    let doctype = document.tree.root().children().find_map(|node| match node.value() {
        Node::Doctype(doctype) => Some(doctype.name().to_string()),
        _ => None,
    });

    match doctype {
        Some(name) if !html.trim_start().to_ascii_lowercase().starts_with("<!doctype") => {
            format!("<!DOCTYPE {name}>\n{html}")
        }
        _ => html,
    }
}

// ---------------------------------------------------------------------------
// Style rewriting
// ---------------------------------------------------------------------------

/// Inline style with `display: block` in place of any `display` declaration.
///
/// Other declarations are kept in order.
fn display_block(style: Option<&str>) -> String {
    let mut declarations: Vec<&str> = style
        .unwrap_or("")
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            decl.split(':')
                .next()
                .is_some_and(|prop| !prop.trim().eq_ignore_ascii_case("display"))
        })
        .collect();
    declarations.push("display: block");
    format!("{};", declarations.join("; "))
}

/// Rebuild `element` with `display: block` in its inline style.
///
/// The start tag is written out with escaped attribute values and parsed
/// back, so quoting of the new value is the serializer's job. Template
/// content accepts any element, table parts included; the document-level
/// elements need a whole document.
fn revealed_element(element: &Element) -> Option<Node> {
    let tag = element.name();

    let mut start_tag = format!("<{tag}");
    let mut has_style = false;
    for (name, value) in element.attrs() {
        let value = if name == "style" {
            has_style = true;
            display_block(Some(value))
        } else {
            value.to_string()
        };
        start_tag.push_str(&format!(" {name}=\"{}\"", escape_html(&value)));
    }
    if !has_style {
        start_tag.push_str(&format!(" style=\"{}\"", display_block(None)));
    }
    start_tag.push('>');

    let parsed = match tag {
        "html" => Html::parse_document(&format!("{start_tag}</html>")),
        "head" => Html::parse_document(&format!("<html>{start_tag}</head></html>")),
        "body" => Html::parse_document(&format!("<html><head></head>{start_tag}</body></html>")),
        _ => Html::parse_fragment(&format!("<template>{start_tag}</{tag}></template>")),
    };

    let rebuilt = parsed
        .tree
        .root()
        .descendants()
        .filter(|node| node.value().as_element().is_some_and(|el| el.name() == tag))
        .last()
        .map(|node| node.value().clone());
    rebuilt
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <script>if (a < b) { document.write("<div id='news-content'>"); }</script>
</head>
<body>
  <!-- <div id="leads-content">commented out</div> -->
  <section class="people">
    <div id="leads-content"><div class="placeholder"><div>Loading</div></div></div>
  </section>
  <section class="alumni" style="display: none; margin: 0">
    <div id='alumni-content'></div>
  </section>
  <section class="bare">
    <div id=fellows-content>old<br>text</div>
  </section>
</body>
</html>"#;

    #[test]
    fn finds_containers_by_id() {
        let doc = HtmlDocument::new(PAGE);
        assert!(doc.has_container("leads-content"));
        assert!(doc.has_container("alumni-content"));
        assert!(doc.has_container("fellows-content"));
        assert!(!doc.has_container("missing"));
    }

    #[test]
    fn ignores_ids_inside_comments_and_scripts() {
        let doc = HtmlDocument::new(PAGE);
        assert!(!doc.has_container("news-content"));
        assert_eq!(
            doc.inner_html("leads-content").as_deref(),
            Some(r#"<div class="placeholder"><div>Loading</div></div>"#)
        );
    }

    #[test]
    fn id_inside_another_attribute_is_not_a_match() {
        let mut doc = HtmlDocument::new(
            r#"<div title="x id=news-content">decoy</div><div id="news-content">real</div>"#,
        );
        doc.set_content("news-content", "NEW");

        assert_eq!(doc.inner_html("news-content").as_deref(), Some("NEW"));
        assert!(doc.as_str().contains(r#"<div title="x id=news-content">decoy</div>"#));
    }

    #[test]
    fn template_contents_are_not_containers() {
        let doc = HtmlDocument::new(r#"<template><div id="news-content">inert</div></template>"#);
        assert!(!doc.has_container("news-content"));

        let mut doc = HtmlDocument::new(
            r#"<template><div id="news-content">inert</div></template><div id="news-content">live</div>"#,
        );
        doc.set_content("news-content", "<p>fresh</p>");

        assert_eq!(doc.inner_html("news-content").as_deref(), Some("<p>fresh</p>"));
        assert!(doc.as_str().contains("inert"));
        assert!(!doc.as_str().contains("live"));
    }

    #[test]
    fn first_element_with_id_wins() {
        let mut doc = HtmlDocument::new(r#"<div id="dup">one</div><div id="dup">two</div>"#);
        doc.set_content("dup", "new");

        assert!(doc.as_str().contains(r#"<div id="dup">new</div><div id="dup">two</div>"#));
    }

    #[test]
    fn set_content_replaces_nested_content() {
        let mut doc = HtmlDocument::new(PAGE);
        doc.set_content("leads-content", "<p>A</p>");

        assert_eq!(doc.inner_html("leads-content").as_deref(), Some("<p>A</p>"));
        assert!(doc.as_str().contains(r#"<div id="leads-content"><p>A</p></div>"#));
        assert!(!doc.as_str().contains("<div>Loading</div>"));
        assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn set_content_handles_unquoted_id_and_void_children() {
        let mut doc = HtmlDocument::new(PAGE);
        doc.set_content("fellows-content", "new");
        assert_eq!(doc.inner_html("fellows-content").as_deref(), Some("new"));
    }

    #[test]
    fn set_content_on_missing_id_is_noop() {
        let mut doc = HtmlDocument::new(PAGE);
        doc.set_content("missing", "<p>x</p>");
        assert_eq!(doc.as_str(), PAGE);
    }

    #[test]
    fn reveal_parent_replaces_existing_display() {
        let mut doc = HtmlDocument::new(PAGE);
        doc.reveal_parent("alumni-content");

        assert_eq!(
            doc.parent_attr("alumni-content", "style").as_deref(),
            Some("margin: 0; display: block;")
        );
        assert_eq!(doc.parent_attr("alumni-content", "class").as_deref(), Some("alumni"));
        assert!(doc.has_container("alumni-content"));
    }

    #[test]
    fn reveal_parent_adds_style_when_missing() {
        let mut doc = HtmlDocument::new(PAGE);
        doc.reveal_parent("leads-content");

        assert_eq!(
            doc.parent_attr("leads-content", "style").as_deref(),
            Some("display: block;")
        );
        assert_eq!(doc.parent_attr("leads-content", "class").as_deref(), Some("people"));
    }

    #[test]
    fn reveal_parent_keeps_quotes_inside_single_quoted_style() {
        let mut doc = HtmlDocument::new(
            r#"<section style='font-family: "A B"; display:none'><div id="alumni-content"></div></section>"#,
        );
        doc.reveal_parent("alumni-content");

        assert_eq!(
            doc.parent_attr("alumni-content", "style").as_deref(),
            Some(r#"font-family: "A B"; display: block;"#)
        );
        assert!(doc
            .as_str()
            .contains(r#"style="font-family: &quot;A B&quot;; display: block;""#));
    }

    #[test]
    fn reveal_parent_works_for_table_rows() {
        let mut doc = HtmlDocument::new(
            r#"<table><tbody><tr style="display:none"><td id="cell">x</td></tr></tbody></table>"#,
        );
        doc.reveal_parent("cell");

        assert_eq!(doc.parent_attr("cell", "style").as_deref(), Some("display: block;"));
        assert_eq!(doc.inner_html("cell").as_deref(), Some("x"));
    }

    #[test]
    fn reveal_parent_on_missing_id_is_noop() {
        let mut doc = HtmlDocument::new(PAGE);
        doc.reveal_parent("missing");
        assert_eq!(doc.into_html(), PAGE);
    }

    #[test]
    fn display_block_on_empty_style() {
        assert_eq!(display_block(None), "display: block;");
        assert_eq!(display_block(Some("DISPLAY: none;")), "display: block;");
    }
}
