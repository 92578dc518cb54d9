//! Pure Rust strict parser backed by roxmltree
//!
//! Used wherever there is no browser `DOMParser` (headless validation, the
//! stateless JS API, tests).

use roxmltree::{Document as XmlDocument, Node, ParsingOptions};

use super::svg_tree::{SvgElement, SvgNode};
use super::{MarkupParser, ParseError};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, Clone, Copy, Default)]
pub struct RoxmlParser;

impl RoxmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupParser for RoxmlParser {
    type Root = SvgElement;

    fn parse(&self, text: &str) -> Result<SvgElement, ParseError> {
        // Standalone SVG files often carry a DOCTYPE
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let doc = XmlDocument::parse_with_options(text, options)
            .map_err(|e| ParseError::Malformed(e.to_string()))?;

        Ok(copy_element(text, doc.root_element(), &[]))
    }
}

type NamespaceScope = Vec<(Option<String>, String)>;

fn in_scope_namespaces(node: Node) -> NamespaceScope {
    node.namespaces()
        .filter(|ns| ns.uri() != XML_NAMESPACE)
        .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
        .collect()
}

/// Qualified names of an element and its attributes as written in the
/// source, namespace declarations excluded
struct WrittenNames<'a> {
    element: &'a str,
    attributes: Vec<&'a str>,
}

/// Scan a start tag (`source` begins at its `<`)
fn scan_start_tag(source: &str) -> WrittenNames<'_> {
    let is_name_end = |c: char| c.is_whitespace() || c == '/' || c == '>' || c == '=';
    let body = source.strip_prefix('<').unwrap_or(source);
    let name_end = body.find(is_name_end).unwrap_or(body.len());
    let element = &body[..name_end];

    let mut attributes = Vec::new();
    let mut rest = &body[name_end..];
    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('>') {
            break;
        }
        let end = rest.find(is_name_end).unwrap_or(rest.len());
        let name = &rest[..end];
        rest = rest[end..].trim_start();
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let quote = match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => q,
                _ => break,
            };
            let value = &after_eq[1..];
            let close = match value.find(quote) {
                Some(i) => i,
                None => break,
            };
            rest = &value[close + 1..];
        }
        if name.is_empty() {
            break;
        }
        if name != "xmlns" && !name.starts_with("xmlns:") {
            attributes.push(name);
        }
    }

    WrittenNames { element, attributes }
}

fn split_qname(qname: &str) -> (Option<String>, String) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
        None => (None, qname.to_string()),
    }
}

/// Deep-copy a parsed element into an owned tree, keeping every name as the
/// author wrote it
fn copy_element(source: &str, node: Node, parent_scope: &[(Option<String>, String)]) -> SvgElement {
    let scope = in_scope_namespaces(node);
    let tag = node.tag_name();
    let namespace = tag.namespace().map(str::to_string);
    let written = scan_start_tag(&source[node.range()]);
    let (prefix, name) = match split_qname(written.element) {
        (prefix, local) if local == tag.name() => (prefix, local),
        // Elements expanded from DTD entities have no span of their own
        _ => (
            tag.namespace()
                .and_then(|uri| node.lookup_prefix(uri))
                .map(str::to_string),
            tag.name().to_string(),
        ),
    };

    let parsed: Vec<_> = node.attributes().collect();
    let attributes = if written.attributes.len() == parsed.len() {
        written
            .attributes
            .iter()
            .zip(&parsed)
            .map(|(key, attr)| (key.to_string(), attr.value().to_string()))
            .collect()
    } else {
        // Scan disagrees with the parser (should not happen): fall back to
        // reconstructing prefixes from namespace URIs
        log::warn!("Attribute scan mismatch on <{}>", written.element);
        parsed
            .iter()
            .map(|attr| {
                let key = match attr.namespace().and_then(|uri| node.lookup_prefix(uri)) {
                    Some(prefix) => format!("{}:{}", prefix, attr.name()),
                    None => attr.name().to_string(),
                };
                (key, attr.value().to_string())
            })
            .collect()
    };

    let namespace_decls = scope
        .iter()
        .filter(|decl| !parent_scope.contains(decl))
        .cloned()
        .collect();

    let children = node
        .children()
        .filter_map(|child| {
            if child.is_element() {
                Some(SvgNode::Element(copy_element(source, child, &scope)))
            } else if child.is_text() {
                child.text().map(|t| SvgNode::Text(t.to_string()))
            } else {
                None
            }
        })
        .collect();

    SvgElement {
        prefix,
        name,
        namespace,
        namespace_decls,
        attributes,
        children,
    }
}
