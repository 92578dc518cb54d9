//! Owned element tree
//!
//! Parsed documents borrow from their source text. The preview keeps an owned
//! deep copy instead, detached from the throwaway parse.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};

use super::RootElement;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

/// An element with everything needed to write it back out
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct SvgElement {
    /// Namespace prefix the element was written with, if any
    pub prefix: Option<String>,
    /// Local name
    pub name: String,
    /// Namespace URI the name resolved to
    pub namespace: Option<String>,
    /// `xmlns`/`xmlns:p` declarations made on this element: (prefix, uri)
    pub namespace_decls: Vec<(Option<String>, String)>,
    /// Attributes as (qualified name, value)
    pub attributes: Vec<(String, String)>,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// `prefix:name`, or just `name` for unprefixed elements
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.name),
            None => self.name.clone(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Add a class to the `class` attribute unless already present
    pub fn add_class(&mut self, class: &str) {
        let merged = match self.attribute("class") {
            Some(existing) if existing.split_whitespace().any(|c| c == class) => return,
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attribute("class", merged);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|node| match node {
            SvgNode::Element(el) => Some(el),
            SvgNode::Text(_) => None,
        })
    }

    /// Serialize this element and its subtree back to markup
    pub fn to_markup(&self) -> Result<String, quick_xml::Error> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), quick_xml::Error> {
        let tag = self.qualified_name();
        let mut start = BytesStart::new(tag.as_str());

        for (prefix, uri) in &self.namespace_decls {
            let key = match prefix {
                Some(prefix) => format!("xmlns:{}", prefix),
                None => "xmlns".to_string(),
            };
            start.push_attribute((key.as_str(), uri.as_str()));
        }
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                SvgNode::Element(el) => el.write_to(writer)?,
                SvgNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
        Ok(())
    }
}

impl RootElement for SvgElement {
    fn tag_name(&self) -> String {
        self.qualified_name()
    }
}
