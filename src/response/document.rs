// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document decoding via html5ever
//!
//! Responses requested as documents are parsed into a small owned tree;
//! markup the parser cannot make sense of still yields a document, as a
//! browser would recover it.

use std::collections::HashMap;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::error::{Error, Result};

/// Parsed document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<DocNode>,
}

#[derive(Debug, Clone, PartialEq)]
struct DocNode {
    data: NodeData,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
enum NodeData {
    Root,
    Element {
        tag: String,
        attributes: HashMap<String, String>,
    },
    Text(String),
    Comment(String),
}

impl Document {
    /// Parse markup into a document
    pub fn parse(input: &str) -> Result<Document> {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                drop_doctype: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let dom = parse_document(RcDom::default(), opts)
            .from_utf8()
            .read_from(&mut input.as_bytes())
            .map_err(|e| Error::decode(format!("document parse failed: {}", e)))?;

        let mut doc = Document {
            nodes: vec![DocNode {
                data: NodeData::Root,
                parent: None,
                children: Vec::new(),
            }],
        };
        for child in dom.document.children.borrow().iter() {
            doc.convert_node(child, 0);
        }
        Ok(doc)
    }

    fn convert_node(&mut self, handle: &Handle, parent: usize) -> Option<usize> {
        let data = match handle.data {
            RcNodeData::Document | RcNodeData::Doctype { .. } => return None,
            RcNodeData::ProcessingInstruction { .. } => return None,
            RcNodeData::Text { ref contents } => {
                let text = contents.borrow().to_string();
                // Skip whitespace-only text nodes (but keep single spaces)
                if text.trim().is_empty() && text.len() > 1 {
                    return None;
                }
                NodeData::Text(text)
            }
            RcNodeData::Comment { ref contents } => NodeData::Comment(contents.to_string()),
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let mut attributes = HashMap::new();
                for attr in attrs.borrow().iter() {
                    attributes.insert(attr.name.local.to_string(), attr.value.to_string());
                }
                NodeData::Element {
                    tag: name.local.to_string(),
                    attributes,
                }
            }
        };

        let id = self.nodes.len();
        self.nodes.push(DocNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);

        for child in handle.children.borrow().iter() {
            self.convert_node(child, id);
        }
        Some(id)
    }

    /// The document root
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef { doc: self, id: 0 }
    }

    /// First element with the given tag name, depth-first
    pub fn find(&self, tag: &str) -> Option<NodeRef<'_>> {
        self.find_from(0, tag)
    }

    /// Every element with the given tag name, depth-first order
    pub fn find_all(&self, tag: &str) -> Vec<NodeRef<'_>> {
        let mut found = Vec::new();
        self.collect_from(0, tag, &mut found);
        found
    }

    fn find_from(&self, id: usize, tag: &str) -> Option<NodeRef<'_>> {
        for &child in &self.nodes[id].children {
            if let NodeData::Element { tag: t, .. } = &self.nodes[child].data {
                if t.eq_ignore_ascii_case(tag) {
                    return Some(NodeRef { doc: self, id: child });
                }
            }
            if let Some(hit) = self.find_from(child, tag) {
                return Some(hit);
            }
        }
        None
    }

    fn collect_from<'a>(&'a self, id: usize, tag: &str, found: &mut Vec<NodeRef<'a>>) {
        for &child in &self.nodes[id].children {
            if let NodeData::Element { tag: t, .. } = &self.nodes[child].data {
                if t.eq_ignore_ascii_case(tag) {
                    found.push(NodeRef { doc: self, id: child });
                }
            }
            self.collect_from(child, tag, found);
        }
    }
}

/// Borrowed handle to one document node
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: usize,
}

impl<'a> NodeRef<'a> {
    /// Tag name, for element nodes
    pub fn tag(&self) -> Option<&'a str> {
        match &self.doc.nodes[self.id].data {
            NodeData::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Attribute value, for element nodes
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        match &self.doc.nodes[self.id].data {
            NodeData::Element { attributes, .. } => attributes.get(name).map(|v| v.as_str()),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(self.id, &mut out);
        out
    }

    fn collect_text(&self, id: usize, out: &mut String) {
        if let NodeData::Text(text) = &self.doc.nodes[id].data {
            out.push_str(text);
        }
        for &child in &self.doc.nodes[id].children {
            self.collect_text(child, out);
        }
    }

    /// Child nodes
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.doc.nodes[self.id]
            .children
            .iter()
            .map(|&id| NodeRef { doc: self.doc, id })
            .collect()
    }

    /// Parent node, when not the root
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.doc.nodes[self.id]
            .parent
            .map(|id| NodeRef { doc: self.doc, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_document() {
        let doc = Document::parse("<html><body><p>Hello</p></body></html>").unwrap();
        let p = doc.find("p").unwrap();
        assert_eq!(p.text_content(), "Hello");
    }

    #[test]
    fn test_parse_with_attributes() {
        let doc = Document::parse("<div id=\"main\" class=\"wide\">content</div>").unwrap();
        let div = doc.find("div").unwrap();
        assert_eq!(div.attribute("id"), Some("main"));
        assert_eq!(div.attribute("class"), Some("wide"));
        assert_eq!(div.attribute("missing"), None);
    }

    #[test]
    fn test_find_all() {
        let doc = Document::parse("<ul><li>a</li><li>b</li><li>c</li></ul>").unwrap();
        let items = doc.find_all("li");
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].text_content(), "b");
    }

    #[test]
    fn test_xml_like_payload() {
        let doc = Document::parse("<company><name>Acme</name></company>").unwrap();
        let name = doc.find("name").unwrap();
        assert_eq!(name.text_content(), "Acme");
        assert_eq!(name.parent().and_then(|p| p.tag()), Some("company"));
    }

    #[test]
    fn test_nested_text_content() {
        let doc = Document::parse("<div>a<span>b</span>c</div>").unwrap();
        assert_eq!(doc.find("div").unwrap().text_content(), "abc");
    }
}
