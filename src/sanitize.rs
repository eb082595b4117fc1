//! Schema-driven sanitization of attributes and element trees.

use crate::ast::*;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::names::{normalize_attribute_key, to_tag_name};
use crate::schema::SchemaRegistry;
use crate::style::style_attribute;

/// Which attribute name is used to find a prop checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckerLookup {
    /// The attribute name as written in the markup (`stroke-width`).
    ///
    /// Schema props are camelCase, so hyphenated and namespaced attributes
    /// never find a checker and are dropped.
    #[default]
    Raw,
    /// The normalized prop name (`strokeWidth`).
    Normalized,
}

/// Filters elements and attributes against a [`SchemaRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer<'a> {
    registry: &'a SchemaRegistry,
    lookup: CheckerLookup,
}

impl<'a> Sanitizer<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            lookup: CheckerLookup::default(),
        }
    }

    pub fn with_lookup(mut self, lookup: CheckerLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Sanitize the attributes of one element.
    ///
    /// Returns `None` when `tag` has no schema entry, meaning the whole element
    /// is unsupported. Otherwise returns the accepted attributes under their
    /// normalized names, in input order, with `style` converted to an object
    /// literal. Every rejected attribute produces one diagnostic.
    pub fn sanitize_attributes(
        &self,
        tag: &str,
        attributes: &Attributes,
        source: &str,
        diagnostics: &mut Diagnostics,
    ) -> Option<Attributes> {
        let entry = self.registry.get(tag)?;
        let mut cleaned = Attributes::with_capacity(attributes.len());

        for (key, value) in attributes {
            let name = normalize_attribute_key(key);
            let lookup_key = match self.lookup {
                CheckerLookup::Raw => key.as_str(),
                CheckerLookup::Normalized => name.as_str(),
            };

            match entry.check(lookup_key, value.as_str()) {
                Ok(()) => {
                    let value = match value {
                        AttrValue::Text(style) if name == "style" => {
                            AttrValue::Object(style_attribute(style))
                        }
                        other => other.clone(),
                    };
                    cleaned.insert(name, value);
                }
                Err(reason) => diagnostics.push(Diagnostic::UnsupportedAttribute {
                    attribute: key.clone(),
                    tag: tag.to_string(),
                    source: source.to_string(),
                    reason,
                }),
            }
        }

        Some(cleaned)
    }

    /// Sanitize a whole tree, returning a new one.
    ///
    /// Tag names are converted to component names before lookup. Child
    /// elements without a schema entry are removed together with their
    /// subtree; the root is always kept. If the root itself is unsupported its
    /// attributes are left untouched.
    pub fn sanitize_tree(
        &self,
        root: &Element,
        source: &str,
        diagnostics: &mut Diagnostics,
    ) -> Element {
        tracing::debug!(source, root = %root.name, "sanitizing tree");

        let name = to_tag_name(&root.name);
        let attributes = self
            .sanitize_attributes(&name, &root.attributes, source, diagnostics)
            .unwrap_or_else(|| root.attributes.clone());
        let children = self.sanitize_children(&root.children, source, diagnostics);

        Element {
            name,
            attributes,
            children,
        }
    }

    fn sanitize_children(
        &self,
        children: &[Node],
        source: &str,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Node> {
        // Drop unsupported siblings first so their warnings precede anything
        // reported from inside the survivors.
        let survivors: Vec<(&Node, Option<String>)> = children
            .iter()
            .filter_map(|node| match node {
                Node::Text(_) => Some((node, None)),
                Node::Element(child) => {
                    let name = to_tag_name(&child.name);
                    if self.registry.contains(&name) {
                        Some((node, Some(name)))
                    } else {
                        diagnostics.push(Diagnostic::UnsupportedElement {
                            tag: name,
                            source: source.to_string(),
                        });
                        None
                    }
                }
            })
            .collect();

        survivors
            .into_iter()
            .filter_map(|(node, name)| match (node, name) {
                (Node::Text(text), _) => Some(Node::Text(text.clone())),
                (Node::Element(child), Some(name)) => {
                    let attributes =
                        self.sanitize_attributes(&name, &child.attributes, source, diagnostics)?;
                    let children = self.sanitize_children(&child.children, source, diagnostics);
                    Some(Node::Element(Element {
                        name,
                        attributes,
                        children,
                    }))
                }
                (Node::Element(_), None) => None,
            })
            .collect()
    }
}
