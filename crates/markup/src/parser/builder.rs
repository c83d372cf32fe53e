//! The mutable accumulator behind the parser.
//!
//! A builder folds text runs, child brackets, and classified properties into
//! a [`Node`]. A bracket that turns out to be malformed is marked failed and
//! re-emitted as literal text by its parent, brackets included.

use crate::node::Node;
use crate::property::Property;

#[derive(Debug, Default)]
pub(crate) struct NodeBuilder {
    /// Text seen before the first child bracket. Merged with `pending` for
    /// childless builders at build time.
    text: String,
    /// The current plain-text run, not yet committed as a child.
    pending: String,
    children: Vec<NodeBuilder>,
    properties: Vec<Property>,
    valid: bool,
    fail_char: Option<char>,
}

impl NodeBuilder {
    pub(crate) fn new() -> Self {
        NodeBuilder {
            valid: true,
            ..NodeBuilder::default()
        }
    }

    /// Mark this bracket as malformed. `trailing` is the character that
    /// exposed the failure (the unfollowed `]`), re-emitted by the parent.
    pub(crate) fn fail(mut self, trailing: Option<char>) -> Self {
        self.valid = false;
        self.fail_char = trailing;
        self
    }

    /// True when this builder holds nothing but text.
    pub(crate) fn is_plain(&self) -> bool {
        self.children.is_empty() && self.properties.is_empty()
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.pending.push(c);
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.pending.push_str(s);
    }

    pub(crate) fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Discard queued properties. A property list that never terminates
    /// degrades to literal text, so nothing classified from it may survive.
    pub(crate) fn clear_properties(&mut self) {
        self.properties.clear();
    }

    /// Commit the pending text run and append a completed child bracket.
    pub(crate) fn push_child(&mut self, child: NodeBuilder) {
        self.flush();
        self.children.push(child);
    }

    /// Append a finished bracket, degrading to literal text if it failed.
    pub(crate) fn append(&mut self, child: NodeBuilder) {
        if child.valid {
            self.push_child(child);
            return;
        }
        log::trace!("malformed bracket degraded to literal text");
        self.push_char('[');
        let trailing = child.fail_char;
        if child.is_plain() {
            self.push_str(&child.plain_text());
        } else {
            self.push_child(child);
        }
        if let Some(c) = trailing {
            self.push_char(c);
        }
    }

    fn plain_text(self) -> String {
        let mut text = self.text;
        text.push_str(&self.pending);
        text
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let run = std::mem::take(&mut self.pending);
        if self.children.is_empty() && self.text.is_empty() {
            self.text = run;
        } else {
            let mut child = NodeBuilder::new();
            child.text = run;
            self.children.push(child);
        }
    }

    /// Materialize the subtree: children first, then this builder's queued
    /// properties over the result. A childless text-only wrapper collapses
    /// into its single child so one-element wrappers never appear.
    pub(crate) fn build(mut self) -> Node {
        self.flush();
        let mut node = if self.text.is_empty() && self.children.len() == 1 {
            self.children
                .pop()
                .map(NodeBuilder::build)
                .unwrap_or_default()
        } else {
            let children = self.children.into_iter().map(NodeBuilder::build).collect();
            Node::from_parts(self.text, children)
        };
        for property in self.properties {
            property.apply(&mut node);
        }
        node
    }
}
