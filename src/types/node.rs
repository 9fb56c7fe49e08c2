//! This module defines the canonical, type-safe representation of a syntax-tree
//! element used throughout the textloom pipelines.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// The shared-mutable handle to a tree root.
///
/// During a bridge run the origin pipeline, the destination pipeline, the
/// document's namespace slot, and the `enter`/`exit` mutators all alias the
/// same root through this handle. `Rc<RefCell<_>>` keeps that aliasing
/// single-threaded at the type level: the handle is not `Send`, matching the
/// engine's one-flow-of-control-per-document model.
pub type SharedNode = Rc<RefCell<Node>>;

/// The canonical tree element for both the coarse (document-level) and fine
/// (sentence/word-level) representations.
///
/// A node is discriminated by its `kind` tag and is either a parent (has
/// `children`) or a literal (has a `value`). The open `data` map carries
/// arbitrary metadata that transform steps attach and later steps read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// The discriminant tag, e.g. `"root"`, `"paragraph"`, `"sentence"`, `"word"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// The literal value for leaf nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Child nodes, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Open metadata attached by transform steps.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    /// Creates an empty node of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            children: Vec::new(),
            data: serde_json::Map::new(),
        }
    }

    /// Creates a literal node carrying a value.
    pub fn literal(kind: impl Into<String>, value: impl Into<String>) -> Self {
        let mut node = Self::new(kind);
        node.value = Some(value.into());
        node
    }

    /// Creates a parent node over the given children.
    pub fn parent(kind: impl Into<String>, children: Vec<Node>) -> Self {
        let mut node = Self::new(kind);
        node.children = children;
        node
    }

    /// Appends a child, returning the node for chaining.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Counts this node plus all of its descendants.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Wraps the node into the shared root handle both pipelines alias.
    pub fn into_shared(self) -> SharedNode {
        Rc::new(RefCell::new(self))
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
