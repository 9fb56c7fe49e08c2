// In: src/document.rs

//! This module defines the `Document`: the mutable container a pipeline run
//! threads through every transform step.
//!
//! A document carries its textual content, an optional source path, a
//! namespaced metadata store, and the lint-style diagnostics steps attach
//! along the way. The namespace store is the one piece of state the bridge
//! adapter writes: each bridge publishes its secondary tree under its own
//! namespace name, where any later step in either pipeline can find it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use hashbrown::HashMap;

use crate::error::TextloomError;
use crate::types::SharedNode;

//==================================================================================
// Namespace Records
//==================================================================================

/// The mutable, identity-stable record associated with one namespace name.
///
/// Records are created lazily on first access and live for the lifetime of the
/// document, so collaborators that run after a bridge can still read what it
/// published.
#[derive(Default)]
pub struct NamespaceRecord {
    /// The secondary tree a bridge stored under this namespace, if any.
    pub tree: Option<SharedNode>,
    /// Open key-value metadata scoped to this namespace.
    pub data: HashMap<String, serde_json::Value>,
}

//==================================================================================
// Diagnostics
//==================================================================================

/// A lint-style message attached to a document by a transform step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable reason for the message.
    pub reason: String,
    /// The step or rule that produced the message.
    pub source: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{} [{}]", self.reason, source),
            None => write!(f, "{}", self.reason),
        }
    }
}

//==================================================================================
// Document
//==================================================================================

/// The mutable document container threaded through pipeline runs.
pub struct Document {
    content: String,
    path: Option<PathBuf>,
    namespaces: HashMap<String, NamespaceRecord>,
    messages: Vec<Diagnostic>,
}

impl Document {
    /// Creates an in-memory document from its textual content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            path: None,
            namespaces: HashMap::new(),
            messages: Vec::new(),
        }
    }

    /// Creates a document by reading its content from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TextloomError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut document = Self::new(content);
        document.path = Some(path.to_path_buf());
        Ok(document)
    }

    /// The current textual content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the textual content (e.g. after a serializing step).
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// The source path, when the document was read from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the record for `name`, creating it on first access.
    ///
    /// The record is identity-stable: every call with the same name yields the
    /// same record, so multiple writers observe each other's fields.
    pub fn namespace(&mut self, name: &str) -> &mut NamespaceRecord {
        // entry_ref avoids allocating the key when the record already exists.
        self.namespaces.entry_ref(name).or_default()
    }

    /// Returns `true` if a record for `name` has been created.
    pub fn has_namespace(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    /// Attaches a lint-style message to the document.
    pub fn warn(&mut self, reason: impl Into<String>, source: Option<&str>) {
        self.messages.push(Diagnostic {
            reason: reason.into(),
            source: source.map(str::to_owned),
        });
    }

    /// All diagnostics attached so far, in insertion order.
    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    /// Renders the attached diagnostics for terminal display.
    pub fn report(&self) -> String {
        let label = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<document>".to_string());

        let mut out = String::new();
        for message in &self.messages {
            out.push_str(&format!(
                "{}: {} {}\n",
                label.as_str().bold(),
                "warning".yellow(),
                message
            ));
        }
        out
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;

    #[test]
    fn test_namespace_is_created_lazily_and_identity_stable() {
        let mut doc = Document::new("hello");
        assert!(!doc.has_namespace("fine"));

        doc.namespace("fine")
            .data
            .insert("visited".into(), serde_json::Value::Bool(true));

        // A second access must observe the same record.
        assert!(doc.has_namespace("fine"));
        assert_eq!(
            doc.namespace("fine").data.get("visited"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_distinct_namespaces_do_not_clobber() {
        let mut doc = Document::new("");
        doc.namespace("a").tree = Some(Node::new("root").into_shared());
        doc.namespace("b").tree = Some(Node::new("sentence").into_shared());

        assert_eq!(
            doc.namespace("a").tree.as_ref().unwrap().borrow().kind,
            "root"
        );
        assert_eq!(
            doc.namespace("b").tree.as_ref().unwrap().borrow().kind,
            "sentence"
        );
    }

    #[test]
    fn test_from_path_surfaces_io_errors() {
        let result = Document::from_path("/definitely/not/a/real/file.txt");
        assert!(matches!(result, Err(TextloomError::Io(_))));
    }

    #[test]
    fn test_diagnostics_accumulate_and_render() {
        let mut doc = Document::new("hi");
        doc.warn("sentence is too long", Some("long-sentence"));
        doc.warn("trailing whitespace", None);

        assert_eq!(doc.messages().len(), 2);
        assert_eq!(doc.messages()[0].source.as_deref(), Some("long-sentence"));

        let report = doc.report();
        assert!(report.contains("sentence is too long"));
        assert!(report.contains("trailing whitespace"));
    }
}
