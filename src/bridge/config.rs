// In: src/bridge/config.rs

//! The single source of truth for bridge configuration.
//!
//! A `BridgeConfig` is created once at the application boundary and handed to
//! `bridge()`, which validates it before any pipeline interaction happens. The
//! struct itself performs no validation: fields are public and `Default` so a
//! partially-filled config can exist, and `bridge()` is the one place that
//! decides whether it is usable.

use crate::document::Document;
use crate::error::TextloomError;
use crate::pipeline::Processor;
use crate::types::SharedNode;

/// Converts an origin node into the root of the destination tree.
///
/// Arguments are `(origin, destination, document, node)`. The mutator is free
/// to read the document and node and to construct an entirely new tree; it is
/// not assumed to be pure and may also mutate the document. An `Err` aborts
/// the bridge step like any other transform failure.
pub type EnterFn = Box<
    dyn Fn(&Processor, &Processor, &mut Document, &SharedNode) -> Result<SharedNode, TextloomError>,
>;

/// Folds destination-pipeline results back onto the origin node and document.
///
/// Arguments are `(destination, origin, document, tree, node)`. The return
/// value is `()`: mutation of `node` and `document` is the fold-back channel.
pub type ExitFn = Box<dyn Fn(&Processor, &Processor, &mut Document, &SharedNode, &SharedNode)>;

/// Configuration for one bridge between two processors.
#[derive(Default)]
pub struct BridgeConfig {
    /// The namespace name the secondary tree is published under. Must be
    /// non-empty; distinct bridges on the same document must use distinct
    /// names (caller responsibility).
    pub name: String,

    /// The enter mutator. Required: a bridge without one is rejected by
    /// `bridge()`.
    pub enter: Option<EnterFn>,

    /// The exit mutator. Optional: when absent the exit phase is skipped
    /// entirely.
    pub exit: Option<ExitFn>,
}

impl BridgeConfig {
    /// Convenience constructor for the common name-plus-enter case.
    pub fn new<F>(name: impl Into<String>, enter: F) -> Self
    where
        F: Fn(&Processor, &Processor, &mut Document, &SharedNode) -> Result<SharedNode, TextloomError>
            + 'static,
    {
        Self {
            name: name.into(),
            enter: Some(Box::new(enter)),
            exit: None,
        }
    }

    /// Attaches an exit mutator, returning the config for chaining.
    pub fn with_exit<F>(mut self, exit: F) -> Self
    where
        F: Fn(&Processor, &Processor, &mut Document, &SharedNode, &SharedNode) + 'static,
    {
        self.exit = Some(Box::new(exit));
        self
    }
}
