// In: src/bridge/transformer.rs

//! The runtime half of a bridge: the transform step that occupies one slot in
//! the origin processor's sequence and drives the destination processor to
//! completion before that slot finishes.
//!
//! Sequencing is the whole point. Because `run` does not return until the
//! destination run has returned, no step registered after the bridge can
//! observe the document or node before the destination pipeline has fully
//! finished, successfully or not.

use std::rc::Rc;

use crate::bridge::config::{EnterFn, ExitFn};
use crate::document::Document;
use crate::pipeline::{Pipeline, Processor, StepResult};
use crate::types::SharedNode;

/// The transform step produced by attaching a bridge.
///
/// Stateless across invocations: each run is independent given a fresh
/// `(node, document)` pair. The only state the transformer writes is the
/// document's namespace entry named by the bridge.
pub struct Transformer {
    name: String,
    enter: EnterFn,
    exit: Option<ExitFn>,
    origin: Processor,
    destination: Processor,
}

impl Transformer {
    pub(crate) fn new(
        name: String,
        enter: EnterFn,
        exit: Option<ExitFn>,
        origin: Processor,
        destination: Processor,
    ) -> Self {
        Self {
            name,
            enter,
            exit,
            origin,
            destination,
        }
    }

    /// The namespace name this bridge publishes its secondary tree under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the bridge over one node of the origin tree.
    pub fn run(&self, node: &SharedNode, document: &mut Document) -> StepResult {
        // 1. Enter: convert the origin node into the secondary tree.
        let tree = (self.enter)(&self.origin, &self.destination, document, node)?;

        // 2. Publish the tree under the bridge's namespace so any later step
        //    in either pipeline can find it.
        document.namespace(&self.name).tree = Some(Rc::clone(&tree));
        log_event!("event" = "bridge_enter", "name" = &self.name);

        // 3. Delegate: the destination executes its full step sequence over
        //    the secondary tree.
        if let Err(err) = self.destination.run(&tree, document) {
            // Forward the destination's failure untouched. Exit is skipped and
            // the origin run stops at this slot.
            log_event!("event" = "bridge_abort", "name" = &self.name);
            return Err(err);
        }

        // 4. Fold back, then let the origin continue.
        if let Some(exit) = &self.exit {
            exit(&self.destination, &self.origin, document, &tree, node);
        }
        log_event!("event" = "bridge_done", "name" = &self.name);

        Ok(())
    }
}
