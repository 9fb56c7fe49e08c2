// In: src/pipeline/processor.rs

//! The sequential step engine behind every textloom pipeline.
//!
//! A `Processor` is a handle: cloning it is cheap and every clone drives the
//! same underlying step sequence. That matters for the bridge, whose transform
//! step holds handles to both the origin and the destination processor and
//! re-enters the engine mid-run.

use std::cell::RefCell;
use std::rc::Rc;

use crate::document::Document;
use crate::error::TextloomError;
use crate::pipeline::traits::{Pipeline, Plugin, StepFn, StepResult};
use crate::types::SharedNode;

/// A cheap-to-clone handle over an ordered transform-step sequence.
#[derive(Clone, Default)]
pub struct Processor {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    steps: Vec<Rc<StepFn>>,
}

impl Processor {
    /// Creates a processor with an empty step sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform step, returning the processor for chaining.
    pub fn pipe<F>(self, step: F) -> Self
    where
        F: Fn(&SharedNode, &mut Document) -> StepResult + 'static,
    {
        self.inner.borrow_mut().steps.push(Rc::new(step));
        self
    }

    /// Registers a plugin into the step sequence.
    ///
    /// The plugin's attach phase runs eagerly, with this processor as the
    /// origin and `companion` forwarded verbatim, so a misconfigured plugin
    /// fails here rather than on the first document.
    pub fn plug<P>(self, plugin: P, companion: Option<Processor>) -> Result<Self, TextloomError>
    where
        P: Plugin,
    {
        let step = plugin.attach(&self, companion)?;
        self.inner.borrow_mut().steps.push(step);
        Ok(self)
    }

    /// Number of registered steps.
    pub fn len(&self) -> usize {
        self.inner.borrow().steps.len()
    }

    /// Returns `true` if no steps are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().steps.is_empty()
    }

    /// Returns `true` if two handles drive the same underlying step sequence.
    pub fn ptr_eq(a: &Processor, b: &Processor) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl Pipeline for Processor {
    fn run(&self, tree: &SharedNode, document: &mut Document) -> StepResult {
        // Snapshot the sequence so no borrow is held while steps execute: a
        // step may re-entrantly drive this processor (or another) through a
        // clone of the handle. Steps registered mid-run join subsequent runs.
        let steps: Vec<Rc<StepFn>> = self.inner.borrow().steps.clone();
        log_event!("event" = "run", "steps" = &steps.len());

        for (index, step) in steps.iter().enumerate() {
            log_event!("event" = "run_step", "index" = &index);
            step(tree, document)?;
        }

        Ok(())
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;

    /// Helper: a step that records a marker into the document's diagnostics.
    fn recording_step(marker: &'static str) -> impl Fn(&SharedNode, &mut Document) -> StepResult {
        move |_tree: &SharedNode, document: &mut Document| {
            document.warn(marker, None);
            Ok(())
        }
    }

    #[test]
    fn test_steps_run_in_registration_order() {
        let processor = Processor::new()
            .pipe(recording_step("first"))
            .pipe(recording_step("second"))
            .pipe(recording_step("third"));

        let tree = Node::new("root").into_shared();
        let mut document = Document::new("");
        processor.run(&tree, &mut document).unwrap();

        let order: Vec<_> = document
            .messages()
            .iter()
            .map(|m| m.reason.as_str())
            .collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_first_error_halts_remaining_steps() {
        let processor = Processor::new()
            .pipe(recording_step("ran"))
            .pipe(|_tree, _document| Err(TextloomError::Transform("boom".into())))
            .pipe(recording_step("never"));

        let tree = Node::new("root").into_shared();
        let mut document = Document::new("");
        let result = processor.run(&tree, &mut document);

        assert!(matches!(result, Err(TextloomError::Transform(ref m)) if m == "boom"));
        assert_eq!(document.messages().len(), 1);
        assert_eq!(document.messages()[0].reason, "ran");
    }

    #[test]
    fn test_clones_share_one_step_sequence() {
        let processor = Processor::new();
        let handle = processor.clone();
        assert!(Processor::ptr_eq(&processor, &handle));

        let processor = processor.pipe(recording_step("shared"));
        assert_eq!(handle.len(), 1);

        let tree = Node::new("root").into_shared();
        let mut document = Document::new("");
        handle.run(&tree, &mut document).unwrap();
        assert_eq!(document.messages()[0].reason, "shared");

        // Independent processors do not share.
        assert!(!Processor::ptr_eq(&processor, &Processor::new()));
    }

    #[test]
    fn test_steps_registered_mid_run_join_subsequent_runs_only() {
        let processor = Processor::new();
        let handle = processor.clone();

        let processor = processor.pipe(move |_tree, document: &mut Document| {
            document.warn("outer", None);
            // Registering during a run must not affect the current snapshot.
            let _ = handle.clone().pipe(|_t, d: &mut Document| {
                d.warn("late", None);
                Ok(())
            });
            Ok(())
        });

        let tree = Node::new("root").into_shared();
        let mut document = Document::new("");
        processor.run(&tree, &mut document).unwrap();
        assert_eq!(document.messages().len(), 1, "late step must not run yet");

        processor.run(&tree, &mut document).unwrap();
        let reasons: Vec<_> = document
            .messages()
            .iter()
            .map(|m| m.reason.as_str())
            .collect();
        assert_eq!(reasons, ["outer", "outer", "late"]);
    }

    #[test]
    fn test_plug_surfaces_attach_failures_eagerly() {
        struct FailingPlugin;

        impl Plugin for FailingPlugin {
            fn attach(
                self,
                _origin: &Processor,
                _companion: Option<Processor>,
            ) -> Result<Rc<StepFn>, TextloomError> {
                Err(TextloomError::Transform("bad attach".into()))
            }
        }

        let result = Processor::new().plug(FailingPlugin, None);
        assert!(matches!(result, Err(TextloomError::Transform(_))));
    }
}
