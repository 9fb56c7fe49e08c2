// In: src/pipeline/traits.rs

//! Defines the behavioral traits for pipeline execution and plugin attachment.
//!
//! The `Pipeline` trait is the seam the bridge delegates through: it only needs
//! a way to run a step sequence to completion over a tree and a document. The
//! `Plugin` trait is the registration-time contract: a plugin gets one chance,
//! at attach time, to validate its configuration and produce the step that will
//! occupy its slot in the sequence.

use std::rc::Rc;

use crate::document::Document;
use crate::error::TextloomError;
use crate::pipeline::processor::Processor;
use crate::types::SharedNode;

/// The outcome of a transform step or of a full pipeline run.
pub type StepResult = Result<(), TextloomError>;

/// A registered transform step.
///
/// Steps receive the shared tree root and the mutable document, and report
/// completion through their return value: returning is the completion signal,
/// and it happens exactly once per invocation.
pub type StepFn = dyn Fn(&SharedNode, &mut Document) -> StepResult;

/// The execution surface of a step sequence.
pub trait Pipeline {
    /// Runs every registered step over `tree` and `document`, in registration
    /// order, stopping at the first error. The first `Err` is returned to the
    /// caller untouched; remaining steps are skipped.
    fn run(&self, tree: &SharedNode, document: &mut Document) -> StepResult;
}

/// A value that can be registered into a processor's step sequence.
///
/// `Processor::plug` invokes `attach` eagerly, passing the processor itself as
/// `origin` and forwarding whatever companion value the caller supplied at
/// registration time. Misconfiguration therefore surfaces at registration,
/// before the processor ever runs a document.
pub trait Plugin {
    /// Validates the attachment and produces the step for this plugin's slot.
    fn attach(
        self,
        origin: &Processor,
        companion: Option<Processor>,
    ) -> Result<Rc<StepFn>, TextloomError>;
}
