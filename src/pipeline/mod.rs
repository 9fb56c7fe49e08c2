// In: src/pipeline/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Pipeline Layer
// ====================================================================================
//
// The `pipeline` layer is the execution substrate the bridge adapter plugs into.
// A `Processor` is a cheap-to-clone handle over an ordered step sequence; running
// it walks the steps over a shared tree root and a mutable document, stopping at
// the first failure.
//
// Control Flow (one run):
//
//   1. [Caller]                  -> processor.run(&tree, &mut document)
//         |
//         `-> snapshots the registered steps, then for each step in order ->
//
//   2. [Step (Rc<StepFn>)]       -> step(&tree, &mut document) -> Result<(), _>
//         |
//         `-> Ok(())  : the next step runs
//         `-> Err(e)  : the run returns `e`; remaining steps are skipped
//
// A step may itself hold clones of processor handles and drive them re-entrantly;
// the bridge's transform step does exactly that with its destination processor.
//
// ====================================================================================
pub(crate) mod processor;
pub mod traits;

pub use processor::Processor;
pub use traits::{Pipeline, Plugin, StepFn, StepResult};
