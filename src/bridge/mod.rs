// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the adapter that connects two independently operating
// processors. It occupies one step slot in the origin processor and, inside
// that slot, drives the destination processor to completion over a secondary
// tree derived from the origin's node.
//
// Life of a bridge:
//
//   1. [Factory (bridge)]           -> validates a `BridgeConfig`
//         |
//         `-> name non-empty, `enter` present -> returns an `Attacher`
//
//   2. [Attacher (Plugin::attach)]  -> invoked by `Processor::plug`
//         |
//         `-> destination companion present -> returns the transform step
//
//   3. [Transformer (run)]          -> invoked per document by the origin run
//         |
//         `-> a. `enter(origin, destination, document, node)` -> secondary tree
//         |
//         `-> b. publishes the tree under `document.namespace(name).tree`
//         |
//         `-> c. `destination.run(tree, document)` -> full destination sequence
//         |
//         `-> d. on error: forwards it untouched (origin halts); on success:
//                `exit(destination, origin, document, tree, node)`, then Ok
//
// Steps 1 and 2 are the setup phase: every configuration error surfaces there,
// synchronously, before any document is processed.
//
// ====================================================================================
pub mod config;

pub(crate) mod attacher;
pub(crate) mod transformer;

// --- Public API ---
pub use attacher::{bridge, Attacher};
pub use config::{BridgeConfig, EnterFn, ExitFn};
pub use transformer::Transformer;
