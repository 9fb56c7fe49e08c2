//! This file is the root of the `textloom` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`pipeline`, `bridge`,
//!     etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the public API surface: the bridge factory, the processor
//!     engine, and the document/tree types they operate on.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod document;
pub mod pipeline;
pub mod types;

mod error;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use bridge::{bridge, Attacher, BridgeConfig, Transformer};
pub use document::{Diagnostic, Document, NamespaceRecord};
pub use error::TextloomError;
pub use observability::enable_verbose_logging;
pub use pipeline::{Pipeline, Plugin, Processor, StepFn, StepResult};
pub use types::{Node, SharedNode};
