//! This module defines the core, strongly-typed tree representations used
//! throughout the textloom pipelines.
//!
//! It currently includes the canonical `Node` tree element and the `SharedNode`
//! root handle that both pipelines alias during a bridge run.
//!
//! Additional types related to positions or source maps may be added here.

pub mod node;

// Re-export the main type(s) for easier access.
pub use node::{Node, SharedNode};
