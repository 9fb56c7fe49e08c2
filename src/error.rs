// In: src/error.rs

//! This module defines the single, unified error type for the entire textloom library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextloomError {
    // =========================================================================
    // === Bridge Configuration Errors (setup phase, always synchronous)
    // =========================================================================
    /// The bridge was configured with an empty destination-tree name.
    #[error("expected a non-empty name for the destination tree, got `{0}`")]
    InvalidBridgeName(String),

    /// The bridge was configured without an `enter` mutator.
    #[error("expected an `enter` mutator for bridge `{0}`, got none")]
    MissingEnter(String),

    /// The bridge was attached to a processor without a destination companion.
    #[error("expected a destination pipeline for bridge `{0}`, got none")]
    MissingDestination(String),

    // =========================================================================
    // === Runtime Step Failures
    // =========================================================================
    /// A failure reported by a user-supplied transform step. The bridge forwards
    /// these from the destination pipeline to the origin run untouched.
    #[error("transform failed: {0}")]
    Transform(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the underlying I/O subsystem (e.g., reading a document from disk).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during tree (de)serialization.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
