/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Error types for PRISM calculations
//!
//! All errors are local and synchronous: operations are deterministic pure
//! computations over already-validated data, so nothing is retried
//! internally. Recovery is the caller's responsibility, e.g. populate the
//! missing table slot and run `check()` again.

use super::space::Space;
use thiserror::Error;

/// A specialized Result type for PRISM operations
pub type Result<T> = std::result::Result<T, PrismError>;

/// Errors that can occur while building or post-processing a PRISM system
#[derive(Error, Debug)]
pub enum PrismError {
    /// A required table slot was unset at check() time
    #[error("table '{table}' is missing a value for {slot}")]
    IncompleteTable { table: String, slot: String },

    /// A System has no Domain assigned
    #[error("system has no domain; a domain must be created and assigned before solving")]
    MissingDomain,

    /// Lookup on an unset or unknown table slot
    #[error("no value in table '{table}' for key {key}")]
    KeyNotFound { table: String, key: String },

    /// Operands have incompatible grid length, rank, or site types
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Operands are tagged with different spaces
    #[error("space mismatch: operand is in {found} space, expected {expected}")]
    SpaceMismatch { expected: Space, found: Space },

    /// A transform was requested on an array already in the target space
    #[error("array is already in {0} space")]
    InvalidSpace(Space),

    /// A per-grid-point matrix could not be inverted
    #[error("singular matrix at grid point {grid_index}")]
    SingularMatrix { grid_index: usize },

    /// Requested functionality is not available in this release
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// A multicomponent-only calculation was given a single-component system
    #[error("calculation requires a multicomponent system, got rank {0}")]
    NotMulticomponent(usize),

    /// A negative number density was supplied
    #[error("negative density {value} for site type '{site}'")]
    InvalidDensity { site: String, value: f64 },

    /// A self pair was addressed in a table restricted to cross pairs
    #[error("self pair ({0},{0}) is not stored in a cross-pair table")]
    InvalidPair(String),

    /// A construction parameter was out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
