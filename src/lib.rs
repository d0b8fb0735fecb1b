/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! # prism-rs
//!
//! Polymer Reference Interaction Site Model (PRISM) theory calculations for
//! multi-component, site-based liquid and polymer systems.
//!
//! The crate provides the type-indexed matrix/array engine underlying a
//! PRISM solve: symmetric per-type and per-pair tables, a stacked-matrix
//! array holding a rank x rank correlation matrix at every grid point with
//! per-point algebra, paired real/Fourier grids with a consistent radial
//! transform, and density bookkeeping. A [`System`] validates the inputs and
//! spawns a [`Prism`] context; the self-consistent solve itself plugs in
//! behind the [`PrismSolver`] trait, and the [`calculate`] module
//! post-processes a solved context (effective interaction parameter,
//! spinodal condition).
//!
//! ```no_run
//! use prism_rs::omega::{NoIntra, Omega, SingleSite};
//! use prism_rs::potential::HardSphere;
//! use prism_rs::{Domain, System};
//!
//! # fn main() -> prism_rs::Result<()> {
//! let mut sys = System::new(&["A", "B"])?;
//! sys.domain = Some(Domain::new(1024, 0.05)?);
//! let k = sys.domain.as_ref().unwrap().k().clone();
//!
//! for t in ["A", "B"] {
//!     sys.diameter.set(t, 1.0)?;
//!     sys.density.set(t, 0.4)?;
//!     sys.omega.set(t, t, SingleSite::new().calculate(&k))?;
//! }
//! sys.omega.set("A", "B", NoIntra::new().calculate(&k))?;
//! for (t1, t2) in [("A", "A"), ("A", "B"), ("B", "B")] {
//!     sys.potential.set(t1, t2, Box::new(HardSphere::new(1.0)))?;
//!     // closures are supplied by the solver layer
//! }
//! # Ok(())
//! # }
//! ```

pub mod calculate;
pub mod closure;
pub mod core;
pub mod omega;
pub mod potential;

pub use crate::core::{
    Density, Domain, MatrixArray, PairTable, Prism, PrismError, PrismSolver, Result, Space,
    System, ValueTable,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
