/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Closure capability interface
//!
//! A closure completes the integral-equation system by relating the pair
//! potential and correlation data to the direct correlation function.
//! Concrete closures plug in through the [`Closure`] trait; this crate only
//! defines the seam they attach to.
//!
//! [`System::create_prism`](crate::core::system::System::create_prism) hands
//! every closure its pair's potential, already evaluated on the domain's
//! real-space grid and reduced by kT. Pointwise ("atomic") closures accept
//! and store the field. Molecular closures, which would need the attractive
//! branch of the potential and are not supported in this release, report
//! `NotImplemented` from [`Closure::bind_potential`] instead; the error
//! aborts PRISM construction.

use crate::core::errors::Result;
use ndarray::Array1;

/// Capability interface for closure relations
pub trait Closure {
    /// Accept the reduced pair potential u(r)/kT sampled on the real-space grid
    fn bind_potential(&mut self, potential: Array1<f64>) -> Result<()>;

    /// The bound reduced potential, if one has been assigned yet
    fn potential(&self) -> Option<&Array1<f64>>;
}
