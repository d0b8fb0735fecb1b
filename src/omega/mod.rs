/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Intramolecular correlation function builders
//!
//! Omega describes connectivity within a molecule. The builders here
//! evaluate common omegas on a domain's Fourier-space grid; the resulting
//! arrays are stored in the system's omega table. By convention the self
//! (i == j) omegas approach the number of sites per molecule as k -> 0.

pub mod gaussian_chain;
pub mod no_intra;
pub mod single_site;

pub use gaussian_chain::GaussianChain;
pub use no_intra::NoIntra;
pub use single_site::SingleSite;

use ndarray::Array1;

/// An intramolecular correlation function omega(k)
pub trait Omega {
    /// Evaluate omega on a grid of wavenumbers
    fn calculate(&self, k: &Array1<f64>) -> Array1<f64>;
}
