/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Pair potential energy functions
//!
//! Potentials are evaluated once, on the domain's real-space grid, when a
//! PRISM context is created; the values (divided by kT) are what the
//! closures consume. Diameters stored in the system's diameter table are
//! not forwarded to potentials, so sigma values should be chosen to match
//! them.

pub mod hard_core_lennard_jones;
pub mod hard_sphere;
pub mod lennard_jones;

pub use hard_core_lennard_jones::HardCoreLennardJones;
pub use hard_sphere::HardSphere;
pub use lennard_jones::LennardJones;

use ndarray::Array1;

/// A pairwise potential energy function U(r)
pub trait Potential {
    /// Evaluate the potential on a grid of radial separations
    fn calculate(&self, r: &Array1<f64>) -> Array1<f64>;
}
