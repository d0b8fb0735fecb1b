/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! 12-6 Lennard-Jones potential

use super::Potential;
use ndarray::Array1;

/// Full 12-6 Lennard-Jones potential
///
/// U(r) = 4 epsilon [ (sigma/r)^12 - (sigma/r)^6 ]
#[derive(Debug, Clone, Copy)]
pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
}

impl LennardJones {
    /// Create a potential with well depth `epsilon` and size `sigma`
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self { epsilon, sigma }
    }
}

impl Potential for LennardJones {
    fn calculate(&self, r: &Array1<f64>) -> Array1<f64> {
        r.mapv(|r| {
            let x6 = (self.sigma / r).powi(6);
            4.0 * self.epsilon * (x6 * x6 - x6)
        })
    }
}
