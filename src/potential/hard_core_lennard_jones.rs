/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Lennard-Jones potential with an impenetrable core

use super::Potential;
use ndarray::Array1;

/// Default height of the hard-core wall
pub const DEFAULT_HIGH_VALUE: f64 = 1e6;

/// 12-6 Lennard-Jones tail with a hard core at r <= sigma
///
/// U(r) = high_value                                  for r <= sigma
///      = 4 epsilon [ (sigma/r)^12 - (sigma/r)^6 ]    for r  > sigma
///
/// The wall is a large finite value rather than an actual infinity so the
/// potential stays usable in numerical closures.
#[derive(Debug, Clone, Copy)]
pub struct HardCoreLennardJones {
    epsilon: f64,
    sigma: f64,
    high_value: f64,
}

impl HardCoreLennardJones {
    /// Create a potential with the default wall height
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self {
            epsilon,
            sigma,
            high_value: DEFAULT_HIGH_VALUE,
        }
    }

    /// Override the height of the hard-core wall
    pub fn with_high_value(mut self, high_value: f64) -> Self {
        self.high_value = high_value;
        self
    }
}

impl Potential for HardCoreLennardJones {
    fn calculate(&self, r: &Array1<f64>) -> Array1<f64> {
        r.mapv(|r| {
            if r <= self.sigma {
                self.high_value
            } else {
                let x6 = (self.sigma / r).powi(6);
                4.0 * self.epsilon * (x6 * x6 - x6)
            }
        })
    }
}
