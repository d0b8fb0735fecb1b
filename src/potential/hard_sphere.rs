/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Hard sphere potential

use super::hard_core_lennard_jones::DEFAULT_HIGH_VALUE;
use super::Potential;
use ndarray::Array1;

/// Purely repulsive hard-sphere potential
///
/// U(r) = high_value for r <= sigma, zero beyond
#[derive(Debug, Clone, Copy)]
pub struct HardSphere {
    sigma: f64,
    high_value: f64,
}

impl HardSphere {
    /// Create a hard-sphere potential of contact distance `sigma`
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma,
            high_value: DEFAULT_HIGH_VALUE,
        }
    }

    /// Override the height of the core wall
    pub fn with_high_value(mut self, high_value: f64) -> Self {
        self.high_value = high_value;
        self
    }
}

impl Potential for HardSphere {
    fn calculate(&self, r: &Array1<f64>) -> Array1<f64> {
        r.mapv(|r| if r <= self.sigma { self.high_value } else { 0.0 })
    }
}
