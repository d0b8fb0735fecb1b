/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Omega for sites that never share a molecule

use super::Omega;
use ndarray::Array1;

/// Intramolecular correlation between sites on different molecules:
/// omega(k) = 0. Used for the cross pairs of a blend or solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIntra;

impl NoIntra {
    pub fn new() -> Self {
        Self
    }
}

impl Omega for NoIntra {
    fn calculate(&self, k: &Array1<f64>) -> Array1<f64> {
        Array1::zeros(k.len())
    }
}
