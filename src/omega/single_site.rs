/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Omega for an isolated site

use super::Omega;
use ndarray::Array1;

/// Intramolecular correlation of a monoatomic species: omega(k) = 1
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleSite;

impl SingleSite {
    pub fn new() -> Self {
        Self
    }
}

impl Omega for SingleSite {
    fn calculate(&self, k: &Array1<f64>) -> Array1<f64> {
        Array1::ones(k.len())
    }
}
