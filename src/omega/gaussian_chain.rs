/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Omega for a discrete Gaussian chain

use super::Omega;
use ndarray::Array1;

/// Intramolecular correlation of an ideal discrete Gaussian chain of
/// `length` sites with statistical segment length `sigma`:
///
/// omega(k) = [ 1 - E^2 - (2 E / N)(1 - E^N) ] / (1 - E)^2,
/// E = exp(-k^2 sigma^2 / 6)
///
/// omega(k) -> N as k -> 0, i.e. the number of sites per chain.
#[derive(Debug, Clone, Copy)]
pub struct GaussianChain {
    sigma: f64,
    length: usize,
}

impl GaussianChain {
    /// Create a chain of `length` sites with segment length `sigma`
    pub fn new(sigma: f64, length: usize) -> Self {
        Self { sigma, length }
    }
}

impl Omega for GaussianChain {
    fn calculate(&self, k: &Array1<f64>) -> Array1<f64> {
        let n = self.length as f64;
        k.mapv(|k| {
            let e = (-k * k * self.sigma * self.sigma / 6.0).exp();
            let denom = (1.0 - e) * (1.0 - e);
            if denom < 1e-12 {
                // k -> 0 limit
                n
            } else {
                (1.0 - e * e - (2.0 * e / n) * (1.0 - e.powf(n))) / denom
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_low_k_limit_is_chain_length() {
        let chain = GaussianChain::new(1.0, 100);
        let omega = chain.calculate(&array![1e-9]);
        assert_relative_eq!(omega[0], 100.0, max_relative = 1e-6);
    }

    #[test]
    fn test_high_k_limit_is_single_site() {
        let chain = GaussianChain::new(1.0, 100);
        let omega = chain.calculate(&array![1e3]);
        assert_relative_eq!(omega[0], 1.0, max_relative = 1e-10);
    }
}
