/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Site number densities and derived density matrices
//!
//! `Density` holds the per-type number densities of a system and derives the
//! two rank x rank matrices the theory consumes:
//!
//! ```text
//! site[a,b] = rho_a            (a == b)
//!           = rho_a + rho_b    (a != b)
//! pair[a,b] = rho_a * rho_b
//! ```
//!
//! The diagonal of `site` carries no double counting; cross terms use the
//! sum and product conventions for two distinguishable densities. The
//! derived quantities are recomputed on every `set`. Once a PRISM context
//! starts solving the densities must be left alone; this is a documented
//! precondition of correctness, not something enforced here.

use super::errors::{PrismError, Result};
use ndarray::Array2;

/// Per-type number densities with derived site/pair matrices
#[derive(Debug, Clone)]
pub struct Density {
    types: Vec<String>,
    values: Vec<Option<f64>>,
    total: f64,
    site: Array2<f64>,
    pair: Array2<f64>,
}

impl Density {
    /// Create a density container with one unset slot per site type
    pub fn new(types: &[String]) -> Self {
        let rank = types.len();
        Self {
            types: types.to_vec(),
            values: vec![None; rank],
            total: 0.0,
            site: Array2::zeros((rank, rank)),
            pair: Array2::zeros((rank, rank)),
        }
    }

    /// Number of site types
    pub fn rank(&self) -> usize {
        self.types.len()
    }

    fn index(&self, site: &str) -> Result<usize> {
        self.types
            .iter()
            .position(|t| t == site)
            .ok_or_else(|| PrismError::KeyNotFound {
                table: "density".to_string(),
                key: site.to_string(),
            })
    }

    /// Assign a non-negative number density to a site type
    pub fn set(&mut self, site: &str, value: f64) -> Result<()> {
        if value < 0.0 || !value.is_finite() {
            return Err(PrismError::InvalidDensity {
                site: site.to_string(),
                value,
            });
        }
        let idx = self.index(site)?;
        self.values[idx] = Some(value);
        self.rebuild();
        Ok(())
    }

    /// Look up the number density of a site type
    pub fn get(&self, site: &str) -> Result<f64> {
        let idx = self.index(site)?;
        self.values[idx].ok_or_else(|| PrismError::KeyNotFound {
            table: "density".to_string(),
            key: site.to_string(),
        })
    }

    /// Total number density, summed over all site types
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sitewise density between two types
    pub fn site(&self, t1: &str, t2: &str) -> Result<f64> {
        let i = self.index(t1)?;
        let j = self.index(t2)?;
        Ok(self.site[[i, j]])
    }

    /// Pairwise density between two types
    pub fn pair(&self, t1: &str, t2: &str) -> Result<f64> {
        let i = self.index(t1)?;
        let j = self.index(t2)?;
        Ok(self.pair[[i, j]])
    }

    /// Recompute total and the derived matrices; unset types contribute zero
    /// until assigned (check() guards against using an incomplete table)
    fn rebuild(&mut self) {
        let rank = self.rank();
        let rho: Vec<f64> = self.values.iter().map(|v| v.unwrap_or(0.0)).collect();
        self.total = rho.iter().sum();
        for i in 0..rank {
            for j in 0..rank {
                self.site[[i, j]] = if i == j { rho[i] } else { rho[i] + rho[j] };
                self.pair[[i, j]] = rho[i] * rho[j];
            }
        }
    }

    /// Verify that every site type has an assigned density
    pub fn check(&self) -> Result<()> {
        for (site, value) in self.types.iter().zip(self.values.iter()) {
            if value.is_none() {
                return Err(PrismError::IncompleteTable {
                    table: "density".to_string(),
                    slot: site.clone(),
                });
            }
        }
        Ok(())
    }
}
