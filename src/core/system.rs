/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Primary container used to spawn PRISM calculations
//!
//! A `System` owns the site types, the solution [`Domain`], and every table
//! a calculation needs: diameters, densities, pair potentials, closures, and
//! intramolecular omega fields. The lifecycle is construct, populate,
//! `check()`, then [`System::create_prism`].
//!
//! The omega table stores Fourier-space fields sampled on the domain's k
//! grid. Self (i == j) omegas should approach the number of sites per
//! molecule as k -> 0.

use super::density::Density;
use super::domain::Domain;
use super::errors::{PrismError, Result};
use super::matrix_array::MatrixArray;
use super::pair_table::PairTable;
use super::prism::Prism;
use super::space::Space;
use super::value_table::ValueTable;
use crate::closure::Closure;
use crate::potential::Potential;
use log::debug;
use ndarray::Array1;

/// Root owner of all tables and the domain of a PRISM calculation
pub struct System {
    types: Vec<String>,
    kt: f64,
    /// Real/Fourier solution grid; must be assigned before `check()` passes
    pub domain: Option<Domain>,
    /// Site diameters
    pub diameter: ValueTable<f64>,
    /// Site number densities and derived matrices
    pub density: Density,
    /// Pair potentials, evaluated in real space at PRISM creation
    pub potential: PairTable<Box<dyn Potential>>,
    /// Closures completing the integral-equation system
    pub closure: PairTable<Box<dyn Closure>>,
    /// Intramolecular correlation fields in Fourier space
    pub omega: PairTable<Array1<f64>>,
}

impl System {
    /// Create a system over distinct site types with kT = 1.0
    pub fn new(types: &[&str]) -> Result<Self> {
        Self::with_kt(types, 1.0)
    }

    /// Create a system over distinct site types at thermal energy scale `kt`
    pub fn with_kt(types: &[&str], kt: f64) -> Result<Self> {
        if kt <= 0.0 {
            return Err(PrismError::InvalidParameter(format!(
                "thermal scale kT must be positive: {}",
                kt
            )));
        }
        let types: Vec<String> = types.iter().map(|t| t.to_string()).collect();
        for (i, t) in types.iter().enumerate() {
            if types[..i].contains(t) {
                return Err(PrismError::InvalidParameter(format!(
                    "duplicate site type '{}'",
                    t
                )));
            }
        }
        Ok(Self {
            kt,
            domain: None,
            diameter: ValueTable::new(&types, "diameter"),
            density: Density::new(&types),
            potential: PairTable::new(&types, "potential"),
            closure: PairTable::new(&types, "closure"),
            omega: PairTable::new(&types, "omega"),
            types,
        })
    }

    /// Site types in system order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Number of site types
    pub fn rank(&self) -> usize {
        self.types.len()
    }

    /// Thermal energy scale
    pub fn kt(&self) -> f64 {
        self.kt
    }

    /// Make sure every value in the system is specified
    pub fn check(&self) -> Result<()> {
        self.density.check()?;
        self.potential.check()?;
        self.closure.check()?;
        self.omega.check()?;
        self.diameter.check()?;
        let domain = self.domain.as_ref().ok_or(PrismError::MissingDomain)?;
        for (_, (t1, t2), field) in self.omega.iter_pairs() {
            if field.len() != domain.length() {
                return Err(PrismError::ShapeMismatch(format!(
                    "omega field ({},{}) has {} points but domain has {}",
                    t1,
                    t2,
                    field.len(),
                    domain.length()
                )));
            }
        }
        Ok(())
    }

    /// Construct a fully specified PRISM context that can be solved
    ///
    /// Validates the system, binds each pair's potential into its closure as
    /// u(r)/kT on the domain's real-space grid, and returns a context that
    /// back-references this system. A molecular closure rejects the binding
    /// with `NotImplemented`, which aborts construction.
    pub fn create_prism(&mut self) -> Result<Prism<'_>> {
        self.check()?;
        let domain = match &self.domain {
            Some(domain) => domain,
            None => return Err(PrismError::MissingDomain),
        };

        let r = domain.r();
        for (_, (t1, t2), potential) in self.potential.iter_pairs() {
            let reduced = potential.calculate(r) / self.kt;
            self.closure.get_mut(t1, t2)?.bind_potential(reduced)?;
        }
        debug!(
            "bound {} pair potentials at kT = {}",
            self.rank() * (self.rank() + 1) / 2,
            self.kt
        );

        let length = domain.length();
        let mut omega = MatrixArray::new(length, &self.types, Space::Fourier);
        for (_, (t1, t2), field) in self.omega.iter_pairs() {
            omega.set_slice(t1, t2, field.view())?;
        }
        let direct_corr = MatrixArray::new(length, &self.types, Space::Real);

        Ok(Prism::new(self, domain, direct_corr, omega))
    }
}
