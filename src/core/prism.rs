/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! PRISM solver context
//!
//! A `Prism` bundles the fields an iterative solver mutates (`direct_corr`)
//! with the fixed inputs it consumes (`omega`, the domain, and the owning
//! [`System`]). The solve loop itself lives outside this crate behind the
//! [`PrismSolver`] trait; post-processing calculations in
//! [`crate::calculate`] only require the exposed state.

use super::domain::Domain;
use super::errors::Result;
use super::matrix_array::MatrixArray;
use super::space::Space;
use super::system::System;

/// Solver context created by [`System::create_prism`]
///
/// Holds a back-reference to the owning system, never a copy: densities and
/// tables read through `sys()` are the system's own.
pub struct Prism<'a> {
    /// Direct correlation function; zeroed in real space at creation,
    /// populated by the solver
    pub direct_corr: MatrixArray,
    /// Intramolecular correlation assembled from the system's omega table,
    /// in Fourier space
    pub omega: MatrixArray,
    sys: &'a System,
    domain: &'a Domain,
}

impl<'a> Prism<'a> {
    pub(crate) fn new(
        sys: &'a System,
        domain: &'a Domain,
        direct_corr: MatrixArray,
        omega: MatrixArray,
    ) -> Self {
        Self {
            direct_corr,
            omega,
            sys,
            domain,
        }
    }

    /// The owning system
    pub fn sys(&self) -> &System {
        self.sys
    }

    /// The solution grids
    pub fn domain(&self) -> &Domain {
        self.domain
    }

    /// Convert `direct_corr` to Fourier space in place if it is currently
    /// Real; a no-op otherwise. Post-processing calls this before reading,
    /// so callers that want to keep control of the representation should
    /// convert beforehand.
    pub fn direct_corr_to_fourier(&mut self) -> Result<()> {
        if self.direct_corr.space() == Space::Real {
            self.domain.to_fourier(&mut self.direct_corr)?;
        }
        Ok(())
    }

    /// Convert `omega` to Fourier space in place if it is currently Real
    pub fn omega_to_fourier(&mut self) -> Result<()> {
        if self.omega.space() == Space::Real {
            self.domain.to_fourier(&mut self.omega)?;
        }
        Ok(())
    }

    /// Run an external solver against this context
    ///
    /// A conforming solver leaves `direct_corr` populated in Fourier space,
    /// self-consistent with `omega`, the bound closures, and the system's
    /// densities.
    pub fn solve(&mut self, solver: &mut dyn PrismSolver) -> Result<()> {
        solver.solve(self)
    }
}

/// External solve-loop contract
///
/// Implementations own the update scheme and convergence criteria. On
/// success the context's `direct_corr` must be populated in Fourier space
/// and consistent with the closures and densities of the owning system.
pub trait PrismSolver {
    fn solve(&mut self, prism: &mut Prism<'_>) -> Result<()>;
}
