/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Space tag for correlation-function fields
//!
//! Every [`MatrixArray`](crate::core::matrix_array::MatrixArray) carries a
//! `Space` tag recording whether its values are a real-space radial
//! representation or a Fourier-space wavenumber representation. The tag is
//! only ever flipped by the [`Domain`](crate::core::domain::Domain) transform
//! operations; arithmetic never changes it.

use std::fmt;

/// Representation of a field: real-space r grid or Fourier-space k grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// Real-space radial representation, sampled on the domain's r grid
    Real,
    /// Fourier-space representation, sampled on the domain's k grid
    Fourier,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Real => write!(f, "Real"),
            Space::Fourier => write!(f, "Fourier"),
        }
    }
}
