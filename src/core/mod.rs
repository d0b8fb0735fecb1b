/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Core data structures of the PRISM engine
//!
//! The type-indexed tables ([`ValueTable`], [`PairTable`]), the stacked
//! rank x rank correlation array ([`MatrixArray`]), the paired real/Fourier
//! grids ([`Domain`]), densities ([`Density`]), and the [`System`] root
//! object that ties them together.

pub mod density;
pub mod domain;
pub mod errors;
pub mod matrix_array;
pub mod pair_table;
pub mod prism;
pub mod space;
pub mod system;
pub mod value_table;

pub use density::Density;
pub use domain::Domain;
pub use errors::{PrismError, Result};
pub use matrix_array::MatrixArray;
pub use pair_table::PairTable;
pub use prism::{Prism, PrismSolver};
pub use space::Space;
pub use system::System;
pub use value_table::ValueTable;
