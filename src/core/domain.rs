/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Real/Fourier solution grids and the transform between them
//!
//! A `Domain` owns the discretized real-space grid r and the matching
//! Fourier-space grid k on which all correlation fields are sampled, and
//! converts whole [`MatrixArray`]s between the two representations.
//!
//! The transform pair is the 3-D radially symmetric Fourier transform
//! realized as a type-I discrete sine transform. With N grid points,
//!
//! ```text
//! r_i = (i+1) dr,   k_j = (j+1) dk,   dk = pi / (dr (N+1))
//! F(k_j) = 4 pi dr / k_j   * sum_i r_i f(r_i) sin(r_i k_j)
//! f(r_i) = dk / (2 pi^2 r_i) * sum_j k_j F(k_j) sin(k_j r_i)
//! ```
//!
//! The grid spacing relation makes sin(r_i k_j) a DST-I kernel, whose
//! orthogonality renders the forward and inverse sums mutually inverse
//! exactly (up to floating-point rounding) on these grids. This is the
//! convention that connects a radial distribution function to its structure
//! factor. The two grids are derived together at construction; neither can
//! be changed independently afterwards.
//!
//! Transforming an array that is already in the target space is an error
//! (`InvalidSpace`), not a no-op: the space tag exists to catch
//! double-transform bookkeeping bugs in solver loops.

use super::errors::{PrismError, Result};
use super::matrix_array::MatrixArray;
use super::space::Space;
use log::debug;
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Paired real-space and Fourier-space solution grids of equal length
#[derive(Debug, Clone)]
pub struct Domain {
    length: usize,
    dr: f64,
    dk: f64,
    r: Array1<f64>,
    k: Array1<f64>,
}

impl Domain {
    /// Create a domain with `length` grid points at real-space spacing `dr`
    pub fn new(length: usize, dr: f64) -> Result<Self> {
        if length == 0 {
            return Err(PrismError::InvalidParameter(
                "domain length must be positive".to_string(),
            ));
        }
        if dr <= 0.0 {
            return Err(PrismError::InvalidParameter(format!(
                "grid spacing dr must be positive: {}",
                dr
            )));
        }
        let dk = PI / (dr * (length as f64 + 1.0));
        let r = Array1::from_iter((0..length).map(|i| (i as f64 + 1.0) * dr));
        let k = Array1::from_iter((0..length).map(|j| (j as f64 + 1.0) * dk));
        debug!(
            "domain created: {} points, dr = {}, dk = {}, r_max = {}",
            length,
            dr,
            dk,
            dr * length as f64
        );
        Ok(Self {
            length,
            dr,
            dk,
            r,
            k,
        })
    }

    /// Number of grid points in each space
    pub fn length(&self) -> usize {
        self.length
    }

    /// Real-space grid spacing
    pub fn dr(&self) -> f64 {
        self.dr
    }

    /// Fourier-space grid spacing
    pub fn dk(&self) -> f64 {
        self.dk
    }

    /// Real-space grid r_i = (i+1) dr
    pub fn r(&self) -> &Array1<f64> {
        &self.r
    }

    /// Fourier-space grid k_j = (j+1) dk
    pub fn k(&self) -> &Array1<f64> {
        &self.k
    }

    /// DST-I kernel: out_j = sum_m weighted_m sin((m+1)(j+1) pi/(N+1)),
    /// parallel over output points
    fn sine_sum(&self, weighted: &Array1<f64>) -> Array1<f64> {
        let n = self.length;
        let step = PI / (n as f64 + 1.0);
        let values: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|j| {
                let arg = step * (j as f64 + 1.0);
                (0..n)
                    .map(|m| weighted[m] * ((m as f64 + 1.0) * arg).sin())
                    .sum()
            })
            .collect();
        Array1::from(values)
    }

    /// Forward radial transform of a single real-space slice
    pub fn fourier_transform(&self, real: ArrayView1<'_, f64>) -> Array1<f64> {
        let weighted = &self.r * &real;
        let sums = self.sine_sum(&weighted);
        sums * (4.0 * PI * self.dr) / &self.k
    }

    /// Inverse radial transform of a single Fourier-space slice
    pub fn real_transform(&self, fourier: ArrayView1<'_, f64>) -> Array1<f64> {
        let weighted = &self.k * &fourier;
        let sums = self.sine_sum(&weighted);
        sums * (self.dk / (2.0 * PI * PI)) / &self.r
    }

    /// Transform every slice of a MatrixArray to Fourier space, in place,
    /// and tag it `Space::Fourier`
    pub fn to_fourier(&self, array: &mut MatrixArray) -> Result<()> {
        if array.space() == Space::Fourier {
            return Err(PrismError::InvalidSpace(Space::Fourier));
        }
        self.transform_slices(array, Space::Fourier)
    }

    /// Transform every slice of a MatrixArray to real space, in place,
    /// and tag it `Space::Real`
    pub fn to_real(&self, array: &mut MatrixArray) -> Result<()> {
        if array.space() == Space::Real {
            return Err(PrismError::InvalidSpace(Space::Real));
        }
        self.transform_slices(array, Space::Real)
    }

    fn transform_slices(&self, array: &mut MatrixArray, target: Space) -> Result<()> {
        if array.length() != self.length {
            return Err(PrismError::ShapeMismatch(format!(
                "matrix array has {} grid points but domain has {}",
                array.length(),
                self.length
            )));
        }
        // Only the upper triangle is transformed; set_slice mirrors it
        let types = array.types().to_vec();
        for (i, t1) in types.iter().enumerate() {
            for t2 in types.iter().skip(i) {
                let transformed = match target {
                    Space::Fourier => self.fourier_transform(array.get_slice(t1, t2)?),
                    Space::Real => self.real_transform(array.get_slice(t1, t2)?),
                };
                array.set_slice(t1, t2, transformed.view())?;
            }
        }
        array.set_space(target);
        Ok(())
    }
}
