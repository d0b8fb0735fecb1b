/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Stacked-matrix array
//!
//! A `MatrixArray` holds one rank x rank matrix of correlation values per
//! grid point, stored as an `Array3<f64>` of shape (length, rank, rank)
//! together with a [`Space`] tag and the site-type ordering that gives the
//! rows and columns their meaning. Correlation functions are reciprocal, so
//! every per-point matrix is symmetric in its type indices and a `(t1,t2)`
//! slice addresses the same data as `(t2,t1)`.
//!
//! Elementwise arithmetic and per-point matrix algebra require both operands
//! to have identical shape, types, and space; combining a real-space field
//! with a Fourier-space field is rejected with `SpaceMismatch` rather than
//! producing silently meaningless numbers. All operations build their result
//! in full before returning, so a failure (e.g. a singular matrix at one
//! grid point) never leaves a partially-updated array behind.

use super::errors::{PrismError, Result};
use super::space::Space;
use ndarray::parallel::prelude::*;
use ndarray::{s, Array2, Array3, ArrayView1, ArrayView2, Axis, Zip};

/// Pivots smaller than this are treated as singular during inversion
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// A grid of rank x rank matrices with a space tag
#[derive(Debug, Clone)]
pub struct MatrixArray {
    data: Array3<f64>,
    space: Space,
    types: Vec<String>,
}

impl MatrixArray {
    /// Allocate `length` zeroed rank x rank matrices over the given site types
    pub fn new(length: usize, types: &[String], space: Space) -> Self {
        let rank = types.len();
        Self {
            data: Array3::zeros((length, rank, rank)),
            space,
            types: types.to_vec(),
        }
    }

    /// Allocate an array holding the identity matrix at every grid point
    pub fn identity(length: usize, types: &[String], space: Space) -> Self {
        let mut array = Self::new(length, types, space);
        let rank = types.len();
        for n in 0..length {
            for i in 0..rank {
                array.data[[n, i, i]] = 1.0;
            }
        }
        array
    }

    /// Number of grid points
    pub fn length(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of site types
    pub fn rank(&self) -> usize {
        self.types.len()
    }

    /// Current space tag
    pub fn space(&self) -> Space {
        self.space
    }

    /// Site types giving row/column semantics, in system order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Flip the space tag; only the domain transform may do this
    pub(crate) fn set_space(&mut self, space: Space) {
        self.space = space;
    }

    fn type_index(&self, site: &str) -> Result<usize> {
        self.types
            .iter()
            .position(|t| t == site)
            .ok_or_else(|| PrismError::KeyNotFound {
                table: "matrix array".to_string(),
                key: site.to_string(),
            })
    }

    /// View the (t1,t2) correlation values across all grid points
    pub fn get_slice(&self, t1: &str, t2: &str) -> Result<ArrayView1<'_, f64>> {
        let i = self.type_index(t1)?;
        let j = self.type_index(t2)?;
        Ok(self.data.slice(s![.., i, j]))
    }

    /// Assign the (t1,t2) values across all grid points; the symmetric
    /// (t2,t1) cells are written as well
    pub fn set_slice(&mut self, t1: &str, t2: &str, values: ArrayView1<'_, f64>) -> Result<()> {
        if values.len() != self.length() {
            return Err(PrismError::ShapeMismatch(format!(
                "slice has {} points but matrix array has {}",
                values.len(),
                self.length()
            )));
        }
        let i = self.type_index(t1)?;
        let j = self.type_index(t2)?;
        self.data.slice_mut(s![.., i, j]).assign(&values);
        if i != j {
            self.data.slice_mut(s![.., j, i]).assign(&values);
        }
        Ok(())
    }

    /// View the matrix at a single grid point
    pub fn matrix_at(&self, n: usize) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), n)
    }

    /// Verify that two arrays may be combined
    fn compatible(&self, other: &MatrixArray) -> Result<()> {
        if self.space != other.space {
            return Err(PrismError::SpaceMismatch {
                expected: self.space,
                found: other.space,
            });
        }
        if self.data.dim() != other.data.dim() || self.types != other.types {
            return Err(PrismError::ShapeMismatch(format!(
                "operands have shapes {:?} and {:?}",
                self.data.dim(),
                other.data.dim()
            )));
        }
        Ok(())
    }

    /// Elementwise sum of two arrays
    pub fn add(&self, other: &MatrixArray) -> Result<MatrixArray> {
        self.compatible(other)?;
        Ok(MatrixArray {
            data: &self.data + &other.data,
            space: self.space,
            types: self.types.clone(),
        })
    }

    /// Elementwise difference of two arrays
    pub fn subtract(&self, other: &MatrixArray) -> Result<MatrixArray> {
        self.compatible(other)?;
        Ok(MatrixArray {
            data: &self.data - &other.data,
            space: self.space,
            types: self.types.clone(),
        })
    }

    /// Elementwise (Hadamard) product of two arrays
    pub fn multiply(&self, other: &MatrixArray) -> Result<MatrixArray> {
        self.compatible(other)?;
        Ok(MatrixArray {
            data: &self.data * &other.data,
            space: self.space,
            types: self.types.clone(),
        })
    }

    /// Ordinary matrix product at every grid point
    pub fn matrix_multiply(&self, other: &MatrixArray) -> Result<MatrixArray> {
        self.compatible(other)?;
        let rank = self.rank();
        let mut data = Array3::zeros(self.data.dim());
        Zip::from(data.outer_iter_mut())
            .and(self.data.outer_iter())
            .and(other.data.outer_iter())
            .par_for_each(|mut c, a, b| {
                for i in 0..rank {
                    for j in 0..rank {
                        let mut acc = 0.0;
                        for l in 0..rank {
                            acc += a[[i, l]] * b[[l, j]];
                        }
                        c[[i, j]] = acc;
                    }
                }
            });
        Ok(MatrixArray {
            data,
            space: self.space,
            types: self.types.clone(),
        })
    }

    /// Matrix inverse at every grid point
    ///
    /// Fails with `SingularMatrix` naming the first offending grid point; in
    /// that case no output is produced, so the failure cannot leave a
    /// half-inverted field in circulation. Grid points are independent and
    /// are processed in parallel.
    pub fn invert(&self) -> Result<MatrixArray> {
        let inverses: Result<Vec<Array2<f64>>> = self
            .data
            .axis_iter(Axis(0))
            .into_par_iter()
            .enumerate()
            .map(|(n, m)| invert_matrix(&m, n))
            .collect();
        let inverses = inverses?;

        let mut data = Array3::zeros(self.data.dim());
        for (n, inverse) in inverses.into_iter().enumerate() {
            data.index_axis_mut(Axis(0), n).assign(&inverse);
        }
        Ok(MatrixArray {
            data,
            space: self.space,
            types: self.types.clone(),
        })
    }
}

/// Gauss-Jordan elimination with partial pivoting on a single rank x rank matrix
fn invert_matrix(matrix: &ArrayView2<'_, f64>, grid_index: usize) -> Result<Array2<f64>> {
    let rank = matrix.nrows();
    let mut a = matrix.to_owned();
    let mut inverse = Array2::eye(rank);

    for col in 0..rank {
        // Pivot search within the current column
        let mut pivot_row = col;
        let mut pivot_mag = a[[col, col]].abs();
        for row in (col + 1)..rank {
            let mag = a[[row, col]].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }
        if pivot_mag < SINGULAR_TOLERANCE {
            return Err(PrismError::SingularMatrix { grid_index });
        }
        if pivot_row != col {
            for j in 0..rank {
                a.swap([col, j], [pivot_row, j]);
                inverse.swap([col, j], [pivot_row, j]);
            }
        }

        let pivot = a[[col, col]];
        for j in 0..rank {
            a[[col, j]] /= pivot;
            inverse[[col, j]] /= pivot;
        }

        // Eliminate the column from every other row
        for row in 0..rank {
            if row == col {
                continue;
            }
            let factor = a[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..rank {
                a[[row, j]] -= factor * a[[col, j]];
                inverse[[row, j]] -= factor * inverse[[col, j]];
            }
        }
    }

    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_invert_matrix_known_inverse() {
        let m = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = invert_matrix(&m.view(), 0).unwrap();
        assert_relative_eq!(inv[[0, 0]], 0.6, epsilon = 1e-12);
        assert_relative_eq!(inv[[0, 1]], -0.7, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 0]], -0.2, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 1]], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_invert_matrix_singular() {
        let m = array![[1.0, 2.0], [2.0, 4.0]];
        match invert_matrix(&m.view(), 7) {
            Err(PrismError::SingularMatrix { grid_index }) => assert_eq!(grid_index, 7),
            other => panic!("expected SingularMatrix, got {:?}", other),
        }
    }
}
