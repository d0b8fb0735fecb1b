/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Spinodal condition between pairs of components
//!
//! For each cross pair the determinant-expansion curve
//!
//! ```text
//! lambda(k) = 1
//!   - C_aa rho_aa w_aa - 2 C_ab rho_ab w_ab - C_bb rho_bb w_bb
//!   + C_ab^2 rho_ab^2 w_ab^2  - C_aa C_bb rho_ab^2 w_ab^2
//!   - C_ab^2 rho_aa rho_bb w_aa w_bb + C_aa C_bb rho_aa rho_bb w_aa w_bb
//! ```
//!
//! is evaluated over the Fourier grid (rho are sitewise densities, w the
//! omega fields). The spinodal is where lambda vanishes at k = 0; by default
//! the three lowest-k points are extrapolated to k = 0 with a quadratic.
//!
//! Reference: Schweizer and Curro, Thermodynamics of Polymer Blends,
//! J. Chem. Phys. 91, 5059 (1989).

use super::COMPONENT_WARNING;
use crate::core::errors::{PrismError, Result};
use crate::core::pair_table::PairTable;
use crate::core::prism::Prism;
use log::warn;
use ndarray::Array1;

/// Evaluate the spinodal condition for every cross pair
///
/// Requires a solved, multicomponent context; converts `direct_corr` and
/// `omega` to Fourier space in place if needed. With `extrapolate` the k = 0
/// value of a quadratic through the three lowest-k points is returned,
/// otherwise the value at the lowest sampled wavenumber.
pub fn spinodal_condition(prism: &mut Prism<'_>, extrapolate: bool) -> Result<PairTable<f64>> {
    let rank = prism.sys().rank();
    if rank <= 1 {
        return Err(PrismError::NotMulticomponent(rank));
    }
    if rank != 2 {
        warn!("{}", COMPONENT_WARNING);
    }

    prism.direct_corr_to_fourier()?;
    prism.omega_to_fourier()?;

    let length = prism.domain().length();
    if extrapolate && length < 3 {
        return Err(PrismError::InvalidParameter(format!(
            "extrapolation to k = 0 needs at least 3 grid points, domain has {}",
            length
        )));
    }

    let sys = prism.sys();
    let k = prism.domain().k();
    let types = sys.types().to_vec();
    let mut table = PairTable::cross_pairs(sys.types(), "spinodal_condition");

    for (i, t1) in types.iter().enumerate() {
        for t2 in types.iter().skip(i + 1) {
            let w_aa = prism.omega.get_slice(t1, t1)?.to_owned();
            let w_ab = prism.omega.get_slice(t1, t2)?.to_owned();
            let w_bb = prism.omega.get_slice(t2, t2)?.to_owned();

            let c_aa = prism.direct_corr.get_slice(t1, t1)?.to_owned();
            let c_ab = prism.direct_corr.get_slice(t1, t2)?.to_owned();
            let c_bb = prism.direct_corr.get_slice(t2, t2)?.to_owned();

            let rho_aa = sys.density.site(t1, t1)?;
            let rho_ab = sys.density.site(t1, t2)?;
            let rho_bb = sys.density.site(t2, t2)?;

            let mut curve = Array1::<f64>::ones(length);
            curve -= &((&c_aa * rho_aa) * &w_aa);
            curve -= &((&c_ab * (2.0 * rho_ab)) * &w_ab);
            curve -= &((&c_bb * rho_bb) * &w_bb);
            curve += &((&c_ab * &c_ab) * (rho_ab * rho_ab) * &w_ab * &w_ab);
            curve -= &((&c_aa * &c_bb) * (rho_ab * rho_ab) * &w_ab * &w_ab);
            curve -= &((&c_ab * &c_ab) * (rho_aa * rho_bb) * &w_aa * &w_bb);
            curve += &((&c_aa * &c_bb) * (rho_aa * rho_bb) * &w_aa * &w_bb);

            let value = if extrapolate {
                quadratic_at_zero(
                    [k[0], k[1], k[2]],
                    [curve[0], curve[1], curve[2]],
                )
            } else {
                curve[0]
            };
            table.set(t1, t2, value)?;
        }
    }

    Ok(table)
}

/// Quadratic through three points, evaluated at the origin (Lagrange form)
fn quadratic_at_zero(x: [f64; 3], y: [f64; 3]) -> f64 {
    let mut acc = 0.0;
    for m in 0..3 {
        let mut term = y[m];
        for n in 0..3 {
            if n != m {
                term *= -x[n] / (x[m] - x[n]);
            }
        }
        acc += term;
    }
    acc
}
