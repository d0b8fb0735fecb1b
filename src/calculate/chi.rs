/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Effective interaction parameter chi
//!
//! For each cross pair (alpha, beta):
//!
//! ```text
//! chi(k) = (R^-1/2 phi_a + R^1/2 phi_b)^-1 * rho/2
//!          * ( R^-1 C_aa(k) + R C_bb(k) - 2 C_ab(k) )
//! R      = v_a / v_b              (site volume ratio from diameters)
//! phi_a  = rho_a / (rho_a + rho_b)
//! ```
//!
//! where C are Fourier-space direct correlation functions and rho is the
//! total system density.

use super::COMPONENT_WARNING;
use crate::core::errors::{PrismError, Result};
use crate::core::pair_table::PairTable;
use crate::core::prism::Prism;
use log::warn;
use ndarray::Array1;
use std::f64::consts::PI;

/// Calculate the wavenumber-dependent effective interaction parameter
///
/// Requires a solved, multicomponent context; converts `direct_corr` to
/// Fourier space in place if needed. Returns a cross-pair table of chi(k)
/// curves over the domain's k grid.
pub fn chi(prism: &mut Prism<'_>) -> Result<PairTable<Array1<f64>>> {
    let rank = prism.sys().rank();
    if rank <= 1 {
        return Err(PrismError::NotMulticomponent(rank));
    }
    if rank != 2 {
        warn!("{}", COMPONENT_WARNING);
    }

    prism.direct_corr_to_fourier()?;

    let sys = prism.sys();
    let types = sys.types().to_vec();
    let mut table = PairTable::cross_pairs(sys.types(), "chi");

    for (i, t1) in types.iter().enumerate() {
        for t2 in types.iter().skip(i + 1) {
            let c_aa = prism.direct_corr.get_slice(t1, t1)?.to_owned();
            let c_ab = prism.direct_corr.get_slice(t1, t2)?.to_owned();
            let c_bb = prism.direct_corr.get_slice(t2, t2)?.to_owned();

            let v_a = 4.0 / 3.0 * PI * (sys.diameter.get(t1)? / 2.0).powi(3);
            let v_b = 4.0 / 3.0 * PI * (sys.diameter.get(t2)? / 2.0).powi(3);

            let rho_a = sys.density.get(t1)?;
            let rho_b = sys.density.get(t2)?;
            let phi_a = rho_a / (rho_a + rho_b);
            let phi_b = rho_b / (rho_a + rho_b);

            let ratio = v_a / v_b;
            let prefactor = (ratio.powf(-0.5) * phi_a + ratio.powf(0.5) * phi_b).recip()
                * 0.5
                * sys.density.total();

            let curve = (c_aa * ratio.recip() + c_bb * ratio - c_ab * 2.0) * prefactor;
            table.set(t1, t2, curve)?;
        }
    }

    Ok(table)
}
