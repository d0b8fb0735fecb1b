/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

use approx::assert_relative_eq;
use ndarray::Array1;
use prism_rs::calculate::{chi, spinodal_condition};
use prism_rs::closure::Closure;
use prism_rs::omega::{NoIntra, Omega, SingleSite};
use prism_rs::potential::HardSphere;
use prism_rs::{Domain, PrismError, Result, Space, System};

#[derive(Debug, Default)]
struct RecordingClosure {
    potential: Option<Array1<f64>>,
}

impl Closure for RecordingClosure {
    fn bind_potential(&mut self, potential: Array1<f64>) -> Result<()> {
        self.potential = Some(potential);
        Ok(())
    }

    fn potential(&self) -> Option<&Array1<f64>> {
        self.potential.as_ref()
    }
}

/// Fully populated system over the given site types with equal densities
fn populated_system(names: &[&str], rho: f64) -> System {
    let mut sys = System::new(names).unwrap();
    let domain = Domain::new(64, 0.1).unwrap();
    let k = domain.k().clone();
    sys.domain = Some(domain);

    let owned: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    for t in &owned {
        sys.diameter.set(t, 1.0).unwrap();
        sys.density.set(t, rho).unwrap();
    }
    for (i, t1) in owned.iter().enumerate() {
        for t2 in owned.iter().skip(i) {
            let field = if t1 == t2 {
                SingleSite::new().calculate(&k)
            } else {
                NoIntra::new().calculate(&k)
            };
            sys.omega.set(t1, t2, field).unwrap();
            sys.potential
                .set(t1, t2, Box::new(HardSphere::new(1.0)))
                .unwrap();
            sys.closure
                .set(t1, t2, Box::new(RecordingClosure::default()))
                .unwrap();
        }
    }
    sys
}

#[test]
fn test_rank_one_is_rejected() {
    let mut sys = populated_system(&["A"], 0.5);
    let mut prism = sys.create_prism().unwrap();
    assert!(matches!(
        chi(&mut prism),
        Err(PrismError::NotMulticomponent(1))
    ));
    assert!(matches!(
        spinodal_condition(&mut prism, true),
        Err(PrismError::NotMulticomponent(1))
    ));
}

#[test]
fn test_zero_direct_corr_gives_zero_chi() {
    // rho_A = rho_B = 0.5, diameters 1.0, C identically zero: the numerator
    // vanishes for R = 1 so chi is zero at every wavenumber
    let mut sys = populated_system(&["A", "B"], 0.5);
    let mut prism = sys.create_prism().unwrap();
    assert_eq!(prism.direct_corr.space(), Space::Real);

    let table = chi(&mut prism).unwrap();
    // the real-space field was converted in place as a side effect
    assert_eq!(prism.direct_corr.space(), Space::Fourier);

    let curve = table.get("A", "B").unwrap();
    assert_eq!(curve.len(), 64);
    for value in curve.iter() {
        assert_relative_eq!(*value, 0.0, epsilon = 1e-12);
    }
    // self pairs are never populated
    assert!(matches!(
        table.get("A", "A"),
        Err(PrismError::InvalidPair(_))
    ));
}

#[test]
fn test_chi_constant_direct_corr() {
    // with R = 1 and phi_A = phi_B = 1/2 the prefactor is rho/2 and the
    // numerator reduces to C_AA + C_BB - 2 C_AB
    let mut sys = populated_system(&["A", "B"], 0.5);
    let mut prism = sys.create_prism().unwrap();
    prism.direct_corr_to_fourier().unwrap();

    let n = prism.domain().length();
    prism
        .direct_corr
        .set_slice("A", "A", Array1::from_elem(n, 1.0).view())
        .unwrap();
    prism
        .direct_corr
        .set_slice("B", "B", Array1::from_elem(n, 3.0).view())
        .unwrap();
    prism
        .direct_corr
        .set_slice("A", "B", Array1::from_elem(n, 1.0).view())
        .unwrap();

    let table = chi(&mut prism).unwrap();
    let curve = table.get("A", "B").unwrap();
    for value in curve.iter() {
        assert_relative_eq!(*value, 0.5 * (1.0 + 3.0 - 2.0), epsilon = 1e-12);
    }
}

#[test]
fn test_spinodal_of_ideal_system_is_one() {
    // C identically zero leaves only the leading 1 in the spinodal curve
    let mut sys = populated_system(&["A", "B"], 0.5);
    let mut prism = sys.create_prism().unwrap();

    let extrapolated = spinodal_condition(&mut prism, true).unwrap();
    assert_relative_eq!(*extrapolated.get("A", "B").unwrap(), 1.0, epsilon = 1e-10);

    let lowest_k = spinodal_condition(&mut prism, false).unwrap();
    assert_relative_eq!(*lowest_k.get("B", "A").unwrap(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_spinodal_uses_site_densities() {
    let rho = 0.5;
    let mut sys = populated_system(&["A", "B"], rho);
    let mut prism = sys.create_prism().unwrap();
    prism.direct_corr_to_fourier().unwrap();

    // constant self C with w_AB = 0 makes the curve analytic:
    // 1 - c rho_AA - c rho_BB + c^2 rho_AA rho_BB
    let c = -0.2;
    let n = prism.domain().length();
    for (t1, t2) in [("A", "A"), ("B", "B")] {
        prism
            .direct_corr
            .set_slice(t1, t2, Array1::from_elem(n, c).view())
            .unwrap();
    }

    let expected = 1.0 - 2.0 * c * rho + c * c * rho * rho;
    let table = spinodal_condition(&mut prism, true).unwrap();
    assert_relative_eq!(*table.get("A", "B").unwrap(), expected, epsilon = 1e-10);
}

#[test]
fn test_three_component_system_populates_cross_pairs_only() {
    let _ = env_logger::builder().is_test(true).try_init();

    // valid but warned for rank != 2; exactly the 3 cross pairs come back
    let mut sys = populated_system(&["A", "B", "C"], 0.3);
    let mut prism = sys.create_prism().unwrap();

    let table = chi(&mut prism).unwrap();
    assert_eq!(table.iter_pairs().count(), 3);
    for (t1, t2) in [("A", "B"), ("A", "C"), ("B", "C")] {
        assert_eq!(table.get(t1, t2).unwrap().len(), 64);
    }
    for t in ["A", "B", "C"] {
        assert!(matches!(table.get(t, t), Err(PrismError::InvalidPair(_))));
    }

    let spinodal = spinodal_condition(&mut prism, true).unwrap();
    assert_eq!(spinodal.iter_pairs().count(), 3);
}

#[test]
fn test_precomputed_fourier_input_is_left_alone() {
    let mut sys = populated_system(&["A", "B"], 0.5);
    let mut prism = sys.create_prism().unwrap();
    prism.direct_corr_to_fourier().unwrap();
    prism.omega_to_fourier().unwrap();

    // both fields already Fourier: calculations proceed without conversion
    chi(&mut prism).unwrap();
    spinodal_condition(&mut prism, true).unwrap();
    assert_eq!(prism.direct_corr.space(), Space::Fourier);
    assert_eq!(prism.omega.space(), Space::Fourier);
}
