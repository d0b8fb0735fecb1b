/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

use approx::assert_relative_eq;
use ndarray::Array1;
use prism_rs::{Domain, MatrixArray, PrismError, Space};
use rstest::rstest;
use std::f64::consts::PI;

fn types(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Fill every slice with a distinct smooth decaying function
fn smooth_array(domain: &Domain, names: &[String], space: Space) -> MatrixArray {
    let mut array = MatrixArray::new(domain.length(), names, space);
    for (i, t1) in names.iter().enumerate() {
        for (j, t2) in names.iter().enumerate().skip(i) {
            let values = domain
                .r()
                .mapv(|r| (-(r * r) / (2.0 + i as f64 + j as f64)).exp() * (r * 0.7).cos());
            array.set_slice(t1, t2, values.view()).unwrap();
        }
    }
    array
}

#[rstest]
#[case(64, 0.1, 2)]
#[case(256, 0.05, 2)]
#[case(128, 0.02, 3)]
fn test_matrix_array_round_trip(#[case] length: usize, #[case] dr: f64, #[case] rank: usize) {
    let domain = Domain::new(length, dr).unwrap();
    let names: Vec<String> = (0..rank).map(|i| format!("T{}", i)).collect();

    let original = smooth_array(&domain, &names, Space::Real);
    let mut array = original.clone();

    domain.to_fourier(&mut array).unwrap();
    assert_eq!(array.space(), Space::Fourier);
    domain.to_real(&mut array).unwrap();
    assert_eq!(array.space(), Space::Real);

    for t1 in &names {
        for t2 in &names {
            let a = original.get_slice(t1, t2).unwrap();
            let b = array.get_slice(t1, t2).unwrap();
            for (x, y) in a.iter().zip(b.iter()) {
                assert_relative_eq!(*x, *y, epsilon = 1e-10, max_relative = 1e-8);
            }
        }
    }
}

#[test]
fn test_reverse_order_round_trip() {
    let domain = Domain::new(128, 0.05).unwrap();
    let names = types(&["A", "B"]);

    // start from a Fourier-space field and go k -> r -> k
    let original = smooth_array(&domain, &names, Space::Fourier);
    let mut array = original.clone();
    domain.to_real(&mut array).unwrap();
    domain.to_fourier(&mut array).unwrap();

    let a = original.get_slice("A", "B").unwrap();
    let b = array.get_slice("A", "B").unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-10, max_relative = 1e-8);
    }
}

#[test]
fn test_transform_to_current_space_is_an_error() {
    let domain = Domain::new(32, 0.1).unwrap();
    let names = types(&["A"]);
    let mut real = MatrixArray::new(32, &names, Space::Real);
    let mut fourier = MatrixArray::new(32, &names, Space::Fourier);

    assert!(matches!(
        domain.to_real(&mut real),
        Err(PrismError::InvalidSpace(Space::Real))
    ));
    assert!(matches!(
        domain.to_fourier(&mut fourier),
        Err(PrismError::InvalidSpace(Space::Fourier))
    ));
}

#[test]
fn test_grid_length_must_match() {
    let domain = Domain::new(32, 0.1).unwrap();
    let mut array = MatrixArray::new(64, &types(&["A"]), Space::Real);
    assert!(matches!(
        domain.to_fourier(&mut array),
        Err(PrismError::ShapeMismatch(_))
    ));
}

#[test]
fn test_gaussian_transform_matches_analytic() {
    // exp(-r^2) <-> pi^(3/2) exp(-k^2/4) under the radial transform pair
    let domain = Domain::new(2048, 0.01).unwrap();
    let f = domain.r().mapv(|r| (-r * r).exp());
    let g = domain.fourier_transform(f.view());

    let scale = PI.powf(1.5);
    for (k, value) in domain.k().iter().zip(g.iter()) {
        let expected = scale * (-k * k / 4.0).exp();
        assert_relative_eq!(*value, expected, epsilon = 1e-3, max_relative = 1e-3);
    }
}

#[test]
fn test_grids_are_increasing_and_positive() {
    let domain = Domain::new(100, 0.05).unwrap();
    let r = domain.r();
    let k = domain.k();
    assert!(r[0] > 0.0 && k[0] > 0.0);
    for i in 1..100 {
        assert!(r[i] > r[i - 1]);
        assert!(k[i] > k[i - 1]);
    }
    assert_relative_eq!(domain.dr() * domain.dk() * 101.0, PI, epsilon = 1e-12);
    // slice transforms evaluate on the matching grids
    let ones = Array1::ones(100);
    assert_eq!(domain.fourier_transform(ones.view()).len(), 100);
}
