/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

use approx::assert_relative_eq;
use prism_rs::{Density, PrismError};

fn types(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_total_and_derived_matrices() {
    let mut density = Density::new(&types(&["A", "B", "C"]));
    density.set("A", 0.25).unwrap();
    density.set("B", 0.5).unwrap();
    density.set("C", 0.1).unwrap();
    density.check().unwrap();

    assert_relative_eq!(density.total(), 0.85, epsilon = 1e-14);

    // self terms carry no double counting
    assert_relative_eq!(density.site("B", "B").unwrap(), 0.5, epsilon = 1e-14);
    assert_relative_eq!(density.pair("B", "B").unwrap(), 0.25, epsilon = 1e-14);

    // cross terms: sum for site, product for pair
    assert_relative_eq!(density.site("A", "C").unwrap(), 0.35, epsilon = 1e-14);
    assert_relative_eq!(density.pair("A", "C").unwrap(), 0.025, epsilon = 1e-14);

    // symmetric and non-negative
    for t1 in ["A", "B", "C"] {
        for t2 in ["A", "B", "C"] {
            assert_relative_eq!(
                density.site(t1, t2).unwrap(),
                density.site(t2, t1).unwrap(),
                epsilon = 1e-14
            );
            assert!(density.pair(t1, t2).unwrap() >= 0.0);
        }
    }
}

#[test]
fn test_updates_recompute_derived_values() {
    let mut density = Density::new(&types(&["A", "B"]));
    density.set("A", 0.2).unwrap();
    density.set("B", 0.3).unwrap();
    density.set("A", 0.4).unwrap();
    assert_relative_eq!(density.total(), 0.7, epsilon = 1e-14);
    assert_relative_eq!(density.pair("A", "B").unwrap(), 0.12, epsilon = 1e-14);
}

#[test]
fn test_negative_density_rejected_without_side_effects() {
    let mut density = Density::new(&types(&["A", "B"]));
    density.set("A", 0.5).unwrap();
    match density.set("B", -0.25) {
        Err(PrismError::InvalidDensity { site, value }) => {
            assert_eq!(site, "B");
            assert_eq!(value, -0.25);
        }
        other => panic!("expected InvalidDensity, got {:?}", other),
    }
    // the rejected value never reached the total
    assert_relative_eq!(density.total(), 0.5, epsilon = 1e-14);
    assert!(density.check().is_err());
}
