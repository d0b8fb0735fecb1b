/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Symmetric pair table
//!
//! A `PairTable` maps an unordered pair of site types to a value: potentials,
//! closures, omega fields, or post-processing results. Storage is a packed
//! upper triangle keyed by the canonical (min,max) index pair, so `(A,B)` and
//! `(B,A)` resolve to the same owned slot and there are exactly
//! rank*(rank+1)/2 distinct entries.
//!
//! Two usage modes exist. A full table requires every i<=j slot before
//! `check()` passes. A table built with [`PairTable::cross_pairs`] forbids
//! self pairs outright: calculations like chi only produce values for
//! cross terms, and addressing `(t,t)` on such a table is a caller error
//! rather than missing data.

use super::errors::{PrismError, Result};

/// Mapping from an unordered pair of site types to a value of type `T`
#[derive(Debug, Clone)]
pub struct PairTable<T> {
    name: String,
    types: Vec<String>,
    values: Vec<Option<T>>,
    cross_only: bool,
}

impl<T> PairTable<T> {
    /// Create a table with one unset slot per unordered pair, self pairs included
    pub fn new(types: &[String], name: &str) -> Self {
        Self::build(types, name, false)
    }

    /// Create a table restricted to cross pairs (i < j); self pairs are rejected
    pub fn cross_pairs(types: &[String], name: &str) -> Self {
        Self::build(types, name, true)
    }

    fn build(types: &[String], name: &str, cross_only: bool) -> Self {
        let rank = types.len();
        let mut values = Vec::with_capacity(rank * (rank + 1) / 2);
        values.resize_with(rank * (rank + 1) / 2, || None);
        Self {
            name: name.to_string(),
            types: types.to_vec(),
            values,
            cross_only,
        }
    }

    /// Name of this table, used in error messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Site types this table is indexed by, in system order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Number of site types
    pub fn rank(&self) -> usize {
        self.types.len()
    }

    /// Whether this table stores cross pairs only
    pub fn is_cross_only(&self) -> bool {
        self.cross_only
    }

    /// Packed upper-triangle offset for canonical indices i <= j
    fn flat_index(i: usize, j: usize, rank: usize) -> usize {
        debug_assert!(i <= j && j < rank);
        i * rank - i * (i + 1) / 2 + j
    }

    fn type_index(&self, site: &str) -> Result<usize> {
        self.types
            .iter()
            .position(|t| t == site)
            .ok_or_else(|| PrismError::KeyNotFound {
                table: self.name.clone(),
                key: site.to_string(),
            })
    }

    /// Resolve two type names to the canonical (min,max) slot
    fn slot(&self, t1: &str, t2: &str) -> Result<usize> {
        let i = self.type_index(t1)?;
        let j = self.type_index(t2)?;
        let (i, j) = if i <= j { (i, j) } else { (j, i) };
        if self.cross_only && i == j {
            return Err(PrismError::InvalidPair(self.types[i].clone()));
        }
        Ok(Self::flat_index(i, j, self.rank()))
    }

    /// Store a value under the unordered pair; overwriting is allowed
    pub fn set(&mut self, t1: &str, t2: &str, value: T) -> Result<()> {
        let slot = self.slot(t1, t2)?;
        self.values[slot] = Some(value);
        Ok(())
    }

    /// Look up the value for an unordered pair
    pub fn get(&self, t1: &str, t2: &str) -> Result<&T> {
        let slot = self.slot(t1, t2)?;
        self.values[slot].as_ref().ok_or_else(|| PrismError::KeyNotFound {
            table: self.name.clone(),
            key: format!("({},{})", t1, t2),
        })
    }

    /// Mutable lookup for an unordered pair
    pub fn get_mut(&mut self, t1: &str, t2: &str) -> Result<&mut T> {
        let name = self.name.clone();
        let slot = self.slot(t1, t2)?;
        self.values[slot].as_mut().ok_or_else(|| PrismError::KeyNotFound {
            table: name,
            key: format!("({},{})", t1, t2),
        })
    }

    /// Iterate over all set entries as ((i,j), (t1,t2), value) with i <= j,
    /// in row-major order of the system's type ordering. The iterator is
    /// finite and can be restarted by calling this method again.
    pub fn iter_pairs(&self) -> impl Iterator<Item = ((usize, usize), (&str, &str), &T)> {
        let rank = self.rank();
        (0..rank)
            .flat_map(move |i| (i..rank).map(move |j| (i, j)))
            .filter_map(move |(i, j)| {
                self.values[Self::flat_index(i, j, rank)]
                    .as_ref()
                    .map(|v| ((i, j), (self.types[i].as_str(), self.types[j].as_str()), v))
            })
    }

    /// Verify that every required slot is set: all i <= j pairs for a full
    /// table, all i < j pairs for a cross-pair table
    pub fn check(&self) -> Result<()> {
        let rank = self.rank();
        for i in 0..rank {
            let start = if self.cross_only { i + 1 } else { i };
            for j in start..rank {
                if self.values[Self::flat_index(i, j, rank)].is_none() {
                    return Err(PrismError::IncompleteTable {
                        table: self.name.clone(),
                        slot: format!("({},{})", self.types[i], self.types[j]),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_flat_index_covers_triangle() {
        let rank = 4;
        let mut seen = vec![false; rank * (rank + 1) / 2];
        for i in 0..rank {
            for j in i..rank {
                let idx = PairTable::<f64>::flat_index(i, j, rank);
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_symmetric_access() {
        let mut table = PairTable::new(&types(), "potential");
        table.set("B", "A", 1.5).unwrap();
        assert_eq!(*table.get("A", "B").unwrap(), 1.5);
        assert_eq!(*table.get("B", "A").unwrap(), 1.5);
    }

    #[test]
    fn test_iter_pairs_order() {
        let mut table = PairTable::new(&types(), "t");
        assert_eq!(table.iter_pairs().count(), 0);
        table.set("A", "A", 0).unwrap();
        table.set("C", "A", 1).unwrap();
        table.set("B", "B", 2).unwrap();
        let order: Vec<_> = table.iter_pairs().map(|(ij, _, &v)| (ij, v)).collect();
        assert_eq!(order, vec![((0, 0), 0), ((0, 2), 1), ((1, 1), 2)]);
    }

    #[test]
    fn test_cross_only_rejects_self_pairs() {
        let mut table = PairTable::cross_pairs(&types(), "chi");
        assert!(matches!(
            table.set("A", "A", 1.0),
            Err(PrismError::InvalidPair(_))
        ));
        table.set("A", "B", 1.0).unwrap();
        table.set("A", "C", 1.0).unwrap();
        table.set("B", "C", 1.0).unwrap();
        assert!(table.check().is_ok());
        assert!(matches!(
            table.get("B", "B"),
            Err(PrismError::InvalidPair(_))
        ));
    }

    #[test]
    fn test_check_incomplete() {
        let mut table = PairTable::new(&types(), "omega");
        for (t1, t2) in [
            ("A", "A"),
            ("A", "B"),
            ("A", "C"),
            ("B", "B"),
            ("C", "C"),
        ] {
            table.set(t1, t2, 0.0).unwrap();
        }
        match table.check() {
            Err(PrismError::IncompleteTable { slot, .. }) => assert_eq!(slot, "(B,C)"),
            other => panic!("expected IncompleteTable, got {:?}", other),
        }
    }
}
