/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Per-site-type value table
//!
//! A `ValueTable` maps each site type of a system to a single value, e.g.
//! the site diameter table. Slots are created unset and must all be filled
//! before `check()` succeeds.

use super::errors::{PrismError, Result};

/// Mapping from a site type to a value of type `T`
#[derive(Debug, Clone)]
pub struct ValueTable<T> {
    name: String,
    types: Vec<String>,
    values: Vec<Option<T>>,
}

impl<T> ValueTable<T> {
    /// Create a table with one unset slot per site type
    pub fn new(types: &[String], name: &str) -> Self {
        let mut values = Vec::with_capacity(types.len());
        values.resize_with(types.len(), || None);
        Self {
            name: name.to_string(),
            types: types.to_vec(),
            values,
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

    fn index(&self, site: &str) -> Result<usize> {
        self.types
            .iter()
            .position(|t| t == site)
            .ok_or_else(|| PrismError::KeyNotFound {
                table: self.name.clone(),
                key: site.to_string(),
            })
    }

    /// Assign a value to a site type; overwriting is allowed
    pub fn set(&mut self, site: &str, value: T) -> Result<()> {
        let idx = self.index(site)?;
        self.values[idx] = Some(value);
        Ok(())
    }

    /// Look up the value for a site type
    pub fn get(&self, site: &str) -> Result<&T> {
        let idx = self.index(site)?;
        self.values[idx].as_ref().ok_or_else(|| PrismError::KeyNotFound {
            table: self.name.clone(),
            key: site.to_string(),
        })
    }

    /// Iterate over all site types and their (possibly unset) values
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&T>)> {
        self.types
            .iter()
            .zip(self.values.iter())
            .map(|(t, v)| (t.as_str(), v.as_ref()))
    }

    /// Verify that every site type has an assigned value
    pub fn check(&self) -> Result<()> {
        for (site, value) in self.iter() {
            if value.is_none() {
                return Err(PrismError::IncompleteTable {
                    table: self.name.clone(),
                    slot: site.to_string(),
                });
            }
        }
        Ok(())
    }
}
