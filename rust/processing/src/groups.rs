// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Category grouping

use rustc_hash::FxHashMap;

use crate::aggregate::Building;

/// Buildings bucketed by category label.
///
/// Within a category, append order is processing order; across
/// categories there is no ordering guarantee. No deduplication is
/// performed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups {
    groups: FxHashMap<String, Vec<Building>>,
}

impl CategoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a building to its category, creating the bucket on first use
    pub fn insert(&mut self, building: Building) {
        self.groups
            .entry(building.category.clone())
            .or_default()
            .push(building);
    }

    /// Buildings of one category, in processing order
    pub fn get(&self, category: &str) -> Option<&[Building]> {
        self.groups.get(category).map(|buildings| buildings.as_slice())
    }

    /// Number of categories seen
    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of buildings across all categories
    pub fn building_count(&self) -> usize {
        self.groups.values().map(|buildings| buildings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Per-category building counts
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.groups
            .iter()
            .map(|(category, buildings)| (category.as_str(), buildings.len()))
            .collect()
    }

    /// Iterate categories and their buildings
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Building])> {
        self.groups
            .iter()
            .map(|(category, buildings)| (category.as_str(), buildings.as_slice()))
    }
}
