// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run diagnostics

use serde::Serialize;

/// Diagnostic counters emitted with every completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Features read from the source
    pub features_seen: usize,
    /// Features rejected by the category/identifier filters
    pub features_skipped_filtered: usize,
    /// Features outside the region, via the bounds fast path or ring
    /// containment
    pub features_skipped_outside_region: usize,
    /// Features with unusable geometry: unsupported kind, degenerate
    /// coordinates, or no valid rings
    pub features_skipped_invalid_geometry: usize,
    /// Buildings handed to the category grouper, empty meshes included
    pub buildings_emitted: usize,
    /// Faces rejected as near-vertical walls
    pub faces_discarded_wall: usize,
    /// Faces rejected as ground footprints
    pub faces_discarded_footprint: usize,
    /// Exact ring containment tests performed; stays at zero for features
    /// rejected by the bounds fast path
    pub ring_containment_tests: usize,
}
