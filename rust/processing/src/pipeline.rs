// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extraction pipeline
//!
//! Single-pass, per-feature transformation: mask against the region,
//! extract rings, build faces, classify, aggregate, group. Per-feature
//! faults are logged and counted without aborting the run; region-level
//! faults abort before any feature is touched.
//!
//! The parallel variant fans the per-feature work out over rayon and
//! funnels id assignment and grouping through a single sequential merge,
//! so its output is identical to the sequential run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use roofline_core::{Bounds, Feature, Region, Ring};
use roofline_geometry::{
    build_face, classify_face, ring_is_valid, ClassifierConfig, FaceClass, FaceMesh, RegionMask,
};

use crate::aggregate::{aggregate, RunState};
use crate::error::{Error, Result};
use crate::groups::CategoryGroups;
use crate::stats::RunStats;

/// Cooperative cancellation handle, checked between features.
///
/// Cancellation never interrupts a feature mid-flight and never yields a
/// partial result; the run aborts with [`Error::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; the run aborts before the next feature
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options controlling one extraction run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Wall/footprint rejection thresholds
    pub classifier: ClassifierConfig,
    /// Keep only features whose category label is listed
    pub category_filter: Option<Vec<String>>,
    /// Keep only features whose source identifier is listed; features
    /// without an identifier never match
    pub identifier_filter: Option<Vec<String>>,
    /// Cooperative cancellation handle
    pub cancel: Option<CancelFlag>,
}

impl RunOptions {
    fn allows(&self, feature: &Feature) -> bool {
        if let Some(categories) = &self.category_filter {
            if !categories.iter().any(|c| c == &feature.category) {
                return false;
            }
        }
        if let Some(identifiers) = &self.identifier_filter {
            match feature.identifier.as_deref() {
                Some(id) => {
                    if !identifiers.iter().any(|allowed| allowed == id) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Result of a completed run: buildings grouped by category plus the
/// diagnostic counters
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub categories: CategoryGroups,
    pub stats: RunStats,
}

impl Extraction {
    /// Explicit empty-result signal: every feature was filtered out
    /// before aggregation. Distinct from a processing fault; buildings
    /// that merely lost all their faces still count as results.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Run the pipeline over a feature sequence.
///
/// The region must already have passed [`Region::new`] validation; an
/// empty feature source aborts with [`Error::EmptySource`].
pub fn run<I>(features: I, region: &Region, options: &RunOptions) -> Result<Extraction>
where
    I: IntoIterator<Item = Feature>,
{
    let mask = RegionMask::new(region);
    let mut state = RunState::new();
    let mut groups = CategoryGroups::new();
    let mut stats = RunStats::default();

    for feature in features {
        if let Some(cancel) = &options.cancel {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }
        let processed = process_feature(feature, &mask, options);
        absorb(processed, &mut stats, &mut state, &mut groups);
    }

    finish(groups, stats)
}

/// Parallel variant of [`run`].
///
/// Features are independent after masking, so the per-feature work fans
/// out over the rayon pool; the synthetic-id counter and the category
/// mapping are the only shared state and stay behind the sequential
/// merge below, keeping the output identical to the sequential run.
pub fn run_parallel(
    features: Vec<Feature>,
    region: &Region,
    options: &RunOptions,
) -> Result<Extraction> {
    if let Some(cancel) = &options.cancel {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
    }

    let mask = RegionMask::new(region);
    let processed: Vec<Processed> = features
        .into_par_iter()
        .map(|feature| process_feature(feature, &mask, options))
        .collect();

    let mut state = RunState::new();
    let mut groups = CategoryGroups::new();
    let mut stats = RunStats::default();
    for item in processed {
        if let Some(cancel) = &options.cancel {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }
        absorb(item, &mut stats, &mut state, &mut groups);
    }

    finish(groups, stats)
}

enum Outcome {
    Filtered,
    Outside,
    Invalid,
    Built {
        mesh: FaceMesh,
        walls: usize,
        footprints: usize,
    },
}

struct Processed {
    feature: Feature,
    outcome: Outcome,
    ring_tests: usize,
}

fn process_feature(feature: Feature, mask: &RegionMask<'_>, options: &RunOptions) -> Processed {
    if !options.allows(&feature) {
        return Processed {
            feature,
            outcome: Outcome::Filtered,
            ring_tests: 0,
        };
    }

    let (outcome, ring_tests) = evaluate_geometry(&feature, mask, &options.classifier);
    Processed {
        feature,
        outcome,
        ring_tests,
    }
}

fn evaluate_geometry(
    feature: &Feature,
    mask: &RegionMask<'_>,
    config: &ClassifierConfig,
) -> (Outcome, usize) {
    let rings = match feature.geometry.rings() {
        Ok(rings) => rings,
        Err(err) => {
            tracing::warn!(category = %feature.category, error = %err, "skipping feature");
            return (Outcome::Invalid, 0);
        }
    };

    // Cheap rejection first: no containment work for far-away features
    let bounds = Bounds::from_rings(rings.iter().copied());
    if mask.bounds_disjoint(&bounds) {
        return (Outcome::Outside, 0);
    }

    // Exact containment per valid ring. A self-intersecting or zero-area
    // ring is excluded without failing the feature; any valid ring
    // outside the region drops the feature whole (no clipping).
    let mut ring_tests = 0;
    let mut checked: Vec<&Ring> = Vec::with_capacity(rings.len());
    let mut outside = false;
    for ring in rings {
        if !ring_is_valid(ring) {
            continue;
        }
        ring_tests += 1;
        if mask.contains_ring(ring) {
            checked.push(ring);
        } else {
            outside = true;
            break;
        }
    }
    if outside {
        return (Outcome::Outside, ring_tests);
    }
    if checked.is_empty() {
        tracing::warn!(category = %feature.category, "skipping feature: no valid rings");
        return (Outcome::Invalid, ring_tests);
    }

    // Footprint reference: minimum elevation over every checked ring,
    // computed before any face is discarded
    let min_elevation = checked
        .iter()
        .filter_map(|ring| ring.min_elevation())
        .fold(f64::INFINITY, f64::min);

    let mut mesh = FaceMesh::with_capacity(checked.len());
    let mut walls = 0;
    let mut footprints = 0;
    for ring in checked {
        let face = match build_face(ring) {
            Ok(face) => face,
            Err(err) => {
                tracing::warn!(category = %feature.category, error = %err, "skipping feature");
                return (Outcome::Invalid, ring_tests);
            }
        };
        match classify_face(&face, min_elevation, config) {
            FaceClass::Roof => mesh.push(face),
            FaceClass::Wall => walls += 1,
            FaceClass::Footprint => footprints += 1,
        }
    }

    (
        Outcome::Built {
            mesh,
            walls,
            footprints,
        },
        ring_tests,
    )
}

/// Single accumulation point for both run variants
fn absorb(
    processed: Processed,
    stats: &mut RunStats,
    state: &mut RunState,
    groups: &mut CategoryGroups,
) {
    stats.features_seen += 1;
    stats.ring_containment_tests += processed.ring_tests;

    match processed.outcome {
        Outcome::Filtered => stats.features_skipped_filtered += 1,
        Outcome::Outside => stats.features_skipped_outside_region += 1,
        Outcome::Invalid => stats.features_skipped_invalid_geometry += 1,
        Outcome::Built {
            mesh,
            walls,
            footprints,
        } => {
            stats.faces_discarded_wall += walls;
            stats.faces_discarded_footprint += footprints;
            let building = aggregate(&processed.feature, mesh, state);
            tracing::debug!(
                id = %building.id,
                faces = building.face_count(),
                "building emitted"
            );
            stats.buildings_emitted += 1;
            groups.insert(building);
        }
    }
}

fn finish(groups: CategoryGroups, stats: RunStats) -> Result<Extraction> {
    if stats.features_seen == 0 {
        return Err(Error::EmptySource);
    }

    tracing::info!(
        features_seen = stats.features_seen,
        buildings_emitted = stats.buildings_emitted,
        skipped_outside = stats.features_skipped_outside_region,
        skipped_invalid = stats.features_skipped_invalid_geometry,
        walls_discarded = stats.faces_discarded_wall,
        footprints_discarded = stats.faces_discarded_footprint,
        "extraction finished"
    );
    for (category, count) in groups.counts() {
        tracing::info!(category = %category, count, "category buildings");
    }

    Ok(Extraction {
        categories: groups,
        stats,
    })
}
