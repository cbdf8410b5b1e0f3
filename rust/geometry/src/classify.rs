// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof-face classification
//!
//! Raw building tiles contain wall skirts and a duplicated ground
//! footprint polygon alongside the actual roof surfaces. Both are
//! geometrically present but carry no semantic label, so they are
//! rejected from the face normal alone: near-vertical faces are walls,
//! near-horizontal faces sitting at the feature's minimum elevation are
//! the footprint. Everything else is roof.
//!
//! One ring produces one face, so the source's "all faces of the ring are
//! vertical" wall condition degenerates to a single per-face check.

use crate::face::Face;

/// Thresholds for wall and footprint rejection
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfig {
    /// Faces with |normal.z| below this are vertical walls
    /// (0.1 puts the normal within ~5.7 degrees of the horizontal plane)
    pub wall_max_normal_z: f64,
    /// Faces with |normal.z| above this are horizontal candidates
    /// (0.95 allows ~18 degrees of tilt)
    pub footprint_min_normal_z: f64,
    /// Maximum distance in meters from the feature minimum elevation for
    /// a horizontal face to count as the ground footprint
    pub footprint_elevation_tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            wall_max_normal_z: 0.1,
            footprint_min_normal_z: 0.95,
            footprint_elevation_tolerance: 0.1,
        }
    }
}

/// Classification outcome for one candidate face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceClass {
    /// Sloped or elevated flat face, part of the reported roof surface
    Roof,
    /// Near-vertical face, discarded
    Wall,
    /// Near-horizontal face at ground level, discarded
    Footprint,
}

/// Classify a face against the feature's minimum elevation.
///
/// `feature_min_elevation` must be the minimum z over all points of all
/// of the feature's checked rings, computed before any face is discarded;
/// it is the footprint reference even for faces that end up rejected.
pub fn classify_face(
    face: &Face,
    feature_min_elevation: f64,
    config: &ClassifierConfig,
) -> FaceClass {
    let z = face.normal.z.abs();

    if z < config.wall_max_normal_z {
        return FaceClass::Wall;
    }

    if z > config.footprint_min_normal_z {
        let at_ground = face
            .points
            .iter()
            .all(|p| (p.z - feature_min_elevation).abs() < config.footprint_elevation_tolerance);
        if at_ground {
            return FaceClass::Footprint;
        }
    }

    FaceClass::Roof
}
