// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output-boundary records
//!
//! Flat serializable forms of finished buildings for export and
//! reporting collaborators. Internal mesh types stay nalgebra-based;
//! records carry plain coordinate triples.

use serde::{Deserialize, Serialize};

use roofline_geometry::Face;

use crate::aggregate::Building;

/// Flat transport form of one face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    /// Boundary vertices as (x, y, z) triples
    pub points: Vec<[f64; 3]>,
    /// Unit normal
    pub normal: [f64; 3],
}

impl From<&Face> for FaceRecord {
    fn from(face: &Face) -> Self {
        Self {
            points: face.points.iter().map(|p| [p.x, p.y, p.z]).collect(),
            normal: [face.normal.x, face.normal.y, face.normal.z],
        }
    }
}

/// One building at the output boundary.
///
/// `eave_height` and `ridge_height` serialize as `null` when no face
/// survived classification; the record itself is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub id: String,
    pub category: String,
    pub nominal_height: Option<f64>,
    pub eave_height: Option<f64>,
    pub ridge_height: Option<f64>,
    pub face_count: usize,
    pub faces: Vec<FaceRecord>,
}

impl From<&Building> for BuildingRecord {
    fn from(building: &Building) -> Self {
        Self {
            id: building.id.clone(),
            category: building.category.clone(),
            nominal_height: building.nominal_height,
            eave_height: building.eave_height,
            ridge_height: building.ridge_height,
            face_count: building.face_count(),
            faces: building.mesh.faces().iter().map(FaceRecord::from).collect(),
        }
    }
}
