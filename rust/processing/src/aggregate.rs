// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building aggregation
//!
//! Unions a feature's surviving faces into one building mesh and derives
//! the eave and ridge heights. The synthetic identifier counter is
//! explicit run state passed in by the pipeline, never ambient global
//! state, so runs are deterministic and the parallel path can funnel
//! id assignment through its single merge step.

use roofline_core::Feature;
use roofline_geometry::FaceMesh;

/// Per-run mutable state: the synthetic identifier counter
#[derive(Debug, Default)]
pub struct RunState {
    next_synthetic_id: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next run-scoped synthetic id, `building_<n>` with n starting at 0.
    /// The counter advances only when an id is actually consumed.
    fn next_id(&mut self) -> String {
        let id = format!("building_{}", self.next_synthetic_id);
        self.next_synthetic_id += 1;
        id
    }
}

/// A finished building: surviving roof faces plus source attributes and
/// derived heights
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    /// Source identifier, or a run-scoped synthetic id
    pub id: String,
    /// Category label inherited from the feature
    pub category: String,
    /// Nominal height attribute from the source, if supplied
    pub nominal_height: Option<f64>,
    /// Lowest elevation among retained points; absent when no face survived
    pub eave_height: Option<f64>,
    /// Highest elevation among retained points; absent when no face survived
    pub ridge_height: Option<f64>,
    /// Surviving roof faces; may be empty
    pub mesh: FaceMesh,
}

impl Building {
    /// Number of surviving faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.mesh.face_count()
    }
}

/// Assemble one building from a feature's surviving faces.
///
/// A building with zero surviving faces is still emitted, with both
/// heights absent, so downstream reporting can show "height not
/// available" instead of silently dropping the record.
pub fn aggregate(feature: &Feature, mesh: FaceMesh, state: &mut RunState) -> Building {
    let id = match feature.identifier.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => state.next_id(),
    };

    let (eave_height, ridge_height) = match mesh.z_range() {
        Some((min, max)) => (Some(min), Some(max)),
        None => (None, None),
    };

    Building {
        id,
        category: feature.category.clone(),
        nominal_height: feature.nominal_height,
        eave_height,
        ridge_height,
        mesh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roofline_core::{Geometry, Point3, Polygon, Ring};
    use roofline_geometry::build_face;

    fn some_feature(identifier: Option<&str>) -> Feature {
        let ring = Ring::new(vec![
            Point3::new(10.0, 10.0, 430.0),
            Point3::new(20.0, 10.0, 430.0),
            Point3::new(15.0, 20.0, 436.0),
        ]);
        let mut feature = Feature::new(Geometry::Polygon(Polygon::new(ring)), "Building");
        if let Some(id) = identifier {
            feature = feature.with_identifier(id);
        }
        feature
    }

    fn roof_mesh() -> FaceMesh {
        let mut mesh = FaceMesh::new();
        mesh.push(
            build_face(&Ring::new(vec![
                Point3::new(10.0, 10.0, 432.0),
                Point3::new(20.0, 10.0, 432.0),
                Point3::new(20.0, 20.0, 438.5),
                Point3::new(10.0, 20.0, 438.5),
            ]))
            .unwrap(),
        );
        mesh
    }

    #[test]
    fn test_source_identifier_is_kept() {
        let mut state = RunState::new();
        let building = aggregate(&some_feature(Some("2DC6E5A1")), roof_mesh(), &mut state);
        assert_eq!(building.id, "2DC6E5A1");
        assert_eq!(state.next_synthetic_id, 0);
    }

    #[test]
    fn test_synthetic_ids_are_sequential() {
        let mut state = RunState::new();
        let a = aggregate(&some_feature(None), roof_mesh(), &mut state);
        let b = aggregate(&some_feature(Some("X1")), roof_mesh(), &mut state);
        let c = aggregate(&some_feature(None), roof_mesh(), &mut state);

        assert_eq!(a.id, "building_0");
        assert_eq!(b.id, "X1");
        // The counter only advanced for consumed ids
        assert_eq!(c.id, "building_1");
    }

    #[test]
    fn test_empty_identifier_gets_synthetic_id() {
        let mut state = RunState::new();
        let building = aggregate(&some_feature(Some("")), roof_mesh(), &mut state);
        assert_eq!(building.id, "building_0");
    }

    #[test]
    fn test_heights_from_mesh() {
        let mut state = RunState::new();
        let building = aggregate(&some_feature(None), roof_mesh(), &mut state);
        assert_eq!(building.eave_height, Some(432.0));
        assert_eq!(building.ridge_height, Some(438.5));
        assert_eq!(building.face_count(), 1);
    }

    #[test]
    fn test_empty_mesh_still_yields_building() {
        let mut state = RunState::new();
        let building = aggregate(&some_feature(None), FaceMesh::new(), &mut state);
        assert_eq!(building.eave_height, None);
        assert_eq!(building.ridge_height, None);
        assert_eq!(building.face_count(), 0);
    }
}
