// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-building surface mesh
//!
//! The union of one building's surviving faces. Aggregation is plain
//! face-list concatenation; there are no boolean mesh operations and no
//! shared geometry between buildings.

use crate::face::Face;

/// Face-list surface mesh for one building
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceMesh {
    faces: Vec<Face>,
}

impl FaceMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(face_count: usize) -> Self {
        Self {
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Add a face
    #[inline]
    pub fn push(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Merge another mesh into this one
    #[inline]
    pub fn merge(&mut self, other: FaceMesh) {
        if other.is_empty() {
            return;
        }
        self.faces.reserve(other.faces.len());
        self.faces.extend(other.faces);
    }

    /// The faces in insertion order
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get face count
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Total vertex count across all faces
    #[inline]
    pub fn point_count(&self) -> usize {
        self.faces.iter().map(|f| f.len()).sum()
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Minimum and maximum elevation over all face vertices.
    ///
    /// `None` for an empty mesh; downstream reporting shows such
    /// buildings as "height not available".
    pub fn z_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for face in &self.faces {
            if let Some((face_min, face_max)) = face.z_range() {
                range = Some(match range {
                    Some((min, max)) => (min.min(face_min), max.max(face_max)),
                    None => (face_min, face_max),
                });
            }
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::build_face;
    use nalgebra::Point3;
    use roofline_core::Ring;

    fn flat_face(z: f64) -> Face {
        build_face(&Ring::new(vec![
            Point3::new(10.0, 10.0, z),
            Point3::new(20.0, 10.0, z),
            Point3::new(20.0, 20.0, z),
            Point3::new(10.0, 20.0, z),
        ]))
        .unwrap()
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = FaceMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.z_range(), None);
    }

    #[test]
    fn test_push_and_counts() {
        let mut mesh = FaceMesh::new();
        mesh.push(flat_face(5.0));
        mesh.push(flat_face(8.0));

        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.point_count(), 8);
    }

    #[test]
    fn test_merge() {
        let mut a = FaceMesh::new();
        a.push(flat_face(5.0));

        let mut b = FaceMesh::new();
        b.push(flat_face(8.0));
        b.push(flat_face(9.0));

        a.merge(b);
        assert_eq!(a.face_count(), 3);
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut a = FaceMesh::new();
        a.push(flat_face(5.0));
        a.merge(FaceMesh::new());
        assert_eq!(a.face_count(), 1);
    }

    #[test]
    fn test_z_range_spans_faces() {
        let mut mesh = FaceMesh::new();
        mesh.push(flat_face(431.0));
        mesh.push(flat_face(437.5));

        assert_eq!(mesh.z_range(), Some((431.0, 437.5)));
    }
}
