// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roofline Geometry
//!
//! Geometry math for building-roof extraction: region masking with a
//! bounding-box fast path and exact per-ring containment, n-gon face
//! construction with Newell normals, normal-based wall/footprint
//! classification, and the per-building face-list mesh.

pub mod classify;
pub mod error;
pub mod face;
pub mod mask;
pub mod mesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use classify::{classify_face, ClassifierConfig, FaceClass};
pub use error::{Error, Result};
pub use face::{build_face, newell_normal, Face};
pub use mask::{ring_is_valid, signed_area_xy, RegionMask};
pub use mesh::FaceMesh;
