// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face construction
//!
//! Builds one planar n-gon face per polygon ring, in original point
//! order, with a unit normal from Newell's method. No triangulation is
//! performed; the normal must therefore be robust for near-planar,
//! possibly non-convex rings, which per-triangle normal averaging is not.

use nalgebra::{Point3, Vector3};
use roofline_core::Ring;

use crate::error::{Error, Result};

/// Minimum squared length for a usable Newell normal
const NORMAL_EPSILON: f64 = 1e-10;

/// A planar polygonal face with its unit normal.
///
/// Owned exclusively by the building mesh under construction; faces
/// classified as walls or footprints are dropped before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Boundary vertices in source order, closing duplicate removed
    pub points: Vec<Point3<f64>>,
    /// Unit normal
    pub normal: Vector3<f64>,
}

impl Face {
    /// Number of boundary vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimum and maximum elevation over the face's vertices
    #[inline]
    pub fn z_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for point in &self.points {
            range = Some(match range {
                Some((min, max)) => (min.min(point.z), max.max(point.z)),
                None => (point.z, point.z),
            });
        }
        range
    }
}

/// Build one face from a polygon ring.
///
/// Every point must pass the non-degenerate magnitude check
/// `|x| + |y| + |z| > 1`, which guards against zeroed or missing
/// coordinates in the source tile. A violation is a data-integrity fault
/// for the whole feature, not recoverable per point.
pub fn build_face(ring: &Ring) -> Result<Face> {
    let raw = ring.points();

    for point in raw {
        if point.x.abs() + point.y.abs() + point.z.abs() <= 1.0 {
            return Err(Error::DegenerateCoordinate {
                x: point.x,
                y: point.y,
                z: point.z,
            });
        }
    }

    // Source rings may or may not repeat the first point as the last
    let points: Vec<Point3<f64>> = if raw.len() > 1 && raw.first() == raw.last() {
        raw[..raw.len() - 1].to_vec()
    } else {
        raw.to_vec()
    };

    if points.len() < 3 {
        return Err(Error::InvalidFace(format!(
            "ring has {} distinct points, need at least 3",
            points.len()
        )));
    }

    let normal = newell_normal(&points)
        .ok_or_else(|| Error::InvalidFace("ring has no usable normal".to_string()))?;

    Ok(Face { points, normal })
}

/// Unit polygon normal via Newell's method.
///
/// Returns `None` when the accumulated normal is too short to normalize
/// (collinear or otherwise degenerate rings).
#[inline]
pub fn newell_normal(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let mut normal = Vector3::<f64>::zeros();
    for i in 0..n {
        let current = &points[i];
        let next = &points[(i + 1) % n];

        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    let len = normal.norm();
    if len > NORMAL_EPSILON {
        Some(normal / len)
    } else {
        None
    }
}
