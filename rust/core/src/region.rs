// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Region of interest
//!
//! A single simple polygon (optionally with holes) in the same planar
//! frame as the feature geometry. Validated once at construction so a run
//! can fail fast before touching any feature.

use nalgebra::Point2;

use crate::bounds::Bounds;
use crate::error::{Error, Result};

/// Vertices closer than this are considered the same point
const DISTINCT_EPSILON: f64 = 1e-9;

/// Polygons with less enclosed area than this are considered degenerate
const MIN_AREA_THRESHOLD: f64 = 1e-10;

/// The user-selected containment polygon constraining which features are
/// processed. Read-only for the whole run.
#[derive(Debug, Clone)]
pub struct Region {
    exterior: Vec<Point2<f64>>,
    holes: Vec<Vec<Point2<f64>>>,
    bounds: Bounds,
}

impl Region {
    /// Validate and build a region.
    ///
    /// Fails with [`Error::EmptyRegion`] when the exterior has fewer than
    /// 3 distinct vertices and with [`Error::InvalidRegion`] when it
    /// encloses no area. Holes with fewer than 3 vertices are dropped.
    pub fn new(
        exterior: Vec<Point2<f64>>,
        holes: impl IntoIterator<Item = Vec<Point2<f64>>>,
    ) -> Result<Self> {
        if distinct_vertex_count(&exterior) < 3 {
            return Err(Error::EmptyRegion(format!(
                "exterior has {} distinct vertices, need at least 3",
                distinct_vertex_count(&exterior)
            )));
        }

        if signed_area(&exterior).abs() < MIN_AREA_THRESHOLD {
            return Err(Error::InvalidRegion(
                "exterior encloses no area".to_string(),
            ));
        }

        let mut bounds = Bounds::new();
        for point in &exterior {
            bounds.expand(point.x, point.y);
        }

        let holes = holes
            .into_iter()
            .filter(|h| distinct_vertex_count(h) >= 3)
            .collect();

        Ok(Self {
            exterior,
            holes,
            bounds,
        })
    }

    /// Exterior boundary vertices
    #[inline]
    pub fn exterior(&self) -> &[Point2<f64>] {
        &self.exterior
    }

    /// Hole boundaries, possibly empty
    #[inline]
    pub fn holes(&self) -> &[Vec<Point2<f64>>] {
        &self.holes
    }

    /// Bounding box of the exterior
    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

/// Shoelace area of a 2D polygon, signed by winding order
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

fn distinct_vertex_count(points: &[Point2<f64>]) -> usize {
    let mut count = 0;
    for (i, point) in points.iter().enumerate() {
        let seen = points[..i].iter().any(|prev| {
            (prev.x - point.x).abs() < DISTINCT_EPSILON
                && (prev.y - point.y).abs() < DISTINCT_EPSILON
        });
        if !seen {
            count += 1;
        }
    }
    count
}
