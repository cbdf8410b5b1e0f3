// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D axis-aligned bounds in the projected planar frame
//!
//! Used for the cheap first-stage rejection test: a feature whose bounds
//! do not overlap the region's bounds needs no per-ring containment work.

use crate::feature::Ring;

/// Axis-aligned bounding box over x/y, elevation ignored
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Minimum X coordinate found
    pub min_x: f64,
    /// Minimum Y coordinate found
    pub min_y: f64,
    /// Maximum X coordinate found
    pub max_x: f64,
    /// Maximum Y coordinate found
    pub max_y: f64,
    /// Number of points sampled
    pub sample_count: usize,
}

impl Bounds {
    /// Create new bounds initialized to invalid state
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
            sample_count: 0,
        }
    }

    /// Bounds covering the exterior points of the given rings
    pub fn from_rings<'a, I>(rings: I) -> Self
    where
        I: IntoIterator<Item = &'a Ring>,
    {
        let mut bounds = Self::new();
        for ring in rings {
            for point in ring.points() {
                bounds.expand(point.x, point.y);
            }
        }
        bounds
    }

    /// Check if bounds are valid (at least one point added)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sample_count > 0
    }

    /// Expand bounds to include a point
    #[inline]
    pub fn expand(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.sample_count += 1;
    }

    /// Axis-aligned interval disjoint test on both axes.
    ///
    /// Invalid bounds are disjoint from everything, so empty geometry is
    /// rejected by the fast path rather than reaching exact containment.
    #[inline]
    pub fn disjoint(&self, other: &Bounds) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return true;
        }
        self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y
    }

    /// Get centroid (center of bounding box)
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        if !self.is_valid() {
            return (0.0, 0.0);
        }
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_bounds_creation() {
        let bounds = Bounds::new();
        assert!(!bounds.is_valid());
    }

    #[test]
    fn test_bounds_expand() {
        let mut bounds = Bounds::new();
        bounds.expand(100.0, 200.0);
        bounds.expand(150.0, 250.0);

        assert!(bounds.is_valid());
        assert_eq!(bounds.min_x, 100.0);
        assert_eq!(bounds.max_x, 150.0);
        assert_eq!(bounds.min_y, 200.0);
        assert_eq!(bounds.max_y, 250.0);

        let center = bounds.center();
        assert_eq!(center.0, 125.0);
        assert_eq!(center.1, 225.0);
    }

    #[test]
    fn test_disjoint_boxes() {
        let mut a = Bounds::new();
        a.expand(0.0, 0.0);
        a.expand(10.0, 10.0);

        let mut b = Bounds::new();
        b.expand(20.0, 20.0);
        b.expand(30.0, 30.0);

        assert!(a.disjoint(&b));
        assert!(b.disjoint(&a));
    }

    #[test]
    fn test_overlapping_boxes() {
        let mut a = Bounds::new();
        a.expand(0.0, 0.0);
        a.expand(10.0, 10.0);

        let mut b = Bounds::new();
        b.expand(5.0, 5.0);
        b.expand(15.0, 15.0);

        assert!(!a.disjoint(&b));
    }

    #[test]
    fn test_touching_boxes_are_not_disjoint() {
        let mut a = Bounds::new();
        a.expand(0.0, 0.0);
        a.expand(10.0, 10.0);

        let mut b = Bounds::new();
        b.expand(10.0, 10.0);
        b.expand(20.0, 20.0);

        assert!(!a.disjoint(&b));
    }

    #[test]
    fn test_invalid_bounds_disjoint_from_everything() {
        let empty = Bounds::new();
        let mut full = Bounds::new();
        full.expand(0.0, 0.0);
        full.expand(1.0, 1.0);

        assert!(empty.disjoint(&full));
        assert!(full.disjoint(&empty));
    }

    #[test]
    fn test_from_rings() {
        let ring = Ring::new(vec![
            Point3::new(2679012.0, 1247892.0, 432.0),
            Point3::new(2679112.0, 1247992.0, 442.0),
            Point3::new(2679012.0, 1247992.0, 432.0),
        ]);

        let bounds = Bounds::from_rings([&ring]);
        assert!(bounds.is_valid());
        assert_eq!(bounds.sample_count, 3);
        assert_eq!(bounds.min_x, 2679012.0);
        assert_eq!(bounds.max_y, 1247992.0);
    }
}
