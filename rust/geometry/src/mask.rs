// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Region masking
//!
//! Two-stage spatial filter against the region of interest: an O(1)
//! bounding-box disjoint test rejects features far from the region, then
//! exact per-ring containment decides the rest. A feature is retained
//! only if every checked ring is fully inside the region; buildings
//! straddling the boundary are dropped whole rather than clipped.

use nalgebra::Point2;
use roofline_core::{Bounds, Region, Ring};

/// Polygons with less enclosed XY area than this are considered degenerate
const MIN_AREA_THRESHOLD: f64 = 1e-10;

/// Exact containment mask over a validated region of interest
#[derive(Debug, Clone, Copy)]
pub struct RegionMask<'a> {
    region: &'a Region,
}

impl<'a> RegionMask<'a> {
    pub fn new(region: &'a Region) -> Self {
        Self { region }
    }

    /// Fast path: true when the feature's bounds cannot overlap the
    /// region's bounds. No per-vertex work is performed.
    #[inline]
    pub fn bounds_disjoint(&self, feature_bounds: &Bounds) -> bool {
        feature_bounds.disjoint(self.region.bounds())
    }

    /// Exact test: the ring lies fully inside the region.
    ///
    /// All ring vertices must be inside the exterior and outside every
    /// hole, no ring edge may cross a region boundary edge, and no hole
    /// may sit inside the ring. Elevation is ignored; containment is a
    /// plan-view decision.
    pub fn contains_ring(&self, ring: &Ring) -> bool {
        let points = ring_xy(ring);
        if points.len() < 3 {
            return false;
        }

        let exterior = self.region.exterior();
        if !points.iter().all(|p| point_in_polygon(p, exterior)) {
            return false;
        }

        for hole in self.region.holes() {
            if points.iter().any(|p| point_in_polygon(p, hole)) {
                return false;
            }
            // A hole swallowed by the ring still punches out part of it
            if hole.iter().any(|p| point_in_polygon(p, &points)) {
                return false;
            }
        }

        // Vertices inside is not enough around concave boundary sections
        if edges_cross_boundary(&points, exterior) {
            return false;
        }
        for hole in self.region.holes() {
            if edges_cross_boundary(&points, hole) {
                return false;
            }
        }

        true
    }
}

/// Validity screen for a single ring, in plan view.
///
/// Rejects rings with fewer than 3 distinct XY vertices, rings enclosing
/// no area, and self-intersecting rings. An invalid ring is excluded from
/// containment checking without failing the whole feature.
pub fn ring_is_valid(ring: &Ring) -> bool {
    let points = ring_xy(ring);
    let n = points.len();
    if n < 3 {
        return false;
    }

    if signed_area_xy(&points).abs() < MIN_AREA_THRESHOLD {
        return false;
    }

    // Pairwise test of non-adjacent edges; rings are short enough that
    // the quadratic scan is cheaper than anything indexed
    for i in 0..n {
        let a1 = &points[i];
        let a2 = &points[(i + 1) % n];
        for j in (i + 1)..n {
            // Skip the shared-endpoint pairs (i,i+1) and the wrap pair (0,n-1)
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let b1 = &points[j];
            let b2 = &points[(j + 1) % n];
            if segments_intersect(a1, a2, b1, b2) {
                return false;
            }
        }
    }

    true
}

/// Shoelace area of the ring's XY projection, signed by winding order
pub fn signed_area_xy(points: &[Point2<f64>]) -> f64 {
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

/// XY projection of a ring with the duplicated closing point removed
fn ring_xy(ring: &Ring) -> Vec<Point2<f64>> {
    let raw = ring.points();
    let n = if raw.len() > 1 && raw.first() == raw.last() {
        raw.len() - 1
    } else {
        raw.len()
    };
    raw[..n].iter().map(|p| Point2::new(p.x, p.y)).collect()
}

/// Ray casting point-in-polygon test
fn point_in_polygon(point: &Point2<f64>, polygon: &[Point2<f64>]) -> bool {
    let mut inside = false;
    let n = polygon.len();

    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];

        let crosses = (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
        if crosses {
            inside = !inside;
        }
    }

    inside
}

/// True when any ring edge properly intersects any boundary edge
fn edges_cross_boundary(ring: &[Point2<f64>], boundary: &[Point2<f64>]) -> bool {
    let rn = ring.len();
    let bn = boundary.len();
    for i in 0..rn {
        let a1 = &ring[i];
        let a2 = &ring[(i + 1) % rn];
        for j in 0..bn {
            let b1 = &boundary[j];
            let b2 = &boundary[(j + 1) % bn];
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    false
}

/// Segment intersection test, including collinear overlap
fn segments_intersect(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
    p4: &Point2<f64>,
) -> bool {
    let d1 = direction(p3, p4, p1);
    let d2 = direction(p3, p4, p2);
    let d3 = direction(p1, p2, p3);
    let d4 = direction(p1, p2, p4);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    if d1 == 0.0 && on_segment(p3, p4, p1) {
        return true;
    }
    if d2 == 0.0 && on_segment(p3, p4, p2) {
        return true;
    }
    if d3 == 0.0 && on_segment(p1, p2, p3) {
        return true;
    }
    if d4 == 0.0 && on_segment(p1, p2, p4) {
        return true;
    }

    false
}

/// Cross-product orientation of three points
#[inline]
fn direction(p1: &Point2<f64>, p2: &Point2<f64>, p3: &Point2<f64>) -> f64 {
    (p3.x - p1.x) * (p2.y - p1.y) - (p2.x - p1.x) * (p3.y - p1.y)
}

/// True when `p` lies within the bounding box of segment `p1`-`p2`
#[inline]
fn on_segment(p1: &Point2<f64>, p2: &Point2<f64>, p: &Point2<f64>) -> bool {
    p.x >= p1.x.min(p2.x) && p.x <= p1.x.max(p2.x) && p.y >= p1.y.min(p2.y) && p.y <= p1.y.max(p2.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use roofline_core::Region;

    fn region_10x10() -> Region {
        Region::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            [],
        )
        .unwrap()
    }

    fn region_with_hole() -> Region {
        Region::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            [vec![
                Point2::new(4.0, 4.0),
                Point2::new(6.0, 4.0),
                Point2::new(6.0, 6.0),
                Point2::new(4.0, 6.0),
            ]],
        )
        .unwrap()
    }

    fn ring_at(x0: f64, y0: f64, size: f64) -> Ring {
        Ring::new(vec![
            Point3::new(x0, y0, 5.0),
            Point3::new(x0 + size, y0, 5.0),
            Point3::new(x0 + size, y0 + size, 5.0),
            Point3::new(x0, y0 + size, 5.0),
        ])
    }

    #[test]
    fn test_bounds_fast_path() {
        let region = region_10x10();
        let mask = RegionMask::new(&region);

        let far = Bounds::from_rings([&ring_at(20.0, 20.0, 10.0)]);
        assert!(mask.bounds_disjoint(&far));

        let near = Bounds::from_rings([&ring_at(5.0, 5.0, 2.0)]);
        assert!(!mask.bounds_disjoint(&near));
    }

    #[test]
    fn test_contained_ring() {
        let region = region_10x10();
        let mask = RegionMask::new(&region);
        assert!(mask.contains_ring(&ring_at(2.0, 2.0, 3.0)));
    }

    #[test]
    fn test_straddling_ring_is_outside() {
        let region = region_10x10();
        let mask = RegionMask::new(&region);
        assert!(!mask.contains_ring(&ring_at(8.0, 8.0, 5.0)));
    }

    #[test]
    fn test_fully_outside_ring() {
        let region = region_10x10();
        let mask = RegionMask::new(&region);
        assert!(!mask.contains_ring(&ring_at(20.0, 20.0, 3.0)));
    }

    #[test]
    fn test_ring_inside_hole_is_outside() {
        let region = region_with_hole();
        let mask = RegionMask::new(&region);
        assert!(!mask.contains_ring(&ring_at(4.5, 4.5, 1.0)));
    }

    #[test]
    fn test_ring_beside_hole_is_inside() {
        let region = region_with_hole();
        let mask = RegionMask::new(&region);
        assert!(mask.contains_ring(&ring_at(1.0, 1.0, 2.0)));
    }

    #[test]
    fn test_ring_enclosing_hole_is_outside() {
        let region = region_with_hole();
        let mask = RegionMask::new(&region);
        // Ring surrounds the hole entirely; part of its interior is cut out
        assert!(!mask.contains_ring(&ring_at(3.0, 3.0, 4.0)));
    }

    #[test]
    fn test_concave_region_edge_crossing() {
        // U-shaped region; a ring spanning the notch has all vertices
        // inside but crosses the boundary
        let region = Region::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(6.0, 10.0),
                Point2::new(6.0, 4.0),
                Point2::new(4.0, 4.0),
                Point2::new(4.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            [],
        )
        .unwrap();
        let mask = RegionMask::new(&region);

        let spanning = Ring::new(vec![
            Point3::new(2.0, 1.0, 5.0),
            Point3::new(8.0, 1.0, 5.0),
            Point3::new(8.0, 6.0, 5.0),
            Point3::new(2.0, 6.0, 5.0),
        ]);
        assert!(!mask.contains_ring(&spanning));

        let in_left_arm = Ring::new(vec![
            Point3::new(1.0, 5.0, 5.0),
            Point3::new(3.0, 5.0, 5.0),
            Point3::new(3.0, 8.0, 5.0),
            Point3::new(1.0, 8.0, 5.0),
        ]);
        assert!(mask.contains_ring(&in_left_arm));
    }

    #[test]
    fn test_valid_ring() {
        assert!(ring_is_valid(&ring_at(0.0, 0.0, 5.0)));
    }

    #[test]
    fn test_closed_ring_is_valid() {
        let mut points = ring_at(0.0, 0.0, 5.0).points().to_vec();
        points.push(points[0]);
        assert!(ring_is_valid(&Ring::new(points)));
    }

    #[test]
    fn test_self_intersecting_ring_is_invalid() {
        // Bow tie
        let ring = Ring::new(vec![
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(10.0, 10.0, 5.0),
            Point3::new(10.0, 0.0, 5.0),
            Point3::new(0.0, 10.0, 5.0),
        ]);
        assert!(!ring_is_valid(&ring));
    }

    #[test]
    fn test_zero_area_ring_is_invalid() {
        let ring = Ring::new(vec![
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(5.0, 5.0, 5.0),
            Point3::new(10.0, 10.0, 5.0),
        ]);
        assert!(!ring_is_valid(&ring));
    }

    #[test]
    fn test_two_point_ring_is_invalid() {
        let ring = Ring::new(vec![
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(5.0, 5.0, 5.0),
        ]);
        assert!(!ring_is_valid(&ring));
    }

    #[test]
    fn test_signed_area_xy() {
        let ccw = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        assert_eq!(signed_area_xy(&ccw), 16.0);
    }
}
