// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input feature model: rings, polygons, the geometry union, attributes
//!
//! Features arrive already decoded and already in the target planar
//! coordinate system. Each feature contributes to at most one building.

use nalgebra::Point3;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// A closed polygon boundary as an ordered 3D point sequence.
///
/// Source data does not guarantee that the first point repeats as the
/// last; consumers must accept both forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point3<f64>>,
}

impl Ring {
    /// Create a ring from an ordered point sequence
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// The ordered boundary points
    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Number of stored points, including a duplicated closing point if present
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if the last point repeats the first (an explicitly closed ring)
    #[inline]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => first == last,
            _ => false,
        }
    }

    /// Minimum elevation over the ring's points, `None` for an empty ring
    #[inline]
    pub fn min_elevation(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.z)
            .fold(None, |acc, z| Some(acc.map_or(z, |a: f64| a.min(z))))
    }
}

/// A polygon: exterior boundary plus interior boundaries (holes).
///
/// Interiors are carried by the model for completeness but roof
/// extraction reads only the exterior; holes are not meaningful for roof
/// surfaces in the source data.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Exterior boundary
    pub exterior: Ring,
    /// Interior boundaries (holes)
    pub interiors: SmallVec<[Ring; 2]>,
}

impl Polygon {
    /// Polygon with no holes
    pub fn new(exterior: Ring) -> Self {
        Self {
            exterior,
            interiors: SmallVec::new(),
        }
    }

    /// Polygon with holes
    pub fn with_interiors(exterior: Ring, interiors: impl IntoIterator<Item = Ring>) -> Self {
        Self {
            exterior,
            interiors: interiors.into_iter().collect(),
        }
    }
}

/// Feature geometry, a closed set of kinds.
///
/// The set of supported kinds is fixed; matching is exhaustive so a new
/// kind is a compile-time-visible gap. Anything else the source yields is
/// carried as [`Geometry::Unsupported`] with its kind name kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
    Collection(Vec<Geometry>),
    Unsupported(String),
}

impl Geometry {
    /// Flatten this geometry into its exterior rings, in source order.
    ///
    /// A polygon yields its exterior; a multi-polygon yields one ring per
    /// member; a collection concatenates the rings of its polygonal
    /// members recursively, skipping members of any other kind. Only a
    /// top-level unsupported kind is an error; the caller then skips the
    /// whole feature.
    pub fn rings(&self) -> Result<Vec<&Ring>> {
        if let Geometry::Unsupported(kind) = self {
            return Err(Error::UnsupportedGeometry { kind: kind.clone() });
        }
        let mut rings = Vec::new();
        self.collect_rings(&mut rings);
        Ok(rings)
    }

    fn collect_rings<'a>(&'a self, rings: &mut Vec<&'a Ring>) {
        match self {
            Geometry::Polygon(polygon) => rings.push(&polygon.exterior),
            Geometry::MultiPolygon(polygons) => {
                rings.extend(polygons.iter().map(|p| &p.exterior));
            }
            Geometry::Collection(members) => {
                for member in members {
                    member.collect_rings(rings);
                }
            }
            // Non-polygonal collection members carry no rings
            Geometry::Unsupported(_) => {}
        }
    }
}

/// One input record from the feature source
#[derive(Debug, Clone)]
pub struct Feature {
    pub geometry: Geometry,
    /// Category label, e.g. the source layer name
    pub category: String,
    /// Source identifier; a synthetic id is assigned downstream when absent
    pub identifier: Option<String>,
    /// Nominal height attribute from the source, meters
    pub nominal_height: Option<f64>,
}

impl Feature {
    /// Feature with only the required attributes
    pub fn new(geometry: Geometry, category: impl Into<String>) -> Self {
        Self {
            geometry,
            category: category.into(),
            identifier: None,
            nominal_height: None,
        }
    }

    /// Attach a source identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Attach a nominal height
    pub fn with_nominal_height(mut self, height: f64) -> Self {
        self.nominal_height = Some(height);
        self
    }
}
