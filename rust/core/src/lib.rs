// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roofline Core Model
//!
//! Data model shared across the roofline workspace: input features with
//! their polygon rings and attributes, the region of interest, and 2D
//! bounds for the cheap first-stage rejection test.
//!
//! Features arrive from an external source as already-decoded records in
//! the target planar coordinate system; this crate performs no coordinate
//! transformation and no file-format parsing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roofline_core::{Feature, Geometry, Point2, Point3, Polygon, Region, Ring};
//!
//! let ring = Ring::new(vec![
//!     Point3::new(2679012.0, 1247892.0, 432.0),
//!     Point3::new(2679020.0, 1247892.0, 432.0),
//!     Point3::new(2679016.0, 1247898.0, 438.5),
//! ]);
//! let feature = Feature::new(Geometry::Polygon(Polygon::new(ring)), "Building")
//!     .with_identifier("2DC6E5A1");
//!
//! let region = Region::new(
//!     vec![
//!         Point2::new(2678000.0, 1247000.0),
//!         Point2::new(2680000.0, 1247000.0),
//!         Point2::new(2680000.0, 1249000.0),
//!         Point2::new(2678000.0, 1249000.0),
//!     ],
//!     [],
//! )?;
//! ```

pub mod bounds;
pub mod error;
pub mod feature;
pub mod region;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use feature::{Feature, Geometry, Polygon, Ring};
pub use region::{signed_area, Region};
