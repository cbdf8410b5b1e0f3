// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roofline Processing
//!
//! The building-extraction pipeline: masks decoded 3D building features
//! against a region of interest, builds one n-gon face per polygon ring,
//! discards wall and ground-footprint faces from the face normal, and
//! aggregates the surviving roof surfaces into per-building meshes
//! grouped by category, with derived eave and ridge heights.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roofline_core::{Point2, Region};
//! use roofline_processing::{run, RunOptions};
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
//!
//! let extraction = run(features, &region, &RunOptions::default())?;
//! if extraction.is_empty() {
//!     println!("no buildings inside the selected area");
//! }
//! for (category, buildings) in extraction.categories.iter() {
//!     println!("{}: {} buildings", category, buildings.len());
//! }
//! ```
//!
//! Per-feature faults (unsupported geometry kinds, degenerate
//! coordinates) are logged via [tracing](https://docs.rs/tracing),
//! counted in [`RunStats`] and never abort the run. Region-level faults
//! abort immediately with no partial result.

pub mod aggregate;
pub mod error;
pub mod groups;
pub mod pipeline;
pub mod records;
pub mod stats;

pub use aggregate::{aggregate, Building, RunState};
pub use error::{Error, Result};
pub use groups::CategoryGroups;
pub use pipeline::{run, run_parallel, CancelFlag, Extraction, RunOptions};
pub use records::{BuildingRecord, FaceRecord};
pub use stats::RunStats;
