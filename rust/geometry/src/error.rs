// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during face construction and masking
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate coordinate ({x}, {y}, {z}): magnitude check failed")]
    DegenerateCoordinate { x: f64, y: f64, z: f64 },

    #[error("Invalid face: {0}")]
    InvalidFace(String),

    #[error("Core model error: {0}")]
    CoreError(#[from] roofline_core::Error),
}
