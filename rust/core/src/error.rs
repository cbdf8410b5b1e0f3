// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for model validation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating input features and the region of interest
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported geometry kind: {kind}")]
    UnsupportedGeometry { kind: String },

    #[error("Region of interest is empty: {0}")]
    EmptyRegion(String),

    #[error("Region of interest is invalid: {0}")]
    InvalidRegion(String),
}
