// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for extraction runs
pub type Result<T> = std::result::Result<T, Error>;

/// Run-aborting faults.
///
/// Per-feature faults (unsupported geometry, degenerate coordinates) are
/// caught at the feature boundary, logged and counted; only region-level
/// faults surface here and they abort the run with no partial result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Region rejected: {0}")]
    Region(#[from] roofline_core::Error),

    #[error("Feature source yielded no features")]
    EmptySource,

    #[error("Run cancelled")]
    Cancelled,
}
