//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `NocError` into them
//! via `From` impls, so configuration failures propagate with `?`.

use thiserror::Error;

use crate::Coord;

/// The top-level error type for `noc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NocError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("coordinate {coord} outside {size}x{size} mesh")]
    OutsideMesh { coord: Coord, size: u32 },
}

/// Shorthand result type for all `noc-*` crates.
pub type NocResult<T> = Result<T, NocError>;
