//! Parsers for the tables whose records are tagged by platform: `cmap` and
//! `name`.

use thiserror::Error;

pub mod cmap;
pub mod name;

/// Represents the error messages which may occur when trying
/// to parse tables from raw binary buffers
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEncodingError {
    #[error("The required buffer length for this table is {0} bytes, got {1} bytes")]
    InvalidBufferLength(usize, usize),
}
