use buffer::VeroBufReaderError;
use tables::{TableEncodingError, cmap::SelectionError, name::NameError};
use thiserror::Error;

pub mod buffer;
pub mod platform;
pub mod tables;

pub use platform::{
    EncodingKind, PlatformId, TextDecoder, classify_encoding, resolve_language_name,
    resolve_mac_language_name, resolve_windows_language_name, resolve_windows_locale_name,
};
pub use tables::cmap::{Cmap, CmapSelection, CmapSubtableDescriptor, select_cmap_subtable};
pub use tables::name::{NameId, NameRecordDescriptor, NameTable, ResolvedName, resolve_name};

#[derive(Debug, Error)]
pub enum VeroPlatformError {
    #[error(transparent)]
    TableEncodingError(#[from] TableEncodingError),

    #[error(transparent)]
    VeroBufReaderError(#[from] VeroBufReaderError),

    #[error(transparent)]
    SelectionError(#[from] SelectionError),

    #[error(transparent)]
    NameError(#[from] NameError),
}
