use log::{debug, trace, warn};
use thiserror::Error;

use crate::{
    VeroPlatformError,
    buffer::VeroBufReader,
    platform::{EncodingKind, MacEncodingId, PlatformId, classify_encoding},
};

use super::TableEncodingError;

/// Size of the cmap header: version + numTables
const HEADER_LEN: usize = 4;
/// Size of one encoding record: platformID + encodingID + subtableOffset
const ENCODING_RECORD_LEN: usize = 8;

/// Raised when a font carries no subtable the selector can use.
///
/// This is recoverable, the font can still be used for glyph id based
/// operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("The cmap table has no usable Unicode, symbol or Mac Roman subtable")]
    NoUsableCmapSubtable,
}

/// A representation of the [cmap table](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap)
/// header, which lists the encoding subtables available in the font.
#[derive(Debug)]
pub struct Cmap {
    /// The version of the cmap table
    /// it's almost guarenteed to be set to zero
    version: u16,

    /// The encoding records, in declaration order
    records: Vec<CmapSubtableDescriptor>,
}

impl Cmap {
    /// Parses the cmap header and its encoding records from the raw table.
    ///
    /// Records whose subtable offset points outside of `bytes` are dropped,
    /// the remaining records keep their original index.
    ///
    /// # Errors
    ///
    /// Returns a [`TableEncodingError::InvalidBufferLength`] if the table is
    /// too short for the number of records it declares.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VeroPlatformError> {
        if bytes.len() < HEADER_LEN {
            return Err(TableEncodingError::InvalidBufferLength(HEADER_LEN, bytes.len()).into());
        }

        let mut reader = VeroBufReader::from_bytes(bytes);
        let version = reader.read_u16()?;
        let num_tables = reader.read_u16()?;

        let required = HEADER_LEN + usize::from(num_tables) * ENCODING_RECORD_LEN;
        if bytes.len() < required {
            return Err(TableEncodingError::InvalidBufferLength(required, bytes.len()).into());
        }

        if version != 0 {
            warn!("cmap: unexpected table version {version}");
        }

        let mut records = Vec::with_capacity(usize::from(num_tables));
        for index in 0..num_tables {
            let record = CmapSubtableDescriptor {
                index,
                platform_id: reader.read_u16()?,
                encoding_id: reader.read_u16()?,
                offset: reader.read_u32()?,
            };

            if record.offset as usize >= bytes.len() {
                warn!(
                    "cmap: record {index} ({}, {}) points past the end of the table, skipping",
                    record.platform_id, record.encoding_id
                );
                continue;
            }

            records.push(record);
        }

        Ok(Self { version, records })
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// Returns the encoding records in declaration order
    pub fn records(&self) -> &[CmapSubtableDescriptor] {
        &self.records
    }

    /// Picks the subtables to use, see [`select_cmap_subtable`]
    pub fn select(&self) -> Result<CmapSelection, SelectionError> {
        select_cmap_subtable(&self.records)
    }
}

/// A cmap encoding record: which subtable lives where, and under which
/// platform/encoding it was declared.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CmapSubtableDescriptor {
    /// Position of the record in the table, used to break ties
    pub index: u16,

    /// The platform identifier
    pub platform_id: u16,

    /// The platform specific encoding identifier
    pub encoding_id: u16,

    /// The offset of the mapping table, from the start of the cmap table
    pub offset: u32,
}

impl CmapSubtableDescriptor {
    pub fn platform(&self) -> Option<PlatformId> {
        PlatformId::from_raw(self.platform_id)
    }

    pub fn kind(&self) -> EncodingKind {
        classify_encoding(self.platform_id, self.encoding_id)
    }
}

/// The outcome of choosing among the subtables of a cmap table.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmapSelection {
    primary: Option<CmapSubtableDescriptor>,
    symbol: Option<CmapSubtableDescriptor>,
    variations: Option<CmapSubtableDescriptor>,
}

impl CmapSelection {
    /// The subtable used for Unicode to glyph queries.
    ///
    /// `None` when the font only carries a symbol subtable.
    pub fn primary(&self) -> Option<&CmapSubtableDescriptor> {
        self.primary.as_ref()
    }

    /// The (Windows, Symbol) subtable, for callers that need symbol font
    /// behavior.
    pub fn symbol(&self) -> Option<&CmapSubtableDescriptor> {
        self.symbol.as_ref()
    }

    /// The Unicode variation sequences subtable.
    pub fn variations(&self) -> Option<&CmapSubtableDescriptor> {
        self.variations.as_ref()
    }

    /// Returns true if a symbol subtable exists but nothing could be used
    /// for Unicode text.
    pub fn is_symbol_only(&self) -> bool {
        self.primary.is_none() && self.symbol.is_some()
    }
}

/// Priority of a subtable as the primary mapping, lower wins.
///
/// Symbol and variation subtables never qualify and are tracked on the side.
fn primary_rank(descriptor: &CmapSubtableDescriptor) -> Option<u8> {
    match descriptor.kind() {
        EncodingKind::WindowsUcs4 => Some(0),
        // (Unicode, 4) and (Unicode, 6) both land here
        EncodingKind::UnicodeFull => Some(1),
        EncodingKind::WindowsUcs2 => Some(2),
        EncodingKind::UnicodeBmp => Some(3),
        EncodingKind::MacLegacy(MacEncodingId::ROMAN) => Some(4),
        _ => None,
    }
}

/// Picks the subtable to use for Unicode text out of the encoding records of
/// a cmap table.
///
/// In order of preference: (Windows, UCS-4), (Unicode, full repertoire),
/// (Windows, UCS-2), any other Unicode platform encoding, then (Mac, Roman).
/// When several records share a priority the one declared first wins. The
/// (Windows, Symbol) subtable is never picked as the primary mapping, it is
/// returned separately through [`CmapSelection::symbol`].
///
/// # Errors
///
/// Returns [`SelectionError::NoUsableCmapSubtable`] if neither a primary
/// nor a symbol subtable exists.
///
/// ```
/// use vero_platform::{CmapSubtableDescriptor, select_cmap_subtable};
///
/// let records = [
///     CmapSubtableDescriptor { index: 0, platform_id: 3, encoding_id: 1, offset: 20 },
///     CmapSubtableDescriptor { index: 1, platform_id: 3, encoding_id: 10, offset: 80 },
/// ];
/// let selection = select_cmap_subtable(&records).unwrap();
/// assert_eq!(selection.primary().unwrap().encoding_id, 10);
/// ```
pub fn select_cmap_subtable(
    descriptors: &[CmapSubtableDescriptor],
) -> Result<CmapSelection, SelectionError> {
    let mut selection = CmapSelection::default();
    let mut best_rank = u8::MAX;

    for descriptor in descriptors {
        match descriptor.kind() {
            EncodingKind::WindowsSymbol => {
                selection.symbol.get_or_insert(*descriptor);
                continue;
            }
            EncodingKind::UnicodeVariationSelector => {
                selection.variations.get_or_insert(*descriptor);
                continue;
            }
            _ => {}
        }

        match primary_rank(descriptor) {
            Some(rank) if rank < best_rank => {
                best_rank = rank;
                selection.primary = Some(*descriptor);
            }
            Some(_) => {}
            None => trace!(
                "cmap: skipping record {} ({}, {})",
                descriptor.index, descriptor.platform_id, descriptor.encoding_id
            ),
        }
    }

    if selection.primary.is_none() && selection.symbol.is_none() {
        debug!(
            "cmap: none of the {} records is usable",
            descriptors.len()
        );
        return Err(SelectionError::NoUsableCmapSubtable);
    }

    debug!(
        "cmap: selected primary {:?}, symbol {:?}",
        selection.primary.map(|d| d.index),
        selection.symbol.map(|d| d.index)
    );

    Ok(selection)
}
