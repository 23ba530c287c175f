use std::{
    fmt,
    io::{Read, Seek},
};

use log::{debug, trace, warn};
use thiserror::Error;

use crate::{
    VeroPlatformError,
    buffer::VeroBufReader,
    platform::{
        EncodingKind, MacEncodingId, PlatformId, TextDecoder, classify_encoding,
        resolve_language_name,
    },
};

use super::TableEncodingError;

/// Size of the name header: version + count + storageOffset
const HEADER_LEN: usize = 6;
/// Size of one name record
const NAME_RECORD_LEN: usize = 12;
/// Size of one language tag record: length + offset
const LANG_TAG_RECORD_LEN: usize = 4;
/// Language ids at or above this refer to a language tag record in
/// version 1 tables
const BASE_LANGUAGE_TAG_ID: u16 = 0x8000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// No decodable record carries the requested name id. Falling back to
    /// another id is up to the caller.
    #[error("No usable name record for {0:?}")]
    NameNotFound(NameId),
}

/// Identifier of a string in the name table.
///
/// Ids 0 to 25 are predefined, see
/// <https://learn.microsoft.com/en-us/typography/opentype/spec/name#name-ids>.
/// Higher ids are referenced from other tables (`fvar`, `STAT`, `CPAL`...).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NameId(pub u16);

impl NameId {
    pub const COPYRIGHT_NOTICE: Self = Self(0);
    pub const FAMILY_NAME: Self = Self(1);
    pub const SUBFAMILY_NAME: Self = Self(2);
    pub const UNIQUE_ID: Self = Self(3);
    pub const FULL_NAME: Self = Self(4);
    pub const VERSION_STRING: Self = Self(5);
    pub const POSTSCRIPT_NAME: Self = Self(6);
    pub const TRADEMARK: Self = Self(7);
    pub const MANUFACTURER: Self = Self(8);
    pub const DESIGNER: Self = Self(9);
    pub const DESCRIPTION: Self = Self(10);
    pub const VENDOR_URL: Self = Self(11);
    pub const DESIGNER_URL: Self = Self(12);
    pub const LICENSE_DESCRIPTION: Self = Self(13);
    pub const LICENSE_URL: Self = Self(14);
    // 15 is reserved
    pub const TYPOGRAPHIC_FAMILY_NAME: Self = Self(16);
    pub const TYPOGRAPHIC_SUBFAMILY_NAME: Self = Self(17);
    /// Mac only
    pub const COMPATIBLE_FULL_NAME: Self = Self(18);
    pub const SAMPLE_TEXT: Self = Self(19);
    pub const POSTSCRIPT_CID_NAME: Self = Self(20);
    pub const WWS_FAMILY_NAME: Self = Self(21);
    pub const WWS_SUBFAMILY_NAME: Self = Self(22);
    pub const LIGHT_BACKGROUND_PALETTE: Self = Self(23);
    pub const DARK_BACKGROUND_PALETTE: Self = Self(24);
    pub const VARIATIONS_POSTSCRIPT_NAME_PREFIX: Self = Self(25);
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Self::COPYRIGHT_NOTICE => "COPYRIGHT_NOTICE",
            Self::FAMILY_NAME => "FAMILY_NAME",
            Self::SUBFAMILY_NAME => "SUBFAMILY_NAME",
            Self::UNIQUE_ID => "UNIQUE_ID",
            Self::FULL_NAME => "FULL_NAME",
            Self::VERSION_STRING => "VERSION_STRING",
            Self::POSTSCRIPT_NAME => "POSTSCRIPT_NAME",
            Self::TRADEMARK => "TRADEMARK",
            Self::MANUFACTURER => "MANUFACTURER",
            Self::DESIGNER => "DESIGNER",
            Self::DESCRIPTION => "DESCRIPTION",
            Self::VENDOR_URL => "VENDOR_URL",
            Self::DESIGNER_URL => "DESIGNER_URL",
            Self::LICENSE_DESCRIPTION => "LICENSE_DESCRIPTION",
            Self::LICENSE_URL => "LICENSE_URL",
            Self::TYPOGRAPHIC_FAMILY_NAME => "TYPOGRAPHIC_FAMILY_NAME",
            Self::TYPOGRAPHIC_SUBFAMILY_NAME => "TYPOGRAPHIC_SUBFAMILY_NAME",
            Self::COMPATIBLE_FULL_NAME => "COMPATIBLE_FULL_NAME",
            Self::SAMPLE_TEXT => "SAMPLE_TEXT",
            Self::POSTSCRIPT_CID_NAME => "POSTSCRIPT_CID_NAME",
            Self::WWS_FAMILY_NAME => "WWS_FAMILY_NAME",
            Self::WWS_SUBFAMILY_NAME => "WWS_SUBFAMILY_NAME",
            Self::LIGHT_BACKGROUND_PALETTE => "LIGHT_BACKGROUND_PALETTE",
            Self::DARK_BACKGROUND_PALETTE => "DARK_BACKGROUND_PALETTE",
            Self::VARIATIONS_POSTSCRIPT_NAME_PREFIX => "VARIATIONS_POSTSCRIPT_NAME_PREFIX",
            _ => return write!(f, "NameId({})", self.0),
        };
        f.write_str(name)
    }
}

/// Represents the table format
/// the name table can have 2 formats
/// 0 => platform specific language ids only
/// 1 => also carries language tag strings
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFormat {
    Format0,
    Format1,
    Unknown(u16),
}

impl From<u16> for NameFormat {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::Format0,
            1 => Self::Format1,
            _ => Self::Unknown(value),
        }
    }
}

/// Represents a name record
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameRecordDescriptor {
    /// Platform identifier code.
    pub platform_id: u16,

    /// Platform-specific encoding identifier
    pub encoding_id: u16,

    /// Language identifier, only meaningful together with `platform_id`
    pub language_id: u16,

    /// Name identifier
    pub name_id: NameId,

    /// Name string length in bytes
    pub length: u16,

    /// Name string offset in bytes from the start of string storage
    pub offset: u16,
}

impl NameRecordDescriptor {
    fn from_reader<B: Read + Seek>(
        reader: &mut VeroBufReader<B>,
    ) -> Result<Self, VeroPlatformError> {
        Ok(Self {
            platform_id: reader.read_u16()?,
            encoding_id: reader.read_u16()?,
            language_id: reader.read_u16()?,
            name_id: NameId(reader.read_u16()?),
            length: reader.read_u16()?,
            offset: reader.read_u16()?,
        })
    }

    pub fn platform(&self) -> Option<PlatformId> {
        PlatformId::from_raw(self.platform_id)
    }

    pub fn kind(&self) -> EncodingKind {
        classify_encoding(self.platform_id, self.encoding_id)
    }

    pub fn decoder(&self) -> TextDecoder {
        self.kind().decoder()
    }

    /// Returns the BCP-47 tag of this record's language, or an empty string
    /// when it has none.
    ///
    /// `lang_tags` are the language tags of a version 1 table, indexed by
    /// `language_id - 0x8000`.
    pub fn language<'t>(&self, lang_tags: &'t [String]) -> &'t str {
        if self.language_id >= BASE_LANGUAGE_TAG_ID {
            let index = usize::from(self.language_id - BASE_LANGUAGE_TAG_ID);
            return lang_tags.get(index).map(String::as_str).unwrap_or_default();
        }
        resolve_language_name(self.platform_id, self.language_id)
    }
}

/// Represents the [name table](https://learn.microsoft.com/en-us/typography/opentype/spec/name),
/// borrowing its string storage from the table bytes.
#[derive(Debug)]
pub struct NameTable<'a> {
    /// The format of the name table
    format: NameFormat,

    /// The name records, in table order
    records: Vec<NameRecordDescriptor>,

    /// Decoded language tags of a format 1 table
    lang_tags: Vec<String>,

    /// The string storage area. Not a `String`, there's no guarantee for
    /// it to be valid in any single encoding.
    storage: &'a [u8],
}

impl<'a> NameTable<'a> {
    /// Parses the name table header, its records and, for format 1 tables,
    /// its language tags.
    ///
    /// # Errors
    ///
    /// Returns a [`TableEncodingError::InvalidBufferLength`] if the table is
    /// too short for the records it declares.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, VeroPlatformError> {
        if bytes.len() < HEADER_LEN {
            return Err(TableEncodingError::InvalidBufferLength(HEADER_LEN, bytes.len()).into());
        }

        let mut reader = VeroBufReader::from_bytes(bytes);
        let format = NameFormat::from(reader.read_u16()?);
        let count = reader.read_u16()?;
        let storage_offset = reader.read_u16()?;

        // well, we know that a name record is 12 bytes, so the record
        // array ends at header + (count * 12)
        let mut required = HEADER_LEN + usize::from(count) * NAME_RECORD_LEN;
        if bytes.len() < required {
            return Err(TableEncodingError::InvalidBufferLength(required, bytes.len()).into());
        }

        let records = (0..count)
            .map(|_| NameRecordDescriptor::from_reader(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;

        let storage = match bytes.get(usize::from(storage_offset)..) {
            Some(storage) => storage,
            None => {
                warn!("name: storage offset {storage_offset} is past the end of the table");
                &[]
            }
        };

        let mut lang_tags = Vec::new();
        if format == NameFormat::Format1 {
            // langTagCount follows the record array
            reader.seek_to(required as u64)?;
            required += 2;
            if bytes.len() < required {
                return Err(TableEncodingError::InvalidBufferLength(required, bytes.len()).into());
            }
            let lang_tag_count = reader.read_u16()?;

            required += usize::from(lang_tag_count) * LANG_TAG_RECORD_LEN;
            if bytes.len() < required {
                return Err(TableEncodingError::InvalidBufferLength(required, bytes.len()).into());
            }

            for _ in 0..lang_tag_count {
                let length = reader.read_u16()?;
                let offset = reader.read_u16()?;
                lang_tags.push(decode_lang_tag(storage, offset, length));
            }
        }

        Ok(Self {
            format,
            records,
            lang_tags,
            storage,
        })
    }

    pub fn format(&self) -> NameFormat {
        self.format
    }

    /// Returns the name records in table order
    pub fn records(&self) -> &[NameRecordDescriptor] {
        &self.records
    }

    /// Returns the language tags of a format 1 table
    pub fn lang_tags(&self) -> &[String] {
        &self.lang_tags
    }

    /// Returns the raw, still encoded bytes of a record, or `None` if the
    /// record points outside of string storage.
    pub fn string_bytes(&self, record: &NameRecordDescriptor) -> Option<&'a [u8]> {
        let start = usize::from(record.offset);
        let end = start + usize::from(record.length);
        let bytes = self.storage.get(start..end);
        if bytes.is_none() {
            warn!(
                "name: record {:?} ({}, {}, {:#06x}) points outside of string storage",
                record.name_id, record.platform_id, record.encoding_id, record.language_id
            );
        }
        bytes
    }

    /// Finds the best record for `name_id`, see [`resolve_name`]
    pub fn resolve(
        &self,
        name_id: NameId,
        preferred_languages: &[&str],
    ) -> Result<ResolvedName<'_>, NameError> {
        resolve_name(&self.records, &self.lang_tags, name_id, preferred_languages)
    }
}

/// Language tags are always UTF-16BE. Anything that does not decode to
/// ASCII is not a valid BCP-47 tag and becomes an empty string.
fn decode_lang_tag(storage: &[u8], offset: u16, length: u16) -> String {
    let start = usize::from(offset);
    let Some(bytes) = storage.get(start..start + usize::from(length)) else {
        warn!("name: language tag at {offset} points outside of string storage");
        return String::new();
    };

    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    match char::decode_utf16(units).collect::<Result<String, _>>() {
        Ok(tag) if tag.is_ascii() => tag,
        _ => {
            warn!("name: language tag at {offset} is not ASCII");
            String::new()
        }
    }
}

/// The record picked for a name id, with what is needed to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedName<'t> {
    pub record: NameRecordDescriptor,
    pub decoder: TextDecoder,
    /// BCP-47 tag of the record, empty when it has none
    pub language: &'t str,
}

/// Platform preference of a record, lower wins. `None` means the record
/// cannot be decoded and is skipped.
fn platform_tier(kind: EncodingKind) -> Option<u8> {
    match kind {
        EncodingKind::WindowsUcs2 => Some(0),
        EncodingKind::WindowsSymbol | EncodingKind::WindowsUcs4 => Some(1),
        EncodingKind::UnicodeBmp | EncodingKind::UnicodeFull => Some(2),
        EncodingKind::MacLegacy(MacEncodingId::ROMAN) => Some(3),
        EncodingKind::MacLegacy(_) => Some(4),
        _ => None,
    }
}

/// How well `tag` matches `requested`, lower is better.
///
/// 0 is an exact match, 1 is one tag being a more specific form of the
/// other ("en" and "en-US") and 2 is a shared primary language ("en-GB" and
/// "en-US"). Comparison is ASCII case insensitive.
fn language_match(tag: &str, requested: &str) -> Option<u8> {
    if tag.is_empty() || requested.is_empty() {
        return None;
    }
    if tag.eq_ignore_ascii_case(requested) {
        return Some(0);
    }

    let is_prefix = |long: &str, short: &str| {
        long.len() > short.len()
            && long.as_bytes()[short.len()] == b'-'
            && long[..short.len()].eq_ignore_ascii_case(short)
    };
    if is_prefix(tag, requested) || is_prefix(requested, tag) {
        return Some(1);
    }

    fn primary(s: &str) -> &str {
        s.split('-').next().unwrap_or_default()
    }
    let (tag_primary, requested_primary) = (primary(tag), primary(requested));
    if !tag_primary.is_empty() && tag_primary.eq_ignore_ascii_case(requested_primary) {
        return Some(2);
    }

    None
}

/// Ranks a record's language against the caller's ordered preferences.
/// Earlier preferences always beat later ones.
fn language_rank(tag: &str, preferred_languages: &[&str]) -> Option<usize> {
    preferred_languages
        .iter()
        .enumerate()
        .find_map(|(i, requested)| language_match(tag, requested).map(|m| i * 3 + usize::from(m)))
}

/// Picks the record to use for `name_id` and the decoder its bytes need.
///
/// Records are ranked by platform first: Windows UCS-2, other Windows
/// Unicode encodings, the Unicode platform, Mac Roman and finally other Mac
/// encodings. Within a platform a record in one of `preferred_languages`
/// beats one that is not, earlier preferences beat later ones, and an exact
/// tag match beats a looser one. Remaining ties keep table order.
///
/// # Errors
///
/// Returns [`NameError::NameNotFound`] if no decodable record carries
/// `name_id`.
///
/// ```
/// use vero_platform::{NameId, NameRecordDescriptor, TextDecoder, resolve_name};
///
/// let records = [
///     NameRecordDescriptor {
///         platform_id: 1, encoding_id: 0, language_id: 0,
///         name_id: NameId::FAMILY_NAME, length: 4, offset: 0,
///     },
///     NameRecordDescriptor {
///         platform_id: 3, encoding_id: 1, language_id: 0x0409,
///         name_id: NameId::FAMILY_NAME, length: 8, offset: 4,
///     },
/// ];
/// let resolved = resolve_name(&records, &[], NameId::FAMILY_NAME, &["en"]).unwrap();
/// assert_eq!(resolved.language, "en-US");
/// assert_eq!(resolved.decoder, TextDecoder::Utf16Be);
/// ```
pub fn resolve_name<'t>(
    records: &[NameRecordDescriptor],
    lang_tags: &'t [String],
    name_id: NameId,
    preferred_languages: &[&str],
) -> Result<ResolvedName<'t>, NameError> {
    let mut best: Option<((u8, usize), ResolvedName<'t>)> = None;

    for record in records.iter().filter(|record| record.name_id == name_id) {
        let kind = record.kind();
        let Some(tier) = platform_tier(kind) else {
            trace!(
                "name: skipping {:?} record ({}, {})",
                name_id, record.platform_id, record.encoding_id
            );
            continue;
        };

        let language = record.language(lang_tags);
        let rank = (
            tier,
            language_rank(language, preferred_languages).unwrap_or(usize::MAX),
        );

        if best.as_ref().is_none_or(|(best_rank, _)| rank < *best_rank) {
            best = Some((
                rank,
                ResolvedName {
                    record: *record,
                    decoder: kind.decoder(),
                    language,
                },
            ));
        }
    }

    match best {
        Some((_, resolved)) => {
            debug!(
                "name: resolved {:?} to ({}, {}, {:?})",
                name_id, resolved.record.platform_id, resolved.record.encoding_id, resolved.language
            );
            Ok(resolved)
        }
        None => {
            debug!("name: no usable record for {name_id:?}");
            Err(NameError::NameNotFound(name_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: NameId,
    ) -> NameRecordDescriptor {
        NameRecordDescriptor {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            length: 0,
            offset: 0,
        }
    }

    fn pick(
        records: &[NameRecordDescriptor],
        name_id: NameId,
        languages: &[&str],
    ) -> (u16, u16, u16) {
        let resolved = resolve_name(records, &[], name_id, languages).unwrap();
        (
            resolved.record.platform_id,
            resolved.record.encoding_id,
            resolved.record.language_id,
        )
    }

    #[test]
    fn windows_beats_earlier_mac_record() {
        let records = [
            record(1, 0, 0, NameId::FAMILY_NAME),
            record(3, 1, 0x0409, NameId::FAMILY_NAME),
        ];
        assert_eq!(pick(&records, NameId::FAMILY_NAME, &["en"]), (3, 1, 0x0409));
    }

    #[test]
    fn matching_language_within_a_platform() {
        let records = [
            record(3, 1, 0x0407, NameId::FAMILY_NAME),
            record(3, 1, 0x040C, NameId::FAMILY_NAME),
            record(3, 1, 0x0409, NameId::FAMILY_NAME),
        ];
        assert_eq!(pick(&records, NameId::FAMILY_NAME, &["fr"]), (3, 1, 0x040C));
        assert_eq!(pick(&records, NameId::FAMILY_NAME, &["ja", "en-US"]), (3, 1, 0x0409));
        // nothing matches, first in table order
        assert_eq!(pick(&records, NameId::FAMILY_NAME, &["ja"]), (3, 1, 0x0407));
        assert_eq!(pick(&records, NameId::FAMILY_NAME, &[]), (3, 1, 0x0407));
    }

    #[test]
    fn platform_outranks_language() {
        let records = [
            record(1, 0, 1, NameId::FAMILY_NAME),
            record(0, 3, 0, NameId::FAMILY_NAME),
            record(3, 1, 0x0407, NameId::FAMILY_NAME),
        ];
        // the Mac record is French, but any Windows record wins
        assert_eq!(pick(&records, NameId::FAMILY_NAME, &["fr"]), (3, 1, 0x0407));
        assert_eq!(pick(&records[..2], NameId::FAMILY_NAME, &["fr"]), (0, 3, 0));
        assert_eq!(pick(&records[..1], NameId::FAMILY_NAME, &["fr"]), (1, 0, 1));
    }

    #[test]
    fn preference_order_and_match_quality() {
        let records = [
            record(3, 1, 0x0809, NameId::FULL_NAME), // en-GB
            record(3, 1, 0x0C0C, NameId::FULL_NAME), // fr-CA
            record(3, 1, 0x0409, NameId::FULL_NAME), // en-US
        ];
        assert_eq!(pick(&records, NameId::FULL_NAME, &["en-US"]), (3, 1, 0x0409));
        assert_eq!(pick(&records, NameId::FULL_NAME, &["en-AU"]), (3, 1, 0x0809));
        assert_eq!(pick(&records, NameId::FULL_NAME, &["fr-FR", "en-US"]), (3, 1, 0x0C0C));
        assert_eq!(pick(&records, NameId::FULL_NAME, &["EN-us"]), (3, 1, 0x0409));
    }

    #[test]
    fn mac_roman_before_other_mac_encodings() {
        let records = [
            record(1, 1, 11, NameId::FAMILY_NAME),
            record(1, 0, 0, NameId::FAMILY_NAME),
        ];
        let resolved = resolve_name(&records, &[], NameId::FAMILY_NAME, &["ja"]).unwrap();

        assert_eq!(resolved.record.encoding_id, 0);
        assert_eq!(resolved.decoder, TextDecoder::MacLegacy(MacEncodingId::ROMAN));
        assert_eq!(resolved.language, "en");
    }

    #[test]
    fn not_found() {
        let records = [
            record(3, 1, 0x0409, NameId::FAMILY_NAME),
            // undecodable
            record(3, 2, 0x0411, NameId::TYPOGRAPHIC_FAMILY_NAME),
            record(2, 1, 0, NameId::TYPOGRAPHIC_FAMILY_NAME),
        ];
        assert_eq!(
            resolve_name(&records, &[], NameId::TYPOGRAPHIC_FAMILY_NAME, &["en"]),
            Err(NameError::NameNotFound(NameId::TYPOGRAPHIC_FAMILY_NAME))
        );
        assert_eq!(
            resolve_name(&[], &[], NameId::FAMILY_NAME, &["en"]),
            Err(NameError::NameNotFound(NameId::FAMILY_NAME))
        );
    }

    #[test]
    fn language_tag_records() {
        let tags = vec![String::from("de-CH"), String::from("fr-CH")];
        let records = [
            record(3, 1, 0x8000, NameId::FAMILY_NAME),
            record(3, 1, 0x8001, NameId::FAMILY_NAME),
            record(3, 1, 0x8002, NameId::FAMILY_NAME),
        ];
        let resolved = resolve_name(&records, &tags, NameId::FAMILY_NAME, &["fr"]).unwrap();

        assert_eq!(resolved.record.language_id, 0x8001);
        assert_eq!(resolved.language, "fr-CH");
        assert_eq!(records[2].language(&tags), "");
    }

    #[test]
    fn language_matching() {
        assert_eq!(language_match("en-US", "en-US"), Some(0));
        assert_eq!(language_match("en-US", "en"), Some(1));
        assert_eq!(language_match("en", "en-US"), Some(1));
        assert_eq!(language_match("en-GB", "en-US"), Some(2));
        assert_eq!(language_match("eu-ES", "en"), None);
        assert_eq!(language_match("", "en"), None);
        assert_eq!(language_match("en", ""), None);
        // an empty primary subtag is not a language
        assert_eq!(language_match("-x", "-y"), None);
    }

    #[test]
    fn name_id_debug() {
        assert_eq!(format!("{:?}", NameId::FAMILY_NAME), "FAMILY_NAME");
        assert_eq!(format!("{:?}", NameId(256)), "NameId(256)");
    }
}
