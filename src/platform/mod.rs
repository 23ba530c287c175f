//! Platform, encoding and language identifiers used by the `cmap` and `name`
//! tables.
//!
//! Every encoding and language id is only meaningful together with the
//! platform it was declared under, so every lookup in here is keyed by the
//! platform as well. For the raw values, see the
//! [OpenType name table](https://learn.microsoft.com/en-us/typography/opentype/spec/name#platform-ids).

pub mod mac;
pub mod windows;

pub use mac::{MacEncodingId, MacLanguageId, resolve_mac_language_name};
pub use windows::{
    WindowsEncodingId, WindowsLanguageId, WindowsLocaleId, resolve_windows_language_name,
    resolve_windows_locale_name,
};

/// Represents the platform identifier
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum PlatformId {
    Unicode = 0,
    /// Deprecated by Apple, still found in older fonts.
    Mac = 1,
    /// Deprecated.
    Iso = 2,
    Windows = 3,
    /// Only used by the `name` table.
    Custom = 4,
}

impl PlatformId {
    /// Returns the platform for a raw id, or `None` for values the
    /// OpenType specification never assigned.
    pub fn from_raw(raw: u16) -> Option<Self> {
        Some(match raw {
            0 => Self::Unicode,
            1 => Self::Mac,
            2 => Self::Iso,
            3 => Self::Windows,
            4 => Self::Custom,
            _ => return None,
        })
    }

    pub fn to_raw(self) -> u16 {
        self as u16
    }
}

/// Encoding ids of the Unicode platform.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnicodeEncodingId(pub u16);

impl UnicodeEncodingId {
    pub const V1_0: Self = Self(0);
    pub const V1_1: Self = Self(1);
    /// Deprecated.
    pub const ISO: Self = Self(2);
    /// Unicode 2.0 and onwards, BMP only.
    pub const V2_0: Self = Self(3);
    /// Unicode 2.0 and onwards, full repertoire.
    pub const V3_1: Self = Self(4);
    /// Unicode variation sequences (format 14 subtables).
    pub const VARIATION: Self = Self(5);
    /// Unicode full repertoire (format 13 subtables).
    pub const FULL: Self = Self(6);
}

/// The semantic meaning of a (platform, encoding) pair.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    UnicodeBmp,
    UnicodeFull,
    UnicodeVariationSelector,
    WindowsSymbol,
    WindowsUcs2,
    WindowsUcs4,
    WindowsShiftJis,
    WindowsGbk,
    WindowsBig5,
    WindowsWansung,
    WindowsJohab,
    /// One of the 8-bit QuickDraw script encodings, carrying its encoding id.
    MacLegacy(MacEncodingId),
    /// Not a combination we know how to interpret. Records with this kind
    /// are skipped, never treated as a parse failure.
    Unknown,
}

impl EncodingKind {
    /// Returns true for the kinds whose character codes are Unicode scalars.
    pub fn is_unicode(self) -> bool {
        matches!(
            self,
            Self::UnicodeBmp | Self::UnicodeFull | Self::WindowsUcs2 | Self::WindowsUcs4
        )
    }

    /// Returns the decoder to apply to `name` strings stored under this
    /// encoding.
    pub fn decoder(self) -> TextDecoder {
        match self {
            Self::UnicodeBmp
            | Self::UnicodeFull
            | Self::WindowsSymbol
            | Self::WindowsUcs2
            | Self::WindowsUcs4 => TextDecoder::Utf16Be,
            Self::MacLegacy(encoding) => TextDecoder::MacLegacy(encoding),
            // Variation data has no string form and the CJK code pages are
            // left to whoever handles those encodings.
            _ => TextDecoder::Unsupported,
        }
    }
}

/// The text decoder a `name` string must be run through.
///
/// Decoding itself happens elsewhere; this only tells the caller which
/// routine to pick.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDecoder {
    Utf16Be,
    MacLegacy(MacEncodingId),
    Unsupported,
}

/// Classifies a raw (platform, encoding) pair.
///
/// This is total: anything outside the known combinations is
/// [`EncodingKind::Unknown`].
///
/// ```
/// use vero_platform::{EncodingKind, classify_encoding};
///
/// assert_eq!(classify_encoding(3, 10), EncodingKind::WindowsUcs4);
/// assert_eq!(classify_encoding(3, 7), EncodingKind::Unknown);
/// assert_eq!(classify_encoding(9, 0), EncodingKind::Unknown);
/// ```
pub fn classify_encoding(platform_id: u16, encoding_id: u16) -> EncodingKind {
    let Some(platform) = PlatformId::from_raw(platform_id) else {
        return EncodingKind::Unknown;
    };

    match platform {
        PlatformId::Unicode => match UnicodeEncodingId(encoding_id) {
            UnicodeEncodingId::V1_0
            | UnicodeEncodingId::V1_1
            | UnicodeEncodingId::ISO
            | UnicodeEncodingId::V2_0 => EncodingKind::UnicodeBmp,
            UnicodeEncodingId::V3_1 | UnicodeEncodingId::FULL => EncodingKind::UnicodeFull,
            UnicodeEncodingId::VARIATION => EncodingKind::UnicodeVariationSelector,
            _ => EncodingKind::Unknown,
        },
        PlatformId::Mac => {
            let encoding = MacEncodingId(encoding_id);
            if encoding.is_assigned() {
                EncodingKind::MacLegacy(encoding)
            } else {
                EncodingKind::Unknown
            }
        }
        PlatformId::Windows => match WindowsEncodingId(encoding_id) {
            WindowsEncodingId::SYMBOL => EncodingKind::WindowsSymbol,
            WindowsEncodingId::UCS2 => EncodingKind::WindowsUcs2,
            WindowsEncodingId::SHIFT_JIS => EncodingKind::WindowsShiftJis,
            WindowsEncodingId::SIMPLIFIED_CHINESE => EncodingKind::WindowsGbk,
            WindowsEncodingId::TRADITIONAL_CHINESE => EncodingKind::WindowsBig5,
            WindowsEncodingId::WANSUNG => EncodingKind::WindowsWansung,
            WindowsEncodingId::JOHAB => EncodingKind::WindowsJohab,
            WindowsEncodingId::UCS4 => EncodingKind::WindowsUcs4,
            _ => EncodingKind::Unknown,
        },
        // ISO encodings are deprecated and custom encodings carry no
        // character semantics.
        PlatformId::Iso | PlatformId::Custom => EncodingKind::Unknown,
    }
}

/// Returns the language tag for a `languageId` declared under `platform_id`.
///
/// Mac ids go through the Mac table and Windows ids through the locale
/// table, falling back to the bare primary language. Other platforms do not
/// carry language ids, so they resolve to an empty string.
pub fn resolve_language_name(platform_id: u16, language_id: u16) -> &'static str {
    match PlatformId::from_raw(platform_id) {
        Some(PlatformId::Mac) => resolve_mac_language_name(language_id),
        Some(PlatformId::Windows) => match resolve_windows_locale_name(language_id) {
            "" => resolve_windows_language_name(windows::primary_language(language_id)),
            tag => tag,
        },
        _ => "",
    }
}
