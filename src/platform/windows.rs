//! Identifiers of the Windows platform.
//!
//! Windows stores an LCID in the `languageId` field of `cmap` and `name`
//! records: the low 10 bits are the primary language and the upper 6 bits
//! the sub-language (usually a region). Primary languages are not unique
//! per language, Croatian, Bosnian and Serbian all share 0x1A and are told
//! apart by the sub-language only.

/// Encoding ids of the Windows platform.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowsEncodingId(pub u16);

impl WindowsEncodingId {
    pub const SYMBOL: Self = Self(0);
    /// Unicode BMP.
    pub const UCS2: Self = Self(1);
    pub const SHIFT_JIS: Self = Self(2);
    /// PRC, also known as GBK.
    pub const SIMPLIFIED_CHINESE: Self = Self(3);
    /// Big5.
    pub const TRADITIONAL_CHINESE: Self = Self(4);
    pub const WANSUNG: Self = Self(5);
    pub const JOHAB: Self = Self(6);
    // 7..=9 are reserved
    /// Unicode full repertoire.
    pub const UCS4: Self = Self(10);
}

/// Primary language of the Windows platform.
///
/// Don't confuse with [`WindowsLocaleId`], which is what `languageId`
/// fields actually store.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowsLanguageId(pub u16);

impl WindowsLanguageId {
    pub const NEUTRAL: Self = Self(0x00);
    pub const AFRIKAANS: Self = Self(0x36);
    pub const ALBANIAN: Self = Self(0x1C);
    pub const ALSATIAN: Self = Self(0x84);
    pub const AMHARIC: Self = Self(0x5E);
    pub const ARABIC: Self = Self(0x01);
    pub const ARMENIAN: Self = Self(0x2B);
    pub const ASSAMESE: Self = Self(0x4D);
    pub const AZERI: Self = Self(0x2C);
    pub const BASHKIR: Self = Self(0x6D);
    pub const BASQUE: Self = Self(0x2D);
    pub const BELARUSIAN: Self = Self(0x23);
    pub const BENGALI: Self = Self(0x45);
    pub const BOSNIAN: Self = Self(0x1A);
    pub const BRETON: Self = Self(0x7E);
    pub const BULGARIAN: Self = Self(0x02);
    pub const CATALAN: Self = Self(0x03);
    pub const CHINESE: Self = Self(0x04);
    pub const CORSICAN: Self = Self(0x83);
    pub const CROATIAN: Self = Self(0x1A);
    pub const CZECH: Self = Self(0x05);
    pub const DANISH: Self = Self(0x06);
    pub const DARI: Self = Self(0x8C);
    pub const DIVEHI: Self = Self(0x65);
    pub const DUTCH: Self = Self(0x13);
    pub const ENGLISH: Self = Self(0x09);
    pub const ESTONIAN: Self = Self(0x25);
    pub const FAROESE: Self = Self(0x38);
    pub const FILIPINO: Self = Self(0x64);
    pub const FINNISH: Self = Self(0x0B);
    pub const FRENCH: Self = Self(0x0C);
    pub const FRISIAN: Self = Self(0x62);
    pub const GALICIAN: Self = Self(0x56);
    pub const GEORGIAN: Self = Self(0x37);
    pub const GERMAN: Self = Self(0x07);
    pub const GREEK: Self = Self(0x08);
    pub const GREENLANDIC: Self = Self(0x6F);
    pub const GUJARATI: Self = Self(0x47);
    pub const HAUSA: Self = Self(0x68);
    pub const HEBREW: Self = Self(0x0D);
    pub const HINDI: Self = Self(0x39);
    pub const HUNGARIAN: Self = Self(0x0E);
    pub const ICELANDIC: Self = Self(0x0F);
    pub const IGBO: Self = Self(0x70);
    pub const INDONESIAN: Self = Self(0x21);
    pub const INUKTITUT: Self = Self(0x5D);
    pub const IRISH: Self = Self(0x3C);
    pub const ISI_XHOSA: Self = Self(0x34);
    pub const ISI_ZULU: Self = Self(0x35);
    pub const ITALIAN: Self = Self(0x10);
    pub const JAPANESE: Self = Self(0x11);
    pub const KANNADA: Self = Self(0x4B);
    pub const KAZAKH: Self = Self(0x3F);
    pub const KHMER: Self = Self(0x53);
    pub const ICHE: Self = Self(0x86);
    pub const KINYARWANDA: Self = Self(0x87);
    pub const KISWAHILI: Self = Self(0x41);
    pub const KONKANI: Self = Self(0x57);
    pub const KOREAN: Self = Self(0x12);
    pub const KYRGYZ: Self = Self(0x40);
    pub const LAO: Self = Self(0x54);
    pub const LATVIAN: Self = Self(0x26);
    pub const LITHUANIAN: Self = Self(0x27);
    pub const LOWER_SORBIAN: Self = Self(0x2E);
    pub const LUXEMBOURGISH: Self = Self(0x6E);
    pub const MACEDONIAN: Self = Self(0x2F);
    pub const MALAY: Self = Self(0x3E);
    pub const MALAYALAM: Self = Self(0x4C);
    pub const MALTESE: Self = Self(0x3A);
    pub const MAORI: Self = Self(0x81);
    pub const MAPUDUNGUN: Self = Self(0x7A);
    pub const MARATHI: Self = Self(0x4E);
    pub const MOHAWK: Self = Self(0x7C);
    pub const MONGOLIAN: Self = Self(0x50);
    pub const NEPALI: Self = Self(0x61);
    pub const NORWEGIAN: Self = Self(0x14);
    pub const OCCITAN: Self = Self(0x82);
    pub const ODIA: Self = Self(0x48);
    pub const PASHTO: Self = Self(0x63);
    pub const POLISH: Self = Self(0x15);
    pub const PORTUGUESE: Self = Self(0x16);
    pub const PUNJABI: Self = Self(0x46);
    pub const QUECHUA: Self = Self(0x6B);
    pub const ROMANIAN: Self = Self(0x18);
    pub const ROMANSH: Self = Self(0x17);
    pub const RUSSIAN: Self = Self(0x19);
    pub const SAMI: Self = Self(0x3B);
    pub const SANSKRIT: Self = Self(0x4F);
    pub const SERBIAN: Self = Self(0x1A);
    pub const SESOTHO_SA_LEBOA: Self = Self(0x6C);
    pub const SETSWANA: Self = Self(0x32);
    pub const SINHALA: Self = Self(0x5B);
    pub const SLOVAK: Self = Self(0x1B);
    pub const SLOVENIAN: Self = Self(0x24);
    pub const SPANISH: Self = Self(0x0A);
    pub const SWEDEN: Self = Self(0x1D);
    pub const SWEDISH: Self = Self(0x1D);
    pub const SYRIAC: Self = Self(0x5A);
    pub const TAJIK: Self = Self(0x28);
    pub const TAMAZIGHT: Self = Self(0x5F);
    pub const TAMIL: Self = Self(0x49);
    pub const TATAR: Self = Self(0x44);
    pub const TELUGU: Self = Self(0x4A);
    pub const THAI: Self = Self(0x1E);
    pub const TIBETAN: Self = Self(0x51);
    pub const TURKISH: Self = Self(0x1F);
    pub const TURKMEN: Self = Self(0x42);
    pub const UIGHUR: Self = Self(0x80);
    pub const UKRAINIAN: Self = Self(0x22);
    pub const UPPER_SORBIAN: Self = Self(0x2E);
    pub const URDU: Self = Self(0x20);
    pub const UZBEK: Self = Self(0x43);
    pub const VIETNAMESE: Self = Self(0x2A);
    pub const WELSH: Self = Self(0x52);
    pub const WOLOF: Self = Self(0x88);
    pub const YAKUT: Self = Self(0x85);
    pub const YI: Self = Self(0x78);
    pub const YORUBA: Self = Self(0x6A);
}

/// A Windows locale (LCID), the combination of a primary language and a
/// sub-language.
///
/// Where a language is only spoken in a single country the country is
/// omitted from the name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowsLocaleId(pub u16);

impl WindowsLocaleId {
    pub const AFRIKAANS: Self = Self(0x0436);
    pub const ALBANIAN: Self = Self(0x041C);
    pub const ALSATIAN: Self = Self(0x0484);
    pub const AMHARIC: Self = Self(0x045E);
    pub const ARABIC_ALGERIA: Self = Self(0x1401);
    pub const ARABIC_BAHRAIN: Self = Self(0x3C01);
    pub const ARABIC_EGYPT: Self = Self(0x0C01);
    pub const ARABIC_IRAQ: Self = Self(0x0801);
    pub const ARABIC_JORDAN: Self = Self(0x2C01);
    pub const ARABIC_KUWAIT: Self = Self(0x3401);
    pub const ARABIC_LEBANON: Self = Self(0x3001);
    pub const ARABIC_LIBYA: Self = Self(0x1001);
    pub const ARABIC_MOROCCO: Self = Self(0x1801);
    pub const ARABIC_OMAN: Self = Self(0x2001);
    pub const ARABIC_QATAR: Self = Self(0x4001);
    pub const ARABIC_SAUDI_ARABIA: Self = Self(0x0401);
    pub const ARABIC_SYRIA: Self = Self(0x2801);
    pub const ARABIC_TUNISIA: Self = Self(0x1C01);
    pub const ARABIC_UAE: Self = Self(0x3801);
    pub const ARABIC_YEMEN: Self = Self(0x2401);
    pub const ARMENIAN: Self = Self(0x042B);
    pub const ASSAMESE: Self = Self(0x044D);
    pub const AZERI_CYRILLIC: Self = Self(0x082C);
    pub const AZERI_LATIN: Self = Self(0x042C);
    pub const BASHKIR: Self = Self(0x046D);
    pub const BASQUE: Self = Self(0x042D);
    pub const BELARUSIAN: Self = Self(0x0423);
    pub const BENGALI_BANGLADESH: Self = Self(0x0845);
    pub const BENGALI_INDIA: Self = Self(0x0445);
    pub const BOSNIAN_CYRILLIC: Self = Self(0x201A);
    pub const BOSNIAN_LATIN: Self = Self(0x141A);
    pub const BRETON: Self = Self(0x047E);
    pub const BULGARIAN: Self = Self(0x0402);
    pub const CATALAN: Self = Self(0x0403);
    pub const CHINESE_HONG_KONG: Self = Self(0x0C04);
    pub const CHINESE_MACAO: Self = Self(0x1404);
    pub const CHINESE_SIMPLIFIED: Self = Self(0x0804);
    pub const CHINESE_SINGAPORE: Self = Self(0x1004);
    pub const CHINESE_TAIWAN: Self = Self(0x0404);
    pub const CORSICAN: Self = Self(0x0483);
    pub const CROATIAN: Self = Self(0x041A);
    pub const CROATIAN_LATIN: Self = Self(0x101A);
    pub const CZECH: Self = Self(0x0405);
    pub const DANISH: Self = Self(0x0406);
    pub const DARI: Self = Self(0x048C);
    pub const DIVEHI: Self = Self(0x0465);
    pub const DUTCH_BELGIUM: Self = Self(0x0813);
    pub const DUTCH_NETHERLANDS: Self = Self(0x0413);
    pub const ENGLISH_AUSTRALIA: Self = Self(0x0C09);
    pub const ENGLISH_BELIZE: Self = Self(0x2809);
    pub const ENGLISH_CANADA: Self = Self(0x1009);
    pub const ENGLISH_CARIBBEAN: Self = Self(0x2409);
    pub const ENGLISH_INDIA: Self = Self(0x4009);
    pub const ENGLISH_IRELAND: Self = Self(0x1809);
    pub const ENGLISH_JAMAICA: Self = Self(0x2009);
    pub const ENGLISH_MALAYSIA: Self = Self(0x4409);
    pub const ENGLISH_NEW_ZEALAND: Self = Self(0x1409);
    pub const ENGLISH_PHILIPPINES: Self = Self(0x3409);
    pub const ENGLISH_SINGAPORE: Self = Self(0x4809);
    pub const ENGLISH_SOUTH_AFRICA: Self = Self(0x1C09);
    pub const ENGLISH_TRINIDAD_AND_TOBAGO: Self = Self(0x2C09);
    pub const ENGLISH_UK: Self = Self(0x0809);
    pub const ENGLISH_US: Self = Self(0x0409);
    pub const ENGLISH_ZIMBABWE: Self = Self(0x3009);
    pub const ESTONIAN: Self = Self(0x0425);
    pub const FAROESE: Self = Self(0x0438);
    pub const FILIPINO: Self = Self(0x0464);
    pub const FINNISH: Self = Self(0x040B);
    pub const FRENCH: Self = Self(0x040C);
    pub const FRENCH_BELGIUM: Self = Self(0x080C);
    pub const FRENCH_CANADA: Self = Self(0x0C0C);
    pub const FRENCH_LUXEMBOURG: Self = Self(0x140C);
    pub const FRENCH_MONACO: Self = Self(0x180C);
    pub const FRENCH_SWITZERLAND: Self = Self(0x100C);
    pub const FRISIAN: Self = Self(0x0462);
    pub const GALICIAN: Self = Self(0x0456);
    pub const GEORGIAN: Self = Self(0x0437);
    pub const GERMAN: Self = Self(0x0407);
    pub const GERMAN_AUSTRIA: Self = Self(0x0C07);
    pub const GERMAN_LIECHTENSTEIN: Self = Self(0x1407);
    pub const GERMAN_LUXEMBOURG: Self = Self(0x1007);
    pub const GERMAN_SWITZERLAND: Self = Self(0x0807);
    pub const GREEK: Self = Self(0x0408);
    pub const GREENLANDIC: Self = Self(0x046F);
    pub const GUJARATI: Self = Self(0x0447);
    pub const HAUSA: Self = Self(0x0468);
    pub const HEBREW: Self = Self(0x040D);
    pub const HINDI: Self = Self(0x0439);
    pub const HUNGARIAN: Self = Self(0x040E);
    pub const ICELANDIC: Self = Self(0x040F);
    pub const IGBO: Self = Self(0x0470);
    pub const INDONESIAN: Self = Self(0x0421);
    pub const INUKTITUT: Self = Self(0x045D);
    pub const INUKTITUT_LATIN: Self = Self(0x085D);
    pub const IRISH: Self = Self(0x083C);
    pub const ISI_XHOSA: Self = Self(0x0434);
    pub const ISI_ZULU: Self = Self(0x0435);
    pub const ITALIAN: Self = Self(0x0410);
    pub const ITALIAN_SWITZERLAND: Self = Self(0x0810);
    pub const JAPANESE: Self = Self(0x0411);
    pub const KANNADA: Self = Self(0x044B);
    pub const KAZAKH: Self = Self(0x043F);
    pub const KHMER: Self = Self(0x0453);
    pub const ICHE: Self = Self(0x0486);
    pub const KINYARWANDA: Self = Self(0x0487);
    pub const KISWAHILI: Self = Self(0x0441);
    pub const KONKANI: Self = Self(0x0457);
    pub const KOREAN: Self = Self(0x0412);
    pub const KYRGYZ: Self = Self(0x0440);
    pub const LAO: Self = Self(0x0454);
    pub const LATVIAN: Self = Self(0x0426);
    pub const LITHUANIAN: Self = Self(0x0427);
    pub const LOWER_SORBIAN: Self = Self(0x082E);
    pub const LUXEMBOURGISH: Self = Self(0x046E);
    pub const MACEDONIAN: Self = Self(0x042F);
    pub const MALAY: Self = Self(0x043E);
    pub const MALAY_BRUNEI_DARUSSALAM: Self = Self(0x083E);
    pub const MALAYALAM: Self = Self(0x044C);
    pub const MALTESE: Self = Self(0x043A);
    pub const MAORI: Self = Self(0x0481);
    pub const MAPUDUNGUN: Self = Self(0x047A);
    pub const MARATHI: Self = Self(0x044E);
    pub const MOHAWK: Self = Self(0x047C);
    pub const MONGOLIAN_CYRILLIC: Self = Self(0x0450);
    pub const MONGOLIAN_PRC: Self = Self(0x0850);
    pub const NEPALI: Self = Self(0x0461);
    pub const NORWEGIAN_BOKMAL: Self = Self(0x0414);
    pub const NORWEGIAN_NYNORSK: Self = Self(0x0814);
    pub const OCCITAN: Self = Self(0x0482);
    pub const ODIA: Self = Self(0x0448);
    pub const PASHTO: Self = Self(0x0463);
    pub const POLISH: Self = Self(0x0415);
    pub const PORTUGUESE_PORTUGAL: Self = Self(0x0816);
    pub const PORTUGUESE_BRAZIL: Self = Self(0x0416);
    pub const PUNJABI: Self = Self(0x0446);
    pub const QUECHUA_BOLIVIA: Self = Self(0x046B);
    pub const QUECHUA_ECUADOR: Self = Self(0x086B);
    pub const QUECHUA_PERU: Self = Self(0x0C6B);
    pub const ROMANIAN: Self = Self(0x0418);
    pub const ROMANSH: Self = Self(0x0417);
    pub const RUSSIAN: Self = Self(0x0419);
    pub const SAMI_INARI_FINLAND: Self = Self(0x243B);
    pub const SAMI_LULE_NORWAY: Self = Self(0x103B);
    pub const SAMI_LULE_SWEDEN: Self = Self(0x143B);
    pub const SAMI_NORTHERN_FINLAND: Self = Self(0x0C3B);
    pub const SAMI_NORTHERN_NORWAY: Self = Self(0x043B);
    pub const SAMI_NORTHERN_SWEDEN: Self = Self(0x083B);
    pub const SAMI_SKOLT_FINLAND: Self = Self(0x203B);
    pub const SAMI_SOUTHERN_NORWAY: Self = Self(0x183B);
    pub const SAMI_SOUTHERN_SWEDEN: Self = Self(0x1C3B);
    pub const SANSKRIT: Self = Self(0x044F);
    pub const SERBIAN_CYRILLIC_BH: Self = Self(0x1C1A);
    pub const SERBIAN_CYRILLIC_SERBIA: Self = Self(0x0C1A);
    pub const SERBIAN_LATIN_BH: Self = Self(0x181A);
    pub const SERBIAN_LATIN_SERBIA: Self = Self(0x081A);
    pub const SESOTHO_SA_LEBOA: Self = Self(0x046C);
    pub const SETSWANA: Self = Self(0x0432);
    pub const SINHALA: Self = Self(0x045B);
    pub const SLOVAK: Self = Self(0x041B);
    pub const SLOVENIAN: Self = Self(0x0424);
    pub const SPANISH: Self = Self(0x040A);
    pub const SPANISH_ARGENTINA: Self = Self(0x2C0A);
    pub const SPANISH_BOLIVIA: Self = Self(0x400A);
    pub const SPANISH_CHILE: Self = Self(0x340A);
    pub const SPANISH_COLOMBIA: Self = Self(0x240A);
    pub const SPANISH_COSTA_RICA: Self = Self(0x140A);
    pub const SPANISH_DOMINICAN_REPUBLIC: Self = Self(0x1C0A);
    pub const SPANISH_ECUADOR: Self = Self(0x300A);
    pub const SPANISH_EL_SALVADOR: Self = Self(0x440A);
    pub const SPANISH_GUATEMALA: Self = Self(0x100A);
    pub const SPANISH_HONDURAS: Self = Self(0x480A);
    pub const SPANISH_MEXICO: Self = Self(0x080A);
    pub const SPANISH_NICARAGUA: Self = Self(0x4C0A);
    pub const SPANISH_PANAMA: Self = Self(0x180A);
    pub const SPANISH_PARAGUAY: Self = Self(0x3C0A);
    pub const SPANISH_PERU: Self = Self(0x280A);
    pub const SPANISH_PUERTO_RICO: Self = Self(0x500A);
    pub const SPANISH_MODERN_SORT: Self = Self(0x0C0A);
    pub const SPANISH_US: Self = Self(0x540A);
    pub const SPANISH_URUGUAY: Self = Self(0x380A);
    pub const SPANISH_VENEZUELA: Self = Self(0x200A);
    pub const SWEDEN: Self = Self(0x081D);
    pub const SWEDISH: Self = Self(0x041D);
    pub const SYRIAC: Self = Self(0x045A);
    pub const TAJIK: Self = Self(0x0428);
    pub const TAMAZIGHT: Self = Self(0x085F);
    pub const TAMIL: Self = Self(0x0449);
    pub const TATAR: Self = Self(0x0444);
    pub const TELUGU: Self = Self(0x044A);
    pub const THAI: Self = Self(0x041E);
    pub const TIBETAN: Self = Self(0x0451);
    pub const TURKISH: Self = Self(0x041F);
    pub const TURKMEN: Self = Self(0x0442);
    pub const UIGHUR: Self = Self(0x0480);
    pub const UKRAINIAN: Self = Self(0x0422);
    pub const UPPER_SORBIAN: Self = Self(0x042E);
    pub const URDU: Self = Self(0x0420);
    pub const UZBEK_CYRILLIC: Self = Self(0x0843);
    pub const UZBEK_LATIN: Self = Self(0x0443);
    pub const VIETNAMESE: Self = Self(0x042A);
    pub const WELSH: Self = Self(0x0452);
    pub const WOLOF: Self = Self(0x0488);
    pub const YAKUT: Self = Self(0x0485);
    pub const YI: Self = Self(0x0478);
    pub const YORUBA: Self = Self(0x046A);

    /// Returns the primary language of this locale.
    pub fn primary_language(self) -> WindowsLanguageId {
        WindowsLanguageId(primary_language(self.0))
    }

    /// Returns the sub-language bits of this locale.
    pub fn sub_language(self) -> u16 {
        sub_language(self.0)
    }
}

/// Extracts the primary language code from an LCID.
pub fn primary_language(locale_id: u16) -> u16 {
    locale_id & 0x03FF
}

/// Extracts the sub-language bits from an LCID.
pub fn sub_language(locale_id: u16) -> u16 {
    locale_id >> 10
}

/// Converts a Windows LCID to a BCP-47 language tag.
///
/// Returns an empty string for reserved or unassigned locales.
///
/// ```
/// use vero_platform::resolve_windows_locale_name;
///
/// assert_eq!(resolve_windows_locale_name(0x0409), "en-US");
/// assert_eq!(resolve_windows_locale_name(0xFFFF), "");
/// ```
pub fn resolve_windows_locale_name(locale_id: u16) -> &'static str {
    lookup(WINDOWS_LOCALE_TAGS, locale_id)
}

/// Converts a bare Windows primary language code to a BCP-47 language tag.
///
/// Codes shared by several languages resolve to the language of their
/// default sub-language, so 0x1A is Croatian and 0x2E is Upper Sorbian.
pub fn resolve_windows_language_name(primary_language_id: u16) -> &'static str {
    lookup(WINDOWS_LANGUAGE_TAGS, primary_language_id)
}

fn lookup(table: &[(u16, &'static str)], id: u16) -> &'static str {
    match table.binary_search_by(|entry| entry.0.cmp(&id)) {
        Ok(ix) => table[ix].1,
        Err(_) => "",
    }
}

/// LCIDs mapped to BCP-47, sorted by value.
const WINDOWS_LOCALE_TAGS: &[(u16, &str)] = &[
    (0x0401, "ar-SA"),
    (0x0402, "bg-BG"),
    (0x0403, "ca-ES"),
    (0x0404, "zh-TW"),
    (0x0405, "cs-CZ"),
    (0x0406, "da-DK"),
    (0x0407, "de-DE"),
    (0x0408, "el-GR"),
    (0x0409, "en-US"),
    (0x040A, "es-ES-tradnl"),
    (0x040B, "fi-FI"),
    (0x040C, "fr-FR"),
    (0x040D, "he-IL"),
    (0x040E, "hu-HU"),
    (0x040F, "is-IS"),
    (0x0410, "it-IT"),
    (0x0411, "ja-JP"),
    (0x0412, "ko-KR"),
    (0x0413, "nl-NL"),
    (0x0414, "nb-NO"),
    (0x0415, "pl-PL"),
    (0x0416, "pt-BR"),
    (0x0417, "rm-CH"),
    (0x0418, "ro-RO"),
    (0x0419, "ru-RU"),
    (0x041A, "hr-HR"),
    (0x041B, "sk-SK"),
    (0x041C, "sq-AL"),
    (0x041D, "sv-SE"),
    (0x041E, "th-TH"),
    (0x041F, "tr-TR"),
    (0x0420, "ur-PK"),
    (0x0421, "id-ID"),
    (0x0422, "uk-UA"),
    (0x0423, "be-BY"),
    (0x0424, "sl-SI"),
    (0x0425, "et-EE"),
    (0x0426, "lv-LV"),
    (0x0427, "lt-LT"),
    (0x0428, "tg-Cyrl-TJ"),
    (0x042A, "vi-VN"),
    (0x042B, "hy-AM"),
    (0x042C, "az-Latn-AZ"),
    (0x042D, "eu-ES"),
    (0x042E, "hsb-DE"),
    (0x042F, "mk-MK"),
    (0x0432, "tn-ZA"),
    (0x0434, "xh-ZA"),
    (0x0435, "zu-ZA"),
    (0x0436, "af-ZA"),
    (0x0437, "ka-GE"),
    (0x0438, "fo-FO"),
    (0x0439, "hi-IN"),
    (0x043A, "mt-MT"),
    (0x043B, "se-NO"),
    (0x043E, "ms-MY"),
    (0x043F, "kk-KZ"),
    (0x0440, "ky-KG"),
    (0x0441, "sw-KE"),
    (0x0442, "tk-TM"),
    (0x0443, "uz-Latn-UZ"),
    (0x0444, "tt-RU"),
    (0x0445, "bn-IN"),
    (0x0446, "pa-IN"),
    (0x0447, "gu-IN"),
    (0x0448, "or-IN"),
    (0x0449, "ta-IN"),
    (0x044A, "te-IN"),
    (0x044B, "kn-IN"),
    (0x044C, "ml-IN"),
    (0x044D, "as-IN"),
    (0x044E, "mr-IN"),
    (0x044F, "sa-IN"),
    (0x0450, "mn-Cyrl"),
    (0x0451, "bo-CN"),
    (0x0452, "cy-GB"),
    (0x0453, "km-KH"),
    (0x0454, "lo-LA"),
    (0x0456, "gl-ES"),
    (0x0457, "kok-IN"),
    (0x045A, "syr-SY"),
    (0x045B, "si-LK"),
    (0x045D, "iu-Cans-CA"),
    (0x045E, "am-ET"),
    (0x0461, "ne-NP"),
    (0x0462, "fy-NL"),
    (0x0463, "ps-AF"),
    (0x0464, "fil-PH"),
    (0x0465, "dv-MV"),
    (0x0468, "ha-Latn-NG"),
    (0x046A, "yo-NG"),
    (0x046B, "quz-BO"),
    (0x046C, "nso-ZA"),
    (0x046D, "ba-RU"),
    (0x046E, "lb-LU"),
    (0x046F, "kl-GL"),
    (0x0470, "ig-NG"),
    (0x0478, "ii-CN"),
    (0x047A, "arn-CL"),
    (0x047C, "moh-CA"),
    (0x047E, "br-FR"),
    (0x0480, "ug-CN"),
    (0x0481, "mi-NZ"),
    (0x0482, "oc-FR"),
    (0x0483, "co-FR"),
    (0x0484, "gsw-FR"),
    (0x0485, "sah-RU"),
    (0x0486, "qut-GT"),
    (0x0487, "rw-RW"),
    (0x0488, "wo-SN"),
    (0x048C, "prs-AF"),
    (0x0801, "ar-IQ"),
    (0x0804, "zh-Hans"),
    (0x0807, "de-CH"),
    (0x0809, "en-GB"),
    (0x080A, "es-MX"),
    (0x080C, "fr-BE"),
    (0x0810, "it-CH"),
    (0x0813, "nl-BE"),
    (0x0814, "nn-NO"),
    (0x0816, "pt-PT"),
    (0x081A, "sr-Latn-CS"),
    (0x081D, "sv-FI"),
    (0x082C, "az-Cyrl-AZ"),
    (0x082E, "dsb-DE"),
    (0x083B, "se-SE"),
    (0x083C, "ga-IE"),
    (0x083E, "ms-BN"),
    (0x0843, "uz-Cyrl-UZ"),
    (0x0845, "bn-BD"),
    (0x0850, "mn-Mong-CN"),
    (0x085D, "iu-Latn-CA"),
    (0x085F, "tzm-Latn-DZ"),
    (0x086B, "quz-EC"),
    (0x0C01, "ar-EG"),
    (0x0C04, "zh-Hant"),
    (0x0C07, "de-AT"),
    (0x0C09, "en-AU"),
    (0x0C0A, "es-ES"),
    (0x0C0C, "fr-CA"),
    (0x0C1A, "sr-Cyrl-CS"),
    (0x0C3B, "se-FI"),
    (0x0C6B, "quz-PE"),
    (0x1001, "ar-LY"),
    (0x1004, "zh-SG"),
    (0x1007, "de-LU"),
    (0x1009, "en-CA"),
    (0x100A, "es-GT"),
    (0x100C, "fr-CH"),
    (0x101A, "hr-BA"),
    (0x103B, "smj-NO"),
    (0x1401, "ar-DZ"),
    (0x1404, "zh-MO"),
    (0x1407, "de-LI"),
    (0x1409, "en-NZ"),
    (0x140A, "es-CR"),
    (0x140C, "fr-LU"),
    (0x141A, "bs-Latn-BA"),
    (0x143B, "smj-SE"),
    (0x1801, "ar-MA"),
    (0x1809, "en-IE"),
    (0x180A, "es-PA"),
    (0x180C, "fr-MC"),
    (0x181A, "sr-Latn-BA"),
    (0x183B, "sma-NO"),
    (0x1C01, "ar-TN"),
    (0x1C09, "en-ZA"),
    (0x1C0A, "es-DO"),
    (0x1C1A, "sr-Cyrl-BA"),
    (0x1C3B, "sma-SE"),
    (0x2001, "ar-OM"),
    (0x2009, "en-JM"),
    (0x200A, "es-VE"),
    (0x201A, "bs-Cyrl-BA"),
    (0x203B, "sms-FI"),
    (0x2401, "ar-YE"),
    (0x2409, "en-029"),
    (0x240A, "es-CO"),
    (0x243B, "smn-FI"),
    (0x2801, "ar-SY"),
    (0x2809, "en-BZ"),
    (0x280A, "es-PE"),
    (0x2C01, "ar-JO"),
    (0x2C09, "en-TT"),
    (0x2C0A, "es-AR"),
    (0x3001, "ar-LB"),
    (0x3009, "en-ZW"),
    (0x300A, "es-EC"),
    (0x3401, "ar-KW"),
    (0x3409, "en-PH"),
    (0x340A, "es-CL"),
    (0x3801, "ar-AE"),
    (0x380A, "es-UY"),
    (0x3C01, "ar-BH"),
    (0x3C0A, "es-PY"),
    (0x4001, "ar-QA"),
    (0x4009, "en-IN"),
    (0x400A, "es-BO"),
    (0x4409, "en-MY"),
    (0x440A, "es-SV"),
    (0x4809, "en-SG"),
    (0x480A, "es-HN"),
    (0x4C0A, "es-NI"),
    (0x500A, "es-PR"),
    (0x540A, "es-US"),
];

/// Primary language codes mapped to bare BCP-47 language subtags, sorted by
/// value. 0x00 (neutral) has no tag.
const WINDOWS_LANGUAGE_TAGS: &[(u16, &str)] = &[
    (0x01, "ar"),
    (0x02, "bg"),
    (0x03, "ca"),
    (0x04, "zh"),
    (0x05, "cs"),
    (0x06, "da"),
    (0x07, "de"),
    (0x08, "el"),
    (0x09, "en"),
    (0x0A, "es"),
    (0x0B, "fi"),
    (0x0C, "fr"),
    (0x0D, "he"),
    (0x0E, "hu"),
    (0x0F, "is"),
    (0x10, "it"),
    (0x11, "ja"),
    (0x12, "ko"),
    (0x13, "nl"),
    (0x14, "no"),
    (0x15, "pl"),
    (0x16, "pt"),
    (0x17, "rm"),
    (0x18, "ro"),
    (0x19, "ru"),
    (0x1A, "hr"),
    (0x1B, "sk"),
    (0x1C, "sq"),
    (0x1D, "sv"),
    (0x1E, "th"),
    (0x1F, "tr"),
    (0x20, "ur"),
    (0x21, "id"),
    (0x22, "uk"),
    (0x23, "be"),
    (0x24, "sl"),
    (0x25, "et"),
    (0x26, "lv"),
    (0x27, "lt"),
    (0x28, "tg"),
    (0x2A, "vi"),
    (0x2B, "hy"),
    (0x2C, "az"),
    (0x2D, "eu"),
    (0x2E, "hsb"),
    (0x2F, "mk"),
    (0x32, "tn"),
    (0x34, "xh"),
    (0x35, "zu"),
    (0x36, "af"),
    (0x37, "ka"),
    (0x38, "fo"),
    (0x39, "hi"),
    (0x3A, "mt"),
    (0x3B, "se"),
    (0x3C, "ga"),
    (0x3E, "ms"),
    (0x3F, "kk"),
    (0x40, "ky"),
    (0x41, "sw"),
    (0x42, "tk"),
    (0x43, "uz"),
    (0x44, "tt"),
    (0x45, "bn"),
    (0x46, "pa"),
    (0x47, "gu"),
    (0x48, "or"),
    (0x49, "ta"),
    (0x4A, "te"),
    (0x4B, "kn"),
    (0x4C, "ml"),
    (0x4D, "as"),
    (0x4E, "mr"),
    (0x4F, "sa"),
    (0x50, "mn"),
    (0x51, "bo"),
    (0x52, "cy"),
    (0x53, "km"),
    (0x54, "lo"),
    (0x56, "gl"),
    (0x57, "kok"),
    (0x5A, "syr"),
    (0x5B, "si"),
    (0x5D, "iu"),
    (0x5E, "am"),
    (0x5F, "tzm"),
    (0x61, "ne"),
    (0x62, "fy"),
    (0x63, "ps"),
    (0x64, "fil"),
    (0x65, "dv"),
    (0x68, "ha"),
    (0x6A, "yo"),
    (0x6B, "quz"),
    (0x6C, "nso"),
    (0x6D, "ba"),
    (0x6E, "lb"),
    (0x6F, "kl"),
    (0x70, "ig"),
    (0x78, "ii"),
    (0x7A, "arn"),
    (0x7C, "moh"),
    (0x7E, "br"),
    (0x80, "ug"),
    (0x81, "mi"),
    (0x82, "oc"),
    (0x83, "co"),
    (0x84, "gsw"),
    (0x85, "sah"),
    (0x86, "qut"),
    (0x87, "rw"),
    (0x88, "wo"),
    (0x8C, "prs"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(WINDOWS_LOCALE_TAGS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(WINDOWS_LANGUAGE_TAGS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn locale_lookups() {
        assert_eq!(resolve_windows_locale_name(WindowsLocaleId::ENGLISH_US.0), "en-US");
        assert_eq!(resolve_windows_locale_name(WindowsLocaleId::ENGLISH_UK.0), "en-GB");
        assert_eq!(
            resolve_windows_locale_name(WindowsLocaleId::CHINESE_SIMPLIFIED.0),
            "zh-Hans"
        );
        assert_eq!(
            resolve_windows_locale_name(WindowsLocaleId::SPANISH_US.0),
            "es-US"
        );
    }

    #[test]
    fn unassigned_locales_are_empty() {
        assert_eq!(resolve_windows_locale_name(0xFFFF), "");
        assert_eq!(resolve_windows_locale_name(0x0000), "");
        // bare primary languages are not locales
        assert_eq!(resolve_windows_locale_name(0x0009), "");
    }

    #[test]
    fn shared_primary_language_codes() {
        assert_eq!(WindowsLanguageId::CROATIAN, WindowsLanguageId::BOSNIAN);
        assert_eq!(WindowsLanguageId::CROATIAN, WindowsLanguageId::SERBIAN);
        assert_eq!(WindowsLanguageId::SWEDEN, WindowsLanguageId::SWEDISH);
        assert_eq!(
            WindowsLanguageId::LOWER_SORBIAN,
            WindowsLanguageId::UPPER_SORBIAN
        );

        // told apart by sub-language only
        for locale in [
            WindowsLocaleId::CROATIAN,
            WindowsLocaleId::BOSNIAN_LATIN,
            WindowsLocaleId::BOSNIAN_CYRILLIC,
            WindowsLocaleId::SERBIAN_LATIN_SERBIA,
            WindowsLocaleId::SERBIAN_CYRILLIC_SERBIA,
        ] {
            assert_eq!(locale.primary_language(), WindowsLanguageId::CROATIAN);
        }
        assert_eq!(resolve_windows_locale_name(WindowsLocaleId::CROATIAN.0), "hr-HR");
        assert_eq!(
            resolve_windows_locale_name(WindowsLocaleId::BOSNIAN_LATIN.0),
            "bs-Latn-BA"
        );
        assert_eq!(
            resolve_windows_locale_name(WindowsLocaleId::SERBIAN_CYRILLIC_SERBIA.0),
            "sr-Cyrl-CS"
        );
        assert_eq!(resolve_windows_language_name(0x1A), "hr");
    }

    #[test]
    fn lcid_parts() {
        let locale = WindowsLocaleId::ENGLISH_UK;
        assert_eq!(locale.primary_language(), WindowsLanguageId::ENGLISH);
        assert_eq!(locale.sub_language(), 2);
        assert_eq!(primary_language(0x0409), 0x09);
        assert_eq!(sub_language(0x0409), 1);
    }

    #[test]
    fn every_locale_constant_has_a_tag() {
        for (id, tag) in WINDOWS_LOCALE_TAGS {
            assert!(!tag.is_empty(), "{id:#06x}");
            let primary = resolve_windows_language_name(primary_language(*id));
            assert!(!primary.is_empty(), "{id:#06x}");
        }
        assert_eq!(resolve_windows_language_name(WindowsLanguageId::NEUTRAL.0), "");
    }
}
