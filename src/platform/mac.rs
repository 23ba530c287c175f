//! Identifiers of the (deprecated) Macintosh platform.
//!
//! Apple's encoding ids are QuickDraw script codes. They are listed for
//! reference, nothing in here interprets the legacy code pages themselves.

/// Encoding ids of the Mac platform.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacEncodingId(pub u16);

impl MacEncodingId {
    pub const ROMAN: Self = Self(0);
    pub const JAPANESE: Self = Self(1);
    pub const TRADITIONAL_CHINESE: Self = Self(2);
    pub const KOREAN: Self = Self(3);
    pub const ARABIC: Self = Self(4);
    pub const HEBREW: Self = Self(5);
    pub const GREEK: Self = Self(6);
    pub const RUSSIAN: Self = Self(7);
    pub const R_SYMBOL: Self = Self(8);
    pub const DEVANAGARI: Self = Self(9);
    pub const GURMUKHI: Self = Self(10);
    pub const GUJARATI: Self = Self(11);
    pub const ORIYA: Self = Self(12);
    pub const BENGALI: Self = Self(13);
    pub const TAMIL: Self = Self(14);
    pub const TELUGU: Self = Self(15);
    pub const KANNADA: Self = Self(16);
    pub const MALAYALAM: Self = Self(17);
    pub const SINHALESE: Self = Self(18);
    pub const BURMESE: Self = Self(19);
    pub const KHMER: Self = Self(20);
    pub const THAI: Self = Self(21);
    pub const LAOTIAN: Self = Self(22);
    pub const GEORGIAN: Self = Self(23);
    pub const ARMENIAN: Self = Self(24);
    pub const SIMPLIFIED_CHINESE: Self = Self(25);
    pub const TIBETAN: Self = Self(26);
    pub const MONGOLIAN: Self = Self(27);
    pub const GEEZ: Self = Self(28);
    pub const SLAVIC: Self = Self(29);
    pub const VIETNAMESE: Self = Self(30);
    pub const SINDHI: Self = Self(31);
    pub const UNINTERPRETED: Self = Self(32);

    /// Returns true if Apple assigned a script to this id.
    pub fn is_assigned(self) -> bool {
        self.0 <= Self::UNINTERPRETED.0
    }
}

/// Language ids of the Mac platform.
///
/// These overlap numerically with the Windows primary language codes but
/// mean different things, e.g. 9 is Norwegian here and English on Windows.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacLanguageId(pub u16);

impl MacLanguageId {
    pub const ENGLISH: Self = Self(0);
    pub const FRENCH: Self = Self(1);
    pub const GERMAN: Self = Self(2);
    pub const ITALIAN: Self = Self(3);
    pub const DUTCH: Self = Self(4);
    pub const SWEDISH: Self = Self(5);
    pub const SPANISH: Self = Self(6);
    pub const DANISH: Self = Self(7);
    pub const PORTUGUESE: Self = Self(8);
    pub const NORWEGIAN: Self = Self(9);
    pub const HEBREW: Self = Self(10);
    pub const JAPANESE: Self = Self(11);
    pub const ARABIC: Self = Self(12);
    pub const FINNISH: Self = Self(13);
    pub const GREEK: Self = Self(14);
    pub const ICELANDIC: Self = Self(15);
    pub const MALTESE: Self = Self(16);
    pub const TURKISH: Self = Self(17);
    pub const CROATIAN: Self = Self(18);
    pub const TRADITIONAL_CHINESE: Self = Self(19);
    pub const URDU: Self = Self(20);
    pub const HINDI: Self = Self(21);
    pub const THAI: Self = Self(22);
    pub const KOREAN: Self = Self(23);
    pub const LITHUANIAN: Self = Self(24);
    pub const POLISH: Self = Self(25);
    pub const HUNGARIAN: Self = Self(26);
    pub const ESTONIAN: Self = Self(27);
    pub const LATVIAN: Self = Self(28);
    pub const SAMI: Self = Self(29);
    pub const FAROESE: Self = Self(30);
    pub const FARSI: Self = Self(31);
    pub const RUSSIAN: Self = Self(32);
    pub const SIMPLIFIED_CHINESE: Self = Self(33);
    pub const FLEMISH: Self = Self(34);
    pub const IRISH: Self = Self(35);
    pub const ALBANIAN: Self = Self(36);
    pub const ROMANIAN: Self = Self(37);
    pub const CZECH: Self = Self(38);
    pub const SLOVAK: Self = Self(39);
    pub const SLOVENIAN: Self = Self(40);
    pub const YIDDISH: Self = Self(41);
    pub const SERBIAN: Self = Self(42);
    pub const MACEDONIAN: Self = Self(43);
    pub const BULGARIAN: Self = Self(44);
    pub const UKRAINIAN: Self = Self(45);
    pub const BYELORUSSIAN: Self = Self(46);
    pub const UZBEK: Self = Self(47);
    pub const KAZAKH: Self = Self(48);
    pub const AZERBAIJANI_CYRILLIC: Self = Self(49);
    pub const AZERBAIJANI_ARABIC: Self = Self(50);
    pub const ARMENIAN: Self = Self(51);
    pub const GEORGIAN: Self = Self(52);
    pub const MOLDAVIAN: Self = Self(53);
    pub const KIRGHIZ: Self = Self(54);
    pub const TAJIKI: Self = Self(55);
    pub const TURKMEN: Self = Self(56);
    pub const MONGOLIAN_MONGOLIAN: Self = Self(57);
    pub const MONGOLIAN_CYRILLIC: Self = Self(58);
    pub const PASHTO: Self = Self(59);
    pub const KURDISH: Self = Self(60);
    pub const KASHMIRI: Self = Self(61);
    pub const SINDHI: Self = Self(62);
    pub const TIBETAN: Self = Self(63);
    pub const NEPALI: Self = Self(64);
    pub const SANSKRIT: Self = Self(65);
    pub const MARATHI: Self = Self(66);
    pub const BENGALI: Self = Self(67);
    pub const ASSAMESE: Self = Self(68);
    pub const GUJARATI: Self = Self(69);
    pub const PUNJABI: Self = Self(70);
    pub const ORIYA: Self = Self(71);
    pub const MALAYALAM: Self = Self(72);
    pub const KANNADA: Self = Self(73);
    pub const TAMIL: Self = Self(74);
    pub const TELUGU: Self = Self(75);
    pub const SINHALESE: Self = Self(76);
    pub const BURMESE: Self = Self(77);
    pub const KHMER: Self = Self(78);
    pub const LAO: Self = Self(79);
    pub const VIETNAMESE: Self = Self(80);
    pub const INDONESIAN: Self = Self(81);
    pub const TAGALOG: Self = Self(82);
    pub const MALAY_ROMAN: Self = Self(83);
    pub const MALAY_ARABIC: Self = Self(84);
    pub const AMHARIC: Self = Self(85);
    pub const TIGRINYA: Self = Self(86);
    pub const GALLA: Self = Self(87);
    pub const SOMALI: Self = Self(88);
    pub const SWAHILI: Self = Self(89);
    pub const KINYARWANDA_RUANDA: Self = Self(90);
    pub const RUNDI: Self = Self(91);
    pub const NYANJA_CHEWA: Self = Self(92);
    pub const MALAGASY: Self = Self(93);
    pub const ESPERANTO: Self = Self(94);
    pub const WELSH: Self = Self(128);
    pub const BASQUE: Self = Self(129);
    pub const CATALAN: Self = Self(130);
    pub const LATIN: Self = Self(131);
    pub const QUECHUA: Self = Self(132);
    pub const GUARANI: Self = Self(133);
    pub const AYMARA: Self = Self(134);
    pub const TATAR: Self = Self(135);
    pub const UIGHUR: Self = Self(136);
    pub const DZONGKHA: Self = Self(137);
    pub const JAVANESE: Self = Self(138);
    pub const SUNDANESE: Self = Self(139);
    pub const GALICIAN: Self = Self(140);
    pub const AFRIKAANS: Self = Self(141);
    pub const BRETON: Self = Self(142);
    pub const INUKTITUT: Self = Self(143);
    pub const SCOTTISH: Self = Self(144);
    pub const MANX: Self = Self(145);
    pub const IRISH_GAELIC_DOT: Self = Self(146);
    pub const TONGAN: Self = Self(147);
    pub const GREEK_POLYTONIC: Self = Self(148);
    pub const GREENLANDIC: Self = Self(149);
    pub const AZERBAIJANI_ROMAN: Self = Self(150);
}

/// Converts a Mac language id to a BCP-47 language tag.
///
/// Returns an empty string for ids Apple never assigned.
pub fn resolve_mac_language_name(mac_language_id: u16) -> &'static str {
    match MAC_LANGUAGE_TAGS.binary_search_by(|entry| entry.0.cmp(&mac_language_id)) {
        Ok(ix) => MAC_LANGUAGE_TAGS[ix].1,
        Err(_) => "",
    }
}

/// Mac language designators mapped to BCP-47. Apple moved to BCP-47 itself,
/// so this list is frozen.
const MAC_LANGUAGE_TAGS: &[(u16, &str)] = &[
    (0, "en"),
    (1, "fr"),
    (2, "de"),
    (3, "it"),
    (4, "nl"),
    (5, "sv"),
    (6, "es"),
    (7, "da"),
    (8, "pt"),
    (9, "nb"),
    (10, "he"),
    (11, "ja"),
    (12, "ar"),
    (13, "fi"),
    (14, "el"),
    (15, "is"),
    (16, "mt"),
    (17, "tr"),
    (18, "hr"),
    (19, "zh-Hant"),
    (20, "ur"),
    (21, "hi"),
    (22, "th"),
    (23, "ko"),
    (24, "lt"),
    (25, "pl"),
    (26, "hu"),
    (27, "et"),
    (28, "lv"),
    (29, "se"),
    (30, "fo"),
    (31, "fa"),
    (32, "ru"),
    (33, "zh-Hans"),
    (34, "nl-BE"), // Flemish
    (35, "ga"),
    (36, "sq"),
    (37, "ro"),
    (38, "cs"),
    (39, "sk"),
    (40, "sl"),
    (41, "yi"),
    (42, "sr"),
    (43, "mk"),
    (44, "bg"),
    (45, "uk"),
    (46, "be"),
    (47, "uz"),
    (48, "kk"),
    (49, "az-Cyrl"),
    (50, "az-Arab"),
    (51, "hy"),
    (52, "ka"),
    (53, "mo"),
    (54, "ky"),
    (55, "tg"),
    (56, "tk"),
    (57, "mn-Mong"),
    (58, "mn-Cyrl"),
    (59, "ps"),
    (60, "ku"),
    (61, "ks"),
    (62, "sd"),
    (63, "bo"),
    (64, "ne"),
    (65, "sa"),
    (66, "mr"),
    (67, "bn"),
    (68, "as"),
    (69, "gu"),
    (70, "pa"),
    (71, "or"),
    (72, "ml"),
    (73, "kn"),
    (74, "ta"),
    (75, "te"),
    (76, "si"),
    (77, "my"),
    (78, "km"),
    (79, "lo"),
    (80, "vi"),
    (81, "id"),
    (82, "tl"),
    (83, "ms-Latn"),
    (84, "ms-Arab"),
    (85, "am"),
    (86, "ti"),
    (87, "om"), // Galla
    (88, "so"),
    (89, "sw"),
    (90, "rw"),
    (91, "rn"),
    (92, "ny"),
    (93, "mg"),
    (94, "eo"),
    (128, "cy"),
    (129, "eu"),
    (130, "ca"),
    (131, "la"),
    (132, "qu"),
    (133, "gn"),
    (134, "ay"),
    (135, "tt"),
    (136, "ug"),
    (137, "dz"),
    (138, "jv-Latn"),
    (139, "su-Latn"),
    (140, "gl"),
    (141, "af"),
    (142, "br"),
    (143, "iu"),
    (144, "gd"),
    (145, "gv"),
    (146, "ga"), // with lenition dot
    (147, "to"),
    (148, "el-polyton"),
    (149, "kl"),
    (150, "az-Latn"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(MAC_LANGUAGE_TAGS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn lookups() {
        assert_eq!(resolve_mac_language_name(MacLanguageId::ENGLISH.0), "en");
        assert_eq!(resolve_mac_language_name(MacLanguageId::CROATIAN.0), "hr");
        assert_eq!(resolve_mac_language_name(MacLanguageId::WELSH.0), "cy");
        assert_eq!(
            resolve_mac_language_name(MacLanguageId::AZERBAIJANI_ROMAN.0),
            "az-Latn"
        );
    }

    #[test]
    fn gap_and_out_of_range_are_empty() {
        // 95..=127 were never assigned
        assert_eq!(resolve_mac_language_name(95), "");
        assert_eq!(resolve_mac_language_name(127), "");
        assert_eq!(resolve_mac_language_name(151), "");
        assert_eq!(resolve_mac_language_name(0x0409), "");
    }

    #[test]
    fn every_encoding_up_to_uninterpreted_is_assigned() {
        assert!((0..=32).all(|id| MacEncodingId(id).is_assigned()));
        assert!(!MacEncodingId(33).is_assigned());
    }
}
