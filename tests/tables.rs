use pretty_assertions::assert_eq;
use vero_platform::{
    Cmap, NameId, NameTable, PlatformId, TextDecoder, VeroPlatformError,
    platform::MacEncodingId,
    tables::{TableEncodingError, cmap::SelectionError, name::NameFormat},
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn utf16be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Builds a cmap table out of (platform, encoding) pairs, each pointing at
/// a 4 byte dummy subtable.
fn cmap_bytes(pairs: &[(u16, u16)]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend(0u16.to_be_bytes());
    data.extend((pairs.len() as u16).to_be_bytes());

    let subtables_start = 4 + pairs.len() * 8;
    for (i, (platform, encoding)) in pairs.iter().enumerate() {
        data.extend(platform.to_be_bytes());
        data.extend(encoding.to_be_bytes());
        data.extend(((subtables_start + i * 4) as u32).to_be_bytes());
    }
    for _ in pairs {
        data.extend([0x00, 0x04, 0x00, 0x00]);
    }
    data
}

struct NameEntry {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    bytes: Vec<u8>,
}

fn name_bytes(format: u16, entries: &[NameEntry], lang_tags: &[&str]) -> Vec<u8> {
    let mut header = Vec::new();
    let mut storage = Vec::new();

    let mut storage_offset = 6 + entries.len() * 12;
    if format == 1 {
        storage_offset += 2 + lang_tags.len() * 4;
    }

    header.extend(format.to_be_bytes());
    header.extend((entries.len() as u16).to_be_bytes());
    header.extend((storage_offset as u16).to_be_bytes());

    for entry in entries {
        header.extend(entry.platform_id.to_be_bytes());
        header.extend(entry.encoding_id.to_be_bytes());
        header.extend(entry.language_id.to_be_bytes());
        header.extend(entry.name_id.to_be_bytes());
        header.extend((entry.bytes.len() as u16).to_be_bytes());
        header.extend((storage.len() as u16).to_be_bytes());
        storage.extend(&entry.bytes);
    }

    if format == 1 {
        header.extend((lang_tags.len() as u16).to_be_bytes());
        for tag in lang_tags {
            let encoded = utf16be(tag);
            header.extend((encoded.len() as u16).to_be_bytes());
            header.extend((storage.len() as u16).to_be_bytes());
            storage.extend(encoded);
        }
    }

    header.extend(storage);
    header
}

#[test]
fn cmap_prefers_ucs4_wherever_it_is_declared() {
    init_logging();
    let data = cmap_bytes(&[(0, 3), (3, 1), (1, 0), (3, 10), (3, 0)]);
    let cmap = Cmap::from_bytes(&data).unwrap();
    let selection = cmap.select().unwrap();

    let primary = selection.primary().unwrap();
    assert_eq!((primary.platform_id, primary.encoding_id), (3, 10));
    assert_eq!(primary.index, 3);
    assert_eq!(primary.platform(), Some(PlatformId::Windows));
    assert_eq!(selection.symbol().map(|d| d.index), Some(4));
}

#[test]
fn cmap_symbol_font() {
    init_logging();
    let data = cmap_bytes(&[(1, 0), (3, 0)]);
    let selection = Cmap::from_bytes(&data).unwrap().select().unwrap();

    assert_eq!(selection.primary().map(|d| d.platform_id), Some(1));
    assert_eq!(selection.symbol().map(|d| d.platform_id), Some(3));
}

#[test]
fn cmap_without_usable_subtables() {
    init_logging();
    let empty = cmap_bytes(&[]);
    assert_eq!(
        Cmap::from_bytes(&empty).unwrap().select(),
        Err(SelectionError::NoUsableCmapSubtable)
    );

    let exotic = cmap_bytes(&[(7, 1), (3, 9), (1, 40), (4, 0)]);
    assert_eq!(
        Cmap::from_bytes(&exotic).unwrap().select(),
        Err(SelectionError::NoUsableCmapSubtable)
    );
}

#[test]
fn cmap_truncated() {
    let mut data = cmap_bytes(&[(3, 1), (3, 10)]);
    data.truncate(10);

    assert!(matches!(
        Cmap::from_bytes(&data),
        Err(VeroPlatformError::TableEncodingError(
            TableEncodingError::InvalidBufferLength(20, 10)
        ))
    ));
}

#[test]
fn name_family_prefers_windows_english() {
    init_logging();
    let data = name_bytes(
        0,
        &[
            NameEntry {
                platform_id: 1,
                encoding_id: 0,
                language_id: 0,
                name_id: 1,
                bytes: b"Mac Family".to_vec(),
            },
            NameEntry {
                platform_id: 3,
                encoding_id: 1,
                language_id: 0x0407,
                name_id: 1,
                bytes: utf16be("Familie"),
            },
            NameEntry {
                platform_id: 3,
                encoding_id: 1,
                language_id: 0x0409,
                name_id: 1,
                bytes: utf16be("Family"),
            },
            NameEntry {
                platform_id: 3,
                encoding_id: 1,
                language_id: 0x0409,
                name_id: 2,
                bytes: utf16be("Regular"),
            },
        ],
        &[],
    );
    let table = NameTable::from_bytes(&data).unwrap();
    assert_eq!(table.format(), NameFormat::Format0);
    assert_eq!(table.records().len(), 4);

    let resolved = table.resolve(NameId::FAMILY_NAME, &["en"]).unwrap();
    assert_eq!(resolved.language, "en-US");
    assert_eq!(resolved.decoder, TextDecoder::Utf16Be);
    assert_eq!(
        table.string_bytes(&resolved.record),
        Some(utf16be("Family").as_slice())
    );

    let german = table.resolve(NameId::FAMILY_NAME, &["de-DE", "en"]).unwrap();
    assert_eq!(table.string_bytes(&german.record), Some(utf16be("Familie").as_slice()));
}

#[test]
fn name_mac_only_font() {
    init_logging();
    let data = name_bytes(
        0,
        &[NameEntry {
            platform_id: 1,
            encoding_id: 0,
            language_id: 0,
            name_id: 4,
            bytes: b"Demo Bold".to_vec(),
        }],
        &[],
    );
    let table = NameTable::from_bytes(&data).unwrap();
    let resolved = table.resolve(NameId::FULL_NAME, &["en"]).unwrap();

    assert_eq!(resolved.decoder, TextDecoder::MacLegacy(MacEncodingId::ROMAN));
    assert_eq!(table.string_bytes(&resolved.record), Some(&b"Demo Bold"[..]));
}

#[test]
fn name_not_found_leaves_fallback_to_caller() {
    let data = name_bytes(
        0,
        &[NameEntry {
            platform_id: 3,
            encoding_id: 1,
            language_id: 0x0409,
            name_id: 1,
            bytes: utf16be("Family"),
        }],
        &[],
    );
    let table = NameTable::from_bytes(&data).unwrap();

    let resolved = table
        .resolve(NameId::TYPOGRAPHIC_FAMILY_NAME, &["en"])
        .or_else(|_| table.resolve(NameId::FAMILY_NAME, &["en"]))
        .unwrap();
    assert_eq!(resolved.record.name_id, NameId::FAMILY_NAME);
}

#[test]
fn name_format1_language_tags() {
    init_logging();
    let data = name_bytes(
        1,
        &[
            NameEntry {
                platform_id: 3,
                encoding_id: 1,
                language_id: 0x8000,
                name_id: 1,
                bytes: utf16be("Schrift"),
            },
            NameEntry {
                platform_id: 3,
                encoding_id: 1,
                language_id: 0x8001,
                name_id: 1,
                bytes: utf16be("Police"),
            },
        ],
        &["de-CH", "fr-CH"],
    );
    let table = NameTable::from_bytes(&data).unwrap();

    assert_eq!(table.format(), NameFormat::Format1);
    assert_eq!(table.lang_tags(), &["de-CH".to_string(), "fr-CH".to_string()]);

    let resolved = table.resolve(NameId::FAMILY_NAME, &["fr"]).unwrap();
    assert_eq!(resolved.language, "fr-CH");
    assert_eq!(table.string_bytes(&resolved.record), Some(utf16be("Police").as_slice()));
}

#[test]
fn name_record_outside_storage() {
    let mut data = name_bytes(
        0,
        &[NameEntry {
            platform_id: 3,
            encoding_id: 1,
            language_id: 0x0409,
            name_id: 1,
            bytes: utf16be("Family"),
        }],
        &[],
    );
    // drop the last character
    data.truncate(data.len() - 2);
    let table = NameTable::from_bytes(&data).unwrap();
    let resolved = table.resolve(NameId::FAMILY_NAME, &[]).unwrap();

    assert_eq!(table.string_bytes(&resolved.record), None);
}

#[test]
fn name_truncated_records() {
    let data = [0x00, 0x00, 0x00, 0x02, 0x00, 0x1E, 0x00, 0x03];
    assert!(matches!(
        NameTable::from_bytes(&data),
        Err(VeroPlatformError::TableEncodingError(
            TableEncodingError::InvalidBufferLength(30, 8)
        ))
    ));
}
