//! Exported policy file text decoding and record extraction

use crate::catalog::Section;
use crate::error::PolicyError;
use crate::types::ObservedRecord;
use ini::{Ini, ParseOption};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Turn raw export bytes into normalized text.
///
/// Exports are UTF-16LE with a BOM in practice. BOM-less UTF-16LE is
/// recognised by NUL high bytes. Anything that is not valid UTF-8 is read
/// as a single-byte encoding.
pub fn decode_export(bytes: &[u8]) -> Result<String, PolicyError> {
    let text = if let Some(body) = bytes.strip_prefix(UTF16LE_BOM) {
        decode_utf16le(body)?
    } else if looks_like_utf16le(bytes) {
        decode_utf16le(bytes)?
    } else {
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        match std::str::from_utf8(body) {
            Ok(text) => text.to_string(),
            Err(_) => body.iter().map(|&b| char::from(b)).collect(),
        }
    };

    Ok(text.replace('\u{feff}', "").replace("\r\n", "\n"))
}

fn looks_like_utf16le(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes.len() % 2 == 0 && bytes[0] != 0 && bytes[1] == 0
}

fn decode_utf16le(bytes: &[u8]) -> Result<String, PolicyError> {
    if bytes.len() % 2 != 0 {
        return Err(PolicyError::ExportDecode {
            reason: "odd byte count in UTF-16 data".to_string(),
        });
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| PolicyError::ExportDecode {
        reason: e.to_string(),
    })
}

/// Parse decoded export text into records.
///
/// `Unicode`, `Version` and any section the engine does not manage are
/// skipped. `Key =` becomes a record with no value.
pub fn parse_records(text: &str) -> Result<Vec<ObservedRecord>, PolicyError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(text, options)?;

    let mut records = Vec::new();
    for (header, properties) in ini.iter() {
        let Some(section) = header.and_then(Section::from_header) else {
            continue;
        };
        for (key, value) in properties.iter() {
            let value = value.trim();
            let raw_value = (!value.is_empty()).then(|| value.to_string());
            records.push(ObservedRecord::new(section, key.trim(), raw_value));
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[Unicode]\r\nUnicode=yes\r\n[System Access]\r\nMinimumPasswordAge = 1\r\nNewAdministratorName = \"Administrator\"\r\n[Privilege Rights]\r\nSeTrustedCredManAccessPrivilege =\r\n[Version]\r\nsignature=\"$CHICAGO$\"\r\nRevision=1\r\n";

    fn utf16le(text: &str, bom: bool) -> Vec<u8> {
        let mut bytes = if bom { UTF16LE_BOM.to_vec() } else { Vec::new() };
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_utf16_with_bom() {
        let text = decode_export(&utf16le(SAMPLE, true)).unwrap();
        assert!(text.starts_with("[Unicode]\nUnicode=yes\n"));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_decode_utf16_without_bom() {
        let text = decode_export(&utf16le("[Unicode]\r\n", false)).unwrap();
        assert_eq!(text, "[Unicode]\n");
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"[System Access]\r\nLockoutBadCount = 0\r\n");
        assert_eq!(
            decode_export(&bytes).unwrap(),
            "[System Access]\nLockoutBadCount = 0\n"
        );
    }

    #[test]
    fn test_decode_single_byte_fallback() {
        let bytes = b"NewGuestName = \"G\xe4st\"\n";
        assert_eq!(decode_export(bytes).unwrap(), "NewGuestName = \"G\u{e4}st\"\n");
    }

    #[test]
    fn test_parse_records_skips_header_sections() {
        let text = decode_export(SAMPLE.as_bytes()).unwrap();
        let records = parse_records(&text).unwrap();

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.machine_name != "Unicode"));
        assert!(records.iter().all(|r| r.machine_name != "signature"));

        assert_eq!(
            records[0],
            ObservedRecord::new(Section::SystemAccess, "MinimumPasswordAge", Some("1".into()))
        );
        assert_eq!(records[1].raw_value.as_deref(), Some("\"Administrator\""));
        assert_eq!(
            records[2],
            ObservedRecord::new(Section::PrivilegeRights, "SeTrustedCredManAccessPrivilege", None)
        );
    }

    #[test]
    fn test_parse_registry_values_with_colons() {
        let text = "[Registry Values]\nMACHINE\\Software\\Microsoft\\Windows NT\\CurrentVersion\\Setup\\RecoveryConsole\\SecurityLevel=4,0\nMACHINE\\System\\CurrentControlSet\\Control\\Lsa\\RestrictRemoteSAM=1,\"O:BAG:BAD:(A;;RC;;;BA)\"\n";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1].machine_name,
            "MACHINE\\System\\CurrentControlSet\\Control\\Lsa\\RestrictRemoteSAM"
        );
        assert_eq!(records[1].raw_value.as_deref(), Some("1,\"O:BAG:BAD:(A;;RC;;;BA)\""));
    }
}
