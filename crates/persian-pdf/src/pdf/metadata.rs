//! PDF metadata extraction from the trailer `Info` dictionary.

use super::error::Result;
use crate::types::Metadata;
use lopdf::{Dictionary, Document, Object};

/// Read document-level metadata (title, author, page count, ...) from `document`.
///
/// A missing or malformed `Info` dictionary is not an error; the
/// corresponding fields are simply left empty.
pub fn extract_metadata(document: &Document) -> Result<Metadata> {
    let mut metadata = Metadata {
        pdf_version: Some(document.version.clone()),
        page_count: Some(document.get_pages().len()),
        ..Default::default()
    };

    if let Some(info) = info_dictionary(document) {
        metadata.title = text_entry(info, b"Title");
        metadata.author = text_entry(info, b"Author");
        metadata.subject = text_entry(info, b"Subject");
        metadata.creator = text_entry(info, b"Creator");
        metadata.producer = text_entry(info, b"Producer");
    }

    Ok(metadata)
}

fn info_dictionary(document: &Document) -> Option<&Dictionary> {
    let info = document.trailer.get(b"Info").ok()?;
    let info = match info {
        Object::Reference(id) => document.get_object(*id).ok()?,
        other => other,
    };
    info.as_dict().ok()
}

fn text_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => {
            let text = decode_text_string(bytes);
            let trimmed = text.trim_matches(char::from(0)).trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Decode a PDF text string (UTF-16BE with BOM, UTF-8 with BOM, or a
/// single-byte encoding treated as Latin-1).
pub(crate) fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(rest).into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
