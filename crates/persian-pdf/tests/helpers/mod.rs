//! Shared fixtures for integration tests.
//!
//! PDFs are built in memory with `lopdf` so no binary fixtures are checked in.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use persian_pdf::types::{Metadata, ParsedDocument};
use persian_pdf::{DocumentParser, LanguageDetector, Result};
use std::io::Read;

/// Build a PDF with one page per entry in `pages`, each drawing its text in
/// Courier with a single `Tj`.
pub fn build_pdf(pages: &[&str], title: Option<&str>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(title) = title {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Producer" => Object::string_literal("persian-pdf tests"),
        });
        doc.trailer.set("Info", info_id);
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// The canonical one-page fixture: "Hello World!" with a title.
pub fn hello_world_pdf() -> Vec<u8> {
    build_pdf(&["Hello World!"], Some("Greeting"))
}

/// Parser that ignores its input and returns fixed text.
pub struct StaticParser(pub String);

impl DocumentParser for StaticParser {
    fn parse_with_hint(&self, reader: &mut dyn Read, _mime_hint: Option<&str>) -> Result<ParsedDocument> {
        let mut sink = Vec::new();
        reader.read_to_end(&mut sink)?;
        Ok(ParsedDocument::new(self.0.clone(), "text/plain", Metadata::default()))
    }
}

/// Detector that always reports the same language.
pub struct StaticDetector(pub Option<&'static str>);

impl LanguageDetector for StaticDetector {
    fn detect(&self, _text: &str) -> Option<String> {
        self.0.map(str::to_string)
    }
}
