//! Builds small resume PDFs on disk for text-extraction tests.

#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

const FONT_SIZE: i64 = 12;
const LINE_GAP: i64 = 36;

#[derive(Debug, Clone, Copy)]
pub enum FixtureFont {
    /// Standard-14 font: the parser knows its metrics.
    Courier,
    /// Simple font with no `/Widths` and no built-in metrics, which makes
    /// pdf-extract print a "no widths" diagnostic while parsing.
    UnknownWithoutWidths,
}

/// Writes a PDF with one page per entry of `pages`, one text line per string.
pub fn write_pdf(path: &Path, pages: &[&[&str]], font: FixtureFont) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let base_font = match font {
        FixtureFont::Courier => "Courier",
        FixtureFont::UnknownWithoutWidths => "CustomSans",
    };
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-LINE_GAP).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("write fixture PDF");
}
