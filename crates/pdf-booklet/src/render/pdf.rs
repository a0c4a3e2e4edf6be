//! PDF output surface
//!
//! Builds a lopdf document page by page from raw content stream operators
//! and serialises it into a writer when finalized. Text uses the standard-14
//! Courier fonts, so no font program is embedded.

use super::surface::Surface;
use crate::constants::{BOLD_FONT_NAME, NORMAL_FONT_NAME};
use crate::geometry::PageGeometry;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

const NORMAL_FONT_KEY: &str = "F1";
const BOLD_FONT_KEY: &str = "F2";

pub struct PdfSurface<W: Write> {
    writer: W,
    document: Document,
    pages_tree_id: ObjectId,
    resources_id: ObjectId,
    page_refs: Vec<Object>,
    /// Operators of the page being drawn
    content: String,
    page_width: f32,
    page_height: f32,
    font_size: f32,
    title: Option<String>,
    finalized: bool,
}

impl<W: Write> PdfSurface<W> {
    pub fn new(writer: W, geometry: &PageGeometry) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_tree_id = document.new_object_id();

        let normal_font_id = document.add_object(builtin_font(NORMAL_FONT_NAME));
        let bold_font_id = document.add_object(builtin_font(BOLD_FONT_NAME));

        let mut fonts = Dictionary::new();
        fonts.set(NORMAL_FONT_KEY, Object::Reference(normal_font_id));
        fonts.set(BOLD_FONT_KEY, Object::Reference(bold_font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));
        let resources_id = document.add_object(resources);

        Self {
            writer,
            document,
            pages_tree_id,
            resources_id,
            page_refs: Vec::new(),
            content: String::new(),
            page_width: geometry.page_width,
            page_height: geometry.page_height,
            font_size: geometry.font_size,
            title: None,
            finalized: false,
        }
    }

    /// Set the document title written to the Info dictionary
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Number of pages closed so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Give back the writer, e.g. to inspect an in-memory buffer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finalized {
            return Err(BookletError::Config(
                "Surface already finalized".to_string(),
            ));
        }
        Ok(())
    }

    /// Turn the pending operators into a page object
    fn close_page(&mut self) {
        let content = std::mem::take(&mut self.content);
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_width),
                Object::Real(self.page_height),
            ]),
        );
        page_dict.set("Resources", Object::Reference(self.resources_id));
        page_dict.set("Contents", Object::Reference(content_id));

        let page_id = self.document.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
    }

    /// Create pages tree, catalog and info, finalize document structure
    fn finalize_document(&mut self) {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs.clone())),
            ("Count", Object::Integer(count)),
        ]);
        self.document
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.document.trailer.set("Root", catalog_id);

        let mut info = Dictionary::new();
        info.set("Producer", Object::string_literal("pdft booklet"));
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(encode_win_ansi(title)));
        }
        let info_id = self.document.add_object(info);
        self.document.trailer.set("Info", info_id);
    }
}

impl<W: Write> Surface for PdfSurface<W> {
    fn set_stroke(&mut self, width: f32, color: Rgb) -> Result<()> {
        self.ensure_open()?;
        self.content.push_str(&format!(
            "{} w\n{} {} {} RG\n",
            width, color.r, color.g, color.b
        ));
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()> {
        self.ensure_open()?;
        self.content
            .push_str(&format!("{} {} m {} {} l S\n", x1, y1, x2, y2));
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, bold: bool) -> Result<()> {
        self.ensure_open()?;
        let font = if bold { BOLD_FONT_KEY } else { NORMAL_FONT_KEY };
        self.content.push_str(&format!(
            "BT /{} {} Tf {} {} Td ({}) Tj ET\n",
            font,
            self.font_size,
            x,
            y,
            escape_text(text)
        ));
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.close_page();
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.ensure_open()?;
        if !self.content.is_empty() {
            self.close_page();
        }
        self.finalize_document();
        self.finalized = true;

        self.document.save_to(&mut self.writer)?;
        self.writer.flush()?;
        log::debug!("Wrote PDF with {} page(s)", self.page_refs.len());
        Ok(())
    }
}

/// Type1 font dictionary for one of the standard-14 fonts
fn builtin_font(base_font: &str) -> Dictionary {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(base_font.as_bytes().to_vec()));
    font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    font_dict
}

/// WinAnsi code points 0x80..=0x9F that differ from Latin-1
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20ac}', 0x80),
    ('\u{201a}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201e}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02c6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017d}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201c}', 0x93),
    ('\u{201d}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02dc}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203a}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017e}', 0x9E),
    ('\u{0178}', 0x9F),
];

/// Single WinAnsi byte for `ch`, if the encoding has one
fn win_ansi_byte(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => u8::try_from(u32::from(ch)).ok(),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, byte)| byte),
    }
}

/// Escape text for a PDF literal string in WinAnsi encoding.
///
/// Bytes above ASCII are written as octal escapes, other whitespace becomes a
/// plain space and anything the encoding lacks becomes `?`. Every character
/// maps to exactly one glyph so drawn widths match the layout metrics.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ' '..='~' => escaped.push(ch),
            c => match win_ansi_byte(c) {
                Some(byte) => escaped.push_str(&format!("\\{:03o}", byte)),
                None if c.is_whitespace() => escaped.push(' '),
                None => escaped.push('?'),
            },
        }
    }
    escaped
}

fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| win_ansi_byte(ch).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_text("hello world"), "hello world");
    }

    #[test]
    fn test_escape_delimiters() {
        assert_eq!(escape_text(r"(a)\b"), r"\(a\)\\b");
    }

    #[test]
    fn test_escape_latin1_and_others() {
        assert_eq!(escape_text("é"), "\\351");
        assert_eq!(escape_text("\t"), " ");
        assert_eq!(escape_text("日"), "?");
    }

    #[test]
    fn test_escape_win_ansi_punctuation() {
        assert_eq!(escape_text("don’t"), "don\\222t");
        assert_eq!(escape_text("a — b"), "a \\227 b");
        assert_eq!(escape_text("“x” …"), "\\223x\\224 \\205");
        assert_eq!(escape_text("5€"), "5\\200");
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(
            encode_win_ansi("Aé’—日"),
            vec![b'A', 0xE9, 0x92, 0x97, b'?']
        );
    }
}
