//! Standard-font handling and width estimation
//!
//! The report sets everything in the Helvetica family of the standard 14
//! PDF fonts, so nothing is embedded; viewers supply the glyphs. Width
//! estimation drives line wrapping and centering and uses the family's
//! average advance per character.

use super::objects::{PdfDictionary, PdfObject};
use std::collections::BTreeMap;

/// The standard fonts the report uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardFont {
    /// Helvetica regular
    Helvetica,
    /// Helvetica bold
    HelveticaBold,
    /// Helvetica oblique (the footer italic)
    HelveticaOblique,
}

impl StandardFont {
    /// Get the PDF base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Average glyph advance as a fraction of the font size
    fn average_advance(&self) -> f64 {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaOblique => 0.5,
            StandardFont::HelveticaBold => 0.52,
        }
    }
}

/// Estimate the rendered width of a string in points.
pub fn estimate_text_width(text: &str, font: StandardFont, font_size: f64) -> f64 {
    text.chars().count() as f64 * font.average_advance() * font_size
}

/// Tracks which fonts a document uses and assigns their resource names.
#[derive(Debug, Default)]
pub struct FontManager {
    fonts: BTreeMap<StandardFont, String>,
}

impl FontManager {
    /// Create a new font manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the resource name for a font, registering it on first use
    pub fn resource_name(&mut self, font: StandardFont) -> String {
        if let Some(name) = self.fonts.get(&font) {
            return name.clone();
        }
        let name = format!("F{}", self.fonts.len() + 1);
        self.fonts.insert(font, name.clone());
        name
    }

    /// Iterate over registered fonts and their resource names
    pub fn fonts(&self) -> impl Iterator<Item = (StandardFont, &str)> {
        self.fonts.iter().map(|(font, name)| (*font, name.as_str()))
    }
}

/// Create a font dictionary for a standard font
pub fn create_standard_font_dict(font: StandardFont) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Font");
    dict.insert("Subtype", PdfObject::Name("Type1".to_string()));
    dict.insert("BaseFont", PdfObject::Name(font.pdf_name().to_string()));
    dict.insert("Encoding", PdfObject::Name("WinAnsiEncoding".to_string()));
    dict
}
