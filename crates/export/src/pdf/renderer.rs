//! Render items and their conversion to content-stream operators
//!
//! Pages are described as flat lists of render items in paint order. The
//! question blocks rely on painter's-algorithm semantics (text, then an
//! opaque background rectangle, then the text again on top), so items are
//! emitted strictly in insertion order rather than batched by kind.

use super::content::ContentStream;
use super::fonts::{FontManager, StandardFont};

/// A color in RGB format (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbColor {
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub fn black() -> Self {
        Self::from_u8(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::from_u8(255, 255, 255)
    }
}

/// Text positioned by its baseline, in layout coordinates (y from the top
/// of the page).
#[derive(Debug, Clone)]
pub struct TextRenderInfo {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: StandardFont,
    pub font_size: f64,
    pub color: RgbColor,
}

/// Rectangle in layout coordinates (y from the top, like the cursor).
#[derive(Debug, Clone, Copy)]
pub struct RectRenderInfo {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color (opaque when set)
    pub fill: Option<RgbColor>,
    /// Stroke color
    pub stroke: Option<RgbColor>,
    pub stroke_width: f64,
}

/// Stroked circle marker, centered in layout coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CircleRenderInfo {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: RgbColor,
    pub width: f64,
}

/// One drawable element of a page
#[derive(Debug, Clone)]
pub enum PdfRenderItem {
    Text(TextRenderInfo),
    Rect(RectRenderInfo),
    Circle(CircleRenderInfo),
}

/// A laid-out page ready for serialization
#[derive(Debug, Clone)]
pub struct PageRenderInfo {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    /// Render items in paint order
    pub items: Vec<PdfRenderItem>,
}

impl PageRenderInfo {
    /// Create a new page with the given dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
        }
    }

    /// Append a render item
    pub fn push(&mut self, item: PdfRenderItem) {
        self.items.push(item);
    }
}

/// Convert a page's items to a content stream, registering fonts as they
/// are encountered.
pub fn render_page(page: &PageRenderInfo, fonts: &mut FontManager) -> ContentStream {
    let mut content = ContentStream::new();
    let page_height = page.height;

    for item in &page.items {
        match item {
            PdfRenderItem::Text(text) => {
                let name = fonts.resource_name(text.font);
                content.begin_text();
                content.set_font(&name, text.font_size);
                content.set_fill_rgb(text.color.r, text.color.g, text.color.b);
                content.set_text_matrix(1.0, 0.0, 0.0, 1.0, text.x, page_height - text.y);
                content.show_text(&text.text);
                content.end_text();
            }
            PdfRenderItem::Rect(rect) => {
                render_rect(&mut content, rect, page_height);
            }
            PdfRenderItem::Circle(circle) => {
                render_circle(&mut content, circle, page_height);
            }
        }
    }

    content
}

fn render_rect(content: &mut ContentStream, rect: &RectRenderInfo, page_height: f64) {
    content.save_state();
    let pdf_y = page_height - rect.y - rect.height;

    if let Some(fill) = rect.fill {
        content.set_fill_rgb(fill.r, fill.g, fill.b);
    }
    if let Some(stroke) = rect.stroke {
        content.set_stroke_rgb(stroke.r, stroke.g, stroke.b);
        content.set_line_width(rect.stroke_width);
    }
    content.rect(rect.x, pdf_y, rect.width, rect.height);
    match (rect.fill.is_some(), rect.stroke.is_some()) {
        (true, true) => {
            content.fill_and_stroke();
        }
        (true, false) => {
            content.fill();
        }
        (false, true) => {
            content.stroke();
        }
        (false, false) => {}
    }
    content.restore_state();
}

/// Approximate a circle with four Bézier arcs.
fn render_circle(content: &mut ContentStream, circle: &CircleRenderInfo, page_height: f64) {
    // Magic constant for a cubic Bézier quarter circle
    const K: f64 = 0.552_284_749_831;

    let r = circle.radius;
    let k = r * K;
    let cx = circle.cx;
    let cy = page_height - circle.cy;

    content.save_state();
    content.set_stroke_rgb(circle.color.r, circle.color.g, circle.color.b);
    content.set_line_width(circle.width);
    content.move_to(cx + r, cy);
    content.curve_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.curve_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.curve_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.curve_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
    content.stroke();
    content.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_render_in_insertion_order() {
        let mut page = PageRenderInfo::new(612.0, 792.0);
        page.push(PdfRenderItem::Text(TextRenderInfo {
            text: "under".to_string(),
            x: 10.0,
            y: 20.0,
            font: StandardFont::Helvetica,
            font_size: 12.0,
            color: RgbColor::black(),
        }));
        page.push(PdfRenderItem::Rect(RectRenderInfo {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
            fill: Some(RgbColor::white()),
            stroke: None,
            stroke_width: 0.0,
        }));
        page.push(PdfRenderItem::Text(TextRenderInfo {
            text: "over".to_string(),
            x: 10.0,
            y: 20.0,
            font: StandardFont::Helvetica,
            font_size: 12.0,
            color: RgbColor::black(),
        }));

        let mut fonts = FontManager::new();
        let content = String::from_utf8(render_page(&page, &mut fonts).into_bytes()).unwrap();

        let under = content.find("(under) Tj").unwrap();
        let rect = content.find(" re\n").unwrap();
        let over = content.find("(over) Tj").unwrap();
        assert!(under < rect && rect < over);
    }

    #[test]
    fn test_y_axis_flips_to_pdf_space() {
        let mut page = PageRenderInfo::new(600.0, 800.0);
        page.push(PdfRenderItem::Text(TextRenderInfo {
            text: "x".to_string(),
            x: 72.0,
            y: 100.0,
            font: StandardFont::Helvetica,
            font_size: 12.0,
            color: RgbColor::black(),
        }));
        let mut fonts = FontManager::new();
        let content = String::from_utf8(render_page(&page, &mut fonts).into_bytes()).unwrap();
        assert!(content.contains("1 0 0 1 72 700 Tm"));
    }

    #[test]
    fn test_circle_emits_four_curves() {
        let mut page = PageRenderInfo::new(600.0, 800.0);
        page.push(PdfRenderItem::Circle(CircleRenderInfo {
            cx: 100.0,
            cy: 100.0,
            radius: 2.0,
            color: RgbColor::black(),
            width: 0.5,
        }));
        let mut fonts = FontManager::new();
        let content = String::from_utf8(render_page(&page, &mut fonts).into_bytes()).unwrap();
        assert_eq!(content.matches(" c\n").count(), 4);
    }
}
