//! Layout canvas: cursor, page flow, and transactional trial rendering
//!
//! The document exporter composes over this canvas instead of inheriting
//! from a drawing base class. It exposes the four capabilities the layout
//! protocol needs: cursor position, measured text placement with automatic
//! page breaks, explicit page-break control, and a discardable trial mode
//! for measuring a block before committing it.
//!
//! Page decoration ("Página X/Y" footers and the border frame) is stamped
//! in [`Canvas::finish`], once the total page count is known.

use super::fonts::{estimate_text_width, StandardFont};
use super::renderer::{
    CircleRenderInfo, PageRenderInfo, PdfRenderItem, RectRenderInfo, RgbColor, TextRenderInfo,
};

/// Baseline offset from the top of a text line, as a fraction of the font
/// size.
const ASCENT: f64 = 0.8;

/// Inset of the decorative page border from the page edges.
const BORDER_INSET: f64 = 20.0;
/// Stroke width of the page border.
const BORDER_WIDTH: f64 = 1.5;
/// The platform's primary blue, used for the border frame.
const BORDER_COLOR: RgbColor = RgbColor {
    r: 15.0 / 255.0,
    g: 108.0 / 255.0,
    b: 191.0 / 255.0,
};

/// Page geometry for the canvas.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    /// Left margin in points
    pub margin_left: f64,
    /// Right margin in points
    pub margin_right: f64,
    /// Top margin in points
    pub margin_top: f64,
    /// Bottom margin in points (content limit; the footer sits below it)
    pub margin_bottom: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::a4()
    }
}

impl CanvasConfig {
    /// A4 pages with one-inch margins
    pub fn a4() -> Self {
        Self {
            page_width: 595.276,
            page_height: 841.89,
            margin_left: 72.0,
            margin_right: 72.0,
            margin_top: 72.0,
            margin_bottom: 72.0,
        }
    }
}

/// Snapshot taken when a trial begins, restored on rollback.
#[derive(Debug, Clone, Copy)]
struct TrialMark {
    pages: usize,
    items: usize,
    cursor: f64,
}

/// The layout canvas: a growing list of pages plus a top-based cursor.
#[derive(Debug)]
pub struct Canvas {
    config: CanvasConfig,
    pages: Vec<PageRenderInfo>,
    cursor: f64,
    trial: Option<TrialMark>,
}

impl Canvas {
    /// Create an empty canvas; the first drawing call opens page one
    pub fn new(config: CanvasConfig) -> Self {
        let cursor = config.margin_top;
        Self {
            config,
            pages: Vec::new(),
            cursor,
            trial: None,
        }
    }

    /// Page geometry
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Width available between the left and right margins
    pub fn content_width(&self) -> f64 {
        self.config.page_width - self.config.margin_left - self.config.margin_right
    }

    /// Current cursor position, measured from the top of the page
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Move the cursor to an absolute position on the current page
    pub fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    /// Advance the cursor without drawing
    pub fn advance(&mut self, dy: f64) {
        self.cursor += dy;
    }

    /// Index of the page the cursor is on
    pub fn page_index(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }

    /// Number of pages laid out so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lowest cursor position content may occupy
    pub fn bottom_limit(&self) -> f64 {
        self.config.page_height - self.config.margin_bottom
    }

    /// Vertical space left on the current page
    pub fn remaining_space(&self) -> f64 {
        self.bottom_limit() - self.cursor
    }

    /// Start a fresh page and reset the cursor to the top margin
    pub fn add_page(&mut self) {
        self.pages
            .push(PageRenderInfo::new(self.config.page_width, self.config.page_height));
        self.cursor = self.config.margin_top;
    }

    fn current_page(&mut self) -> &mut PageRenderInfo {
        if self.pages.is_empty() {
            self.add_page();
        }
        self.pages.last_mut().expect("page exists after add_page")
    }

    /// Break text into lines that fit `width`, splitting on whitespace and
    /// hard-breaking any single word wider than a line.
    pub fn wrap_text(text: &str, font: StandardFont, size: f64, width: f64) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();

        for word in text.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if estimate_text_width(&candidate, font, size) <= width {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            // The word now sits alone on the line; a word wider than the
            // line is broken mid-word.
            line = word.to_string();
            while estimate_text_width(&line, font, size) > width && line.chars().count() > 1 {
                let fit = chars_that_fit(&line, font, size, width).max(1);
                let rest: String = line.chars().skip(fit).collect();
                line.truncate(line.chars().take(fit).map(char::len_utf8).sum());
                lines.push(std::mem::replace(&mut line, rest));
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    /// Draw one line of text at the cursor, without wrapping or advancing
    fn push_text(&mut self, text: &str, font: StandardFont, size: f64, x: f64, color: RgbColor) {
        let y = self.cursor + size * ASCENT;
        self.current_page().push(PdfRenderItem::Text(TextRenderInfo {
            text: text.to_string(),
            x,
            y,
            font,
            font_size: size,
            color,
        }));
    }

    /// Draw wrapped text starting at the cursor, breaking to fresh pages
    /// when a line would cross the bottom margin. The cursor ends below
    /// the last line.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_wrapped(
        &mut self,
        text: &str,
        font: StandardFont,
        size: f64,
        x: f64,
        width: f64,
        line_height: f64,
        color: RgbColor,
    ) {
        for line in Self::wrap_text(text, font, size, width) {
            if self.cursor + line_height > self.bottom_limit() {
                self.add_page();
            }
            self.push_text(&line, font, size, x, color);
            self.cursor += line_height;
        }
    }

    /// Draw a single horizontally centered line and advance the cursor
    pub fn draw_centered(
        &mut self,
        text: &str,
        font: StandardFont,
        size: f64,
        line_height: f64,
        color: RgbColor,
    ) {
        let text_width = estimate_text_width(text, font, size);
        let x = self.config.margin_left + (self.content_width() - text_width).max(0.0) / 2.0;
        self.push_text(text, font, size, x, color);
        self.cursor += line_height;
    }

    /// Draw a rectangle on the current page (layout coordinates)
    pub fn draw_rect(&mut self, rect: RectRenderInfo) {
        self.current_page().push(PdfRenderItem::Rect(rect));
    }

    /// Draw a circle marker on the current page (layout coordinates)
    pub fn draw_circle(&mut self, circle: CircleRenderInfo) {
        self.current_page().push(PdfRenderItem::Circle(circle));
    }

    /// Begin a discardable trial render.
    ///
    /// Everything drawn until [`rollback_trial`](Self::rollback_trial) is
    /// recorded normally, so cursor movement and page breaks behave
    /// exactly as a committed render would; the rollback then removes
    /// every trace. Trials do not nest.
    pub fn begin_trial(&mut self) {
        debug_assert!(self.trial.is_none(), "trials do not nest");
        if self.pages.is_empty() {
            self.add_page();
        }
        self.trial = Some(TrialMark {
            pages: self.pages.len(),
            items: self.pages.last().map(|p| p.items.len()).unwrap_or(0),
            cursor: self.cursor,
        });
    }

    /// Discard everything drawn since [`begin_trial`](Self::begin_trial)
    /// and restore the cursor and page state.
    pub fn rollback_trial(&mut self) {
        let Some(mark) = self.trial.take() else {
            return;
        };
        self.pages.truncate(mark.pages);
        if let Some(page) = self.pages.last_mut() {
            page.items.truncate(mark.items);
        }
        self.cursor = mark.cursor;
    }

    /// Finish layout: stamp the border frame and the "X/Y" footer on
    /// every page, then hand the pages over for serialization.
    pub fn finish(mut self, page_word: &str) -> Vec<PageRenderInfo> {
        let total = self.pages.len();
        let config = self.config.clone();

        for (index, page) in self.pages.iter_mut().enumerate() {
            page.push(PdfRenderItem::Rect(RectRenderInfo {
                x: BORDER_INSET,
                y: BORDER_INSET,
                width: config.page_width - 2.0 * BORDER_INSET,
                height: config.page_height - 2.0 * BORDER_INSET,
                fill: None,
                stroke: Some(BORDER_COLOR),
                stroke_width: BORDER_WIDTH,
            }));

            let footer = format!("{page_word} {}/{}", index + 1, total);
            let size = 8.0;
            let font = StandardFont::HelveticaOblique;
            let text_width = estimate_text_width(&footer, font, size);
            page.push(PdfRenderItem::Text(TextRenderInfo {
                text: footer,
                x: (config.page_width - text_width) / 2.0,
                y: config.page_height - BORDER_INSET + size,
                font,
                font_size: size,
                color: RgbColor::black(),
            }));
        }

        self.pages
    }
}

/// Largest char count of `text`'s prefix that fits in `width`.
fn chars_that_fit(text: &str, font: StandardFont, size: f64, width: f64) -> usize {
    let per_char = estimate_text_width("M", font, size);
    if per_char <= 0.0 {
        return text.chars().count();
    }
    ((width / per_char).floor() as usize).min(text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_canvas() -> Canvas {
        Canvas::new(CanvasConfig {
            page_width: 200.0,
            page_height: 200.0,
            margin_left: 20.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 20.0,
        })
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = Canvas::wrap_text(
            "one two three four five six",
            StandardFont::Helvetica,
            10.0,
            60.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(estimate_text_width(line, StandardFont::Helvetica, 10.0) <= 60.0);
        }
    }

    #[test]
    fn test_wrap_breaks_oversized_word() {
        let lines = Canvas::wrap_text(
            "supercalifragilisticexpialidocious",
            StandardFont::Helvetica,
            10.0,
            50.0,
        );
        assert!(lines.len() > 1);
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, "supercalifragilisticexpialidocious");
    }

    #[test]
    fn test_auto_page_break_during_wrapped_draw() {
        let mut canvas = small_canvas();
        canvas.add_page();
        // 160pt of usable height, 20pt lines: a 20-line paragraph needs
        // three pages.
        let text = vec!["word"; 200].join(" ");
        canvas.draw_wrapped(
            &text,
            StandardFont::Helvetica,
            10.0,
            20.0,
            160.0,
            20.0,
            RgbColor::black(),
        );
        assert!(canvas.page_count() > 1);
    }

    #[test]
    fn test_trial_rollback_restores_everything() {
        let mut canvas = small_canvas();
        canvas.add_page();
        canvas.advance(30.0);
        let cursor_before = canvas.cursor();
        let pages_before = canvas.page_count();

        canvas.begin_trial();
        let text = vec!["word"; 300].join(" ");
        canvas.draw_wrapped(
            &text,
            StandardFont::Helvetica,
            10.0,
            20.0,
            160.0,
            20.0,
            RgbColor::black(),
        );
        assert!(canvas.page_count() > pages_before);
        canvas.rollback_trial();

        assert_eq!(canvas.page_count(), pages_before);
        assert_eq!(canvas.cursor(), cursor_before);
        assert!(canvas.pages.last().unwrap().items.is_empty());
    }

    #[test]
    fn test_finish_stamps_every_page() {
        let mut canvas = small_canvas();
        canvas.add_page();
        canvas.add_page();
        canvas.add_page();
        let pages = canvas.finish("Página");

        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            // Border rect plus footer text
            assert_eq!(page.items.len(), 2);
            match &page.items[1] {
                PdfRenderItem::Text(t) => {
                    assert_eq!(t.text, format!("Página {}/3", i + 1));
                }
                other => panic!("expected footer text, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_centered_text_is_inside_margins() {
        let mut canvas = small_canvas();
        canvas.add_page();
        canvas.draw_centered(
            "Title",
            StandardFont::HelveticaBold,
            20.0,
            24.0,
            RgbColor::black(),
        );
        match &canvas.pages[0].items[0] {
            PdfRenderItem::Text(t) => {
                assert!(t.x >= canvas.config.margin_left);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
