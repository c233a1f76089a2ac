//! PDF content stream generation
//!
//! Builder for the graphics and text operator streams that define a
//! page's appearance. Only the operators the report uses are exposed:
//! graphics state, RGB color, paths (lines, Bézier curves, rectangles),
//! and simple positioned text.

use std::io::Write;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    /// Create a new empty content stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content stream data
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Save the current graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.write_line("q");
        self
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.write_line("Q");
        self
    }

    /// Set the line width (w)
    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.write_fmt(format_args!("{} w\n", Self::fmt_num(width)));
        self
    }

    /// Set the fill color to RGB (rg)
    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} rg\n",
            Self::fmt_num(r),
            Self::fmt_num(g),
            Self::fmt_num(b)
        ));
        self
    }

    /// Set the stroke color to RGB (RG)
    pub fn set_stroke_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} RG\n",
            Self::fmt_num(r),
            Self::fmt_num(g),
            Self::fmt_num(b)
        ));
        self
    }

    /// Move to a point (m)
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_fmt(format_args!("{} {} m\n", Self::fmt_num(x), Self::fmt_num(y)));
        self
    }

    /// Cubic Bézier curve (c)
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} {} {} {} c\n",
            Self::fmt_num(x1),
            Self::fmt_num(y1),
            Self::fmt_num(x2),
            Self::fmt_num(y2),
            Self::fmt_num(x3),
            Self::fmt_num(y3)
        ));
        self
    }

    /// Rectangle (re)
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} {} re\n",
            Self::fmt_num(x),
            Self::fmt_num(y),
            Self::fmt_num(width),
            Self::fmt_num(height)
        ));
        self
    }

    /// Close the current subpath (h)
    pub fn close_path(&mut self) -> &mut Self {
        self.write_line("h");
        self
    }

    /// Stroke the current path (S)
    pub fn stroke(&mut self) -> &mut Self {
        self.write_line("S");
        self
    }

    /// Fill the current path (f)
    pub fn fill(&mut self) -> &mut Self {
        self.write_line("f");
        self
    }

    /// Fill and stroke the current path (B)
    pub fn fill_and_stroke(&mut self) -> &mut Self {
        self.write_line("B");
        self
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Set the font and size (Tf)
    pub fn set_font(&mut self, font_name: &str, size: f64) -> &mut Self {
        self.write_fmt(format_args!("/{} {} Tf\n", font_name, Self::fmt_num(size)));
        self
    }

    /// Set the text matrix (Tm)
    pub fn set_text_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} {} {} {} Tm\n",
            Self::fmt_num(a),
            Self::fmt_num(b),
            Self::fmt_num(c),
            Self::fmt_num(d),
            Self::fmt_num(e),
            Self::fmt_num(f)
        ));
        self
    }

    /// Show a text string (Tj)
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.write_pdf_string(text);
        self.write_line(" Tj");
        self
    }

    /// Write a line to the content stream
    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    /// Write formatted data
    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.data.write_fmt(args);
    }

    /// Write a PDF string, mapping text to WinAnsi bytes.
    ///
    /// The report's fonts declare WinAnsiEncoding, so Latin-1 characters
    /// map to their code points, the cp1252 punctuation block to its slots,
    /// and anything outside the encoding degrades to '?'.
    fn write_pdf_string(&mut self, s: &str) {
        self.data.push(b'(');
        for c in s.chars() {
            let byte = win_ansi_byte(c);
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                0x0A => self.data.extend_from_slice(b"\\n"),
                0x0D => self.data.extend_from_slice(b"\\r"),
                0x09 => self.data.extend_from_slice(b"\\t"),
                0x20..=0x7E => self.data.push(byte),
                _ => {
                    let _ = write!(self.data, "\\{:03o}", byte);
                }
            }
        }
        self.data.push(b')');
    }

    /// Format a number for PDF output
    fn fmt_num(n: f64) -> String {
        if n.fract() == 0.0 {
            format!("{:.0}", n)
        } else {
            let s = format!("{:.4}", n);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

/// Map a character to its WinAnsi (cp1252) byte, '?' when unmapped.
fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{0}'..='\u{7F}' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u8,
        '€' => 0x80,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '…' => 0x85,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_fill() {
        let mut cs = ContentStream::new();
        cs.save_state()
            .set_fill_rgb(1.0, 0.0, 0.0)
            .rect(100.0, 100.0, 200.0, 50.0)
            .fill()
            .restore_state();

        let content = String::from_utf8(cs.into_bytes()).unwrap();
        assert!(content.contains("1 0 0 rg"));
        assert!(content.contains("100 100 200 50 re"));
        assert!(content.contains("f\n"));
    }

    #[test]
    fn test_text_block() {
        let mut cs = ContentStream::new();
        cs.begin_text()
            .set_font("F1", 12.0)
            .set_text_matrix(1.0, 0.0, 0.0, 1.0, 72.0, 720.0)
            .show_text("Hello")
            .end_text();

        let content = String::from_utf8(cs.into_bytes()).unwrap();
        assert!(content.contains("/F1 12 Tf"));
        assert!(content.contains("1 0 0 1 72 720 Tm"));
        assert!(content.contains("(Hello) Tj"));
    }

    #[test]
    fn test_spanish_text_maps_to_win_ansi() {
        let mut cs = ContentStream::new();
        cs.show_text("Página");
        let bytes = cs.into_bytes();
        // 'á' is 0xE1 in WinAnsi, escaped as octal \341
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains(r"(P\341gina)"));
    }

    #[test]
    fn test_parens_escaped() {
        let mut cs = ContentStream::new();
        cs.show_text("a(b)c");
        let bytes = cs.into_bytes();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains(r"(a\(b\)c)"));
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(ContentStream::fmt_num(1.0), "1");
        assert_eq!(ContentStream::fmt_num(3.14159), "3.1416");
        assert_eq!(ContentStream::fmt_num(0.5), "0.5");
    }
}
