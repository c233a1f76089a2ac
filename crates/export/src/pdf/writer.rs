//! PDF file writer
//!
//! Serializes laid-out pages into a complete PDF file: header, indirect
//! objects, content streams (flate-compressed), cross-reference table,
//! and trailer.

use super::fonts::{create_standard_font_dict, FontManager};
use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use super::renderer::{render_page, PageRenderInfo};
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF generation
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid document structure
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for PDF generation
pub type Result<T> = std::result::Result<T, PdfError>;

/// Document information dictionary entries.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
}

impl DocumentInfo {
    /// Convert to a PDF dictionary
    fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        if let Some(ref title) = self.title {
            dict.insert("Title", PdfObject::text(title));
        }
        if let Some(ref author) = self.author {
            dict.insert("Author", PdfObject::text(author));
        }
        if let Some(ref subject) = self.subject {
            dict.insert("Subject", PdfObject::text(subject));
        }
        if let Some(ref creator) = self.creator {
            dict.insert("Creator", PdfObject::text(creator));
        }
        dict
    }
}

/// An object in the PDF file with its byte offset
#[derive(Debug)]
struct ObjectEntry {
    obj_num: u32,
    offset: u64,
}

/// Low-level PDF file writer: objects, xref, trailer.
struct PdfFileWriter<W: Write> {
    writer: W,
    position: u64,
    objects: Vec<ObjectEntry>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfFileWriter<W> {
    fn new(writer: W, compress: bool) -> Self {
        Self {
            writer,
            position: 0,
            objects: Vec::new(),
            next_obj_num: 1,
            compress,
        }
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_str("%PDF-1.4\n")?;
        // Binary marker so transports treat the file as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    fn write_object(&mut self, obj_num: u32, object: PdfObject) -> Result<()> {
        let offset = self.position;
        self.write_str(&format!("{} 0 obj\n", obj_num))?;

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&object)?;
        self.write_bytes(&serializer.into_inner())?;

        self.write_str("\nendobj\n")?;
        self.objects.push(ObjectEntry { obj_num, offset });
        Ok(())
    }

    fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.compressed {
            stream = compress_stream(stream)?;
        }
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));
        self.write_object(obj_num, PdfObject::Stream(stream))
    }

    fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: u32) -> Result<()> {
        let xref_offset = self.position;
        self.objects.sort_by_key(|e| e.obj_num);
        let entries: Vec<_> = self.objects.iter().map(|e| (e.obj_num, e.offset)).collect();

        self.write_str("xref\n")?;
        self.write_str(&format!("0 {}\n", self.next_obj_num))?;
        self.write_str("0000000000 65535 f \n")?;

        let mut expected = 1u32;
        for (obj_num, offset) in entries {
            while expected < obj_num {
                self.write_str("0000000000 65535 f \n")?;
                expected += 1;
            }
            self.write_str(&format!("{:010} 00000 n \n", offset))?;
            expected = obj_num + 1;
        }

        self.write_str("trailer\n")?;
        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(self.next_obj_num as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref, 0));
        trailer.insert("Info", PdfObject::Reference(info_ref, 0));

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&PdfObject::Dictionary(trailer))?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\n")?;

        self.write_str("startxref\n")?;
        self.write_str(&format!("{}\n", xref_offset))?;
        self.write_str("%%EOF\n")?;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Compress a stream with flate and mark it FlateDecode.
fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&stream.data)?;
    stream.data = encoder.finish()?;
    stream.compressed = true;
    stream
        .dict
        .insert("Filter", PdfObject::Name("FlateDecode".to_string()));
    Ok(stream)
}

/// High-level document writer: pages in, complete PDF file out.
pub struct PdfDocumentWriter {
    info: DocumentInfo,
    compress: bool,
}

impl PdfDocumentWriter {
    /// Create a writer with the given document information
    pub fn new(info: DocumentInfo) -> Self {
        Self {
            info,
            compress: true,
        }
    }

    /// Disable content-stream compression (useful for inspecting output)
    pub fn without_compression(mut self) -> Self {
        self.compress = false;
        self
    }

    /// Write a complete PDF document to `writer`
    pub fn write<W: Write>(&self, pages: &[PageRenderInfo], writer: W) -> Result<()> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }

        let mut pdf = PdfFileWriter::new(writer, self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();

        // Render all content first so the font set is known
        let mut fonts = FontManager::new();
        let content_streams: Vec<_> = pages
            .iter()
            .map(|page| render_page(page, &mut fonts))
            .collect();

        let font_refs: Vec<(String, _, u32)> = fonts
            .fonts()
            .map(|(font, name)| (name.to_string(), font, pdf.allocate_object()))
            .collect();

        let page_refs: Vec<u32> = pages.iter().map(|_| pdf.allocate_object()).collect();
        let content_refs: Vec<u32> = pages.iter().map(|_| pdf.allocate_object()).collect();

        // Catalog
        let mut catalog = PdfDictionary::new().with_type("Catalog");
        catalog.insert("Pages", PdfObject::Reference(pages_ref, 0));
        pdf.write_object(catalog_ref, PdfObject::Dictionary(catalog))?;

        // Page tree
        let mut pages_dict = PdfDictionary::new().with_type("Pages");
        pages_dict.insert(
            "Kids",
            PdfObject::Array(
                page_refs
                    .iter()
                    .map(|&r| PdfObject::Reference(r, 0))
                    .collect(),
            ),
        );
        pages_dict.insert("Count", PdfObject::Integer(page_refs.len() as i64));
        pdf.write_object(pages_ref, PdfObject::Dictionary(pages_dict))?;

        // Info dictionary
        pdf.write_object(info_ref, PdfObject::Dictionary(self.info.to_dictionary()))?;

        // Fonts
        for (_, font, font_ref) in &font_refs {
            pdf.write_object(
                *font_ref,
                PdfObject::Dictionary(create_standard_font_dict(*font)),
            )?;
        }

        // Pages and their content streams
        for (i, (page, content)) in pages.iter().zip(content_streams).enumerate() {
            pdf.write_stream_object(content_refs[i], PdfStream::new(content.into_bytes()))?;

            let mut page_dict = PdfDictionary::new().with_type("Page");
            page_dict.insert("Parent", PdfObject::Reference(pages_ref, 0));
            page_dict.insert(
                "MediaBox",
                PdfObject::Array(vec![
                    PdfObject::Real(0.0),
                    PdfObject::Real(0.0),
                    PdfObject::Real(page.width),
                    PdfObject::Real(page.height),
                ]),
            );
            page_dict.insert("Contents", PdfObject::Reference(content_refs[i], 0));

            let mut resources = PdfDictionary::new();
            if !font_refs.is_empty() {
                let mut font_dict = PdfDictionary::new();
                for (name, _, font_ref) in &font_refs {
                    font_dict.insert(name.clone(), PdfObject::Reference(*font_ref, 0));
                }
                resources.insert("Font", PdfObject::Dictionary(font_dict));
            }
            resources.insert(
                "ProcSet",
                PdfObject::Array(vec![
                    PdfObject::Name("PDF".to_string()),
                    PdfObject::Name("Text".to_string()),
                ]),
            );
            page_dict.insert("Resources", PdfObject::Dictionary(resources));

            pdf.write_object(page_refs[i], PdfObject::Dictionary(page_dict))?;
        }

        pdf.write_xref_and_trailer(catalog_ref, info_ref)?;
        pdf.finish()
    }
}
