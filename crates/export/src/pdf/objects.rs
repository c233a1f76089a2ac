//! PDF object model and serializer
//!
//! The small set of PDF object types the report emits, with a serializer
//! producing the on-disk syntax from the PDF Reference.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// PDF object types
#[derive(Debug, Clone)]
pub enum PdfObject {
    /// Integer number
    Integer(i64),
    /// Real (floating-point) number
    Real(f64),
    /// Literal string enclosed in parentheses
    String(Vec<u8>),
    /// Name object (starts with /)
    Name(String),
    /// Array of objects
    Array(Vec<PdfObject>),
    /// Dictionary (key-value pairs)
    Dictionary(PdfDictionary),
    /// Stream (dictionary + byte data)
    Stream(PdfStream),
    /// Indirect reference (object number, generation number)
    Reference(u32, u16),
}

impl PdfObject {
    /// Create a literal string object from text
    pub fn text(s: &str) -> Self {
        PdfObject::String(s.as_bytes().to_vec())
    }
}

/// PDF dictionary (sorted key-value pairs)
#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair
    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    /// Iterate over entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter()
    }

    /// Set the Type entry (common for PDF objects)
    pub fn with_type(mut self, type_name: &str) -> Self {
        self.insert("Type", PdfObject::Name(type_name.to_string()));
        self
    }
}

/// PDF stream (dictionary + data)
#[derive(Debug, Clone)]
pub struct PdfStream {
    /// Stream dictionary
    pub dict: PdfDictionary,
    /// Stream data (uncompressed or compressed)
    pub data: Vec<u8>,
    /// Whether the data is already compressed
    pub compressed: bool,
}

impl PdfStream {
    /// Create a new stream with data
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
            compressed: false,
        }
    }
}

/// Serializer for PDF objects
pub struct PdfSerializer<W: Write> {
    writer: W,
}

impl<W: Write> PdfSerializer<W> {
    /// Create a new serializer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a PDF object
    pub fn write_object(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => write!(self.writer, "{}", n),
            PdfObject::Real(n) => {
                if n.fract() == 0.0 {
                    write!(self.writer, "{:.1}", n)
                } else {
                    let s = format!("{:.6}", n);
                    let s = s.trim_end_matches('0').trim_end_matches('.');
                    write!(self.writer, "{}", s)
                }
            }
            PdfObject::String(data) => self.write_string(data),
            PdfObject::Name(name) => self.write_name(name),
            PdfObject::Array(arr) => self.write_array(arr),
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Stream(stream) => self.write_stream(stream),
            PdfObject::Reference(obj_num, gen_num) => {
                write!(self.writer, "{} {} R", obj_num, gen_num)
            }
        }
    }

    /// Write a literal PDF string, escaping delimiters and non-printables
    fn write_string(&mut self, data: &[u8]) -> io::Result<()> {
        write!(self.writer, "(")?;
        for &byte in data {
            match byte {
                b'(' | b')' | b'\\' => write!(self.writer, "\\{}", byte as char)?,
                0x0A => write!(self.writer, "\\n")?,
                0x0D => write!(self.writer, "\\r")?,
                0x09 => write!(self.writer, "\\t")?,
                0x20..=0x7E => write!(self.writer, "{}", byte as char)?,
                _ => write!(self.writer, "\\{:03o}", byte)?,
            }
        }
        write!(self.writer, ")")
    }

    /// Write a PDF name
    fn write_name(&mut self, name: &str) -> io::Result<()> {
        write!(self.writer, "/")?;
        for byte in name.bytes() {
            match byte {
                0x21..=0x7E
                    if !matches!(
                        byte,
                        b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
                    ) =>
                {
                    write!(self.writer, "{}", byte as char)?;
                }
                _ => write!(self.writer, "#{:02X}", byte)?,
            }
        }
        Ok(())
    }

    /// Write a PDF array
    fn write_array(&mut self, arr: &[PdfObject]) -> io::Result<()> {
        write!(self.writer, "[")?;
        for (i, obj) in arr.iter().enumerate() {
            if i > 0 {
                write!(self.writer, " ")?;
            }
            self.write_object(obj)?;
        }
        write!(self.writer, "]")
    }

    /// Write a PDF dictionary
    fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        write!(self.writer, "<<")?;
        for (key, value) in dict.iter() {
            write!(self.writer, " ")?;
            self.write_name(key)?;
            write!(self.writer, " ")?;
            self.write_object(value)?;
        }
        write!(self.writer, " >>")
    }

    /// Write a PDF stream
    fn write_stream(&mut self, stream: &PdfStream) -> io::Result<()> {
        self.write_dictionary(&stream.dict)?;
        write!(self.writer, "\nstream\n")?;
        self.writer.write_all(&stream.data)?;
        write!(self.writer, "\nendstream")
    }

    /// Consume the serializer and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
