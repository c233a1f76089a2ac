//! Export - question bank format writers
//!
//! This crate renders an [`bank_model::ExportJob`] into one of three byte
//! streams:
//!
//! - [`csv_export`]: one delimited-text row per question/answer pair
//! - [`xlsx`]: the same rows as a styled spreadsheet grid
//! - [`pdf`]: a paginated, styled document with a cover, a sampled
//!   final-exam section, and per-unit question sections
//!
//! All three writers take the fully materialized record set as arguments
//! and stream straight into any `Write` sink; nothing here touches
//! ambient state or intermediate files.

pub mod csv_export;
mod error;
pub mod pdf;
pub mod xlsx;

pub use csv_export::export_csv;
pub use error::{ExportError, Result};
pub use pdf::export_pdf;
pub use xlsx::export_xlsx;

use bank_model::{ExportFormat, ExportJob};
use rand::Rng;
use std::io::{Seek, Write};

/// Render a job into `writer` using the format the job requests.
///
/// The generator feeds the final-exam sample in the PDF path; the other
/// formats ignore it.
pub fn export_job<W: Write + Seek, R: Rng + ?Sized>(
    job: &ExportJob,
    rng: &mut R,
    writer: W,
) -> Result<()> {
    match job.format {
        ExportFormat::Csv => export_csv(job, writer),
        ExportFormat::Xlsx => export_xlsx(job, writer),
        ExportFormat::Pdf => export_pdf(job, rng, writer),
    }
}
