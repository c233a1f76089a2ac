//! Flat exporter: delimited text, one row per question/answer pair
//!
//! The header and the Yes/No literals are fixed English by contract with
//! downstream tooling, regardless of the job's display locale.

use crate::Result;
use bank_model::{expand_rows, format_fraction, ExportJob};
use std::io::Write;
use text_clean::normalize;

/// UTF-8 byte-order mark, written first so spreadsheet tools detect the
/// encoding.
const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Header fields, in column order.
const HEADER: [&str; 8] = [
    "Question ID",
    "Question Name",
    "Question Text",
    "Question Type",
    "Category",
    "Answer",
    "Is Correct",
    "Fraction",
];

/// Write the job as delimited text into `writer`.
///
/// Rows follow input question order, then input answer order within a
/// question. A question without answers still gets one row, with the
/// answer, correctness, and fraction fields empty. The sink is flushed on
/// every exit path, including the empty job.
pub fn export_csv<W: Write>(job: &ExportJob, mut writer: W) -> Result<()> {
    writer.write_all(BOM)?;

    let mut csv = csv::WriterBuilder::new().from_writer(writer);
    csv.write_record(HEADER)?;

    for row in expand_rows(job) {
        let q = row.question;
        match row.answer {
            Some(answer) => csv.write_record([
                q.id.to_string(),
                normalize(&q.name),
                normalize(&q.text),
                q.qtype.clone(),
                normalize(&q.category_name),
                normalize(&answer.text),
                if answer.is_correct() { "Yes" } else { "No" }.to_string(),
                format_fraction(answer.fraction),
            ])?,
            None => csv.write_record([
                q.id.to_string(),
                normalize(&q.name),
                normalize(&q.text),
                q.qtype.clone(),
                normalize(&q.category_name),
                String::new(),
                String::new(),
                String::new(),
            ])?,
        }
    }

    csv.flush()?;
    Ok(())
}
