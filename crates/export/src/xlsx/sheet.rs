//! Worksheet part: column widths, header row, and the export rows

use super::escape_xml;
use super::styles::{XF_BODY, XF_HEADER};
use bank_model::{expand_rows, format_fraction, ExportJob};
use std::fmt::Write;
use text_clean::normalize;

/// Column letters for the eight-column grid.
const COLUMNS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Fixed column widths: ID, Name, Text, Type, Category, Answer, Correct,
/// Score.
const WIDTHS: [u32; 8] = [8, 30, 40, 15, 20, 50, 12, 10];

/// One worksheet cell, written inline.
enum Cell {
    Number(String),
    Text(String),
    Empty,
}

fn push_cell(xml: &mut String, row: u32, col: usize, style: u32, cell: &Cell) {
    let reference = format!("{}{}", COLUMNS[col], row);
    match cell {
        Cell::Number(v) => {
            let _ = write!(xml, r#"<c r="{reference}" s="{style}"><v>{v}</v></c>"#);
        }
        Cell::Text(v) => {
            let _ = write!(
                xml,
                r#"<c r="{reference}" s="{style}" t="inlineStr"><is><t>{}</t></is></c>"#,
                escape_xml(v)
            );
        }
        Cell::Empty => {
            let _ = write!(xml, r#"<c r="{reference}" s="{style}"/>"#);
        }
    }
}

fn push_row(xml: &mut String, row: u32, style: u32, cells: [Cell; 8]) {
    let _ = write!(xml, r#"<row r="{row}">"#);
    for (col, cell) in cells.iter().enumerate() {
        push_cell(xml, row, col, style, cell);
    }
    xml.push_str("</row>");
}

/// The complete `xl/worksheets/sheet1.xml` part for a job.
pub fn sheet_xml(job: &ExportJob) -> String {
    let strings = job.locale.strings();

    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    xml.push_str("<cols>");
    for (i, width) in WIDTHS.iter().enumerate() {
        let _ = write!(
            xml,
            r#"<col min="{n}" max="{n}" width="{width}" customWidth="1"/>"#,
            n = i + 1
        );
    }
    xml.push_str("</cols><sheetData>");

    push_row(
        &mut xml,
        1,
        XF_HEADER,
        strings.columns.map(|c| Cell::Text(c.to_string())),
    );

    let mut row_number = 2;
    for row in expand_rows(job) {
        let q = row.question;
        let (answer, correct, fraction) = match row.answer {
            Some(a) => (
                Cell::Text(normalize(&a.text)),
                Cell::Text(job.locale.yes_no(a.is_correct()).to_string()),
                Cell::Number(format_fraction(a.fraction)),
            ),
            None => (Cell::Empty, Cell::Empty, Cell::Empty),
        };
        push_row(
            &mut xml,
            row_number,
            XF_BODY,
            [
                Cell::Number(q.id.to_string()),
                Cell::Text(normalize(&q.name)),
                Cell::Text(normalize(&q.text)),
                Cell::Text(q.qtype.clone()),
                Cell::Text(normalize(&q.category_name)),
                answer,
                correct,
                fraction,
            ],
        );
        row_number += 1;
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_model::{Answer, AnswerLookup, ExportFormat, Question};

    fn job_with_one_answer() -> ExportJob {
        let question = Question {
            id: 3,
            name: "Name & <tag>".to_string(),
            text: "Text".to_string(),
            qtype: "essay".to_string(),
            category_name: "Cat".to_string(),
            category_id: 1,
        };
        let mut answers = AnswerLookup::new();
        answers.insert(3, vec![Answer::new("Ans", 0.5)]);
        ExportJob::new(vec![question], answers, "C", ExportFormat::Xlsx)
    }

    #[test]
    fn test_header_row_uses_header_style() {
        let xml = sheet_xml(&job_with_one_answer());
        assert!(xml.contains(r#"<c r="A1" s="1" t="inlineStr"><is><t>ID</t></is></c>"#));
    }

    #[test]
    fn test_id_and_fraction_are_numeric_cells() {
        let xml = sheet_xml(&job_with_one_answer());
        assert!(xml.contains(r#"<c r="A2" s="2"><v>3</v></c>"#));
        assert!(xml.contains(r#"<c r="H2" s="2"><v>0.5</v></c>"#));
    }

    #[test]
    fn test_markup_is_normalized_not_escaped_markup() {
        let xml = sheet_xml(&job_with_one_answer());
        // The <tag> is stripped by normalization; the ampersand is escaped
        // for XML, not shown as an entity in the sheet text.
        assert!(xml.contains("<t>Name &amp;</t>"));
    }

    #[test]
    fn test_answerless_question_has_empty_styled_cells() {
        let question = Question {
            id: 9,
            name: "Q".to_string(),
            text: "T".to_string(),
            qtype: "essay".to_string(),
            category_name: "Cat".to_string(),
            category_id: 1,
        };
        let job = ExportJob::new(vec![question], AnswerLookup::new(), "C", ExportFormat::Xlsx);
        let xml = sheet_xml(&job);
        assert!(xml.contains(r#"<c r="F2" s="2"/>"#));
        assert!(xml.contains(r#"<c r="H2" s="2"/>"#));
    }
}
