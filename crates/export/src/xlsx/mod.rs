//! Tabular exporter: the export rows as a styled XLSX grid
//!
//! The workbook is assembled part by part into a ZIP container: content
//! types, package relationships, workbook, styles, and a single
//! worksheet. Strings are written inline, so no shared-string table is
//! needed.

mod container;
mod sheet;
mod styles;

use crate::Result;
use bank_model::ExportJob;
use container::XlsxContainer;
use std::io::{Seek, Write};

pub(crate) use container::escape_xml;

/// Write the job as a one-worksheet XLSX workbook into `writer`.
///
/// Row semantics match the flat exporter exactly; the differences are
/// presentational (styled header, fixed column widths, wrapped body
/// cells) plus the correctness strings, which are localized here while
/// the flat export keeps its fixed literals.
pub fn export_xlsx<W: Write + Seek>(job: &ExportJob, writer: W) -> Result<()> {
    let mut container = XlsxContainer::new(writer);

    container.write_file("[Content_Types].xml", &container::content_types_xml())?;
    container.write_file("_rels/.rels", &container::root_rels_xml())?;
    container.write_file(
        "xl/workbook.xml",
        &container::workbook_xml(job.locale.strings().title),
    )?;
    container.write_file("xl/_rels/workbook.xml.rels", &container::workbook_rels_xml())?;
    container.write_file("xl/styles.xml", &styles::styles_xml())?;
    container.write_file("xl/worksheets/sheet1.xml", &sheet::sheet_xml(job))?;

    container.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_model::{Answer, AnswerLookup, ExportFormat, Locale, Question};
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::io::Cursor;
    use zip::ZipArchive;

    fn question(id: u64, category: &str) -> Question {
        Question {
            id,
            name: format!("Q{id}"),
            text: format!("Text {id}"),
            qtype: "truefalse".to_string(),
            category_name: category.to_string(),
            category_id: 1,
        }
    }

    fn export_to_archive(job: &ExportJob) -> ZipArchive<Cursor<Vec<u8>>> {
        let mut buf = Cursor::new(Vec::new());
        export_xlsx(job, &mut buf).unwrap();
        buf.set_position(0);
        ZipArchive::new(buf).unwrap()
    }

    fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        use std::io::Read;
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    fn count_rows(sheet: &str) -> usize {
        let mut reader = Reader::from_str(sheet);
        let mut rows = 0;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"row" => rows += 1,
                Event::Eof => break,
                _ => {}
            }
        }
        rows
    }

    #[test]
    fn test_container_has_all_parts() {
        let job = ExportJob::new(Vec::new(), AnswerLookup::new(), "C", ExportFormat::Xlsx);
        let mut archive = export_to_archive(&job);
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }
    }

    #[test]
    fn test_empty_job_still_has_header_row() {
        let job = ExportJob::new(Vec::new(), AnswerLookup::new(), "C", ExportFormat::Xlsx);
        let mut archive = export_to_archive(&job);
        let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
        assert_eq!(count_rows(&sheet), 1);
        assert!(sheet.contains("Categoría"));
    }

    #[test]
    fn test_row_count_and_localized_correctness() {
        let mut answers = AnswerLookup::new();
        answers.insert(1, vec![Answer::new("A", 1.0), Answer::new("B", 0.0)]);
        let job = ExportJob::new(
            vec![question(1, "Unit"), question(2, "Unit")],
            answers,
            "C",
            ExportFormat::Xlsx,
        );

        let mut archive = export_to_archive(&job);
        let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
        // header + two answers + one answerless row
        assert_eq!(count_rows(&sheet), 4);
        assert!(sheet.contains("<t>Sí</t>"));
        assert!(sheet.contains("<t>No</t>"));

        let en_job = ExportJob::new(
            vec![question(1, "Unit")],
            {
                let mut a = AnswerLookup::new();
                a.insert(1, vec![Answer::new("A", 1.0)]);
                a
            },
            "C",
            ExportFormat::Xlsx,
        )
        .with_locale(Locale::En);
        let mut archive = export_to_archive(&en_job);
        let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<t>Yes</t>"));
    }

    #[test]
    fn test_worksheet_named_after_report_title() {
        let job = ExportJob::new(Vec::new(), AnswerLookup::new(), "C", ExportFormat::Xlsx);
        let mut archive = export_to_archive(&job);
        let workbook = read_part(&mut archive, "xl/workbook.xml");
        assert!(workbook.contains("Informe del Banco de Preguntas"));
    }

    #[test]
    fn test_column_widths_present() {
        let job = ExportJob::new(Vec::new(), AnswerLookup::new(), "C", ExportFormat::Xlsx);
        let mut archive = export_to_archive(&job);
        let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"<col min="1" max="1" width="8" customWidth="1"/>"#));
        assert!(sheet.contains(r#"<col min="6" max="6" width="50" customWidth="1"/>"#));
    }
}
