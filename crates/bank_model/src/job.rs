//! Export job - the per-request unit of work

use crate::{Answer, AnswerLookup, Locale, Question};
use serde::{Deserialize, Serialize};

/// Selectable output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited text, one row per question/answer pair
    Csv,
    /// Styled spreadsheet grid
    Xlsx,
    /// Paginated, styled document
    Pdf,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// One export request: the materialized record set plus the request
/// parameters the exporters need.
///
/// Created at request entry, consumed once by exactly one exporter,
/// discarded after the output is flushed. Carries no identity beyond the
/// single call.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Questions, ordered by category name then question name upstream
    pub questions: Vec<Question>,
    /// Answers keyed by question id
    pub answers: AnswerLookup,
    /// Course display name (used in titles and the output filename)
    pub course_name: String,
    /// Requested output format
    pub format: ExportFormat,
    /// Category designated as the final exam, if any
    pub final_exam_category: Option<u64>,
    /// Display language for localized strings
    pub locale: Locale,
}

impl ExportJob {
    /// Create a job with no final-exam category and the default locale
    pub fn new(
        questions: Vec<Question>,
        answers: AnswerLookup,
        course_name: impl Into<String>,
        format: ExportFormat,
    ) -> Self {
        Self {
            questions,
            answers,
            course_name: course_name.into(),
            format,
            final_exam_category: None,
            locale: Locale::default(),
        }
    }

    /// Set the final-exam category. An id of zero means "none configured",
    /// matching the hosting platform's convention.
    pub fn with_final_exam_category(mut self, category_id: u64) -> Self {
        self.final_exam_category = (category_id != 0).then_some(category_id);
        self
    }

    /// Set the display locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Answers for a question, empty when none are recorded
    pub fn answers_for(&self, question_id: u64) -> &[Answer] {
        self.answers
            .get(&question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_final_exam_category_means_none() {
        let job = ExportJob::new(Vec::new(), AnswerLookup::new(), "C", ExportFormat::Csv)
            .with_final_exam_category(0);
        assert_eq!(job.final_exam_category, None);

        let job = job.with_final_exam_category(7);
        assert_eq!(job.final_exam_category, Some(7));
    }

    #[test]
    fn test_answers_for_missing_question_is_empty() {
        let job = ExportJob::new(Vec::new(), AnswerLookup::new(), "C", ExportFormat::Pdf);
        assert!(job.answers_for(42).is_empty());
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
    }
}
