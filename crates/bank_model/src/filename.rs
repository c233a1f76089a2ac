//! Output filename stamping and course-name sanitization

use crate::ExportFormat;
use chrono::NaiveDate;

/// Characters never allowed in an output filename, beyond control
/// characters: path separators plus the usual FAT/NTFS reserved set.
const UNSAFE: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

/// Sanitize a course name for use in a filename: drop unsafe and control
/// characters, map whitespace runs to single underscores, and trim
/// leading/trailing underscores and dots.
pub fn sanitize_course_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_separator = false;
    for c in name.chars() {
        if c.is_control() || UNSAFE.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            if !last_was_separator && !out.is_empty() {
                out.push('_');
                last_was_separator = true;
            }
            continue;
        }
        out.push(c);
        last_was_separator = false;
    }
    out.trim_matches(|c| c == '_' || c == '.').to_string()
}

/// Build the dated output filename:
/// `questions_<sanitized-course>_<YYYY-MM-DD>.<ext>`.
pub fn export_filename(course_name: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "questions_{}_{}.{}",
        sanitize_course_name(course_name),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(
            export_filename("Biology101", date(), ExportFormat::Csv),
            "questions_Biology101_2025-03-14.csv"
        );
    }

    #[test]
    fn test_slashes_and_spaces_removed() {
        assert_eq!(
            export_filename("Intro / Advanced: Chem?", date(), ExportFormat::Pdf),
            "questions_Intro_Advanced_Chem_2025-03-14.pdf"
        );
    }

    #[test]
    fn test_unicode_preserved() {
        assert_eq!(
            export_filename("Matemáticas Básicas", date(), ExportFormat::Xlsx),
            "questions_Matemáticas_Básicas_2025-03-14.xlsx"
        );
    }

    #[test]
    fn test_dot_and_underscore_trim() {
        assert_eq!(sanitize_course_name("..course.."), "course");
        assert_eq!(sanitize_course_name("  name  "), "name");
    }
}
