//! Question and answer records as supplied by the hosting platform

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A question from the course's question bank.
///
/// This is a read-only projection of the latest content version: every
/// question carries exactly one category id at view time. Text fields may
/// contain markup and HTML entities; exporters normalize them before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question id
    pub id: u64,
    /// Question name
    pub name: String,
    /// Raw question text (markup-bearing)
    #[serde(rename = "questiontext")]
    pub text: String,
    /// Question type tag (e.g. "multichoice", "truefalse")
    pub qtype: String,
    /// Name of the category the question belongs to
    #[serde(rename = "categoryname")]
    pub category_name: String,
    /// Id of the category the question belongs to
    #[serde(rename = "categoryid")]
    pub category_id: u64,
}

/// An answer belonging to exactly one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Raw answer text (markup-bearing)
    #[serde(rename = "answer")]
    pub text: String,
    /// Signed score weight. Positive means correct.
    pub fraction: f64,
}

impl Answer {
    /// Create an answer from text and fraction
    pub fn new(text: impl Into<String>, fraction: f64) -> Self {
        Self {
            text: text.into(),
            fraction,
        }
    }

    /// Whether this answer is displayed as correct.
    ///
    /// The sign of the fraction decides, never the magnitude: zero and
    /// negative fractions are not correct. All three exporters consult
    /// this one predicate.
    pub fn is_correct(&self) -> bool {
        self.fraction > 0.0
    }
}

/// Lookup from question id to its ordered list of answers.
///
/// A missing key means the question has no answers.
pub type AnswerLookup = HashMap<u64, Vec<Answer>>;

/// Format a fraction for display, trimming trailing zeros (`1`, `0.5`,
/// `-0.3333333`).
pub fn format_fraction(fraction: f64) -> String {
    if fraction.fract() == 0.0 {
        format!("{:.0}", fraction)
    } else {
        let s = format!("{:.7}", fraction);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
