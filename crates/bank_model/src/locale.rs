//! Locale string tables for the localized export surfaces
//!
//! The flat (CSV) export deliberately keeps its fixed English header and
//! Yes/No literals regardless of locale; only the tabular and document
//! exporters read these tables.

use serde::{Deserialize, Serialize};

/// Display language for localized export strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (the platform deployment's primary language)
    #[default]
    Es,
    /// English
    En,
}

/// Resolved strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    /// Report title, also the worksheet name
    pub title: &'static str,
    /// Column headers for the tabular export, in column order
    pub columns: [&'static str; 8],
    /// Affirmative for the correctness column
    pub yes: &'static str,
    /// Negative for the correctness column
    pub no: &'static str,
    /// Caption of the final-exam section
    pub final_exam_caption: &'static str,
    /// Caption of the partial-evaluation section
    pub partial_caption: &'static str,
    /// Description paragraph on the final-exam content page
    pub final_exam_description: &'static str,
    /// Notice shown when the sampling pool is empty
    pub no_questions_notice: &'static str,
    /// Marker appended to correct answers in the document export
    pub correct_marker: &'static str,
    /// Unit banner prefix ("Unidad"/"Unit")
    pub unit_prefix: &'static str,
    /// Footer word before "X/Y"
    pub page_word: &'static str,
}

const ES: Strings = Strings {
    title: "Informe del Banco de Preguntas",
    columns: [
        "ID",
        "Nombre de la Pregunta",
        "Texto de la Pregunta",
        "Tipo de Pregunta",
        "Categoría",
        "Respuestas",
        "Respuesta Correcta",
        "Puntaje",
    ],
    yes: "Sí",
    no: "No",
    final_exam_caption: "EXAMEN FINAL",
    partial_caption: "EVALUACIÓN PARCIAL",
    final_exam_description: "Las preguntas del curso se estructuran en bancos de preguntas \
que contienen un número superior al de ítems incluidos en cada test. Esta organización \
tiene como objetivo que, en caso de que el alumnado rehaga el cuestionario, se le \
presenten preguntas diferentes en cada intento. Asimismo, de estos mismos bancos de \
preguntas se extraen los ítems que conforman el test final del curso.",
    no_questions_notice: "No hay preguntas disponibles en la unidad seleccionada.",
    correct_marker: " [CORRECTA]",
    unit_prefix: "Unidad",
    page_word: "Página",
};

const EN: Strings = Strings {
    title: "Question Bank Report",
    columns: [
        "ID",
        "Question Name",
        "Question Text",
        "Question Type",
        "Category",
        "Answers",
        "Correct Answer",
        "Score",
    ],
    yes: "Yes",
    no: "No",
    final_exam_caption: "FINAL EXAM",
    partial_caption: "PARTIAL EVALUATION",
    final_exam_description: "The course questions are organized into question banks \
holding more items than each test includes, so that learners retaking a quiz are shown \
different questions on each attempt. The items making up the course's final test are \
drawn from these same banks.",
    no_questions_notice: "No questions are available in the selected unit.",
    correct_marker: " [CORRECT]",
    unit_prefix: "Unit",
    page_word: "Page",
};

impl Locale {
    /// The string table for this locale
    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }

    /// Localized yes/no for a correctness flag
    pub fn yes_no(&self, correct: bool) -> &'static str {
        let s = self.strings();
        if correct {
            s.yes
        } else {
            s.no
        }
    }

    /// Banner text above the final-exam sample
    pub fn sample_banner(&self, count: usize) -> String {
        match self {
            Locale::Es => format!("Muestra de {count} preguntas del banco:"),
            Locale::En => format!("Sample of {count} questions from the bank:"),
        }
    }

    /// Numbered unit banner, e.g. "Unidad 3: Álgebra"
    pub fn unit_banner(&self, number: usize, category: &str) -> String {
        format!("{} {}: {}", self.strings().unit_prefix, number, category)
    }
}
