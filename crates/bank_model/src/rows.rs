//! Row expansion shared by the flat and tabular exporters

use crate::{Answer, ExportJob, Question};

/// One output row: a question paired with one of its answers, or with no
/// answer when the question has none.
#[derive(Debug, Clone, Copy)]
pub struct ExportRow<'a> {
    /// The question this row belongs to
    pub question: &'a Question,
    /// The answer, absent for answerless questions
    pub answer: Option<&'a Answer>,
}

/// Expand a job into rows: one per (question, answer) pair in input order,
/// plus one answerless row per question with no answers.
///
/// The row count is always `sum(max(1, answers_per_question))`.
pub fn expand_rows(job: &ExportJob) -> Vec<ExportRow<'_>> {
    let mut rows = Vec::new();
    for question in &job.questions {
        let answers = job.answers_for(question.id);
        if answers.is_empty() {
            rows.push(ExportRow {
                question,
                answer: None,
            });
        } else {
            for answer in answers {
                rows.push(ExportRow {
                    question,
                    answer: Some(answer),
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerLookup, ExportFormat};

    fn question(id: u64, name: &str) -> Question {
        Question {
            id,
            name: name.to_string(),
            text: format!("text {name}"),
            qtype: "multichoice".to_string(),
            category_name: "Unit 1".to_string(),
            category_id: 1,
        }
    }

    #[test]
    fn test_row_count_is_sum_of_max_one_answers() {
        let mut answers = AnswerLookup::new();
        answers.insert(1, vec![Answer::new("A", 1.0), Answer::new("B", 0.0)]);
        answers.insert(3, vec![Answer::new("C", 0.5)]);

        let job = ExportJob::new(
            vec![question(1, "q1"), question(2, "q2"), question(3, "q3")],
            answers,
            "Course",
            ExportFormat::Csv,
        );

        let rows = expand_rows(&job);
        assert_eq!(rows.len(), 4);
        assert!(rows[2].answer.is_none());
        assert_eq!(rows[2].question.id, 2);
    }

    #[test]
    fn test_answer_order_preserved() {
        let mut answers = AnswerLookup::new();
        answers.insert(
            1,
            vec![
                Answer::new("first", 0.0),
                Answer::new("second", 1.0),
                Answer::new("third", 0.0),
            ],
        );
        let job = ExportJob::new(vec![question(1, "q1")], answers, "C", ExportFormat::Csv);

        let texts: Vec<&str> = expand_rows(&job)
            .iter()
            .map(|r| r.answer.unwrap().text.as_str())
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_job_has_no_rows() {
        let job = ExportJob::new(Vec::new(), AnswerLookup::new(), "C", ExportFormat::Csv);
        assert!(expand_rows(&job).is_empty());
    }
}
