//! Category grouping for the document exporter's unit sections

use crate::Question;

/// Questions of one category, in input order.
#[derive(Debug)]
pub struct UnitGroup<'a> {
    /// Category name, used as the unit display label
    pub category: &'a str,
    /// Questions in this category
    pub questions: Vec<&'a Question>,
}

/// Group questions by category name, preserving first-encounter order.
///
/// Unit numbering follows this order, not category id order; the host
/// pre-sorts by category name so the practical result is alphabetical.
/// Questions in `exclude_category` (the configured final-exam category)
/// are left out entirely.
pub fn group_by_category(
    questions: &[Question],
    exclude_category: Option<u64>,
) -> Vec<UnitGroup<'_>> {
    let mut groups: Vec<UnitGroup<'_>> = Vec::new();
    for question in questions {
        if exclude_category == Some(question.category_id) {
            continue;
        }
        match groups
            .iter()
            .position(|g| g.category == question.category_name)
        {
            Some(index) => groups[index].questions.push(question),
            None => groups.push(UnitGroup {
                category: &question.category_name,
                questions: vec![question],
            }),
        }
    }
    groups
}
