//! Section grouping for the legacy flat question list.
//!
//! The flat editor renders its questions as accordion clusters: every
//! `Section`-typed question opens a cluster that collects the questions
//! after it, and anything before the first marker forms a leading
//! unsectioned cluster. The grouping is derived, never stored: it borrows
//! the question list and is recomputed from it on every render.

use crate::model::question::{Question, QuestionType};

/// A question together with its position in the original flat list.
///
/// The original index is what edit operations and skip-logic references
/// need; the grouped rendering must not lose it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedQuestion<'a> {
    pub index: usize,
    pub question: &'a Question,
}

/// One rendered cluster: an optional `Section`-typed delimiter and the
/// non-section questions that follow it.
///
/// The leading cluster (questions before any marker) has
/// `section_index == None` and no `section_question`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup<'a> {
    pub section_index: Option<usize>,
    pub section_question: Option<&'a Question>,
    pub items: Vec<IndexedQuestion<'a>>,
}

impl SectionGroup<'_> {
    fn is_empty(&self) -> bool {
        self.section_index.is_none() && self.items.is_empty()
    }
}

/// Splits a flat question list into section clusters.
///
/// A group is emitted when it has a delimiter or at least one item; the
/// one exception is an entirely empty input, which still yields a single
/// empty leading group so the editor has something to append into.
pub fn group_questions_by_section(questions: &[Question]) -> Vec<SectionGroup<'_>> {
    let mut groups = Vec::new();
    let mut current = SectionGroup {
        section_index: None,
        section_question: None,
        items: Vec::new(),
    };

    for (index, question) in questions.iter().enumerate() {
        if question.question_type == QuestionType::Section {
            if !current.is_empty() {
                groups.push(current);
            }
            current = SectionGroup {
                section_index: Some(index),
                section_question: Some(question),
                items: Vec::new(),
            };
        } else {
            current.items.push(IndexedQuestion { index, question });
        }
    }

    if !current.is_empty() || groups.is_empty() {
        groups.push(current);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(label: &str) -> Question {
        Question {
            label: label.into(),
            ..Question::default()
        }
    }

    fn marker(label: &str) -> Question {
        Question {
            label: label.into(),
            question_type: QuestionType::Section,
            ..Question::default()
        }
    }

    #[test]
    fn empty_input_yields_one_empty_leading_group() {
        let groups = group_questions_by_section(&[]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section_index, None);
        assert!(groups[0].items.is_empty());
    }

    #[test]
    fn questions_before_the_first_marker_form_the_leading_group() {
        let questions = vec![question("a"), question("b"), marker("S"), question("c")];
        let groups = group_questions_by_section(&questions);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].section_index, None);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].section_index, Some(2));
        assert_eq!(groups[1].section_question.unwrap().label, "S");
        assert_eq!(groups[1].items[0].index, 3);
    }

    #[test]
    fn marker_first_input_emits_no_empty_leading_group() {
        let questions = vec![marker("S"), question("a")];
        let groups = group_questions_by_section(&questions);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section_index, Some(0));
    }

    #[test]
    fn trailing_marker_opens_an_empty_group() {
        let questions = vec![question("a"), marker("S")];
        let groups = group_questions_by_section(&questions);

        assert_eq!(groups.len(), 2);
        assert!(groups[1].items.is_empty());
        assert_eq!(groups[1].section_index, Some(1));
    }

    #[test]
    fn concatenated_items_reconstruct_the_non_section_questions_in_order() {
        let questions = vec![
            question("a"),
            marker("S1"),
            question("b"),
            question("c"),
            marker("S2"),
            marker("S3"),
            question("d"),
        ];
        let groups = group_questions_by_section(&questions);

        let reconstructed: Vec<&str> = groups
            .iter()
            .flat_map(|group| group.items.iter())
            .map(|item| item.question.label.as_str())
            .collect();
        assert_eq!(reconstructed, vec!["a", "b", "c", "d"]);

        let marker_count = questions
            .iter()
            .filter(|q| q.question_type == QuestionType::Section)
            .count();
        let non_leading = groups
            .iter()
            .filter(|group| group.section_index.is_some())
            .count();
        assert_eq!(non_leading, marker_count);
    }

    #[test]
    fn original_indices_survive_grouping() {
        let questions = vec![marker("S"), question("a"), question("b")];
        let groups = group_questions_by_section(&questions);
        let indices: Vec<usize> = groups[0].items.iter().map(|item| item.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }
}
