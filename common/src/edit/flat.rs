//! Edit operations for the legacy flat schema.
//!
//! Callers build partial questions with struct-update syntax over
//! [`Question::default`], so "add" here only has to append.

use crate::model::form::FlatFormSchema;
use crate::model::question::Question;

impl FlatFormSchema {
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.title = title.into();
        next
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.description = description.into();
        next
    }

    /// Appends `question` to the end of the list.
    pub fn with_question_added(&self, question: Question) -> Self {
        let mut next = self.clone();
        next.questions.push(question);
        next
    }

    /// Inserts `question` at `index`, shifting later questions back by
    /// one. An index past the end appends.
    pub fn with_question_inserted(&self, question: Question, index: usize) -> Self {
        let mut next = self.clone();
        let index = index.min(next.questions.len());
        next.questions.insert(index, question);
        next
    }

    /// Replaces the question at `index` wholesale.
    pub fn with_question_updated(&self, index: usize, question: Question) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.questions.get_mut(index) {
            *slot = question;
        }
        next
    }

    /// Removes the question at `index`; later questions shift forward.
    ///
    /// Skip-logic references elsewhere that point past `index` are NOT
    /// renumbered, matching the behaviour of the rest of the app.
    pub fn with_question_removed(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.questions.len() {
            next.questions.remove(index);
        }
        next
    }

    /// Exchanges the questions at `from` and `to`.
    ///
    /// This is a swap, not a splice: moving index 0 to index 2 exchanges
    /// those two questions and leaves the one in between where it was.
    /// The legacy editor has always behaved this way and saved forms
    /// depend on it. Either index out of range is a no-op.
    pub fn with_question_moved(&self, from: usize, to: usize) -> Self {
        let mut next = self.clone();
        if from < next.questions.len() && to < next.questions.len() {
            next.questions.swap(from, to);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{SkipAction, SkipLogicCondition, SkipOperator};
    use pretty_assertions::assert_eq;

    fn schema_with(labels: &[&str]) -> FlatFormSchema {
        FlatFormSchema {
            title: "t".into(),
            description: String::new(),
            questions: labels
                .iter()
                .map(|label| Question {
                    label: (*label).into(),
                    ..Question::default()
                })
                .collect(),
        }
    }

    fn labels(schema: &FlatFormSchema) -> Vec<&str> {
        schema.questions.iter().map(|q| q.label.as_str()).collect()
    }

    #[test]
    fn add_appends_and_leaves_the_input_alone() {
        let before = schema_with(&["a"]);
        let after = before.with_question_added(Question {
            label: "b".into(),
            ..Question::default()
        });
        assert_eq!(labels(&before), vec!["a"]);
        assert_eq!(labels(&after), vec!["a", "b"]);
    }

    #[test]
    fn insert_shifts_later_questions_back() {
        let schema = schema_with(&["a", "c"]).with_question_inserted(
            Question {
                label: "b".into(),
                ..Question::default()
            },
            1,
        );
        assert_eq!(labels(&schema), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_past_the_end_appends() {
        let schema = schema_with(&["a"]).with_question_inserted(
            Question {
                label: "z".into(),
                ..Question::default()
            },
            99,
        );
        assert_eq!(labels(&schema), vec!["a", "z"]);
    }

    #[test]
    fn update_replaces_wholesale_and_ignores_bad_indices() {
        let replacement = Question {
            label: "new".into(),
            required: true,
            ..Question::default()
        };
        let schema = schema_with(&["old"]).with_question_updated(0, replacement.clone());
        assert_eq!(schema.questions[0], replacement);

        let untouched = schema.with_question_updated(5, Question::default());
        assert_eq!(untouched, schema);
    }

    #[test]
    fn remove_shifts_forward_and_ignores_bad_indices() {
        let schema = schema_with(&["a", "b", "c"]).with_question_removed(1);
        assert_eq!(labels(&schema), vec!["a", "c"]);

        let untouched = schema.with_question_removed(7);
        assert_eq!(untouched, schema);
    }

    #[test]
    fn remove_does_not_renumber_skip_logic_references() {
        let mut schema = schema_with(&["a", "b", "c"]);
        schema.questions[2].skip_logic = Some(SkipLogicCondition {
            reference_question_index: 1,
            operator: SkipOperator::Eq,
            value: "x".into(),
            action: SkipAction::Show,
        });

        let after = schema.with_question_removed(0);
        // The reference still says 1 even though "b" now sits at index 0.
        let condition = after.questions[1].skip_logic.as_ref().unwrap();
        assert_eq!(condition.reference_question_index, 1);
    }

    #[test]
    fn move_swaps_rather_than_splices() {
        let schema = schema_with(&["a", "b", "c"]).with_question_moved(0, 2);
        assert_eq!(labels(&schema), vec!["c", "b", "a"]);
    }

    #[test]
    fn move_out_of_range_is_a_no_op() {
        let before = schema_with(&["a", "b"]);
        assert_eq!(before.with_question_moved(0, 2), before);
        assert_eq!(before.with_question_moved(5, 0), before);
    }
}
