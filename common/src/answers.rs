//! Fill-out state: per-question answers, completion, and skip logic.
//!
//! The preview/fill-out renderer keeps one [`AnswerMap`] per form, keyed
//! by backend-assigned question id. Every change is serialized and written
//! to a keyed local store by the caller so a reload restores progress;
//! anything unreadable in that store is discarded silently and treated as
//! "no saved answers".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::form::FormSchema;
use crate::model::question::{Question, SkipAction, SkipLogicCondition, SkipOperator};

/// One stored answer: free text for single-value widgets, a list of
/// selected choices for multi-select ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Choices(Vec<String>),
}

impl AnswerValue {
    /// An empty string or an empty choice list does not count as answered.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Text(text) => !text.is_empty(),
            AnswerValue::Choices(choices) => !choices.is_empty(),
        }
    }

    /// Equality against a skip-logic comparison value. A choice list is
    /// equal only when exactly that one choice is selected.
    fn equals(&self, value: &str) -> bool {
        match self {
            AnswerValue::Text(text) => text == value,
            AnswerValue::Choices(choices) => choices.len() == 1 && choices[0] == value,
        }
    }

    /// Containment against a skip-logic comparison value: substring for
    /// text, membership for choice lists.
    fn contains_value(&self, value: &str) -> bool {
        match self {
            AnswerValue::Text(text) => text.contains(value),
            AnswerValue::Choices(choices) => choices.iter().any(|choice| choice == value),
        }
    }
}

/// Answers collected so far, keyed by question id.
///
/// `BTreeMap` keeps the serialized form stable across saves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<u64, AnswerValue>);

impl AnswerMap {
    pub fn get(&self, question_id: u64) -> Option<&AnswerValue> {
        self.0.get(&question_id)
    }

    pub fn insert(&mut self, question_id: u64, value: AnswerValue) {
        self.0.insert(question_id, value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes for the local progress store.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Restores from the local progress store. Malformed input yields an
    /// empty map, never an error: a corrupt store means starting over,
    /// not crashing the fill-out session.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Key under which a form's progress is stored: `<namespace>_<formId>`.
    pub fn storage_key(namespace: &str, form_id: u64) -> String {
        format!("{namespace}_{form_id}")
    }
}

/// Percentage of id-bearing questions answered, rounded to the nearest
/// integer. Questions without a backend id are invisible to the count.
/// A schema with no ids at all is 0% complete, not a division error.
pub fn completion_percentage(schema: &FormSchema, answers: &AnswerMap) -> u8 {
    let ids: Vec<u64> = schema.questions().filter_map(|question| question.id).collect();
    if ids.is_empty() {
        return 0;
    }
    let answered = ids
        .iter()
        .filter(|id| answers.get(**id).is_some_and(AnswerValue::is_answered))
        .count();
    (100.0 * answered as f64 / ids.len() as f64).round() as u8
}

/// One page forward from `current`, staying put on the last page.
pub fn next_page(current: usize, page_count: usize) -> usize {
    if current + 1 < page_count {
        current + 1
    } else {
        current
    }
}

/// One page back from `current`, staying put on the first page.
pub fn previous_page(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Whether `question` should be rendered, given the flat question list it
/// lives in and the answers so far. Questions without skip logic are
/// always visible.
pub fn question_is_visible(question: &Question, context: &[Question], answers: &AnswerMap) -> bool {
    match &question.skip_logic {
        Some(condition) => condition.is_visible(context, answers),
        None => true,
    }
}

impl SkipLogicCondition {
    /// Evaluates the condition against the referenced question's answer.
    ///
    /// A reference that points outside `context`, at an unsaved question
    /// (no id), or at an unanswered one never matches `==`/`contains` and
    /// always matches `!=`/`not-contains`. The action then decides what a
    /// match means: `Show` renders on match, `Hide` suppresses on match.
    pub fn is_visible(&self, context: &[Question], answers: &AnswerMap) -> bool {
        let answer = context
            .get(self.reference_question_index)
            .and_then(|question| question.id)
            .and_then(|id| answers.get(id));

        let matched = match (self.operator, answer) {
            (SkipOperator::Eq, Some(answer)) => answer.equals(&self.value),
            (SkipOperator::Ne, Some(answer)) => !answer.equals(&self.value),
            (SkipOperator::Contains, Some(answer)) => answer.contains_value(&self.value),
            (SkipOperator::NotContains, Some(answer)) => !answer.contains_value(&self.value),
            (SkipOperator::Ne | SkipOperator::NotContains, None) => true,
            (SkipOperator::Eq | SkipOperator::Contains, None) => false,
        };

        match self.action {
            SkipAction::Show => matched,
            SkipAction::Hide => !matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::{Page, Section};
    use pretty_assertions::assert_eq;

    fn question_with_id(id: u64) -> Question {
        Question {
            id: Some(id),
            ..Question::default()
        }
    }

    fn schema_with_four_ids() -> FormSchema {
        FormSchema {
            pages: vec![
                Page {
                    unsectioned: vec![question_with_id(1), question_with_id(2)],
                    sections: vec![Section {
                        title: "s".into(),
                        questions: vec![question_with_id(3)],
                    }],
                    ..Page::default()
                },
                Page {
                    unsectioned: vec![question_with_id(4), Question::default()],
                    ..Page::default()
                },
            ],
            ..FormSchema::default()
        }
    }

    #[test]
    fn completion_counts_only_non_empty_answers_over_id_bearing_questions() {
        let schema = schema_with_four_ids();
        let mut answers = AnswerMap::default();
        answers.insert(1, AnswerValue::Text("hello".into()));
        answers.insert(2, AnswerValue::Text("there".into()));
        answers.insert(3, AnswerValue::Choices(vec![]));
        // question 4 unanswered; the id-less question never counts

        assert_eq!(completion_percentage(&schema, &answers), 50);
    }

    #[test]
    fn completion_of_a_schema_without_ids_is_zero() {
        let schema = FormSchema {
            pages: vec![Page {
                unsectioned: vec![Question::default()],
                ..Page::default()
            }],
            ..FormSchema::default()
        };
        assert_eq!(completion_percentage(&schema, &AnswerMap::default()), 0);
    }

    #[test]
    fn completion_rounds_to_the_nearest_integer() {
        let schema = FormSchema {
            pages: vec![Page {
                unsectioned: vec![question_with_id(1), question_with_id(2), question_with_id(3)],
                ..Page::default()
            }],
            ..FormSchema::default()
        };
        let mut answers = AnswerMap::default();
        answers.insert(1, AnswerValue::Text("x".into()));
        // 1/3 -> 33.33 -> 33
        assert_eq!(completion_percentage(&schema, &answers), 33);
        answers.insert(2, AnswerValue::Choices(vec!["a".into()]));
        // 2/3 -> 66.67 -> 67
        assert_eq!(completion_percentage(&schema, &answers), 67);
    }

    #[test]
    fn answer_map_round_trips_through_json() {
        let mut answers = AnswerMap::default();
        answers.insert(7, AnswerValue::Text("free text".into()));
        answers.insert(9, AnswerValue::Choices(vec!["a".into(), "b".into()]));

        let restored = AnswerMap::from_json(&answers.to_json());
        assert_eq!(restored, answers);
    }

    #[test]
    fn malformed_stored_answers_become_an_empty_map() {
        assert!(AnswerMap::from_json("definitely not json").is_empty());
        assert!(AnswerMap::from_json("[1,2,3]").is_empty());
        assert!(AnswerMap::from_json("").is_empty());
    }

    #[test]
    fn storage_key_is_namespace_underscore_form_id() {
        assert_eq!(AnswerMap::storage_key("civiform_answers", 12), "civiform_answers_12");
    }

    fn show_when_eq(reference: usize, value: &str) -> SkipLogicCondition {
        SkipLogicCondition {
            reference_question_index: reference,
            operator: SkipOperator::Eq,
            value: value.into(),
            action: SkipAction::Show,
        }
    }

    #[test]
    fn show_on_match_hides_until_the_answer_arrives() {
        let context = vec![question_with_id(1)];
        let condition = show_when_eq(0, "yes");
        let mut answers = AnswerMap::default();

        assert!(!condition.is_visible(&context, &answers));
        answers.insert(1, AnswerValue::Text("yes".into()));
        assert!(condition.is_visible(&context, &answers));
        answers.insert(1, AnswerValue::Text("no".into()));
        assert!(!condition.is_visible(&context, &answers));
    }

    #[test]
    fn hide_inverts_the_match() {
        let context = vec![question_with_id(1)];
        let condition = SkipLogicCondition {
            action: SkipAction::Hide,
            ..show_when_eq(0, "yes")
        };
        let mut answers = AnswerMap::default();

        assert!(condition.is_visible(&context, &answers));
        answers.insert(1, AnswerValue::Text("yes".into()));
        assert!(!condition.is_visible(&context, &answers));
    }

    #[test]
    fn contains_checks_membership_for_choice_answers() {
        let context = vec![question_with_id(1)];
        let condition = SkipLogicCondition {
            operator: SkipOperator::Contains,
            ..show_when_eq(0, "b")
        };
        let mut answers = AnswerMap::default();
        answers.insert(1, AnswerValue::Choices(vec!["a".into(), "b".into()]));
        assert!(condition.is_visible(&context, &answers));

        answers.insert(1, AnswerValue::Choices(vec!["a".into()]));
        assert!(!condition.is_visible(&context, &answers));
    }

    #[test]
    fn dangling_reference_is_not_an_error() {
        // The reference index survives removals unrenumbered, so it can
        // point past the end of the list. That must stay a silent miss.
        let condition = show_when_eq(5, "yes");
        assert!(!condition.is_visible(&[], &AnswerMap::default()));

        let not_contains = SkipLogicCondition {
            operator: SkipOperator::NotContains,
            ..show_when_eq(5, "yes")
        };
        assert!(not_contains.is_visible(&[], &AnswerMap::default()));
    }

    #[test]
    fn ne_shows_while_the_answer_differs() {
        let context = vec![question_with_id(1)];
        let condition = SkipLogicCondition {
            operator: SkipOperator::Ne,
            ..show_when_eq(0, "yes")
        };
        let mut answers = AnswerMap::default();
        answers.insert(1, AnswerValue::Text("no".into()));
        assert!(condition.is_visible(&context, &answers));

        answers.insert(1, AnswerValue::Text("yes".into()));
        assert!(!condition.is_visible(&context, &answers));
    }

    #[test]
    fn not_contains_hides_once_the_value_is_selected() {
        let context = vec![question_with_id(1)];
        let condition = SkipLogicCondition {
            operator: SkipOperator::NotContains,
            ..show_when_eq(0, "b")
        };
        let mut answers = AnswerMap::default();
        answers.insert(1, AnswerValue::Choices(vec!["a".into()]));
        assert!(condition.is_visible(&context, &answers));

        answers.insert(1, AnswerValue::Choices(vec!["a".into(), "b".into()]));
        assert!(!condition.is_visible(&context, &answers));
    }

    #[test]
    fn page_navigation_clamps_at_both_ends() {
        assert_eq!(next_page(0, 3), 1);
        assert_eq!(next_page(2, 3), 2);
        assert_eq!(next_page(0, 0), 0);
        assert_eq!(previous_page(2), 1);
        assert_eq!(previous_page(0), 0);
    }

    #[test]
    fn question_without_skip_logic_is_always_visible() {
        let question = Question::default();
        assert!(question_is_visible(&question, &[], &AnswerMap::default()));
    }
}
