use serde::{Deserialize, Serialize};

/// Radio questions carry at most this many choices.
pub const RADIO_CHOICE_CAP: usize = 2;

/// The kind of widget a question is answered with.
///
/// Serialized as the lowercase wire strings the backend expects.
/// `Section` is not answerable: in the legacy flat schema it acts as a
/// heading marker that delimits the questions following it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Text,
    Number,
    Date,
    Time,
    Email,
    Phone,
    Radio,
    Checkbox,
    Select,
    Rating,
    File,
    Section,
}

/// Comparison applied between the referenced question's answer and
/// [`SkipLogicCondition::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipOperator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "not-contains")]
    NotContains,
}

/// What happens to the owning question when the condition matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipAction {
    Show,
    Hide,
}

/// Conditional visibility rule attached to a question.
///
/// `reference_question_index` is a raw position into the governing flat
/// question list (the page's questions in the hierarchical model, the
/// whole list in the flat one). It is kept exactly as stored: removing or
/// reordering questions does NOT renumber it, matching the wire contract
/// of the existing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipLogicCondition {
    pub reference_question_index: usize,
    pub operator: SkipOperator,
    pub value: String,
    pub action: SkipAction,
}

/// A single form question.
///
/// Field names follow the backend JSON contract (`helpText`, `ratingMin`,
/// `skipLogic`, ...). `id` is assigned by the backend on first save; until
/// then a question's position in its owning sequence is its only identity.
/// `page_number` is a legacy placement hint used when importing a flat
/// schema into the paged model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub label: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub required: bool,
    pub placeholder: String,
    #[serde(rename = "helpText")]
    pub help_text: String,
    pub choices: Vec<String>,
    #[serde(rename = "ratingMin", default)]
    pub rating_min: i32,
    #[serde(rename = "ratingMax", default = "default_rating_max")]
    pub rating_max: i32,
    #[serde(rename = "skipLogic", default, skip_serializing_if = "Option::is_none")]
    pub skip_logic: Option<SkipLogicCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "pageNumber", default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u64>,
}

impl Default for Question {
    fn default() -> Self {
        Self {
            label: String::new(),
            question_type: QuestionType::Text,
            required: false,
            placeholder: String::new(),
            help_text: String::new(),
            choices: Vec::new(),
            rating_min: 0,
            rating_max: default_rating_max(),
            skip_logic: None,
            id: None,
            page_number: None,
        }
    }
}

impl Question {
    /// Everything except a `Section` heading marker takes an answer.
    pub fn is_answerable(&self) -> bool {
        self.question_type != QuestionType::Section
    }

    /// Returns a copy with `choice` appended.
    ///
    /// Radio questions are capped at [`RADIO_CHOICE_CAP`] choices; adding
    /// beyond the cap returns the question unchanged.
    pub fn with_choice_added(&self, choice: impl Into<String>) -> Self {
        let mut next = self.clone();
        if next.question_type == QuestionType::Radio && next.choices.len() >= RADIO_CHOICE_CAP {
            return next;
        }
        next.choices.push(choice.into());
        next
    }

    /// Returns a copy with the choice at `index` removed; out-of-range
    /// indices leave the question unchanged.
    pub fn with_choice_removed(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.choices.len() {
            next.choices.remove(index);
        }
        next
    }

    /// Returns a copy with the choice at `index` replaced.
    pub fn with_choice_updated(&self, index: usize, choice: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.choices.get_mut(index) {
            *slot = choice.into();
        }
        next
    }
}

fn default_rating_max() -> i32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_wire_contract() {
        let question = Question::default();
        assert_eq!(question.question_type, QuestionType::Text);
        assert_eq!(question.rating_min, 0);
        assert_eq!(question.rating_max, 5);
        assert!(!question.required);
        assert!(question.choices.is_empty());
        assert!(question.id.is_none());
    }

    #[test]
    fn radio_choices_are_capped_at_two() {
        let radio = Question {
            question_type: QuestionType::Radio,
            ..Question::default()
        };
        let radio = radio.with_choice_added("Yes").with_choice_added("No");
        assert_eq!(radio.choices, vec!["Yes", "No"]);

        let unchanged = radio.with_choice_added("Maybe");
        assert_eq!(unchanged.choices, vec!["Yes", "No"]);
    }

    #[test]
    fn non_radio_choices_are_not_capped() {
        let select = Question {
            question_type: QuestionType::Select,
            ..Question::default()
        };
        let select = select
            .with_choice_added("a")
            .with_choice_added("b")
            .with_choice_added("c");
        assert_eq!(select.choices.len(), 3);
    }

    #[test]
    fn question_json_uses_backend_field_names() {
        let question = Question {
            label: "Age".into(),
            question_type: QuestionType::Number,
            help_text: "In years".into(),
            skip_logic: Some(SkipLogicCondition {
                reference_question_index: 0,
                operator: SkipOperator::Eq,
                value: "yes".into(),
                action: SkipAction::Show,
            }),
            ..Question::default()
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["helpText"], "In years");
        assert_eq!(json["ratingMax"], 5);
        assert_eq!(json["skipLogic"]["referenceQuestionIndex"], 0);
        assert_eq!(json["skipLogic"]["operator"], "==");
        assert_eq!(json["skipLogic"]["action"], "show");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn skip_operator_round_trips_through_wire_strings() {
        for (op, wire) in [
            (SkipOperator::Eq, "\"==\""),
            (SkipOperator::Ne, "\"!=\""),
            (SkipOperator::Contains, "\"contains\""),
            (SkipOperator::NotContains, "\"not-contains\""),
        ] {
            assert_eq!(serde_json::to_string(&op).unwrap(), wire);
            assert_eq!(serde_json::from_str::<SkipOperator>(wire).unwrap(), op);
        }
    }
}
