//! The per-question editing card shared by the page builder and the
//! legacy flat editor.
//!
//! The card is a pure view: every input builds a complete new `Question`
//! from the current one and emits it through `on_change`; the owning
//! component routes it into the right copy-on-write schema operation.
//! Choice edits go through the `Question::with_choice_*` helpers, so the
//! radio two-choice cap is enforced by the model, not the view.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::model::question::{
    Question, QuestionType, SkipAction, SkipLogicCondition, SkipOperator, RADIO_CHOICE_CAP,
};

const TYPE_OPTIONS: &[(QuestionType, &str, &str)] = &[
    (QuestionType::Text, "text", "Text"),
    (QuestionType::Number, "number", "Number"),
    (QuestionType::Date, "date", "Date"),
    (QuestionType::Time, "time", "Time"),
    (QuestionType::Email, "email", "Email"),
    (QuestionType::Phone, "phone", "Phone"),
    (QuestionType::Radio, "radio", "Radio (max 2 choices)"),
    (QuestionType::Checkbox, "checkbox", "Checkboxes"),
    (QuestionType::Select, "select", "Dropdown"),
    (QuestionType::Rating, "rating", "Rating"),
    (QuestionType::File, "file", "File upload"),
];

const OPERATOR_OPTIONS: &[(SkipOperator, &str, &str)] = &[
    (SkipOperator::Eq, "==", "equals"),
    (SkipOperator::Ne, "!=", "does not equal"),
    (SkipOperator::Contains, "contains", "contains"),
    (SkipOperator::NotContains, "not-contains", "does not contain"),
];

/// Renders the editing card for one question.
pub fn question_editor(question: &Question, on_change: Callback<Question>) -> Html {
    html! {
        <div class="question-card">
            <div class="question-row">
                <input
                    class="question-label"
                    placeholder="Question label"
                    value={question.label.clone()}
                    oninput={text_edit(question, &on_change, |q, v| q.label = v)}
                />
                { build_type_select(question, &on_change) }
                <label class="required-toggle">
                    <input
                        type="checkbox"
                        checked={question.required}
                        onchange={checkbox_edit(question, &on_change, |q, v| q.required = v)}
                    />
                    {"Required"}
                </label>
            </div>
            <div class="question-row">
                <input
                    placeholder="Placeholder"
                    value={question.placeholder.clone()}
                    oninput={text_edit(question, &on_change, |q, v| q.placeholder = v)}
                />
                <input
                    placeholder="Help text"
                    value={question.help_text.clone()}
                    oninput={text_edit(question, &on_change, |q, v| q.help_text = v)}
                />
            </div>
            { build_choices_editor(question, &on_change) }
            { build_rating_editor(question, &on_change) }
            { build_skip_logic_editor(question, &on_change) }
        </div>
    }
}

fn text_edit(
    question: &Question,
    on_change: &Callback<Question>,
    apply: fn(&mut Question, String),
) -> Callback<InputEvent> {
    let question = question.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = question.clone();
        apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
        on_change.emit(next);
    })
}

fn checkbox_edit(
    question: &Question,
    on_change: &Callback<Question>,
    apply: fn(&mut Question, bool),
) -> Callback<Event> {
    let question = question.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let mut next = question.clone();
        apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().checked());
        on_change.emit(next);
    })
}

fn build_type_select(question: &Question, on_change: &Callback<Question>) -> Html {
    let current = question.question_type;
    let onchange = {
        let question = question.clone();
        let on_change = on_change.clone();
        Callback::from(move |e: Event| {
            let mut next = question.clone();
            next.question_type =
                type_from_value(&e.target_unchecked_into::<HtmlSelectElement>().value());
            on_change.emit(next);
        })
    };
    html! {
        <select {onchange}>
            {
                for TYPE_OPTIONS.iter().map(|(question_type, value, label)| html! {
                    <option value={*value} selected={*question_type == current}>{*label}</option>
                })
            }
        </select>
    }
}

fn type_from_value(value: &str) -> QuestionType {
    TYPE_OPTIONS
        .iter()
        .find(|(_, wire, _)| *wire == value)
        .map(|(question_type, _, _)| *question_type)
        .unwrap_or_default()
}

fn build_choices_editor(question: &Question, on_change: &Callback<Question>) -> Html {
    if !matches!(
        question.question_type,
        QuestionType::Radio | QuestionType::Checkbox | QuestionType::Select
    ) {
        return html! {};
    }

    let at_radio_cap = question.question_type == QuestionType::Radio
        && question.choices.len() >= RADIO_CHOICE_CAP;
    let add_choice = {
        let question = question.clone();
        let on_change = on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(question.with_choice_added("")))
    };

    html! {
        <div class="choices-editor">
            {
                for question.choices.iter().enumerate().map(|(index, choice)| {
                    let update = {
                        let question = question.clone();
                        let on_change = on_change.clone();
                        Callback::from(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlInputElement>().value();
                            on_change.emit(question.with_choice_updated(index, value));
                        })
                    };
                    let remove = {
                        let question = question.clone();
                        let on_change = on_change.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_change.emit(question.with_choice_removed(index));
                        })
                    };
                    html! {
                        <div class="choice-row">
                            <input placeholder="Choice" value={choice.clone()} oninput={update} />
                            <button onclick={remove}>{"Remove"}</button>
                        </div>
                    }
                })
            }
            <button onclick={add_choice} disabled={at_radio_cap}>{"Add choice"}</button>
        </div>
    }
}

fn build_rating_editor(question: &Question, on_change: &Callback<Question>) -> Html {
    if question.question_type != QuestionType::Rating {
        return html! {};
    }

    let bound_edit = |apply: fn(&mut Question, i32), current: i32| {
        let question = question.clone();
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = question.clone();
            apply(&mut next, raw.parse().unwrap_or(current));
            on_change.emit(next);
        })
    };

    html! {
        <div class="rating-editor">
            <label>
                {"Min"}
                <input
                    type="number"
                    value={question.rating_min.to_string()}
                    oninput={bound_edit(|q, v| q.rating_min = v, question.rating_min)}
                />
            </label>
            <label>
                {"Max"}
                <input
                    type="number"
                    value={question.rating_max.to_string()}
                    oninput={bound_edit(|q, v| q.rating_max = v, question.rating_max)}
                />
            </label>
        </div>
    }
}

fn build_skip_logic_editor(question: &Question, on_change: &Callback<Question>) -> Html {
    let Some(condition) = &question.skip_logic else {
        let add = {
            let question = question.clone();
            let on_change = on_change.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = question.clone();
                next.skip_logic = Some(SkipLogicCondition {
                    reference_question_index: 0,
                    operator: SkipOperator::Eq,
                    value: String::new(),
                    action: SkipAction::Show,
                });
                on_change.emit(next);
            })
        };
        return html! {
            <button class="skip-logic-add" onclick={add}>{"Add skip logic"}</button>
        };
    };

    let condition_edit = |apply: fn(&mut SkipLogicCondition, String)| {
        let question = question.clone();
        let on_change = on_change.clone();
        Callback::from(move |value: String| {
            let mut next = question.clone();
            if let Some(condition) = next.skip_logic.as_mut() {
                apply(condition, value);
            }
            on_change.emit(next);
        })
    };

    let on_reference = condition_edit(|c, v| {
        c.reference_question_index = v.parse().unwrap_or(c.reference_question_index);
    });
    let on_operator = condition_edit(|c, v| {
        c.operator = OPERATOR_OPTIONS
            .iter()
            .find(|(_, wire, _)| *wire == v)
            .map(|(operator, _, _)| *operator)
            .unwrap_or(c.operator);
    });
    let on_value = condition_edit(|c, v| c.value = v);
    let on_action = condition_edit(|c, v| {
        c.action = if v == "hide" { SkipAction::Hide } else { SkipAction::Show };
    });
    let remove = {
        let question = question.clone();
        let on_change = on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = question.clone();
            next.skip_logic = None;
            on_change.emit(next);
        })
    };

    html! {
        <div class="skip-logic-editor">
            <select onchange={Callback::from(move |e: Event| {
                on_action.emit(e.target_unchecked_into::<HtmlSelectElement>().value())
            })}>
                <option value="show" selected={condition.action == SkipAction::Show}>{"Show"}</option>
                <option value="hide" selected={condition.action == SkipAction::Hide}>{"Hide"}</option>
            </select>
            {"this question when answer to question #"}
            <input
                type="number"
                min="0"
                value={condition.reference_question_index.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    on_reference.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <select onchange={Callback::from(move |e: Event| {
                on_operator.emit(e.target_unchecked_into::<HtmlSelectElement>().value())
            })}>
                {
                    for OPERATOR_OPTIONS.iter().map(|(operator, wire, label)| html! {
                        <option value={*wire} selected={*operator == condition.operator}>{*label}</option>
                    })
                }
            </select>
            <input
                placeholder="Value"
                value={condition.value.clone()}
                oninput={Callback::from(move |e: InputEvent| {
                    on_value.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button onclick={remove}>{"Remove"}</button>
        </div>
    }
}
