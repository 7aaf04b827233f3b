//! View rendering for the fill-out renderer.
//!
//! Renders one page at a time: the page's rich-text description, its
//! unsectioned questions, then each section under its heading. Skip
//! logic is evaluated against the page's flat question order (the same
//! order reference indices were authored against). Page descriptions are
//! trusted HTML from the form author and injected unchecked; answers are
//! never rendered as HTML.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use common::answers::{completion_percentage, question_is_visible, AnswerMap, AnswerValue};
use common::model::form::Page;
use common::model::question::{Question, QuestionType};

use super::messages::Msg;
use super::state::PreviewComponent;

pub fn view(component: &PreviewComponent, ctx: &Context<PreviewComponent>) -> Html {
    let link = ctx.link();

    let Some(schema) = &component.schema else {
        let text = if component.failed { "Form not found." } else { "Loading form..." };
        return html! { <div class="preview">{text}</div> };
    };

    let percent = completion_percentage(schema, &component.answers);
    let page_count = schema.pages.len();

    html! {
        <div class="preview">
            <h1>{ schema.title.clone() }</h1>
            <p class="form-description">{ schema.description.clone() }</p>
            <div class="progress-track" title={format!("{percent}% complete")}>
                <div class="progress-fill" style={format!("width: {percent}%;")} />
                <span class="progress-label">{format!("{percent}%")}</span>
            </div>
            {
                match schema.pages.get(component.current_page) {
                    Some(page) => build_page(link, page, &component.answers),
                    None => html! {},
                }
            }
            <div class="page-nav">
                <button
                    disabled={component.current_page == 0}
                    onclick={link.callback(|_| Msg::PreviousPage)}
                >
                    {"Back"}
                </button>
                <span>{format!("Page {} of {}", component.current_page + 1, page_count.max(1))}</span>
                <button
                    disabled={component.current_page + 1 >= page_count}
                    onclick={link.callback(|_| Msg::NextPage)}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

fn build_page(link: &Scope<PreviewComponent>, page: &Page, answers: &AnswerMap) -> Html {
    // Skip-logic references are positions in this flattened page order.
    let context: Vec<Question> = page.questions().cloned().collect();

    html! {
        <div class="preview-page">
            <h2>{ page.title.clone() }</h2>
            <div class="page-description">
                { Html::from_html_unchecked(AttrValue::from(page.description.clone())) }
            </div>
            {
                for page.unsectioned.iter().map(|question| {
                    build_question(link, question, &context, answers)
                })
            }
            {
                for page.sections.iter().map(|section| html! {
                    <div class="preview-section">
                        <h3>{ section.title.clone() }</h3>
                        {
                            for section.questions.iter().map(|question| {
                                build_question(link, question, &context, answers)
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}

fn build_question(
    link: &Scope<PreviewComponent>,
    question: &Question,
    context: &[Question],
    answers: &AnswerMap,
) -> Html {
    if !question.is_answerable() || !question_is_visible(question, context, answers) {
        return html! {};
    }

    let widget = match question.id {
        Some(id) => build_widget(link, question, id, answers),
        // Only persisted questions can hold answers; drafts previewed
        // before a save render inert.
        None => html! { <span class="unsaved-note">{"(not yet saved)"}</span> },
    };

    html! {
        <div class="preview-question">
            <label class="question-label">
                { question.label.clone() }
                { if question.required { html! { <span class="required-mark">{"*"}</span> } } else { html! {} } }
            </label>
            {
                if question.help_text.is_empty() {
                    html! {}
                } else {
                    html! { <small class="help-text">{ question.help_text.clone() }</small> }
                }
            }
            { widget }
        </div>
    }
}

fn build_widget(
    link: &Scope<PreviewComponent>,
    question: &Question,
    id: u64,
    answers: &AnswerMap,
) -> Html {
    let text_answer = match answers.get(id) {
        Some(AnswerValue::Text(text)) => text.clone(),
        _ => String::new(),
    };
    let chosen: Vec<String> = match answers.get(id) {
        Some(AnswerValue::Choices(choices)) => choices.clone(),
        _ => Vec::new(),
    };

    let text_input = |input_type: &'static str| {
        html! {
            <input
                type={input_type}
                value={text_answer.clone()}
                placeholder={question.placeholder.clone()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::Answer(id, AnswerValue::Text(e.target_unchecked_into::<HtmlInputElement>().value()))
                })}
            />
        }
    };

    match question.question_type {
        QuestionType::Text => text_input("text"),
        QuestionType::Number => text_input("number"),
        QuestionType::Date => text_input("date"),
        QuestionType::Time => text_input("time"),
        QuestionType::Email => text_input("email"),
        QuestionType::Phone => text_input("tel"),

        QuestionType::Radio => html! {
            <div class="choice-list">
                {
                    for question.choices.iter().map(|choice| {
                        let value = choice.clone();
                        let checked = text_answer == *choice;
                        html! {
                            <label>
                                <input
                                    type="radio"
                                    name={format!("question-{id}")}
                                    {checked}
                                    onchange={link.callback(move |_: Event| {
                                        Msg::Answer(id, AnswerValue::Text(value.clone()))
                                    })}
                                />
                                { choice.clone() }
                            </label>
                        }
                    })
                }
            </div>
        },

        QuestionType::Checkbox => html! {
            <div class="choice-list">
                {
                    for question.choices.iter().map(|choice| {
                        let checked = chosen.contains(choice);
                        let chosen = chosen.clone();
                        let choice_value = choice.clone();
                        html! {
                            <label>
                                <input
                                    type="checkbox"
                                    {checked}
                                    onchange={link.callback(move |_: Event| {
                                        let mut next = chosen.clone();
                                        match next.iter().position(|c| c == &choice_value) {
                                            Some(position) => { next.remove(position); }
                                            None => next.push(choice_value.clone()),
                                        }
                                        Msg::Answer(id, AnswerValue::Choices(next))
                                    })}
                                />
                                { choice.clone() }
                            </label>
                        }
                    })
                }
            </div>
        },

        QuestionType::Select => html! {
            <select onchange={link.callback(move |e: Event| {
                Msg::Answer(id, AnswerValue::Text(e.target_unchecked_into::<HtmlSelectElement>().value()))
            })}>
                <option value="" selected={text_answer.is_empty()}>{"(choose)"}</option>
                {
                    for question.choices.iter().map(|choice| html! {
                        <option value={choice.clone()} selected={text_answer == *choice}>
                            { choice.clone() }
                        </option>
                    })
                }
            </select>
        },

        QuestionType::Rating => html! {
            <div class="rating-row">
                {
                    for (question.rating_min..=question.rating_max).map(|value| {
                        let active = text_answer == value.to_string();
                        html! {
                            <button
                                class={classes!("rating-btn", active.then_some("active"))}
                                onclick={link.callback(move |_| {
                                    Msg::Answer(id, AnswerValue::Text(value.to_string()))
                                })}
                            >
                                { value }
                            </button>
                        }
                    })
                }
            </div>
        },

        QuestionType::File => html! {
            <input
                type="file"
                onchange={link.batch_callback(move |e: Event| {
                    let name = e
                        .target_unchecked_into::<HtmlInputElement>()
                        .files()
                        .and_then(|files| files.get(0))
                        .map(|file| file.name());
                    name.map(|name| Msg::Answer(id, AnswerValue::Text(name)))
                })}
            />
        },

        // Section markers never appear in the paged model.
        QuestionType::Section => html! {},
    }
}
