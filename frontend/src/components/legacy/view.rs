//! View rendering for the legacy flat editor.
//!
//! The flat list is rendered through `group_questions_by_section`,
//! recomputed from the questions on every render; original flat indices
//! ride along in each group item so edits and moves always address the
//! real list. Up/down buttons swap with the flat neighbour, which can be
//! a section marker — moving a question "out of" a group is exactly that
//! swap, same as the original editor.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::edit::grouping::{group_questions_by_section, SectionGroup};

use crate::components::question_editor::question_editor;

use super::{LegacyEditorComponent, Msg};

pub fn view(component: &LegacyEditorComponent, ctx: &Context<LegacyEditorComponent>) -> Html {
    let link = ctx.link();
    let groups = group_questions_by_section(&component.schema.questions);
    let total = component.schema.questions.len();

    html! {
        <div class="legacy-editor">
            <div class="legacy-toolbar">
                <button onclick={link.callback(|_| Msg::AddQuestion)}>{"Add question"}</button>
                <button onclick={link.callback(|_| Msg::AddSectionMarker)}>{"Add section"}</button>
                <button onclick={link.callback(|_| Msg::Save)}>{"Save"}</button>
                <button onclick={link.callback(|_| Msg::OpenInBuilder)}>{"Open in page builder"}</button>
            </div>
            <input
                class="form-title"
                placeholder="Form title"
                value={component.schema.title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <textarea
                placeholder="Form description"
                value={component.schema.description.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
            { for groups.iter().map(|group| build_group(component, link, group, total)) }
        </div>
    }
}

fn build_group(
    component: &LegacyEditorComponent,
    link: &Scope<LegacyEditorComponent>,
    group: &SectionGroup<'_>,
    total: usize,
) -> Html {
    let key = group.section_index;
    let collapsed = component.collapsed.contains(&key);

    let header = match (group.section_index, group.section_question) {
        (Some(index), Some(marker)) => {
            let marker = marker.clone();
            html! {
                <>
                    <input
                        class="group-title"
                        placeholder="Section title"
                        value={marker.label.clone()}
                        oninput={link.callback(move |e: InputEvent| {
                            let mut next = marker.clone();
                            next.label = e.target_unchecked_into::<HtmlInputElement>().value();
                            Msg::UpdateQuestion(index, next)
                        })}
                    />
                    <button onclick={link.callback(move |_| Msg::RemoveQuestion(index))}>
                        {"Remove section"}
                    </button>
                </>
            }
        }
        _ => html! { <span class="group-title">{"Ungrouped questions"}</span> },
    };

    html! {
        <div class="legacy-group">
            <div class="group-header">
                <button class="toggle-btn" onclick={link.callback(move |_| Msg::ToggleGroup(key))}>
                    { if collapsed { "▸" } else { "▾" } }
                </button>
                { header }
            </div>
            {
                if collapsed {
                    html! {}
                } else {
                    html! {
                        <div class="group-body">
                            {
                                for group.items.iter().map(|item| {
                                    build_question_row(link, item.index, item.question, total)
                                })
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_question_row(
    link: &Scope<LegacyEditorComponent>,
    index: usize,
    question: &common::model::question::Question,
    total: usize,
) -> Html {
    html! {
        <div class="question-editor-row">
            { question_editor(question, link.callback(move |q| Msg::UpdateQuestion(index, q))) }
            <div class="question-actions">
                <button
                    disabled={index == 0}
                    onclick={link.callback(move |_| Msg::MoveQuestion { from: index, to: index.saturating_sub(1) })}
                >
                    {"Up"}
                </button>
                <button
                    disabled={index + 1 >= total}
                    onclick={link.callback(move |_| Msg::MoveQuestion { from: index, to: index + 1 })}
                >
                    {"Down"}
                </button>
                <button onclick={link.callback(move |_| Msg::RemoveQuestion(index))}>
                    {"Remove"}
                </button>
                <button onclick={link.callback(move |_| Msg::InsertQuestion(index + 1))}>
                    {"Insert below"}
                </button>
            </div>
        </div>
    }
}
