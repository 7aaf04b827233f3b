//! View rendering for the page builder.
//!
//! Pages render as an accordion of cards, each holding its unsectioned
//! questions and its sections; sections nest their own question lists.
//! Expand/collapse is the only state owned here — every edit goes through
//! a message into the edit model.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::form::{Page, Section};
use common::model::question::Question;

use crate::components::question_editor::question_editor;

use super::messages::Msg;
use super::state::BuilderComponent;

pub fn view(component: &BuilderComponent, ctx: &Context<BuilderComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="builder">
            { build_toolbar(component, link) }
            { build_meta(component, link) }
            {
                for component.schema.pages.iter().enumerate().map(|(page_index, page)| {
                    build_page_card(component, link, page_index, page)
                })
            }
            <button class="add-page" onclick={link.callback(|_| Msg::AddPage)}>
                {"Add page"}
            </button>
        </div>
    }
}

fn build_toolbar(component: &BuilderComponent, link: &Scope<BuilderComponent>) -> Html {
    html! {
        <div class="builder-toolbar">
            <button onclick={link.callback(|_| Msg::Save)} style="position: relative;">
                {"Save"}
                {
                    if component.is_dirty() {
                        html! {
                            <span
                                title="Unsaved changes"
                                style="
                                    position: absolute;
                                    top: 4px;
                                    right: 6px;
                                    width: 8px;
                                    height: 8px;
                                    background: #e53935;
                                    border-radius: 50%;
                                    display: inline-block;
                                "
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </button>
            {
                if component.schema.published {
                    html! { <span class="published-badge">{"Published"}</span> }
                } else {
                    html! {
                        <button onclick={link.callback(|_| Msg::Publish)}>{"Publish"}</button>
                    }
                }
            }
        </div>
    }
}

fn build_meta(component: &BuilderComponent, link: &Scope<BuilderComponent>) -> Html {
    let schema = &component.schema;
    html! {
        <div class="form-meta">
            <input
                class="form-title"
                placeholder="Form title"
                value={schema.title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <textarea
                placeholder="Form description"
                value={schema.description.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
            <div class="form-meta-row">
                <input
                    placeholder="Country"
                    value={schema.country.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateCountry(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    type="date"
                    value={schema.due_date.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateDueDate(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
        </div>
    }
}

fn build_page_card(
    component: &BuilderComponent,
    link: &Scope<BuilderComponent>,
    page_index: usize,
    page: &Page,
) -> Html {
    let collapsed = component.collapsed_pages.contains(&page_index);
    let page_count = component.schema.pages.len();

    html! {
        <div class="page-card">
            <div class="page-header">
                { toggle_button(link, collapsed, Msg::TogglePage(page_index)) }
                <span class="card-kind">{format!("Page {}", page_index + 1)}</span>
                <input
                    placeholder="Page title"
                    value={page.title.clone()}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::UpdatePageTitle(page_index, e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                { action_button(link, "Up", Msg::MovePageUp(page_index), page_index == 0) }
                { action_button(link, "Down", Msg::MovePageDown(page_index), page_index + 1 == page_count) }
                { action_button(link, "Remove", Msg::RemovePage(page_index), false) }
            </div>
            {
                if collapsed {
                    html! {}
                } else {
                    html! {
                        <div class="page-body">
                            <textarea
                                placeholder="Page description (rich text)"
                                value={page.description.clone()}
                                oninput={link.callback(move |e: InputEvent| {
                                    Msg::UpdatePageDescription(
                                        page_index,
                                        e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                                    )
                                })}
                            />
                            { build_unsectioned_list(link, page_index, page) }
                            {
                                for page.sections.iter().enumerate().map(|(section_index, section)| {
                                    build_section_card(component, link, page_index, section_index, section)
                                })
                            }
                            <button onclick={link.callback(move |_| Msg::AddSection(page_index))}>
                                {"Add section"}
                            </button>
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_unsectioned_list(link: &Scope<BuilderComponent>, page_index: usize, page: &Page) -> Html {
    let count = page.unsectioned.len();
    html! {
        <div class="unsectioned-list">
            {
                for page.unsectioned.iter().enumerate().map(|(index, question)| {
                    question_row(
                        link,
                        question,
                        link.callback(move |q| Msg::UpdateUnsectionedQuestion(page_index, index, q)),
                        Msg::MoveUnsectionedQuestionUp(page_index, index),
                        Msg::MoveUnsectionedQuestionDown(page_index, index),
                        Msg::RemoveUnsectionedQuestion(page_index, index),
                        index == 0,
                        index + 1 == count,
                    )
                })
            }
            <button onclick={link.callback(move |_| Msg::AddUnsectionedQuestion(page_index))}>
                {"Add question"}
            </button>
        </div>
    }
}

fn build_section_card(
    component: &BuilderComponent,
    link: &Scope<BuilderComponent>,
    page_index: usize,
    section_index: usize,
    section: &Section,
) -> Html {
    let collapsed = component
        .collapsed_sections
        .contains(&(page_index, section_index));
    let section_count = component.schema.pages[page_index].sections.len();
    let question_count = section.questions.len();

    html! {
        <div class="section-card">
            <div class="section-header">
                { toggle_button(link, collapsed, Msg::ToggleSection(page_index, section_index)) }
                <span class="card-kind">{"Section"}</span>
                <input
                    placeholder="Section title"
                    value={section.title.clone()}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::UpdateSectionTitle(
                            page_index,
                            section_index,
                            e.target_unchecked_into::<HtmlInputElement>().value(),
                        )
                    })}
                />
                { action_button(link, "Up", Msg::MoveSectionUp(page_index, section_index), section_index == 0) }
                { action_button(link, "Down", Msg::MoveSectionDown(page_index, section_index), section_index + 1 == section_count) }
                { action_button(link, "Remove", Msg::RemoveSection(page_index, section_index), false) }
            </div>
            {
                if collapsed {
                    html! {}
                } else {
                    html! {
                        <div class="section-body">
                            {
                                for section.questions.iter().enumerate().map(|(index, question)| {
                                    question_row(
                                        link,
                                        question,
                                        link.callback(move |q| {
                                            Msg::UpdateSectionQuestion(page_index, section_index, index, q)
                                        }),
                                        Msg::MoveSectionQuestionUp(page_index, section_index, index),
                                        Msg::MoveSectionQuestionDown(page_index, section_index, index),
                                        Msg::RemoveSectionQuestion(page_index, section_index, index),
                                        index == 0,
                                        index + 1 == question_count,
                                    )
                                })
                            }
                            <button onclick={link.callback(move |_| {
                                Msg::AddSectionQuestion(page_index, section_index)
                            })}>
                                {"Add question to section"}
                            </button>
                        </div>
                    }
                }
            }
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn question_row(
    link: &Scope<BuilderComponent>,
    question: &Question,
    on_change: Callback<Question>,
    up: Msg,
    down: Msg,
    remove: Msg,
    first: bool,
    last: bool,
) -> Html {
    html! {
        <div class="question-editor-row">
            { question_editor(question, on_change) }
            <div class="question-actions">
                { action_button(link, "Up", up, first) }
                { action_button(link, "Down", down, last) }
                { action_button(link, "Remove", remove, false) }
            </div>
        </div>
    }
}

fn action_button(link: &Scope<BuilderComponent>, label: &str, msg: Msg, disabled: bool) -> Html {
    html! {
        <button onclick={link.callback(move |_| msg.clone())} {disabled}>{label}</button>
    }
}

fn toggle_button(link: &Scope<BuilderComponent>, collapsed: bool, msg: Msg) -> Html {
    html! {
        <button class="toggle-btn" onclick={link.callback(move |_| msg.clone())}>
            { if collapsed { "▸" } else { "▾" } }
        </button>
    }
}
