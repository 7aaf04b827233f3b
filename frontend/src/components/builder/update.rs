//! Update logic for the page builder.
//!
//! Every structural message is a thin delegation to a copy-on-write
//! operation in `common::edit::hierarchical`; the returned schema replaces
//! the current one wholesale and the dirty flag is recomputed. Saving
//! hands the schema to the store collaborator without blocking further
//! edits; a failed save keeps all local edits and only shows a message.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::form::FormSchema;
use common::store::save_schema;

use crate::api::ApiClient;
use crate::toast::show_toast;

use super::helpers::{compute_schema_md5, set_window_dirty_flag};
use super::messages::Msg;
use super::state::BuilderComponent;

pub fn update(component: &mut BuilderComponent, ctx: &Context<BuilderComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetSchema(schema) => {
            // A schema with an id reflects what the backend has; one
            // without (a legacy import) has never been saved.
            component.original_md5 = schema
                .id
                .is_some()
                .then(|| compute_schema_md5(&schema));
            component.schema = schema;
            component.collapsed_pages.clear();
            component.collapsed_sections.clear();
            set_window_dirty_flag(component.is_dirty());
            true
        }

        Msg::UpdateTitle(title) => apply(component, component.schema.with_title(title)),
        Msg::UpdateDescription(description) => {
            apply(component, component.schema.with_description(description))
        }
        Msg::UpdateCountry(country) => apply(component, component.schema.with_country(country)),
        Msg::UpdateDueDate(due_date) => apply(component, component.schema.with_due_date(due_date)),

        Msg::AddPage => apply(component, component.schema.with_page_added()),
        Msg::RemovePage(page) => apply(component, component.schema.with_page_removed(page)),
        Msg::MovePageUp(page) => apply(component, component.schema.with_page_moved_up(page)),
        Msg::MovePageDown(page) => apply(component, component.schema.with_page_moved_down(page)),
        Msg::UpdatePageTitle(page, title) => {
            apply(component, component.schema.with_page_title(page, title))
        }
        Msg::UpdatePageDescription(page, description) => {
            apply(component, component.schema.with_page_description(page, description))
        }
        Msg::TogglePage(page) => {
            if !component.collapsed_pages.remove(&page) {
                component.collapsed_pages.insert(page);
            }
            true
        }

        Msg::AddUnsectionedQuestion(page) => {
            apply(component, component.schema.with_unsectioned_question_added(page))
        }
        Msg::RemoveUnsectionedQuestion(page, index) => apply(
            component,
            component.schema.with_unsectioned_question_removed(page, index),
        ),
        Msg::MoveUnsectionedQuestionUp(page, index) => apply(
            component,
            component.schema.with_unsectioned_question_moved_up(page, index),
        ),
        Msg::MoveUnsectionedQuestionDown(page, index) => apply(
            component,
            component.schema.with_unsectioned_question_moved_down(page, index),
        ),
        Msg::UpdateUnsectionedQuestion(page, index, question) => apply(
            component,
            component
                .schema
                .with_unsectioned_question_updated(page, index, question),
        ),

        Msg::AddSection(page) => apply(component, component.schema.with_section_added(page)),
        Msg::RemoveSection(page, section) => {
            apply(component, component.schema.with_section_removed(page, section))
        }
        Msg::MoveSectionUp(page, section) => {
            apply(component, component.schema.with_section_moved_up(page, section))
        }
        Msg::MoveSectionDown(page, section) => {
            apply(component, component.schema.with_section_moved_down(page, section))
        }
        Msg::UpdateSectionTitle(page, section, title) => apply(
            component,
            component.schema.with_section_title(page, section, title),
        ),
        Msg::ToggleSection(page, section) => {
            if !component.collapsed_sections.remove(&(page, section)) {
                component.collapsed_sections.insert((page, section));
            }
            true
        }

        Msg::AddSectionQuestion(page, section) => apply(
            component,
            component.schema.with_section_question_added(page, section),
        ),
        Msg::RemoveSectionQuestion(page, section, index) => apply(
            component,
            component
                .schema
                .with_section_question_removed(page, section, index),
        ),
        Msg::MoveSectionQuestionUp(page, section, index) => apply(
            component,
            component
                .schema
                .with_section_question_moved_up(page, section, index),
        ),
        Msg::MoveSectionQuestionDown(page, section, index) => apply(
            component,
            component
                .schema
                .with_section_question_moved_down(page, section, index),
        ),
        Msg::UpdateSectionQuestion(page, section, index, question) => apply(
            component,
            component
                .schema
                .with_section_question_updated(page, section, index, question),
        ),

        Msg::Save => {
            persist(ctx, component.schema.clone());
            false
        }
        Msg::Publish => {
            // The local schema stays a draft until the backend confirms:
            // publishing saves a published override and adopts the result.
            persist(ctx, component.schema.publish());
            false
        }
        Msg::SaveSucceeded(saved) => {
            let first_save = component.schema.id.is_none();
            let just_published = saved.published && !component.schema.published;
            component.original_md5 = Some(compute_schema_md5(&saved));
            component.schema = saved;
            set_window_dirty_flag(component.is_dirty());

            show_toast(if just_published { "Form published." } else { "Form saved." });
            if first_save {
                if let Some(id) = component.schema.id {
                    ctx.props().on_saved.emit(id);
                }
            }
            true
        }
    }
}

/// Replaces the schema with the result of an edit operation.
fn apply(component: &mut BuilderComponent, next: FormSchema) -> bool {
    component.schema = next;
    set_window_dirty_flag(component.is_dirty());
    true
}

/// Hands `schema` to the store. Rapid repeated saves are not coalesced;
/// the last response to arrive wins.
fn persist(ctx: &Context<BuilderComponent>, schema: FormSchema) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match save_schema(&ApiClient::anonymous(), &schema).await {
            Ok(saved) => link.send_message(Msg::SaveSucceeded(saved)),
            Err(err) => {
                gloo_console::error!(format!("saving form failed: {err}"));
                show_toast(&format!("Could not save the form: {err}"));
            }
        }
    });
}
