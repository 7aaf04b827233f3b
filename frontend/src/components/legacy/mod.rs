//! Legacy flat-schema editor.
//!
//! The old form shape is one flat question list in which `Section`-typed
//! questions act as delimiters. This editor keeps that shape in memory
//! and renders it as grouped accordions (see `common::edit::grouping`),
//! but nothing flat ever reaches the backend: saving converts through
//! `FlatFormSchema::into_hierarchical` first, and "Open in page builder"
//! hands the converted schema to the builder.

use std::collections::HashSet;

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::form::{FlatFormSchema, FormSchema};
use common::model::question::{Question, QuestionType};
use common::store::save_schema;

use crate::api::ApiClient;
use crate::toast::show_toast;

mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct LegacyEditorProps {
    /// Fired with the converted hierarchical schema when the user asks to
    /// continue editing in the page builder.
    #[prop_or_default]
    pub on_open_in_builder: Callback<FormSchema>,
}

#[derive(Clone)]
pub enum Msg {
    UpdateTitle(String),
    UpdateDescription(String),
    AddQuestion,
    AddSectionMarker,
    /// Insert a default question at this flat index.
    InsertQuestion(usize),
    UpdateQuestion(usize, Question),
    RemoveQuestion(usize),
    /// Swap semantics, inherited from the original editor: the two flat
    /// indices exchange places.
    MoveQuestion { from: usize, to: usize },
    /// Collapse toggle per group; `None` is the leading unsectioned group.
    ToggleGroup(Option<usize>),
    Save,
    SaveSucceeded(FormSchema),
    OpenInBuilder,
}

pub struct LegacyEditorComponent {
    pub schema: FlatFormSchema,
    pub collapsed: HashSet<Option<usize>>,
    /// Backend id adopted on first save so later saves update in place.
    pub saved_id: Option<u64>,
}

impl LegacyEditorComponent {
    fn converted(&self) -> FormSchema {
        let mut schema = self.schema.clone().into_hierarchical();
        schema.id = self.saved_id;
        schema
    }
}

impl Component for LegacyEditorComponent {
    type Message = Msg;
    type Properties = LegacyEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            schema: FlatFormSchema::default(),
            collapsed: HashSet::new(),
            saved_id: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateTitle(title) => {
                self.schema = self.schema.with_title(title);
                true
            }
            Msg::UpdateDescription(description) => {
                self.schema = self.schema.with_description(description);
                true
            }
            Msg::AddQuestion => {
                self.schema = self.schema.with_question_added(Question::default());
                true
            }
            Msg::AddSectionMarker => {
                self.schema = self.schema.with_question_added(Question {
                    question_type: QuestionType::Section,
                    label: "New section".into(),
                    ..Question::default()
                });
                true
            }
            Msg::InsertQuestion(index) => {
                self.schema = self.schema.with_question_inserted(Question::default(), index);
                true
            }
            Msg::UpdateQuestion(index, question) => {
                self.schema = self.schema.with_question_updated(index, question);
                true
            }
            Msg::RemoveQuestion(index) => {
                self.schema = self.schema.with_question_removed(index);
                true
            }
            Msg::MoveQuestion { from, to } => {
                self.schema = self.schema.with_question_moved(from, to);
                true
            }
            Msg::ToggleGroup(group) => {
                if !self.collapsed.remove(&group) {
                    self.collapsed.insert(group);
                }
                true
            }
            Msg::Save => {
                let schema = self.converted();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match save_schema(&ApiClient::anonymous(), &schema).await {
                        Ok(saved) => link.send_message(Msg::SaveSucceeded(saved)),
                        Err(err) => {
                            gloo_console::error!(format!("saving legacy form failed: {err}"));
                            show_toast(&format!("Could not save the form: {err}"));
                        }
                    }
                });
                false
            }
            Msg::SaveSucceeded(saved) => {
                self.saved_id = saved.id;
                match self.saved_id {
                    Some(id) => show_toast(&format!("Saved as form #{id}.")),
                    None => show_toast("Form saved."),
                }
                true
            }
            Msg::OpenInBuilder => {
                ctx.props().on_open_in_builder.emit(self.converted());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
