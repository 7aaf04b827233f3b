//! Update logic for the fill-out renderer.

use yew::prelude::*;

use common::answers::{next_page, previous_page};

use super::messages::Msg;
use super::state::{load_saved_answers, persist_answers, PreviewComponent};

pub fn update(
    component: &mut PreviewComponent,
    ctx: &Context<PreviewComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SchemaLoaded(schema) => {
            component.answers = load_saved_answers(ctx.props().form_id);
            component.schema = Some(schema);
            component.current_page = 0;
            true
        }
        Msg::LoadFailed => {
            component.failed = true;
            true
        }
        Msg::Answer(question_id, value) => {
            component.answers.insert(question_id, value);
            persist_answers(ctx.props().form_id, &component.answers);
            true
        }
        Msg::NextPage => {
            let page_count = component
                .schema
                .as_ref()
                .map_or(0, |schema| schema.pages.len());
            let target = next_page(component.current_page, page_count);
            let moved = target != component.current_page;
            component.current_page = target;
            moved
        }
        Msg::PreviousPage => {
            let target = previous_page(component.current_page);
            let moved = target != component.current_page;
            component.current_page = target;
            moved
        }
    }
}
