//! Fill-out / preview renderer: root module wiring the component with
//! submodules for state, update logic, and view rendering.
//!
//! Fetches a published schema on first render and restores any saved
//! progress for it from local storage. Every answer change is written
//! straight back to storage, so a reload resumes where the user left off.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::store::SchemaStore;

use crate::api::ApiClient;
use crate::toast::show_toast;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::PreviewComponent;

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewProps {
    pub form_id: u64,
}

impl Component for PreviewComponent {
    type Message = Msg;
    type Properties = PreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PreviewComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let form_id = ctx.props().form_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                match ApiClient::anonymous().fetch(form_id).await {
                    Ok(schema) => link.send_message(Msg::SchemaLoaded(schema)),
                    Err(err) => {
                        gloo_console::error!(format!("loading form {form_id} failed: {err}"));
                        show_toast("Could not load the form.");
                        link.send_message(Msg::LoadFailed);
                    }
                }
            });
        }
    }
}
