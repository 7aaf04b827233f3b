//! Page builder: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! On first render the builder seeds itself from, in order of precedence:
//! an imported legacy schema passed in props, the form fetched for
//! `form_id`, or a fresh one-page draft. A fetch failure also falls back
//! to a fresh draft, with a toast explaining what happened.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::store::SchemaStore;

use crate::api::ApiClient;
use crate::toast::show_toast;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::fresh_draft;
pub use messages::Msg;
pub use props::BuilderProps;
pub use state::BuilderComponent;

impl Component for BuilderComponent {
    type Message = Msg;
    type Properties = BuilderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BuilderComponent::new()
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

            if let Some(imported) = ctx.props().imported.clone() {
                ctx.link().send_message(Msg::SetSchema(imported));
                show_toast("Legacy form imported. Save to keep it.");
            } else if let Some(form_id) = ctx.props().form_id {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match ApiClient::anonymous().fetch(form_id).await {
                        Ok(schema) => {
                            link.send_message(Msg::SetSchema(schema));
                            show_toast("Form loaded.");
                        }
                        Err(err) => {
                            gloo_console::error!(format!("loading form {form_id} failed: {err}"));
                            link.send_message(Msg::SetSchema(fresh_draft()));
                            show_toast("Could not load the form. Started a new draft.");
                        }
                    }
                });
            }
        }
    }
}
