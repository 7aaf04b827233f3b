//! Participants screen: who a published form is shared with.
//!
//! Peripheral to the edit models — this screen only consumes the
//! participant endpoints of the store collaborator. It is the one screen
//! gated on the session: without a session it renders a login hint
//! instead of fetching. Credentials show up only in the response to a
//! create or regenerate call and are displayed once.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::participant::Participant;
use common::store::SchemaStore;

use crate::api::ApiClient;
use crate::session::Session;
use crate::toast::show_toast;

#[derive(Properties, PartialEq, Clone)]
pub struct ParticipantsProps {
    pub form_id: u64,
}

pub enum Msg {
    SessionChanged(Session),
    Loaded(Vec<Participant>),
    NameInput(String),
    EmailInput(String),
    Create,
    Created(Participant),
    Regenerate(u64),
    Regenerated(Participant),
}

pub struct ParticipantsComponent {
    session: Session,
    _session_handle: Option<ContextHandle<Session>>,
    participants: Vec<Participant>,
    loaded: bool,
    name_input: String,
    email_input: String,
}

impl ParticipantsComponent {
    fn load(&mut self, ctx: &Context<Self>) {
        if self.loaded || !self.session.is_authenticated() {
            return;
        }
        self.loaded = true;
        let form_id = ctx.props().form_id;
        let client = ApiClient::with_session(&self.session);
        let link = ctx.link().clone();
        spawn_local(async move {
            match client.participants(form_id).await {
                Ok(participants) => link.send_message(Msg::Loaded(participants)),
                Err(err) => {
                    gloo_console::error!(format!("loading participants failed: {err}"));
                    show_toast("Could not load participants.");
                }
            }
        });
    }
}

impl Component for ParticipantsComponent {
    type Message = Msg;
    type Properties = ParticipantsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, handle) = ctx
            .link()
            .context::<Session>(ctx.link().callback(Msg::SessionChanged))
            .map(|(session, handle)| (session, Some(handle)))
            .unwrap_or_else(|| (Session::logged_out(), None));

        Self {
            session,
            _session_handle: handle,
            participants: Vec::new(),
            loaded: false,
            name_input: String::new(),
            email_input: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = session;
                self.load(ctx);
                true
            }
            Msg::Loaded(participants) => {
                self.participants = participants;
                true
            }
            Msg::NameInput(value) => {
                self.name_input = value;
                false
            }
            Msg::EmailInput(value) => {
                self.email_input = value;
                false
            }
            Msg::Create => {
                let name = self.name_input.trim().to_owned();
                let email = self.email_input.trim().to_owned();
                if name.is_empty() || email.is_empty() {
                    show_toast("Both a name and an email are needed.");
                    return false;
                }
                let form_id = ctx.props().form_id;
                let client = ApiClient::with_session(&self.session);
                let link = ctx.link().clone();
                spawn_local(async move {
                    match client.create_participant(form_id, &name, &email).await {
                        Ok(participant) => link.send_message(Msg::Created(participant)),
                        Err(err) => {
                            gloo_console::error!(format!("creating participant failed: {err}"));
                            show_toast(&format!("Could not add the participant: {err}"));
                        }
                    }
                });
                false
            }
            Msg::Created(participant) => {
                match &participant.password {
                    Some(password) => show_toast(&format!(
                        "Participant added. Their password is: {password}"
                    )),
                    None => show_toast("Participant added."),
                }
                self.participants.push(participant);
                self.name_input.clear();
                self.email_input.clear();
                true
            }
            Msg::Regenerate(participant_id) => {
                let client = ApiClient::with_session(&self.session);
                let link = ctx.link().clone();
                spawn_local(async move {
                    match client.regenerate_password(participant_id).await {
                        Ok(participant) => link.send_message(Msg::Regenerated(participant)),
                        Err(err) => {
                            gloo_console::error!(format!("regenerating password failed: {err}"));
                            show_toast(&format!("Could not regenerate the password: {err}"));
                        }
                    }
                });
                false
            }
            Msg::Regenerated(updated) => {
                match &updated.password {
                    Some(password) => {
                        show_toast(&format!("New password for {}: {password}", updated.name))
                    }
                    None => show_toast("Password regenerated."),
                }
                if let Some(slot) = self
                    .participants
                    .iter_mut()
                    .find(|participant| participant.id == updated.id)
                {
                    *slot = updated;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if !self.session.is_authenticated() {
            return html! {
                <div class="participants">{"Log in to manage participants."}</div>
            };
        }

        html! {
            <div class="participants">
                <h1>{format!("Participants of form #{}", ctx.props().form_id)}</h1>
                <table class="participants-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Password"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.participants.iter().map(|participant| {
                                let id = participant.id;
                                html! {
                                    <tr>
                                        <td>{ participant.name.clone() }</td>
                                        <td>{ participant.email.clone() }</td>
                                        <td>{ participant.password.clone().unwrap_or_else(|| "••••••".into()) }</td>
                                        <td>
                                            <button onclick={link.callback(move |_| Msg::Regenerate(id))}>
                                                {"Regenerate password"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>
                <div class="participant-create">
                    <input
                        placeholder="Name"
                        value={self.name_input.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::NameInput(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        value={self.email_input.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EmailInput(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button onclick={link.callback(|_| Msg::Create)}>{"Add participant"}</button>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.load(ctx);
        }
    }
}
