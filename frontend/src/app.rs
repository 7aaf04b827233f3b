//! Root component: screen switching and session ownership.
//!
//! There is no URL router here; the app keeps the active [`Screen`] in
//! state and swaps component trees. The [`Session`] is owned by `App`
//! and exposed to the subtree through a `ContextProvider`.

use yew::prelude::*;

use common::model::form::FormSchema;

use crate::components::builder::BuilderComponent;
use crate::components::legacy::LegacyEditorComponent;
use crate::components::participants::ParticipantsComponent;
use crate::components::preview::PreviewComponent;
use crate::session::Session;
use crate::toast::show_toast;

#[derive(Clone, PartialEq)]
pub enum Screen {
    Home,
    /// The paged form builder; `form_id` loads an existing form,
    /// `imported` seeds the editor with a converted legacy schema.
    Builder {
        form_id: Option<u64>,
        imported: Option<FormSchema>,
    },
    /// The legacy flat-schema editor.
    Legacy,
    /// The fill-out / preview renderer for a published form.
    FillOut { form_id: u64 },
    Participants { form_id: u64 },
}

pub enum Msg {
    Navigate(Screen),
    FormIdInput(String),
    TokenInput(String),
    Login,
    Logout,
}

pub struct App {
    screen: Screen,
    session: Session,
    form_id_input: String,
    token_input: String,
}

impl App {
    fn parsed_form_id(&self) -> Option<u64> {
        self.form_id_input.trim().parse().ok()
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::Home,
            session: Session::logged_out(),
            form_id_input: String::new(),
            token_input: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(screen) => {
                self.screen = screen;
                true
            }
            Msg::FormIdInput(value) => {
                self.form_id_input = value;
                false
            }
            Msg::TokenInput(value) => {
                self.token_input = value;
                false
            }
            Msg::Login => {
                if self.token_input.trim().is_empty() {
                    show_toast("Enter an access token to log in.");
                    return false;
                }
                self.session = Session::logged_in(self.token_input.trim());
                self.token_input.clear();
                true
            }
            Msg::Logout => {
                self.session = Session::logged_out();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let body = match self.screen.clone() {
            Screen::Home => self.view_home(ctx),
            Screen::Builder { form_id, imported } => html! {
                <BuilderComponent
                    {form_id}
                    {imported}
                    on_saved={link.callback(|form_id| {
                        Msg::Navigate(Screen::Builder { form_id: Some(form_id), imported: None })
                    })}
                />
            },
            Screen::Legacy => html! {
                <LegacyEditorComponent
                    on_open_in_builder={link.callback(|schema| {
                        Msg::Navigate(Screen::Builder { form_id: None, imported: Some(schema) })
                    })}
                />
            },
            Screen::FillOut { form_id } => html! { <PreviewComponent {form_id} /> },
            Screen::Participants { form_id } => html! { <ParticipantsComponent {form_id} /> },
        };

        html! {
            <ContextProvider<Session> context={self.session.clone()}>
                <div class="app-root">
                    { self.view_nav(ctx) }
                    { body }
                </div>
            </ContextProvider<Session>>
        }
    }
}

impl App {
    fn view_nav(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-nav">
                <button onclick={link.callback(|_| Msg::Navigate(Screen::Home))}>{"Home"}</button>
                {
                    if self.session.is_authenticated() {
                        html! {
                            <button onclick={link.callback(|_| Msg::Logout)}>{"Log out"}</button>
                        }
                    } else {
                        html! {
                            <span class="login-box">
                                <input
                                    type="password"
                                    placeholder="Access token"
                                    value={self.token_input.clone()}
                                    oninput={link.callback(|e: InputEvent| {
                                        Msg::TokenInput(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                                    })}
                                />
                                <button onclick={link.callback(|_| Msg::Login)}>{"Log in"}</button>
                            </span>
                        }
                    }
                }
            </div>
        }
    }

    fn view_home(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let open = |make: fn(u64) -> Screen| {
            let id = self.parsed_form_id();
            link.batch_callback(move |_| match id {
                Some(id) => Some(Msg::Navigate(make(id))),
                None => {
                    show_toast("Enter a numeric form id first.");
                    None
                }
            })
        };

        html! {
            <div class="home">
                <h1>{"CiviForm"}</h1>
                <div class="home-actions">
                    <button onclick={link.callback(|_| {
                        Msg::Navigate(Screen::Builder { form_id: None, imported: None })
                    })}>
                        {"New form"}
                    </button>
                    <button onclick={link.callback(|_| Msg::Navigate(Screen::Legacy))}>
                        {"Legacy editor"}
                    </button>
                </div>
                <div class="home-open">
                    <input
                        placeholder="Form id"
                        value={self.form_id_input.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::FormIdInput(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                        })}
                    />
                    <button onclick={open(|id| Screen::Builder { form_id: Some(id), imported: None })}>
                        {"Edit"}
                    </button>
                    <button onclick={open(|id| Screen::FillOut { form_id: id })}>
                        {"Fill out"}
                    </button>
                    <button onclick={open(|id| Screen::Participants { form_id: id })}>
                        {"Participants"}
                    </button>
                </div>
            </div>
        }
    }
}
