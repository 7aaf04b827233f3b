use crate::app::App;

mod api;
mod app;
mod components;
mod session;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
