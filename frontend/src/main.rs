use log::info;
use yew::prelude::*;

mod celebration;
mod config;
mod content;
mod error;
mod layout;
mod navigation;
mod reveal;
mod waitlist;

mod components {
    pub mod background;
    pub mod explainer;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod process;
    pub mod scene;
    pub mod section;
    pub mod waitlist_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
