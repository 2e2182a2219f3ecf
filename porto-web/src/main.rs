mod cache;
mod config;
mod contact;
mod content;
mod store;
mod ui;
mod util;

lazy_static::lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}
