use components::app::App;

mod components;
mod config;
mod connection;
mod error;
mod model;
mod protocol;
mod state;
mod util;
mod view;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
