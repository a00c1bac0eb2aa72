//! Todo Widget Entry Point

mod app;
mod components;
mod context;
mod storage;
mod timers;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting todo widget");
    mount_to_body(App);
}
