//! Todos Frontend Entry Point

mod models;
mod list;
mod storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    mount_to_body(App);
}
