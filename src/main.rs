//! Todos Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod local;
mod models;
mod remote;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
