//! Agenda Frontend Entry Point

mod commands;
mod context;
mod store;
mod components;
mod app;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger(log::LevelFilter::Info);
    mount_to_body(App);
}
