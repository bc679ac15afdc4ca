#![allow(warnings)]
//! QuillForge Frontend Entry Point

mod models;
mod ids;
mod placement;
mod storage;
mod assistant;
mod board;
mod shortcuts;
mod logging;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
