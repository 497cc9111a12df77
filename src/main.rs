#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod config;
mod storage;
mod logging;
mod store;
mod markdown;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger();
    mount_to_body(App);
}
