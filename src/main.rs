//! DistroKid 2026 Strategy Guide Frontend Entry Point

mod api;
mod app;
mod checklist;
mod components;
mod config;
mod content;
mod context;
mod currency;
mod error;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
