//! Planner Frontend Entry Point

mod app;
mod audio;
mod commands;
mod components;
mod context;
mod dialog;
mod events;
mod format;
mod models;
mod ordering;
mod prefs;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
