//! Grocer storefront - Leptos frontend
//!
//! Client-side rendered storefront talking to the Grocer REST API.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use grocer_client as _;
use grocer_types as _;
use leptos_meta as _;
use leptos_router as _;
use web_sys as _;

use grocer_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Grocer storefront {} starting...", env!("GIT_VERSION"));

    mount_to_body(App);
}
