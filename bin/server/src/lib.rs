//! graph-search-chat web server and UI.
//!
//! This crate provides the Leptos-based chat interface over company
//! documents found through the Microsoft Graph search API, and the server
//! side that resolves the signed-in user and forwards questions to the
//! answer-generation service.

#![allow(non_snake_case)]

pub mod app;
pub mod chat;
pub mod components;
pub mod pages;
pub mod user;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod routes;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
