//! Grocer storefront - Leptos frontend library

pub mod app;
pub mod components;
pub mod pages;
pub mod storage;
pub mod url_state;
