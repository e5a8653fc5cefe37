//! To-Do List Frontend Entry Point

mod app;
mod components;
mod config;
mod controller;
mod error;
mod list;
mod models;
mod navigation;
mod prompt;
mod storage;
mod store;

use app::{NoListSelected, TodoList};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("[MAIN] Logger already installed: {}", e).into());
    }

    match navigation::file_id_from_location() {
        Ok(file_id) => {
            log::info!("[MAIN] Showing list {}", file_id);
            mount_to_body(move || view! { <TodoList file_id=file_id /> });
        }
        Err(e) => {
            log::error!("[MAIN] {}", e);
            let reason = e.to_string();
            mount_to_body(move || view! { <NoListSelected reason=reason.clone() /> });
        }
    }
}
