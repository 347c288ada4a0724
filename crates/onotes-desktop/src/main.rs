//! oNotes Desktop Application
//!
//! A desktop notes app over a folder of markdown files.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod hotkey;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use onotes_core::config::{default_app_dir, AppConfig};

fn main() {
    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "onotes=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("Invalid log directive: {e}");
            filter
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting oNotes...");

    let app_config = AppConfig::load_or_default(&default_app_dir());
    tracing::info!("Storage root: {}", app_config.storage_root.display());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("oNotes")
            .with_inner_size(LogicalSize::new(1100.0, 720.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(app_config)
        .launch(app::App);
}
