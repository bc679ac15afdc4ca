//! QuillForge Backend
//!
//! Layered architecture:
//! - domain: Assistant request/response shapes and errors
//! - provider: Chat-completion backends
//! - assistant: Prompt validation and reply shaping
//! - commands: Tauri command handlers

use std::sync::Arc;
use tauri::Manager;

mod assistant;
mod commands;
mod config;
mod domain;
mod provider;

use assistant::AssistantService;
use config::AssistantConfig;
use provider::OpenAiProvider;

/// Application state shared across commands
pub struct AppState {
    pub assistant: AssistantService,
}

impl AppState {
    pub fn from_config(config: &AssistantConfig) -> Self {
        let provider = Arc::new(OpenAiProvider::new(config));
        Self {
            assistant: AssistantService::new(provider, config.mode),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            // Initialize logging
            let log_dir = app.path().app_log_dir()?;
            rolling_logger::init_logger(log_dir, "QuillForge")?;

            let config = AssistantConfig::from_env();
            log::info!(
                "[SETUP] Assistant mode={} model={} base_url={}",
                config.mode.as_str(),
                config.model,
                config.base_url
            );

            app.manage(AppState::from_config(&config));
            let _ = rolling_logger::info("Assistant state ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::ask_assistant,
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
