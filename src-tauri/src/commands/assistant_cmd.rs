//! Tauri Commands for the assistant
//!
//! Errors cross IPC as `{status, error}`.

use tauri::State;

use crate::domain::{AssistantError, AssistantRequest, AssistantResponse};
use crate::AppState;

/// Forward a prompt to the model
#[tauri::command]
pub async fn ask_assistant(
    state: State<'_, AppState>,
    request: Option<AssistantRequest>,
) -> Result<AssistantResponse, AssistantError> {
    let request = request.unwrap_or_default();
    state.assistant.ask(&request).await
}
