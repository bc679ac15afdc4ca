//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod assistant_cmd;
mod log_cmd;

pub use assistant_cmd::*;
pub use log_cmd::*;
