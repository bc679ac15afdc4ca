//! Assistant Errors
//!
//! Failures that reach the frontend, each with an HTTP-style status.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub type AssistantResult<T> = Result<T, AssistantError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AssistantError {
    /// Missing or blank prompt (400)
    BadRequest(String),
    /// Provider rejected or lacks the credential (401)
    Unauthorized(String),
    /// Any other provider failure (500)
    Upstream(String),
}

impl AssistantError {
    pub fn status(&self) -> u16 {
        match self {
            AssistantError::BadRequest(_) => 400,
            AssistantError::Unauthorized(_) => 401,
            AssistantError::Upstream(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AssistantError::BadRequest(msg)
            | AssistantError::Unauthorized(msg)
            | AssistantError::Upstream(msg) => msg,
        }
    }
}

impl std::fmt::Display for AssistantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status(), self.message())
    }
}

impl std::error::Error for AssistantError {}

/// Crosses IPC as `{status, error}`
impl Serialize for AssistantError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AssistantError", 2)?;
        s.serialize_field("status", &self.status())?;
        s.serialize_field("error", self.message())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wire_shape() {
        let err = AssistantError::BadRequest("Prompt is required".to_string());
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"status": 400, "error": "Prompt is required"})
        );
        assert_eq!(AssistantError::Unauthorized(String::new()).status(), 401);
        assert_eq!(AssistantError::Upstream(String::new()).status(), 500);
    }
}
