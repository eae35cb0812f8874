use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Registration successful!";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Top-level banner shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubmitStatus {
    Success { message: String },
    Error { message: String },
}

impl SubmitStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitStatus;

    #[test]
    fn serializes_as_tagged_object() {
        let json = serde_json::to_value(SubmitStatus::error("Email already registered"))
            .expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"type": "error", "message": "Email already registered"})
        );
    }
}
