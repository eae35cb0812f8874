use crate::core::error_map::ErrorMap;
use crate::core::status::FALLBACK_ERROR_MESSAGE;
use crate::error::SubmitError;
use serde_json::Value;

/// Status line and parsed JSON body of a received response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Value,
}

impl HttpReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What a finished submission means for the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    FieldErrors(ErrorMap),
    Rejected { message: String },
    NetworkError,
}

impl SubmitOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => "accepted",
            SubmitOutcome::FieldErrors(_) => "field-errors",
            SubmitOutcome::Rejected { .. } => "rejected",
            SubmitOutcome::NetworkError => "network-error",
        }
    }
}

pub fn interpret(result: Result<HttpReply, SubmitError>) -> SubmitOutcome {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("submission failed before a usable response: {err}");
            return SubmitOutcome::NetworkError;
        }
    };

    if reply.is_success() {
        return SubmitOutcome::Accepted;
    }

    if let Some(errors) = reply.body.get("errors").and_then(Value::as_object) {
        return SubmitOutcome::FieldErrors(ErrorMap::from_json_object(errors));
    }

    let message = reply
        .body
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE);

    SubmitOutcome::Rejected {
        message: message.to_string(),
    }
}
