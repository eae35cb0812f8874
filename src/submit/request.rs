use crate::core::form_data::FormData;
use crate::error::SubmitError;
use crate::submit::outcome::{HttpReply, SubmitOutcome, interpret};

pub const REGISTER_PATH: &str = "/api/register";

/// Posts registrations to `<base_url>/api/register`.
#[derive(Clone)]
pub struct Submitter {
    agent: ureq::Agent,
    endpoint: String,
}

impl Submitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            endpoint: endpoint.into(),
        }
    }

    pub fn for_base_url(base_url: &str) -> Self {
        Self::new(endpoint_url(base_url))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST; any received status, 2xx or not, comes back as a reply.
    pub fn send(&self, data: &FormData) -> Result<HttpReply, SubmitError> {
        let body = serde_json::to_string(data).map_err(SubmitError::Encode)?;
        log::debug!("POST {}", self.endpoint);

        let response = match self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => return Err(transport.into()),
        };

        let status = response.status();
        let text = response.into_string()?;
        let body = serde_json::from_str(&text)
            .map_err(|source| SubmitError::Decode { status, source })?;

        Ok(HttpReply::new(status, body))
    }

    pub fn submit(&self, data: &FormData) -> SubmitOutcome {
        let outcome = interpret(self.send(data));
        log::info!("registration submission finished: {}", outcome.kind());
        outcome
    }
}

pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), REGISTER_PATH)
}

#[cfg(test)]
mod tests {
    use super::{Submitter, endpoint_url};

    #[test]
    fn endpoint_joins_base_url() {
        assert_eq!(
            endpoint_url("http://localhost:5000"),
            "http://localhost:5000/api/register"
        );
        assert_eq!(
            endpoint_url("https://api.example.org/"),
            "https://api.example.org/api/register"
        );
        assert_eq!(
            Submitter::for_base_url("http://127.0.0.1:8080//").endpoint(),
            "http://127.0.0.1:8080/api/register"
        );
    }
}
