use crate::core::error_map::ErrorMap;
use crate::core::field::FieldId;
use crate::core::form_data::FormData;
use crate::core::status::{NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE, SubmitStatus};
use crate::core::validation;
use crate::submit::SubmitOutcome;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A request is already in flight; nothing changed.
    Busy,
    /// Validation failed and the error map now holds the reasons.
    Invalid,
    /// The form is loading; the caller must deliver exactly one outcome.
    Dispatch(FormData),
}

/// Field values, errors, banner and loading flag of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    data: FormData,
    errors: ErrorMap,
    status: Option<SubmitStatus>,
    loading: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field.key())
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Stores a new value for one field and drops that field's error.
    /// Inputs are disabled while loading, so edits are refused then.
    pub fn edit_field(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }
        self.data.set(field, value);
        if self.errors.has_error(field.key()) {
            self.errors.clear_field(field.key());
        }
        true
    }

    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.loading {
            return SubmitDecision::Busy;
        }

        self.status = None;
        let validation = validation::validate(&self.data);
        if !validation.is_valid {
            log::debug!("validation rejected {} field(s)", validation.errors.len());
            self.errors = validation.errors;
            return SubmitDecision::Invalid;
        }

        self.loading = true;
        self.errors.clear();
        SubmitDecision::Dispatch(self.data.clone())
    }

    /// Resolves the in-flight submission. Outcomes arriving while nothing
    /// is loading are dropped.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) -> bool {
        if !self.loading {
            log::warn!("dropping {} outcome with no submission in flight", outcome.kind());
            return false;
        }

        match outcome {
            SubmitOutcome::Accepted => {
                self.errors.clear();
                self.status = Some(SubmitStatus::success(SUCCESS_MESSAGE));
                self.data.reset();
            }
            SubmitOutcome::FieldErrors(errors) => {
                self.errors = errors;
            }
            SubmitOutcome::Rejected { message } => {
                self.status = Some(SubmitStatus::error(message));
            }
            SubmitOutcome::NetworkError => {
                self.status = Some(SubmitStatus::error(NETWORK_ERROR_MESSAGE));
            }
        }

        self.loading = false;
        true
    }

    /// Validates, then runs `send` only when the form is valid.
    pub fn submit_with<F>(&mut self, send: F) -> SubmitDecision
    where
        F: FnOnce(&FormData) -> SubmitOutcome,
    {
        let decision = self.begin_submit();
        if let SubmitDecision::Dispatch(data) = &decision {
            let outcome = send(data);
            self.apply_outcome(outcome);
        }
        decision
    }
}
