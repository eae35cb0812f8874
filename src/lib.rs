pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod runtime;
pub mod state;
pub mod submit;
pub mod terminal;
pub mod ui;

pub use config::AppConfig;
pub use core::{ErrorMap, FieldId, FormData, FormState, SubmitDecision, SubmitStatus};
pub use error::{ConfigError, SubmitError};
pub use submit::{SubmitOutcome, Submitter};
