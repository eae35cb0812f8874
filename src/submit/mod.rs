pub mod executor;
pub mod outcome;
pub mod request;

pub use executor::{SubmitCompletion, SubmitExecutor};
pub use outcome::{HttpReply, SubmitOutcome, interpret};
pub use request::{REGISTER_PATH, Submitter, endpoint_url};
