pub mod error_map;
pub mod field;
pub mod form_data;
pub mod form_state;
pub mod status;
pub mod validation;
pub mod validators;

pub use error_map::ErrorMap;
pub use field::FieldId;
pub use form_data::FormData;
pub use form_state::{FormState, SubmitDecision};
pub use status::SubmitStatus;
pub use validation::{Validation, validate};
