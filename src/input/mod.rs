pub mod date_input;
pub mod input;
pub mod text_input;

pub use date_input::DateInput;
pub use input::{Input, KeyResult};
pub use text_input::TextInput;
