pub mod app_state;
pub mod focus;

pub use app_state::{AppState, InteractionResult};
pub use focus::{FocusState, FocusTarget};
