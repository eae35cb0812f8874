use crate::core::FormData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the network request for a validated form.
    Submit(FormData),
    RequestRender,
}
