use crate::core::FieldId;
use crate::terminal::KeyEvent;
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// An editable widget bound to one registration field.
pub trait Input: Send {
    fn field(&self) -> FieldId;

    fn label(&self) -> &str {
        self.field().label()
    }

    /// The value the form sees. Widgets that hold partial input report an
    /// empty string until the value is complete.
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult;

    fn render_content(&self, theme: &Theme) -> Vec<Span>;

    /// Display column of the cursor inside `render_content`.
    fn cursor_offset(&self) -> usize;
}
