use crate::core::FieldId;
use crate::input::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub struct TextInput {
    field: FieldId,
    value: String,
    cursor_pos: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(field: FieldId) -> Self {
        Self {
            field,
            value: String::new(),
            cursor_pos: 0,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn insert_char(&mut self, ch: char) {
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.char_count() {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.remove(byte_pos);
        true
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn word_start_left(&self) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_right(&self) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && Self::is_separator(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !Self::is_separator(chars[pos]) {
            pos += 1;
        }
        pos
    }

    fn delete_word_left(&mut self) -> bool {
        let start = self.word_start_left();
        if start == self.cursor_pos {
            return false;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor_pos);
        self.value.replace_range(from..to, "");
        self.cursor_pos = start;
        true
    }

    fn move_to(&mut self, pos: usize) -> bool {
        let pos = pos.min(self.char_count());
        if pos == self.cursor_pos {
            return false;
        }
        self.cursor_pos = pos;
        true
    }
}

impl Input for TextInput {
    fn field(&self) -> FieldId {
        self.field
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_pos = self.char_count();
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let handled = match key.code {
            KeyCode::Enter => return KeyResult::Submit,
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Char('a') if ctrl => self.move_to(0),
            KeyCode::Char('e') if ctrl => self.move_to(self.char_count()),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                return KeyResult::NotHandled;
            }
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                true
            }
            KeyCode::Backspace if ctrl => self.delete_word_left(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left if ctrl => self.move_to(self.word_start_left()),
            KeyCode::Right if ctrl => self.move_to(self.word_end_right()),
            KeyCode::Left => self.move_to(self.cursor_pos.saturating_sub(1)),
            KeyCode::Right => self.move_to(self.cursor_pos + 1),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.char_count()),
            _ => return KeyResult::NotHandled,
        };

        if handled {
            KeyResult::Handled
        } else {
            KeyResult::NotHandled
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        if self.value.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                return vec![Span::styled(placeholder.clone(), theme.placeholder)];
            }
        }
        vec![Span::styled(self.value.clone(), theme.value)]
    }

    fn cursor_offset(&self) -> usize {
        let before: String = self.value.chars().take(self.cursor_pos).collect();
        UnicodeWidthStr::width(before.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    fn type_text(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = TextInput::new(FieldId::Name);
        type_text(&mut input, "Ada");
        input.handle_key(key(KeyCode::Home));
        type_text(&mut input, "Dr ");
        assert_eq!(input.value(), "Dr Ada");
        assert_eq!(input.cursor_offset(), 3);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte() {
        let mut input = TextInput::new(FieldId::Name);
        type_text(&mut input, "Zoë K");
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "Zo ");
        assert_eq!(input.handle_key(key(KeyCode::Delete)), KeyResult::Handled);
        assert_eq!(input.handle_key(key(KeyCode::Delete)), KeyResult::NotHandled);
    }

    #[test]
    fn ctrl_backspace_deletes_previous_word() {
        let mut input = TextInput::new(FieldId::Email);
        type_text(&mut input, "ada@example.org");
        input.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL));
        assert_eq!(input.value(), "ada@example.");
        input.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "ada@");
    }

    #[test]
    fn enter_requests_submit_and_ctrl_keys_pass_through() {
        let mut input = TextInput::new(FieldId::Name);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyResult::Submit);
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyResult::NotHandled
        );
        assert_eq!(input.value(), "");
    }

    #[test]
    fn placeholder_only_when_empty() {
        let theme = Theme::default_theme();
        let mut input = TextInput::new(FieldId::Email).with_placeholder("you@example.org");
        assert_eq!(input.render_content(&theme)[0].text, "you@example.org");
        input.set_value("a@b.co");
        assert_eq!(input.render_content(&theme)[0].text, "a@b.co");
        assert_eq!(input.cursor_offset(), 6);
    }
}
