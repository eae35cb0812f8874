use crate::core::{FieldId, SubmitStatus};
use crate::state::{AppState, FocusTarget};
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;

const TITLE: &str = "Registration Form";
const HINT: &str = "Tab/Shift+Tab move · Enter/Ctrl+S submit · Esc quit";
const INDENT: &str = "  ";
const FOCUS_MARK: &str = "› ";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn render(&self, state: &AppState, terminal_size: TerminalSize) -> RenderFrame {
        let theme = &self.theme;
        let form = state.form();
        let mut frame = RenderFrame::default();

        frame.lines.push(vec![Span::styled(TITLE, theme.title)]);
        frame.lines.push(Vec::new());

        if let Some(status) = form.status() {
            let (mark, style) = match status {
                SubmitStatus::Success { .. } => ("✔ ", theme.success_banner),
                SubmitStatus::Error { .. } => ("✖ ", theme.error_banner),
            };
            frame
                .lines
                .push(vec![Span::styled(format!("{mark}{}", status.message()), style)]);
            frame.lines.push(Vec::new());
        }

        let focus = state.focus();
        for (idx, input) in state.inputs().iter().enumerate() {
            let focused = focus == FocusTarget::Field(idx);
            let error = form.error_for(input.field());

            let label_style = if focused { theme.focused } else { theme.label };
            frame.lines.push(vec![Span::styled(input.label(), label_style)]);

            let (prefix, prefix_style) = match (focused, error.is_some()) {
                (true, _) => (FOCUS_MARK, theme.focused),
                (false, true) => (INDENT, theme.error),
                (false, false) => (INDENT, theme.label),
            };
            let mut value_line = vec![Span::styled(prefix, prefix_style)];
            let mut content = input.render_content(theme);
            if error.is_some() {
                for span in &mut content {
                    span.style = theme.error;
                }
            }
            value_line.extend(content);

            if focused && !form.is_loading() {
                frame.cursor = Some(CursorPos {
                    col: (prefix.chars().count() + input.cursor_offset()).min(u16::MAX as usize)
                        as u16,
                    row: frame.lines.len().min(u16::MAX as usize) as u16,
                });
            }
            frame.lines.push(value_line);

            if let Some(message) = error {
                frame
                    .lines
                    .push(vec![Span::styled(format!("{INDENT}{message}"), theme.error)]);
            }
            frame.lines.push(Vec::new());
        }

        let unmatched: Vec<(&str, &str)> = form
            .errors()
            .iter()
            .filter(|(key, _)| FieldId::from_key(key).is_none())
            .collect();
        if !unmatched.is_empty() {
            for (key, message) in unmatched {
                frame
                    .lines
                    .push(vec![Span::styled(format!("{key}: {message}"), theme.error)]);
            }
            frame.lines.push(Vec::new());
        }

        let button_focused = focus == FocusTarget::SubmitButton;
        let (label, style) = if form.is_loading() {
            ("[ Submitting... ]", theme.button_disabled)
        } else if button_focused {
            ("[ Submit ]", theme.button.underline())
        } else {
            ("[ Submit ]", theme.button)
        };
        let prefix = if button_focused { FOCUS_MARK } else { INDENT };
        frame
            .lines
            .push(vec![Span::styled(prefix, theme.focused), Span::styled(label, style)]);
        frame.lines.push(Vec::new());
        frame.lines.push(vec![Span::styled(HINT, theme.hint)]);

        if let Some(cursor) = frame.cursor {
            if cursor.row >= terminal_size.height || cursor.col >= terminal_size.width {
                frame.cursor = None;
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorMap;
    use crate::submit::SubmitOutcome;
    use crate::runtime::{Command, KeyBindings};
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crate::ui::span::line_text;

    const SIZE: TerminalSize = TerminalSize {
        width: 80,
        height: 40,
    };

    fn texts(frame: &RenderFrame) -> Vec<String> {
        frame.lines.iter().map(line_text).collect()
    }

    fn filled_state() -> AppState {
        let mut state = AppState::new();
        for (idx, text) in ["Ada", "3201", "a@b.co", "19991231"].iter().enumerate() {
            if idx > 0 {
                state.focus_next();
            }
            for ch in text.chars() {
                state.dispatch_key_to_focused(KeyEvent::plain(KeyCode::Char(ch)));
            }
        }
        state
    }

    #[test]
    fn initial_frame_has_fields_and_button() {
        let frame = Renderer::default().render(&AppState::new(), SIZE);
        let lines = texts(&frame);

        assert_eq!(lines[0], TITLE);
        for field in FieldId::ALL {
            assert!(lines.iter().any(|line| line == field.label()), "{field}");
        }
        assert!(lines.iter().any(|line| line.ends_with("[ Submit ]")));
        assert_eq!(frame.cursor, Some(CursorPos { col: 2, row: 3 }));
    }

    #[test]
    fn hint_line_lists_submit_shortcut() {
        let frame = Renderer::default().render(&AppState::new(), SIZE);
        let last = texts(&frame).pop().expect("hint line");
        assert_eq!(last, HINT);
        assert!(last.contains("Ctrl+S"));

        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Command::Submit)
        );
    }

    #[test]
    fn inline_errors_follow_their_field() {
        let mut state = AppState::new();
        state.submit();
        let lines = texts(&Renderer::default().render(&state, SIZE));

        let label = lines.iter().position(|line| line == "Email Address").expect("label");
        assert_eq!(lines[label + 2], "  Valid email is required");
    }

    #[test]
    fn loading_shows_submitting_and_hides_cursor() {
        let mut state = filled_state();
        assert!(state.submit().is_some());
        let frame = Renderer::default().render(&state, SIZE);

        assert!(texts(&frame).iter().any(|line| line.contains("Submitting...")));
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn banner_and_unmatched_server_errors_are_shown() {
        let mut state = filled_state();
        state.submit();
        state.apply_outcome(SubmitOutcome::FieldErrors(
            ErrorMap::new().with("date_of_birth", "Invalid date format. Use YYYY-MM-DD"),
        ));
        let lines = texts(&Renderer::default().render(&state, SIZE));
        assert!(lines.contains(&"date_of_birth: Invalid date format. Use YYYY-MM-DD".to_string()));

        state.submit();
        state.apply_outcome(SubmitOutcome::NetworkError);
        let lines = texts(&Renderer::default().render(&state, SIZE));
        assert_eq!(lines[2], "✖ Network error. Please try again.");
    }
}
