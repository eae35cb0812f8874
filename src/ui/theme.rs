use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub label: Style,
    pub focused: Style,
    pub value: Style,
    pub placeholder: Style,
    pub error: Style,
    pub success_banner: Style,
    pub error_banner: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub hint: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().bold(),
            label: Style::new(),
            focused: Style::new().color(Color::Blue).bold(),
            value: Style::new(),
            placeholder: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red),
            success_banner: Style::new().color(Color::Green).bold(),
            error_banner: Style::new().color(Color::Red).bold(),
            button: Style::new().color(Color::Blue).bold(),
            button_disabled: Style::new().color(Color::Blue).dim(),
            hint: Style::new().color(Color::DarkGrey),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
