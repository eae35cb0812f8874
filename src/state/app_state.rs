use crate::core::{FieldId, FormData, FormState, SubmitDecision};
use crate::input::{DateInput, Input, KeyResult, TextInput};
use crate::state::focus::{FocusState, FocusTarget};
use crate::submit::SubmitOutcome;
use crate::terminal::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub submit_requested: bool,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            submit_requested: false,
        }
    }

    pub fn submit() -> Self {
        Self {
            handled: true,
            submit_requested: true,
        }
    }
}

/// The registration form controller plus the widgets that edit it.
pub struct AppState {
    form: FormState,
    inputs: Vec<Box<dyn Input>>,
    focus: FocusState,
    should_exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        let inputs: Vec<Box<dyn Input>> = vec![
            Box::new(TextInput::new(FieldId::Name)),
            Box::new(TextInput::new(FieldId::IdentityNumber)),
            Box::new(TextInput::new(FieldId::Email).with_placeholder("you@example.com")),
            Box::new(DateInput::new(FieldId::DateOfBirth)),
        ];
        Self::with_inputs(inputs)
    }

    pub fn with_inputs(inputs: Vec<Box<dyn Input>>) -> Self {
        let focus = FocusState::new(inputs.len());
        let mut state = Self {
            form: FormState::new(),
            inputs,
            focus,
            should_exit: false,
        };
        state.sync_inputs();
        state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn inputs(&self) -> &[Box<dyn Input>] {
        &self.inputs
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
    }

    /// Routes a key to the focused widget and mirrors value changes into
    /// the form. Inputs are disabled while a submission is loading.
    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> InteractionResult {
        let Some(idx) = self.focus.focused_field() else {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => InteractionResult::submit(),
                _ => InteractionResult::ignored(),
            };
        };

        if self.form.is_loading() {
            return InteractionResult::ignored();
        }

        let input = &mut self.inputs[idx];
        let before = input.value();
        let result = input.handle_key(key);
        let after = input.value();

        if before != after {
            self.form.edit_field(input.field(), after);
        }

        match result {
            KeyResult::Submit => InteractionResult::submit(),
            KeyResult::Handled => InteractionResult::handled(),
            KeyResult::NotHandled => InteractionResult::ignored(),
        }
    }

    /// Runs validation; returns the data to send when the form is valid.
    pub fn submit(&mut self) -> Option<FormData> {
        match self.form.begin_submit() {
            SubmitDecision::Dispatch(data) => {
                log::debug!("validation passed, dispatching registration");
                Some(data)
            }
            SubmitDecision::Invalid => {
                self.focus_first_error();
                None
            }
            SubmitDecision::Busy => None,
        }
    }

    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) -> bool {
        if !self.form.apply_outcome(outcome) {
            return false;
        }
        self.sync_inputs();
        if self.form.status().is_some_and(|status| status.is_success()) {
            self.focus.focus_field(0);
        } else {
            self.focus_first_error();
        }
        true
    }

    fn focus_first_error(&mut self) {
        let first = self
            .inputs
            .iter()
            .position(|input| self.form.error_for(input.field()).is_some());
        if let Some(idx) = first {
            self.focus.focus_field(idx);
        }
    }

    /// Pushes form values into widgets whose value differs, e.g. after the
    /// reset that follows an accepted submission.
    fn sync_inputs(&mut self) {
        for input in &mut self.inputs {
            let value = self.form.data().get(input.field());
            if input.value() != value {
                input.set_value(value);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
