#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(usize),
    SubmitButton,
}

/// Cycles through the form inputs followed by the submit button.
#[derive(Debug, Clone)]
pub struct FocusState {
    field_count: usize,
    index: usize,
}

impl FocusState {
    pub fn new(field_count: usize) -> Self {
        Self {
            field_count,
            index: 0,
        }
    }

    fn stops(&self) -> usize {
        self.field_count + 1
    }

    pub fn current(&self) -> FocusTarget {
        if self.index < self.field_count {
            FocusTarget::Field(self.index)
        } else {
            FocusTarget::SubmitButton
        }
    }

    pub fn focused_field(&self) -> Option<usize> {
        match self.current() {
            FocusTarget::Field(idx) => Some(idx),
            FocusTarget::SubmitButton => None,
        }
    }

    pub fn focus_field(&mut self, idx: usize) {
        if idx < self.field_count {
            self.index = idx;
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.stops();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.stops() - 1) % self.stops();
    }
}
