use crate::core::FieldId;
use crate::input::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    Year,
    Month,
    Day,
}

impl SegmentType {
    fn min_value(self) -> u32 {
        1
    }

    fn max_value(self) -> u32 {
        match self {
            SegmentType::Year => 9999,
            SegmentType::Month => 12,
            SegmentType::Day => 31,
        }
    }

    fn length(self) -> usize {
        match self {
            SegmentType::Year => 4,
            _ => 2,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SegmentType::Year => "yyyy",
            SegmentType::Month => "mm",
            SegmentType::Day => "dd",
        }
    }
}

#[derive(Debug, Clone)]
struct DateSegment {
    segment_type: SegmentType,
    value: String,
}

impl DateSegment {
    fn new(segment_type: SegmentType) -> Self {
        Self {
            segment_type,
            value: String::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.value.len() == self.segment_type.length()
    }

    fn is_complete(&self) -> bool {
        self.is_full() && self.numeric_value() >= self.segment_type.min_value()
    }

    fn numeric_value(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }

    fn set_numeric(&mut self, value: u32) {
        self.value = format!("{:0width$}", value, width = self.segment_type.length());
    }

    fn increment(&mut self, max: u32) {
        let current = self.numeric_value();
        let min = self.segment_type.min_value();
        let next = if current >= max || current < min {
            min
        } else {
            current + 1
        };
        self.set_numeric(next);
    }

    fn decrement(&mut self, max: u32) {
        let current = self.numeric_value();
        let prev = if current <= self.segment_type.min_value() || current > max {
            max
        } else {
            current - 1
        };
        self.set_numeric(prev);
    }

    fn insert_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        if self.is_full() {
            self.value = digit.to_string();
            return true;
        }
        self.value.push(digit);
        if self.numeric_value() > self.segment_type.max_value() {
            self.value = digit.to_string();
        }
        true
    }

    fn delete_digit(&mut self) -> bool {
        self.value.pop().is_some()
    }

    fn display(&self) -> String {
        let placeholder = self.segment_type.placeholder();
        let filled = self.value.len();
        format!("{}{}", self.value, &placeholder[filled..])
    }
}

fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// `YYYY-MM-DD` entry split into year, month and day segments. Like a
/// browser date control, it reports an empty value until the segments
/// form a real calendar date.
pub struct DateInput {
    field: FieldId,
    segments: Vec<DateSegment>,
    active: usize,
}

impl DateInput {
    pub fn new(field: FieldId) -> Self {
        Self {
            field,
            segments: vec![
                DateSegment::new(SegmentType::Year),
                DateSegment::new(SegmentType::Month),
                DateSegment::new(SegmentType::Day),
            ],
            active: 0,
        }
    }

    fn is_complete(&self) -> bool {
        self.segments.iter().all(DateSegment::is_complete)
            && self.segments[2].numeric_value() <= self.day_limit()
    }

    /// Last day of the entered month; 31 until year and month are known.
    fn day_limit(&self) -> u32 {
        let (year, month) = (&self.segments[0], &self.segments[1]);
        if year.is_complete() && month.is_complete() {
            days_in_month(year.numeric_value(), month.numeric_value())
        } else {
            SegmentType::Day.max_value()
        }
    }

    fn segment_limit(&self, idx: usize) -> u32 {
        match self.segments[idx].segment_type {
            SegmentType::Day => self.day_limit(),
            other => other.max_value(),
        }
    }

    fn step_active(&mut self, up: bool) {
        let max = self.segment_limit(self.active);
        let segment = &mut self.segments[self.active];
        if up {
            segment.increment(max);
        } else {
            segment.decrement(max);
        }
    }

    fn clear(&mut self) {
        for segment in &mut self.segments {
            segment.value.clear();
        }
        self.active = 0;
    }

    fn move_segment(&mut self, forward: bool) -> bool {
        if forward && self.active + 1 < self.segments.len() {
            self.active += 1;
            true
        } else if !forward && self.active > 0 {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    fn type_digit(&mut self, digit: char) -> bool {
        let segment = &mut self.segments[self.active];
        if !segment.insert_digit(digit) {
            return false;
        }
        if segment.is_full() {
            self.move_segment(true);
        }
        true
    }

    fn backspace(&mut self) -> bool {
        if self.segments[self.active].delete_digit() {
            return true;
        }
        self.move_segment(false) && self.segments[self.active].delete_digit()
    }
}

impl Input for DateInput {
    fn field(&self) -> FieldId {
        self.field
    }

    fn value(&self) -> String {
        if !self.is_complete() {
            return String::new();
        }
        self.segments
            .iter()
            .map(|segment| segment.value.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn set_value(&mut self, value: &str) {
        self.clear();
        let parts: Vec<&str> = value.split('-').collect();
        if parts.len() != self.segments.len() {
            return;
        }
        for (segment, part) in self.segments.iter_mut().zip(parts) {
            if part.len() == segment.segment_type.length() && part.chars().all(|c| c.is_ascii_digit())
            {
                segment.value = part.to_string();
            }
        }
        if !self.is_complete() {
            self.clear();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        let handled = match key.code {
            KeyCode::Enter => return KeyResult::Submit,
            KeyCode::Char(ch) if ch.is_ascii_digit() => self.type_digit(ch),
            KeyCode::Char('-') | KeyCode::Char('/') | KeyCode::Right => self.move_segment(true),
            KeyCode::Left => self.move_segment(false),
            KeyCode::Up => {
                self.step_active(true);
                true
            }
            KeyCode::Down => {
                self.step_active(false);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => {
                self.clear();
                true
            }
            _ => return KeyResult::NotHandled,
        };

        if handled {
            KeyResult::Handled
        } else {
            KeyResult::NotHandled
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("-", theme.placeholder));
            }
            let style = if segment.value.is_empty() {
                theme.placeholder
            } else {
                theme.value
            };
            spans.push(Span::styled(segment.display(), style));
        }
        spans
    }

    fn cursor_offset(&self) -> usize {
        let before: usize = self.segments[..self.active]
            .iter()
            .map(|segment| segment.segment_type.length() + 1)
            .sum();
        let segment = &self.segments[self.active];
        before + segment.value.len().min(segment.segment_type.length() - 1)
    }
}
