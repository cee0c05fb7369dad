use crate::render::MemorySurface;
use crate::select::{clamp_count, parse_count};

/// State of the terminal form: the count input and the generated article.
#[derive(Debug, Default)]
pub struct FormState {
    pub input: String,
    pub article: MemorySurface,
    pub scroll: u16,
    pub status: Option<String>,
    pub max_count: usize,
}

impl FormState {
    pub fn new(
        initial_count: usize,
        max_count: usize,
    ) -> Self {
        FormState {
            input: initial_count.to_string(),
            max_count,
            ..Self::default()
        }
    }

    /// Accepts the characters a numeric input would.
    pub fn push_char(
        &mut self,
        c: char,
    ) {
        if c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E') {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// The count the GENERATE action will use, and whether the typed value
    /// was cut down to `max_count`. Nothing is logged while the form is up.
    pub fn requested_count(&self) -> (usize, bool) {
        let requested = parse_count(&self.input);
        let count = clamp_count(requested, self.max_count);
        (count, count < requested)
    }

    pub fn scroll_up(
        &mut self,
        lines: u16,
    ) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(
        &mut self,
        lines: u16,
    ) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn article_text(&self) -> String {
        self.article.to_plain_text()
    }
}
