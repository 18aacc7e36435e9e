/// The four mutually exclusive screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Events,
    Report,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Início",
            Screen::Login => "Login",
            Screen::Events => "Eventos",
            Screen::Report => "Relatório",
        }
    }
}

/// Follow-up work the shell asks the runtime to perform after a screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchEvents,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }
    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_respect_multibyte_chars() {
        let mut input = TextInput::from_str("sã");
        input.insert('o');
        assert_eq!(input.value, "são");

        input.backspace();
        input.backspace();
        assert_eq!(input.value, "s");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn cursor_movement_splits_value() {
        let mut input = TextInput::from_str("2024-01-01T00:00");
        input.home();
        input.move_right();
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("20", "24-01-01T00:00"));

        input.end();
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("2024-01-01T00:0", "0"));
    }
}
