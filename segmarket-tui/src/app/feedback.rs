use std::time::{Duration, Instant};

/// How long a status message stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    hide_at: Instant,
}

/// Transient status line owned by one screen.
///
/// Each `display` replaces the text and restarts the hide deadline; the latest call wins.
#[derive(Debug, Clone, Default)]
pub struct MessagePresenter {
    current: Option<Message>,
}

impl MessagePresenter {
    pub fn display(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.display_at(text, kind, Instant::now());
    }

    pub fn display_at(&mut self, text: impl Into<String>, kind: MessageKind, now: Instant) {
        self.current = Some(Message {
            text: text.into(),
            kind,
            hide_at: now + MESSAGE_TTL,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.display(text, MessageKind::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.display(text, MessageKind::Error);
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    /// Hide the message once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|m| now >= m.hide_at) {
            self.current = None;
        }
    }

    pub fn visible(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.current.as_ref().map(|m| m.kind)
    }
}
