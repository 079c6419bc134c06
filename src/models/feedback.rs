#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FeedbackKind {
    Success,
    Error,
    Neutral
}

/// Message shown to the learner after an action. Cleared by every successful mutation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
    pub details: Vec<String>
}

impl Feedback {
    pub fn success(message: &str) -> Self {
        Self { kind: FeedbackKind::Success, message: message.to_string(), details: Vec::new() }
    }

    pub fn error(message: &str, details: Vec<String>) -> Self {
        Self { kind: FeedbackKind::Error, message: message.to_string(), details }
    }

    pub fn neutral(message: &str) -> Self {
        Self { kind: FeedbackKind::Neutral, message: message.to_string(), details: Vec::new() }
    }
}
