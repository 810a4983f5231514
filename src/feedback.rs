//! Signup feedback
//!
//! The transient success/error message under the signup form. Each message
//! gets a generation number; a hide timer only clears the message it was
//! started for, so an old timer can never hide a newer message.

use crate::error::ClientResult;

/// Default time a message stays visible
pub const DEFAULT_FEEDBACK_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// CSS class for the message box
    pub fn css_class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

/// A message to show the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    /// Feedback for a finished signup attempt
    pub fn from_signup(result: &ClientResult<String>) -> Self {
        match result {
            Ok(message) => Feedback::success(message.clone()),
            Err(e) => Feedback::error(e.signup_message()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

/// Identifies one showing of a message
pub type Generation = u64;

/// The currently visible message, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
    generation: Generation,
}

impl FeedbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `feedback`, replacing whatever was visible.
    ///
    /// Returns the generation to hand to [`FeedbackSlot::expire`] when the
    /// hide timer fires.
    pub fn show(&mut self, feedback: Feedback) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(feedback);
        self.generation
    }

    /// Hide the message if it is still the one shown as `generation`.
    ///
    /// Returns whether anything was hidden.
    pub fn expire(&mut self, generation: Generation) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
