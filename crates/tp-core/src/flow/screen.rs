use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One named step in the reflection flow.
///
/// The set is closed: exactly one of these is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Multi-page introduction, shown once.
    Onboarding,
    /// Subscription offer, shown once after onboarding.
    Premium,
    /// Root of the session flow.
    Entry,
    /// Reflection prompts with an inner cursor.
    Questions,
    /// Session finished, results not yet shown.
    SessionCompleted,
    /// Placeholder insights for the finished session.
    Results,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Onboarding,
        Screen::Premium,
        Screen::Entry,
        Screen::Questions,
        Screen::SessionCompleted,
        Screen::Results,
    ];

    /// Gate screens are one-time states that sit in front of the stack.
    pub fn is_gate(self) -> bool {
        matches!(self, Screen::Onboarding | Screen::Premium)
    }

    /// Whether the screen may be pushed onto the navigation stack.
    ///
    /// `Entry` is the implicit root and never appears on the stack itself.
    pub fn is_stackable(self) -> bool {
        matches!(
            self,
            Screen::Questions | Screen::SessionCompleted | Screen::Results
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Premium => "premium",
            Screen::Entry => "entry",
            Screen::Questions => "questions",
            Screen::SessionCompleted => "session_completed",
            Screen::Results => "results",
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
