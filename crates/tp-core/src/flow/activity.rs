use serde::{Deserialize, Serialize};

use super::Screen;

/// A presentation delay that is running before an automatic transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// Entry is preparing the session before `Questions` is pushed.
    Preparing,
    /// The finished session is being "analyzed" before `Results` is pushed.
    Analyzing,
}

impl Activity {
    /// Screen the activity is shown on.
    pub fn screen(self) -> Screen {
        match self {
            Activity::Preparing => Screen::Entry,
            Activity::Analyzing => Screen::SessionCompleted,
        }
    }
}
