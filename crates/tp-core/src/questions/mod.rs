//! Questions domain module.
//!
//! The `Questions` screen walks an ordered prompt list with an inner cursor.
//! The cursor only reports when it runs off either end; the flow controller
//! decides what that means for the outer stack.

mod cursor;
mod prompts;
mod session;

pub use cursor::{CursorStep, QuestionCursor};
pub use prompts::PromptSet;
pub use session::{QuestionProgress, QuestionSession};
