use serde::{Deserialize, Serialize};

/// Result of moving the inner cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStep {
    /// The cursor moved to the contained index.
    Moved(usize),
    /// Already on the first prompt.
    AtStart,
    /// Already on the last prompt.
    AtEnd,
}

/// Linear cursor over `total` prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCursor {
    index: usize,
    total: usize,
}

impl QuestionCursor {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// An empty prompt list counts as being on the last prompt.
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    pub fn forward(&mut self) -> CursorStep {
        if self.is_last() {
            return CursorStep::AtEnd;
        }
        self.index += 1;
        CursorStep::Moved(self.index)
    }

    pub fn back(&mut self) -> CursorStep {
        if self.is_first() {
            return CursorStep::AtStart;
        }
        self.index -= 1;
        CursorStep::Moved(self.index)
    }
}
