use serde::{Deserialize, Serialize};

use super::{CursorStep, PromptSet, QuestionCursor};

/// Position and draft answer of the prompt currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionProgress {
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub answer: String,
}

/// Inner state of the `Questions` screen.
///
/// Answers are kept in memory only and dropped with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSession {
    prompts: PromptSet,
    cursor: QuestionCursor,
    answers: Vec<String>,
}

impl QuestionSession {
    pub fn new(prompts: PromptSet) -> Self {
        let total = prompts.len();
        Self {
            prompts,
            cursor: QuestionCursor::new(total),
            answers: vec![String::new(); total],
        }
    }

    pub fn cursor(&self) -> QuestionCursor {
        self.cursor
    }

    pub fn forward(&mut self) -> CursorStep {
        self.cursor.forward()
    }

    pub fn back(&mut self) -> CursorStep {
        self.cursor.back()
    }

    pub fn current_prompt(&self) -> Option<&str> {
        self.prompts.get(self.cursor.index())
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(self.cursor.index()).map(String::as_str)
    }

    /// Replaces the answer for the current prompt. Ignored without prompts.
    pub fn set_answer(&mut self, text: String) {
        if let Some(slot) = self.answers.get_mut(self.cursor.index()) {
            *slot = text;
        }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn progress(&self) -> QuestionProgress {
        QuestionProgress {
            index: self.cursor.index(),
            total: self.cursor.total(),
            prompt: self.current_prompt().unwrap_or_default().to_string(),
            answer: self.current_answer().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts() -> PromptSet {
        PromptSet::new(vec!["first?".into(), "second?".into()])
    }

    #[test]
    fn answers_follow_the_cursor() {
        let mut session = QuestionSession::new(prompts());
        session.set_answer("calm".into());
        session.forward();
        session.set_answer("a walk".into());
        session.back();

        assert_eq!(session.current_answer(), Some("calm"));
        assert_eq!(session.answers(), &["calm".to_string(), "a walk".to_string()]);
    }

    #[test]
    fn progress_reports_current_prompt() {
        let mut session = QuestionSession::new(prompts());
        session.forward();
        let progress = session.progress();
        assert_eq!(progress.index, 1);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.prompt, "second?");
        assert!(progress.answer.is_empty());
    }

    #[test]
    fn empty_prompt_set_ignores_answers() {
        let mut session = QuestionSession::new(PromptSet::new(Vec::new()));
        session.set_answer("ignored".into());
        assert!(session.answers().is_empty());
        assert_eq!(session.progress().prompt, "");
    }
}
