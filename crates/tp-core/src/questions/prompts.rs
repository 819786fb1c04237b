use std::sync::Arc;

use crate::content::DEFAULT_PROMPTS;

/// Ordered, immutable list of reflection prompts.
///
/// Cheap to clone so every `FlowState` copy can carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet(Arc<[String]>);

impl PromptSet {
    pub fn new(prompts: Vec<String>) -> Self {
        Self(prompts.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect())
    }
}

impl From<Vec<String>> for PromptSet {
    fn from(prompts: Vec<String>) -> Self {
        Self::new(prompts)
    }
}
