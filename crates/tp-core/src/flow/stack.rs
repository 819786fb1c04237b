use serde::{Deserialize, Serialize};

use super::Screen;

/// Push-based history above the `Entry` root.
///
/// Only stackable screens are accepted, so the gate screens and `Entry`
/// itself can never end up in the history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationStack(Vec<Screen>);

impl NavigationStack {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Pushes `screen`, returning `false` if the screen is not stackable.
    pub fn push(&mut self, screen: Screen) -> bool {
        if !screen.is_stackable() {
            return false;
        }
        self.0.push(screen);
        true
    }

    /// Pops the top entry. An empty stack yields `None`, never an error.
    pub fn pop(&mut self) -> Option<Screen> {
        self.0.pop()
    }

    pub fn top(&self) -> Option<Screen> {
        self.0.last().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, screen: Screen) -> bool {
        self.0.contains(&screen)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Screen] {
        &self.0
    }
}
