//! Flow controller state.
//!
//! `FlowState` owns the gate flags, the navigation stack and the inner
//! screen cursors. Every operation is total: requests that do not fit the
//! current state come back as [`Transition::Ignored`] instead of an error.

use crate::onboarding::OnboardingPager;
use crate::premium::{PremiumOption, PremiumResolution};
use crate::questions::{PromptSet, QuestionSession};

use super::{Activity, FlowGraph, FlowSnapshot, NavigationStack, Screen};

/// Outcome of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The active screen changed.
    Moved { from: Screen, to: Screen },
    /// State changed without changing the active screen.
    Updated,
    /// Retreat with an empty stack; leaving is up to the host.
    ExitRequested,
    /// Precondition unmet; nothing changed.
    Ignored,
}

impl Transition {
    pub fn is_ignored(self) -> bool {
        matches!(self, Transition::Ignored)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowState {
    onboarding_completed: bool,
    premium_unlocked: bool,
    stack: NavigationStack,
    questions: Option<QuestionSession>,
    prompts: PromptSet,
    pager: OnboardingPager,
    premium_selection: PremiumOption,
    premium_resolution: Option<PremiumResolution>,
    activity: Option<Activity>,
}

impl FlowState {
    pub fn new(prompts: PromptSet) -> Self {
        Self {
            onboarding_completed: false,
            premium_unlocked: false,
            stack: NavigationStack::new(),
            questions: None,
            prompts,
            pager: OnboardingPager::default(),
            premium_selection: PremiumOption::default(),
            premium_resolution: None,
            activity: None,
        }
    }

    /// State with both gates already passed, sitting on `Entry`.
    pub fn unlocked(prompts: PromptSet) -> Self {
        let mut state = Self::new(prompts);
        state.onboarding_completed = true;
        state.premium_unlocked = true;
        state
    }

    pub fn onboarding_completed(&self) -> bool {
        self.onboarding_completed
    }

    pub fn premium_unlocked(&self) -> bool {
        self.premium_unlocked
    }

    /// Both gates passed; the stack-based flow is reachable.
    pub fn is_unlocked(&self) -> bool {
        self.onboarding_completed && self.premium_unlocked
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn questions(&self) -> Option<&QuestionSession> {
        self.questions.as_ref()
    }

    pub(crate) fn questions_mut(&mut self) -> Option<&mut QuestionSession> {
        self.questions.as_mut()
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    pub fn pager(&self) -> OnboardingPager {
        self.pager
    }

    pub(crate) fn pager_mut(&mut self) -> &mut OnboardingPager {
        &mut self.pager
    }

    pub fn premium_selection(&self) -> PremiumOption {
        self.premium_selection
    }

    pub fn premium_resolution(&self) -> Option<PremiumResolution> {
        self.premium_resolution
    }

    pub fn activity(&self) -> Option<Activity> {
        self.activity
    }

    pub(crate) fn set_activity(&mut self, activity: Option<Activity>) {
        self.activity = activity;
    }

    pub fn current_screen(&self) -> Screen {
        if !self.onboarding_completed {
            return Screen::Onboarding;
        }
        if !self.premium_unlocked {
            return Screen::Premium;
        }
        self.stack.top().unwrap_or(Screen::Entry)
    }

    pub fn complete_onboarding(&mut self) -> Transition {
        if self.onboarding_completed {
            return Transition::Ignored;
        }
        let from = self.current_screen();
        self.onboarding_completed = true;
        Transition::Moved {
            from,
            to: self.current_screen(),
        }
    }

    /// Unlocks the main flow. Refused until onboarding has completed.
    pub fn complete_premium(&mut self) -> Transition {
        if !self.onboarding_completed || self.premium_unlocked {
            return Transition::Ignored;
        }
        let from = self.current_screen();
        self.premium_unlocked = true;
        Transition::Moved {
            from,
            to: self.current_screen(),
        }
    }

    pub(crate) fn select_premium(&mut self, option: PremiumOption) -> Transition {
        if self.premium_selection == option {
            return Transition::Ignored;
        }
        self.premium_selection = option;
        Transition::Updated
    }

    pub(crate) fn resolve_premium(&mut self, resolution: PremiumResolution) -> Transition {
        let transition = self.complete_premium();
        if !transition.is_ignored() {
            self.premium_resolution = Some(resolution);
        }
        transition
    }

    /// Pushes `to` when the edge from the current screen is permitted.
    ///
    /// Leaving `Questions` additionally requires the cursor to sit on the
    /// last prompt.
    pub fn advance(&mut self, to: Screen) -> Transition {
        if !self.is_unlocked() {
            return Transition::Ignored;
        }
        let from = self.current_screen();
        if !FlowGraph::permits_push(from, to) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%from, %to, "advance refused: edge not permitted");
            return Transition::Ignored;
        }
        if from == Screen::Questions
            && !self
                .questions
                .as_ref()
                .map(|q| q.cursor().is_last())
                .unwrap_or(true)
        {
            return Transition::Ignored;
        }
        if to == Screen::Questions {
            self.questions = Some(QuestionSession::new(self.prompts.clone()));
        }
        self.stack.push(to);
        Transition::Moved { from, to }
    }

    /// Pops one level of history, or asks the host to exit at the root.
    pub fn retreat(&mut self) -> Transition {
        if !self.is_unlocked() {
            return Transition::Ignored;
        }
        match self.stack.pop() {
            Some(from) => {
                if from == Screen::Questions {
                    self.questions = None;
                }
                self.activity = None;
                Transition::Moved {
                    from,
                    to: self.current_screen(),
                }
            }
            None => Transition::ExitRequested,
        }
    }

    /// Clears the history back to `Entry`. The gate flags are kept.
    pub fn reset_to_start(&mut self) -> Transition {
        if !self.is_unlocked() {
            return Transition::Ignored;
        }
        let from = self.current_screen();
        self.stack.clear();
        self.questions = None;
        self.activity = None;
        Transition::Moved {
            from,
            to: Screen::Entry,
        }
    }

    /// Screens reachable from the active one along the edge table.
    pub fn reachable_screens(&self) -> Vec<Screen> {
        FlowGraph::reachable_from(self.current_screen())
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            screen: self.current_screen(),
            stack: self.stack.as_slice().to_vec(),
            onboarding_completed: self.onboarding_completed,
            premium_unlocked: self.premium_unlocked,
            onboarding_page: self.pager.page(),
            onboarding_pages: self.pager.total(),
            premium_selection: self.premium_selection,
            premium_resolution: self.premium_resolution,
            question: self.questions.as_ref().map(QuestionSession::progress),
            activity: self.activity,
        }
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new(PromptSet::default())
    }
}
