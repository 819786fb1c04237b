use serde::{Deserialize, Serialize};

use crate::premium::{PremiumOption, PremiumResolution};

/// Discrete requests raised by screens, the host, or a fired timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowIntent {
    /// Show the next onboarding page.
    OnboardingPageNext,
    /// Show the previous onboarding page.
    OnboardingPagePrevious,
    /// Onboarding finished ("Get Started").
    OnboardingFinished,
    /// A plan was picked on the premium screen.
    PremiumOptionSelected { option: PremiumOption },
    /// Premium was upgraded or restored.
    PremiumResolved { resolution: PremiumResolution },
    /// Entry asked to start; a preparing delay runs first.
    BeginPreparation,
    /// Push `Questions` (normally raised by the preparing timer).
    StartSession,
    /// Answer text for the current prompt changed.
    AnswerChanged { text: String },
    /// Next prompt, or finish on the last one.
    QuestionAdvance,
    /// Previous prompt, or leave `Questions` on the first one.
    QuestionRetreat,
    /// SessionCompleted asked for results; an analyzing delay runs first.
    RequestResults,
    /// Push `Results` (normally raised by the analyzing timer).
    SessionResultsReady,
    /// Clear the history and go back to `Entry`.
    StartNewSession,
    /// Host back gesture.
    Back,
}

impl FlowIntent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowIntent::OnboardingPageNext => "onboarding_page_next",
            FlowIntent::OnboardingPagePrevious => "onboarding_page_previous",
            FlowIntent::OnboardingFinished => "onboarding_finished",
            FlowIntent::PremiumOptionSelected { .. } => "premium_option_selected",
            FlowIntent::PremiumResolved { .. } => "premium_resolved",
            FlowIntent::BeginPreparation => "begin_preparation",
            FlowIntent::StartSession => "start_session",
            FlowIntent::AnswerChanged { .. } => "answer_changed",
            FlowIntent::QuestionAdvance => "question_advance",
            FlowIntent::QuestionRetreat => "question_retreat",
            FlowIntent::RequestResults => "request_results",
            FlowIntent::SessionResultsReady => "session_results_ready",
            FlowIntent::StartNewSession => "start_new_session",
            FlowIntent::Back => "back",
        }
    }
}
