//! Flow state machine.
//!
//! Defines a pure state transition function for the reflection flow.

use crate::premium::PremiumResolution;
use crate::questions::CursorStep;

use super::{Activity, FlowAction, FlowIntent, FlowState, Screen, Transition};

/// Pure flow state machine.
///
/// 纯状态机：不包含副作用。
pub struct FlowStateMachine;

impl FlowStateMachine {
    pub fn transition(mut state: FlowState, intent: FlowIntent) -> (FlowState, Vec<FlowAction>) {
        let screen = state.current_screen();
        match (screen, intent) {
            (Screen::Onboarding, FlowIntent::OnboardingPageNext) => {
                state.pager_mut().next();
                (state, Vec::new())
            }
            (Screen::Onboarding, FlowIntent::OnboardingPagePrevious) => {
                state.pager_mut().previous();
                (state, Vec::new())
            }
            (_, FlowIntent::OnboardingFinished) => {
                state.complete_onboarding();
                (state, Vec::new())
            }
            (Screen::Premium, FlowIntent::PremiumOptionSelected { option }) => {
                state.select_premium(option);
                (state, Vec::new())
            }
            (Screen::Premium, FlowIntent::PremiumResolved { resolution }) => {
                let resolution = match resolution {
                    PremiumResolution::Upgrade { option } => {
                        state.select_premium(option);
                        PremiumResolution::Upgrade { option }
                    }
                    PremiumResolution::Restore => PremiumResolution::Restore,
                };
                state.resolve_premium(resolution);
                (state, Vec::new())
            }
            (Screen::Entry, FlowIntent::BeginPreparation) if state.activity().is_none() => {
                state.set_activity(Some(Activity::Preparing));
                (
                    state,
                    vec![FlowAction::ScheduleIntent {
                        activity: Activity::Preparing,
                        intent: FlowIntent::StartSession,
                    }],
                )
            }
            (_, FlowIntent::StartSession) => {
                Self::finish_activity(&mut state, Activity::Preparing);
                state.advance(Screen::Questions);
                (state, Vec::new())
            }
            (Screen::Questions, FlowIntent::AnswerChanged { text }) => {
                if let Some(session) = state.questions_mut() {
                    session.set_answer(text);
                }
                (state, Vec::new())
            }
            (Screen::Questions, FlowIntent::QuestionAdvance) => {
                let step = state
                    .questions_mut()
                    .map(|session| session.forward())
                    .unwrap_or(CursorStep::AtEnd);
                if step == CursorStep::AtEnd {
                    state.advance(Screen::SessionCompleted);
                }
                (state, Vec::new())
            }
            // System back on Questions steps the cursor like QuestionRetreat.
            (Screen::Questions, FlowIntent::QuestionRetreat | FlowIntent::Back) => {
                Self::question_retreat(state)
            }
            (Screen::SessionCompleted, FlowIntent::RequestResults)
                if state.activity().is_none() =>
            {
                state.set_activity(Some(Activity::Analyzing));
                (
                    state,
                    vec![FlowAction::ScheduleIntent {
                        activity: Activity::Analyzing,
                        intent: FlowIntent::SessionResultsReady,
                    }],
                )
            }
            (_, FlowIntent::SessionResultsReady) => {
                Self::finish_activity(&mut state, Activity::Analyzing);
                state.advance(Screen::Results);
                (state, Vec::new())
            }
            (Screen::Results, FlowIntent::StartNewSession) => {
                state.reset_to_start();
                (state, Vec::new())
            }
            (_, FlowIntent::Back) => Self::retreat(state),
            (_screen, _intent) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(screen = %_screen, intent = _intent.name(), "flow intent absorbed");
                (state, Vec::new())
            }
        }
    }

    fn question_retreat(mut state: FlowState) -> (FlowState, Vec<FlowAction>) {
        let step = state
            .questions_mut()
            .map(|session| session.back())
            .unwrap_or(CursorStep::AtStart);
        if step != CursorStep::AtStart {
            return (state, Vec::new());
        }
        Self::retreat(state)
    }

    fn retreat(mut state: FlowState) -> (FlowState, Vec<FlowAction>) {
        match state.retreat() {
            Transition::ExitRequested => (state, vec![FlowAction::RequestExit]),
            _ => (state, Vec::new()),
        }
    }

    fn finish_activity(state: &mut FlowState, activity: Activity) {
        if state.activity() == Some(activity) {
            state.set_activity(None);
        }
    }
}
