//! Replays intent and operation sequences against the flow controller and
//! checks them against a plain model of the edge table.

use tp_core::flow::{FlowGraph, FlowIntent, FlowState, FlowStateMachine, Screen, Transition};
use tp_core::questions::PromptSet;

#[derive(Debug, Clone, Copy)]
enum Op {
    Advance,
    Retreat,
}

fn single_prompt() -> PromptSet {
    PromptSet::new(vec!["Only question?".to_string()])
}

/// Next push target from `screen`, if the edge table has one.
fn push_target(screen: Screen) -> Option<Screen> {
    FlowGraph::edges()
        .iter()
        .find(|e| e.from == screen && e.kind == tp_core::flow::EdgeKind::Push)
        .map(|e| e.to)
}

fn sequences(len: usize) -> Vec<Vec<Op>> {
    (0..(1usize << len))
        .map(|bits| {
            (0..len)
                .map(|i| {
                    if bits & (1 << i) == 0 {
                        Op::Advance
                    } else {
                        Op::Retreat
                    }
                })
                .collect()
        })
        .collect()
}

#[test]
fn replayed_walks_match_the_edge_table_model() {
    for len in 0..=8 {
        for ops in sequences(len) {
            let mut state = FlowState::unlocked(single_prompt());
            let mut model = vec![Screen::Entry];

            for op in &ops {
                let current = *model.last().unwrap();
                match op {
                    Op::Advance => {
                        let Some(to) = push_target(current) else {
                            continue;
                        };
                        let outcome = state.advance(to);
                        assert_eq!(outcome, Transition::Moved { from: current, to });
                        model.push(to);
                    }
                    Op::Retreat => {
                        if model.len() == 1 {
                            assert_eq!(state.retreat(), Transition::ExitRequested);
                            continue;
                        }
                        model.pop();
                        state.retreat();
                    }
                }
                assert_eq!(state.current_screen(), *model.last().unwrap(), "{ops:?}");
            }

            assert_eq!(state.stack().len(), model.len() - 1, "{ops:?}");
            assert!(!state.stack().contains(Screen::Onboarding));
            assert!(!state.stack().contains(Screen::Premium));
        }
    }
}

#[test]
fn reset_to_start_returns_to_entry_from_any_depth() {
    for depth in 0..=3 {
        let mut state = FlowState::unlocked(single_prompt());
        let mut current = Screen::Entry;
        for _ in 0..depth {
            let to = push_target(current).unwrap();
            state.advance(to);
            current = to;
        }

        state.reset_to_start();

        assert_eq!(state.current_screen(), Screen::Entry);
        assert!(state.stack().is_empty());
        assert!(state.questions().is_none());
        assert!(state.onboarding_completed());
        assert!(state.premium_unlocked());
    }
}

#[test]
fn gate_screens_track_the_flags() {
    let mut state = FlowState::default();
    for step in 0..3 {
        let screen = state.current_screen();
        assert_eq!(
            screen == Screen::Onboarding,
            !state.onboarding_completed(),
            "step {step}"
        );
        assert_eq!(
            screen == Screen::Premium,
            state.onboarding_completed() && !state.premium_unlocked(),
            "step {step}"
        );
        if step == 0 {
            state.complete_onboarding();
        } else {
            state.complete_premium();
        }
    }
}

#[test]
fn full_session_scenario_returns_to_entry_with_flags_kept() {
    let mut state = FlowState::new(PromptSet::default());
    let mut apply = |intent: FlowIntent| {
        let (next, _) = FlowStateMachine::transition(state.clone(), intent);
        state = next;
        state.current_screen()
    };

    assert_eq!(apply(FlowIntent::OnboardingFinished), Screen::Premium);
    assert_eq!(
        apply(FlowIntent::PremiumResolved {
            resolution: tp_core::premium::PremiumResolution::Restore
        }),
        Screen::Entry
    );
    assert_eq!(apply(FlowIntent::StartSession), Screen::Questions);
    for _ in 0..3 {
        assert_eq!(apply(FlowIntent::QuestionAdvance), Screen::Questions);
    }
    assert_eq!(apply(FlowIntent::QuestionAdvance), Screen::SessionCompleted);
    assert_eq!(apply(FlowIntent::SessionResultsReady), Screen::Results);
    assert_eq!(apply(FlowIntent::StartNewSession), Screen::Entry);

    assert!(state.stack().is_empty());
    assert!(state.onboarding_completed());
    assert!(state.premium_unlocked());
}

#[test]
fn question_retreat_at_first_prompt_leaves_empty_stack() {
    let mut state = FlowState::unlocked(PromptSet::default());
    state.advance(Screen::Questions);

    let (state, actions) = FlowStateMachine::transition(state, FlowIntent::QuestionRetreat);

    assert_eq!(state.current_screen(), Screen::Entry);
    assert!(state.stack().is_empty());
    assert!(actions.is_empty());
}
