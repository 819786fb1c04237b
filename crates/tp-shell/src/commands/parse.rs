use tp_core::flow::{FlowIntent, FlowSnapshot, Screen};
use tp_core::premium::{PremiumOption, PremiumResolution};

pub const HELP: &str = "\
Commands:
  next            continue (page, question or the screen's main action)
  prev            previous page or question
  back            go back
  finish          get started (last onboarding page)
  select <plan>   choose yearly, monthly or lifetime
  upgrade         continue with the selected plan
  restore         restore purchases
  start           begin a session
  answer <text>   answer the current question
  results         analyze the finished session
  new             start a new session
  state           print the flow state as JSON
  screens         list screens reachable from here
  help            show this help
  quit            leave";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("type a command, or `help` for the list")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("unknown plan `{0}`, expected yearly, monthly or lifetime")]
    UnknownPlan(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Back,
    Finish,
    Select(PremiumOption),
    Upgrade,
    Restore,
    Start,
    Answer(String),
    Results,
    New,
    State,
    Screens,
    Help,
    Quit,
}

/// What the shell does with a command on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Dispatch(FlowIntent),
    ShowState,
    ShowScreens,
    ShowHelp,
    /// Printed instead of dispatching.
    Notice(&'static str),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Err(CommandError::Empty),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "back" | "b" => Command::Back,
        "finish" => Command::Finish,
        "select" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "select",
                    what: "a plan",
                });
            }
            let option = PremiumOption::from_name(rest)
                .ok_or_else(|| CommandError::UnknownPlan(rest.to_string()))?;
            Command::Select(option)
        }
        "upgrade" => Command::Upgrade,
        "restore" => Command::Restore,
        "start" => Command::Start,
        "answer" | "a" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "answer",
                    what: "some text",
                });
            }
            Command::Answer(rest.to_string())
        }
        "results" => Command::Results,
        "new" => Command::New,
        "state" => Command::State,
        "screens" => Command::Screens,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

/// Maps a command to an intent for the screen in `snapshot`.
///
/// `next` is the main action of the screen. `prev` and `back` step the
/// onboarding pager or the question cursor before falling back to system back.
pub fn resolve(command: Command, snapshot: &FlowSnapshot) -> Resolved {
    let screen = snapshot.screen;
    let intent = match command {
        Command::Next => match screen {
            Screen::Onboarding if snapshot.onboarding_page + 1 >= snapshot.onboarding_pages => {
                FlowIntent::OnboardingFinished
            }
            Screen::Onboarding => FlowIntent::OnboardingPageNext,
            Screen::Premium => upgrade(snapshot),
            Screen::Entry => FlowIntent::BeginPreparation,
            Screen::Questions => FlowIntent::QuestionAdvance,
            Screen::SessionCompleted => FlowIntent::RequestResults,
            Screen::Results => FlowIntent::StartNewSession,
        },
        Command::Prev => match screen {
            Screen::Onboarding => FlowIntent::OnboardingPagePrevious,
            Screen::Questions => FlowIntent::QuestionRetreat,
            _ => FlowIntent::Back,
        },
        Command::Back => match screen {
            Screen::Questions => FlowIntent::QuestionRetreat,
            _ => FlowIntent::Back,
        },
        Command::Finish
            if screen == Screen::Onboarding
                && snapshot.onboarding_page + 1 < snapshot.onboarding_pages =>
        {
            return Resolved::Notice("`finish` is on the last page, type `next` to continue");
        }
        Command::Finish => FlowIntent::OnboardingFinished,
        Command::Select(option) => FlowIntent::PremiumOptionSelected { option },
        Command::Upgrade => upgrade(snapshot),
        Command::Restore => FlowIntent::PremiumResolved {
            resolution: PremiumResolution::Restore,
        },
        Command::Start => FlowIntent::BeginPreparation,
        Command::Answer(text) => FlowIntent::AnswerChanged { text },
        Command::Results => FlowIntent::RequestResults,
        Command::New => FlowIntent::StartNewSession,
        Command::State => return Resolved::ShowState,
        Command::Screens => return Resolved::ShowScreens,
        Command::Help => return Resolved::ShowHelp,
        Command::Quit => return Resolved::Quit,
    };
    Resolved::Dispatch(intent)
}

fn upgrade(snapshot: &FlowSnapshot) -> FlowIntent {
    FlowIntent::PremiumResolved {
        resolution: PremiumResolution::Upgrade {
            option: snapshot.premium_selection,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::flow::FlowState;
    use tp_core::questions::PromptSet;

    fn snapshot_on(screen: Screen) -> FlowSnapshot {
        let mut snapshot = FlowState::unlocked(PromptSet::default()).snapshot();
        snapshot.screen = screen;
        snapshot
    }

    #[test]
    fn parse_command_accepts_words_and_aliases() {
        assert_eq!(parse_command("next"), Ok(Command::Next));
        assert_eq!(parse_command("  N "), Ok(Command::Next));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert_eq!(
            parse_command("select Monthly"),
            Ok(Command::Select(PremiumOption::Monthly))
        );
        assert_eq!(
            parse_command("answer  pretty good, thanks "),
            Ok(Command::Answer("pretty good, thanks".to_string()))
        );
    }

    #[test]
    fn parse_command_reports_typed_errors() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(
            parse_command("select weekly"),
            Err(CommandError::UnknownPlan("weekly".to_string()))
        );
        assert!(matches!(
            parse_command("answer"),
            Err(CommandError::MissingArgument {
                command: "answer",
                ..
            })
        ));
    }

    #[test]
    fn next_is_the_main_action_of_each_screen() {
        let cases = [
            (Screen::Onboarding, FlowIntent::OnboardingPageNext),
            (Screen::Entry, FlowIntent::BeginPreparation),
            (Screen::Questions, FlowIntent::QuestionAdvance),
            (Screen::SessionCompleted, FlowIntent::RequestResults),
            (Screen::Results, FlowIntent::StartNewSession),
        ];
        for (screen, intent) in cases {
            assert_eq!(
                resolve(Command::Next, &snapshot_on(screen)),
                Resolved::Dispatch(intent),
                "next on {screen}"
            );
        }
    }

    #[test]
    fn next_on_last_onboarding_page_finishes() {
        let mut snapshot = snapshot_on(Screen::Onboarding);
        snapshot.onboarding_page = snapshot.onboarding_pages - 1;

        assert_eq!(
            resolve(Command::Next, &snapshot),
            Resolved::Dispatch(FlowIntent::OnboardingFinished)
        );
    }

    #[test]
    fn finish_waits_for_the_last_onboarding_page() {
        let mut snapshot = snapshot_on(Screen::Onboarding);
        assert!(matches!(
            resolve(Command::Finish, &snapshot),
            Resolved::Notice(_)
        ));

        snapshot.onboarding_page = snapshot.onboarding_pages - 1;
        assert_eq!(
            resolve(Command::Finish, &snapshot),
            Resolved::Dispatch(FlowIntent::OnboardingFinished)
        );
    }

    #[test]
    fn back_steps_the_cursor_on_questions_only() {
        assert_eq!(
            resolve(Command::Back, &snapshot_on(Screen::Questions)),
            Resolved::Dispatch(FlowIntent::QuestionRetreat)
        );
        assert_eq!(
            resolve(Command::Back, &snapshot_on(Screen::Onboarding)),
            Resolved::Dispatch(FlowIntent::Back)
        );
        assert_eq!(
            resolve(Command::Prev, &snapshot_on(Screen::Onboarding)),
            Resolved::Dispatch(FlowIntent::OnboardingPagePrevious)
        );
        assert_eq!(
            resolve(Command::Prev, &snapshot_on(Screen::Results)),
            Resolved::Dispatch(FlowIntent::Back)
        );
    }

    #[test]
    fn upgrade_carries_the_selected_plan() {
        let mut snapshot = snapshot_on(Screen::Premium);
        snapshot.premium_selection = PremiumOption::Lifetime;

        assert_eq!(
            resolve(Command::Upgrade, &snapshot),
            Resolved::Dispatch(FlowIntent::PremiumResolved {
                resolution: PremiumResolution::Upgrade {
                    option: PremiumOption::Lifetime
                }
            })
        );
    }

    #[test]
    fn host_commands_do_not_dispatch() {
        let snapshot = snapshot_on(Screen::Entry);
        assert_eq!(resolve(Command::State, &snapshot), Resolved::ShowState);
        assert_eq!(resolve(Command::Screens, &snapshot), Resolved::ShowScreens);
        assert_eq!(resolve(Command::Help, &snapshot), Resolved::ShowHelp);
        assert_eq!(resolve(Command::Quit, &snapshot), Resolved::Quit);
    }
}
