//! Text rendering of flow snapshots.

use std::fmt;

use async_trait::async_trait;
use tp_core::content::{
    SessionInsights, ANALYZING_MESSAGE, DISCLAIMER, ENTRY_BENEFITS, ENTRY_HEADLINE,
    ONBOARDING_PAGES, PREMIUM_BENEFITS, PREMIUM_HEADLINE, PREPARING_MESSAGE,
    SESSION_COMPLETED_HEADLINE, SESSION_COMPLETED_NOTE,
};
use tp_core::flow::{Activity, FlowSnapshot, Screen};
use tp_core::ports::FlowEventPort;
use tp_core::premium::PremiumOption;
use tracing::debug;

use super::Console;

/// Prints the active screen after every dispatch.
pub struct TerminalRenderer {
    console: Console,
}

impl TerminalRenderer {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn render(&self, snapshot: &FlowSnapshot) {
        self.console.print(&render_snapshot(snapshot));
    }
}

#[async_trait]
impl FlowEventPort for TerminalRenderer {
    async fn emit_flow_state_changed(&self, snapshot: FlowSnapshot) -> anyhow::Result<()> {
        debug!(screen = %snapshot.screen, "rendering flow snapshot");
        self.render(&snapshot);
        Ok(())
    }
}

pub fn render_snapshot(snapshot: &FlowSnapshot) -> String {
    ScreenView(snapshot).to_string().trim_end().to_string()
}

/// Display adapter for the active screen of a snapshot.
struct ScreenView<'a>(&'a FlowSnapshot);

impl fmt::Display for ScreenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        writeln!(f, "== {} ==", snapshot.screen)?;

        match snapshot.screen {
            Screen::Onboarding => render_onboarding(f, snapshot)?,
            Screen::Premium => render_premium(f, snapshot)?,
            Screen::Entry => render_entry(f)?,
            Screen::Questions => render_question(f, snapshot)?,
            Screen::SessionCompleted => {
                writeln!(f, "{SESSION_COMPLETED_HEADLINE}")?;
                writeln!(f, "{SESSION_COMPLETED_NOTE}")?;
            }
            Screen::Results => render_results(f)?,
        }

        match snapshot.activity {
            Some(Activity::Preparing) => writeln!(f, "\n{PREPARING_MESSAGE}"),
            Some(Activity::Analyzing) => writeln!(f, "\n{ANALYZING_MESSAGE}"),
            None => Ok(()),
        }
    }
}

fn render_onboarding(f: &mut fmt::Formatter<'_>, snapshot: &FlowSnapshot) -> fmt::Result {
    if let Some(page) = ONBOARDING_PAGES.get(snapshot.onboarding_page) {
        writeln!(
            f,
            "[{}/{}] {}",
            snapshot.onboarding_page + 1,
            snapshot.onboarding_pages,
            page.title
        )?;
        writeln!(f, "{}", page.description)?;
    }
    let last = snapshot.onboarding_page + 1 >= snapshot.onboarding_pages;
    let hint = if last {
        "Type `next` to get started."
    } else {
        "Type `next` to continue or `prev` to go back."
    };
    writeln!(f, "\n{hint}")
}

fn render_premium(f: &mut fmt::Formatter<'_>, snapshot: &FlowSnapshot) -> fmt::Result {
    writeln!(f, "{PREMIUM_HEADLINE}")?;
    for benefit in PREMIUM_BENEFITS {
        writeln!(f, "  * {benefit}")?;
    }
    writeln!(f)?;
    for option in PremiumOption::ALL {
        let marker = if option == snapshot.premium_selection {
            ">"
        } else {
            " "
        };
        write!(f, "{marker} {:<9}{:>8}", option.title(), option.price())?;
        match option.subtitle() {
            Some(subtitle) => writeln!(f, "  ({subtitle})")?,
            None => writeln!(f)?,
        }
    }
    writeln!(f, "\n{}", snapshot.premium_selection.button_title())?;
    writeln!(f, "Type `upgrade`, `restore` or `select <plan>`.")
}

fn render_entry(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{ENTRY_HEADLINE}")?;
    for benefit in ENTRY_BENEFITS {
        writeln!(f, "  * {benefit}")?;
    }
    writeln!(f)?;
    for line in DISCLAIMER {
        writeln!(f, "{line}")?;
    }
    writeln!(f, "\nType `start` to begin a session.")
}

fn render_question(f: &mut fmt::Formatter<'_>, snapshot: &FlowSnapshot) -> fmt::Result {
    let Some(question) = &snapshot.question else {
        return Ok(());
    };
    writeln!(f, "Question {} of {}", question.index + 1, question.total)?;
    writeln!(f, "{}", question.prompt)?;
    if question.answer.is_empty() {
        writeln!(f, "(no answer yet, type `answer <text>`)")
    } else {
        writeln!(f, "> {}", question.answer)
    }
}

fn render_results(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let insights = SessionInsights::placeholder();
    writeln!(f, "{}", insights.headline)?;
    for card in insights.cards {
        writeln!(f, "\n{}: {}", card.title, card.content)?;
        if let Some(description) = card.description {
            writeln!(f, "  {description}")?;
        }
    }
    writeln!(f, "\nType `new` to start a new session.")
}
