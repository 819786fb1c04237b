//! Premium offer domain models.
//!
//! Plans are display data only. Resolving the offer unlocks the main flow;
//! no purchase is processed.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Subscription plan shown on the premium screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumOption {
    #[default]
    Yearly,
    Monthly,
    Lifetime,
}

impl PremiumOption {
    pub const ALL: [PremiumOption; 3] = [
        PremiumOption::Yearly,
        PremiumOption::Monthly,
        PremiumOption::Lifetime,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PremiumOption::Yearly => "Yearly",
            PremiumOption::Monthly => "Monthly",
            PremiumOption::Lifetime => "Lifetime",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            PremiumOption::Yearly => "$49.99",
            PremiumOption::Monthly => "$7.99",
            PremiumOption::Lifetime => "$99.99",
        }
    }

    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            PremiumOption::Yearly => Some("Best Value"),
            PremiumOption::Monthly => None,
            PremiumOption::Lifetime => Some("One-time purchase"),
        }
    }

    pub fn button_title(self) -> String {
        format!("Continue with {} ({})", self.title(), self.price())
    }

    /// Case-insensitive lookup by title.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.title().eq_ignore_ascii_case(name.trim()))
    }
}

impl Display for PremiumOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// How the premium screen was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PremiumResolution {
    Upgrade { option: PremiumOption },
    Restore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_is_the_default_selection() {
        assert_eq!(PremiumOption::default(), PremiumOption::Yearly);
    }

    #[test]
    fn button_title_includes_price() {
        assert_eq!(
            PremiumOption::Monthly.button_title(),
            "Continue with Monthly ($7.99)"
        );
    }

    #[test]
    fn from_name_ignores_case_and_whitespace() {
        assert_eq!(
            PremiumOption::from_name(" LIFETIME "),
            Some(PremiumOption::Lifetime)
        );
        assert_eq!(PremiumOption::from_name("weekly"), None);
    }
}
