use serde::{Deserialize, Serialize};

use crate::premium::{PremiumOption, PremiumResolution};
use crate::questions::QuestionProgress;

use super::{Activity, Screen};

/// Serializable projection of the flow state, emitted after every dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub screen: Screen,
    pub stack: Vec<Screen>,
    pub onboarding_completed: bool,
    pub premium_unlocked: bool,
    pub onboarding_page: usize,
    pub onboarding_pages: usize,
    pub premium_selection: PremiumOption,
    pub premium_resolution: Option<PremiumResolution>,
    pub question: Option<QuestionProgress>,
    pub activity: Option<Activity>,
}
