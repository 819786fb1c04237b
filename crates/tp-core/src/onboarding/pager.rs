use serde::{Deserialize, Serialize};

/// Cursor over the onboarding pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPager {
    page: usize,
    total: usize,
}

impl OnboardingPager {
    pub fn new(total: usize) -> Self {
        Self { page: 0, total }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.total
    }

    /// Moves forward; a no-op on the last page.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Moves back; a no-op on the first page.
    pub fn previous(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }
}

impl Default for OnboardingPager {
    fn default() -> Self {
        Self::new(crate::content::ONBOARDING_PAGES.len())
    }
}
