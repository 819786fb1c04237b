//! Onboarding domain models
//!
//! The onboarding screen pages through a fixed set of introduction pages.
//! Finishing onboarding is independent of the page position.

mod pager;

pub use pager::OnboardingPager;
