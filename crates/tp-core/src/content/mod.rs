//! Static screen content.
//!
//! Everything here is fixed placeholder copy. The "insights" are not derived
//! from the answers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingPage {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ONBOARDING_PAGES: [OnboardingPage; 5] = [
    OnboardingPage {
        title: "Welcome to TherapAI",
        description: "Your personal AI-powered therapy companion.",
    },
    OnboardingPage {
        title: "Private & Secure",
        description: "Your answers are 100% private. Only you can see them.",
    },
    OnboardingPage {
        title: "Personalized Sessions",
        description: "Every session is tailored to your needs and feelings.",
    },
    OnboardingPage {
        title: "AI-Powered Insights",
        description: "Get meaningful insights and actionable suggestions, powered by AI.",
    },
    OnboardingPage {
        title: "Start Your Journey",
        description: "Ready to discover yourself? Let's begin your first session!",
    },
];

pub const DEFAULT_PROMPTS: [&str; 4] = [
    "How are you feeling today?",
    "What is something that made you smile recently?",
    "Is there anything on your mind you'd like to talk about?",
    "What is one thing you are grateful for?",
];

pub const PREMIUM_HEADLINE: &str = "Upgrade to TherapAI Premium";

pub const PREMIUM_BENEFITS: [&str; 4] = [
    "Unlimited therapy sessions",
    "Advanced AI-powered insights",
    "Priority support",
    "Early access to new features",
];

pub const ENTRY_HEADLINE: &str = "TherapAI is here to help you grow, heal, and thrive.";

pub const ENTRY_BENEFITS: [&str; 4] = [
    "Regular sessions help you gain clarity and peace of mind.",
    "Reflect on your feelings and discover new perspectives.",
    "Overcome stress and anxiety with guided support.",
    "Feel lighter, more balanced, and in control.",
];

pub const DISCLAIMER: [&str; 4] = [
    "The suggestions and results in this app are generated by AI and are for informational purposes only. If you are experiencing serious mental health issues, please consult a licensed professional. Do not rely on this app for medical advice or medication.",
    "TherapAI does not provide crisis support. If you are in crisis or need immediate help, contact emergency services or a mental health professional.",
    "No content in this app should be considered a substitute for professional medical advice, diagnosis, or treatment.",
    "Never disregard professional medical advice or delay seeking it because of something you have read in this app.",
];

pub const SESSION_COMPLETED_HEADLINE: &str = "Congratulations, session completed!";
pub const SESSION_COMPLETED_NOTE: &str = "Your answers will be analyzed by AI.";
pub const PREPARING_MESSAGE: &str = "Preparing your session...";
pub const ANALYZING_MESSAGE: &str = "Preparing your results...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsightCard {
    pub title: &'static str,
    pub content: &'static str,
    pub description: Option<&'static str>,
}

/// Fixed insights shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionInsights {
    pub headline: &'static str,
    pub cards: [InsightCard; 3],
}

impl SessionInsights {
    pub fn placeholder() -> Self {
        Self {
            headline: "Your Session Insights",
            cards: [
                InsightCard {
                    title: "Emotional State",
                    content: "Calm & Thoughtful",
                    description: Some("You seem to be feeling calm and open to reflection today."),
                },
                InsightCard {
                    title: "Awareness Notes",
                    content: "Grateful for small moments",
                    description: Some("You're noticing the little things and practicing gratitude."),
                },
                InsightCard {
                    title: "Actions & Suggestions",
                    content: "Take a mindful walk\nWrite down one thing you're grateful for\nTreat yourself to a relaxing break",
                    description: None,
                },
            ],
        }
    }
}
