//! Onboarding quiz catalog
//!
//! 24 questions, 4 per label, in a mix of scenario, agree/disagree, and
//! self-rating shapes. Scenario questions carry an explicit option-to-score
//! table; scale questions are answered 1-5 and normalized by the initializer.

use crate::taxonomy::Label;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Question shape, which determines how an answer token is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizShape {
    /// Concrete situation with an ordered list of (option text, score) pairs
    Scenario,
    /// 1-5 agreement scale
    AgreeDisagree,
    /// 1-5 self-assessment scale
    SelfRating,
}

/// One onboarding question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub label: Label,
    pub shape: QuizShape,
    pub text: String,
    /// Scenario only: ordered (option text, score) pairs, scores in [0, 100]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<(String, f64)>,
    /// Scale shapes only: a high raw rating means the trait is a problem
    #[serde(default)]
    pub inverted: bool,
}

impl QuizQuestion {
    fn scenario(id: &str, label: Label, text: &str, options: &[(&str, f64)]) -> Self {
        Self {
            id: id.to_string(),
            label,
            shape: QuizShape::Scenario,
            text: text.to_string(),
            options: options
                .iter()
                .map(|(opt, score)| (opt.to_string(), *score))
                .collect(),
            inverted: false,
        }
    }

    fn scale(id: &str, label: Label, shape: QuizShape, text: &str, inverted: bool) -> Self {
        Self {
            id: id.to_string(),
            label,
            shape,
            text: text.to_string(),
            options: Vec::new(),
            inverted,
        }
    }
}

static CATALOG: Lazy<Vec<QuizQuestion>> = Lazy::new(build_catalog);

/// The built-in onboarding catalog: 24 questions, 4 per label
pub fn catalog() -> &'static [QuizQuestion] {
    &CATALOG
}

fn build_catalog() -> Vec<QuizQuestion> {
    use QuizShape::{AgreeDisagree, SelfRating};

    vec![
        // Emotional Mastery
        QuizQuestion::scenario(
            "em_1",
            Label::EmotionalMastery,
            "A close friend cancels plans at the last minute for the third time. How do you react?",
            &[
                ("Blow up at them over text immediately", 10.0),
                ("Feel angry but say nothing and stew about it for days", 30.0),
                (
                    "Feel disappointed, wait a bit, then calmly tell them how it affects you",
                    80.0,
                ),
                (
                    "Acknowledge the frustration, check in on them, and set a boundary",
                    100.0,
                ),
            ],
        ),
        QuizQuestion::scale(
            "em_2",
            Label::EmotionalMastery,
            SelfRating,
            "I can usually name what I'm feeling (e.g., anxious, frustrated, sad) as it happens.",
            false,
        ),
        QuizQuestion::scale(
            "em_3",
            Label::EmotionalMastery,
            AgreeDisagree,
            "When something upsets me, I tend to bottle it up rather than deal with it.",
            true,
        ),
        QuizQuestion::scale(
            "em_4",
            Label::EmotionalMastery,
            SelfRating,
            "I recover from emotional setbacks (bad news, arguments, disappointments) within a reasonable time.",
            false,
        ),
        // Cognitive Clarity
        QuizQuestion::scenario(
            "cc_1",
            Label::CognitiveClarity,
            "You read an article that contradicts a strong opinion you hold. What do you do?",
            &[
                ("Dismiss it immediately — it's probably biased", 10.0),
                ("Skim it but focus on the parts you can argue against", 30.0),
                ("Read it fully but feel uncomfortable and move on", 55.0),
                ("Read it carefully and genuinely consider updating your view", 100.0),
            ],
        ),
        QuizQuestion::scale(
            "cc_2",
            Label::CognitiveClarity,
            AgreeDisagree,
            "I often replay past events in my head wishing I had done things differently, even long after they happened.",
            true,
        ),
        QuizQuestion::scale(
            "cc_3",
            Label::CognitiveClarity,
            SelfRating,
            "When things go wrong, I can usually see multiple reasons why — not just one person or thing to blame.",
            false,
        ),
        QuizQuestion::scale(
            "cc_4",
            Label::CognitiveClarity,
            AgreeDisagree,
            "I tend to assume the worst-case outcome when facing uncertainty.",
            true,
        ),
        // Social & Relational
        QuizQuestion::scenario(
            "sr_1",
            Label::SocialRelational,
            "A coworker takes credit for your idea in a meeting. What do you do?",
            &[
                ("Say nothing but badmouth them to other colleagues later", 15.0),
                ("Confront them aggressively in front of everyone", 20.0),
                ("Let it go this time but feel resentful", 40.0),
                ("Speak to them privately and calmly after the meeting", 100.0),
            ],
        ),
        QuizQuestion::scale(
            "sr_2",
            Label::SocialRelational,
            SelfRating,
            "When someone is talking to me, I fully listen rather than planning what I'll say next.",
            false,
        ),
        QuizQuestion::scale(
            "sr_3",
            Label::SocialRelational,
            AgreeDisagree,
            "I find it hard to say no to people, even when I really want to.",
            true,
        ),
        QuizQuestion::scale(
            "sr_4",
            Label::SocialRelational,
            SelfRating,
            "I can express my needs clearly in relationships without starting a fight.",
            false,
        ),
        // Ethical & Moral
        QuizQuestion::scenario(
            "etm_1",
            Label::EthicalMoral,
            "You overhear a friend making a disrespectful joke about someone's race. What do you do?",
            &[
                ("Laugh along — it's just a joke", 10.0),
                ("Stay silent but feel uncomfortable", 35.0),
                ("Change the topic to avoid conflict", 45.0),
                ("Tell them directly that it's not okay", 100.0),
            ],
        ),
        QuizQuestion::scale(
            "etm_2",
            Label::EthicalMoral,
            AgreeDisagree,
            "When I make a mistake that affects someone, I own up to it rather than deflecting.",
            false,
        ),
        QuizQuestion::scale(
            "etm_3",
            Label::EthicalMoral,
            SelfRating,
            "I treat people the same regardless of their gender, race, religion, or background.",
            false,
        ),
        QuizQuestion::scale(
            "etm_4",
            Label::EthicalMoral,
            AgreeDisagree,
            "I sometimes hold others to standards that I don't follow myself.",
            true,
        ),
        // Physical & Lifestyle
        QuizQuestion::scenario(
            "pl_1",
            Label::PhysicalLifestyle,
            "It's 11 PM on a work night. You have an important morning meeting but you're deep into social media scrolling. What do you do?",
            &[
                ("Keep scrolling — you'll deal with it tomorrow", 10.0),
                (
                    "Tell yourself 'five more minutes' but end up staying up another hour",
                    25.0,
                ),
                (
                    "Feel guilty, put the phone down, but take a while to fall asleep",
                    55.0,
                ),
                ("Set the phone to charge in another room and go to sleep", 100.0),
            ],
        ),
        QuizQuestion::scale(
            "pl_2",
            Label::PhysicalLifestyle,
            SelfRating,
            "I consistently maintain a routine that includes physical activity, proper meals, and adequate sleep.",
            false,
        ),
        QuizQuestion::scale(
            "pl_3",
            Label::PhysicalLifestyle,
            AgreeDisagree,
            "I often put off important tasks until the pressure becomes unbearable.",
            true,
        ),
        QuizQuestion::scale(
            "pl_4",
            Label::PhysicalLifestyle,
            SelfRating,
            "I manage my money responsibly — I know what I spend and save regularly.",
            false,
        ),
        // Identity & Growth
        QuizQuestion::scenario(
            "ig_1",
            Label::IdentityGrowth,
            "You apply for a position you really wanted and get rejected. How do you respond?",
            &[
                (
                    "Feel devastated and stop trying — you're clearly not good enough",
                    10.0,
                ),
                ("Blame the process or the people who chose someone else", 25.0),
                (
                    "Feel hurt but move on without reflecting on what you could improve",
                    45.0,
                ),
                (
                    "Feel disappointed, ask for feedback, and use it to improve your next attempt",
                    100.0,
                ),
            ],
        ),
        QuizQuestion::scale(
            "ig_2",
            Label::IdentityGrowth,
            AgreeDisagree,
            "I often feel like a fraud, even when I've earned my achievements.",
            true,
        ),
        QuizQuestion::scale(
            "ig_3",
            Label::IdentityGrowth,
            SelfRating,
            "I have a clear sense of what I want out of life and actively work toward it.",
            false,
        ),
        QuizQuestion::scale(
            "ig_4",
            Label::IdentityGrowth,
            AgreeDisagree,
            "When things go wrong in my life, I usually feel like it's out of my control and there's nothing I can do.",
            true,
        ),
    ]
}
