//! Static behavioral taxonomy
//!
//! Six top-level labels, each backed by a fixed set of sub-labels. Every
//! sub-label carries a severity weight used by the aggregation formulas.
//! The taxonomy is built once at compile time and never mutated at runtime.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level behavioral trait tracked for a user
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    EmotionalMastery,
    CognitiveClarity,
    SocialRelational,
    EthicalMoral,
    PhysicalLifestyle,
    IdentityGrowth,
}

impl Label {
    /// All six labels, in canonical order
    pub const ALL: [Label; 6] = [
        Label::EmotionalMastery,
        Label::CognitiveClarity,
        Label::SocialRelational,
        Label::EthicalMoral,
        Label::PhysicalLifestyle,
        Label::IdentityGrowth,
    ];

    /// Stable identifier used as a chart key and in serialized profiles
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::EmotionalMastery => "emotional_mastery",
            Label::CognitiveClarity => "cognitive_clarity",
            Label::SocialRelational => "social_relational",
            Label::EthicalMoral => "ethical_moral",
            Label::PhysicalLifestyle => "physical_lifestyle",
            Label::IdentityGrowth => "identity_growth",
        }
    }

    /// Human-readable name for rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::EmotionalMastery => "Emotional Mastery",
            Label::CognitiveClarity => "Cognitive Clarity",
            Label::SocialRelational => "Social & Relational",
            Label::EthicalMoral => "Ethical & Moral",
            Label::PhysicalLifestyle => "Physical & Lifestyle",
            Label::IdentityGrowth => "Identity & Growth",
        }
    }
}

/// A fine-grained trait nested under exactly one label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubLabel {
    /// Stable snake_case identifier, unique across the whole taxonomy
    pub id: &'static str,
    /// Human-readable name for rendering
    pub name: &'static str,
    /// Parent label
    pub label: Label,
    /// Relative weight in aggregation, always > 0 (observed range 3-9)
    pub severity: u8,
}

const fn sub(id: &'static str, name: &'static str, label: Label, severity: u8) -> SubLabel {
    SubLabel { id, name, label, severity }
}

const EMOTIONAL_MASTERY: &[SubLabel] = &[
    sub("emotional_awareness", "Emotional Awareness", Label::EmotionalMastery, 3),
    sub("anger_management", "Anger Management", Label::EmotionalMastery, 6),
    sub("anxiety_and_worry", "Anxiety and Worry", Label::EmotionalMastery, 5),
    sub("emotional_suppression", "Emotional Suppression", Label::EmotionalMastery, 5),
    sub("jealousy_and_envy", "Jealousy and Envy", Label::EmotionalMastery, 5),
    sub("emotional_dependency", "Emotional Dependency", Label::EmotionalMastery, 4),
    sub("grief_and_loss_processing", "Grief and Loss Processing", Label::EmotionalMastery, 4),
    sub("frustration_tolerance", "Frustration Tolerance", Label::EmotionalMastery, 4),
    sub("shame_and_guilt_spirals", "Shame and Guilt Spirals", Label::EmotionalMastery, 6),
    sub("mood_volatility", "Mood Volatility", Label::EmotionalMastery, 5),
    sub(
        "grudge_holding_and_unforgiveness",
        "Grudge Holding and Unforgiveness",
        Label::EmotionalMastery,
        5,
    ),
    sub("impulsivity", "Impulsivity", Label::EmotionalMastery, 6),
];

const COGNITIVE_CLARITY: &[SubLabel] = &[
    sub("confirmation_bias", "Confirmation Bias", Label::CognitiveClarity, 5),
    sub("black_and_white_thinking", "Black and White Thinking", Label::CognitiveClarity, 4),
    sub("catastrophizing", "Catastrophizing", Label::CognitiveClarity, 5),
    sub("overthinking_and_rumination", "Overthinking and Rumination", Label::CognitiveClarity, 4),
    sub(
        "dunning_kruger_overconfidence",
        "Dunning-Kruger Overconfidence",
        Label::CognitiveClarity,
        5,
    ),
    sub("sunk_cost_fallacy", "Sunk Cost Fallacy", Label::CognitiveClarity, 4),
    sub("attribution_errors", "Attribution Errors", Label::CognitiveClarity, 5),
    sub("negativity_bias", "Negativity Bias", Label::CognitiveClarity, 4),
    sub("anchoring_bias", "Anchoring Bias", Label::CognitiveClarity, 3),
    sub("self_serving_bias", "Self-Serving Bias", Label::CognitiveClarity, 5),
    sub("hindsight_bias", "Hindsight Bias", Label::CognitiveClarity, 3),
    sub("bandwagon_effect", "Bandwagon Effect", Label::CognitiveClarity, 4),
    sub("projection", "Projection", Label::CognitiveClarity, 5),
    sub(
        "indecisiveness_and_decision_paralysis",
        "Indecisiveness and Decision Paralysis",
        Label::CognitiveClarity,
        4,
    ),
];

const SOCIAL_RELATIONAL: &[SubLabel] = &[
    sub("empathy_deficit", "Empathy Deficit", Label::SocialRelational, 6),
    sub("poor_communication", "Poor Communication", Label::SocialRelational, 4),
    sub("active_listening_failure", "Active Listening Failure", Label::SocialRelational, 3),
    sub("conflict_avoidance", "Conflict Avoidance", Label::SocialRelational, 4),
    sub("destructive_conflict", "Destructive Conflict", Label::SocialRelational, 6),
    sub("boundary_violation", "Boundary Violation", Label::SocialRelational, 7),
    sub("inability_to_set_boundaries", "Inability to Set Boundaries", Label::SocialRelational, 4),
    sub("people_pleasing", "People Pleasing", Label::SocialRelational, 4),
    sub("social_manipulation", "Social Manipulation", Label::SocialRelational, 8),
    sub("passive_aggression", "Passive Aggression", Label::SocialRelational, 5),
    sub("isolation_and_withdrawal", "Isolation and Withdrawal", Label::SocialRelational, 5),
    sub("codependency", "Codependency", Label::SocialRelational, 5),
    sub("gossip_and_backbiting", "Gossip and Backbiting", Label::SocialRelational, 5),
    sub("bullying_and_intimidation", "Bullying and Intimidation", Label::SocialRelational, 7),
    sub("trust_issues_and_suspicion", "Trust Issues and Suspicion", Label::SocialRelational, 5),
];

const ETHICAL_MORAL: &[SubLabel] = &[
    sub("misogyny_gender_disrespect", "Misogyny / Gender Disrespect", Label::EthicalMoral, 8),
    sub("racism_ethnic_prejudice", "Racism / Ethnic Prejudice", Label::EthicalMoral, 9),
    sub("homophobia_lgbtq_prejudice", "Homophobia / LGBTQ+ Prejudice", Label::EthicalMoral, 8),
    sub(
        "religious_cultural_intolerance",
        "Religious / Cultural Intolerance",
        Label::EthicalMoral,
        7,
    ),
    sub("class_disability_prejudice", "Class / Disability Prejudice", Label::EthicalMoral, 7),
    sub("dishonesty_and_deception", "Dishonesty and Deception", Label::EthicalMoral, 7),
    sub("lack_of_accountability", "Lack of Accountability", Label::EthicalMoral, 6),
    sub("entitlement_and_selfishness", "Entitlement and Selfishness", Label::EthicalMoral, 6),
    sub("cruelty_and_callousness", "Cruelty and Callousness", Label::EthicalMoral, 9),
    sub("hypocrisy", "Hypocrisy", Label::EthicalMoral, 5),
];

const PHYSICAL_LIFESTYLE: &[SubLabel] = &[
    sub("physical_inactivity", "Physical Inactivity", Label::PhysicalLifestyle, 4),
    sub("poor_nutrition", "Poor Nutrition", Label::PhysicalLifestyle, 4),
    sub("sleep_neglect", "Sleep Neglect", Label::PhysicalLifestyle, 4),
    sub("substance_misuse", "Substance Misuse", Label::PhysicalLifestyle, 8),
    sub(
        "screen_and_digital_addiction",
        "Screen and Digital Addiction",
        Label::PhysicalLifestyle,
        5,
    ),
    sub("procrastination", "Procrastination", Label::PhysicalLifestyle, 4),
    sub("poor_time_management", "Poor Time Management", Label::PhysicalLifestyle, 3),
    sub("financial_irresponsibility", "Financial Irresponsibility", Label::PhysicalLifestyle, 5),
    sub(
        "hygiene_and_self_care_neglect",
        "Hygiene and Self-Care Neglect",
        Label::PhysicalLifestyle,
        4,
    ),
    sub("workaholism", "Workaholism", Label::PhysicalLifestyle, 5),
    sub(
        "attention_and_focus_deficit",
        "Attention and Focus Deficit",
        Label::PhysicalLifestyle,
        4,
    ),
    sub("sexual_compulsivity", "Sexual Compulsivity", Label::PhysicalLifestyle, 6),
];

const IDENTITY_GROWTH: &[SubLabel] = &[
    sub("low_self_confidence", "Low Self-Confidence", Label::IdentityGrowth, 3),
    sub("low_self_worth", "Low Self-Worth", Label::IdentityGrowth, 5),
    sub("impostor_syndrome", "Impostor Syndrome", Label::IdentityGrowth, 3),
    sub("toxic_perfectionism", "Toxic Perfectionism", Label::IdentityGrowth, 4),
    sub("fear_of_failure", "Fear of Failure", Label::IdentityGrowth, 4),
    sub("fear_of_rejection", "Fear of Rejection", Label::IdentityGrowth, 4),
    sub("lack_of_purpose", "Lack of Purpose", Label::IdentityGrowth, 5),
    sub("victim_mentality", "Victim Mentality", Label::IdentityGrowth, 6),
    sub("fixed_mindset", "Fixed Mindset", Label::IdentityGrowth, 5),
    sub("learned_helplessness", "Learned Helplessness", Label::IdentityGrowth, 5),
    sub("complacency", "Complacency", Label::IdentityGrowth, 3),
    sub("identity_fragility", "Identity Fragility", Label::IdentityGrowth, 4),
    sub("inability_to_ask_for_help", "Inability to Ask for Help", Label::IdentityGrowth, 4),
    sub(
        "materialism_and_status_obsession",
        "Materialism and Status Obsession",
        Label::IdentityGrowth,
        5,
    ),
    sub(
        "spiritual_existential_disconnection",
        "Spiritual / Existential Disconnection",
        Label::IdentityGrowth,
        4,
    ),
];

/// Index from sub-label id to its static record, built on first use
static SUBLABEL_INDEX: Lazy<HashMap<&'static str, &'static SubLabel>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for label in Label::ALL {
        for sublabel in sublabels_for(label) {
            index.insert(sublabel.id, sublabel);
        }
    }
    index
});

/// All sub-labels belonging to one label, in canonical order
pub fn sublabels_for(label: Label) -> &'static [SubLabel] {
    match label {
        Label::EmotionalMastery => EMOTIONAL_MASTERY,
        Label::CognitiveClarity => COGNITIVE_CLARITY,
        Label::SocialRelational => SOCIAL_RELATIONAL,
        Label::EthicalMoral => ETHICAL_MORAL,
        Label::PhysicalLifestyle => PHYSICAL_LIFESTYLE,
        Label::IdentityGrowth => IDENTITY_GROWTH,
    }
}

/// Iterate every sub-label in the taxonomy, label order then declaration order
pub fn all_sublabels() -> impl Iterator<Item = &'static SubLabel> {
    Label::ALL.into_iter().flat_map(|label| sublabels_for(label).iter())
}

/// Look up a sub-label by its stable id
pub fn find_sublabel(id: &str) -> Option<&'static SubLabel> {
    SUBLABEL_INDEX.get(id).copied()
}

/// Total number of sub-labels in the taxonomy
pub fn sublabel_count() -> usize {
    Label::ALL.iter().map(|&label| sublabels_for(label).len()).sum()
}
