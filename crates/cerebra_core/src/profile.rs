//! Persona profile: demographics, Big Five trait scores and dispositions.
//!
//! A [`Profile`] is normalized once at construction (trait scores clamped,
//! blank background dropped, age group derived) and never mutated during a
//! run. Deserialization goes through [`ProfileRecord`] so imported documents
//! are normalized the same way and derived fields are always recomputed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutral midpoint used when a trait score is missing or unusable.
pub const NEUTRAL_TRAIT: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Nonbinary,
    #[default]
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Female,
        Gender::Male,
        Gender::Nonbinary,
        Gender::Unspecified,
    ];

    /// Label used in persona descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Nonbinary => "non-binary",
            Gender::Unspecified => "unspecified gender",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Optimistic,
    #[default]
    Balanced,
    Pessimistic,
}

impl Outlook {
    pub const ALL: [Outlook; 3] = [Outlook::Optimistic, Outlook::Balanced, Outlook::Pessimistic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outlook::Optimistic => "optimistic",
            Outlook::Balanced => "balanced",
            Outlook::Pessimistic => "pessimistic",
        }
    }

    /// Mood offset carried into the pipeline context.
    pub fn optimism(&self) -> f64 {
        match self {
            Outlook::Optimistic => 0.2,
            Outlook::Balanced => 0.0,
            Outlook::Pessimistic => -0.2,
        }
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPosture {
    Cautious,
    #[default]
    Balanced,
    Bold,
}

impl RiskPosture {
    pub const ALL: [RiskPosture; 3] =
        [RiskPosture::Cautious, RiskPosture::Balanced, RiskPosture::Bold];

    pub fn label(&self) -> &'static str {
        match self {
            RiskPosture::Cautious => "a cautious risk posture",
            RiskPosture::Balanced => "a balanced risk posture",
            RiskPosture::Bold => "a risk-forward posture",
        }
    }

    /// Hesitation fixed into the pipeline context at construction.
    pub fn caution_bias(&self) -> f64 {
        match self {
            RiskPosture::Cautious => 0.25,
            RiskPosture::Balanced => 0.0,
            RiskPosture::Bold => -0.2,
        }
    }

    /// Appetite for action used by the motor stage.
    pub fn risk_bias(&self) -> f64 {
        match self {
            RiskPosture::Cautious => -0.25,
            RiskPosture::Balanced => 0.0,
            RiskPosture::Bold => 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionStyle {
    #[default]
    Steady,
    Expressive,
    Guarded,
}

impl EmotionStyle {
    pub const ALL: [EmotionStyle; 3] = [
        EmotionStyle::Steady,
        EmotionStyle::Expressive,
        EmotionStyle::Guarded,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmotionStyle::Steady => "steady emotional cadence",
            EmotionStyle::Expressive => "expressive emotional cadence",
            EmotionStyle::Guarded => "guarded emotional cadence",
        }
    }

    /// Shift applied to the amygdala alarm.
    pub fn alarm_modifier(&self) -> f64 {
        match self {
            EmotionStyle::Steady => 0.0,
            EmotionStyle::Expressive => 0.08,
            EmotionStyle::Guarded => -0.06,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Elder,
}

impl AgeGroup {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=15 => AgeGroup::Child,
            16..=22 => AgeGroup::Teen,
            23..=57 => AgeGroup::Adult,
            _ => AgeGroup::Elder,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Elder => "elder",
        }
    }

    pub fn capitalized(&self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::Teen => "Teen",
            AgeGroup::Adult => "Adult",
            AgeGroup::Elder => "Elder",
        }
    }

    pub fn traits(&self) -> AgeTraits {
        match self {
            AgeGroup::Child => AgeTraits {
                impulsivity: 0.82,
                wisdom: 0.28,
                resilience: 0.65,
                recall: 0.58,
            },
            AgeGroup::Teen => AgeTraits {
                impulsivity: 0.68,
                wisdom: 0.42,
                resilience: 0.6,
                recall: 0.64,
            },
            AgeGroup::Adult => AgeTraits {
                impulsivity: 0.45,
                wisdom: 0.72,
                resilience: 0.75,
                recall: 0.78,
            },
            AgeGroup::Elder => AgeTraits {
                impulsivity: 0.32,
                wisdom: 0.88,
                resilience: 0.7,
                recall: 0.82,
            },
        }
    }
}

/// Age-derived multipliers (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeTraits {
    pub impulsivity: f64,
    pub wisdom: f64,
    pub resilience: f64,
    pub recall: f64,
}

/// Big Five scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl Default for TraitScores {
    fn default() -> Self {
        Self {
            openness: NEUTRAL_TRAIT,
            conscientiousness: NEUTRAL_TRAIT,
            extraversion: NEUTRAL_TRAIT,
            agreeableness: NEUTRAL_TRAIT,
            neuroticism: NEUTRAL_TRAIT,
        }
    }
}

impl TraitScores {
    /// Traits in display order paired with their labels.
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("Openness", self.openness),
            ("Conscientiousness", self.conscientiousness),
            ("Extraversion", self.extraversion),
            ("Agreeableness", self.agreeableness),
            ("Emotional Reactivity", self.neuroticism),
        ]
    }

    /// Highest `n` traits by descending score; ties keep display order.
    pub fn top(&self, n: usize) -> Vec<(&'static str, f64)> {
        let mut sorted = self.labelled().to_vec();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sorted.truncate(n);
        sorted
    }

    fn normalized(self) -> Self {
        Self {
            openness: normalize_trait("openness", self.openness),
            conscientiousness: normalize_trait("conscientiousness", self.conscientiousness),
            extraversion: normalize_trait("extraversion", self.extraversion),
            agreeableness: normalize_trait("agreeableness", self.agreeableness),
            neuroticism: normalize_trait("neuroticism", self.neuroticism),
        }
    }
}

fn normalize_trait(name: &str, value: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!("Trait {} is not finite, resetting to {}", name, NEUTRAL_TRAIT);
        return NEUTRAL_TRAIT;
    }
    if !(0.0..=100.0).contains(&value) {
        tracing::warn!("Trait {} out of range ({}), clamping to [0, 100]", name, value);
    }
    value.clamp(0.0, 100.0)
}

/// Raw persona fields as supplied by a form or an imported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRecord {
    pub age: u32,
    pub gender: Gender,
    pub iq: i32,
    pub background: Option<String>,
    pub big_five: TraitScores,
    pub outlook: Outlook,
    pub risk: RiskPosture,
    pub emotion_style: EmotionStyle,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::default(),
            iq: 100,
            background: None,
            big_five: TraitScores::default(),
            outlook: Outlook::default(),
            risk: RiskPosture::default(),
            emotion_style: EmotionStyle::default(),
        }
    }
}

/// Validated persona used for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfileRecord", rename_all = "camelCase")]
pub struct Profile {
    age: u32,
    gender: Gender,
    iq: i32,
    background: Option<String>,
    big_five: TraitScores,
    outlook: Outlook,
    risk: RiskPosture,
    emotion_style: EmotionStyle,
    age_group: AgeGroup,
    age_traits: AgeTraits,
}

impl Default for Profile {
    fn default() -> Self {
        Self::from(ProfileRecord::default())
    }
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        let background = record
            .background
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        let age_group = AgeGroup::from_age(record.age);
        Self {
            age: record.age,
            gender: record.gender,
            iq: record.iq,
            background,
            big_five: record.big_five.normalized(),
            outlook: record.outlook,
            risk: record.risk,
            emotion_style: record.emotion_style,
            age_group,
            age_traits: age_group.traits(),
        }
    }
}

impl Profile {
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn iq(&self) -> i32 {
        self.iq
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn traits(&self) -> &TraitScores {
        &self.big_five
    }

    pub fn outlook(&self) -> Outlook {
        self.outlook
    }

    pub fn risk(&self) -> RiskPosture {
        self.risk
    }

    pub fn emotion_style(&self) -> EmotionStyle {
        self.emotion_style
    }

    pub fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    pub fn age_traits(&self) -> &AgeTraits {
        &self.age_traits
    }

    /// Back to the raw record form, e.g. to tweak a field and rebuild.
    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord {
            age: self.age,
            gender: self.gender,
            iq: self.iq,
            background: self.background.clone(),
            big_five: self.big_five,
            outlook: self.outlook,
            risk: self.risk,
            emotion_style: self.emotion_style,
        }
    }

    /// "Standout traits: A 80, B 70." or empty when there is nothing to rank.
    pub fn trait_summary(&self) -> String {
        let top: Vec<String> = self
            .big_five
            .top(2)
            .into_iter()
            .map(|(label, value)| format!("{} {}", label, value))
            .collect();
        if top.is_empty() {
            return String::new();
        }
        format!("Standout traits: {}.", top.join(", "))
    }

    /// One-paragraph persona description shared by exports and the baseline
    /// narrative.
    pub fn describe(&self) -> String {
        let trait_summary = self.trait_summary();
        let trait_text = if trait_summary.is_empty() {
            String::new()
        } else {
            format!("{} ", trait_summary)
        };
        format!(
            "Persona summary: {} {} ({}) with a {} outlook, {}, \
             and {}. {}Intellectual depth: IQ {}.",
            self.age_group.capitalized(),
            self.background().unwrap_or("generalist"),
            self.gender.label(),
            self.outlook,
            self.emotion_style.label(),
            self.risk.label(),
            trait_text,
            self.iq,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(15), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(16), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(22), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(23), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(57), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(58), AgeGroup::Elder);
    }

    #[test]
    fn test_default_profile() {
        let p = Profile::default();
        assert_eq!(p.iq(), 100);
        assert_eq!(p.age_group(), AgeGroup::Adult);
        assert_eq!(p.age_traits().recall, 0.78);
        assert_eq!(p.traits().openness, 50.0);
        assert!(p.background().is_none());
    }

    #[test]
    fn test_normalization() {
        let record = ProfileRecord {
            background: Some("   ".to_string()),
            big_five: TraitScores {
                openness: 140.0,
                neuroticism: -3.0,
                agreeableness: f64::NAN,
                ..TraitScores::default()
            },
            ..ProfileRecord::default()
        };
        let p = Profile::from(record);
        assert!(p.background().is_none());
        assert_eq!(p.traits().openness, 100.0);
        assert_eq!(p.traits().neuroticism, 0.0);
        assert_eq!(p.traits().agreeableness, NEUTRAL_TRAIT);
    }

    #[test]
    fn test_top_traits_ties_keep_display_order() {
        let traits = TraitScores {
            openness: 60.0,
            conscientiousness: 80.0,
            extraversion: 80.0,
            agreeableness: 10.0,
            neuroticism: 60.0,
        };
        let top = traits.top(2);
        assert_eq!(top, vec![("Conscientiousness", 80.0), ("Extraversion", 80.0)]);
    }

    #[test]
    fn test_describe_default_persona() {
        let text = Profile::default().describe();
        assert_eq!(
            text,
            "Persona summary: Adult generalist (unspecified gender) with a balanced outlook, \
steady emotional cadence, and a balanced risk posture. Standout traits: Openness 50, \
Conscientiousness 50. Intellectual depth: IQ 100."
        );
    }

    #[test]
    fn test_describe_with_background() {
        let p = Profile::from(ProfileRecord {
            age: 70,
            gender: Gender::Nonbinary,
            background: Some("  Temple Archivist ".to_string()),
            risk: RiskPosture::Bold,
            emotion_style: EmotionStyle::Guarded,
            outlook: Outlook::Pessimistic,
            big_five: TraitScores {
                neuroticism: 91.0,
                ..TraitScores::default()
            },
            ..ProfileRecord::default()
        });
        let text = p.describe();
        assert!(text.starts_with("Persona summary: Elder Temple Archivist (non-binary)"));
        assert!(text.contains(
            "pessimistic outlook, guarded emotional cadence, and a risk-forward posture"
        ));
        assert!(text.contains("Standout traits: Emotional Reactivity 91, Openness 50."));
    }

    #[test]
    fn test_deserialize_recomputes_derived_fields() {
        let json = r#"{"age": 12, "ageGroup": "elder", "bigFive": {"openness": 70}}"#;
        let p: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(p.age_group(), AgeGroup::Child);
        assert_eq!(p.traits().openness, 70.0);
        assert_eq!(p.traits().neuroticism, NEUTRAL_TRAIT);
        assert_eq!(p.iq(), 100);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let value = serde_json::to_value(Profile::default()).unwrap();
        assert!(value.get("bigFive").is_some());
        assert!(value.get("emotionStyle").is_some());
        assert_eq!(value["ageGroup"], "adult");
    }
}
