//! Run-scoped accumulator threaded through the region stages.
//!
//! A [`PipelineContext`] is created once per run from the profile and the
//! scenario features, handed by `&mut` to one stage at a time, and read by
//! the narrative composer afterwards. Dispositional fields are fixed at
//! construction; the logs are append-only.

use cerebra_core::{EmotionStyle, Profile, ScenarioFeatures};
use serde::Serialize;
use std::sync::Arc;

/// Append-only ordered log with a most-recent-N view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// The last `n` entries in insertion order (fewer if the log is shorter).
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Narrative pacing implied by the persona's emotion style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Measured,
    Vivid,
    Guarded,
}

impl From<EmotionStyle> for Cadence {
    fn from(style: EmotionStyle) -> Self {
        match style {
            EmotionStyle::Steady => Cadence::Measured,
            EmotionStyle::Expressive => Cadence::Vivid,
            EmotionStyle::Guarded => Cadence::Guarded,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineContext {
    pub sensory_notes: Journal,
    pub focus_agenda: String,
    /// Gap between positive and negative cue density (0.0 to 1.0)
    pub conflict_level: f64,
    /// Amygdala threat-urgency estimate (0.0 to 1.0)
    pub emotional_alarm: f64,
    /// Limbic valence estimate (-1.0 to 1.0)
    pub mood_score: f64,
    pub mood_descriptor: String,
    pub memories: Journal,
    pub action_plan: String,
    pub rationale: String,
    pub insights: Journal,
    cadence: Cadence,
    caution_bias: f64,
    optimism: f64,
    #[serde(skip)]
    features: Arc<ScenarioFeatures>,
}

impl PipelineContext {
    pub fn new(profile: &Profile, features: Arc<ScenarioFeatures>) -> Self {
        Self {
            sensory_notes: Journal::new(),
            focus_agenda: String::new(),
            conflict_level: 0.0,
            emotional_alarm: 0.0,
            mood_score: 0.0,
            mood_descriptor: "neutral".to_string(),
            memories: Journal::new(),
            action_plan: String::new(),
            rationale: String::new(),
            insights: Journal::new(),
            cadence: Cadence::from(profile.emotion_style()),
            caution_bias: profile.risk().caution_bias(),
            optimism: profile.outlook().optimism(),
            features,
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn caution_bias(&self) -> f64 {
        self.caution_bias
    }

    pub fn optimism(&self) -> f64 {
        self.optimism
    }

    pub fn features(&self) -> &ScenarioFeatures {
        &self.features
    }
}
