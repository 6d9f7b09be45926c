//! Keyword-based scenario analysis.
//!
//! Scenario text is split into lowercase alphabetic runs (apostrophes kept),
//! counted, and scored against the fixed vocabulary in [`crate::lexicon`].
//! Extraction is a pure function of the text.

use crate::lexicon::{self, Category};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z']+").unwrap());

/// Maximum number of key subjects reported for a scenario.
pub const MAX_KEY_SUBJECTS: usize = 4;

/// Setting inferred from nature vs. urban vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Nature,
    Urban,
    Unknown,
}

impl Environment {
    /// Nature wins only on a strict majority; any urban hit otherwise wins.
    pub fn classify(nature: u32, urban: u32) -> Self {
        if nature > urban {
            Environment::Nature
        } else if urban > 0 {
            Environment::Urban
        } else {
            Environment::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Nature => "nature",
            Environment::Urban => "urban",
            Environment::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw per-category keyword hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub visual: u32,
    pub auditory: u32,
    pub threat: u32,
    pub positive: u32,
    pub negative: u32,
    pub social: u32,
    pub motion: u32,
    pub mystery: u32,
    pub memory: u32,
    pub objects: u32,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Visual => self.visual,
            Category::Auditory => self.auditory,
            Category::Threat => self.threat,
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Social => self.social,
            Category::Motion => self.motion,
            Category::Mystery => self.mystery,
            Category::Memory => self.memory,
            Category::Objects => self.objects,
        }
    }

    fn set(&mut self, category: Category, value: u32) {
        let slot = match category {
            Category::Visual => &mut self.visual,
            Category::Auditory => &mut self.auditory,
            Category::Threat => &mut self.threat,
            Category::Positive => &mut self.positive,
            Category::Negative => &mut self.negative,
            Category::Social => &mut self.social,
            Category::Motion => &mut self.motion,
            Category::Mystery => &mut self.mystery,
            Category::Memory => &mut self.memory,
            Category::Objects => &mut self.objects,
        };
        *slot = value;
    }
}

/// Lexical scoring of a scenario. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFeatures {
    #[serde(flatten)]
    pub counts: CategoryCounts,
    /// Number of tokens in the scenario
    pub length: usize,
    /// Positive cue density (0.0 to 1.0)
    pub positivity: f64,
    /// Threat + negative cue density (0.0 to 1.0)
    pub negativity: f64,
    /// Visual + auditory cue density (0.0 to 1.0)
    pub sensory: f64,
    /// Motion and threat pressure (0.0 to 1.0)
    pub urgency: f64,
    /// Unfamiliarity; memory cues lower it (0.1 to 1.0)
    pub novelty: f64,
    /// Overall valence (-1.0 to 1.0)
    pub tone: f64,
    pub environment: Environment,
    pub key_subjects: Vec<String>,
    pub has_memory_cue: bool,
    /// Raw nature cue count (environment tie-break only)
    pub nature: u32,
    /// Raw urban cue count (environment tie-break only)
    pub urban: u32,
}

impl ScenarioFeatures {
    pub fn count(&self, category: Category) -> u32 {
        self.counts.get(category)
    }

    pub fn primary_subject(&self) -> Option<&str> {
        self.key_subjects.first().map(String::as_str)
    }
}

/// Split text into lowercase alphabetic tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Analyze scenario text into category counts and derived composites.
pub fn extract_features(text: &str) -> ScenarioFeatures {
    let tokens = tokenize(text);
    let mut word_counts: HashMap<&str, u32> = HashMap::new();
    for token in &tokens {
        *word_counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let score = |keywords: &[&str]| -> u32 {
        keywords
            .iter()
            .map(|w| word_counts.get(w).copied().unwrap_or(0))
            .sum()
    };

    let mut counts = CategoryCounts::default();
    for category in Category::ALL {
        counts.set(category, score(category.keywords()));
    }
    let nature = score(lexicon::NATURE);
    let urban = score(lexicon::URBAN);

    let mut seen = HashSet::new();
    let key_subjects: Vec<String> = tokens
        .iter()
        .filter(|w| w.len() > 3 && !lexicon::is_stop_word(w))
        .filter(|w| seen.insert(w.as_str()))
        .take(MAX_KEY_SUBJECTS)
        .cloned()
        .collect();

    let positive = f64::from(counts.positive);
    let hostile = f64::from(counts.threat + counts.negative);

    ScenarioFeatures {
        length: tokens.len(),
        positivity: (positive / 3.0).min(1.0),
        negativity: (hostile / 4.0).min(1.0),
        sensory: (f64::from(counts.visual + counts.auditory) / 4.0).min(1.0),
        urgency: ((f64::from(counts.motion) + f64::from(counts.threat) * 1.2) / 4.0).min(1.0),
        novelty: (1.0 - f64::from(counts.memory) * 0.18).min(1.0).max(0.1),
        tone: ((positive / 2.0).min(1.0) - (hostile / 3.0).min(1.0)).clamp(-1.0, 1.0),
        environment: Environment::classify(nature, urban),
        key_subjects,
        has_memory_cue: counts.memory > 0,
        nature,
        urban,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOODED: &str = "A hooded figure approaches silently, knife glinting, and you feel afraid";

    #[test]
    fn test_tokenize_lowercases_and_keeps_apostrophes() {
        let tokens = tokenize("The Guard's LANTERN-light, 3 times!");
        assert_eq!(tokens, vec!["the", "guard's", "lantern", "light", "times"]);
    }

    #[test]
    fn test_hooded_figure_scenario() {
        let f = extract_features(HOODED);
        assert_eq!(f.counts.threat, 2);
        assert_eq!(f.counts.negative, 1);
        assert_eq!(f.counts.visual, 1);
        assert_eq!(f.counts.social, 1);
        assert_eq!(f.counts.mystery, 1);
        assert_eq!(f.counts.motion, 0, "'approaches' is not a motion keyword");
        assert_eq!(f.environment, Environment::Unknown);
        assert!((f.negativity - 0.75).abs() < 1e-9);
        assert!((f.urgency - 0.6).abs() < 1e-9);
        assert!((f.tone + 1.0).abs() < 1e-9);
        assert!(!f.has_memory_cue);
        assert_eq!(
            f.key_subjects,
            vec!["hooded", "figure", "approaches", "silently"]
        );
    }

    #[test]
    fn test_environment_classification() {
        assert_eq!(
            extract_features("rain over the forest and a river").environment,
            Environment::Nature
        );
        assert_eq!(
            extract_features("a tavern by the river").environment,
            Environment::Urban,
            "ties go to urban when urban is present"
        );
        assert_eq!(
            extract_features("the market street").environment,
            Environment::Urban
        );
        assert_eq!(extract_features("nothing here").environment, Environment::Unknown);
    }

    #[test]
    fn test_novelty_floor_and_memory_cue() {
        let f = extract_features("remember remember remember remember remember remember");
        assert!(f.has_memory_cue);
        assert!((f.novelty - 0.1).abs() < 1e-9);
        assert!((extract_features("plain words").novelty - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_scene_saturates() {
        let f = extract_features("A friendly smile, a kind gift, calm joy");
        assert_eq!(f.counts.positive, 6);
        assert!((f.positivity - 1.0).abs() < 1e-9);
        assert!((f.tone - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_key_subjects_skip_stop_words_and_duplicates() {
        let f = extract_features("there there lantern lantern through gate keeper bridge tower");
        assert_eq!(f.key_subjects, vec!["lantern", "gate", "keeper", "bridge"]);
        assert_eq!(f.primary_subject(), Some("lantern"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_features(HOODED), extract_features(HOODED));
    }
}
