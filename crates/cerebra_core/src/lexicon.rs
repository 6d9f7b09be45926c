//! Fixed English vocabulary used to score scenario text.
//!
//! Every category is a plain word list; a token contributes to a category
//! once per occurrence. A word may belong to several categories ("hooded" is
//! both a threat and a mystery cue, "figure" is both visual and social).

use serde::{Deserialize, Serialize};

/// Lexical categories that feed the region stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Visual,
    Auditory,
    Threat,
    Positive,
    Negative,
    Social,
    Motion,
    Mystery,
    Memory,
    Objects,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Visual,
        Category::Auditory,
        Category::Threat,
        Category::Positive,
        Category::Negative,
        Category::Social,
        Category::Motion,
        Category::Mystery,
        Category::Memory,
        Category::Objects,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Visual => "visual",
            Category::Auditory => "auditory",
            Category::Threat => "threat",
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Social => "social",
            Category::Motion => "motion",
            Category::Mystery => "mystery",
            Category::Memory => "memory",
            Category::Objects => "objects",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Visual => VISUAL,
            Category::Auditory => AUDITORY,
            Category::Threat => THREAT,
            Category::Positive => POSITIVE,
            Category::Negative => NEGATIVE,
            Category::Social => SOCIAL,
            Category::Motion => MOTION,
            Category::Mystery => MYSTERY,
            Category::Memory => MEMORY,
            Category::Objects => OBJECTS,
        }
    }
}

const VISUAL: &[&str] = &[
    "see", "saw", "seen", "looking", "glow", "shadow", "bright", "dark", "figure", "shape",
    "color", "glimmer", "approaching", "vision", "silhouette",
];

const AUDITORY: &[&str] = &[
    "hear", "heard", "listening", "voice", "voices", "shout", "music", "whisper", "echo", "song",
    "crying", "scream",
];

const THREAT: &[&str] = &[
    "danger", "threat", "threatening", "weapon", "knife", "sword", "gun", "growl", "snarl",
    "attack", "attacking", "angry", "hooded", "blood", "hostile", "monster",
];

const POSITIVE: &[&str] = &[
    "friendly", "smile", "kind", "helpful", "gift", "calm", "safe", "relief", "wagging", "gentle",
    "joy", "laugh", "comfort",
];

const NEGATIVE: &[&str] = &[
    "fear", "afraid", "scared", "terrified", "worried", "sad", "crying", "despair", "panic",
    "lonely", "hurt", "injured",
];

const SOCIAL: &[&str] = &[
    "crowd", "people", "person", "figure", "merchant", "child", "stranger", "tavern", "villager",
    "guard", "friend", "companion", "patron",
];

const MOTION: &[&str] = &[
    "approach", "approaching", "running", "run", "rushing", "charging", "walk", "walking", "move",
    "moving", "follow", "following", "darting",
];

const MYSTERY: &[&str] = &[
    "mysterious", "unknown", "shadowy", "strange", "unusual", "enigmatic", "secrets", "hidden",
    "hooded", "cloak", "dark",
];

const MEMORY: &[&str] = &[
    "remember", "memory", "recalled", "once", "childhood", "before", "nostalgia", "familiar",
    "reminds",
];

const OBJECTS: &[&str] = &[
    "door", "chest", "box", "letter", "map", "artifact", "sword", "torch", "lantern", "book",
    "coin", "key",
];

/// Natural-setting cues. Only used to classify the environment.
pub const NATURE: &[&str] = &[
    "forest", "tree", "river", "mountain", "field", "wind", "rain", "storm", "sun",
];

/// Built-up-setting cues. Only used to classify the environment.
pub const URBAN: &[&str] = &[
    "street", "city", "market", "tavern", "alley", "cobblestone", "tower", "castle", "square",
    "inn",
];

/// Words never reported as key subjects.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "with", "from", "that", "there", "this", "into", "while", "then", "your",
    "their", "about", "toward", "towards", "them", "they", "have", "just", "over", "under", "very",
    "when", "where", "because", "someone", "something", "around", "after", "before", "onto",
    "through", "back", "only", "even",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Threat.as_str(), "threat");
        assert_eq!(Category::Objects.as_str(), "objects");
        let names: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_every_category_has_keywords() {
        for category in Category::ALL {
            assert!(!category.keywords().is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_shared_keywords() {
        assert!(Category::Threat.keywords().contains(&"hooded"));
        assert!(Category::Mystery.keywords().contains(&"hooded"));
        assert!(Category::Auditory.keywords().contains(&"crying"));
        assert!(Category::Negative.keywords().contains(&"crying"));
    }

    #[test]
    fn test_keywords_are_lowercase_tokens() {
        let all = Category::ALL
            .iter()
            .flat_map(|c| c.keywords().iter())
            .chain(NATURE.iter())
            .chain(URBAN.iter());
        for word in all {
            assert!(word.chars().all(|c| c.is_ascii_lowercase() || c == '\''), "{}", word);
        }
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("through"));
        assert!(!is_stop_word("figure"));
    }
}
