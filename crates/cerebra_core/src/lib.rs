//! # Cerebra Core
//!
//! Shared building blocks for the cognitive narration pipeline:
//!
//! - **Lexicon / features**: deterministic keyword scoring of scenario text
//! - **Profile**: validated persona with age-derived trait multipliers
//! - **Export**: versioned persona documents for reuse across runs
//! - **Config**: TOML configuration with environment overrides

pub mod config;
pub mod error;
pub mod export;
pub mod features;
pub mod lexicon;
pub mod profile;
pub mod randomize;

pub use config::{CerebraConfig, OutputFormat, PacingConfig};
pub use error::{ExportError, SimulationError};
pub use export::ProfileExport;
pub use features::{extract_features, Environment, ScenarioFeatures};
pub use lexicon::Category;
pub use profile::{
    AgeGroup, AgeTraits, EmotionStyle, Gender, Outlook, Profile, ProfileRecord, RiskPosture,
    TraitScores,
};
pub use randomize::random_profile;

/// Clamp helper shared by every bounded formula.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round half away from zero and render as a whole number for narrative text.
#[inline]
pub fn whole(value: f64) -> i64 {
    value.round() as i64
}

/// [`whole`] as text for signed readings; small negatives keep their sign
/// ("-0"), so a dip below zero stays visible.
pub fn signed_whole(value: f64) -> String {
    let rounded = whole(value);
    if rounded == 0 && value < 0.0 {
        "-0".to_string()
    } else {
        rounded.to_string()
    }
}
