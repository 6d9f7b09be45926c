//! Prefrontal cortex: executive synthesis of mood, alarm and the motor plan.

use super::motor::DEFENSIVE_ALARM;
use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::{clamp, whole};

pub const SAFETY_CALL: &str = "Keep distance and seek support if available.";

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let profile = input.profile;
    let complexity = clamp(
        38.0 + (f64::from(profile.iq()) - 90.0) * 0.5
            + profile.traits().conscientiousness * 0.2
            + profile.age_traits().wisdom * 35.0,
        25.0,
        100.0,
    );

    let reasoning_style = if complexity > 80.0 {
        "multi-layer reasoning"
    } else if complexity > 60.0 {
        "strategic synthesis"
    } else {
        "pragmatic synthesis"
    };
    let sentiment = if ctx.mood_score > 0.4 {
        "lean toward engagement"
    } else if ctx.mood_score < -0.3 {
        "exercise restraint"
    } else {
        "maintain balanced posture"
    };
    let course = if ctx.emotional_alarm > DEFENSIVE_ALARM {
        SAFETY_CALL
    } else {
        ctx.action_plan.as_str()
    };

    let summary = format!("Conclusion: {}. Selected course\u{2014}{}", sentiment, course);
    let message = format!(
        "{} applied. {} Integrating memories ({}) and sensory threads ({}).",
        reasoning_style,
        summary,
        ctx.memories.len(),
        ctx.sensory_notes.len()
    );
    ctx.rationale = message.clone();

    RegionResult {
        stream_text: message.clone(),
        message,
        summary,
        highlight: format!("Executive load {}%", whole(complexity)),
        activity: complexity,
    }
}
