//! Limbic system: blends cue valence, outlook and alarm into a mood score.

use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::{clamp, signed_whole, whole};

fn describe(mood: f64) -> &'static str {
    if mood > 0.5 {
        "Warm anticipation and trust forming."
    } else if mood > 0.15 {
        "Cautious optimism\u{2014}feelings lean positive."
    } else if mood > -0.2 {
        "Neutral baseline maintained."
    } else if mood > -0.6 {
        "Edging into concern; emotions dampened."
    } else {
        "Heavy apprehension saturates the mood."
    }
}

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let f = input.features;
    let baseline = f.positivity - f.negativity;
    let warmth = (input.profile.traits().agreeableness - 50.0) / 240.0;
    let mood = clamp(
        baseline + ctx.optimism() - ctx.emotional_alarm * 0.45 + warmth,
        -1.0,
        1.0,
    );
    let descriptor = describe(mood);

    ctx.mood_score = mood;
    ctx.mood_descriptor = descriptor.to_string();
    ctx.insights.push(format!("Mood anchor: {}", descriptor));

    let activity = clamp(34.0 + mood.abs() * 48.0 + ctx.emotional_alarm * 25.0, 16.0, 96.0);

    RegionResult {
        message: format!("{} Emotional color {}%.", descriptor, whole((mood + 1.0) * 50.0)),
        summary: descriptor.to_string(),
        highlight: format!("Mood vector {}%", signed_whole(mood * 100.0)),
        activity,
        stream_text: descriptor.to_string(),
    }
}
