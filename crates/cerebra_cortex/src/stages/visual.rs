//! Visual cortex: frames the primary subject and tags salient cues.

use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::{clamp, whole, Environment};

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let f = input.features;
    let traits = input.profile.traits();

    let detail_drive = (traits.openness + f64::from(input.profile.iq()) * 0.4) / 200.0;
    let clarity = clamp(
        32.0 + f64::from(f.counts.visual) * 28.0
            + f64::from(f.counts.motion) * 15.0
            + detail_drive * 40.0,
        14.0,
        100.0,
    );

    let subject = f.primary_subject().unwrap_or("the scene");
    let motion_tone = match f.counts.motion {
        0 => "fairly still",
        1 => "in motion",
        _ => "closing the distance steadily",
    };
    let ambience = match f.environment {
        Environment::Nature => "dappled natural light",
        Environment::Urban => "angular urban silhouettes",
        Environment::Unknown => "ambient glow",
    };

    let mut descriptors = Vec::new();
    if f.counts.threat > 0 {
        descriptors.push("watching posture for threat signals");
    }
    if f.counts.positive > 0 {
        descriptors.push("noting gentle cues and warmth");
    }
    if f.counts.mystery > 0 {
        descriptors.push("tracking obscured details and shadowed edges");
    }
    if f.counts.objects > 0 {
        descriptors.push("tagging nearby objects for relevance");
    }
    let observations = if descriptors.is_empty() {
        "No major anomalies detected.".to_string()
    } else {
        descriptors.join(" • ")
    };

    let message = format!(
        "Framing {}; {}, under {}. {}",
        subject, motion_tone, ambience, observations
    );

    ctx.sensory_notes.push(message.clone());
    ctx.insights.push(format!("Visual focus on {}.", subject));

    RegionResult {
        summary: format!("Visual lock on {}, clarity {}%.", subject, whole(clarity)),
        highlight: format!("Detail emphasis {}%", whole(clarity)),
        activity: clarity,
        stream_text: format!(
            "Observations prioritize {}, with {} and {}.",
            subject, motion_tone, ambience
        ),
        message,
    }
}
