//! Amygdala: estimates emotional alarm from threat cues and temperament.

use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::{clamp, whole};

/// Raw alarm before the emotion-style shift (0.0 to 1.0).
///
/// Saturates at 1.0 on its own, so a guarded persona can read below 1.0
/// even when threat cues keep piling up.
pub fn base_alarm(threat: u32, negativity: f64, neuroticism: f64, optimism: f64) -> f64 {
    clamp(
        f64::from(threat) * 0.6 + negativity * 0.4 + (neuroticism / 100.0) * 0.5 - optimism,
        0.0,
        1.0,
    )
}

fn describe(alarm: f64) -> &'static str {
    if alarm > 0.7 {
        "Adrenal axis primed\u{2014}perceiving high threat."
    } else if alarm > 0.4 {
        "Alert raised; ready to escalate if cues worsen."
    } else if alarm > 0.2 {
        "Moderate caution with emotional brakes engaged."
    } else {
        "Calm vigilance; emotional field remains steady."
    }
}

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let f = input.features;
    let base = base_alarm(
        f.counts.threat,
        f.negativity,
        input.profile.traits().neuroticism,
        ctx.optimism(),
    );
    // The style shift is applied after the base clamp.
    let alarm = clamp(base + input.profile.emotion_style().alarm_modifier(), 0.0, 1.0);
    let activity = clamp(32.0 + alarm * 58.0 + ctx.conflict_level * 22.0, 12.0, 100.0);
    let descriptor = describe(alarm);
    let pct = whole(alarm * 100.0);

    ctx.emotional_alarm = alarm;
    ctx.insights.push("Amygdala calibrated emotional urgency.");
    tracing::debug!(alarm, "amygdala alarm computed");

    RegionResult {
        message: format!("{} (alarm {}%).", descriptor, pct),
        summary: format!("Emotional alarm {}%", pct),
        highlight: descriptor.to_string(),
        activity,
        stream_text: format!("Assessing emotional stakes: {}", descriptor),
    }
}
