//! Anterior cingulate: picks the attention agenda and measures cue conflict.

use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::{clamp, whole};

pub(crate) const AGENDA_SAFETY: &str =
    "Prioritize safety posture and gather more threat indicators.";
pub(crate) const AGENDA_RAPPORT: &str = "Open channel for rapport while monitoring variability.";
pub(crate) const AGENDA_BALANCED: &str = "Balance data gathering with cautious readiness.";

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let f = input.features;
    let conscientious = input.profile.traits().conscientiousness / 100.0;
    let conflict = (f.positivity - f.negativity).abs();
    let activity = clamp(
        38.0 + f.urgency * 30.0 + conscientious * 35.0 + conflict * 22.0,
        18.0,
        100.0,
    );
    let focus_target = ctx
        .sensory_notes
        .first()
        .unwrap_or("primary stimulus")
        .to_string();

    // Raw count: a single threat word is enough.
    let agenda = if f64::from(f.counts.threat) > 0.5 {
        AGENDA_SAFETY
    } else if f.positivity > 0.4 {
        AGENDA_RAPPORT
    } else {
        AGENDA_BALANCED
    };

    ctx.focus_agenda = agenda.to_string();
    ctx.conflict_level = conflict;
    ctx.insights.push(format!("Attention directive: {}", agenda));

    let message = format!(
        "Routing attention: {} Current focus anchored to {}.",
        agenda, focus_target
    );
    RegionResult {
        stream_text: message.clone(),
        message,
        summary: format!("Agenda set: {}", agenda),
        highlight: format!("Conflict level {}%", whole(conflict * 100.0)),
        activity,
    }
}
