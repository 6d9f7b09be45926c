//! Final narratives: the integrative summary of a run and the single-voice
//! baseline it is compared against.

use crate::context::PipelineContext;
use cerebra_core::Profile;

/// How many trailing insights the integrative summary quotes.
pub const SUMMARY_INSIGHTS: usize = 3;

const FALLBACK_MOOD: &str = "Mood baseline holding steady.";
const FALLBACK_PLAN: &str = "Hold position until more evidence arrives.";
const FALLBACK_INSIGHTS: &str = "Insights remain preliminary.";
const FALLBACK_ACTION: &str = "maintain observation before acting.";

/// Mood, plan and the most recent insights of a finished run.
pub fn integrative_summary(ctx: &PipelineContext) -> String {
    let mood = non_empty_or(&ctx.mood_descriptor, FALLBACK_MOOD);
    let plan = non_empty_or(&ctx.action_plan, FALLBACK_PLAN);
    let insights = if ctx.insights.is_empty() {
        FALLBACK_INSIGHTS.to_string()
    } else {
        format!(
            "Key insights: {}",
            ctx.insights.recent(SUMMARY_INSIGHTS).join(" ")
        )
    };
    format!("{} {} {}", mood, plan, insights)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Tone label of the baseline voice.
pub fn baseline_tone(mood_score: f64) -> &'static str {
    if mood_score > 0.2 {
        "warm"
    } else if mood_score < -0.3 {
        "guarded"
    } else {
        "even"
    }
}

/// Action plan as a lowercase-initial, period-terminated clause.
pub fn format_action_clause(action_plan: &str) -> String {
    let trimmed = action_plan.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return FALLBACK_ACTION.to_string();
    };
    let mut lowered: String = first.to_lowercase().collect();
    lowered.push_str(chars.as_str());
    if !lowered.ends_with('.') {
        lowered.push('.');
    }
    lowered
}

/// Single-voice comparison narrative. Reads only the persona, the scenario
/// and the run's final mood and plan.
pub fn baseline_narrative(
    profile: &Profile,
    scenario: &str,
    mood_score: f64,
    action_plan: &str,
) -> String {
    format!(
        "Baseline analysis ({} tone): {} In response to \u{201c}{}\u{201d}, they would {} \
This outlook reflects an IQ of {} and a {} temperament.",
        baseline_tone(mood_score),
        profile.describe(),
        scenario,
        format_action_clause(action_plan),
        profile.iq(),
        profile.outlook(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerebra_core::{extract_features, Outlook, ProfileRecord};
    use std::sync::Arc;

    fn fresh_context() -> PipelineContext {
        PipelineContext::new(&Profile::default(), Arc::new(extract_features("x")))
    }

    #[test]
    fn test_summary_fallbacks() {
        let mut ctx = fresh_context();
        ctx.mood_descriptor.clear();
        assert_eq!(
            integrative_summary(&ctx),
            "Mood baseline holding steady. Hold position until more evidence arrives. \
Insights remain preliminary."
        );
    }

    #[test]
    fn test_summary_quotes_last_three_insights() {
        let mut ctx = fresh_context();
        ctx.mood_descriptor = "Calm.".to_string();
        ctx.action_plan = "Wait.".to_string();
        for i in 1..=5 {
            ctx.insights.push(format!("I{}.", i));
        }
        assert_eq!(integrative_summary(&ctx), "Calm. Wait. Key insights: I3. I4. I5.");
    }

    #[test]
    fn test_initial_descriptor_is_used() {
        let ctx = fresh_context();
        assert!(integrative_summary(&ctx).starts_with("neutral Hold position"));
    }

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(baseline_tone(0.21), "warm");
        assert_eq!(baseline_tone(0.2), "even");
        assert_eq!(baseline_tone(-0.3), "even");
        assert_eq!(baseline_tone(-0.31), "guarded");
    }

    #[test]
    fn test_action_clause() {
        assert_eq!(format_action_clause("Hold still"), "hold still.");
        assert_eq!(format_action_clause("  Run.  "), "run.");
        assert_eq!(format_action_clause(""), "maintain observation before acting.");
        assert_eq!(format_action_clause("   "), "maintain observation before acting.");
    }

    #[test]
    fn test_baseline_narrative() {
        let profile = Profile::from(ProfileRecord {
            outlook: Outlook::Optimistic,
            ..ProfileRecord::default()
        });
        let text = baseline_narrative(&profile, "A door creaks", 0.5, "Inspect the door.");
        assert!(
            text.starts_with("Baseline analysis (warm tone): Persona summary: Adult generalist")
        );
        let response = "In response to \u{201c}A door creaks\u{201d}, they would inspect the door.";
        assert!(text.contains(response));
        assert!(text.ends_with("This outlook reflects an IQ of 100 and a optimistic temperament."));
    }
}
