//! Motor cortex: drafts the action plan and readiness to move.

use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::{clamp, whole};

pub const PLAN_DEFENSIVE: &str =
    "Adopt defensive stance, widen distance, prepare escape or deterrent gesture.";
pub const PLAN_OPEN: &str =
    "Relax posture, open palms, signal welcome while retaining situational awareness.";
pub const PLAN_INSPECT: &str =
    "Inspect object methodically before interaction; ready careful manipulation.";
pub const PLAN_OBSERVE: &str =
    "Hold neutral stance, observe for new data before committing to motion.";

/// Alarm above which the defensive plan (and prefrontal safety call) take over.
pub(crate) const DEFENSIVE_ALARM: f64 = 0.65;

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let f = input.features;
    let profile = input.profile;
    let iq_factor = f64::from(profile.iq()) / 160.0;
    let calm = 1.0 - ctx.emotional_alarm;
    let bias = profile.risk().risk_bias() - ctx.caution_bias();
    let readiness = clamp(
        32.0 + iq_factor * 30.0 + calm * 25.0 + (ctx.mood_score + 1.0) * 10.0 + bias * 30.0,
        15.0,
        95.0,
    );

    // Threat and object thresholds compare raw counts.
    let plan = if f64::from(f.counts.threat) > 0.6 || ctx.emotional_alarm > DEFENSIVE_ALARM {
        PLAN_DEFENSIVE
    } else if f.positivity > 0.4 {
        PLAN_OPEN
    } else if f64::from(f.counts.objects) > 0.6 {
        PLAN_INSPECT
    } else {
        PLAN_OBSERVE
    };

    ctx.action_plan = plan.to_string();
    ctx.insights.push(format!("Motor plan: {}", plan));

    RegionResult {
        message: plan.to_string(),
        summary: "Action posture drafted.".to_string(),
        highlight: format!("Readiness {}%", whole(readiness)),
        activity: readiness,
        stream_text: format!("Preparing body: {}", plan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::testkit::{Fixture, HOODED};
    use cerebra_core::{Profile, ProfileRecord, RiskPosture};

    #[test]
    fn test_threat_triggers_defense() {
        let mut fx = Fixture::with_default_profile(HOODED);
        fx.ctx.emotional_alarm = 1.0;
        fx.ctx.mood_score = -1.0;
        let r = fx.run(process);
        assert_eq!(fx.ctx.action_plan, PLAN_DEFENSIVE);
        // 32 + 100/160*30
        assert!((r.activity - 50.75).abs() < 1e-9);
        assert_eq!(r.highlight, "Readiness 51%");
        assert_eq!(r.stream_text, format!("Preparing body: {}", PLAN_DEFENSIVE));
    }

    #[test]
    fn test_alarm_alone_triggers_defense() {
        let mut fx = Fixture::with_default_profile("a quiet road");
        fx.ctx.emotional_alarm = 0.66;
        fx.run(process);
        assert_eq!(fx.ctx.action_plan, PLAN_DEFENSIVE);

        let mut fx = Fixture::with_default_profile("a quiet road");
        fx.ctx.emotional_alarm = 0.65;
        fx.run(process);
        assert_eq!(fx.ctx.action_plan, PLAN_OBSERVE);
    }

    #[test]
    fn test_plan_priority() {
        let mut fx = Fixture::with_default_profile("a friendly smile near the chest and key");
        fx.run(process);
        assert_eq!(fx.ctx.action_plan, PLAN_OPEN);

        let mut fx = Fixture::with_default_profile("an old chest");
        fx.run(process);
        assert_eq!(fx.ctx.action_plan, PLAN_INSPECT);
        assert_eq!(fx.ctx.insights.recent(1), [format!("Motor plan: {}", PLAN_INSPECT)]);
    }

    #[test]
    fn test_risk_posture_shifts_readiness() {
        let bold = Profile::from(ProfileRecord {
            risk: RiskPosture::Bold,
            ..ProfileRecord::default()
        });
        let cautious = Profile::from(ProfileRecord {
            risk: RiskPosture::Cautious,
            ..ProfileRecord::default()
        });
        let mut fx_bold = Fixture::new("a quiet road", bold);
        let mut fx_cautious = Fixture::new("a quiet road", cautious);
        // Keep both below the readiness ceiling.
        fx_bold.ctx.emotional_alarm = 0.5;
        fx_cautious.ctx.emotional_alarm = 0.5;
        let r_bold = fx_bold.run(process);
        let r_cautious = fx_cautious.run(process);
        // bold: (0.25 + 0.2) * 30, cautious: (-0.25 - 0.25) * 30
        assert!((r_bold.activity - r_cautious.activity - 28.5).abs() < 1e-9);
    }
}
