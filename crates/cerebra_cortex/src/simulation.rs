//! Session-scoped simulation run.
//!
//! A [`Simulation`] owns everything one run touches: the profile, the
//! extracted features, the pipeline context, the activity history and the
//! live transcript. Stages execute strictly in [`Region::SEQUENCE`] order,
//! one at a time. Dropping a `Simulation` abandons the run; nothing outlives
//! it, so a new run never sees residue from an earlier one.

use crate::activity::{ActivitySnapshot, ActivityTracker};
use crate::context::PipelineContext;
use crate::narrative::{baseline_narrative, integrative_summary};
use crate::region::{Region, RegionResult, StageInput};
use cerebra_core::{extract_features, PacingConfig, Profile, ScenarioFeatures, SimulationError};
use serde::Serialize;
use std::sync::Arc;

/// One completed stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageOutcome {
    /// 1-based position in the run
    pub step: usize,
    pub region: Region,
    pub result: RegionResult,
}

/// Entry of the live "consciousness stream" log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamEntry {
    pub author: String,
    pub message: String,
}

impl StreamEntry {
    fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    pub step: usize,
    pub region: Region,
    pub region_name: String,
    pub highlight: String,
    pub activity: f64,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub scenario: String,
    pub profile: Profile,
    pub features: ScenarioFeatures,
    pub stages: Vec<StageOutcome>,
    pub activity_history: Vec<ActivitySnapshot>,
    pub stream: Vec<StreamEntry>,
    pub timeline: Vec<TimelineEvent>,
    pub context: PipelineContext,
    pub integrative_summary: String,
    pub baseline: String,
}

pub struct Simulation {
    scenario: String,
    profile: Profile,
    features: Arc<ScenarioFeatures>,
    context: PipelineContext,
    activity: ActivityTracker,
    outcomes: Vec<StageOutcome>,
    stream: Vec<StreamEntry>,
    timeline: Vec<TimelineEvent>,
}

impl Simulation {
    /// Start a fresh run. Blank scenarios are rejected before any state exists.
    pub fn new(scenario: &str, profile: Profile) -> Result<Self, SimulationError> {
        let scenario = scenario.trim();
        if scenario.is_empty() {
            return Err(SimulationError::EmptyScenario);
        }

        let features = Arc::new(extract_features(scenario));
        let context = PipelineContext::new(&profile, Arc::clone(&features));
        tracing::info!(
            tokens = features.length,
            environment = %features.environment,
            "Starting simulation run"
        );

        Ok(Self {
            stream: vec![StreamEntry::new(
                "Scenario Ingestion",
                format!(
                    "Scenario received: \u{201c}{}\u{201d}. Preparing sensory parsing.",
                    scenario
                ),
            )],
            scenario: scenario.to_string(),
            profile,
            features,
            context,
            activity: ActivityTracker::new(),
            outcomes: Vec::with_capacity(Region::SEQUENCE.len()),
            timeline: Vec::with_capacity(Region::SEQUENCE.len()),
        })
    }

    /// Region the next [`Self::step`] will run, if any remain.
    pub fn next_region(&self) -> Option<Region> {
        Region::SEQUENCE.get(self.outcomes.len()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.next_region().is_none()
    }

    /// Run exactly one stage. Returns `None` once all regions have run.
    pub fn step(&mut self) -> Option<&StageOutcome> {
        let region = self.next_region()?;
        let input = StageInput {
            profile: &self.profile,
            features: &self.features,
            scenario: &self.scenario,
        };
        let result = region.process(&input, &mut self.context);
        let step = self.outcomes.len() + 1;
        tracing::debug!(step, region = region.id(), activity = result.activity, "Stage complete");

        self.stream
            .push(StreamEntry::new(region.display_name(), result.stream_label()));
        self.timeline.push(TimelineEvent {
            step,
            region,
            region_name: region.display_name().to_string(),
            highlight: result.timeline_label().to_string(),
            activity: result.activity,
        });
        self.activity
            .record(region, result.activity, result.activity_label());
        self.outcomes.push(StageOutcome {
            step,
            region,
            result,
        });
        self.outcomes.last()
    }

    /// Run every remaining stage back-to-back and compose the narratives.
    pub fn run(mut self) -> SimulationReport {
        while self.step().is_some() {}
        self.into_report()
    }

    /// Same as [`Self::run`], pausing between stages for live presentation.
    /// Pacing never changes the result.
    pub async fn run_paced(mut self, pacing: &PacingConfig) -> SimulationReport {
        while let Some(outcome) = self.step() {
            let is_last = outcome.region == Region::Prefrontal;
            let delay = pacing.delay_after(is_last);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
        self.into_report()
    }

    fn into_report(mut self) -> SimulationReport {
        let summary = integrative_summary(&self.context);
        self.stream
            .push(StreamEntry::new("Integrative Summary", summary.clone()));
        let baseline = baseline_narrative(
            &self.profile,
            &self.scenario,
            self.context.mood_score,
            &self.context.action_plan,
        );
        tracing::info!(
            alarm = self.context.emotional_alarm,
            mood = self.context.mood_score,
            "Simulation complete"
        );

        SimulationReport {
            scenario: self.scenario,
            profile: self.profile,
            features: (*self.features).clone(),
            stages: self.outcomes,
            activity_history: self.activity.into_history(),
            stream: self.stream,
            timeline: self.timeline,
            context: self.context,
            integrative_summary: summary,
            baseline,
        }
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn features(&self) -> &ScenarioFeatures {
        &self.features
    }

    pub fn context(&self) -> &PipelineContext {
        &self.context
    }

    pub fn outcomes(&self) -> &[StageOutcome] {
        &self.outcomes
    }

    pub fn activity_history(&self) -> &[ActivitySnapshot] {
        self.activity.history()
    }

    pub fn stream(&self) -> &[StreamEntry] {
        &self.stream
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }
}

/// Convenience wrapper: validate, run all stages, return the report.
pub fn simulate(scenario: &str, profile: Profile) -> Result<SimulationReport, SimulationError> {
    Ok(Simulation::new(scenario, profile)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::motor::PLAN_DEFENSIVE;
    use crate::stages::testkit::HOODED;

    #[test]
    fn test_blank_scenarios_are_rejected() {
        for blank in ["", "   ", "\n\t"] {
            assert_eq!(
                Simulation::new(blank, Profile::default()).err(),
                Some(SimulationError::EmptyScenario)
            );
        }
    }

    #[test]
    fn test_stepwise_order() {
        let mut sim = Simulation::new(HOODED, Profile::default()).unwrap();
        assert_eq!(sim.stream().len(), 1);
        for expected in Region::SEQUENCE {
            assert_eq!(sim.next_region(), Some(expected));
            let outcome = sim.step().unwrap();
            assert_eq!(outcome.region, expected);
        }
        assert!(sim.is_complete());
        assert!(sim.step().is_none());
        assert_eq!(sim.outcomes().len(), 8);
        assert_eq!(sim.activity_history().len(), 8);
        assert_eq!(sim.timeline().len(), 8);
        assert_eq!(sim.timeline()[0].step, 1);
        assert_eq!(sim.timeline()[7].region_name, "Prefrontal Cortex");
    }

    #[test]
    fn test_hooded_figure_run() {
        let report = simulate(HOODED, Profile::default()).unwrap();
        assert!(report.context.emotional_alarm > 0.4);
        assert_eq!(report.context.action_plan, PLAN_DEFENSIVE);
        assert_eq!(report.context.mood_score, -1.0);
        assert_eq!(report.context.sensory_notes.len(), 2);
        assert_eq!(report.context.memories.len(), 1);
        // Visual, auditory, anterior, amygdala, limbic, hippocampus, motor
        assert_eq!(report.context.insights.len(), 7);
        assert!(report
            .integrative_summary
            .starts_with("Heavy apprehension saturates the mood. Adopt defensive stance"));
        assert!(report
            .integrative_summary
            .ends_with(&format!("Motor plan: {}", PLAN_DEFENSIVE)));
        assert!(report.baseline.starts_with("Baseline analysis (guarded tone):"));
        assert!(report
            .baseline
            .contains("they would adopt defensive stance, widen distance"));
        assert_eq!(report.stream.len(), 10);
        assert_eq!(report.stream[0].author, "Scenario Ingestion");
        assert_eq!(report.stream[9].author, "Integrative Summary");
        assert!(report
            .context
            .rationale
            .contains("Integrating memories (1) and sensory threads (2)."));
    }

    #[test]
    fn test_scenario_is_trimmed() {
        let report = simulate("  a quiet road  ", Profile::default()).unwrap();
        assert_eq!(report.scenario, "a quiet road");
        assert_eq!(
            report.stream[0].message,
            "Scenario received: \u{201c}a quiet road\u{201d}. Preparing sensory parsing."
        );
    }

    #[test]
    fn test_activity_labels_follow_summary() {
        let report = simulate(HOODED, Profile::default()).unwrap();
        assert_eq!(report.activity_history[0].label, report.stages[0].result.summary);
        assert_eq!(report.timeline[0].highlight, report.stages[0].result.highlight);
    }

    #[tokio::test]
    async fn test_paced_run_matches_unpaced() {
        let pacing = PacingConfig {
            enabled: true,
            stage_delay_ms: 1,
            final_stage_delay_ms: 1,
        };
        let paced = Simulation::new(HOODED, Profile::default())
            .unwrap()
            .run_paced(&pacing)
            .await;
        let direct = simulate(HOODED, Profile::default()).unwrap();
        assert_eq!(paced.stages, direct.stages);
        assert_eq!(paced.activity_history, direct.activity_history);
        assert_eq!(paced.integrative_summary, direct.integrative_summary);
        assert_eq!(paced.baseline, direct.baseline);
    }

    #[test]
    fn test_report_serializes() {
        let report = simulate(HOODED, Profile::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["stages"][0]["region"], "visual");
        assert_eq!(
            value["activity_history"][1]["snapshot"]["auditory"],
            report.stages[1].result.activity
        );
        assert_eq!(value["features"]["threat"], 2);
    }
}
