//! Hippocampus: links the scenario to explicit memories or the persona's background.

use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::{clamp, whole};

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let f = input.features;
    let profile = input.profile;
    let recall = profile.age_traits().recall;
    let curiosity = profile.traits().openness / 100.0;
    let cue_boost = if f.has_memory_cue { 18.0 } else { 0.0 };
    let intensity = clamp(28.0 + recall * 40.0 + cue_boost + curiosity * 20.0, 12.0, 92.0);

    let mut memory = if f.has_memory_cue {
        "Triggered explicit memory\u{2014}scenario resonates with past experience mentioned."
            .to_string()
    } else if let Some(background) = profile.background() {
        format!(
            "Drawing on {} background for pattern recognition.",
            background.to_lowercase()
        )
    } else {
        "Scanning episodic archives for relevant analogues despite limited cues.".to_string()
    };

    if let Some(subject) = f.primary_subject() {
        memory.push_str(&format!(" Linking to prior encounters with {}.", subject));
    }

    ctx.memories.push(memory.clone());
    ctx.insights.push("Memory anchors layered into current model.");

    RegionResult {
        stream_text: memory.clone(),
        message: memory,
        summary: "Memory synthesis engaged.".to_string(),
        highlight: format!("Recall energy {}%", whole(intensity)),
        activity: intensity,
    }
}
