//! The eight cortical regions and the single stage contract they share.
//!
//! Regions form a closed set with a fixed order; [`Region::process`] matches
//! on the variant and runs that region's stage against the shared context.

use crate::context::PipelineContext;
use crate::stages;
use cerebra_core::{Profile, ScenarioFeatures};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Visual,
    Auditory,
    Anterior,
    Amygdala,
    Limbic,
    Hippocampus,
    Motor,
    Prefrontal,
}

impl Region {
    /// Fixed processing order for every run.
    pub const SEQUENCE: [Region; 8] = [
        Region::Visual,
        Region::Auditory,
        Region::Anterior,
        Region::Amygdala,
        Region::Limbic,
        Region::Hippocampus,
        Region::Motor,
        Region::Prefrontal,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Region::Visual => "visual",
            Region::Auditory => "auditory",
            Region::Anterior => "anterior",
            Region::Amygdala => "amygdala",
            Region::Limbic => "limbic",
            Region::Hippocampus => "hippocampus",
            Region::Motor => "motor",
            Region::Prefrontal => "prefrontal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Visual => "Visual Cortex",
            Region::Auditory => "Auditory Cortex",
            Region::Anterior => "Anterior Cingulate",
            Region::Amygdala => "Amygdala",
            Region::Limbic => "Limbic System",
            Region::Hippocampus => "Hippocampus",
            Region::Motor => "Motor Cortex",
            Region::Prefrontal => "Prefrontal Cortex",
        }
    }

    /// Chart series colour.
    pub fn color(&self) -> &'static str {
        match self {
            Region::Visual => "#38bdf8",
            Region::Auditory => "#f97316",
            Region::Anterior => "#facc15",
            Region::Amygdala => "#ef4444",
            Region::Limbic => "#ec4899",
            Region::Hippocampus => "#a855f7",
            Region::Motor => "#34d399",
            Region::Prefrontal => "#22d3ee",
        }
    }

    /// Card text shown before a run reaches this region.
    pub fn idle_text(&self) -> &'static str {
        match self {
            Region::Visual => "Awaiting sensory input.",
            Region::Auditory => "Listening for cues.",
            Region::Anterior => "Scanning priorities.",
            Region::Amygdala => "Ready to escalate emotions.",
            Region::Limbic => "Awaiting emotional tone.",
            Region::Hippocampus => "Preparing recollections.",
            Region::Motor => "Waiting on directives.",
            Region::Prefrontal => "Ready to integrate the whole picture.",
        }
    }

    /// Inclusive bounds of this region's activity value.
    pub fn activity_bounds(&self) -> (f64, f64) {
        match self {
            Region::Visual => (14.0, 100.0),
            Region::Auditory => (10.0, 95.0),
            Region::Anterior => (18.0, 100.0),
            Region::Amygdala => (12.0, 100.0),
            Region::Limbic => (16.0, 96.0),
            Region::Hippocampus => (12.0, 92.0),
            Region::Motor => (15.0, 95.0),
            Region::Prefrontal => (25.0, 100.0),
        }
    }

    /// Position in [`Region::SEQUENCE`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Run this region's stage. Writes only the context fields the region owns.
    pub fn process(&self, input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
        match self {
            Region::Visual => stages::visual::process(input, ctx),
            Region::Auditory => stages::auditory::process(input, ctx),
            Region::Anterior => stages::anterior::process(input, ctx),
            Region::Amygdala => stages::amygdala::process(input, ctx),
            Region::Limbic => stages::limbic::process(input, ctx),
            Region::Hippocampus => stages::hippocampus::process(input, ctx),
            Region::Motor => stages::motor::process(input, ctx),
            Region::Prefrontal => stages::prefrontal::process(input, ctx),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Read-only inputs every stage receives.
#[derive(Debug, Clone, Copy)]
pub struct StageInput<'a> {
    pub profile: &'a Profile,
    pub features: &'a ScenarioFeatures,
    pub scenario: &'a str,
}

/// Output of one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    pub message: String,
    pub summary: String,
    pub highlight: String,
    /// Simulated engagement, within [`Region::activity_bounds`]
    pub activity: f64,
    /// Narrative for the live log
    pub stream_text: String,
}

impl RegionResult {
    /// Chart label: summary, then highlight, then message.
    pub fn activity_label(&self) -> &str {
        first_non_empty(&[
            self.summary.as_str(),
            self.highlight.as_str(),
            self.message.as_str(),
        ])
    }

    /// Timeline label: highlight, then summary, then a generic marker.
    pub fn timeline_label(&self) -> &str {
        match first_non_empty(&[self.highlight.as_str(), self.summary.as_str()]) {
            "" => "Activity spike",
            label => label,
        }
    }

    /// Live-log text: stream text, falling back to the message.
    pub fn stream_label(&self) -> &str {
        first_non_empty(&[self.stream_text.as_str(), self.message.as_str()])
    }
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates.iter().copied().find(|s| !s.is_empty()).unwrap_or("")
}
