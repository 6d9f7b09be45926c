//! # Cerebra Cortex
//!
//! The sequential "neural conversation" that narrates how a persona would
//! perceive and respond to a scenario:
//!
//! - **Regions**: eight stages run in a fixed order over a shared context
//! - **Activity**: decaying per-region intensity history for charting
//! - **Narrative**: integrative summary plus a single-voice baseline
//! - **Simulation**: one owned run, stepped manually or driven to completion

pub mod activity;
pub mod context;
pub mod narrative;
pub mod region;
pub mod simulation;
mod stages;

pub use activity::{ActivitySnapshot, ActivityTracker, ACTIVITY_DECAY};
pub use context::{Cadence, Journal, PipelineContext};
pub use narrative::{baseline_narrative, integrative_summary};
pub use region::{Region, RegionResult, StageInput};
pub use simulation::{
    simulate, Simulation, SimulationReport, StageOutcome, StreamEntry, TimelineEvent,
};
pub use stages::amygdala::base_alarm;
pub use stages::motor::{PLAN_DEFENSIVE, PLAN_INSPECT, PLAN_OBSERVE, PLAN_OPEN};
pub use stages::prefrontal::SAFETY_CALL;
