//! Multi-series activity history for charting.
//!
//! Every recorded stage first decays all region intensities, then overwrites
//! the active region with its fresh value. Regions never drop out of the
//! map, so each chart series is defined from the first step (starting at 0).

use crate::region::Region;
use serde::Serialize;
use std::collections::BTreeMap;

/// Multiplier applied to every intensity before each new stage is recorded.
pub const ACTIVITY_DECAY: f64 = 0.55;

/// Intensities of all regions after one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySnapshot {
    pub label: String,
    pub snapshot: BTreeMap<Region, f64>,
}

impl ActivitySnapshot {
    pub fn intensity(&self, region: Region) -> f64 {
        self.snapshot.get(&region).copied().unwrap_or(0.0)
    }

    /// Axis label: at most 18 characters plus an ellipsis.
    pub fn short_label(&self) -> String {
        shorten_label(&self.label)
    }
}

pub fn shorten_label(text: &str) -> String {
    if text.chars().count() < 20 {
        return text.to_string();
    }
    let head: String = text.chars().take(18).collect();
    format!("{}\u{2026}", head)
}

#[derive(Debug, Clone)]
pub struct ActivityTracker {
    current: BTreeMap<Region, f64>,
    history: Vec<ActivitySnapshot>,
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self {
            current: Region::SEQUENCE.iter().map(|r| (*r, 0.0)).collect(),
            history: Vec::new(),
        }
    }

    /// Decay every region, set `region` to `value`, and append a snapshot.
    pub fn record(&mut self, region: Region, value: f64, label: &str) {
        for intensity in self.current.values_mut() {
            *intensity *= ACTIVITY_DECAY;
        }
        self.current.insert(region, value);
        self.history.push(ActivitySnapshot {
            label: label.to_string(),
            snapshot: self.current.clone(),
        });
    }

    pub fn current(&self, region: Region) -> f64 {
        self.current.get(&region).copied().unwrap_or(0.0)
    }

    pub fn history(&self) -> &[ActivitySnapshot] {
        &self.history
    }

    pub fn into_history(self) -> Vec<ActivitySnapshot> {
        self.history
    }
}
