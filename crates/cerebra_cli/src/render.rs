//! Plain-text rendering of a run for the terminal.

use cerebra_core::{whole, Category};
use cerebra_cortex::{Region, SimulationReport, StageOutcome, StreamEntry};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

pub fn stream_line(entry: &StreamEntry) -> String {
    format!("[{}] {}", entry.author, entry.message)
}

pub fn stage_block(outcome: &StageOutcome) -> String {
    let region = outcome.region;
    let result = &outcome.result;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}/{} {:<20} {} {:>3}%",
        outcome.step,
        Region::SEQUENCE.len(),
        region.display_name(),
        bar(result.activity),
        whole(result.activity)
    );
    let _ = writeln!(out, "    {}", result.message);
    let _ = write!(out, "    \u{2192} {}", result.timeline_label());
    out
}

/// Closing section: narratives, cue tally, recalled memories and the final
/// activity snapshot.
pub fn summary_block(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Integrative Summary");
    let _ = writeln!(out, "    {}", report.integrative_summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "Baseline");
    let _ = writeln!(out, "    {}", report.baseline);
    let cues: Vec<String> = Category::ALL
        .iter()
        .map(|&c| (c, report.features.count(c)))
        .filter(|&(_, n)| n > 0)
        .map(|(c, n)| format!("{} {}", c.as_str(), n))
        .collect();
    if !cues.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Cues: {}", cues.join(", "));
    }
    if !report.context.memories.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Memories");
        for memory in report.context.memories.iter() {
            let _ = writeln!(out, "    {}", memory);
        }
    }
    if let Some(last) = report.activity_history.last() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Activity after \u{201c}{}\u{201d}", last.short_label());
        for region in Region::SEQUENCE {
            let value = last.intensity(region);
            let _ = writeln!(
                out,
                "    {:<20} {} {:>3}%",
                region.display_name(),
                bar(value),
                whole(value)
            );
        }
    }
    out
}

fn bar(activity: f64) -> String {
    let filled = ((activity.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "\u{2588}".repeat(filled), "\u{00b7}".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerebra_core::Profile;
    use cerebra_cortex::simulate;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(100.0).chars().filter(|c| *c == '\u{2588}').count(), BAR_WIDTH);
        assert_eq!(bar(50.0).chars().filter(|c| *c == '\u{2588}').count(), 10);
    }

    #[test]
    fn test_stage_block_layout() {
        let report = simulate("a lantern in the fog", Profile::default()).unwrap();
        let block = stage_block(&report.stages[0]);
        assert!(block.starts_with("1/8 Visual Cortex"));
        assert_eq!(block.lines().count(), 3);
    }

    #[test]
    fn test_summary_block_lists_every_region() {
        let report = simulate("a lantern in the fog", Profile::default()).unwrap();
        let text = summary_block(&report);
        assert!(text.starts_with("Integrative Summary"));
        for region in Region::SEQUENCE {
            assert!(text.contains(region.display_name()));
        }
    }

    #[test]
    fn test_summary_block_tallies_cues_and_memories() {
        let report = simulate("a knife and a smile, a knife again", Profile::default()).unwrap();
        let text = summary_block(&report);
        let cues = text
            .lines()
            .find(|l| l.starts_with("Cues: "))
            .expect("cue line");
        assert!(cues.contains("threat 2"));
        assert!(cues.contains("positive 1"));
        assert!(!cues.contains("memory"));
        assert!(text.contains("\nMemories\n"));
        assert!(text.contains(report.context.memories.first().unwrap()));
    }

    #[test]
    fn test_summary_block_skips_empty_cue_line() {
        let report = simulate("the road", Profile::default()).unwrap();
        assert!(!summary_block(&report).contains("Cues:"));
    }
}
