//! Auditory cortex.

use crate::context::PipelineContext;
use crate::region::{RegionResult, StageInput};
use cerebra_core::clamp;

pub(crate) fn process(input: &StageInput<'_>, ctx: &mut PipelineContext) -> RegionResult {
    let f = input.features;
    let social = f.counts.social > 0;
    let sensitivity = clamp(
        28.0 + f64::from(f.counts.auditory) * 35.0
            + input.profile.traits().agreeableness * 0.2
            + if social { 12.0 } else { 0.0 },
        10.0,
        95.0,
    );

    let quiet = f.counts.auditory == 0;
    let message = if quiet {
        "Soundscape minimal; leaning on visual cues while listening for shifts.".to_string()
    } else {
        format!(
            "Parsing {} audio cues\u{2014}{}",
            if f.counts.auditory > 2 { "layered" } else { "subtle" },
            if social {
                "voices suggest social context."
            } else {
                "ambient noises mapped."
            }
        )
    };

    ctx.sensory_notes.push(message.clone());
    ctx.insights.push("Audio channel calibrated.");

    let (summary, highlight) = if quiet {
        ("Low auditory input, vigilance maintained.", "Silence flagged")
    } else {
        ("Auditory map constructed.", "Acoustic texture logged")
    };

    RegionResult {
        stream_text: message.clone(),
        message,
        summary: summary.to_string(),
        highlight: highlight.to_string(),
        activity: sensitivity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::testkit::{Fixture, HOODED};

    #[test]
    fn test_silence() {
        let mut fx = Fixture::with_default_profile(HOODED);
        let r = fx.run(process);
        assert_eq!(r.highlight, "Silence flagged");
        assert!(r.message.starts_with("Soundscape minimal"));
        // 28 + 0 + 50 * 0.2 + 12 (figure is social)
        assert!((r.activity - 50.0).abs() < 1e-9);
        assert_eq!(fx.ctx.sensory_notes.len(), 1);
        assert_eq!(fx.ctx.insights.recent(1), ["Audio channel calibrated."]);
    }

    #[test]
    fn test_subtle_vs_layered() {
        let mut fx = Fixture::with_default_profile("a whisper in the hall");
        let r = fx.run(process);
        assert_eq!(r.message, "Parsing subtle audio cues\u{2014}ambient noises mapped.");
        assert_eq!(r.summary, "Auditory map constructed.");

        let mut fx = Fixture::with_default_profile("voices shout a song to the crowd");
        let r = fx.run(process);
        assert_eq!(
            r.message,
            "Parsing layered audio cues\u{2014}voices suggest social context."
        );
        assert_eq!(r.activity, 95.0);
    }
}
