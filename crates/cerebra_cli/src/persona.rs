//! Persona flags shared by every subcommand that needs a profile.

use anyhow::Result;
use cerebra_core::{
    EmotionStyle, Gender, Outlook, Profile, ProfileExport, ProfileRecord, RiskPosture,
};
use clap::Args;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct PersonaArgs {
    /// Start from an exported persona document (flags below override it)
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    #[arg(long)]
    pub age: Option<u32>,

    /// female | male | nonbinary | unspecified
    #[arg(long, value_parser = parse_choice::<Gender>)]
    pub gender: Option<Gender>,

    #[arg(long)]
    pub iq: Option<i32>,

    /// Cultural or professional background, e.g. "Temple Archivist"
    #[arg(long)]
    pub background: Option<String>,

    #[arg(long, value_name = "0-100")]
    pub openness: Option<f64>,
    #[arg(long, value_name = "0-100")]
    pub conscientiousness: Option<f64>,
    #[arg(long, value_name = "0-100")]
    pub extraversion: Option<f64>,
    #[arg(long, value_name = "0-100")]
    pub agreeableness: Option<f64>,
    /// Emotional reactivity
    #[arg(long, value_name = "0-100")]
    pub neuroticism: Option<f64>,

    /// optimistic | balanced | pessimistic
    #[arg(long, value_parser = parse_choice::<Outlook>)]
    pub outlook: Option<Outlook>,

    /// cautious | balanced | bold
    #[arg(long, value_parser = parse_choice::<RiskPosture>)]
    pub risk: Option<RiskPosture>,

    /// steady | expressive | guarded
    #[arg(long, value_parser = parse_choice::<EmotionStyle>)]
    pub emotion_style: Option<EmotionStyle>,
}

impl PersonaArgs {
    /// Resolve the persona: exported file (or defaults), then flag overrides.
    pub fn resolve(&self) -> Result<Profile> {
        let mut record = match &self.profile {
            Some(path) => ProfileExport::load(path)?.profile.to_record(),
            None => ProfileRecord::default(),
        };

        if let Some(age) = self.age {
            record.age = age;
        }
        if let Some(gender) = self.gender {
            record.gender = gender;
        }
        if let Some(iq) = self.iq {
            record.iq = iq;
        }
        if let Some(background) = &self.background {
            record.background = Some(background.clone());
        }
        let traits = &mut record.big_five;
        for (slot, value) in [
            (&mut traits.openness, self.openness),
            (&mut traits.conscientiousness, self.conscientiousness),
            (&mut traits.extraversion, self.extraversion),
            (&mut traits.agreeableness, self.agreeableness),
            (&mut traits.neuroticism, self.neuroticism),
        ] {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if let Some(outlook) = self.outlook {
            record.outlook = outlook;
        }
        if let Some(risk) = self.risk {
            record.risk = risk;
        }
        if let Some(style) = self.emotion_style {
            record.emotion_style = style;
        }

        Ok(Profile::from(record))
    }
}

/// Parse a snake_case choice the same way persona documents spell it.
fn parse_choice<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|_| format!("unrecognized value '{}'", raw))
}
