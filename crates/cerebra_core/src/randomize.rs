//! Random persona generation for quick experiments.

use crate::profile::{
    EmotionStyle, Gender, Outlook, Profile, ProfileRecord, RiskPosture, TraitScores,
};
use rand::seq::SliceRandom;
use rand::Rng;

pub const BACKGROUND_IDEAS: &[&str] = &[
    "Ranger Scholar",
    "Temple Archivist",
    "Streetwise Courier",
    "Arcane Naturalist",
    "Clockwork Engineer",
    "Harbor Diplomat",
    "Desert Survivalist",
    "Stormbound Navigator",
    "Battlefield Medic",
    "Court Chronicler",
];

/// Chance that a random persona gets a background at all.
const BACKGROUND_PROBABILITY: f64 = 0.8;

fn pick<T: Copy + Default, R: Rng>(rng: &mut R, options: &[T]) -> T {
    options.choose(rng).copied().unwrap_or_default()
}

pub fn random_profile<R: Rng>(rng: &mut R) -> Profile {
    let mut trait_score = || f64::from(rng.gen_range(25u32..=90));
    let big_five = TraitScores {
        openness: trait_score(),
        conscientiousness: trait_score(),
        extraversion: trait_score(),
        agreeableness: trait_score(),
        neuroticism: trait_score(),
    };

    let background = if rng.gen_bool(BACKGROUND_PROBABILITY) {
        BACKGROUND_IDEAS.choose(rng).map(|s| s.to_string())
    } else {
        None
    };

    Profile::from(ProfileRecord {
        age: rng.gen_range(12..=72),
        gender: pick::<Gender, _>(rng, &Gender::ALL),
        iq: rng.gen_range(85..=145),
        background,
        big_five,
        outlook: pick::<Outlook, _>(rng, &Outlook::ALL),
        risk: pick::<RiskPosture, _>(rng, &RiskPosture::ALL),
        emotion_style: pick::<EmotionStyle, _>(rng, &EmotionStyle::ALL),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_profile_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = random_profile(&mut rng);
            assert!((12..=72).contains(&p.age()));
            assert!((85..=145).contains(&p.iq()));
            for (_, score) in p.traits().labelled() {
                assert!((25.0..=90.0).contains(&score));
            }
            if let Some(bg) = p.background() {
                assert!(BACKGROUND_IDEAS.contains(&bg));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = random_profile(&mut StdRng::seed_from_u64(42));
        let b = random_profile(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
