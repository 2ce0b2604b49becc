//! Built-in band curves for the default ten-band layout

use crate::types::BANDS_NUM;

/// Names accepted by [`preset`]
pub const PRESET_NAMES: [&str; 8] = [
    "flat",
    "rock",
    "pop",
    "jazz",
    "classical",
    "bass_boost",
    "vocal",
    "electronic",
];

const FLAT: [f64; BANDS_NUM] = [0.0; BANDS_NUM];
const ROCK: [f64; BANDS_NUM] = [5.0, 4.0, 2.0, 0.0, -1.0, 1.0, 3.0, 4.0, 5.0, 5.0];
const POP: [f64; BANDS_NUM] = [-1.0, 2.0, 4.0, 5.0, 4.0, 2.0, 0.0, -1.0, -1.0, -1.0];
const JAZZ: [f64; BANDS_NUM] = [3.0, 2.0, 0.0, 2.0, -2.0, -2.0, 0.0, 2.0, 3.0, 4.0];
const CLASSICAL: [f64; BANDS_NUM] = [4.0, 3.0, 2.0, 1.0, -1.0, -1.0, 0.0, 2.0, 3.0, 4.0];
const BASS_BOOST: [f64; BANDS_NUM] = [8.0, 6.0, 4.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
const VOCAL: [f64; BANDS_NUM] = [-2.0, -1.0, 0.0, 3.0, 5.0, 5.0, 3.0, 1.0, 0.0, -1.0];
const ELECTRONIC: [f64; BANDS_NUM] = [5.0, 4.0, 1.0, 0.0, -2.0, 2.0, 1.0, 3.0, 5.0, 4.0];

/// Band gains (dB) of a built-in preset, lowest band first
pub fn preset(name: &str) -> Option<&'static [f64]> {
    match name {
        "flat" => Some(&FLAT),
        "rock" => Some(&ROCK),
        "pop" => Some(&POP),
        "jazz" => Some(&JAZZ),
        "classical" => Some(&CLASSICAL),
        "bass_boost" => Some(&BASS_BOOST),
        "vocal" => Some(&VOCAL),
        "electronic" => Some(&ELECTRONIC),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_DB, MIN_DB};

    #[test]
    fn test_every_name_resolves() {
        for name in PRESET_NAMES {
            let gains = preset(name).unwrap();
            assert_eq!(gains.len(), BANDS_NUM);
            assert!(gains.iter().all(|g| (MIN_DB..=MAX_DB).contains(g)));
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(preset("loudness_war").is_none());
        assert!(preset("Rock").is_none());
    }
}
