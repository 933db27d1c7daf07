//! Runtime options consumed by the core.

use serde::{Deserialize, Deserializer};

use crate::key_signature::{KeySignature, MAX_ACCIDENTALS};
use crate::midi::MAX_DATA_BYTE;
use crate::model::AccidentalPreference;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Echo note messages back to the device.
    pub echo: bool,
    /// Velocity used for echoed notes (0–127).
    #[serde(deserialize_with = "clamped_velocity")]
    pub echo_velocity: u8,
    /// Number of accidentals in the key signature (0–7).
    #[serde(deserialize_with = "clamped_key")]
    pub key: u8,
    pub use_flats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo: true,
            echo_velocity: 2,
            key: 0,
            use_flats: false,
        }
    }
}

impl Config {
    /// Build from raw values, clamping out-of-range numbers.
    pub fn new(echo: bool, echo_velocity: i32, key: i32, use_flats: bool) -> Self {
        Self {
            echo,
            echo_velocity: echo_velocity.clamp(0, MAX_DATA_BYTE as i32) as u8,
            key: key.clamp(0, MAX_ACCIDENTALS as i32) as u8,
            use_flats,
        }
    }

    pub fn key_signature(&self) -> KeySignature {
        KeySignature::new(
            AccidentalPreference::from_flats(self.use_flats),
            self.key as i32,
        )
    }
}

fn clamped_velocity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(i64::deserialize(deserializer)?.clamp(0, MAX_DATA_BYTE as i64) as u8)
}

fn clamped_key<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(i64::deserialize(deserializer)?.clamp(0, MAX_ACCIDENTALS as i64) as u8)
}
