//! Sustain / sostenuto / soft pedal state and the release blink.

use serde::Serialize;

use crate::midi::SWITCH_THRESHOLD;

/// Below this a continuous pedal counts as released.
pub const RELEASE_THRESHOLD: f32 = 0.2;
/// How long the release marker stays visible, in seconds.
pub const BLINK_DURATION: f32 = 0.25;
/// Initial "time since release" so nothing blinks before the first press.
const NEVER_RELEASED: f32 = 1_000_000.0;

/// What a renderer should show for one pedal this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PedalIndicator {
    /// Pedal held; draw the marking at this opacity (0–1).
    Held(f32),
    /// Just released; draw the release marker.
    Blink,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousPedal {
    value: f32,
    since_release: f32,
}

impl Default for ContinuousPedal {
    fn default() -> Self {
        Self {
            value: 0.0,
            since_release: NEVER_RELEASED,
        }
    }
}

impl ContinuousPedal {
    pub fn since_release(&self) -> f32 {
        self.since_release
    }

    /// Set from a 7-bit controller value.
    pub fn set_raw(&mut self, raw: u8) {
        self.value = raw.min(127) as f32 / 127.0;
        if self.value >= RELEASE_THRESHOLD {
            self.since_release = 0.0;
        }
    }

    /// Advance the blink timer by `dt` seconds and report what to draw.
    pub fn advance(&mut self, dt: f32) -> PedalIndicator {
        if self.value >= RELEASE_THRESHOLD {
            self.since_release = 0.0;
            return PedalIndicator::Held(self.value);
        }
        if self.since_release < BLINK_DURATION {
            self.since_release += dt;
            PedalIndicator::Blink
        } else {
            PedalIndicator::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PedalState {
    pub sustain: ContinuousPedal,
    pub sostenuto: ContinuousPedal,
    pub soft: bool,
}

/// Indicators for both continuous pedals in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PedalFrame {
    pub sustain: PedalIndicator,
    pub sostenuto: PedalIndicator,
    pub soft: bool,
}

impl PedalState {
    pub fn set_soft_raw(&mut self, raw: u8) {
        self.soft = raw > SWITCH_THRESHOLD;
    }

    pub fn advance(&mut self, dt: f32) -> PedalFrame {
        PedalFrame {
            sustain: self.sustain.advance(dt),
            sostenuto: self.sostenuto.advance(dt),
            soft: self.soft,
        }
    }
}
