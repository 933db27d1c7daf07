//! Key signature bookkeeping: accidental preference plus a count of altered
//! letters.

use serde::Serialize;

use crate::model::*;

pub const MAX_ACCIDENTALS: u8 = 7;

/// Order in which sharps are added to a key signature.
pub const SHARP_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

/// Order in which flats are added to a key signature.
pub const FLAT_ORDER: [Letter; 7] = [
    Letter::B,
    Letter::E,
    Letter::A,
    Letter::D,
    Letter::G,
    Letter::C,
    Letter::F,
];

/// Steps between a key-signature glyph on the treble staff and the same
/// glyph on the bass staff.
pub const BASS_STAFF_OFFSET: StaffPosition = -14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeySignature {
    preference: AccidentalPreference,
    count: u8,
}

impl KeySignature {
    /// Build a key signature; `count` is clamped to 0–7.
    pub fn new(preference: AccidentalPreference, count: i32) -> Self {
        Self {
            preference,
            count: clamp_count(count),
        }
    }

    pub fn preference(&self) -> AccidentalPreference {
        self.preference
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = clamp_count(self.count as i32 + 1);
    }

    pub fn decrement(&mut self) {
        self.count = clamp_count(self.count as i32 - 1);
    }

    /// Switch between sharps and flats, keeping the number of accidentals.
    pub fn toggle_preference(&mut self) {
        self.preference = self.preference.toggled();
    }

    /// Letters altered by this key, in the order their glyphs are drawn.
    pub fn affected_letters(&self) -> &'static [Letter] {
        let order = match self.preference {
            AccidentalPreference::Sharps => &SHARP_ORDER,
            AccidentalPreference::Flats => &FLAT_ORDER,
        };
        &order[..self.count as usize]
    }

    pub fn is_affected(&self, letter: Letter) -> bool {
        self.affected_letters().contains(&letter)
    }

    /// Treble-staff positions of the signature's glyphs, in drawing order.
    /// Add [`BASS_STAFF_OFFSET`] for the bass staff.
    pub fn glyph_positions(&self) -> Vec<StaffPosition> {
        self.affected_letters()
            .iter()
            .map(|&letter| treble_glyph_position(letter, self.preference))
            .collect()
    }
}

fn clamp_count(count: i32) -> u8 {
    count.clamp(0, MAX_ACCIDENTALS as i32) as u8
}

fn treble_glyph_position(letter: Letter, preference: AccidentalPreference) -> StaffPosition {
    use AccidentalPreference::*;
    match (letter, preference) {
        (Letter::C, _) => 7,
        (Letter::D, _) => 8,
        (Letter::E, _) => 9,
        (Letter::F, Sharps) => 10,
        (Letter::F, Flats) => 3,
        (Letter::G, Sharps) => 11,
        (Letter::G, Flats) => 4,
        (Letter::A, _) => 5,
        (Letter::B, _) => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AccidentalPreference::*;

    #[test]
    fn count_is_clamped_everywhere() {
        assert_eq!(KeySignature::new(Sharps, 12).count(), 7);
        assert_eq!(KeySignature::new(Flats, -3).count(), 0);

        let mut key = KeySignature::new(Sharps, 7);
        key.increment();
        assert_eq!(key.count(), 7);

        let mut key = KeySignature::new(Sharps, 0);
        key.decrement();
        assert_eq!(key.count(), 0);
    }

    #[test]
    fn affected_letters_follow_the_cycle() {
        assert_eq!(
            KeySignature::new(Sharps, 3).affected_letters(),
            &[Letter::F, Letter::C, Letter::G]
        );
        assert_eq!(
            KeySignature::new(Flats, 2).affected_letters(),
            &[Letter::B, Letter::E]
        );
        assert!(KeySignature::new(Sharps, 0).affected_letters().is_empty());
    }

    #[test]
    fn toggle_keeps_count() {
        let mut key = KeySignature::new(Sharps, 2);
        key.toggle_preference();
        assert_eq!(key.preference(), Flats);
        assert_eq!(key.affected_letters(), &[Letter::B, Letter::E]);
    }

    #[test]
    fn full_signatures_affect_every_letter() {
        for pref in [Sharps, Flats] {
            let key = KeySignature::new(pref, 7);
            for letter in SHARP_ORDER {
                assert!(key.is_affected(letter));
            }
        }
    }

    #[test]
    fn glyphs_use_standard_treble_placement() {
        assert_eq!(
            KeySignature::new(Sharps, 7).glyph_positions(),
            vec![10, 7, 11, 8, 5, 9, 6]
        );
        assert_eq!(
            KeySignature::new(Flats, 7).glyph_positions(),
            vec![6, 9, 5, 8, 4, 7, 3]
        );
    }
}
