//! Pitch spelling and staff classification.

use crate::model::*;

/// Lowest and highest pitch of an 88-key keyboard; outside this range no
/// note is treated as sitting on a line.
pub const LOWEST_KEY: Pitch = 21;
pub const HIGHEST_KEY: Pitch = 108;

const SHARP_SPELLINGS: [(Letter, Accidental); 12] = [
    (Letter::C, Accidental::Natural),
    (Letter::C, Accidental::Sharp),
    (Letter::D, Accidental::Natural),
    (Letter::D, Accidental::Sharp),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Natural),
    (Letter::G, Accidental::Sharp),
    (Letter::A, Accidental::Natural),
    (Letter::A, Accidental::Sharp),
    (Letter::B, Accidental::Natural),
];

const FLAT_SPELLINGS: [(Letter, Accidental); 12] = [
    (Letter::C, Accidental::Natural),
    (Letter::D, Accidental::Flat),
    (Letter::D, Accidental::Natural),
    (Letter::E, Accidental::Flat),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::G, Accidental::Flat),
    (Letter::G, Accidental::Natural),
    (Letter::A, Accidental::Flat),
    (Letter::A, Accidental::Natural),
    (Letter::B, Accidental::Flat),
    (Letter::B, Accidental::Natural),
];

/// Spell a pitch under the given accidental preference.
pub fn spell(pitch: Pitch, preference: AccidentalPreference) -> SpelledNote {
    let table = match preference {
        AccidentalPreference::Sharps => &SHARP_SPELLINGS,
        AccidentalPreference::Flats => &FLAT_SPELLINGS,
    };
    let (letter, accidental) = table[(pitch % 12) as usize];
    SpelledNote {
        letter,
        accidental,
        // Octave numbering starts at -1 for pitch 0.
        octave: (pitch / 12) as i32 - 1,
    }
}

/// Human-readable name such as `C♯-4`.
pub fn note_name(pitch: Pitch, preference: AccidentalPreference) -> String {
    spell(pitch, preference).to_string()
}

/// Diatonic steps above middle C of a spelled note.
pub fn position_of(note: &SpelledNote) -> StaffPosition {
    note.letter.steps_from_c() + (note.octave - 4) * 7
}

pub fn staff_position(pitch: Pitch, preference: AccidentalPreference) -> StaffPosition {
    position_of(&spell(pitch, preference))
}

/// Whether the notehead of `pitch` sits on a line (staff or ledger) rather
/// than in a space.
///
/// Lines are every other diatonic step counted from middle C, so the answer
/// for a black key depends on which letter it is spelled with: C♯4 shares
/// the line of C4, D♭4 sits in the space of D4.
pub fn is_on_line(pitch: Pitch, preference: AccidentalPreference) -> bool {
    if !(LOWEST_KEY..=HIGHEST_KEY).contains(&pitch) {
        return false;
    }
    staff_position(pitch, preference).rem_euclid(2) == 0
}
