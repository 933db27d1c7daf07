//! Data model for the notation facts derived from live MIDI input.
//!
//! These types are what the layout engine hands to a renderer; none of them
//! carry screen coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A MIDI note number (0–127, middle C = 60).
pub type Pitch = u8;

/// Diatonic letter name of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Diatonic steps above C within one octave (C = 0 … B = 6).
    pub fn steps_from_c(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental carried by a spelled note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn symbol(self) -> char {
        match self {
            Accidental::Natural => '♮',
            Accidental::Sharp => '♯',
            Accidental::Flat => '♭',
        }
    }
}

/// Whether black keys are spelled with sharps or with flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccidentalPreference {
    #[default]
    Sharps,
    Flats,
}

impl AccidentalPreference {
    pub fn from_flats(use_flats: bool) -> Self {
        if use_flats {
            AccidentalPreference::Flats
        } else {
            AccidentalPreference::Sharps
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AccidentalPreference::Sharps => AccidentalPreference::Flats,
            AccidentalPreference::Flats => AccidentalPreference::Sharps,
        }
    }

    /// The accidental a black key receives under this preference.
    pub fn accidental(self) -> Accidental {
        match self {
            AccidentalPreference::Sharps => Accidental::Sharp,
            AccidentalPreference::Flats => Accidental::Flat,
        }
    }
}

/// Letter + accidental + octave spelling of a pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpelledNote {
    pub letter: Letter,
    pub accidental: Accidental,
    /// Octave number; pitch 0 is in octave -1, middle C in octave 4.
    pub octave: i32,
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.letter, self.accidental.symbol(), self.octave)
    }
}

/// Vertical placement in diatonic steps above middle C.
///
/// One step is half a line spacing: C4 = 0, D4 = 1, B3 = -1. Treble staff
/// lines sit on 2, 4, 6, 8, 10 (E4–F5) and bass staff lines on
/// -2 … -10 (A3–G2).
pub type StaffPosition = i32;

/// Accidental glyph the renderer must draw in front of a notehead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccidentalMark {
    None,
    Natural,
    Sharp,
    Flat,
}
