//! Notation layout engine.
//!
//! Given the sounding pitches sorted from highest to lowest and the current
//! key signature, works out for every note where it sits on the grand staff,
//! which way its stem points, whether its head is shifted sideways to clear a
//! neighbour, which ledger lines it needs and which accidental to print.
//!
//! The pass is a single fold over the sorted notes. The stem direction and
//! the horizontal shift are carried from one note to the next:
//!
//! * The first (highest) note decides the stem: down when it sits on or above
//!   the treble middle line (B4), up otherwise. The same note is then forced
//!   into shift class 1.
//! * A note at least four line spacings below its predecessor starts a new
//!   cluster: its shift resets to 0 and, below middle C, the stem flips up.
//! * Otherwise a note whose head is one step or less from its neighbour, with
//!   one head on a line and the other in a space, toggles the shift class.
//!   The comparison with the previous note wins over the one with the next.

use serde::Serialize;

use crate::key_signature::KeySignature;
use crate::model::*;
use crate::pitch::{is_on_line, position_of, spell};

// ── Staff geometry in diatonic steps ────────────────────────────────

pub const MIDDLE_C: StaffPosition = 0;
/// B4, the middle line of the treble staff.
pub const TREBLE_MIDDLE_LINE: StaffPosition = 6;
/// D3, the middle line of the bass staff.
pub const BASS_MIDDLE_LINE: StaffPosition = -6;
/// F5, the top line of the treble staff.
pub const TREBLE_TOP_LINE: StaffPosition = 10;
/// G2, the bottom line of the bass staff.
pub const BASS_BOTTOM_LINE: StaffPosition = -10;
/// A5, the first ledger line above the grand staff.
pub const FIRST_LEDGER_ABOVE: StaffPosition = TREBLE_TOP_LINE + 2;
/// E2, the first ledger line below the grand staff.
pub const FIRST_LEDGER_BELOW: StaffPosition = BASS_BOTTOM_LINE - 2;
/// Steps per octave (3.5 line spacings).
pub const OCTAVE_STEPS: StaffPosition = 7;
/// Notes this far apart (four line spacings) never collide.
pub const FAR_APART: StaffPosition = 8;
/// Heads this close (half a line spacing) may collide.
pub const COLLISION_DISTANCE: StaffPosition = 1;

/// Horizontal offset class of a notehead.
pub type ShiftClass = u8;

/// Everything a renderer needs to draw one note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteLayout {
    pub pitch: Pitch,
    pub spelled: SpelledNote,
    pub position: StaffPosition,
    pub on_line: bool,
    pub stem_down: bool,
    pub shift: ShiftClass,
    /// Positions of ledger lines, nearest to the staff first.
    pub ledger_lines: Vec<StaffPosition>,
    pub accidental: AccidentalMark,
}

/// Per-note facts that don't depend on neighbours.
struct Head {
    pitch: Pitch,
    spelled: SpelledNote,
    position: StaffPosition,
    on_line: bool,
}

/// State threaded through the fold.
#[derive(Debug, Clone, Copy, Default)]
struct Pass {
    shift: ShiftClass,
    stem_down: bool,
}

/// Lay out `sorted` (highest pitch first) under `key`.
pub fn layout_notes(sorted: &[Pitch], key: &KeySignature) -> Vec<NoteLayout> {
    let preference = key.preference();
    let heads: Vec<Head> = sorted
        .iter()
        .map(|&pitch| {
            let spelled = spell(pitch, preference);
            Head {
                pitch,
                spelled,
                position: position_of(&spelled),
                on_line: is_on_line(pitch, preference),
            }
        })
        .collect();

    let (_, layouts) = (0..heads.len()).fold(
        (Pass::default(), Vec::with_capacity(heads.len())),
        |(pass, mut out), idx| {
            let pass = advance(pass, &heads, idx);
            let head = &heads[idx];
            out.push(NoteLayout {
                pitch: head.pitch,
                spelled: head.spelled,
                position: head.position,
                on_line: head.on_line,
                stem_down: pass.stem_down,
                shift: pass.shift,
                ledger_lines: ledger_lines(head.position),
                accidental: accidental_mark(&head.spelled, key),
            });
            (pass, out)
        },
    );
    layouts
}

fn advance(pass: Pass, heads: &[Head], idx: usize) -> Pass {
    let Pass { mut shift, mut stem_down } = pass;
    let head = &heads[idx];
    let leads_on_middle_line = idx == 0 && head.position >= TREBLE_MIDDLE_LINE;

    if leads_on_middle_line {
        stem_down = true;
    }

    let mut could_collide = false;
    let mut close_enough = false;

    if let Some(next) = heads.get(idx + 1) {
        could_collide = head.on_line != next.on_line;
        close_enough = head.position - next.position <= COLLISION_DISTANCE;
    }

    if idx > 0 {
        let prev = &heads[idx - 1];
        let distance = prev.position - head.position;
        if distance >= FAR_APART {
            if head.position < MIDDLE_C {
                stem_down = false;
            }
            shift = 0;
        } else {
            could_collide = head.on_line != prev.on_line;
            close_enough = distance <= COLLISION_DISTANCE;
        }
    }

    if could_collide && close_enough {
        shift = 1 - shift;
    }

    if leads_on_middle_line {
        shift = 1;
    }

    Pass { shift, stem_down }
}

/// Ledger lines needed by a head at `position`.
pub fn ledger_lines(position: StaffPosition) -> Vec<StaffPosition> {
    let mut lines = Vec::new();

    if position >= FIRST_LEDGER_ABOVE {
        lines.extend((FIRST_LEDGER_ABOVE..=position).step_by(2));
    }

    if position == MIDDLE_C {
        lines.push(MIDDLE_C);
    }

    if position <= FIRST_LEDGER_BELOW {
        let mut line = FIRST_LEDGER_BELOW;
        while line >= position {
            lines.push(line);
            line -= 2;
        }
    }

    lines
}

/// Which accidental glyph a spelled note needs under `key`.
pub fn accidental_mark(note: &SpelledNote, key: &KeySignature) -> AccidentalMark {
    let in_key = key.is_affected(note.letter);
    match note.accidental {
        Accidental::Natural if in_key => AccidentalMark::Natural,
        Accidental::Natural => AccidentalMark::None,
        Accidental::Sharp | Accidental::Flat if in_key => AccidentalMark::None,
        Accidental::Sharp | Accidental::Flat => match key.preference() {
            AccidentalPreference::Sharps => AccidentalMark::Sharp,
            AccidentalPreference::Flats => AccidentalMark::Flat,
        },
    }
}
