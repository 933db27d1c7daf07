//! Integration tests for the layout engine: positions, stems, head shifts,
//! ledger lines and accidentals over whole chords.

use livescore::layout::{ledger_lines, FIRST_LEDGER_ABOVE, FIRST_LEDGER_BELOW};
use livescore::model::{AccidentalMark, AccidentalPreference, Pitch};
use livescore::pitch::{is_on_line, staff_position, HIGHEST_KEY, LOWEST_KEY};
use livescore::{layout_notes, KeySignature};
use pretty_assertions::assert_eq;

use AccidentalPreference::{Flats, Sharps};

const NATURALS_ON_LINES: [Pitch; 26] = [
    23, 26, 29, 33, 36, 40, 43, 47, 50, 53, 57, 60, 64, 67, 71, 74, 77, 81, 84, 88, 91, 95, 98,
    101, 105, 108,
];
const SHARPS_ON_LINES: [Pitch; 18] = [
    27, 30, 34, 37, 44, 51, 54, 58, 61, 68, 75, 78, 82, 85, 92, 99, 102, 106,
];
const FLATS_ON_LINES: [Pitch; 18] = [
    22, 25, 32, 39, 42, 46, 49, 56, 63, 66, 70, 73, 80, 87, 90, 94, 97, 104,
];

fn is_black(pitch: Pitch) -> bool {
    matches!(pitch % 12, 1 | 3 | 6 | 8 | 10)
}

// ═══════════════════════════════════════════════════════════════════════
// Single notes and small chords
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn middle_c_alone() {
    let layout = layout_notes(&[60], &KeySignature::default());
    assert_eq!(layout.len(), 1);
    let c = &layout[0];
    assert_eq!(c.position, 0);
    assert!(c.on_line);
    assert!(!c.stem_down);
    assert_eq!(c.shift, 0);
    assert_eq!(c.ledger_lines, vec![0]);
    assert_eq!(c.accidental, AccidentalMark::None);
    assert_eq!(c.spelled.to_string(), "C♮-4");
}

#[test]
fn c_sharp_over_c_share_a_column() {
    // Both heads sit on the middle C ledger line, so neither is bumped.
    let layout = layout_notes(&[61, 60], &KeySignature::default());
    assert_eq!(layout[0].position, 0);
    assert_eq!(layout[1].position, 0);
    assert!(layout[0].on_line && layout[1].on_line);
    assert_eq!((layout[0].shift, layout[1].shift), (0, 0));
    assert_eq!(layout[0].accidental, AccidentalMark::Sharp);
    assert_eq!(layout[1].accidental, AccidentalMark::None);
}

#[test]
fn second_intervals_alternate_heads() {
    // E4 / D4 / C4: line, space, line.
    let layout = layout_notes(&[64, 62, 60], &KeySignature::default());
    assert_ne!(layout[0].shift, layout[1].shift);
    assert_ne!(layout[1].shift, layout[2].shift);
}

#[test]
fn thirds_never_shift() {
    // C major triad plus octave: no two heads are adjacent.
    let layout = layout_notes(&[72, 67, 64, 60], &KeySignature::default());
    assert!(layout[1..].iter().all(|n| n.shift == layout[1].shift));
}

#[test]
fn high_chord_stems_down_and_low_cluster_resets() {
    // D5 over C5, then a far-away C3.
    let layout = layout_notes(&[74, 72, 48], &KeySignature::default());
    assert!(layout[0].stem_down);
    assert_eq!(layout[0].shift, 1);
    assert!(layout[1].stem_down);
    assert!(!layout[2].stem_down);
    assert_eq!(layout[2].shift, 0);
}

#[test]
fn far_note_resets_then_collides_with_its_next_neighbour() {
    // C6, then F4 eleven steps lower, then E4 right under it.
    let layout = layout_notes(&[84, 65, 64], &KeySignature::default());
    let summary: Vec<(i32, u8, bool)> =
        layout.iter().map(|n| (n.position, n.shift, n.stem_down)).collect();
    // F4 starts a new cluster at shift 0, then toggles against E4. Both stay
    // above middle C, so the stem set by C6 holds.
    assert_eq!(summary, vec![(14, 1, true), (3, 1, true), (2, 0, true)]);
}

#[test]
fn adjacent_line_and_space_heads_always_separate() {
    for preference in [Sharps, Flats] {
        let key = KeySignature::new(preference, 0);
        for low in LOWEST_KEY..HIGHEST_KEY {
            for high in low + 1..=(low + 2).min(HIGHEST_KEY) {
                let layout = layout_notes(&[high, low], &key);
                let steps = layout[0].position - layout[1].position;
                if steps == 1 && layout[0].on_line != layout[1].on_line {
                    assert_ne!(
                        layout[0].shift, layout[1].shift,
                        "{high} over {low} with {preference:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn every_layout_has_one_entry_per_pitch_in_order() {
    let pitches: Vec<Pitch> = (LOWEST_KEY..=HIGHEST_KEY).rev().step_by(5).collect();
    let layout = layout_notes(&pitches, &KeySignature::default());
    let laid_out: Vec<Pitch> = layout.iter().map(|n| n.pitch).collect();
    assert_eq!(laid_out, pitches);
    assert!(layout.iter().all(|n| n.shift <= 1));
}

// ═══════════════════════════════════════════════════════════════════════
// Accidentals
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn empty_key_marks_every_black_key_only() {
    for preference in [Sharps, Flats] {
        let key = KeySignature::new(preference, 0);
        for pitch in LOWEST_KEY..=HIGHEST_KEY {
            let mark = layout_notes(&[pitch], &key)[0].accidental;
            let expected = match (is_black(pitch), preference) {
                (false, _) => AccidentalMark::None,
                (true, Sharps) => AccidentalMark::Sharp,
                (true, Flats) => AccidentalMark::Flat,
            };
            assert_eq!(mark, expected, "pitch {pitch} {preference:?}");
        }
    }
}

#[test]
fn full_key_naturals_every_white_key() {
    for preference in [Sharps, Flats] {
        let key = KeySignature::new(preference, 7);
        for pitch in LOWEST_KEY..=HIGHEST_KEY {
            let mark = layout_notes(&[pitch], &key)[0].accidental;
            let expected = if is_black(pitch) {
                AccidentalMark::None
            } else {
                AccidentalMark::Natural
            };
            assert_eq!(mark, expected, "pitch {pitch} {preference:?}");
        }
    }
}

#[test]
fn d_major_chord() {
    // D major: F# and C#. Play F#4, C5 (natural), C#5.
    let key = KeySignature::new(Sharps, 2);
    let layout = layout_notes(&[73, 72, 66], &key);
    let marks: Vec<AccidentalMark> = layout.iter().map(|n| n.accidental).collect();
    assert_eq!(
        marks,
        vec![AccidentalMark::None, AccidentalMark::Natural, AccidentalMark::None]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Staff geometry
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn on_line_matches_keyboard_tables() {
    for pitch in 0..=127u8 {
        let natural = NATURALS_ON_LINES.contains(&pitch);
        assert_eq!(
            is_on_line(pitch, Sharps),
            natural || SHARPS_ON_LINES.contains(&pitch),
            "pitch {pitch} with sharps"
        );
        assert_eq!(
            is_on_line(pitch, Flats),
            natural || FLATS_ON_LINES.contains(&pitch),
            "pitch {pitch} with flats"
        );
    }
}

#[test]
fn positions_rise_with_pitch() {
    for preference in [Sharps, Flats] {
        for pitch in LOWEST_KEY..HIGHEST_KEY {
            assert!(
                staff_position(pitch + 1, preference) >= staff_position(pitch, preference),
                "pitch {pitch} {preference:?}"
            );
        }
        assert_eq!(
            staff_position(72, preference) - staff_position(60, preference),
            7
        );
    }
}

#[test]
fn ledger_lines_grow_away_from_the_staff() {
    let mut previous = 0;
    for pos in FIRST_LEDGER_ABOVE - 1..=28 {
        let lines = ledger_lines(pos);
        assert!(lines.len() >= previous);
        assert!(lines.iter().all(|l| l % 2 == 0 && *l <= pos));
        previous = lines.len();
    }

    let mut previous = 0;
    for pos in (-23..=FIRST_LEDGER_BELOW + 1).rev() {
        let lines = ledger_lines(pos);
        assert!(lines.len() >= previous);
        assert!(lines.iter().all(|l| l % 2 == 0 && *l >= pos));
        previous = lines.len();
    }

    for pos in FIRST_LEDGER_BELOW + 1..FIRST_LEDGER_ABOVE {
        let expected: Vec<i32> = if pos == 0 { vec![0] } else { Vec::new() };
        assert_eq!(ledger_lines(pos), expected, "position {pos}");
    }
}

#[test]
fn lowest_and_highest_keys() {
    let layout = layout_notes(&[HIGHEST_KEY, LOWEST_KEY], &KeySignature::default());
    // C8: 28 steps up, nine ledger lines. A0: 23 steps down, six.
    assert_eq!(layout[0].ledger_lines, vec![12, 14, 16, 18, 20, 22, 24, 26, 28]);
    assert_eq!(layout[1].ledger_lines, vec![-12, -14, -16, -18, -20, -22]);
}
