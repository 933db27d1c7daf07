//! Notehead, stem, accidental and ledger line rendering.

use crate::layout::NoteLayout;
use crate::model::AccidentalMark;

use super::constants::*;
use super::staff_y;
use super::svg_builder::SvgBuilder;

pub(super) fn render_notes(svg: &mut SvgBuilder, notes: &[NoteLayout]) {
    for note in notes {
        let x = NOTE_X + note.shift as f64 * SHIFT_STEP;
        let y = staff_y(note.position);

        render_ledger_lines(svg, x, note);
        svg.notehead(x, y);
        render_stem(svg, y, note);
        render_accidental(svg, y, note.accidental);
    }
}

// ── Ledger lines ────────────────────────────────────────────────────

fn render_ledger_lines(svg: &mut SvgBuilder, x: f64, note: &NoteLayout) {
    for &pos in &note.ledger_lines {
        let y = staff_y(pos);
        svg.line(
            x - NOTEHEAD_RX - LEDGER_LINE_EXTEND,
            y,
            x + NOTEHEAD_RX + LEDGER_LINE_EXTEND,
            y,
            NOTE_COLOR,
            LEDGER_LINE_WIDTH,
        );
    }
}

// ── Stems ───────────────────────────────────────────────────────────

/// Stems hang off the right edge of an unshifted head; shifted heads sit on
/// the far side of the stem, which grows a little to reach them.
fn render_stem(svg: &mut SvgBuilder, y: f64, note: &NoteLayout) {
    let sx = NOTE_X + NOTEHEAD_RX - STEM_WIDTH / 2.0;
    let length = STEM_LENGTH + note.shift as f64 * SHIFTED_STEM_EXTRA;
    let (y1, y2) = if note.stem_down {
        (y, y + length)
    } else {
        (y - STEM_LENGTH, y - STEM_LENGTH + length)
    };
    svg.line(sx, y1, sx, y2, NOTE_COLOR, STEM_WIDTH);
}

// ── Accidentals ─────────────────────────────────────────────────────

fn render_accidental(svg: &mut SvgBuilder, y: f64, mark: AccidentalMark) {
    let x = NOTE_X - ACCIDENTAL_OFFSET;
    match mark {
        AccidentalMark::Sharp => svg.sharp_glyph(x, y, NOTE_COLOR),
        AccidentalMark::Flat => svg.flat_glyph(x, y, NOTE_COLOR),
        AccidentalMark::Natural => svg.natural_glyph(x, y, NOTE_COLOR),
        AccidentalMark::None => {}
    }
}
