//! Grand staff, clef and key signature rendering.

use crate::key_signature::{KeySignature, BASS_STAFF_OFFSET};
use crate::layout::{BASS_BOTTOM_LINE, TREBLE_TOP_LINE};
use crate::model::{AccidentalPreference, StaffPosition};

use super::constants::*;
use super::staff_y;
use super::svg_builder::SvgBuilder;

/// Bottom line of the treble staff (E4).
const TREBLE_BOTTOM_LINE: StaffPosition = 2;
/// Top line of the bass staff (A3).
const BASS_TOP_LINE: StaffPosition = -2;

pub(super) fn render_staves(svg: &mut SvgBuilder) {
    for (bottom, top) in [
        (TREBLE_BOTTOM_LINE, TREBLE_TOP_LINE),
        (BASS_BOTTOM_LINE, BASS_TOP_LINE),
    ] {
        for pos in (bottom..=top).step_by(2) {
            let y = staff_y(pos);
            svg.line(0.0, y, PAGE_WIDTH, y, STAFF_COLOR, STAFF_LINE_WIDTH);
        }
    }

    // G clef curls around G4, F clef dots straddle F3.
    svg.text(CLEF_X, staff_y(4), "𝄞", CLEF_SIZE, STAFF_COLOR, "middle", 1.0);
    svg.text(CLEF_X, staff_y(-4), "𝄢", CLEF_SIZE * 0.6, STAFF_COLOR, "middle", 1.0);
}

pub(super) fn render_key_signature(
    svg: &mut SvgBuilder,
    key: &KeySignature,
    positions: &[StaffPosition],
) {
    for (i, &pos) in positions.iter().enumerate() {
        let x = KEY_SIG_X + i as f64 * KEY_SIG_SPACING;
        for staff_pos in [pos, pos + BASS_STAFF_OFFSET] {
            let y = staff_y(staff_pos);
            match key.preference() {
                AccidentalPreference::Sharps => svg.sharp_glyph(x, y, STAFF_COLOR),
                AccidentalPreference::Flats => svg.flat_glyph(x, y, STAFF_COLOR),
            }
        }
    }
}
