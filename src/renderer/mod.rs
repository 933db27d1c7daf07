//! Frame renderer — draws a [`FrameSnapshot`] as a grand staff in SVG.
//!
//! All notation decisions come from the layout engine; this module only maps
//! staff positions to coordinates and emits drawing primitives.

mod constants;
mod notes;
mod pedals;
mod staff;
mod svg_builder;

use crate::model::StaffPosition;
use crate::session::FrameSnapshot;
use constants::*;
use notes::render_notes;
use pedals::render_pedals;
use staff::{render_key_signature, render_staves};
use svg_builder::SvgBuilder;

/// Render one frame into a complete SVG document.
pub fn render_frame_to_svg(frame: &FrameSnapshot) -> String {
    let mut svg = SvgBuilder::new(PAGE_WIDTH, PAGE_HEIGHT);

    svg.rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, BACKGROUND_COLOR);

    render_staves(&mut svg);
    render_key_signature(&mut svg, &frame.key, &frame.key_glyphs);
    render_notes(&mut svg, &frame.notes);
    render_pedals(&mut svg, &frame.pedals);

    svg.build()
}

/// Vertical coordinate of a staff position.
pub(crate) fn staff_y(pos: StaffPosition) -> f64 {
    MIDDLE_C_Y - pos as f64 * HALF_SPACE
}
