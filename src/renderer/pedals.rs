//! Pedal markings along the bottom edge.

use crate::pedal::{PedalFrame, PedalIndicator};

use super::constants::*;
use super::svg_builder::SvgBuilder;

pub(super) fn render_pedals(svg: &mut SvgBuilder, pedals: &PedalFrame) {
    render_indicator(svg, SUSTAIN_X, "Ped.", pedals.sustain);
    render_indicator(svg, SOSTENUTO_X, "Sost.", pedals.sostenuto);
    if pedals.soft {
        svg.text(SOFT_PEDAL_X, PEDAL_Y, "una corda", PEDAL_TEXT_SIZE * 0.8, NOTE_COLOR, "start", 1.0);
    }
}

fn render_indicator(svg: &mut SvgBuilder, x: f64, label: &str, indicator: PedalIndicator) {
    match indicator {
        PedalIndicator::Held(intensity) => {
            svg.text(x, PEDAL_Y, label, PEDAL_TEXT_SIZE, NOTE_COLOR, "start", intensity as f64)
        }
        PedalIndicator::Blink => svg.text(x, PEDAL_Y, "*", PEDAL_TEXT_SIZE, NOTE_COLOR, "start", 1.0),
        PedalIndicator::Hidden => {}
    }
}
