//! Rendering tests — lay out sample chords and render them to SVG.

use livescore::model::AccidentalPreference;
use livescore::{
    render_chord_to_svg, render_frame_to_svg, FrameSnapshot, KeySignature, PedalFrame,
    PedalIndicator,
};
use std::path::PathBuf;

const NOTE_STROKE: &str = r##"stroke="#FFCB00""##;
const STAFF_STROKE: &str = r##"stroke="#FFFFFF""##;

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn empty_frame(key: KeySignature) -> FrameSnapshot {
    FrameSnapshot {
        pitches: Vec::new(),
        notes: Vec::new(),
        key,
        key_glyphs: key.glyph_positions(),
        pedals: PedalFrame {
            sustain: PedalIndicator::Hidden,
            sostenuto: PedalIndicator::Hidden,
            soft: false,
        },
        last_velocity: 0,
    }
}

#[test]
fn render_empty_grand_staff() {
    let svg = render_frame_to_svg(&empty_frame(KeySignature::default()));

    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert_eq!(svg.matches(STAFF_STROKE).count(), 10, "two staves of five lines");
    assert!(svg.contains("𝄞") && svg.contains("𝄢"), "SVG should contain both clefs");
    assert!(!svg.contains("<ellipse"), "no notes, no noteheads");
    assert!(!svg.contains("Ped."));
}

#[test]
fn render_c_major_triad() {
    let svg = render_chord_to_svg(&[64, 60, 67], KeySignature::default());

    assert_eq!(svg.matches(r#"class="notehead""#).count(), 3);
    // Middle C ledger line plus three stems.
    assert_eq!(svg.matches(NOTE_STROKE).count(), 4);
    assert!(!svg.contains('♯') && !svg.contains('♭') && !svg.contains('♮'));

    let out = output_dir().join("c-major-triad.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered c-major-triad.svg ({} bytes)", svg.len());
}

#[test]
fn render_accidentals_against_key() {
    // A major (three sharps) with C natural and D sharp.
    let key = KeySignature::new(AccidentalPreference::Sharps, 3);
    let svg = render_chord_to_svg(&[72, 75], key);

    // Three glyphs on each staff, plus one for D sharp.
    assert_eq!(svg.matches('♯').count(), 7);
    assert_eq!(svg.matches('♮').count(), 1);

    let out = output_dir().join("a-major-accidentals.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
}

#[test]
fn render_flat_key_signature() {
    let key = KeySignature::new(AccidentalPreference::Flats, 4);
    let svg = render_frame_to_svg(&empty_frame(key));
    assert_eq!(svg.matches('♭').count(), 8);
    assert!(!svg.contains('♯'));
}

#[test]
fn render_second_shifts_one_head() {
    let svg = render_chord_to_svg(&[64, 62], KeySignature::default());
    assert!(svg.contains(r#"cx="300.0""#), "unshifted head");
    assert!(svg.contains(r#"cx="316.0""#), "shifted head");
}

#[test]
fn render_high_note_ledger_lines() {
    // C7: ledger lines at A5, C6, E6, G6, B6.
    let svg = render_chord_to_svg(&[96], KeySignature::default());
    assert_eq!(svg.matches(NOTE_STROKE).count(), 5 + 1);
}

#[test]
fn render_pedal_markings() {
    let mut frame = empty_frame(KeySignature::default());
    frame.pedals = PedalFrame {
        sustain: PedalIndicator::Held(0.5),
        sostenuto: PedalIndicator::Blink,
        soft: true,
    };
    let svg = render_frame_to_svg(&frame);

    assert!(svg.contains(r#"opacity="0.50""#), "held sustain is faded by depth");
    assert!(svg.contains("Ped."));
    assert!(!svg.contains("Sost."), "released sostenuto shows only the release mark");
    assert!(svg.contains(">*</text>"));
    assert!(svg.contains("una corda"));

    let out = output_dir().join("pedals.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
}

#[test]
fn render_full_keyboard_chord() {
    let pitches: Vec<u8> = (21..=108).step_by(3).collect();
    let svg = render_chord_to_svg(&pitches, KeySignature::default());
    assert_eq!(svg.matches(r#"class="notehead""#).count(), pitches.len());

    let out = output_dir().join("full-keyboard.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
}
