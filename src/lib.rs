//! livescore — renders what is being played on a MIDI keyboard as staff
//! notation, live.
//!
//! Bytes from the device are decoded into events, the events update the set
//! of sounding notes, the pedals and the key signature, and once per frame the
//! layout engine turns that state into notation facts (staff position, stem,
//! head shift, ledger lines, accidentals) that the SVG renderer draws.
//!
//! # Example
//! ```no_run
//! use livescore::{decode_bytes, render_frame_to_svg, Input, KeySignature, LiveState, Session};
//! use livescore::model::AccidentalPreference;
//!
//! let (tx, mut session) = Session::new(LiveState::new(KeySignature::new(AccidentalPreference::Sharps, 2)));
//! for event in decode_bytes(&[0x90, 60, 100, 0x90, 64, 100]).unwrap() {
//!     tx.send(Input::Midi(event)).unwrap();
//! }
//! let frame = session.next_frame(1.0 / 30.0);
//! println!("{}", render_frame_to_svg(&frame));
//! ```

pub mod active_notes;
pub mod config;
pub mod device;
pub mod error;
pub mod key_signature;
pub mod layout;
pub mod midi;
pub mod model;
pub mod pedal;
pub mod pitch;
pub mod renderer;
pub mod session;

pub use active_notes::ActiveNotes;
pub use config::Config;
pub use error::{Error, Result};
pub use key_signature::KeySignature;
pub use layout::{layout_notes, NoteLayout};
pub use midi::{decode_bytes, Decoder, Event};
pub use pedal::{PedalFrame, PedalIndicator, PedalState};
pub use renderer::render_frame_to_svg;
pub use session::{FrameSnapshot, Input, KeyAction, LiveState, Session};

use model::Pitch;

/// Convert a frame to a JSON string, e.g. for a display running in another
/// process.
pub fn frame_to_json(frame: &FrameSnapshot) -> Result<String> {
    Ok(serde_json::to_string(frame)?)
}

/// Lay out and render a fixed chord without going through a session.
///
/// Pitches may be given in any order and may repeat.
pub fn render_chord_to_svg(pitches: &[Pitch], key: KeySignature) -> String {
    let mut state = LiveState::new(key);
    for &pitch in pitches {
        state.notes.note_on(pitch);
    }
    render_frame_to_svg(&state.frame(0.0))
}
