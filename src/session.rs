//! Notation state shared between the MIDI reader and the frame loop.
//!
//! The reader never touches the state directly. It pushes [`Input`] values
//! into a queue; the frame loop drains the queue at the start of each frame,
//! lays out the notes, and applies queued releases at the end. That drain is
//! the only point where the state changes, so a frame always sees a
//! consistent set of notes.

use crossbeam_channel::{Receiver, Sender};
use serde::Serialize;

use crate::active_notes::ActiveNotes;
use crate::key_signature::KeySignature;
use crate::layout::{layout_notes, NoteLayout};
use crate::midi::{Controller, Event};
use crate::model::{AccidentalPreference, Pitch, StaffPosition};
use crate::pedal::{PedalFrame, PedalState};

/// User action on the key signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    AddAccidental,
    RemoveAccidental,
    ToggleAccidentals,
}

/// Something the frame loop has to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Midi(Event),
    Key(KeyAction),
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// Sounding pitches, highest first.
    pub pitches: Vec<Pitch>,
    pub notes: Vec<NoteLayout>,
    pub key: KeySignature,
    /// Treble-staff positions of the key-signature glyphs.
    pub key_glyphs: Vec<StaffPosition>,
    pub pedals: PedalFrame,
    /// Velocity of the most recent key press.
    pub last_velocity: u8,
}

#[derive(Debug, Clone, Default)]
pub struct LiveState {
    pub notes: ActiveNotes,
    pub key: KeySignature,
    pub pedals: PedalState,
    pub last_velocity: u8,
}

impl LiveState {
    pub fn new(key: KeySignature) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, input: &Input) {
        match input {
            Input::Midi(event) => self.apply_event(event),
            Input::Key(action) => self.apply_key_action(*action),
        }
    }

    pub fn apply_event(&mut self, event: &Event) {
        match *event {
            // Velocity 0 is how most keyboards release a key.
            Event::NoteOn { pitch, velocity: 0, .. } => self.notes.note_off(pitch),
            Event::NoteOn { pitch, velocity, .. } => {
                self.notes.note_on(pitch);
                self.last_velocity = velocity;
            }
            Event::NoteOff { pitch, .. } => self.notes.note_off(pitch),
            Event::ControlChange { controller, value, .. } => match controller {
                Controller::Sustain => self.pedals.sustain.set_raw(value),
                Controller::Sostenuto => self.pedals.sostenuto.set_raw(value),
                Controller::SoftPedal => self.pedals.set_soft_raw(value),
                Controller::Other(_) => {}
            },
            Event::SystemExclusive(_) | Event::UnknownByte(_) => {}
        }
    }

    pub fn apply_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::AddAccidental => self.key.increment(),
            KeyAction::RemoveAccidental => self.key.decrement(),
            KeyAction::ToggleAccidentals => self.key.toggle_preference(),
        }
        log::debug!(
            "Key signature now {} x {:?}",
            self.key.count(),
            self.key.preference()
        );
    }

    /// Lay out the current notes, advance pedal timers by `dt` seconds, then
    /// apply queued releases.
    pub fn frame(&mut self, dt: f32) -> FrameSnapshot {
        let pitches = self.notes.prepare_frame().to_vec();
        let notes = layout_notes(&pitches, &self.key);
        let pedals = self.pedals.advance(dt);
        self.notes.end_frame();

        FrameSnapshot {
            pitches,
            notes,
            key: self.key,
            key_glyphs: self.key.glyph_positions(),
            pedals,
            last_velocity: self.last_velocity,
        }
    }
}

/// Consumer end of the input queue plus the state it feeds.
pub struct Session {
    state: LiveState,
    inbox: Receiver<Input>,
}

impl Session {
    /// Create a session and the sender producers push into.
    pub fn new(state: LiveState) -> (Sender<Input>, Session) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let session = Session {
            state,
            inbox: rx,
        };
        (tx, session)
    }

    /// Drain pending input, then produce the frame.
    pub fn next_frame(&mut self, dt: f32) -> FrameSnapshot {
        let drained = self.drain();
        if drained > 0 {
            log::trace!("Applied {} inputs", drained);
        }
        self.state.frame(dt)
    }

    fn drain(&mut self) -> usize {
        let mut count = 0;
        while let Ok(input) = self.inbox.try_recv() {
            if let Input::Midi(event) = &input {
                log_event(event, self.state.key.preference());
            }
            self.state.apply(&input);
            count += 1;
        }
        count
    }

    pub fn state(&self) -> &LiveState {
        &self.state
    }
}

fn log_event(event: &Event, preference: AccidentalPreference) {
    match event {
        Event::UnknownByte(_) => log::warn!("{}", event.describe(preference)),
        _ => log::info!("{}", event.describe(preference)),
    }
}
