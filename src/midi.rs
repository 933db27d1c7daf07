//! MIDI byte-stream decoder.
//!
//! Turns raw bytes from a keyboard into typed [`Event`]s. Each status byte is
//! classified by its high nibble and the expected number of argument bytes is
//! consumed. There is no running-status support: a data byte seen where a
//! status byte is expected is reported as [`Event::UnknownByte`] and decoding
//! resumes at the next byte. A status byte arriving where an argument was
//! expected abandons the message in progress: its status is reported as
//! unknown and decoding restarts at the interrupting byte.

use std::io::{ErrorKind, Read};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{AccidentalPreference, Pitch};
use crate::pitch::note_name;

// ═══════════════════════════════════════════════════════════════════════
// Status bytes and controller numbers
// ═══════════════════════════════════════════════════════════════════════

pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const SYSTEM_EXCLUSIVE: u8 = 0xF0;
pub const END_OF_EXCLUSIVE: u8 = 0xF7;
pub const ACTIVE_SENSING: u8 = 0xFE;

pub const SUSTAIN: u8 = 0x40;
pub const SOSTENUTO: u8 = 0x42;
pub const SOFT_PEDAL: u8 = 0x43;

/// Highest value a data byte can carry; anything above is a status byte.
pub const MAX_DATA_BYTE: u8 = 0x7F;

/// Controller values above this count as "on" for switch-type pedals.
pub const SWITCH_THRESHOLD: u8 = 64;

/// Controller addressed by a control-change message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Controller {
    Sustain,
    Sostenuto,
    SoftPedal,
    Other(u8),
}

impl Controller {
    pub fn from_number(number: u8) -> Self {
        match number {
            SUSTAIN => Controller::Sustain,
            SOSTENUTO => Controller::Sostenuto,
            SOFT_PEDAL => Controller::SoftPedal,
            other => Controller::Other(other),
        }
    }
}

/// A decoded MIDI message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    NoteOn { channel: u8, pitch: Pitch, velocity: u8 },
    NoteOff { channel: u8, pitch: Pitch, velocity: u8 },
    ControlChange { channel: u8, controller: Controller, value: u8 },
    /// Payload of a system-exclusive message, terminator excluded.
    SystemExclusive(Vec<u8>),
    UnknownByte(u8),
}

impl Event {
    /// The three bytes to send back to the device for local echo, with the
    /// velocity replaced. Only note messages are echoed.
    pub fn echo_bytes(&self, velocity: u8) -> Option<[u8; 3]> {
        match *self {
            // A release spelled as note-on stays a release.
            Event::NoteOn { channel, pitch, velocity: 0 } => Some([NOTE_ON | channel, pitch, 0]),
            Event::NoteOn { channel, pitch, .. } => Some([NOTE_ON | channel, pitch, velocity]),
            Event::NoteOff { channel, pitch, .. } => Some([NOTE_OFF | channel, pitch, velocity]),
            _ => None,
        }
    }

    /// One-line diagnostic description.
    pub fn describe(&self, preference: AccidentalPreference) -> String {
        match self {
            Event::NoteOn { channel, pitch, velocity } => format!(
                "Input   Channel {:02}: Note on  {:03} ({}) @ velocity {:03}",
                channel, pitch, note_name(*pitch, preference), velocity
            ),
            Event::NoteOff { channel, pitch, velocity } => format!(
                "Input   Channel {:02}: Note off {:03} ({}) @ velocity {:03}",
                channel, pitch, note_name(*pitch, preference), velocity
            ),
            Event::ControlChange { channel, controller, value } => {
                let what = match controller {
                    Controller::Sustain => format!(
                        "Sustain @ {:06.2}% ({:02X})",
                        100.0 * (*value as f32 / 127.0),
                        value
                    ),
                    Controller::Sostenuto => format!("Sostenuto {}", on_off(*value)),
                    Controller::SoftPedal => format!("Soft Pedal {}", on_off(*value)),
                    Controller::Other(number) => format!(
                        "{} {}",
                        byte_line(*number),
                        byte_line(*value)
                    ),
                };
                format!("Control Channel {:02}: {}", channel, what)
            }
            Event::SystemExclusive(payload) => {
                let bytes: Vec<String> = payload.iter().map(|b| format!("{:02X}", b)).collect();
                format!("System exclusive message: [{}]", bytes.join(" "))
            }
            Event::UnknownByte(b) => byte_line(*b),
        }
    }
}

fn on_off(value: u8) -> &'static str {
    if value > SWITCH_THRESHOLD {
        "on"
    } else {
        "off"
    }
}

fn byte_line(b: u8) -> String {
    format!("Byte {:02X} ({:03}, {:08b})", b, b, b)
}

// ═══════════════════════════════════════════════════════════════════════
// Decoder
// ═══════════════════════════════════════════════════════════════════════

/// Pull decoder over any byte source.
///
/// Wrap unbuffered sources (device files) in a `BufReader`; bytes are read
/// one at a time.
pub struct Decoder<R> {
    reader: R,
    /// Status byte that cut a message short, read again as the next status.
    pending: Option<u8>,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    /// Block until the next complete event is available.
    ///
    /// Active-sensing bytes are skipped silently. Stream failures are
    /// returned as-is; the decoder keeps no partial state across them.
    pub fn next_event(&mut self) -> Result<Event> {
        loop {
            let status = match self.read_byte()? {
                Some(b) => b,
                None => return Err(Error::EndOfStream),
            };

            if status == ACTIVE_SENSING {
                continue;
            }

            let channel = status & 0x0F;
            let event = match status & 0xF0 {
                NOTE_ON => {
                    let Some([pitch, velocity]) = self.read_args(status)? else {
                        return Ok(Event::UnknownByte(status));
                    };
                    Event::NoteOn { channel, pitch, velocity }
                }
                NOTE_OFF => {
                    let Some([pitch, velocity]) = self.read_args(status)? else {
                        return Ok(Event::UnknownByte(status));
                    };
                    Event::NoteOff { channel, pitch, velocity }
                }
                CONTROL_CHANGE => {
                    let Some([number, value]) = self.read_args(status)? else {
                        return Ok(Event::UnknownByte(status));
                    };
                    Event::ControlChange {
                        channel,
                        controller: Controller::from_number(number),
                        value,
                    }
                }
                _ if status == SYSTEM_EXCLUSIVE => self.read_exclusive()?,
                _ => Event::UnknownByte(status),
            };
            return Ok(event);
        }
    }

    /// The two data bytes of `status`, or `None` if a status byte shows up
    /// first. That byte is kept for the next call to `next_event`.
    fn read_args(&mut self, status: u8) -> Result<Option<[u8; 2]>> {
        let mut args = [0u8; 2];
        for arg in &mut args {
            let b = self.read_byte()?.ok_or(Error::Truncated { status })?;
            if b > MAX_DATA_BYTE {
                self.pending = Some(b);
                return Ok(None);
            }
            *arg = b;
        }
        Ok(Some(args))
    }

    fn read_exclusive(&mut self) -> Result<Event> {
        let mut payload = Vec::new();
        loop {
            match self.read_byte()? {
                Some(END_OF_EXCLUSIVE) => return Ok(Event::SystemExclusive(payload)),
                Some(b) => payload.push(b),
                None => {
                    return Err(Error::Truncated {
                        status: SYSTEM_EXCLUSIVE,
                    })
                }
            }
        }
    }

    /// `Ok(None)` on end of stream.
    fn read_byte(&mut self) -> Result<Option<u8>> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = Result<Event>;

    /// Yields events until the stream ends cleanly between messages.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Err(Error::EndOfStream) => None,
            other => Some(other),
        }
    }
}

/// Decode a complete in-memory byte sequence.
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<Event>> {
    Decoder::new(bytes).collect()
}
