//! MIDI device plumbing: discovery, the blocking reader loop, and the
//! line-oriented secondary input.

use std::fs;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use crossbeam_channel::{Receiver, Sender};

use crate::error::{Error, Result};
use crate::midi::Decoder;
use crate::session::{Input, KeyAction};

/// Device nodes whose name starts with this are MIDI ports.
pub const DEVICE_PREFIX: &str = "midi";

/// First entry of `dir` (by name) that looks like a MIDI device node.
pub fn find_midi_device(dir: &Path) -> Result<PathBuf> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(DEVICE_PREFIX))
        .collect();
    names.sort();

    names
        .into_iter()
        .next()
        .map(|name| dir.join(name))
        .ok_or_else(|| Error::DeviceNotFound(dir.to_path_buf()))
}

/// Read events until the stream fails or the consumer goes away.
///
/// Before each decode step any injected byte strings are written to the
/// device first. Note messages are echoed with `echo_velocity` when set.
/// Returns `Ok(())` only if the receiving end of `inputs` was dropped.
pub fn run_reader<R: Read, W: Write>(
    decoder: &mut Decoder<R>,
    device: &mut W,
    injected: &Receiver<Vec<u8>>,
    inputs: &Sender<Input>,
    echo_velocity: Option<u8>,
) -> Result<()> {
    loop {
        for bytes in injected.try_iter() {
            log::debug!("Writing {} injected bytes", bytes.len());
            device.write_all(&bytes)?;
        }

        let event = decoder.next_event()?;

        if let Some(velocity) = echo_velocity {
            if let Some(bytes) = event.echo_bytes(velocity) {
                device.write_all(&bytes)?;
            }
        }

        if inputs.send(Input::Midi(event)).is_err() {
            return Ok(());
        }
    }
}

/// A line typed on the secondary input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Key(KeyAction),
    /// Raw bytes to send to the device.
    Write(Vec<u8>),
    Empty,
}

/// `+`, `-` and `f` adjust the key signature; anything else is read as
/// space-separated hex bytes.
pub fn parse_line(line: &str) -> Result<LineCommand> {
    let line = line.trim();
    let command = match line {
        "" => LineCommand::Empty,
        "+" => LineCommand::Key(KeyAction::AddAccidental),
        "-" => LineCommand::Key(KeyAction::RemoveAccidental),
        "f" | "F" => LineCommand::Key(KeyAction::ToggleAccidentals),
        _ => LineCommand::Write(parse_hex_bytes(line)?),
    };
    Ok(command)
}

pub fn parse_hex_bytes(line: &str) -> Result<Vec<u8>> {
    line.split_whitespace()
        .map(|token| {
            u8::from_str_radix(token, 16).map_err(|_| Error::InvalidHex {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Route every line of `source` until it closes.
pub fn run_line_input<B: BufRead>(
    source: B,
    injected: &Sender<Vec<u8>>,
    inputs: &Sender<Input>,
) -> Result<()> {
    for line in source.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(LineCommand::Key(action)) => {
                if inputs.send(Input::Key(action)).is_err() {
                    break;
                }
            }
            Ok(LineCommand::Write(bytes)) => {
                if injected.send(bytes).is_err() {
                    break;
                }
            }
            Ok(LineCommand::Empty) => {}
            Err(e) => log::warn!("Ignoring input line {:?}: {}", line, e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lines() {
        assert_eq!(
            parse_line("90 3C 7f").unwrap(),
            LineCommand::Write(vec![0x90, 0x3C, 0x7F])
        );
        assert_eq!(parse_line("  ").unwrap(), LineCommand::Empty);
        assert_eq!(
            parse_line("+").unwrap(),
            LineCommand::Key(KeyAction::AddAccidental)
        );
        assert!(matches!(
            parse_line("90 zz"),
            Err(Error::InvalidHex { token }) if token == "zz"
        ));
    }

    #[test]
    fn discovery_picks_first_midi_node() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["snd", "midi3", "midi1", "tty0"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        assert_eq!(find_midi_device(dir.path()).unwrap(), dir.path().join("midi1"));
    }

    #[test]
    fn discovery_reports_missing_device() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_midi_device(dir.path()),
            Err(Error::DeviceNotFound(_))
        ));
    }
}
