//! Error type shared by the decoder, device plumbing and configuration.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended cleanly between two messages.
    #[error("end of MIDI stream")]
    EndOfStream,

    /// The stream ended while the arguments of `status` were being read.
    #[error("MIDI stream ended inside a message (status {status:02X})")]
    Truncated { status: u8 },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no MIDI device found in {0}")]
    DeviceNotFound(PathBuf),

    #[error("invalid hex byte {token:?} in input line")]
    InvalidHex { token: String },
}

pub type Result<T> = std::result::Result<T, Error>;
