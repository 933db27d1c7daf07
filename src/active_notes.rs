//! The set of currently sounding pitches.
//!
//! Releases are queued and only applied at the end of a frame, so a note that
//! is struck and released between two frames is still drawn once.

use crate::model::Pitch;

#[derive(Debug, Clone, Default)]
pub struct ActiveNotes {
    /// Sounding pitches. Arrival order until [`prepare_frame`](Self::prepare_frame)
    /// sorts them.
    active: Vec<Pitch>,
    pending_release: Vec<Pitch>,
}

impl ActiveNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_on(&mut self, pitch: Pitch) {
        // A key struck again before the frame ends keeps sounding.
        self.pending_release.retain(|&p| p != pitch);
        if !self.active.contains(&pitch) {
            self.active.push(pitch);
        }
    }

    pub fn note_off(&mut self, pitch: Pitch) {
        if !self.pending_release.contains(&pitch) {
            self.pending_release.push(pitch);
        }
    }

    /// Deduplicate and sort descending; the returned slice is what the layout
    /// engine reads for this frame.
    pub fn prepare_frame(&mut self) -> &[Pitch] {
        self.active.sort_unstable_by(|a, b| b.cmp(a));
        self.active.dedup();
        &self.active
    }

    /// Apply queued releases. Call once per frame after rendering.
    pub fn end_frame(&mut self) {
        if self.pending_release.is_empty() {
            return;
        }
        let released = std::mem::take(&mut self.pending_release);
        self.active.retain(|p| !released.contains(p));
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.active
    }

    pub fn pending_releases(&self) -> &[Pitch] {
        &self.pending_release
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
