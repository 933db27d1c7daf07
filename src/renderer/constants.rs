//! Shared constants for the frame renderer (all in SVG user units).

// ── Page ────────────────────────────────────────────────────────────
pub(super) const PAGE_WIDTH: f64 = 600.0;
pub(super) const PAGE_HEIGHT: f64 = 520.0;

// ── Staff dimensions ────────────────────────────────────────────────
pub(super) const STAFF_LINE_SPACING: f64 = 16.0; // distance between staff lines
pub(super) const HALF_SPACE: f64 = STAFF_LINE_SPACING / 2.0; // one diatonic step
pub(super) const MIDDLE_C_Y: f64 = 264.0; // C4 sits here; C8 lands near the top edge
pub(super) const STAFF_LINE_WIDTH: f64 = 1.5;
pub(super) const LEDGER_LINE_WIDTH: f64 = 1.5;
pub(super) const LEDGER_LINE_EXTEND: f64 = 6.0;

// ── Prefix ──────────────────────────────────────────────────────────
pub(super) const CLEF_X: f64 = 36.0;
pub(super) const CLEF_SIZE: f64 = 64.0;
pub(super) const KEY_SIG_X: f64 = 90.0;
pub(super) const KEY_SIG_SPACING: f64 = 14.0;
pub(super) const ACCIDENTAL_SIZE: f64 = 28.0;

// ── Note dimensions ─────────────────────────────────────────────────
pub(super) const NOTE_X: f64 = 300.0;
pub(super) const NOTEHEAD_RX: f64 = 9.0;
pub(super) const NOTEHEAD_RY: f64 = 6.5;
pub(super) const STEM_LENGTH: f64 = 3.5 * STAFF_LINE_SPACING;
pub(super) const SHIFTED_STEM_EXTRA: f64 = 0.25 * STAFF_LINE_SPACING;
pub(super) const STEM_WIDTH: f64 = 2.0;
pub(super) const SHIFT_STEP: f64 = 2.0 * NOTEHEAD_RX - STEM_WIDTH; // shifted heads sit across the stem
pub(super) const ACCIDENTAL_OFFSET: f64 = 1.5 * STAFF_LINE_SPACING;

// ── Pedal markings ──────────────────────────────────────────────────
pub(super) const PEDAL_Y: f64 = PAGE_HEIGHT - 24.0;
pub(super) const SUSTAIN_X: f64 = STAFF_LINE_SPACING / 2.0;
pub(super) const SOSTENUTO_X: f64 = 80.0;
pub(super) const SOFT_PEDAL_X: f64 = 160.0;
pub(super) const PEDAL_TEXT_SIZE: f64 = 20.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "#000000";
pub(super) const STAFF_COLOR: &str = "#FFFFFF";
pub(super) const NOTE_COLOR: &str = "#FFCB00";
