//! Shared ratios for chord-diagram geometry (all relative to the computed
//! scale; the layout has no absolute units).

/// Gaps between the six strings.
pub(super) const STRING_GAPS: usize = 5;
/// Fret rows shown in the grid.
pub(super) const FRET_ROWS: usize = 5;

// ── Overall proportions ─────────────────────────────────────────────
pub(super) const NAME_HEIGHT_MULTIPLIER: f64 = 1.3; // header region reserved
pub(super) const PLAIN_HEIGHT_MULTIPLIER: f64 = 1.2;
pub(super) const NAME_MARGIN_FACTOR: f64 = 2.8; // fret margins when the name is shown
pub(super) const PLAIN_MARGIN_FACTOR: f64 = 2.0;
pub(super) const NAME_ORIGIN_FACTOR: f64 = 1.2; // grid y-offset under the name
pub(super) const NAME_BASELINE_FACTOR: f64 = 0.35;

// ── Line weights ────────────────────────────────────────────────────
pub(super) const THIN_LINE_DIVISOR: f64 = 24.0;
pub(super) const NUT_LINE_DIVISOR: f64 = 5.0;

// ── Markers ─────────────────────────────────────────────────────────
pub(super) const DOT_RADIUS_RATIO: f64 = 0.35;
pub(super) const MARKER_SIZE_RATIO: f64 = 0.33; // ring / cross above the nut
pub(super) const MARKER_RAISE_RATIO: f64 = 1.6;

// ── Barre bars ──────────────────────────────────────────────────────
pub(super) const BARRE_THICKNESS_RATIO: f64 = 0.65;
pub(super) const BARRE_END_INSET_DIVISOR: f64 = 7.0;

// ── Text ────────────────────────────────────────────────────────────
pub(super) const FRET_NUMBER_SIZE_RATIO: f64 = 0.5;
pub(super) const ACCIDENTAL_LABEL_SCALE: f64 = 0.75;
pub(super) const FALLBACK_LABEL_SCALE: f64 = 0.8;
