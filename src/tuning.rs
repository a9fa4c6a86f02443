//! Tuning registry — named open-string tuning presets and note-name/MIDI
//! conversion.
//!
//! Presets cover the common catalog (standard, half/full step shifts, drop
//! tunings, open tunings, DADGAD); arbitrary custom tunings are supported
//! as long as they satisfy the six-string invariant.

use serde::{Deserialize, Serialize};

use crate::model::{ChordError, STRING_COUNT};

/// Default octave per string index (low E = 2 … high E = 4) used when
/// converting a preset's note names to absolute MIDI numbers.
pub const DEFAULT_OCTAVES: [i32; STRING_COUNT] = [2, 2, 3, 3, 3, 4];

/// A named tuning: one pitch-class name per open string, low to high.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGuitarTuning", rename_all = "camelCase")]
pub struct GuitarTuning {
    name: String,
    note_names: Vec<String>,
}

impl GuitarTuning {
    /// Build a custom tuning. Rejects anything that is not exactly six
    /// recognizable note names.
    pub fn new(name: impl Into<String>, note_names: Vec<String>) -> Result<Self, ChordError> {
        if note_names.len() != STRING_COUNT {
            return Err(ChordError::Validation(format!(
                "tuning needs {} open-string notes, got {}",
                STRING_COUNT,
                note_names.len()
            )));
        }
        if let Some(bad) = note_names.iter().find(|n| note_semitone(n).is_none()) {
            return Err(ChordError::Validation(format!(
                "unrecognized note name '{bad}' in tuning"
            )));
        }
        Ok(Self {
            name: name.into(),
            note_names,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open-string pitch-class names, low to high.
    pub fn note_names(&self) -> &[String] {
        &self.note_names
    }

    /// Absolute MIDI number of an open string, using the per-string default
    /// octaves. Indexes past the last string clamp to it.
    pub fn open_string_midi(&self, string_index: usize) -> i32 {
        let index = string_index.min(STRING_COUNT - 1);
        note_name_to_midi(&self.note_names[index], DEFAULT_OCTAVES[index])
    }

    /// Absolute MIDI numbers for all six open strings.
    pub fn midi_notes(&self) -> [i32; STRING_COUNT] {
        std::array::from_fn(|i| self.open_string_midi(i))
    }

    // Presets are built from literals that always satisfy the invariant.
    fn preset(name: &str, notes: [&str; STRING_COUNT]) -> Self {
        Self {
            name: name.to_string(),
            note_names: notes.iter().map(|n| n.to_string()).collect(),
        }
    }

    // ── Standard and basic variations ───────────────────────────────

    pub fn standard() -> Self {
        Self::preset("Standard", ["E", "A", "D", "G", "B", "E"])
    }

    pub fn half_step_down() -> Self {
        Self::preset("Half step down", ["E♭", "A♭", "D♭", "G♭", "B♭", "E♭"])
    }

    pub fn half_step_up() -> Self {
        Self::preset("Half step up", ["F", "A♯", "D♯", "G♯", "C", "F"])
    }

    pub fn full_step_down() -> Self {
        Self::preset("Full step down", ["D", "G", "C", "F", "A", "D"])
    }

    // ── Drop tunings ────────────────────────────────────────────────

    pub fn drop_d() -> Self {
        Self::preset("Drop D", ["D", "A", "D", "G", "B", "E"])
    }

    pub fn drop_c() -> Self {
        Self::preset("Drop C", ["C", "G", "C", "F", "A", "D"])
    }

    pub fn drop_c_sharp() -> Self {
        Self::preset("Drop C♯", ["C♯", "G♯", "C♯", "F♯", "A♯", "D♯"])
    }

    pub fn drop_c_sharp_alt() -> Self {
        Self::preset("Drop C♯ (Alt)", ["C♯", "A", "D", "G", "B", "E"])
    }

    pub fn drop_b() -> Self {
        Self::preset("Drop B", ["B", "G♭", "B", "E", "A♭", "D♭"])
    }

    pub fn drop_a() -> Self {
        Self::preset("Drop A", ["A", "E", "A", "D", "G♭", "B"])
    }

    // ── Open tunings ────────────────────────────────────────────────

    pub fn open_g() -> Self {
        Self::preset("Open G", ["D", "G", "D", "G", "B", "D"])
    }

    pub fn open_f() -> Self {
        Self::preset("Open F", ["F", "A", "C", "F", "C", "F"])
    }

    pub fn open_e() -> Self {
        Self::preset("Open E", ["E", "B", "E", "G♯", "B", "E"])
    }

    pub fn open_d() -> Self {
        Self::preset("Open D", ["D", "A", "D", "F♯", "A", "D"])
    }

    pub fn open_c() -> Self {
        Self::preset("Open C", ["C", "G", "C", "G", "C", "E"])
    }

    pub fn open_a() -> Self {
        Self::preset("Open A", ["E", "A", "E", "A", "C♯", "E"])
    }

    // ── Special tunings ─────────────────────────────────────────────

    pub fn dadgad() -> Self {
        Self::preset("DADGAD", ["D", "A", "D", "G", "A", "D"])
    }

    /// The full preset catalog, for picker/menu use.
    pub fn presets() -> Vec<GuitarTuning> {
        vec![
            Self::standard(),
            Self::half_step_down(),
            Self::half_step_up(),
            Self::full_step_down(),
            Self::drop_d(),
            Self::drop_c(),
            Self::drop_c_sharp(),
            Self::drop_c_sharp_alt(),
            Self::drop_b(),
            Self::drop_a(),
            Self::open_g(),
            Self::open_f(),
            Self::open_e(),
            Self::open_d(),
            Self::open_c(),
            Self::open_a(),
            Self::dadgad(),
        ]
    }
}

impl Default for GuitarTuning {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGuitarTuning {
    name: String,
    note_names: Vec<String>,
}

impl TryFrom<RawGuitarTuning> for GuitarTuning {
    type Error = ChordError;

    fn try_from(raw: RawGuitarTuning) -> Result<Self, Self::Error> {
        GuitarTuning::new(raw.name, raw.note_names)
    }
}

/// Pitch class (0–11) of a spelled note name. Accepts ASCII (`"C#"`,
/// `"Bb"`) and typographic (`"C♯"`, `"B♭"`) accidentals, including
/// stacked ones.
pub fn note_semitone(name: &str) -> Option<i32> {
    let mut chars = name.chars();
    let base = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    let mut semitone: i32 = base;
    for c in chars {
        match c {
            '♯' | '#' => semitone += 1,
            '♭' | 'b' => semitone -= 1,
            _ => return None,
        }
    }
    Some(semitone.rem_euclid(12))
}

/// Absolute MIDI number of a spelled note name at a given octave
/// (`midi = (octave + 1) * 12 + semitone`). Unknown names fall back to C,
/// matching catalog behavior; validated tunings never hit the fallback.
pub fn note_name_to_midi(name: &str, octave: i32) -> i32 {
    (octave + 1) * 12 + note_semitone(name).unwrap_or(0)
}
