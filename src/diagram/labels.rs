//! Display-text selection — which label each string's marker carries for a
//! given display mode.

use crate::model::ChordRecord;
use crate::theory::{note_names_only, scale_degrees};
use crate::tuning::GuitarTuning;

use super::DisplayMode;

/// The label to render per string, or `None` for muted strings (the
/// renderer draws a cross with no text regardless of mode).
///
/// `use_flats: Some(v)` forces an enharmonic spelling; `None` applies the
/// key-signature policy.
pub fn display_labels(
    chord: &ChordRecord,
    mode: DisplayMode,
    tuning: &GuitarTuning,
    use_flats: Option<bool>,
) -> Vec<Option<String>> {
    match mode {
        DisplayMode::Fingers => chord
            .frets()
            .iter()
            .zip(chord.fingers())
            .map(|(&fret, &finger)| (fret != -1).then(|| finger.to_string()))
            .collect(),
        DisplayMode::NotesNoOctave => note_names_only(chord, tuning, use_flats),
        DisplayMode::Functions => scale_degrees(chord, tuning)
            .into_iter()
            .map(|degree| degree.map(str::to_string))
            .collect(),
        DisplayMode::Blank => chord
            .frets()
            .iter()
            .map(|&fret| (fret != -1).then(String::new))
            .collect(),
    }
}
