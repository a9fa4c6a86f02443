//! Music-theory annotations: pitch naming, enharmonic spelling policy and
//! scale-degree (chord function) analysis.
//!
//! Everything here is a pure lookup or closed-form arithmetic over a
//! validated [`ChordRecord`]; nothing fails, blocks or allocates beyond the
//! returned strings.

use crate::model::{ChordRecord, Key, Suffix, SuffixGroup};
use crate::tuning::{note_semitone, GuitarTuning};

/// Sharp spellings of the 12 pitch classes, C upward.
const SHARP_NAMES: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

/// Flat spellings of the 12 pitch classes, C upward.
const FLAT_NAMES: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

// ═══════════════════════════════════════════════════════════════════════
// Note naming
// ═══════════════════════════════════════════════════════════════════════

/// Absolute MIDI number of a fretted position, or `None` for a muted string
/// (muted strings have no pitch).
pub fn fretted_midi(
    tuning: &GuitarTuning,
    string_index: usize,
    base_fret: i32,
    fret: i32,
) -> Option<i32> {
    if fret == -1 {
        return None;
    }
    Some(tuning.open_string_midi(string_index) + (base_fret - 1) + fret)
}

/// Spelled note name with octave, e.g. `"C♯4"` or `"D♭4"` depending on
/// `use_flats`.
pub fn midi_to_note_name(midi: i32, use_flats: bool) -> String {
    let semitone = midi.rem_euclid(12) as usize;
    let octave = midi.div_euclid(12) - 1;
    let name = if use_flats {
        FLAT_NAMES[semitone]
    } else {
        SHARP_NAMES[semitone]
    };
    format!("{name}{octave}")
}

/// Enharmonic-spelling policy: sharp-family keys spell sharps, flat-family
/// keys spell flats. C is flat-spelled only for minor/diminished qualities
/// (C minor sits in the E♭-major orbit); anything else defaults to sharps.
pub fn should_use_flats(key: Key, group: SuffixGroup) -> bool {
    match key {
        Key::G | Key::D | Key::A | Key::E | Key::B | Key::FSharp | Key::CSharp => false,
        Key::F | Key::BFlat | Key::EFlat | Key::AFlat | Key::DFlat | Key::GFlat => true,
        Key::C => group == SuffixGroup::Minor || group == SuffixGroup::Diminished,
        _ => false,
    }
}

/// Spelled note names (with octave) for every string of a voicing; `None`
/// for muted strings. `use_flats: Some(v)` overrides the key-based policy,
/// `None` applies it.
pub fn string_notes(
    chord: &ChordRecord,
    tuning: &GuitarTuning,
    use_flats: Option<bool>,
) -> Vec<Option<String>> {
    let flats =
        use_flats.unwrap_or_else(|| should_use_flats(chord.key(), chord.suffix().group()));
    chord
        .frets()
        .iter()
        .enumerate()
        .map(|(string_index, &fret)| {
            fretted_midi(tuning, string_index, chord.base_fret(), fret)
                .map(|midi| midi_to_note_name(midi, flats))
        })
        .collect()
}

/// Like [`string_notes`] but with the octave suffix stripped.
pub fn note_names_only(
    chord: &ChordRecord,
    tuning: &GuitarTuning,
    use_flats: Option<bool>,
) -> Vec<Option<String>> {
    string_notes(chord, tuning, use_flats)
        .into_iter()
        .map(|name| name.map(|n| strip_octave(&n).to_string()))
        .collect()
}

/// Drop the trailing octave number (possibly negative) from a spelled note.
fn strip_octave(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit() || c == '-')
}

// ═══════════════════════════════════════════════════════════════════════
// Scale-degree analysis
// ═══════════════════════════════════════════════════════════════════════

/// Label for the role a note plays relative to a chord's root, e.g. `"R"`,
/// `"♭7"`, `"9"`. Total over all intervals; several intervals are
/// context-sensitive on the suffix's group and feature flags.
pub fn scale_degree(note: &str, root: &str, suffix: Suffix) -> &'static str {
    let note_semi = note_semitone(note).unwrap_or(0);
    let root_semi = note_semitone(root).unwrap_or(0);
    let interval = (note_semi - root_semi).rem_euclid(12);
    interval_label(interval, suffix)
}

fn interval_label(interval: i32, suffix: Suffix) -> &'static str {
    let group = suffix.group();
    match interval {
        0 => "R",
        1 => "♭2",
        2 => {
            if suffix.is_extended() {
                "9"
            } else {
                "2"
            }
        }
        3 => {
            if group == SuffixGroup::Minor || group == SuffixGroup::Diminished {
                "♭3"
            } else if suffix.is_extended() && suffix.has_sharp_nine() {
                "♯9"
            } else {
                "♯2"
            }
        }
        4 => "3",
        5 => {
            if suffix.is_extended() && suffix.has_eleventh() {
                "11"
            } else {
                "4"
            }
        }
        6 => {
            if group == SuffixGroup::Diminished {
                "♭5"
            } else if group == SuffixGroup::Augmented {
                "♯5"
            } else if suffix.is_extended() && suffix.has_sharp_eleventh() {
                "♯11"
            } else {
                "♭5"
            }
        }
        7 => "5",
        8 => {
            if group == SuffixGroup::Augmented {
                "♯5"
            } else {
                "♭6"
            }
        }
        9 => {
            if suffix.is_extended() && suffix.has_thirteenth() {
                "13"
            } else {
                "6"
            }
        }
        10 => {
            if suffix.has_seventh() {
                "♭7"
            } else if suffix.is_extended() && suffix.has_flat_nine() {
                "♭9"
            } else {
                "♯6"
            }
        }
        11 => {
            if suffix.has_major_seventh() {
                "7"
            } else {
                "♭7"
            }
        }
        // Unreachable under mod-12 arithmetic.
        _ => "?",
    }
}

/// Scale-degree label for every string of a voicing; `None` for muted
/// strings. The root spelling comes from the chord key's symbol form.
pub fn scale_degrees(chord: &ChordRecord, tuning: &GuitarTuning) -> Vec<Option<&'static str>> {
    let root = chord.key().symbol();
    note_names_only(chord, tuning, None)
        .into_iter()
        .map(|name| name.map(|n| scale_degree(&n, root, chord.suffix())))
        .collect()
}
