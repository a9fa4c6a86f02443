//! Data model for chord voicings: keys, chord qualities and fingering records.
//!
//! A [`ChordRecord`] captures one voicing from a chord library (or user
//! input) and is validated once at construction; everything derived from it
//! downstream is closed-form arithmetic that cannot fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of strings on the instrument. Every per-string sequence in a
/// record must have exactly this length.
pub const STRING_COUNT: usize = 6;

/// Errors raised at the decode/validation boundary. Geometry computation
/// itself never fails for valid records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// A record whose fingering data violates an invariant.
    #[error("invalid chord record: {0}")]
    Validation(String),
    /// An unrecognized key raw value.
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    /// An unrecognized suffix raw value.
    #[error("unknown suffix '{0}'")]
    UnknownSuffix(String),
    /// Malformed input at the serialization boundary.
    #[error("chord decode error: {0}")]
    Decode(String),
}

// ═══════════════════════════════════════════════════════════════════════
// Key
// ═══════════════════════════════════════════════════════════════════════

/// Chord root: one of the 12 pitch classes, with distinct flat/sharp
/// spelling variants (`C♯` and `D♭` are different keys to the caller even
/// though they share a semitone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
    A,
    ASharp,
    BFlat,
    B,
}

impl Key {
    /// Raw catalog spelling, e.g. `"C#"`, `"Eb"`.
    pub fn raw(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::CSharp => "C#",
            Key::DFlat => "Db",
            Key::D => "D",
            Key::DSharp => "D#",
            Key::EFlat => "Eb",
            Key::E => "E",
            Key::F => "F",
            Key::FSharp => "F#",
            Key::GFlat => "Gb",
            Key::G => "G",
            Key::GSharp => "G#",
            Key::AFlat => "Ab",
            Key::A => "A",
            Key::ASharp => "A#",
            Key::BFlat => "Bb",
            Key::B => "B",
        }
    }

    /// Spelled-out form for accessibility, e.g. `"C sharp"`.
    pub fn accessible(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::CSharp => "C sharp",
            Key::DFlat => "D flat",
            Key::D => "D",
            Key::DSharp => "D sharp",
            Key::EFlat => "E flat",
            Key::E => "E",
            Key::F => "F",
            Key::FSharp => "F sharp",
            Key::GFlat => "G flat",
            Key::G => "G",
            Key::GSharp => "G sharp",
            Key::AFlat => "A flat",
            Key::A => "A",
            Key::ASharp => "A sharp",
            Key::BFlat => "B flat",
            Key::B => "B",
        }
    }

    /// Typographic form with proper accidental glyphs, e.g. `"C♯"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::CSharp => "C♯",
            Key::DFlat => "D♭",
            Key::D => "D",
            Key::DSharp => "D♯",
            Key::EFlat => "E♭",
            Key::E => "E",
            Key::F => "F",
            Key::FSharp => "F♯",
            Key::GFlat => "G♭",
            Key::G => "G",
            Key::GSharp => "G♯",
            Key::AFlat => "A♭",
            Key::A => "A",
            Key::ASharp => "A♯",
            Key::BFlat => "B♭",
            Key::B => "B",
        }
    }

    /// Pitch class in semitones above C.
    pub fn semitone(self) -> i32 {
        match self {
            Key::C => 0,
            Key::CSharp | Key::DFlat => 1,
            Key::D => 2,
            Key::DSharp | Key::EFlat => 3,
            Key::E => 4,
            Key::F => 5,
            Key::FSharp | Key::GFlat => 6,
            Key::G => 7,
            Key::GSharp | Key::AFlat => 8,
            Key::A => 9,
            Key::ASharp | Key::BFlat => 10,
            Key::B => 11,
        }
    }

    /// All keys, in chromatic order (flat variants after their sharp twin).
    pub fn all() -> &'static [Key] {
        &[
            Key::C,
            Key::CSharp,
            Key::DFlat,
            Key::D,
            Key::DSharp,
            Key::EFlat,
            Key::E,
            Key::F,
            Key::FSharp,
            Key::GFlat,
            Key::G,
            Key::GSharp,
            Key::AFlat,
            Key::A,
            Key::ASharp,
            Key::BFlat,
            Key::B,
        ]
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw())
    }
}

impl std::str::FromStr for Key {
    type Err = ChordError;

    /// Accepts both ASCII (`"C#"`, `"Eb"`) and typographic (`"C♯"`, `"E♭"`)
    /// spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "C" => Key::C,
            "C#" | "C♯" => Key::CSharp,
            "Db" | "D♭" => Key::DFlat,
            "D" => Key::D,
            "D#" | "D♯" => Key::DSharp,
            "Eb" | "E♭" => Key::EFlat,
            "E" => Key::E,
            "F" => Key::F,
            "F#" | "F♯" => Key::FSharp,
            "Gb" | "G♭" => Key::GFlat,
            "G" => Key::G,
            "G#" | "G♯" => Key::GSharp,
            "Ab" | "A♭" => Key::AFlat,
            "A" => Key::A,
            "A#" | "A♯" => Key::ASharp,
            "Bb" | "B♭" => Key::BFlat,
            "B" => Key::B,
            _ => return Err(ChordError::UnknownKey(s.to_string())),
        };
        Ok(key)
    }
}

impl TryFrom<String> for Key {
    type Error = ChordError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> String {
        key.raw().to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Suffix
// ═══════════════════════════════════════════════════════════════════════

/// Broad quality group of a suffix. Used by the enharmonic-spelling policy
/// and by the scale-degree overrides for the triad intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuffixGroup {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant,
    Extended,
    Other,
}

/// Chord quality identifier, as found in chord-library catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Suffix {
    Major,
    Minor,
    Five,
    Dim,
    DimSeven,
    SusTwo,
    SusFour,
    SevenSusFour,
    Altered,
    Aug,
    Six,
    SixNine,
    Seven,
    SevenFlatFive,
    SevenSharpFive,
    AugSeven,
    Nine,
    AugNine,
    SevenFlatNine,
    SevenSharpNine,
    Eleven,
    NineSharpEleven,
    Thirteen,
    MajorSeven,
    MajorSevenFlatFive,
    MajorSevenSharpFive,
    MajorNine,
    MajorEleven,
    MajorThirteen,
    AddNine,
    MinorSix,
    MinorSixNine,
    MinorSeven,
    MinorSevenFlatFive,
    MinorAddNine,
    MinorNine,
    MinorEleven,
    MinorMajorSeven,
    MinorMajorSevenFlatFive,
    MinorMajorNine,
    MinorMajorEleven,
}

impl Suffix {
    /// Raw catalog value, e.g. `"m7b5"`.
    pub fn raw(self) -> &'static str {
        match self {
            Suffix::Major => "major",
            Suffix::Minor => "minor",
            Suffix::Five => "5",
            Suffix::Dim => "dim",
            Suffix::DimSeven => "dim7",
            Suffix::SusTwo => "sus2",
            Suffix::SusFour => "sus4",
            Suffix::SevenSusFour => "7sus4",
            Suffix::Altered => "alt",
            Suffix::Aug => "aug",
            Suffix::Six => "6",
            Suffix::SixNine => "6/9",
            Suffix::Seven => "7",
            Suffix::SevenFlatFive => "7b5",
            Suffix::SevenSharpFive => "7#5",
            Suffix::AugSeven => "aug7",
            Suffix::Nine => "9",
            Suffix::AugNine => "aug9",
            Suffix::SevenFlatNine => "7b9",
            Suffix::SevenSharpNine => "7#9",
            Suffix::Eleven => "11",
            Suffix::NineSharpEleven => "9#11",
            Suffix::Thirteen => "13",
            Suffix::MajorSeven => "maj7",
            Suffix::MajorSevenFlatFive => "maj7b5",
            Suffix::MajorSevenSharpFive => "maj7#5",
            Suffix::MajorNine => "maj9",
            Suffix::MajorEleven => "maj11",
            Suffix::MajorThirteen => "maj13",
            Suffix::AddNine => "add9",
            Suffix::MinorSix => "m6",
            Suffix::MinorSixNine => "m6/9",
            Suffix::MinorSeven => "m7",
            Suffix::MinorSevenFlatFive => "m7b5",
            Suffix::MinorAddNine => "madd9",
            Suffix::MinorNine => "m9",
            Suffix::MinorEleven => "m11",
            Suffix::MinorMajorSeven => "mmaj7",
            Suffix::MinorMajorSevenFlatFive => "mmaj7b5",
            Suffix::MinorMajorNine => "mmaj9",
            Suffix::MinorMajorEleven => "mmaj11",
        }
    }

    /// Abbreviated form, e.g. `"maj"`, `"min7"`.
    pub fn short(self) -> &'static str {
        match self {
            Suffix::Major => "maj",
            Suffix::Minor => "min",
            Suffix::MinorSix => "min6",
            Suffix::MinorSixNine => "min6/9",
            Suffix::MinorSeven => "min7",
            Suffix::MinorSevenFlatFive => "min7b5",
            Suffix::MinorAddNine => "minadd9",
            Suffix::MinorNine => "min9",
            Suffix::MinorEleven => "min11",
            Suffix::MinorMajorSeven => "minmaj7",
            Suffix::MinorMajorSevenFlatFive => "minmaj7b5",
            Suffix::MinorMajorNine => "minmaj9",
            Suffix::MinorMajorEleven => "minmaj11",
            other => other.raw(),
        }
    }

    /// Typographic form with proper accidental and quality glyphs.
    pub fn symbolized(self) -> &'static str {
        match self {
            Suffix::Major => "",
            Suffix::Minor => "m",
            Suffix::Dim => "°",
            Suffix::DimSeven => "°7",
            Suffix::Aug => "+",
            Suffix::AugSeven => "+7",
            Suffix::AugNine => "+9",
            Suffix::SevenFlatFive => "7♭5",
            Suffix::SevenSharpFive => "7♯5",
            Suffix::SevenFlatNine => "7♭9",
            Suffix::SevenSharpNine => "7♯9",
            Suffix::NineSharpEleven => "9♯11",
            Suffix::MajorSeven => "M7",
            Suffix::MajorSevenFlatFive => "M7♭5",
            Suffix::MajorSevenSharpFive => "M7♯5",
            Suffix::MajorNine => "M9",
            Suffix::MajorEleven => "M11",
            Suffix::MajorThirteen => "M13",
            Suffix::MinorSevenFlatFive => "m7♭5",
            Suffix::MinorMajorSeven => "mM7",
            Suffix::MinorMajorSevenFlatFive => "mM7♭5",
            Suffix::MinorMajorNine => "mM9",
            Suffix::MinorMajorEleven => "mM11",
            other => other.raw(),
        }
    }

    /// Alternate symbolic form (jazz shorthand), e.g. `"Δ7"`, `"-7"`, `"ø7"`.
    pub fn alt_symbol(self) -> &'static str {
        match self {
            Suffix::Major => "M",
            Suffix::Minor => "-",
            Suffix::Dim => "o",
            Suffix::DimSeven => "o7",
            Suffix::AugSeven => "7♯5",
            Suffix::AugNine => "9♯5",
            Suffix::MajorSeven => "Δ7",
            Suffix::MajorSevenFlatFive => "Δ7♭5",
            Suffix::MajorSevenSharpFive => "Δ7♯5",
            Suffix::MajorNine => "Δ9",
            Suffix::MajorEleven => "Δ11",
            Suffix::MajorThirteen => "Δ13",
            Suffix::MinorSix => "-6",
            Suffix::MinorSixNine => "-6/9",
            Suffix::MinorSeven => "-7",
            Suffix::MinorSevenFlatFive => "ø7",
            Suffix::MinorAddNine => "-add9",
            Suffix::MinorNine => "-9",
            Suffix::MinorEleven => "-11",
            Suffix::MinorMajorSeven => "-Δ7",
            Suffix::MinorMajorSevenFlatFive => "-Δ7♭5",
            Suffix::MinorMajorNine => "-Δ9",
            Suffix::MinorMajorEleven => "-Δ11",
            other => other.symbolized(),
        }
    }

    /// The single quality group this suffix belongs to.
    pub fn group(self) -> SuffixGroup {
        use Suffix::*;
        match self {
            Major | Six | SixNine | AddNine | MajorSeven | MajorSevenFlatFive
            | MajorSevenSharpFive | MajorNine | MajorEleven | MajorThirteen => SuffixGroup::Major,
            Minor | MinorSix | MinorSixNine | MinorSeven | MinorSevenFlatFive | MinorAddNine
            | MinorNine | MinorEleven | MinorMajorSeven | MinorMajorSevenFlatFive
            | MinorMajorNine | MinorMajorEleven => SuffixGroup::Minor,
            Dim | DimSeven => SuffixGroup::Diminished,
            Aug | AugSeven | AugNine => SuffixGroup::Augmented,
            Seven | SevenFlatFive | SevenSharpFive | SevenSusFour => SuffixGroup::Dominant,
            Nine | SevenFlatNine | SevenSharpNine | Eleven | NineSharpEleven | Thirteen => {
                SuffixGroup::Extended
            }
            Five | SusTwo | SusFour | Altered => SuffixGroup::Other,
        }
    }

    /// Whether the chord carries a ninth or higher extension. Orthogonal to
    /// [`group`](Self::group): an `m9` is in the minor group (its third is
    /// still a ♭3) and extended at the same time (its second is a 9).
    pub fn is_extended(self) -> bool {
        use Suffix::*;
        matches!(
            self,
            Nine | AugNine
                | SevenFlatNine
                | SevenSharpNine
                | MajorNine
                | MinorNine
                | Eleven
                | NineSharpEleven
                | MajorEleven
                | MinorEleven
                | MinorMajorNine
                | MinorMajorEleven
                | Thirteen
                | MajorThirteen
        )
    }

    /// Contains a minor seventh.
    pub fn has_seventh(self) -> bool {
        use Suffix::*;
        matches!(
            self,
            Seven
                | SevenFlatFive
                | SevenSharpFive
                | SevenSusFour
                | AugSeven
                | SevenFlatNine
                | SevenSharpNine
                | MinorSeven
                | MinorSevenFlatFive
                | MinorMajorSeven
                | MinorMajorSevenFlatFive
        )
    }

    /// Contains a major seventh.
    pub fn has_major_seventh(self) -> bool {
        use Suffix::*;
        matches!(
            self,
            MajorSeven
                | MajorSevenFlatFive
                | MajorSevenSharpFive
                | MinorMajorSeven
                | MinorMajorSevenFlatFive
        )
    }

    pub fn has_sharp_nine(self) -> bool {
        self == Suffix::SevenSharpNine
    }

    pub fn has_flat_nine(self) -> bool {
        self == Suffix::SevenFlatNine
    }

    pub fn has_eleventh(self) -> bool {
        use Suffix::*;
        matches!(
            self,
            Eleven | NineSharpEleven | MajorEleven | MinorEleven | MinorMajorEleven
        )
    }

    pub fn has_sharp_eleventh(self) -> bool {
        self == Suffix::NineSharpEleven
    }

    pub fn has_thirteenth(self) -> bool {
        matches!(self, Suffix::Thirteen | Suffix::MajorThirteen)
    }

    /// All suffixes, catalog order.
    pub fn all() -> &'static [Suffix] {
        use Suffix::*;
        &[
            Major,
            Minor,
            Five,
            Dim,
            DimSeven,
            SusTwo,
            SusFour,
            SevenSusFour,
            Altered,
            Aug,
            Six,
            SixNine,
            Seven,
            SevenFlatFive,
            SevenSharpFive,
            AugSeven,
            Nine,
            AugNine,
            SevenFlatNine,
            SevenSharpNine,
            Eleven,
            NineSharpEleven,
            Thirteen,
            MajorSeven,
            MajorSevenFlatFive,
            MajorSevenSharpFive,
            MajorNine,
            MajorEleven,
            MajorThirteen,
            AddNine,
            MinorSix,
            MinorSixNine,
            MinorSeven,
            MinorSevenFlatFive,
            MinorAddNine,
            MinorNine,
            MinorEleven,
            MinorMajorSeven,
            MinorMajorSevenFlatFive,
            MinorMajorNine,
            MinorMajorEleven,
        ]
    }
}

impl std::fmt::Display for Suffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw())
    }
}

impl std::str::FromStr for Suffix {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suffix::all()
            .iter()
            .copied()
            .find(|suffix| suffix.raw() == s)
            .ok_or_else(|| ChordError::UnknownSuffix(s.to_string()))
    }
}

impl TryFrom<String> for Suffix {
    type Error = ChordError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Suffix> for String {
    fn from(suffix: Suffix) -> String {
        suffix.raw().to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ChordRecord
// ═══════════════════════════════════════════════════════════════════════

/// One chord voicing: which fret and finger touches each string, plus the
/// chord's identity. Immutable after construction (only the informational
/// capo flag may be toggled; it does not affect geometry).
///
/// Invariants, enforced by [`ChordRecord::new`]:
/// - `frets` and `fingers` both have exactly [`STRING_COUNT`] entries
/// - every fret is `-1` (muted), `0` (open) or positive (relative to
///   `base_fret`)
/// - `base_fret >= 1`
/// - every barre value appears among the fretted (`>= 1`) fret values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChordRecord", into = "RawChordRecord")]
pub struct ChordRecord {
    frets: Vec<i32>,
    fingers: Vec<i32>,
    base_fret: i32,
    barres: Vec<i32>,
    capo: Option<bool>,
    midi: Vec<i32>,
    key: Key,
    suffix: Suffix,
}

impl ChordRecord {
    /// Validate and construct a record. An invalid record is rejected here,
    /// at the boundary — never patched.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        frets: Vec<i32>,
        fingers: Vec<i32>,
        base_fret: i32,
        barres: Vec<i32>,
        capo: Option<bool>,
        midi: Vec<i32>,
        key: Key,
        suffix: Suffix,
    ) -> Result<Self, ChordError> {
        if frets.len() != STRING_COUNT {
            return Err(ChordError::Validation(format!(
                "expected {} frets, got {}",
                STRING_COUNT,
                frets.len()
            )));
        }
        if fingers.len() != STRING_COUNT {
            return Err(ChordError::Validation(format!(
                "expected {} fingers, got {}",
                STRING_COUNT,
                fingers.len()
            )));
        }
        if let Some(&bad) = frets.iter().find(|&&f| f < -1) {
            return Err(ChordError::Validation(format!(
                "fret value {bad} out of domain (-1 = muted, 0 = open, >= 1 fretted)"
            )));
        }
        if base_fret < 1 {
            return Err(ChordError::Validation(format!(
                "base fret must be >= 1, got {base_fret}"
            )));
        }
        if let Some(&bad) = barres.iter().find(|&&b| b < 1 || !frets.contains(&b)) {
            return Err(ChordError::Validation(format!(
                "barre at fret {bad} has no matching fretted string"
            )));
        }

        Ok(Self {
            frets,
            fingers,
            base_fret,
            barres,
            capo,
            midi,
            key,
            suffix,
        })
    }

    /// Per-string fret values, low string first.
    pub fn frets(&self) -> &[i32] {
        &self.frets
    }

    /// Per-string finger numbers (0 = no finger).
    pub fn fingers(&self) -> &[i32] {
        &self.fingers
    }

    /// Fret number the diagram's first row represents.
    pub fn base_fret(&self) -> i32 {
        self.base_fret
    }

    /// Fret values (relative, as they appear in `frets`) played with a barre.
    pub fn barres(&self) -> &[i32] {
        &self.barres
    }

    /// Informational capo flag; has no effect on computed geometry.
    pub fn capo(&self) -> Option<bool> {
        self.capo
    }

    /// Toggle the informational capo flag.
    pub fn set_capo(&mut self, capo: Option<bool>) {
        self.capo = capo;
    }

    /// Catalog-provided absolute MIDI numbers, one per sounding string.
    pub fn midi(&self) -> &[i32] {
        &self.midi
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }
}

/// Wire shape of a chord record as found in chord-library JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChordRecord {
    frets: Vec<i32>,
    fingers: Vec<i32>,
    base_fret: i32,
    barres: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capo: Option<bool>,
    #[serde(default)]
    midi: Vec<i32>,
    key: Key,
    suffix: Suffix,
}

impl TryFrom<RawChordRecord> for ChordRecord {
    type Error = ChordError;

    fn try_from(raw: RawChordRecord) -> Result<Self, Self::Error> {
        ChordRecord::new(
            raw.frets,
            raw.fingers,
            raw.base_fret,
            raw.barres,
            raw.capo,
            raw.midi,
            raw.key,
            raw.suffix,
        )
    }
}

impl From<ChordRecord> for RawChordRecord {
    fn from(record: ChordRecord) -> Self {
        RawChordRecord {
            frets: record.frets,
            fingers: record.fingers,
            base_fret: record.base_fret,
            barres: record.barres,
            capo: record.capo,
            midi: record.midi,
            key: record.key,
            suffix: record.suffix,
        }
    }
}
