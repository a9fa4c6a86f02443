//! chordlib — guitar chord diagram layout library.
//!
//! Decodes chord fingering records from chord-library JSON, derives music
//! theory annotations (sounding notes, scale degrees), and lays each chord
//! out as a flat list of geometric primitives a renderer can paint in one
//! pass. No drawing happens here; the output is pure geometry plus text.
//!
//! # Example
//! ```
//! use chordlib::{layout, record_from_json, DiagramOptions, Rect};
//!
//! let record = record_from_json(
//!     r#"{
//!         "key": "C", "suffix": "major",
//!         "frets": [-1, 3, 2, 0, 1, 0],
//!         "fingers": [0, 3, 2, 0, 1, 0],
//!         "baseFret": 1, "barres": [], "midi": [48, 52, 55, 60, 64]
//!     }"#,
//! )
//! .unwrap();
//!
//! let diagram = layout(&record, Rect::new(120.0, 180.0), &DiagramOptions::default());
//! assert!(diagram.primitives.len() > 12);
//! ```

pub mod diagram;
pub mod model;
pub mod theory;
pub mod tuning;

pub use diagram::{
    layout, ChordNameOptions, Diagram, DiagramOptions, DisplayMode, KeyFormat, Primitive, Rect,
    SuffixFormat, TextLabel,
};
pub use model::{ChordError, ChordRecord, Key, Suffix, SuffixGroup};
pub use tuning::GuitarTuning;

/// Result of decoding a chord-library JSON array: the records that passed
/// validation plus the index and error of each rejected entry.
#[derive(Debug, Clone, Default)]
pub struct CatalogParse {
    pub records: Vec<ChordRecord>,
    pub rejected: Vec<(usize, ChordError)>,
}

/// Decode a JSON array of chord records.
///
/// Malformed or invalid entries are rejected individually and reported with
/// their array index; one bad record never poisons the rest of the catalog.
/// A top-level document that is not a JSON array is an error.
pub fn parse_catalog(json: &str) -> Result<CatalogParse, ChordError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| ChordError::Decode(e.to_string()))?;

    let mut parse = CatalogParse::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<ChordRecord>(entry) {
            Ok(record) => parse.records.push(record),
            Err(e) => {
                let error = ChordError::Decode(e.to_string());
                log::debug!("rejecting catalog entry {index}: {error}");
                parse.rejected.push((index, error));
            }
        }
    }
    Ok(parse)
}

/// Decode a single chord record from JSON.
pub fn record_from_json(json: &str) -> Result<ChordRecord, ChordError> {
    serde_json::from_str(json).map_err(|e| ChordError::Decode(e.to_string()))
}

/// Serialize a laid-out diagram to JSON, e.g. for a non-Rust renderer.
pub fn diagram_to_json(diagram: &Diagram) -> Result<String, ChordError> {
    serde_json::to_string(diagram).map_err(|e| ChordError::Decode(e.to_string()))
}
