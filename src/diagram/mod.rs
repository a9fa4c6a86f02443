//! Layout engine — converts a validated chord record plus presentation
//! options into an ordered list of geometric primitives.
//!
//! The engine computes its own grid geometry from the target rectangle
//! (string/fret line positions, margins, scale) and annotates each marker
//! with the label chosen by the display mode. Rendering the primitives —
//! colors, fonts, rasterization — is entirely the consumer's concern.

mod barre;
mod constants;
mod labels;
mod primitives;

use serde::{Deserialize, Serialize};

use crate::model::ChordRecord;
use crate::tuning::GuitarTuning;

use constants::*;

pub use labels::display_labels;
pub use primitives::{Diagram, LineConfig, Primitive, Rect, TextLabel};

// ═══════════════════════════════════════════════════════════════════════
// Options
// ═══════════════════════════════════════════════════════════════════════

/// What each string's marker displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Finger numbers (`0` for open where applicable).
    #[default]
    Fingers,
    /// Spelled note names with the octave stripped.
    NotesNoOctave,
    /// Scale-degree / function labels relative to the chord root.
    Functions,
    /// Plain dots, no glyph.
    Blank,
}

/// How the chord-name header spells the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyFormat {
    #[default]
    Raw,
    Accessible,
    Symbol,
}

/// How the chord-name header spells the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuffixFormat {
    #[default]
    Raw,
    Short,
    Symbolized,
    AltSymbol,
}

/// Chord-name header options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordNameOptions {
    /// Reserve the header region and emit the name primitive.
    pub show: bool,
    pub key_format: KeyFormat,
    pub suffix_format: SuffixFormat,
}

impl Default for ChordNameOptions {
    fn default() -> Self {
        Self {
            show: true,
            key_format: KeyFormat::Raw,
            suffix_format: SuffixFormat::Raw,
        }
    }
}

/// Presentation options for one diagram layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramOptions {
    /// Include per-string labels at all.
    pub show_fingers: bool,
    pub chord_name: ChordNameOptions,
    /// Renderer hint only: fixed ink color instead of appearance-adaptive.
    pub for_print: bool,
    /// Left-handed flip of dot/cross/barre x-coordinates.
    pub mirror: bool,
    /// Thicken the top line when `base_fret == 1`.
    pub show_nut: bool,
    pub display_mode: DisplayMode,
    /// Substitute tuning for MIDI/name derivation; `None` means standard.
    pub tuning: Option<GuitarTuning>,
    /// `Some(v)` forces flat (`true`) or sharp (`false`) spelling; `None`
    /// applies the key-signature policy.
    pub use_flats: Option<bool>,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            show_fingers: true,
            chord_name: ChordNameOptions::default(),
            for_print: false,
            mirror: false,
            show_nut: true,
            display_mode: DisplayMode::Fingers,
            tuning: None,
            use_flats: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════

/// Compute the diagram layout for a chord within a target rectangle.
///
/// Emission order: grid lines (with fret number when `base_fret > 1`),
/// barre bars, per-string markers, chord name. Never fails for a valid
/// record; a degenerate rectangle produces zero-size geometry.
pub fn layout(chord: &ChordRecord, rect: Rect, options: &DiagramOptions) -> Diagram {
    let standard;
    let tuning = match &options.tuning {
        Some(t) => t,
        None => {
            standard = GuitarTuning::standard();
            &standard
        }
    };

    let height_multiplier = if options.chord_name.show {
        NAME_HEIGHT_MULTIPLIER
    } else {
        PLAIN_HEIGHT_MULTIPLIER
    };
    let scale = (rect.height / height_multiplier).min(rect.width).max(0.0);
    let diagram_height = scale * height_multiplier;

    let string_margin = scale / 10.0;
    let fret_margin = diagram_height / 10.0;

    let fret_length = scale - string_margin * 2.0;
    let margin_factor = if options.chord_name.show {
        NAME_MARGIN_FACTOR
    } else {
        PLAIN_MARGIN_FACTOR
    };
    let string_length = diagram_height - fret_margin * margin_factor;

    let origin_y = if options.chord_name.show {
        fret_margin * NAME_ORIGIN_FACTOR
    } else {
        0.0
    };

    let fret_config = LineConfig {
        spacing: string_length / FRET_ROWS as f64,
        margin: fret_margin,
        length: fret_length,
        count: FRET_ROWS,
    };
    let string_config = LineConfig {
        spacing: fret_length / STRING_GAPS as f64,
        margin: string_margin,
        length: string_length,
        count: STRING_GAPS,
    };

    log::trace!(
        "layout {} {}: scale={scale:.1} grid={:.1}x{:.1}",
        chord.key(),
        chord.suffix(),
        fret_length,
        string_length
    );

    let mut primitives = Vec::new();

    emit_grid(&mut primitives, chord, options, &fret_config, &string_config, origin_y);
    emit_barres(&mut primitives, chord, options, rect, &fret_config, &string_config, origin_y);
    emit_markers(&mut primitives, chord, options, tuning, rect, &fret_config, &string_config, origin_y);

    if options.chord_name.show {
        emit_name(&mut primitives, chord, options, scale, &fret_config, origin_y);
    }

    Diagram {
        width: scale,
        height: diagram_height,
        for_print: options.for_print,
        primitives,
    }
}

/// Left-handed flip. Applied to dot, cross and barre x-coordinates only —
/// never to the grid, which a renderer flips independently if desired.
fn mirror_x(x: f64, mirror: bool, width: f64) -> f64 {
    if mirror {
        width - x
    } else {
        x
    }
}

// ── Grid ────────────────────────────────────────────────────────────

fn emit_grid(
    primitives: &mut Vec<Primitive>,
    chord: &ChordRecord,
    options: &DiagramOptions,
    fret_config: &LineConfig,
    string_config: &LineConfig,
    origin_y: f64,
) {
    // Strings
    for string in 0..=string_config.count {
        let x = string_config.spacing * string as f64 + string_config.margin;
        primitives.push(Primitive::Line {
            x1: x,
            y1: fret_config.margin + origin_y,
            x2: x,
            y2: string_config.length + fret_config.margin + origin_y,
            weight: string_config.spacing / THIN_LINE_DIVISOR,
        });
    }

    // Frets; the nut line is thick only at base fret 1 with the nut shown
    for fret in 0..=fret_config.count {
        let weight = if chord.base_fret() == 1 && fret == 0 && options.show_nut {
            fret_config.spacing / NUT_LINE_DIVISOR
        } else {
            fret_config.spacing / THIN_LINE_DIVISOR
        };
        let y = fret_config.spacing * fret as f64 + fret_config.margin + origin_y;
        primitives.push(Primitive::Line {
            x1: string_config.margin,
            y1: y,
            x2: fret_config.length + string_config.margin,
            y2: y,
            weight,
        });
    }

    // Fret number at the margin when the diagram starts above the nut
    if chord.base_fret() != 1 {
        primitives.push(Primitive::Text {
            x: string_config.margin / 5.0,
            y: origin_y + fret_config.spacing / 2.0 + fret_config.margin,
            size: fret_config.margin * FRET_NUMBER_SIZE_RATIO,
            text: chord.base_fret().to_string(),
        });
    }
}

// ── Barre bars ──────────────────────────────────────────────────────

fn emit_barres(
    primitives: &mut Vec<Primitive>,
    chord: &ChordRecord,
    options: &DiagramOptions,
    rect: Rect,
    fret_config: &LineConfig,
    string_config: &LineConfig,
    origin_y: f64,
) {
    for &barre in chord.barres() {
        let span = barre::resolve_span(chord.frets(), barre);

        let inset = string_config.spacing / BARRE_END_INSET_DIVISOR;
        let start_x = span.start as f64 * string_config.spacing + string_config.margin + inset;
        let end_x = start_x + string_config.spacing * span.length as f64
            - string_config.spacing
            - inset * 2.0;
        let y = barre as f64 * fret_config.spacing + fret_config.margin
            - fret_config.spacing / 2.0
            + origin_y;

        let mut x1 = mirror_x(start_x, options.mirror, rect.width);
        let mut x2 = mirror_x(end_x, options.mirror, rect.width);
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }

        // Finger number on the bar, in fingers mode only
        let label = if options.show_fingers && options.display_mode == DisplayMode::Fingers {
            chord
                .frets()
                .iter()
                .position(|&f| f == barre)
                .map(|index| TextLabel {
                    text: chord.fingers()[index].to_string(),
                    size: string_config.margin,
                })
        } else {
            None
        };

        primitives.push(Primitive::Bar {
            x1,
            x2,
            y,
            thickness: fret_config.spacing * BARRE_THICKNESS_RATIO,
            label,
        });
    }
}

// ── Per-string markers ──────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn emit_markers(
    primitives: &mut Vec<Primitive>,
    chord: &ChordRecord,
    options: &DiagramOptions,
    tuning: &GuitarTuning,
    rect: Rect,
    fret_config: &LineConfig,
    string_config: &LineConfig,
    origin_y: f64,
) {
    let labels = display_labels(chord, options.display_mode, tuning, options.use_flats);
    // In notes/functions modes every fretted string keeps its own label,
    // so barre suppression is disabled (the bar is still drawn underneath).
    let suppression_active = !matches!(
        options.display_mode,
        DisplayMode::NotesNoOctave | DisplayMode::Functions
    );

    for (index, &fret) in chord.frets().iter().enumerate() {
        let center_x = index as f64 * string_config.spacing + string_config.margin;
        let x = mirror_x(center_x, options.mirror, rect.width);

        // Open-string ring and muted cross sit above the nut
        let marker_size = fret_config.spacing * MARKER_SIZE_RATIO;
        let marker_y =
            fret_config.margin - marker_size * MARKER_RAISE_RATIO + marker_size / 2.0 + origin_y;

        if fret == 0 {
            primitives.push(Primitive::Circle {
                x,
                y: marker_y,
                radius: marker_size / 2.0,
                filled: false,
                label: None,
            });
            continue;
        }

        if fret == -1 {
            primitives.push(Primitive::Cross {
                x,
                y: marker_y,
                size: marker_size,
            });
            continue;
        }

        if chord.barres().contains(&fret)
            && suppression_active
            && barre::suppresses_dot(chord.frets(), index, fret)
        {
            continue;
        }

        let y = fret as f64 * fret_config.spacing + fret_config.margin
            - fret_config.spacing / 2.0
            + origin_y;

        let label = if options.show_fingers {
            labels[index]
                .as_ref()
                .filter(|text| !text.is_empty())
                .map(|text| TextLabel {
                    text: text.clone(),
                    size: label_size(text, string_config.margin),
                })
        } else {
            None
        };

        primitives.push(Primitive::Circle {
            x,
            y,
            radius: fret_config.spacing * DOT_RADIUS_RATIO,
            filled: true,
            label,
        });
    }
}

/// Label font size from text shape: full size for single glyphs, reduced
/// for two-glyph accidental names, reduced a little for anything longer.
fn label_size(text: &str, base: f64) -> f64 {
    let glyphs = text.chars().count();
    if glyphs <= 1 {
        base
    } else if glyphs == 2 && (text.contains('♭') || text.contains('♯')) {
        base * ACCIDENTAL_LABEL_SCALE
    } else {
        base * FALLBACK_LABEL_SCALE
    }
}

// ── Chord name ──────────────────────────────────────────────────────

fn emit_name(
    primitives: &mut Vec<Primitive>,
    chord: &ChordRecord,
    options: &DiagramOptions,
    scale: f64,
    fret_config: &LineConfig,
    origin_y: f64,
) {
    let key_text = match options.chord_name.key_format {
        KeyFormat::Raw => chord.key().raw(),
        KeyFormat::Accessible => chord.key().accessible(),
        KeyFormat::Symbol => chord.key().symbol(),
    };
    let suffix_text = match options.chord_name.suffix_format {
        SuffixFormat::Raw => chord.suffix().raw(),
        SuffixFormat::Short => chord.suffix().short(),
        SuffixFormat::Symbolized => chord.suffix().symbolized(),
        SuffixFormat::AltSymbol => chord.suffix().alt_symbol(),
    };

    primitives.push(Primitive::Text {
        x: scale / 2.0,
        y: (origin_y + fret_config.margin) * NAME_BASELINE_FACTOR,
        size: fret_config.margin,
        text: format!("{key_text} {suffix_text}").trim_end().to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_is_an_involution() {
        for x in [0.0, 13.7, 100.0, 250.0] {
            let once = mirror_x(x, true, 300.0);
            assert_eq!(mirror_x(once, true, 300.0), x);
        }
        assert_eq!(mirror_x(42.0, false, 300.0), 42.0);
    }

    #[test]
    fn label_sizes_scale_with_text_shape() {
        assert_eq!(label_size("3", 10.0), 10.0);
        assert_eq!(label_size("B♭", 10.0), 7.5);
        assert_eq!(label_size("♯11", 10.0), 8.0);
        assert_eq!(label_size("13", 10.0), 8.0);
    }
}
