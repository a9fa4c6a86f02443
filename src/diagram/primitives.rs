//! Geometric primitive types emitted by the layout engine.
//!
//! A diagram is a flat, ordered list of tagged primitives carrying
//! coordinates and optional label text. No color or font decision is made
//! here; a renderer walks the list once and supplies its own styling.

use serde::Serialize;

/// Target drawing rectangle (origin at 0,0). A zero or negative rectangle
/// yields degenerate zero-size output, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Line geometry along one axis of the grid: used identically for the
/// string axis and the fret axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineConfig {
    /// Distance between adjacent lines.
    pub spacing: f64,
    /// Gap between the drawing edge and the first line.
    pub margin: f64,
    /// Extent of each line.
    pub length: f64,
    /// Number of gaps along this axis.
    pub count: usize,
}

/// Label text attached to a dot or bar, with the font size the layout
/// chose for it (in drawing units).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub size: f64,
}

/// One drawing primitive. Emission order is the intended paint order:
/// grid lines, then barre bars, then per-string markers, then the chord
/// name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    /// Straight line segment (string, fret or nut line).
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Stroke weight; the nut line is the only thick one.
        weight: f64,
    },
    /// Dot on a fretted string (`filled`) or open-string ring above the nut.
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        filled: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<TextLabel>,
    },
    /// Muted-string cross above the nut; `size` is the side of its box.
    Cross { x: f64, y: f64, size: f64 },
    /// Horizontal barre bar across a string span.
    Bar {
        x1: f64,
        x2: f64,
        y: f64,
        thickness: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<TextLabel>,
    },
    /// Free-standing text anchor (fret number, chord name).
    Text {
        x: f64,
        y: f64,
        size: f64,
        text: String,
    },
}

/// Layout output: the diagram's effective size plus the ordered primitive
/// list. `for_print` is passed through untouched as a renderer hint (fixed
/// ink color instead of appearance-adaptive).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub for_print: bool,
    pub primitives: Vec<Primitive>,
}
