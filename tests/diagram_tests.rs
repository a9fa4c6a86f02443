//! Integration tests — full diagram layout: primitive order, barre bars and
//! dot suppression, mirroring, and the header/fret-number text.

use chordlib::model::{ChordRecord, Key, Suffix};
use chordlib::{layout, DiagramOptions, DisplayMode, KeyFormat, Primitive, Rect, SuffixFormat};
use pretty_assertions::assert_eq;

const RECT: Rect = Rect {
    width: 120.0,
    height: 180.0,
};

fn c_major() -> ChordRecord {
    ChordRecord::new(
        vec![-1, 3, 2, 0, 1, 0],
        vec![0, 3, 2, 0, 1, 0],
        1,
        vec![],
        None,
        vec![48, 52, 55, 60, 64],
        Key::C,
        Suffix::Major,
    )
    .expect("C major record")
}

fn f_major_barre() -> ChordRecord {
    ChordRecord::new(
        vec![1, 3, 3, 2, 1, 1],
        vec![1, 3, 4, 2, 1, 1],
        1,
        vec![1],
        None,
        vec![41, 48, 53, 57, 60, 65],
        Key::F,
        Suffix::Major,
    )
    .expect("F major record")
}

fn circles(diagram: &chordlib::Diagram) -> Vec<&Primitive> {
    diagram
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Circle { .. }))
        .collect()
}

// ─── Primitive order and grid ───────────────────────────────────────

#[test]
fn grid_lines_come_first_in_paint_order() {
    let diagram = layout(&c_major(), RECT, &DiagramOptions::default());

    // 6 string lines then 6 fret lines
    for primitive in &diagram.primitives[..12] {
        assert!(matches!(primitive, Primitive::Line { .. }));
    }
    let Primitive::Line { x1, x2, .. } = &diagram.primitives[0] else {
        panic!("expected a string line");
    };
    assert_eq!(x1, x2, "string lines are vertical");
}

#[test]
fn nut_is_the_only_thick_line_at_base_fret_one() {
    let diagram = layout(&c_major(), RECT, &DiagramOptions::default());

    let weights: Vec<f64> = diagram.primitives[..12]
        .iter()
        .map(|p| match p {
            Primitive::Line { weight, .. } => *weight,
            _ => unreachable!(),
        })
        .collect();

    let nut = weights[6];
    assert!(
        weights
            .iter()
            .enumerate()
            .all(|(i, &w)| i == 6 || w < nut),
        "weights: {weights:?}"
    );
}

#[test]
fn hiding_the_nut_thins_the_top_line() {
    let options = DiagramOptions {
        show_nut: false,
        ..DiagramOptions::default()
    };
    let diagram = layout(&c_major(), RECT, &options);

    let weights: Vec<f64> = diagram.primitives[..12]
        .iter()
        .map(|p| match p {
            Primitive::Line { weight, .. } => *weight,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(weights[6], weights[7]);
}

#[test]
fn c_major_emits_expected_marker_set() {
    let diagram = layout(&c_major(), RECT, &DiagramOptions::default());

    let crosses = diagram
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Cross { .. }))
        .count();
    assert_eq!(crosses, 1, "one muted string");

    let dots = circles(&diagram);
    let open = dots
        .iter()
        .filter(|p| matches!(p, Primitive::Circle { filled: false, .. }))
        .count();
    assert_eq!(open, 2, "two open-string rings");
    assert_eq!(dots.len(), 5, "three fretted dots plus two rings");
}

// ─── Fret number and chord name ─────────────────────────────────────

#[test]
fn higher_base_fret_emits_one_fret_number() {
    let chord = ChordRecord::new(
        vec![-1, 1, 3, 3, 3, 1],
        vec![0, 1, 2, 3, 4, 1],
        4,
        vec![1],
        None,
        vec![],
        Key::CSharp,
        Suffix::Major,
    )
    .expect("C# barre record");
    let options = DiagramOptions {
        chord_name: chordlib::ChordNameOptions {
            show: false,
            ..Default::default()
        },
        ..DiagramOptions::default()
    };
    let diagram = layout(&chord, RECT, &options);

    let texts: Vec<&String> = diagram
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["4"]);
}

#[test]
fn base_fret_one_has_no_fret_number() {
    let diagram = layout(&c_major(), RECT, &DiagramOptions::default());
    let texts: Vec<&String> = diagram
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["C major"], "only the header text remains");
}

#[test]
fn chord_name_formats_follow_the_options() {
    let options = DiagramOptions {
        chord_name: chordlib::ChordNameOptions {
            show: true,
            key_format: KeyFormat::Symbol,
            suffix_format: SuffixFormat::Short,
        },
        ..DiagramOptions::default()
    };
    let diagram = layout(&f_major_barre(), RECT, &options);

    let Some(Primitive::Text { text, .. }) = diagram.primitives.last() else {
        panic!("chord name is the last primitive");
    };
    assert_eq!(text, &format!("{} {}", Key::F.symbol(), Suffix::Major.short()).trim_end().to_string());
}

#[test]
fn hiding_the_name_shrinks_the_diagram() {
    let shown = layout(&c_major(), RECT, &DiagramOptions::default());
    let options = DiagramOptions {
        chord_name: chordlib::ChordNameOptions {
            show: false,
            ..Default::default()
        },
        ..DiagramOptions::default()
    };
    let hidden = layout(&c_major(), RECT, &options);
    assert!(hidden.height < shown.height);
}

// ─── Barres and suppression ─────────────────────────────────────────

#[test]
fn full_barre_draws_one_bar_and_suppresses_interior_dots() {
    let diagram = layout(&f_major_barre(), RECT, &DiagramOptions::default());

    let bars: Vec<&Primitive> = diagram
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Bar { .. }))
        .collect();
    assert_eq!(bars.len(), 1);

    let Primitive::Bar { x1, x2, label, .. } = bars[0] else {
        unreachable!()
    };
    assert!(x2 > x1);
    assert_eq!(
        label.as_ref().map(|l| l.text.as_str()),
        Some("1"),
        "barre carries the finger number"
    );

    // Strings 0, 4 and 5 sit on the barre fret and lose their dot
    assert_eq!(circles(&diagram).len(), 3);
}

#[test]
fn note_modes_keep_every_fretted_dot_under_the_barre() {
    for mode in [DisplayMode::NotesNoOctave, DisplayMode::Functions] {
        let options = DiagramOptions {
            display_mode: mode,
            ..DiagramOptions::default()
        };
        let diagram = layout(&f_major_barre(), RECT, &options);
        assert_eq!(circles(&diagram).len(), 6, "{mode:?}");
    }
}

#[test]
fn note_mode_labels_dots_with_note_names() {
    let options = DiagramOptions {
        display_mode: DisplayMode::NotesNoOctave,
        ..DiagramOptions::default()
    };
    let diagram = layout(&f_major_barre(), RECT, &options);

    let labels: Vec<&str> = circles(&diagram)
        .iter()
        .filter_map(|p| match p {
            Primitive::Circle { label, .. } => label.as_ref().map(|l| l.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["F", "C", "F", "A", "C", "F"]);
}

#[test]
fn hiding_fingers_drops_all_labels() {
    let options = DiagramOptions {
        show_fingers: false,
        ..DiagramOptions::default()
    };
    let diagram = layout(&f_major_barre(), RECT, &options);

    let labeled = diagram.primitives.iter().any(|p| match p {
        Primitive::Circle { label, .. } | Primitive::Bar { label, .. } => label.is_some(),
        _ => false,
    });
    assert!(!labeled);
}

// ─── Mirroring ──────────────────────────────────────────────────────

#[test]
fn mirroring_flips_markers_and_barre_endpoints() {
    let plain = layout(&f_major_barre(), RECT, &DiagramOptions::default());
    let options = DiagramOptions {
        mirror: true,
        ..DiagramOptions::default()
    };
    let mirrored = layout(&f_major_barre(), RECT, &options);

    for (a, b) in plain.primitives.iter().zip(&mirrored.primitives) {
        match (a, b) {
            (Primitive::Circle { x: xa, .. }, Primitive::Circle { x: xb, .. })
            | (Primitive::Cross { x: xa, .. }, Primitive::Cross { x: xb, .. }) => {
                assert!((RECT.width - xa - xb).abs() < 1e-9);
            }
            (
                Primitive::Bar { x1: a1, x2: a2, .. },
                Primitive::Bar { x1: b1, x2: b2, .. },
            ) => {
                // Endpoints swap so the bar still reads left to right
                assert!((RECT.width - a2 - b1).abs() < 1e-9);
                assert!((RECT.width - a1 - b2).abs() < 1e-9);
            }
            (Primitive::Line { x1: a1, .. }, Primitive::Line { x1: b1, .. }) => {
                assert_eq!(a1, b1, "the grid never mirrors");
            }
            (Primitive::Text { x: xa, .. }, Primitive::Text { x: xb, .. }) => {
                assert_eq!(xa, xb, "header text never mirrors");
            }
            other => panic!("primitive kinds diverged: {other:?}"),
        }
    }
}

// ─── Degenerate input ───────────────────────────────────────────────

#[test]
fn zero_rect_yields_zero_size_geometry_without_panicking() {
    let diagram = layout(&c_major(), Rect::new(0.0, 0.0), &DiagramOptions::default());
    assert_eq!(diagram.width, 0.0);
    assert_eq!(diagram.height, 0.0);
    assert!(!diagram.primitives.is_empty());
}

#[test]
fn negative_rect_clamps_to_zero() {
    let diagram = layout(&c_major(), Rect::new(-10.0, -5.0), &DiagramOptions::default());
    assert_eq!(diagram.width, 0.0);
}

// ─── Passthrough flags ──────────────────────────────────────────────

#[test]
fn for_print_flag_passes_through() {
    let options = DiagramOptions {
        for_print: true,
        ..DiagramOptions::default()
    };
    let diagram = layout(&c_major(), RECT, &options);
    assert!(diagram.for_print);
}
