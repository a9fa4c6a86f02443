//! Barre span resolution — which string range a barre bar covers, and
//! which strings suppress their individual dot underneath it.

/// Contiguous string range `[start, start + length)` covered by a barre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct BarreSpan {
    pub(super) start: usize,
    pub(super) length: usize,
}

/// Resolve the visual span of a barre at fret `barre`.
///
/// Starting from the first string that sits exactly on the barre fret, the
/// scan extends across every string at or above it. A string below the
/// barre fret restarts the scan past it, unless enough barred strings have
/// already been covered, in which case the span is complete.
pub(super) fn resolve_span(frets: &[i32], barre: i32) -> BarreSpan {
    let barre_fret_count = frets.iter().filter(|&&f| f == barre).count();
    let mut start = frets.iter().position(|&f| f == barre).unwrap_or(0);
    let mut length = 0;

    for (index, &fret) in frets.iter().enumerate().skip(start) {
        if fret >= barre {
            length += 1;
        } else if length < barre_fret_count {
            length = 0;
            start = index + 1;
        } else {
            break;
        }
    }

    BarreSpan { start, length }
}

/// Whether the string at `index` should suppress its individual dot under a
/// barre at fret `barre`: true iff it sits exactly on the barre fret and an
/// adjacent string is also at or above it (interior to a contiguous barred
/// run). The notes/functions display modes disable suppression at the call
/// site so every fretted string keeps its label.
pub(super) fn suppresses_dot(frets: &[i32], index: usize, barre: i32) -> bool {
    if frets[index] != barre {
        return false;
    }
    let left = index > 0 && frets[index - 1] >= barre;
    let right = index + 1 < frets.len() && frets[index + 1] >= barre;
    left || right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_barre_spans_all_strings() {
        // F major: every string at or above the first-fret barre
        let frets = [1, 3, 3, 2, 1, 1];
        let span = resolve_span(&frets, 1);
        assert_eq!(span, BarreSpan { start: 0, length: 6 });
    }

    #[test]
    fn partial_barre_skips_lower_strings() {
        // A-shape barre with a muted low string
        let frets = [-1, 1, 3, 3, 3, 1];
        let span = resolve_span(&frets, 1);
        assert_eq!(span, BarreSpan { start: 1, length: 5 });
    }

    #[test]
    fn scan_restarts_when_run_is_too_short() {
        // First matching string is isolated; the real run starts later
        let frets = [2, -1, 2, 2, 2, 2];
        let span = resolve_span(&frets, 2);
        assert_eq!(span.start, 2);
        assert_eq!(span.length, 4);
    }

    #[test]
    fn span_covers_at_least_the_barred_strings() {
        let cases: [[i32; 6]; 4] = [
            [1, 3, 3, 2, 1, 1],
            [-1, 1, 3, 3, 3, 1],
            [4, 6, 6, 5, 4, 4],
            [-1, -1, 1, 1, 1, 1],
        ];
        for frets in cases {
            let barre = *frets.iter().filter(|&&f| f >= 1).min().unwrap();
            let count = frets.iter().filter(|&&f| f == barre).count();
            let span = resolve_span(&frets, barre);
            assert!(
                span.length >= count,
                "span {span:?} shorter than {count} barred strings in {frets:?}"
            );
            assert!(span.start + span.length <= frets.len());
        }
    }

    #[test]
    fn interior_strings_suppress_their_dot() {
        let frets = [1, 3, 3, 2, 1, 1];
        // Every barred string has a neighbor at or above fret 1
        assert!(suppresses_dot(&frets, 0, 1));
        assert!(suppresses_dot(&frets, 4, 1));
        assert!(suppresses_dot(&frets, 5, 1));
        // Non-barre-fret strings never suppress
        assert!(!suppresses_dot(&frets, 1, 1));
    }

    #[test]
    fn isolated_barred_string_keeps_its_dot() {
        // Neighbors below the barre fret on both sides
        let frets = [0, 2, 0, -1, 2, 2];
        assert!(!suppresses_dot(&frets, 1, 2));
        assert!(suppresses_dot(&frets, 4, 2));
        assert!(suppresses_dot(&frets, 5, 2));
    }
}
