//! Column width heuristic for the paginated document layout.

use crate::report::matrix::ReportMatrix;

/// Bounds for the width heuristic, in points.
#[derive(Debug, Clone, Copy)]
pub struct WidthBounds {
    pub min: f32,
    pub max: f32,
    pub total: f32,
}

impl Default for WidthBounds {
    fn default() -> Self {
        // Tuned for a landscape A4 table with 10 pt text.
        Self {
            min: 55.0,
            max: 220.0,
            total: 780.0,
        }
    }
}

/// Distribute `total` across columns proportionally to the longest string
/// seen in each column (header included), clamped to `[min, max]`.
///
/// This is a heuristic, not a packing: the clamped widths may sum to more or
/// less than `total`. An all-empty matrix gets `min` for every column.
pub fn size(matrix: &ReportMatrix, bounds: WidthBounds) -> Vec<f32> {
    let lengths = matrix.max_column_lengths();
    let sum: usize = lengths.iter().sum();

    if sum == 0 {
        return vec![bounds.min; lengths.len()];
    }

    lengths
        .iter()
        .map(|&len| {
            let weight = len as f32 / sum as f32;
            (weight * bounds.total).clamp(bounds.min, bounds.max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(header: &[&str], rows: &[&[&str]]) -> ReportMatrix {
        ReportMatrix {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn widths_stay_within_bounds() {
        let m = matrix(
            &["a", "very very very long header indeed", "b"],
            &[&["x", "y", "a much longer cell than the header above it"]],
        );
        let b = WidthBounds::default();
        for w in size(&m, b) {
            assert!(w >= b.min && w <= b.max);
        }
    }

    #[test]
    fn empty_matrix_gets_min_width_everywhere() {
        let m = matrix(&["", "", ""], &[&["", "", ""]]);
        let b = WidthBounds::default();
        assert_eq!(size(&m, b), vec![b.min; 3]);
    }

    #[test]
    fn longer_columns_get_wider() {
        let m = matrix(
            &["id", "description"],
            &[&["1", "a noticeably longer description text"]],
        );
        let w = size(&m, WidthBounds::default());
        assert!(w[1] > w[0]);
    }

    #[test]
    fn header_length_counts_toward_width() {
        let m = matrix(&["a header longer than any cell", "x"], &[&["c", "d"]]);
        let w = size(&m, WidthBounds::default());
        assert!(w[0] > w[1]);
    }
}
