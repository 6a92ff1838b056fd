//! Column width allocation
//!
//! Turns an available width plus per-column minimum and ideal widths into
//! concrete widths. Pure and deterministic; renderers call it on every frame.

/// No column is ever narrower than this, even when the terminal is.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Cells reserved around the column bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overhead {
    /// Fixed cells for the outer edges of a row
    pub border: usize,
    /// Cells each column spends on separators and padding
    pub per_column: usize,
    /// Cells used by the row-number gutter
    pub gutter: usize,
}

impl Overhead {
    /// Plain listings: one leading space, two spaces after each field.
    pub const LISTING: Overhead = Overhead {
        border: 1,
        per_column: 2,
        gutter: 0,
    };

    /// Data grid rows: `" {n:>digits} "` gutter, `"│ " cell " "` per column
    /// and a closing `"│"`.
    pub fn data_grid(gutter_width: usize) -> Self {
        Self {
            border: 1,
            per_column: 3,
            gutter: gutter_width,
        }
    }

    pub fn total(&self, columns: usize) -> usize {
        self.border + self.per_column * columns + self.gutter
    }
}

/// Allocate widths for `min.len()` columns inside `available` cells.
///
/// Minimums below [`MIN_COLUMN_WIDTH`] are raised to it and ideals below their
/// minimum are raised to the minimum. When the minimums leave spare room, it is
/// shared out in proportion to the ideal widths, no column growing past its
/// ideal, and whatever is left goes to the last column. When the minimums do
/// not fit, columns shrink by the same proportions but stop at
/// [`MIN_COLUMN_WIDTH`]; the shortfall of a pinned column is not redistributed,
/// so the result can still be wider than the available space.
pub fn allocate_widths(
    available: usize,
    min: &[usize],
    ideal: &[usize],
    overhead: Overhead,
) -> Vec<usize> {
    let count = min.len();
    if count == 0 {
        return Vec::new();
    }

    let mut widths: Vec<usize> = min.iter().map(|m| (*m).max(MIN_COLUMN_WIDTH)).collect();
    let ideals: Vec<usize> = widths
        .iter()
        .enumerate()
        .map(|(i, m)| ideal.get(i).copied().unwrap_or(0).max(*m))
        .collect();

    let usable = available.saturating_sub(overhead.total(count));
    let min_total: usize = widths.iter().sum();
    let ideal_total: usize = ideals.iter().sum();

    if min_total < usable {
        let extra = usable - min_total;
        let mut used = 0;
        for (width, ideal) in widths.iter_mut().zip(&ideals) {
            let share = proportional(extra, *ideal, ideal_total);
            let grow = share.min(ideal - *width);
            *width += grow;
            used += grow;
        }
        if let Some(last) = widths.last_mut() {
            *last += extra - used;
        }
    } else if min_total > usable {
        let deficit = min_total - usable;
        for (width, ideal) in widths.iter_mut().zip(&ideals) {
            let cut = proportional(deficit, *ideal, ideal_total);
            *width = width.saturating_sub(cut).max(MIN_COLUMN_WIDTH);
        }
    }

    widths
}

fn proportional(amount: usize, weight: usize, total_weight: usize) -> usize {
    if total_weight == 0 {
        return 0;
    }
    (amount as f64 * weight as f64 / total_weight as f64) as usize
}
