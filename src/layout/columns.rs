//! Column partitioning for multi-item layouts.

use super::options::{MAX_COLUMNS, MIN_COLUMNS};

/// Split `items` into exactly `columns` contiguous slices.
///
/// Every slice but the trailing ones holds `ceil(len / columns)` items; the
/// remainder is shorter, possibly empty. Concatenating the slices in order
/// yields `items` unchanged. `columns` is clamped to 1-3.
pub fn partition_columns<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    let columns = columns.clamp(usize::from(MIN_COLUMNS), usize::from(MAX_COLUMNS));
    if items.is_empty() {
        return vec![items; columns];
    }

    let per_column = items.len().div_ceil(columns);
    let mut slices: Vec<&[T]> = items.chunks(per_column).collect();
    while slices.len() < columns {
        slices.push(&items[items.len()..]);
    }
    slices
}
