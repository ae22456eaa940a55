//! Forward filling of missing values.

use enexory_types::TimeTable;

/// Replaces each missing value with the last present value above it in the
/// same column.
///
/// Missing values before a column's first present value stay missing. Rows
/// are never added or removed.
#[must_use]
pub fn forward_fill(mut table: TimeTable) -> TimeTable {
    for column in 0..table.width() {
        let mut last = None;
        for cell in table.column_mut(column) {
            match cell {
                Some(value) => last = Some(*value),
                None => *cell = last,
            }
        }
    }
    table
}
