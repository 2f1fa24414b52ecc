//! Column layout for the category gallery.

/// Columns used on wide screens; narrower breakpoints collapse them in CSS.
pub const GALLERY_COLUMNS: usize = 3;

/// Deal `items` round-robin into `columns` columns: item `i` lands in column
/// `i % columns`, preserving order within each column.
///
/// `columns` is clamped to at least 1.
pub fn distribute_columns<T>(items: &[T], columns: usize) -> Vec<Vec<&T>> {
    let columns = columns.max(1);
    let mut out: Vec<Vec<&T>> = (0..columns).map(|_| Vec::new()).collect();
    for (i, item) in items.iter().enumerate() {
        out[i % columns].push(item);
    }
    out
}
