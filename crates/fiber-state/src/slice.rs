/// Copy the `start..end` window out of `items`.
///
/// Both bounds are clamped to `items.len()` and an inverted range yields an
/// empty vector, so any pair of indices is accepted. The input is never
/// mutated and the same inputs always produce the same output.
pub fn paginate<T: Clone>(items: &[T], start: usize, end: usize) -> Vec<T> {
    let end = end.min(items.len());
    let start = start.min(end);
    items[start..end].to_vec()
}
