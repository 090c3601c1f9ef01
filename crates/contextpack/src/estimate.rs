/// Assumed average text density: four characters per budgeting unit.
pub const CHARS_PER_UNIT: usize = 4;

/// Approximate size of `text` in units.
///
/// Counts Unicode scalar values, divides by [`CHARS_PER_UNIT`] rounding
/// down, and never returns less than 1. This is a budgeting heuristic, not
/// a tokenizer.
pub fn estimate(text: &str) -> usize {
    (text.chars().count() / CHARS_PER_UNIT).max(1)
}
