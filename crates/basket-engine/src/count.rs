//! Recommendation list length as a function of history length.

/// How many recommendations to show after `history_len` purchases.
///
/// | purchases | count |
/// |-----------|-------|
/// | 0         | 0     |
/// | 1–2       | 4     |
/// | 3–4       | 5     |
/// | 5–7       | 6     |
/// | 8–9       | 8     |
/// | 10+       | 10    |
pub fn desired_count(history_len: usize) -> usize {
    match history_len {
        0 => 0,
        1..=2 => 4,
        3..=4 => 5,
        5..=7 => 6,
        8..=9 => 8,
        _ => 10,
    }
}
