//! Positional character distance
//!
//! Counts index positions at which two words differ. Positions past the end of
//! the shorter word always count as differing. This is a Hamming-style score,
//! not an edit distance: inserting one letter shifts every following position.

/// Count the positions in `[0, max(len(a), len(b)))` where `a` and `b` differ
///
/// Positions are Unicode scalar values. Two words are neighbors in the word
/// graph exactly when their distance is 1.
///
/// # Examples
/// ```
/// use word_ladder::core::distance;
///
/// assert_eq!(distance("cat", "cat"), 0);
/// assert_eq!(distance("cat", "cot"), 1);
/// assert_eq!(distance("cat", "dog"), 3);
/// assert_eq!(distance("cat", "cats"), 1);
/// assert_eq!(distance("cat", "scat"), 4);
/// ```
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut diff = 0;

    loop {
        match (left.next(), right.next()) {
            (None, None) => return diff,
            (Some(x), Some(y)) if x == y => {}
            _ => diff += 1,
        }
    }
}

/// Check whether two words are one step apart in the word graph
#[inline]
#[must_use]
pub fn is_neighbor(a: &str, b: &str) -> bool {
    // Early exit once a second mismatch is seen
    let mut left = a.chars();
    let mut right = b.chars();
    let mut diff = 0;

    loop {
        match (left.next(), right.next()) {
            (None, None) => return diff == 1,
            (Some(x), Some(y)) if x == y => {}
            _ => {
                diff += 1;
                if diff > 1 {
                    return false;
                }
            }
        }
    }
}
