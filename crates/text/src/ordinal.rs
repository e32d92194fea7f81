//! Ordinal comparison, equality and hashing of char sequences.
//!
//! Chars compare by code point. Any two [`CharSequence`] types can be mixed,
//! and an absent sequence (`None`) is ordered before every present one.

use std::cmp::Ordering;

use crate::CharSequence;

/// Hash code of an absent sequence.
pub const NULL_HASH_CODE: i32 = i32::MAX;

/// Compares two sequences by code point.
///
/// Returns the code point difference at the first mismatch, or the length
/// difference when one sequence is a prefix of the other. `None` sorts
/// before any sequence, including the empty one.
///
/// # Example
///
/// ```
/// use nio_text::ordinal;
///
/// assert_eq!(ordinal::compare(Some("abc"), Some("abd")), -1);
/// assert_eq!(ordinal::compare(Some("ab"), Some("abcd")), -2);
/// assert_eq!(ordinal::compare(None::<&str>, Some("")), -1);
/// ```
pub fn compare<A, B>(x: Option<&A>, y: Option<&B>) -> i32
where
    A: CharSequence + ?Sized,
    B: CharSequence + ?Sized,
{
    let (x, y) = match (x, y) {
        (None, None) => return 0,
        (None, Some(_)) => return -1,
        (Some(_), None) => return 1,
        (Some(x), Some(y)) => (x, y),
    };
    let mut xs = x.chars_iter();
    let mut ys = y.chars_iter();
    let (mut x_len, mut y_len) = (0i64, 0i64);
    loop {
        match (xs.next(), ys.next()) {
            (Some(a), Some(b)) => {
                if a != b {
                    return a as i32 - b as i32;
                }
                x_len += 1;
                y_len += 1;
            }
            (Some(_), None) => {
                x_len += 1 + xs.count() as i64;
                break;
            }
            (None, Some(_)) => {
                y_len += 1 + ys.count() as i64;
                break;
            }
            (None, None) => break,
        }
    }
    (x_len - y_len) as i32
}

/// [`compare`] mapped onto [`Ordering`].
pub fn ordering<A, B>(x: Option<&A>, y: Option<&B>) -> Ordering
where
    A: CharSequence + ?Sized,
    B: CharSequence + ?Sized,
{
    compare(x, y).cmp(&0)
}

/// True when both are `None`, or both hold the same chars in order.
pub fn equals<A, B>(x: Option<&A>, y: Option<&B>) -> bool
where
    A: CharSequence + ?Sized,
    B: CharSequence + ?Sized,
{
    match (x, y) {
        (None, None) => true,
        (Some(x), Some(y)) => x.len() == y.len() && x.chars_iter().eq(y.chars_iter()),
        _ => false,
    }
}

/// Content hash consistent with [`equals`].
///
/// Folds `h = c + ((h << 5) - h)` over the code points in wrapping `i32`
/// arithmetic. The empty sequence hashes to `0` and `None` to
/// [`NULL_HASH_CODE`].
pub fn hash_code<S>(sequence: Option<&S>) -> i32
where
    S: CharSequence + ?Sized,
{
    let Some(sequence) = sequence else {
        return NULL_HASH_CODE;
    };
    sequence.chars_iter().fold(0i32, |hash, ch| {
        (ch as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}
