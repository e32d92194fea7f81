//! Element sequence comparison utilities.

use std::cmp::Ordering;

use crate::Element;

/// Compares two element sequences for equality.
///
/// Sequences of different lengths are never equal.
///
/// # Example
///
/// ```
/// use nio_buffers::elements_eq;
///
/// assert!(elements_eq(&[1i32, 2, 3], &[1, 2, 3]));
/// assert!(!elements_eq(&[1i32, 2, 3], &[1, 2, 4]));
/// assert!(!elements_eq(&[1i32, 2], &[1, 2, 3]));
/// assert!(elements_eq(&[f64::NAN], &[f64::NAN]));
/// ```
pub fn elements_eq<T: Element>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.element_eq(*y))
}

/// Compares two element sequences lexicographically.
///
/// The first differing element decides; when one sequence is a prefix of
/// the other, the shorter one is less.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use nio_buffers::elements_cmp;
///
/// assert_eq!(elements_cmp(&[1u8, 2], &[1, 2, 3]), Ordering::Less);
/// assert_eq!(elements_cmp(&[1u8, 2, 3], &[1, 2]), Ordering::Greater);
/// assert_eq!(elements_cmp(&[1u8, 2, 3], &[1, 2, 3]), Ordering::Equal);
/// assert_eq!(elements_cmp(&[1u8, 2, 3], &[1, 3, 2]), Ordering::Less);
/// ```
pub fn elements_cmp<T: Element>(a: &[T], b: &[T]) -> Ordering {
    cmp_iter(a.iter().copied(), b.iter().copied())
}

pub(crate) fn eq_iter<T, A, B>(mut a: A, mut b: B) -> bool
where
    T: Element,
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x.element_eq(y) => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}

pub(crate) fn cmp_iter<T, A, B>(mut a: A, mut b: B) -> Ordering
where
    T: Element,
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => match x.element_cmp(y) {
                Ordering::Equal => continue,
                diff => return diff,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}
