//! lexicographic comparison

use core::hint::black_box;

/// Compares two slices of memory lexicographically and returns an integer indicating the
/// relationship between the slices.
///
/// The first byte position at which the slices differ decides the result, just like
/// `<[u8] as Ord>::cmp`; unlike the standard library, every byte is visited and the verdict is
/// selected without branching on the content.
///
/// ## Returns
///
/// - -1 if a < b
/// - 0 if a = b
/// - 1 if a > b
///
/// # Panics
/// If the two slices have different lengths.
///
/// ## Leaks
/// The length of the inputs is not hidden; a length mismatch is detectable via panic.
///
/// The execution time of the function grows approx. linear with the length of the input. This is
/// considered safe.
///
/// ## Tests
///
/// ```rust
/// use keycmp_constant_time::compare;
/// assert_eq!(compare(&[], &[]),    0);
///
/// assert_eq!(compare(&[0], &[1]), -1);
/// assert_eq!(compare(&[0], &[0]), 0);
/// assert_eq!(compare(&[1], &[0]), 1);
///
/// assert_eq!(compare(&[0, 0], &[1, 0]), -1);
/// assert_eq!(compare(&[0, 0], &[0, 0]), 0);
/// assert_eq!(compare(&[1, 0], &[0, 0]), 1);
///
/// assert_eq!(compare(&[0, 1], &[1, 0]), -1);
/// assert_eq!(compare(&[1, 0], &[0, 1]), 1);
/// ```
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    assert!(a.len() == b.len());
    let mut res = 0i32;
    // Walk backwards so that the lowest differing index is the last to overwrite `res`
    for (&x, &y) in a.iter().zip(b.iter()).rev() {
        let (x, y) = (black_box(x) as i32, black_box(y) as i32);
        let gt = ((y - x) >> 31) & 1;
        let lt = ((x - y) >> 31) & 1;
        let mask = -(gt | lt);
        res = black_box((mask & (gt - lt)) | (!mask & res));
    }
    res
}
