//! memcmp

use core::hint::black_box;

/// compares two slices of memory content and returns whether they are equal
///
/// Every byte position is folded into a single difference indicator; the result is only decided
/// once all positions have been visited.
///
/// ## Leaks
/// If the two slices have different lengths, the function still walks the longer of the two
/// slices before reporting inequality. The lengths of the inputs are not hidden. This is widely
/// considered safe.
///
/// The execution time of the function grows approx. linear with the length of the input. This is
/// considered safe.
///
/// ## Examples
///
/// ```rust
/// use keycmp_constant_time::memcmp;
/// let a = [0, 0, 0, 0];
/// let b = [0, 0, 0, 1];
/// let c = [0, 0, 0];
/// assert!(memcmp(&a, &a));
/// assert!(!memcmp(&a, &b));
/// assert!(!memcmp(&a, &c));
/// assert!(!memcmp(&c, &a));
/// ```
#[inline]
pub fn memcmp(a: &[u8], b: &[u8]) -> bool {
    match a.len() == b.len() {
        true => unsafe { memsec::memeq(a.as_ptr(), b.as_ptr(), a.len()) },
        false => memcmp_padded(a, b),
    }
}

/// Comparison of two slices known to differ in length.
///
/// Pads the shorter slice with zeros and accumulates the differences over the length of the
/// longer slice, so the time spent depends on the lengths only. Always returns false.
#[inline(never)]
fn memcmp_padded(a: &[u8], b: &[u8]) -> bool {
    let len = a.len().max(b.len());
    let mut acc = 0u8;
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        acc |= black_box(black_box(x) ^ black_box(y));
    }
    black_box(acc);
    false
}
