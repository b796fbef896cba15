//! Timing-safe equality and ordering

use std::cmp::Ordering;

use keycmp_constant_time::memcmp;

use crate::operand::Operand;

/// Comparison of entities that are represented by a fixed-length byte sequence, such as keys,
/// nonces and digests.
///
/// Implementors only provide [KeyComparator::to_bytes]. Equality is checked with
/// [KeyComparator::ct_eq], which runs in time independent of the position of the first
/// difference. Ordering is available through [KeyComparator::compare], which is built on the
/// same constant-time equality check; every other relation is a thin wrapper around
/// [KeyComparator::compare].
///
/// Use [impl_key_ops!](crate::impl_key_ops) to back the comparison operators of a type with this
/// trait.
///
/// # Examples
///
/// ```
/// use keycmp::KeyComparator;
/// use std::cmp::Ordering;
///
/// struct Digest([u8; 4]);
///
/// impl KeyComparator for Digest {
///     fn to_bytes(&self) -> &[u8] {
///         &self.0
///     }
/// }
///
/// let d = Digest([1, 2, 3, 4]);
/// assert!(d.ct_eq(&Digest([1, 2, 3, 4])));
/// assert!(!d.ct_eq(&[1u8, 2, 3, 5]));
/// assert_eq!(d.compare(&Digest([1, 2, 3, 5])), Some(Ordering::Less));
/// assert!(d.greater_than(b"\x01\x02\x03\x00"));
/// ```
pub trait KeyComparator {
    /// The byte sequence representing this entity
    fn to_bytes(&self) -> &[u8];

    /// Timing-safe equality.
    ///
    /// Returns false if `other` has no byte view or its byte sequence differs from this one,
    /// including a different length.
    ///
    /// ## Leaks
    /// The execution time depends on the lengths of the two byte sequences only, never on their
    /// content or on where they differ.
    fn ct_eq<O: Operand + ?Sized>(&self, other: &O) -> bool {
        match other.operand_bytes() {
            Some(other) => memcmp(self.to_bytes(), other),
            None => false,
        }
    }

    /// Three-way comparison; `None` if `other` has no byte view.
    ///
    /// See [order] for how byte sequences are ordered.
    fn compare<O: Operand + ?Sized>(&self, other: &O) -> Option<Ordering> {
        other
            .operand_bytes()
            .map(|other| order(self.to_bytes(), other))
    }

    /// `self < other`; false if incomparable
    fn less_than<O: Operand + ?Sized>(&self, other: &O) -> bool {
        matches!(self.compare(other), Some(Ordering::Less))
    }

    /// `self > other`; false if incomparable
    fn greater_than<O: Operand + ?Sized>(&self, other: &O) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater))
    }

    /// `self <= other`; false if incomparable
    fn less_or_equal<O: Operand + ?Sized>(&self, other: &O) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }

    /// `self >= other`; false if incomparable
    fn greater_or_equal<O: Operand + ?Sized>(&self, other: &O) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater | Ordering::Equal))
    }
}

/// Orders two byte sequences.
///
/// Equality is established first, in constant time. Only sequences already known to differ are
/// then ordered:
///
/// - a shorter sequence is less than a longer one
/// - sequences of equal length are ordered lexicographically
///
/// ## Leaks
/// The ordering step is not constant-time unless the `constant_time_ordering` feature is enabled;
/// it only runs once the sequences are known to be unequal and may reveal where they first
/// differ. Lengths are never hidden.
///
/// # Examples
///
/// ```
/// use keycmp::order;
/// use std::cmp::Ordering;
///
/// assert_eq!(order(&[0, 0], &[0, 0]), Ordering::Equal);
/// assert_eq!(order(&[0, 0], &[1, 0]), Ordering::Less);
/// assert_eq!(order(&[0, 1], &[0, 0]), Ordering::Greater);
/// assert_eq!(order(&[0xff], &[0, 0]), Ordering::Less);
/// ```
pub fn order(a: &[u8], b: &[u8]) -> Ordering {
    match memcmp(a, b) {
        true => Ordering::Equal,
        false => a.len().cmp(&b.len()).then_with(|| lexicographic(a, b)),
    }
}

/// Lexicographic order of two equal-length sequences
#[cfg(not(feature = "constant_time_ordering"))]
fn lexicographic(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Lexicographic order of two equal-length sequences, in constant time
#[cfg(feature = "constant_time_ordering")]
fn lexicographic(a: &[u8], b: &[u8]) -> Ordering {
    keycmp_constant_time::compare(a, b).cmp(&0)
}
