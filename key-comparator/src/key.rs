//! Fixed-length key material

use std::fmt;
use std::hash::{Hash, Hasher};

use static_assertions::assert_eq_size;

use crate::comparator::KeyComparator;
use crate::impl_key_ops;

/// A fixed-length byte sequence such as a key, a nonce or a digest.
///
/// Comparisons with `==` and the relational operators are backed by [KeyComparator]; equality
/// never leaks where two keys differ.
///
/// # Examples
///
/// ```
/// use keycmp::{Key, KeyLengthError};
///
/// let k = Key::<4>::from_slice(&[1, 2, 3, 4])?;
/// assert!(k == Key::new([1, 2, 3, 4]));
/// assert!(k < Key::new([1, 2, 3, 5]));
///
/// assert_eq!(
///     Key::<4>::from_slice(&[1, 2, 3]),
///     Err(KeyLengthError { expected: 4, actual: 3 })
/// );
/// # Ok::<(), KeyLengthError>(())
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Key<const N: usize> {
    value: [u8; N],
}

assert_eq_size!(Key<32>, [u8; 32]);

/// A 32 byte key
pub type Key32 = Key<32>;
/// A 24 byte nonce
pub type Nonce24 = Key<24>;
/// A 64 byte digest
pub type Digest64 = Key<64>;

/// Produced when a key is constructed from a slice of the wrong length
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} bytes of key material, got {actual}")]
pub struct KeyLengthError {
    /// Length of the key type
    pub expected: usize,
    /// Length of the slice given
    pub actual: usize,
}

impl<const N: usize> Key<N> {
    /// Create a new [Key] from a byte array
    pub fn new(value: [u8; N]) -> Self {
        Self { value }
    }

    /// Create a zero initialized [Key]
    pub fn zero() -> Self {
        Self { value: [0u8; N] }
    }

    /// Create a new [Key] from a byte slice of exactly `N` bytes
    pub fn from_slice(value: &[u8]) -> Result<Self, KeyLengthError> {
        <[u8; N]>::try_from(value)
            .map(Self::new)
            .map_err(|_| KeyLengthError {
                expected: N,
                actual: value.len(),
            })
    }

    /// The key material
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.value
    }
}

impl<const N: usize> KeyComparator for Key<N> {
    fn to_bytes(&self) -> &[u8] {
        &self.value
    }
}

impl_key_ops!(impl[const N: usize] Key<N>);

impl<const N: usize> Hash for Key<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<const N: usize> From<[u8; N]> for Key<N> {
    fn from(value: [u8; N]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> TryFrom<&[u8]> for Key<N> {
    type Error = KeyLengthError;

    fn try_from(value: &[u8]) -> Result<Self, KeyLengthError> {
        Self::from_slice(value)
    }
}

impl<const N: usize> AsRef<[u8]> for Key<N> {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

impl<const N: usize> fmt::Debug for Key<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Key<{N}>(<SECRET>)")
    }
}
