//! Resolution of comparison operands to byte sequences

use std::any::Any;

use crate::comparator::KeyComparator;
use crate::key::Key;

/// The right-hand side of a comparison performed by a [KeyComparator].
///
/// An operand is either another [KeyComparator] or a value that can present itself directly as a
/// byte string. Types that are neither do not implement this trait and are rejected at compile
/// time. Values whose concrete type is erased can be passed as `dyn Operand`, which resolves
/// exactly like the value itself, or as `dyn Any`, which only resolves the types listed on that
/// impl.
///
/// # Examples
///
/// ```
/// use keycmp::{Key32, Operand};
/// use std::any::Any;
///
/// assert_eq!("abc".operand_bytes(), Some(&b"abc"[..]));
/// assert_eq!(Key32::zero().operand_bytes(), Some(&[0u8; 32][..]));
///
/// let opaque: &dyn Any = &1234u64;
/// assert_eq!(opaque.operand_bytes(), None);
///
/// let erased: &dyn Operand = &[9u8; 20];
/// assert_eq!(erased.operand_bytes(), Some(&[9u8; 20][..]));
/// ```
pub trait Operand {
    /// The byte sequence representing this operand, if there is one
    fn operand_bytes(&self) -> Option<&[u8]>;
}

impl<K: KeyComparator + ?Sized> Operand for K {
    fn operand_bytes(&self) -> Option<&[u8]> {
        Some(self.to_bytes())
    }
}

impl Operand for [u8] {
    fn operand_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> Operand for [u8; N] {
    fn operand_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl Operand for Vec<u8> {
    fn operand_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl Operand for Box<[u8]> {
    fn operand_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl Operand for str {
    fn operand_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl Operand for String {
    fn operand_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

/// Resolves values of runtime-determined type.
///
/// Recognized are `Vec<u8>`, `Box<[u8]>`, `String`, `&'static [u8]`, `&'static str` as well as
/// byte arrays, references to byte arrays and [Key] with 16, 24, 32 or 64 bytes.
///
/// Downcasting can only name concrete types, so a byte array or [Key] of any other size resolves
/// to `None` here even though it is a byte string. Pass such values as `dyn Operand` instead.
impl Operand for dyn Any {
    fn operand_bytes(&self) -> Option<&[u8]> {
        resolve_any(self)
    }
}

impl Operand for dyn Any + Send {
    fn operand_bytes(&self) -> Option<&[u8]> {
        resolve_any(self)
    }
}

impl Operand for dyn Any + Send + Sync {
    fn operand_bytes(&self) -> Option<&[u8]> {
        resolve_any(self)
    }
}

/// Downcasts to every type [Operand for dyn Any](Operand) knows about
fn resolve_any(v: &dyn Any) -> Option<&[u8]> {
    macro_rules! resolve_as {
        ($($t:ty),* $(,)?) => {
            $(
                if let Some(v) = v.downcast_ref::<$t>() {
                    return Operand::operand_bytes(v);
                }
            )*
        };
    }
    macro_rules! resolve_ref_as {
        ($($t:ty),* $(,)?) => {
            $(
                if let Some(v) = v.downcast_ref::<&'static $t>() {
                    return Some(&v[..]);
                }
            )*
        };
    }

    resolve_as!(Vec<u8>, Box<[u8]>, String);
    resolve_as!([u8; 16], [u8; 24], [u8; 32], [u8; 64]);
    resolve_as!(Key<16>, Key<24>, Key<32>, Key<64>);
    resolve_ref_as!([u8], [u8; 16], [u8; 24], [u8; 32], [u8; 64]);

    if let Some(v) = v.downcast_ref::<&'static str>() {
        return Some(v.as_bytes());
    }

    log::trace!(
        "Operand passed as dyn Any is not a supported byte container (only its {:?} is known)",
        v.type_id()
    );
    None
}
