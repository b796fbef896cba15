//! Comparison operators backed by [KeyComparator](crate::KeyComparator)

/// Implements the comparison operators of a [KeyComparator](crate::KeyComparator) type.
///
/// Generates `PartialEq`, `Eq`, `PartialOrd` and `Ord` for the type itself as well as
/// `PartialEq<[u8]>` and `PartialOrd<[u8]>`. Equality forwards to
/// [KeyComparator::ct_eq](crate::KeyComparator::ct_eq) and ordering to
/// [KeyComparator::compare](crate::KeyComparator::compare) and [order](crate::order), so `==` is
/// timing-safe and the relational operators cannot diverge from it.
///
/// Generic types list their generic parameters in brackets.
///
/// # Examples
///
/// ```
/// use keycmp::{impl_key_ops, KeyComparator};
///
/// struct Mac<const N: usize>([u8; N]);
///
/// impl<const N: usize> KeyComparator for Mac<N> {
///     fn to_bytes(&self) -> &[u8] {
///         &self.0
///     }
/// }
///
/// impl_key_ops!(impl[const N: usize] Mac<N>);
///
/// assert!(Mac([1u8; 16]) == Mac([1u8; 16]));
/// assert!(Mac([1u8; 16]) < Mac([2u8; 16]));
/// assert!(Mac([1u8; 16]) == [1u8; 16][..]);
///
/// struct Salt([u8; 8]);
///
/// impl KeyComparator for Salt {
///     fn to_bytes(&self) -> &[u8] {
///         &self.0
///     }
/// }
///
/// impl_key_ops!(Salt);
///
/// let mut salts = vec![Salt([9; 8]), Salt([3; 8]), Salt([9; 8])];
/// salts.sort();
/// salts.dedup();
/// assert_eq!(salts.len(), 2);
/// ```
#[macro_export]
macro_rules! impl_key_ops {
    (impl[$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::KeyComparator::ct_eq(self, other)
            }
        }

        impl<$($gen)*> ::core::cmp::Eq for $ty {}

        impl<$($gen)*> ::core::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl<$($gen)*> ::core::cmp::Ord for $ty {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $crate::order(
                    $crate::KeyComparator::to_bytes(self),
                    $crate::KeyComparator::to_bytes(other),
                )
            }
        }

        impl<$($gen)*> ::core::cmp::PartialEq<[u8]> for $ty {
            fn eq(&self, other: &[u8]) -> bool {
                $crate::KeyComparator::ct_eq(self, other)
            }
        }

        impl<$($gen)*> ::core::cmp::PartialOrd<[u8]> for $ty {
            fn partial_cmp(&self, other: &[u8]) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::KeyComparator::compare(self, other)
            }
        }
    };
    ($ty:ty) => {
        $crate::impl_key_ops!(impl[] $ty);
    };
}
