#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! constant-time comparison primitives
//!
//! keycmp internal library providing the constant-time operations the key
//! comparator is built on.
//!
//! # Examples
//!
//! ```rust
//! use keycmp_constant_time::{memcmp, compare};
//!
//! let key = [0x42u8; 32];
//! let mut tampered = key;
//! tampered[31] ^= 0x01;
//!
//! // Equality never depends on where the buffers differ
//! assert!(memcmp(&key, &[0x42u8; 32]));
//! assert!(!memcmp(&key, &tampered));
//!
//! // A truncated key is unequal, even if it is a prefix of the other one
//! assert!(!memcmp(&key, &key[..31]));
//! assert!(!memcmp(&key[..31], &key));
//!
//! // Ordering of equal-length buffers is lexicographic
//! assert_eq!(compare(&key, &tampered), -1);
//! assert_eq!(compare(&tampered, &key), 1);
//! ```
//!
//! # Security Notes
//!
//! While these functions aim to be constant-time, they may leak timing information in some cases:
//!
//! - The lengths of the inputs are not hidden
//! - Execution time scales linearly with input size

mod compare;
mod memcmp;

pub use compare::compare;
pub use memcmp::memcmp;
