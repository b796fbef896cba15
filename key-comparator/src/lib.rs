#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod comparator;
mod key;
mod macros;
mod operand;

pub use crate::comparator::{order, KeyComparator};
pub use crate::key::{Digest64, Key, Key32, KeyLengthError, Nonce24};
pub use crate::operand::Operand;
