#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod macros;
mod sequence;

#[cfg(feature = "serde")]
mod serde;

pub mod algo;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::SequenceError;
pub use sequence::Sequence;
