//! Binary-format primitives for the spv module builder.
//!
//! The target format is word oriented: every instruction is a sequence of
//! 32-bit words, the first of which packs the instruction's word count and
//! opcode. This crate holds the value types the rest of the builder speaks
//! in:
//! - [`Word`], the 32-bit unit of the format
//! - [`TypeId`] and [`ResultId`], opaque instruction identifiers
//! - [`Opcode`], the closed enumeration of constant instructions
//! - sampler enumerants and instruction-header packing helpers
//!
//! Everything here is `Copy`, comparison is by value, and nothing allocates.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod id;
mod opcode;
mod sampler;
mod words;

pub use id::{ResultId, TypeId};
pub use opcode::Opcode;
pub use sampler::{SamplerAddressingMode, SamplerFilterMode};
pub use words::{header_opcode_value, header_word_count, op_header, Word};
