//! Constant interning and binary encoding for the spv module builder.
//!
//! Constants are hash-consed: structurally equal requests against one
//! [`SpvContext`] resolve to the same canonical node, identified by a
//! stable [`ConstId`] handle. Downstream passes compare handles, never
//! contents, which is what makes identity-based deduplication elsewhere in
//! the builder correct.
//!
//! # Equality and hashing
//!
//! Two constants are equal iff opcode, result type id and argument words
//! match element-wise and their decoration sets are equal *as sets* —
//! decoration insertion order is preserved for deterministic emission but
//! carries no meaning for equality. The hash covers only
//! `(opcode, type_id, args)`, so the canonical table buckets by structural
//! key and settles decoration differences by full equality inside a bucket.
//!
//! # Threading
//!
//! A context is driven by one compilation pass and is not internally
//! synchronized. Independent contexts share nothing; compile independent
//! translation units on separate threads with a context each.

mod constant;
mod context;
mod decoration;

pub use constant::Constant;
pub use context::{ConstId, PoolOverflow, SpvContext};
pub use decoration::{Decoration, DecorationId, DecorationSet};

// Size assertions to prevent accidental regressions in handle types,
// which are copied freely throughout builder passes.
spv_ir::static_assert_size!(ConstId, 4);
spv_ir::static_assert_size!(DecorationId, 4);
