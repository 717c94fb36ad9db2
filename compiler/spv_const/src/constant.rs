//! The immutable constant node and its binary encoding.

use std::hash::{Hash, Hasher};

use smallvec::SmallVec;
use spv_ir::{op_header, Opcode, ResultId, TypeId, Word};

use crate::decoration::{DecorationId, DecorationSet};

/// One constant instruction: opcode, result type id, argument words, and
/// the decorations attached to it.
///
/// A `Constant` is a transient candidate until it is interned; after
/// interning it is the canonical node for its value within the owning
/// context and is never mutated. The meaning of `args` is fixed per
/// opcode — literal words for numerics, constituent ids for composites,
/// enumerant/parameter words for samplers, empty for booleans and null —
/// and that shape is decided entirely in the factory layer
/// ([`SpvContext`](crate::SpvContext) construct methods).
#[derive(Clone, Debug, Eq)]
pub struct Constant {
    opcode: Opcode,
    type_id: TypeId,
    args: SmallVec<[Word; 4]>,
    decorations: DecorationSet,
}

impl Constant {
    /// Build a candidate node. Prefer the factory methods on
    /// [`SpvContext`](crate::SpvContext), which fix the argument shape per
    /// opcode; this constructor is the raw boundary for callers that
    /// already hold well-formed words.
    ///
    /// Duplicate decoration handles are dropped; order of the remainder is
    /// kept for emission.
    pub fn new(
        opcode: Opcode,
        type_id: TypeId,
        args: &[Word],
        decorations: &[DecorationId],
    ) -> Self {
        Self {
            opcode,
            type_id,
            args: SmallVec::from_slice(args),
            decorations: DecorationSet::from_slice(decorations),
        }
    }

    /// Opcode of this constant.
    #[inline]
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Result type id, opaque to this subsystem.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Argument words, in encoding order.
    #[inline]
    pub fn args(&self) -> &[Word] {
        &self.args
    }

    /// Attached decorations.
    #[inline]
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Membership of `dec` in the decoration set, by handle identity.
    #[inline]
    pub fn has_decoration(&self, dec: DecorationId) -> bool {
        self.decorations.contains(dec)
    }

    /// Boolean constant (plain or specialization true/false).
    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.opcode.is_boolean()
    }

    /// Numerical constant (integer or float literal).
    #[inline]
    pub fn is_numerical(&self) -> bool {
        self.opcode.is_numerical()
    }

    /// Composite constant (plain or specialization).
    #[inline]
    pub fn is_composite(&self) -> bool {
        self.opcode.is_composite()
    }

    /// Specialization constant of any kind.
    #[inline]
    pub fn is_spec(&self) -> bool {
        self.opcode.is_spec()
    }

    /// Encode this constant with the given result id.
    ///
    /// Output layout, uniform across all constant kinds:
    /// `[header(3 + args.len(), opcode), type_id, result_id, args...]`.
    /// The result id is assumed valid and unique — allocation is the
    /// context's contract — and nothing here can fail.
    pub fn with_result_id(&self, result_id: ResultId) -> Vec<Word> {
        let word_count = self.args.len() + 3;
        debug_assert!(
            word_count <= usize::from(u16::MAX),
            "instruction exceeds the format's 65535-word limit"
        );

        let mut words = Vec::with_capacity(word_count);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the format caps instructions at 65535 words"
        )]
        words.push(op_header(word_count as u16, self.opcode));
        words.push(self.type_id.raw());
        words.push(result_id.raw());
        words.extend_from_slice(&self.args);

        tracing::trace!(opcode = %self.opcode, word_count, "encoded constant");
        words
    }
}

/// Structural equality: opcode, type id and args element-wise, decoration
/// sets as sets (insertion order irrelevant).
impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        self.opcode == other.opcode
            && self.type_id == other.type_id
            && self.args == other.args
            && self.decorations == other.decorations
    }
}

/// Hash over the structural key `(opcode, type_id, args)` only.
///
/// Decoration sets are order-insensitive and would need normalization to
/// hash consistently, so they are left out: equal constants still hash
/// equal (equality implies an identical structural key), and candidates
/// that differ only in decorations land in the same bucket where full
/// equality separates them.
impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.opcode.hash(state);
        self.type_id.hash(state);
        self.args.hash(state);
    }
}

#[cfg(test)]
mod tests;
