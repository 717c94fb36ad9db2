//! Constant factory methods on the context.
//!
//! One entry point per constant kind, width and signedness: arguments
//! arrive already typed and width-constrained, so a malformed literal
//! cannot be built through this surface. Each method assembles the fixed
//! argument-word shape for its opcode and delegates to the interner —
//! calling any of them twice with the same inputs (decorations in any
//! order) returns the same canonical handle.
//!
//! Literal packing:
//! - values of at most 32 bits occupy one word holding the bit pattern;
//!   signed 16-bit values are sign-extended into it, unsigned 16-bit
//!   values and half-float bit patterns are zero-filled (the format's rule
//!   for literals narrower than a word);
//! - 64-bit values occupy two words, least-significant first.

use smallvec::SmallVec;
use spv_ir::{Opcode, ResultId, SamplerAddressingMode, SamplerFilterMode, TypeId, Word};

use crate::constant::Constant;
use crate::context::{ConstId, SpvContext};
use crate::decoration::DecorationId;

/// Split a 64-bit payload into two words, least-significant first.
#[expect(
    clippy::cast_possible_truncation,
    reason = "mask and shift select exactly 32 bits each"
)]
const fn split_words(bits: u64) -> [Word; 2] {
    [(bits & 0xFFFF_FFFF) as Word, (bits >> 32) as Word]
}

impl SpvContext {
    // === Booleans ===

    /// Boolean true constant.
    pub fn bool_true(&mut self, ty: TypeId, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::ConstantTrue, ty, &[], decorations))
    }

    /// Boolean false constant.
    pub fn bool_false(&mut self, ty: TypeId, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::ConstantFalse, ty, &[], decorations))
    }

    /// Boolean constant for either value.
    pub fn bool_value(&mut self, ty: TypeId, value: bool, decorations: &[DecorationId]) -> ConstId {
        if value {
            self.bool_true(ty, decorations)
        } else {
            self.bool_false(ty, decorations)
        }
    }

    /// Specialization boolean true.
    pub fn spec_bool_true(&mut self, ty: TypeId, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::SpecConstantTrue, ty, &[], decorations))
    }

    /// Specialization boolean false.
    pub fn spec_bool_false(&mut self, ty: TypeId, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::SpecConstantFalse, ty, &[], decorations))
    }

    // === Integers ===

    /// 16-bit signed integer constant; sign-extended into its word.
    #[expect(clippy::cast_sign_loss, reason = "literal words store the bit pattern")]
    pub fn int16(&mut self, ty: TypeId, value: i16, decorations: &[DecorationId]) -> ConstId {
        let word = i32::from(value) as Word;
        self.intern_constant(Constant::new(Opcode::Constant, ty, &[word], decorations))
    }

    /// 32-bit signed integer constant.
    #[expect(clippy::cast_sign_loss, reason = "literal words store the bit pattern")]
    pub fn int32(&mut self, ty: TypeId, value: i32, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::Constant, ty, &[value as Word], decorations))
    }

    /// 64-bit signed integer constant; two words, least-significant first.
    #[expect(clippy::cast_sign_loss, reason = "literal words store the bit pattern")]
    pub fn int64(&mut self, ty: TypeId, value: i64, decorations: &[DecorationId]) -> ConstId {
        let words = split_words(value as u64);
        self.intern_constant(Constant::new(Opcode::Constant, ty, &words, decorations))
    }

    /// 16-bit unsigned integer constant; zero-filled into its word.
    pub fn uint16(&mut self, ty: TypeId, value: u16, decorations: &[DecorationId]) -> ConstId {
        let word = Word::from(value);
        self.intern_constant(Constant::new(Opcode::Constant, ty, &[word], decorations))
    }

    /// 32-bit unsigned integer constant.
    pub fn uint32(&mut self, ty: TypeId, value: u32, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::Constant, ty, &[value], decorations))
    }

    /// 64-bit unsigned integer constant; two words, least-significant
    /// first.
    pub fn uint64(&mut self, ty: TypeId, value: u64, decorations: &[DecorationId]) -> ConstId {
        let words = split_words(value);
        self.intern_constant(Constant::new(Opcode::Constant, ty, &words, decorations))
    }

    // === Floats ===

    /// Half-precision float constant from its raw bit pattern, zero-filled
    /// into its word. The host language has no half type; lossy conversion
    /// from wider floats is out of scope here.
    pub fn float16(&mut self, ty: TypeId, bits: u16, decorations: &[DecorationId]) -> ConstId {
        let word = Word::from(bits);
        self.intern_constant(Constant::new(Opcode::Constant, ty, &[word], decorations))
    }

    /// 32-bit float constant.
    pub fn float32(&mut self, ty: TypeId, value: f32, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(
            Opcode::Constant,
            ty,
            &[value.to_bits()],
            decorations,
        ))
    }

    /// 64-bit float constant; two words, least-significant first.
    pub fn float64(&mut self, ty: TypeId, value: f64, decorations: &[DecorationId]) -> ConstId {
        let words = split_words(value.to_bits());
        self.intern_constant(Constant::new(Opcode::Constant, ty, &words, decorations))
    }

    // === Specialization scalars ===

    /// Specialization 32-bit signed integer constant.
    #[expect(clippy::cast_sign_loss, reason = "literal words store the bit pattern")]
    pub fn spec_int32(&mut self, ty: TypeId, value: i32, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(
            Opcode::SpecConstant,
            ty,
            &[value as Word],
            decorations,
        ))
    }

    /// Specialization 32-bit unsigned integer constant.
    pub fn spec_uint32(&mut self, ty: TypeId, value: u32, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::SpecConstant, ty, &[value], decorations))
    }

    /// Specialization 32-bit float constant.
    pub fn spec_float32(&mut self, ty: TypeId, value: f32, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(
            Opcode::SpecConstant,
            ty,
            &[value.to_bits()],
            decorations,
        ))
    }

    // === Composites ===

    /// Composite constant from constituent result ids, kept verbatim in
    /// order (no reordering, no deduplication).
    pub fn composite(
        &mut self,
        ty: TypeId,
        constituents: &[ResultId],
        decorations: &[DecorationId],
    ) -> ConstId {
        let words: SmallVec<[Word; 4]> = constituents.iter().map(|c| c.raw()).collect();
        self.intern_constant(Constant::new(
            Opcode::ConstantComposite,
            ty,
            &words,
            decorations,
        ))
    }

    /// Specialization composite constant.
    pub fn spec_composite(
        &mut self,
        ty: TypeId,
        constituents: &[ResultId],
        decorations: &[DecorationId],
    ) -> ConstId {
        let words: SmallVec<[Word; 4]> = constituents.iter().map(|c| c.raw()).collect();
        self.intern_constant(Constant::new(
            Opcode::SpecConstantComposite,
            ty,
            &words,
            decorations,
        ))
    }

    // === Sampler ===

    /// Sampler constant: addressing mode, numeric parameter, filter mode,
    /// in that order.
    pub fn sampler(
        &mut self,
        ty: TypeId,
        addressing: SamplerAddressingMode,
        param: Word,
        filter: SamplerFilterMode,
        decorations: &[DecorationId],
    ) -> ConstId {
        self.intern_constant(Constant::new(
            Opcode::ConstantSampler,
            ty,
            &[addressing.word(), param, filter.word()],
            decorations,
        ))
    }

    // === Null ===

    /// Null constant of the result type.
    pub fn null(&mut self, ty: TypeId, decorations: &[DecorationId]) -> ConstId {
        self.intern_constant(Constant::new(Opcode::ConstantNull, ty, &[], decorations))
    }
}
