//! Constant-instruction opcodes.
//!
//! The binary format fixes one numeric opcode per constant instruction;
//! the discriminants below are the format's values, not ours to choose.
//! Opcode `47` belongs to a different instruction family, which is why the
//! specialization range does not start at it.
//!
//! Every classification predicate must be updated when a variant is added:
//! a new opcode must be classified before it can be used.

use std::fmt;

/// Opcode of a constant instruction (`u16`, packed into the high half of
/// the instruction header together with the word count).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Opcode {
    // === Plain constants (41-46) ===
    /// Boolean true. No argument words.
    ConstantTrue = 41,
    /// Boolean false. No argument words.
    ConstantFalse = 42,
    /// Numeric (integer or float) constant; literal words follow.
    Constant = 43,
    /// Composite constant; constituent ids follow.
    ConstantComposite = 44,
    /// Sampler constant; addressing mode, parameter, filter mode follow.
    ConstantSampler = 45,
    /// Null value of the result type. No argument words.
    ConstantNull = 46,

    // === Specialization constants (48-51) ===
    /// Specialization-time boolean true.
    SpecConstantTrue = 48,
    /// Specialization-time boolean false.
    SpecConstantFalse = 49,
    /// Specialization-time numeric constant.
    SpecConstant = 50,
    /// Specialization-time composite constant.
    SpecConstantComposite = 51,
}

impl Opcode {
    /// Numeric opcode value as the format defines it.
    #[inline]
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Boolean constants: the four true/false opcodes.
    #[inline]
    pub const fn is_boolean(self) -> bool {
        matches!(
            self,
            Self::ConstantTrue
                | Self::ConstantFalse
                | Self::SpecConstantTrue
                | Self::SpecConstantFalse
        )
    }

    /// Numerical constants: the literal-carrying opcodes, which only ever
    /// hold integers and floats.
    #[inline]
    pub const fn is_numerical(self) -> bool {
        matches!(self, Self::Constant | Self::SpecConstant)
    }

    /// Composite constants, plain or specialization.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::ConstantComposite | Self::SpecConstantComposite)
    }

    /// Specialization constants: value may be overridden at a later
    /// compilation or link stage.
    #[inline]
    pub const fn is_spec(self) -> bool {
        matches!(
            self,
            Self::SpecConstantTrue
                | Self::SpecConstantFalse
                | Self::SpecConstant
                | Self::SpecConstantComposite
        )
    }

    /// Get the name of this opcode as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConstantTrue => "OpConstantTrue",
            Self::ConstantFalse => "OpConstantFalse",
            Self::Constant => "OpConstant",
            Self::ConstantComposite => "OpConstantComposite",
            Self::ConstantSampler => "OpConstantSampler",
            Self::ConstantNull => "OpConstantNull",
            Self::SpecConstantTrue => "OpSpecConstantTrue",
            Self::SpecConstantFalse => "OpSpecConstantFalse",
            Self::SpecConstant => "OpSpecConstant",
            Self::SpecConstantComposite => "OpSpecConstantComposite",
        }
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode::{}", self.name())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Compile-time size assertion: Opcode must be exactly 2 bytes
const _: () = assert!(std::mem::size_of::<Opcode>() == 2);

#[cfg(test)]
mod tests;
