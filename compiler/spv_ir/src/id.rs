//! Opaque instruction identifiers.
//!
//! Ids in the binary format are plain 32-bit words; the newtypes here keep
//! "this word is a type" and "this word is a result" from being mixed up in
//! builder code. Neither carries meaning this crate interprets: the type
//! system assigns [`TypeId`]s, the compilation context assigns
//! [`ResultId`]s, and everything downstream only stores and compares them.

use std::fmt;

/// Id of a type instruction, assigned by the type system.
///
/// The constant subsystem stores and compares these; whether a given id
/// denotes the type an opcode implies is the type checker's contract, not
/// ours.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a `TypeId` from a raw id word.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Get the raw id word.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId(%{})", self.0)
    }
}

/// Result id bound to an instruction at emission time.
///
/// Allocated sequentially by the compilation context; id `0` is reserved as
/// invalid by the format, so allocation starts at `1`. A result id is
/// distinct from a constant's structural identity: the same canonical
/// constant is encoded with whatever id the caller supplies.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ResultId(u32);

impl ResultId {
    /// Create a `ResultId` from a raw id word.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ResultId(raw)
    }

    /// Get the raw id word.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultId(%{})", self.0)
    }
}

crate::static_assert_size!(TypeId, 4);
crate::static_assert_size!(ResultId, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_roundtrip() {
        let ty = TypeId::from_raw(17);
        assert_eq!(ty.raw(), 17);
        assert_eq!(TypeId::from_raw(ty.raw()), ty);

        let id = ResultId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(ResultId::from_raw(id.raw()), id);
    }

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(TypeId::from_raw(3), TypeId::from_raw(3));
        assert_ne!(TypeId::from_raw(3), TypeId::from_raw(4));
    }

    #[test]
    fn ids_hash_by_value() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TypeId::from_raw(1));
        set.insert(TypeId::from_raw(1)); // duplicate
        set.insert(TypeId::from_raw(2));
        assert_eq!(set.len(), 2);
    }
}
