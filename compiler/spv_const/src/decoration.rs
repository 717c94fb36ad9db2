//! Decoration handles and order-preserving decoration sets.
//!
//! The constant core treats decorations as opaque: it needs identity
//! comparison and set membership, nothing more. Payloads are interned by
//! [`SpvContext`](crate::SpvContext) with the same map-plus-arena scheme as
//! constants, and everything downstream passes [`DecorationId`] handles.

use smallvec::SmallVec;
use spv_ir::Word;

/// Handle to a decoration interned by a context. Compared by identity;
/// valid for the owning context's lifetime.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct DecorationId(u32);

impl DecorationId {
    /// Create a `DecorationId` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DecorationId(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena index within the owning context.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An interned decoration payload: the decoration enumerant followed by its
/// literal parameter words.
///
/// The constant core never interprets these words; they exist so a context
/// can unique decorations and so emission can reproduce them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decoration {
    kind: Word,
    params: SmallVec<[Word; 2]>,
}

impl Decoration {
    /// Build a decoration from its enumerant and literal parameter words.
    pub fn new(kind: Word, params: &[Word]) -> Self {
        Self {
            kind,
            params: SmallVec::from_slice(params),
        }
    }

    /// The decoration enumerant.
    #[inline]
    pub fn kind(&self) -> Word {
        self.kind
    }

    /// Literal parameter words, in emission order.
    #[inline]
    pub fn params(&self) -> &[Word] {
        &self.params
    }
}

/// Insertion-ordered set of decoration handles.
///
/// Order of insertion is preserved so emission is deterministic; equality
/// ignores it — `[A, B]` and `[B, A]` are the same set. Duplicates are
/// dropped on insert. Membership tests are linear, which is the right
/// trade: decoration sets per constant are small.
#[derive(Clone, Debug, Default)]
pub struct DecorationSet {
    items: SmallVec<[DecorationId; 2]>,
}

impl DecorationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a slice, keeping the first occurrence of each
    /// duplicate.
    pub fn from_slice(decorations: &[DecorationId]) -> Self {
        let mut set = Self::new();
        for &dec in decorations {
            set.insert(dec);
        }
        set
    }

    /// Insert a handle, preserving insertion order. Returns `false` if it
    /// was already present.
    pub fn insert(&mut self, dec: DecorationId) -> bool {
        if self.contains(dec) {
            return false;
        }
        self.items.push(dec);
        true
    }

    /// Membership by handle identity.
    #[inline]
    pub fn contains(&self, dec: DecorationId) -> bool {
        self.items.contains(&dec)
    }

    /// Number of distinct decorations.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no decorations are attached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Handles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = DecorationId> + '_ {
        self.items.iter().copied()
    }

    /// Handles in insertion order, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[DecorationId] {
        &self.items
    }
}

/// Set equality: same members, any order. Duplicates are impossible by
/// construction, so a length check plus one-way containment suffices.
impl PartialEq for DecorationSet {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().all(|d| other.contains(*d))
    }
}

impl Eq for DecorationSet {}

// No Hash impl: a hash over an order-insensitive set would need
// normalization. Constants hash their structural key only and compare
// decoration sets through Eq.
