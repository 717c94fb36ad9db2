//! The compilation context: canonical tables and result-id allocation.
//!
//! One `SpvContext` outlives everything it interns. It is deliberately not
//! synchronized — a single compilation drives it sequentially, and
//! independent compilations get independent contexts.

use std::fmt;

use rustc_hash::FxHashMap;
use spv_ir::ResultId;

use crate::constant::Constant;
use crate::decoration::{Decoration, DecorationId};

/// Handle to a canonical constant within a [`SpvContext`].
///
/// Handles are stable for the context's lifetime; comparing two of them is
/// the identity comparison downstream deduplication relies on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ConstId(u32);

impl ConstId {
    /// Create a `ConstId` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ConstId(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error when a canonical table or the result-id space exceeds `u32`
/// capacity.
///
/// Registration itself cannot fail; these arise only at the 4-billion-entry
/// boundary of the id representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolOverflow {
    /// The constant arena is full.
    Constants { count: usize },
    /// The decoration arena is full.
    Decorations { count: usize },
    /// The result-id counter is exhausted.
    ResultIds,
}

impl fmt::Display for PoolOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolOverflow::Constants { count } => {
                write!(f, "constant pool exceeded capacity: {count} nodes, max is {}", u32::MAX)
            }
            PoolOverflow::Decorations { count } => {
                write!(f, "decoration pool exceeded capacity: {count} entries, max is {}", u32::MAX)
            }
            PoolOverflow::ResultIds => {
                write!(f, "result-id space exhausted: all {} ids allocated", u32::MAX)
            }
        }
    }
}

impl std::error::Error for PoolOverflow {}

/// Owner of every canonical constant and decoration produced during one
/// compilation, and allocator of result ids.
///
/// # Hash-consing invariant
/// For the lifetime of a context, every set of structurally equal constant
/// requests is represented by exactly one canonical node, and every request
/// resolves to that node's [`ConstId`]. Lookup buckets on the structural
/// hash of `(opcode, type_id, args)` and settles the rest — including
/// order-insensitive decoration-set comparison — by full equality, so the
/// expected cost is O(1) with a short scan inside a rare collision bucket.
pub struct SpvContext {
    /// Canonical nodes, indexed by `ConstId`.
    constants: Vec<Constant>,
    /// Structural index over `constants` for deduplication.
    constant_ids: FxHashMap<Constant, ConstId>,
    /// Interned decoration payloads, indexed by `DecorationId`.
    decorations: Vec<Decoration>,
    /// Index over `decorations` for deduplication.
    decoration_ids: FxHashMap<Decoration, DecorationId>,
    /// Next free result id; id 0 is reserved as invalid by the format.
    next_result_id: u32,
}

impl SpvContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            constants: Vec::with_capacity(64),
            constant_ids: FxHashMap::default(),
            decorations: Vec::with_capacity(16),
            decoration_ids: FxHashMap::default(),
            next_result_id: 1,
        }
    }

    /// Try to intern a candidate constant, returning its canonical handle
    /// or an error at `u32` arena capacity.
    ///
    /// If an equal node is already canonical, the candidate is discarded
    /// and the existing handle returned. Otherwise the candidate is
    /// promoted and owned by this context from here on.
    pub fn try_intern_constant(&mut self, candidate: Constant) -> Result<ConstId, PoolOverflow> {
        if let Some(&id) = self.constant_ids.get(&candidate) {
            return Ok(id);
        }

        let id = ConstId(u32::try_from(self.constants.len()).map_err(|_| {
            PoolOverflow::Constants {
                count: self.constants.len(),
            }
        })?);

        tracing::trace!(opcode = %candidate.opcode(), id = id.raw(), "new canonical constant");
        self.constants.push(candidate.clone());
        self.constant_ids.insert(candidate, id);
        Ok(id)
    }

    /// Intern a candidate constant, returning its canonical handle.
    ///
    /// # Panics
    /// Panics at `u32` arena capacity (over 4 billion distinct constants).
    /// Use [`try_intern_constant`](Self::try_intern_constant) to handle
    /// that boundary gracefully.
    pub fn intern_constant(&mut self, candidate: Constant) -> ConstId {
        self.try_intern_constant(candidate)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Try to intern a decoration payload, returning its handle or an
    /// error at `u32` arena capacity.
    pub fn try_intern_decoration(
        &mut self,
        decoration: Decoration,
    ) -> Result<DecorationId, PoolOverflow> {
        if let Some(&id) = self.decoration_ids.get(&decoration) {
            return Ok(id);
        }

        let id = DecorationId::from_raw(u32::try_from(self.decorations.len()).map_err(|_| {
            PoolOverflow::Decorations {
                count: self.decorations.len(),
            }
        })?);

        tracing::trace!(kind = decoration.kind(), id = id.raw(), "new canonical decoration");
        self.decorations.push(decoration.clone());
        self.decoration_ids.insert(decoration, id);
        Ok(id)
    }

    /// Intern a decoration payload, returning its handle.
    ///
    /// # Panics
    /// Panics at `u32` arena capacity. Use
    /// [`try_intern_decoration`](Self::try_intern_decoration) to handle
    /// that boundary gracefully.
    pub fn intern_decoration(&mut self, decoration: Decoration) -> DecorationId {
        self.try_intern_decoration(decoration)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Resolve a canonical handle to its node.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this context.
    #[inline]
    pub fn constant(&self, id: ConstId) -> &Constant {
        &self.constants[id.index()]
    }

    /// Resolve a decoration handle to its payload.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this context.
    #[inline]
    pub fn decoration(&self, id: DecorationId) -> &Decoration {
        &self.decorations[id.index()]
    }

    /// Number of canonical constants.
    pub fn constant_count(&self) -> usize {
        self.constants.len()
    }

    /// Number of interned decorations.
    pub fn decoration_count(&self) -> usize {
        self.decorations.len()
    }

    /// True when nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty() && self.decorations.is_empty()
    }

    /// Try to allocate a fresh result id, erroring when the id space is
    /// exhausted.
    pub fn try_allocate_result_id(&mut self) -> Result<ResultId, PoolOverflow> {
        if self.next_result_id == u32::MAX {
            return Err(PoolOverflow::ResultIds);
        }
        let id = ResultId::from_raw(self.next_result_id);
        self.next_result_id += 1;
        Ok(id)
    }

    /// Allocate a fresh result id. Ids are unique per context and start
    /// at 1; id 0 is reserved as invalid by the format.
    ///
    /// # Panics
    /// Panics when the `u32` id space is exhausted. Use
    /// [`try_allocate_result_id`](Self::try_allocate_result_id) to handle
    /// that boundary gracefully.
    pub fn allocate_result_id(&mut self) -> ResultId {
        self.try_allocate_result_id()
            .unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Default for SpvContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpvContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpvContext")
            .field("constants", &self.constants.len())
            .field("decorations", &self.decorations.len())
            .field("next_result_id", &self.next_result_id)
            .finish()
    }
}

mod construct;
