// crates/trust-registry-core/src/runtime/block_source.rs
// ============================================================================
// Module: Trust Registry Block Source
// Description: Height supply for registry mutations.
// Purpose: Provide a deterministic logical block source without external deps.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A [`BlockSource`] answers "what height is it now" for the registry. The
//! built-in [`LogicalBlockSource`] is a plain monotonic counter, which keeps
//! tests and replays deterministic. Hosts anchored to an external chain or
//! clock implement the trait over their own height feed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BlockHeight;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default genesis height for the logical block source.
pub const DEFAULT_GENESIS_HEIGHT: u64 = 1000;

// ============================================================================
// SECTION: Block Source
// ============================================================================

/// Supplies the current height for registry mutations.
pub trait BlockSource {
    /// Returns the current height.
    fn current(&self) -> BlockHeight;

    /// Advances the source past the current height.
    ///
    /// The registry calls this once per successful mutation, so heights
    /// observed across mutations are monotone non-decreasing.
    fn advance(&mut self);
}

/// Deterministic monotonic block source.
///
/// # Invariants
/// - Heights are monotone non-decreasing and saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalBlockSource {
    /// Height returned by the next `current` call.
    height: BlockHeight,
}

impl LogicalBlockSource {
    /// Creates a source starting at the given genesis height.
    #[must_use]
    pub const fn new(genesis: BlockHeight) -> Self {
        Self { height: genesis }
    }
}

impl Default for LogicalBlockSource {
    fn default() -> Self {
        Self::new(BlockHeight::new(DEFAULT_GENESIS_HEIGHT))
    }
}

impl BlockSource for LogicalBlockSource {
    fn current(&self) -> BlockHeight {
        self.height
    }

    fn advance(&mut self) {
        self.height = self.height.next();
    }
}
