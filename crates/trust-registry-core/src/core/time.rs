// crates/trust-registry-core/src/core/time.rs
// ============================================================================
// Module: Trust Registry Time Model
// Description: Logical block heights for registration and activity tracking.
// Purpose: Provide deterministic, replayable sequence values across records.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The registry stamps records with logical block heights instead of
//! wall-clock time. The core never reads the clock; hosts supply heights via
//! a [`crate::runtime::BlockSource`], which keeps replay deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Block Height
// ============================================================================

/// Monotonic logical sequence value used in registry records.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads wall-clock time.
/// - Heights observed by the registry are monotone non-decreasing; monotonicity
///   of raw values is a source responsibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Creates a block height from a raw sequence value.
    #[must_use]
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Returns the raw sequence value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the next height, saturating at the maximum value.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for BlockHeight {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
