// crates/trust-registry-core/src/core/provider.rs
// ============================================================================
// Module: Trust Registry Provider Records
// Description: Provider record and prediction statistics structures.
// Purpose: Provide stable, serializable registry state for providers.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A provider record captures the registered display name, the owner-managed
//! reputation score and verification flag, the registration height, and the
//! accrued prediction statistics. Records are created once per identity and
//! never deleted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ProviderId;
use crate::core::time::BlockHeight;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Reputation score assigned to every provider at registration.
pub const DEFAULT_INITIAL_REPUTATION: u32 = 50;

// ============================================================================
// SECTION: Prediction Statistics
// ============================================================================

/// Accrued prediction statistics for a provider.
///
/// # Invariants
/// - `accurate_predictions <= total_predictions`.
/// - `last_activity` is the height of the most recent accrual or the
///   registration height when no predictions have been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStats {
    /// Total predictions recorded for the provider.
    pub total_predictions: u64,
    /// Predictions recorded as accurate.
    pub accurate_predictions: u64,
    /// Height of the most recent activity.
    pub last_activity: BlockHeight,
}

impl ProviderStats {
    /// Returns zeroed statistics stamped at the given height.
    #[must_use]
    pub const fn zeroed_at(height: BlockHeight) -> Self {
        Self {
            total_predictions: 0,
            accurate_predictions: 0,
            last_activity: height,
        }
    }
}

// ============================================================================
// SECTION: Provider Record
// ============================================================================

/// Canonical registry state for a single provider.
///
/// # Invariants
/// - `provider_id` is unique across the registry.
/// - `reputation_score` changes only through the owner-gated mutation path.
/// - `verified` transitions false to true only via owner action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Provider identity.
    pub provider_id: ProviderId,
    /// Registered display name.
    pub name: String,
    /// Owner-managed reputation score.
    pub reputation_score: u32,
    /// Owner-granted verification flag.
    pub verified: bool,
    /// Height at which the provider registered.
    pub registration_block: BlockHeight,
    /// Accrued prediction statistics.
    pub stats: ProviderStats,
}

impl ProviderRecord {
    /// Creates a fresh record for a newly registered provider.
    #[must_use]
    pub fn new(
        provider_id: ProviderId,
        name: String,
        reputation_score: u32,
        height: BlockHeight,
    ) -> Self {
        Self {
            provider_id,
            name,
            reputation_score,
            verified: false,
            registration_block: height,
            stats: ProviderStats::zeroed_at(height),
        }
    }
}
