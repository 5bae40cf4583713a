// crates/trust-registry-core/src/core/mod.rs
// ============================================================================
// Module: Trust Registry Core Types
// Description: Canonical provider record and identifier structures.
// Purpose: Provide stable, serializable types for registry state.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Trust Registry core types define provider identities, records, and the
//! logical time model. These types are the canonical source of truth for any
//! derived API surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod provider;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::Principal;
pub use identifiers::ProviderId;
pub use provider::DEFAULT_INITIAL_REPUTATION;
pub use provider::ProviderRecord;
pub use provider::ProviderStats;
pub use time::BlockHeight;
