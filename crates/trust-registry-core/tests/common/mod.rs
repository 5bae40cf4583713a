// crates/trust-registry-core/tests/common/mod.rs
// ============================================================================
// Module: Shared Test Fixtures
// Description: Common principals and registry constructors for tests.
// Purpose: Keep test scenarios aligned on one owner and provider identity.
// Dependencies: trust-registry-core
// ============================================================================

//! ## Overview
//! Fixture principals mirror the address-like identities used by the
//! deployed registry.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use trust_registry_core::Principal;
use trust_registry_core::ProviderId;
use trust_registry_core::ProviderRegistry;

/// Owner principal used across tests.
pub const OWNER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
/// Provider principal used across tests.
pub const PROVIDER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
/// Display name used across tests.
pub const PROVIDER_NAME: &str = "CyberSec Corp";

/// Returns the owner principal fixture.
pub fn owner() -> Principal {
    Principal::new(OWNER)
}

/// Returns the provider identity fixture.
pub fn provider_id() -> ProviderId {
    ProviderId::new(PROVIDER)
}

/// Returns a registry owned by the fixture owner.
pub fn registry() -> ProviderRegistry {
    ProviderRegistry::new(owner())
}
