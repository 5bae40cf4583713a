// crates/trust-registry-core/tests/registration.rs
// ============================================================================
// Module: Registration Tests
// Description: Tests for provider registration and its fail-closed limits.
// Purpose: Validate record defaults, uniqueness, and input validation.
// ============================================================================
//! ## Overview
//! Ensures registration creates records with documented defaults, rejects
//! duplicate identities without touching the original record, and fails
//! closed on invalid input and capacity limits.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use trust_registry_core::BlockHeight;
use trust_registry_core::LogicalBlockSource;
use trust_registry_core::ProviderId;
use trust_registry_core::ProviderRegistry;
use trust_registry_core::RegistryError;
use trust_registry_core::RegistrySettings;

mod common;
use crate::common::PROVIDER_NAME;
use crate::common::owner;
use crate::common::provider_id;
use crate::common::registry;

/// Verifies a fresh registration carries the documented defaults.
#[test]
fn register_new_provider_applies_defaults() {
    let mut registry = registry();
    let record = registry.register(provider_id(), PROVIDER_NAME).expect("register provider");

    assert_eq!(record.provider_id, provider_id());
    assert_eq!(record.name, PROVIDER_NAME);
    assert_eq!(record.reputation_score, 50);
    assert!(!record.verified);
    assert_eq!(record.stats.total_predictions, 0);
    assert_eq!(record.stats.accurate_predictions, 0);
    assert!(record.stats.last_activity.get() > 0);
    assert!(record.registration_block.get() > 0);
    assert_eq!(record.stats.last_activity, record.registration_block);
    assert_eq!(registry.len(), 1);
}

/// Verifies duplicate registration fails and preserves the original record.
#[test]
fn register_duplicate_identity_fails_closed() {
    let mut registry = registry();
    registry.register(provider_id(), PROVIDER_NAME).expect("first registration");

    let err = registry
        .register(provider_id(), "Imposter Corp")
        .expect_err("duplicate registration must fail");
    assert_eq!(err, RegistryError::AlreadyRegistered(provider_id()));

    let record = registry.provider(&provider_id()).expect("original record");
    assert_eq!(record.name, PROVIDER_NAME);
    assert_eq!(registry.len(), 1);
}

/// Verifies empty and oversized names are rejected before mutation.
#[test]
fn register_rejects_invalid_names() {
    let mut registry = registry();

    let err = registry.register(provider_id(), "").expect_err("empty name must fail");
    assert!(matches!(err, RegistryError::InvalidName(_)));

    let oversized = "x".repeat(200);
    let err = registry
        .register(provider_id(), oversized)
        .expect_err("oversized name must fail");
    assert!(matches!(err, RegistryError::InvalidName(_)));

    assert!(registry.is_empty());
}

/// Verifies empty and oversized identities are rejected before mutation.
#[test]
fn register_rejects_invalid_principals() {
    let mut registry = registry();

    let err = registry
        .register(ProviderId::new(""), PROVIDER_NAME)
        .expect_err("empty principal must fail");
    assert!(matches!(err, RegistryError::InvalidPrincipal(_)));

    let oversized = ProviderId::new("S".repeat(200));
    let err = registry
        .register(oversized, PROVIDER_NAME)
        .expect_err("oversized principal must fail");
    assert!(matches!(err, RegistryError::InvalidPrincipal(_)));

    assert!(registry.is_empty());
}

/// Verifies the provider capacity limit is enforced.
#[test]
fn register_enforces_capacity_limit() {
    let settings = RegistrySettings {
        max_providers: 2,
        ..RegistrySettings::default()
    };
    let mut registry =
        ProviderRegistry::with_parts(owner(), settings, LogicalBlockSource::default());

    registry.register(ProviderId::new("provider-1"), "One").expect("first");
    registry.register(ProviderId::new("provider-2"), "Two").expect("second");
    let err = registry
        .register(ProviderId::new("provider-3"), "Three")
        .expect_err("capacity must be enforced");
    assert_eq!(err, RegistryError::CapacityExceeded(2));
    assert_eq!(registry.len(), 2);
}

/// Verifies registration heights come from the block source and are monotone.
#[test]
fn register_heights_are_monotone() {
    let settings = RegistrySettings::default();
    let blocks = LogicalBlockSource::new(BlockHeight::new(1000));
    let mut registry = ProviderRegistry::with_parts(owner(), settings, blocks);

    let first = registry.register(ProviderId::new("provider-1"), "One").expect("first");
    let second = registry.register(ProviderId::new("provider-2"), "Two").expect("second");

    assert_eq!(first.registration_block, BlockHeight::new(1000));
    assert_eq!(second.registration_block, BlockHeight::new(1001));
    assert!(second.registration_block > first.registration_block);
}
