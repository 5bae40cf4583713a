// crates/trust-registry-config/src/lib.rs
// ============================================================================
// Module: Trust Registry Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for trust-registry.toml semantics.
// Dependencies: trust-registry-core, serde, toml
// ============================================================================

//! ## Overview
//! `trust-registry-config` defines the canonical configuration model for the
//! Trust Registry. It provides strict, fail-closed parsing and validation of
//! the owner principal, registration defaults, and registry limits.
//!
//! Security posture: config inputs are untrusted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
