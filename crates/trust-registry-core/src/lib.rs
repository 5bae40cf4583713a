// crates/trust-registry-core/src/lib.rs
// ============================================================================
// Module: Trust Registry Core Library
// Description: Public API surface for the Trust Registry core.
// Purpose: Expose core types and the registry runtime.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Trust Registry core provides an owner-gated security-provider registry
//! with reputation scores and prediction statistics. It is host-agnostic:
//! the registry never reads wall-clock time and holds no I/O handles, so
//! hosts integrate through plain function calls.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use runtime::BlockSource;
pub use runtime::LogicalBlockSource;
pub use runtime::ProviderRegistry;
pub use runtime::RegistryError;
pub use runtime::RegistrySettings;
