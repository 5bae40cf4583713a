// crates/trust-registry-core/src/runtime/mod.rs
// ============================================================================
// Module: Trust Registry Runtime
// Description: Registry runtime and logical block source helpers.
// Purpose: Provide the owner-gated registry and deterministic height supply.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime couples the provider map with a block source so every
//! successful mutation lands at a well-defined height. Hosts that need
//! non-logical heights implement [`BlockSource`] themselves.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod block_source;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use block_source::BlockSource;
pub use block_source::DEFAULT_GENESIS_HEIGHT;
pub use block_source::LogicalBlockSource;
pub use registry::ProviderRegistry;
pub use registry::RegistryError;
pub use registry::RegistrySettings;
