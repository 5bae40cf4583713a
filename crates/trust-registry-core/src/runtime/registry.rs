// crates/trust-registry-core/src/runtime/registry.rs
// ============================================================================
// Module: Trust Registry Runtime
// Description: Owner-gated provider registry over an in-memory map.
// Purpose: Enforce identity uniqueness and owner-only mutation paths.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The provider registry maps provider identities to records and gates every
//! privileged mutation on the distinguished owner principal. Registration is
//! open to any identity; verification, reputation updates, and prediction
//! accrual are owner-only. All operations are atomic single-record reads and
//! writes; failures are returned as values and leave the map untouched.
//!
//! Security posture: identities and names are untrusted input. Length and
//! emptiness checks fail closed before any map mutation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::BlockHeight;
use crate::core::DEFAULT_INITIAL_REPUTATION;
use crate::core::Principal;
use crate::core::ProviderId;
use crate::core::ProviderRecord;
use crate::core::ProviderStats;
use crate::runtime::block_source::BlockSource;
use crate::runtime::block_source::LogicalBlockSource;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default maximum number of registered providers.
const DEFAULT_MAX_PROVIDERS: usize = 4096;
/// Default maximum display name length in bytes.
const DEFAULT_MAX_NAME_LENGTH: usize = 128;
/// Default maximum principal length in bytes.
const DEFAULT_MAX_PRINCIPAL_LENGTH: usize = 128;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure modes for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The identity is already present in the registry.
    #[error("provider already registered: {0}")]
    AlreadyRegistered(ProviderId),
    /// The caller is not the registry owner.
    #[error("caller is not the registry owner")]
    OwnerOnly,
    /// The identity is not present in the registry.
    #[error("provider not found: {0}")]
    NotFound(ProviderId),
    /// The display name is empty or exceeds the configured limit.
    #[error("invalid provider name: {0}")]
    InvalidName(String),
    /// The provider identity is empty or exceeds the configured limit.
    #[error("invalid principal: {0}")]
    InvalidPrincipal(String),
    /// The registry holds the configured maximum number of providers.
    #[error("registry capacity exceeded: max {0} providers")]
    CapacityExceeded(usize),
}

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Tunable limits and defaults for a registry instance.
///
/// # Invariants
/// - All limits are enforced fail-closed before mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Reputation score assigned at registration.
    pub initial_reputation_score: u32,
    /// Maximum number of registered providers.
    pub max_providers: usize,
    /// Maximum display name length in bytes.
    pub max_name_length: usize,
    /// Maximum principal length in bytes.
    pub max_principal_length: usize,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            initial_reputation_score: DEFAULT_INITIAL_REPUTATION,
            max_providers: DEFAULT_MAX_PROVIDERS,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_principal_length: DEFAULT_MAX_PRINCIPAL_LENGTH,
        }
    }
}

// ============================================================================
// SECTION: Provider Registry
// ============================================================================

/// Owner-gated registry of security providers.
///
/// # Invariants
/// - One record per identity; records are never deleted.
/// - `verified` and `reputation_score` change only through owner-gated paths.
/// - The block source advances once per successful mutation.
#[derive(Debug, Clone)]
pub struct ProviderRegistry<B: BlockSource = LogicalBlockSource> {
    /// Distinguished principal allowed to mutate provider state.
    owner: Principal,
    /// Limits and registration defaults.
    settings: RegistrySettings,
    /// Provider records keyed by identity.
    providers: BTreeMap<ProviderId, ProviderRecord>,
    /// Height supply for mutations.
    blocks: B,
}

impl ProviderRegistry<LogicalBlockSource> {
    /// Creates a registry with default settings and a logical block source.
    #[must_use]
    pub fn new(owner: Principal) -> Self {
        Self::with_parts(owner, RegistrySettings::default(), LogicalBlockSource::default())
    }
}

impl<B: BlockSource> ProviderRegistry<B> {
    /// Creates a registry from explicit settings and a block source.
    #[must_use]
    pub const fn with_parts(owner: Principal, settings: RegistrySettings, blocks: B) -> Self {
        Self {
            owner,
            settings,
            providers: BTreeMap::new(),
            blocks,
        }
    }

    /// Returns the registry owner.
    #[must_use]
    pub const fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Returns the height the next mutation will land at.
    #[must_use]
    pub fn current_height(&self) -> BlockHeight {
        self.blocks.current()
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true when no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Registers a new provider under the given identity.
    ///
    /// The record starts unverified with the configured initial reputation
    /// score, zeroed statistics, and a registration height taken from the
    /// block source.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] when the identity exists,
    /// [`RegistryError::InvalidPrincipal`] or [`RegistryError::InvalidName`]
    /// when inputs fail validation, and [`RegistryError::CapacityExceeded`]
    /// when the registry is full.
    pub fn register(
        &mut self,
        provider_id: ProviderId,
        name: impl Into<String>,
    ) -> Result<ProviderRecord, RegistryError> {
        let name = name.into();
        self.validate_principal(&provider_id)?;
        self.validate_name(&name)?;
        if self.providers.contains_key(&provider_id) {
            return Err(RegistryError::AlreadyRegistered(provider_id));
        }
        if self.providers.len() >= self.settings.max_providers {
            return Err(RegistryError::CapacityExceeded(self.settings.max_providers));
        }
        let height = self.blocks.current();
        let record = ProviderRecord::new(
            provider_id.clone(),
            name,
            self.settings.initial_reputation_score,
            height,
        );
        self.providers.insert(provider_id, record.clone());
        self.blocks.advance();
        Ok(record)
    }

    /// Marks a provider as verified. Owner-only.
    ///
    /// Ownership is checked before existence, so non-owner callers cannot
    /// probe for registered identities.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::OwnerOnly`] when the caller is not the owner
    /// and [`RegistryError::NotFound`] when the identity is absent.
    pub fn verify(
        &mut self,
        caller: &Principal,
        provider_id: &ProviderId,
    ) -> Result<ProviderRecord, RegistryError> {
        self.require_owner(caller)?;
        let record = self
            .providers
            .get_mut(provider_id)
            .ok_or_else(|| RegistryError::NotFound(provider_id.clone()))?;
        record.verified = true;
        let snapshot = record.clone();
        self.blocks.advance();
        Ok(snapshot)
    }

    /// Overwrites a provider's reputation score. Owner-only.
    ///
    /// Returns the new score.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::OwnerOnly`] when the caller is not the owner
    /// and [`RegistryError::NotFound`] when the identity is absent.
    pub fn set_reputation(
        &mut self,
        caller: &Principal,
        provider_id: &ProviderId,
        score: u32,
    ) -> Result<u32, RegistryError> {
        self.require_owner(caller)?;
        let record = self
            .providers
            .get_mut(provider_id)
            .ok_or_else(|| RegistryError::NotFound(provider_id.clone()))?;
        record.reputation_score = score;
        self.blocks.advance();
        Ok(score)
    }

    /// Records a prediction outcome for a provider. Owner-only.
    ///
    /// Increments the total count, increments the accurate count when the
    /// prediction was accurate, and stamps `last_activity` with the current
    /// height. Reputation is never derived from accuracy here.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::OwnerOnly`] when the caller is not the owner
    /// and [`RegistryError::NotFound`] when the identity is absent.
    pub fn record_prediction(
        &mut self,
        caller: &Principal,
        provider_id: &ProviderId,
        accurate: bool,
    ) -> Result<ProviderStats, RegistryError> {
        self.require_owner(caller)?;
        let height = self.blocks.current();
        let record = self
            .providers
            .get_mut(provider_id)
            .ok_or_else(|| RegistryError::NotFound(provider_id.clone()))?;
        record.stats.total_predictions = record.stats.total_predictions.saturating_add(1);
        if accurate {
            record.stats.accurate_predictions = record.stats.accurate_predictions.saturating_add(1);
        }
        record.stats.last_activity = height;
        let stats = record.stats;
        self.blocks.advance();
        Ok(stats)
    }

    /// Looks up a provider record.
    #[must_use]
    pub fn provider(&self, provider_id: &ProviderId) -> Option<&ProviderRecord> {
        self.providers.get(provider_id)
    }

    /// Looks up a provider's prediction statistics.
    #[must_use]
    pub fn stats(&self, provider_id: &ProviderId) -> Option<&ProviderStats> {
        self.providers.get(provider_id).map(|record| &record.stats)
    }

    /// Returns true when the provider exists and is verified.
    ///
    /// Unknown identities report false.
    #[must_use]
    pub fn is_verified(&self, provider_id: &ProviderId) -> bool {
        self.providers
            .get(provider_id)
            .is_some_and(|record| record.verified)
    }

    /// Rejects callers other than the registry owner.
    fn require_owner(&self, caller: &Principal) -> Result<(), RegistryError> {
        if caller == &self.owner {
            Ok(())
        } else {
            Err(RegistryError::OwnerOnly)
        }
    }

    /// Rejects empty or oversized provider identities.
    fn validate_principal(&self, provider_id: &ProviderId) -> Result<(), RegistryError> {
        let value = provider_id.as_str();
        if value.is_empty() {
            return Err(RegistryError::InvalidPrincipal("principal is empty".to_string()));
        }
        if value.len() > self.settings.max_principal_length {
            return Err(RegistryError::InvalidPrincipal(format!(
                "principal exceeds {} bytes",
                self.settings.max_principal_length
            )));
        }
        Ok(())
    }

    /// Rejects empty or oversized display names.
    fn validate_name(&self, name: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidName("name is empty".to_string()));
        }
        if name.len() > self.settings.max_name_length {
            return Err(RegistryError::InvalidName(format!(
                "name exceeds {} bytes",
                self.settings.max_name_length
            )));
        }
        Ok(())
    }
}
