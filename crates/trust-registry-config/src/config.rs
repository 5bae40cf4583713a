// crates/trust-registry-config/src/config.rs
// ============================================================================
// Module: Trust Registry Configuration
// Description: Configuration loading and validation for the Trust Registry.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: trust-registry-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed: there is no usable registry
//! without a valid owner principal.
//! Security posture: config inputs are untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use trust_registry_core::BlockHeight;
use trust_registry_core::DEFAULT_INITIAL_REPUTATION;
use trust_registry_core::LogicalBlockSource;
use trust_registry_core::Principal;
use trust_registry_core::ProviderRegistry;
use trust_registry_core::RegistrySettings;
use trust_registry_core::runtime::DEFAULT_GENESIS_HEIGHT;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "trust-registry.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "TRUST_REGISTRY_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default maximum number of registered providers.
pub(crate) const DEFAULT_MAX_PROVIDERS: usize = 4096;
/// Upper bound accepted for `max_providers`.
pub(crate) const MAX_MAX_PROVIDERS: usize = 1_048_576;
/// Default maximum display name length in bytes.
pub(crate) const DEFAULT_MAX_NAME_LENGTH: usize = 128;
/// Default maximum principal length in bytes.
pub(crate) const DEFAULT_MAX_PRINCIPAL_LENGTH: usize = 128;
/// Upper bound accepted for name and principal length limits.
pub(crate) const MAX_STRING_LIMIT: usize = 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Trust Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Owner identity configuration.
    pub owner: OwnerConfig,
    /// Registration defaults.
    #[serde(default)]
    pub registration: RegistrationConfig,
    /// Registry hard limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Owner identity configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OwnerConfig {
    /// Principal allowed to verify providers and set reputation scores.
    pub principal: String,
}

/// Defaults applied to newly registered providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationConfig {
    /// Reputation score assigned at registration.
    #[serde(default = "default_initial_reputation")]
    pub initial_reputation_score: u32,
    /// Genesis height for the logical block source.
    #[serde(default = "default_genesis_height")]
    pub genesis_block_height: u64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            initial_reputation_score: DEFAULT_INITIAL_REPUTATION,
            genesis_block_height: DEFAULT_GENESIS_HEIGHT,
        }
    }
}

/// Hard limits enforced by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum number of registered providers.
    #[serde(default = "default_max_providers")]
    pub max_providers: usize,
    /// Maximum display name length in bytes.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    /// Maximum principal length in bytes.
    #[serde(default = "default_max_principal_length")]
    pub max_principal_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_providers: DEFAULT_MAX_PROVIDERS,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_principal_length: DEFAULT_MAX_PRINCIPAL_LENGTH,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration with documented defaults for the given owner.
    #[must_use]
    pub fn with_owner(principal: impl Into<String>) -> Self {
        Self {
            owner: OwnerConfig {
                principal: principal.into(),
            },
            registration: RegistrationConfig::default(),
            limits: LimitsConfig::default(),
        }
    }

    /// Loads configuration from the resolved path.
    ///
    /// The path resolves from the argument, then the `TRUST_REGISTRY_CONFIG`
    /// environment variable, then `trust-registry.toml` in the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::parse(content)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        self.registration.validate()?;
        let principal = &self.owner.principal;
        if principal.is_empty() {
            return Err(ConfigError::Invalid("owner principal is empty".to_string()));
        }
        if principal.len() > self.limits.max_principal_length {
            return Err(ConfigError::Invalid(format!(
                "owner principal exceeds {} bytes",
                self.limits.max_principal_length
            )));
        }
        Ok(())
    }

    /// Returns the owner principal.
    #[must_use]
    pub fn owner_principal(&self) -> Principal {
        Principal::new(self.owner.principal.clone())
    }

    /// Returns the registry settings implied by this configuration.
    #[must_use]
    pub const fn settings(&self) -> RegistrySettings {
        RegistrySettings {
            initial_reputation_score: self.registration.initial_reputation_score,
            max_providers: self.limits.max_providers,
            max_name_length: self.limits.max_name_length,
            max_principal_length: self.limits.max_principal_length,
        }
    }

    /// Returns a logical block source starting at the configured genesis.
    #[must_use]
    pub const fn block_source(&self) -> LogicalBlockSource {
        LogicalBlockSource::new(BlockHeight::new(self.registration.genesis_block_height))
    }

    /// Builds a registry from this configuration.
    #[must_use]
    pub fn build_registry(&self) -> ProviderRegistry {
        ProviderRegistry::with_parts(self.owner_principal(), self.settings(), self.block_source())
    }
}

impl RegistrationConfig {
    /// Validates registration defaults.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.genesis_block_height == 0 {
            return Err(ConfigError::Invalid("genesis_block_height must be > 0".to_string()));
        }
        Ok(())
    }
}

impl LimitsConfig {
    /// Validates registry limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_providers == 0 || self.max_providers > MAX_MAX_PROVIDERS {
            return Err(ConfigError::Invalid(format!(
                "max_providers must be in 1..={MAX_MAX_PROVIDERS}"
            )));
        }
        if self.max_name_length == 0 || self.max_name_length > MAX_STRING_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_name_length must be in 1..={MAX_STRING_LIMIT}"
            )));
        }
        if self.max_principal_length == 0 || self.max_principal_length > MAX_STRING_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_principal_length must be in 1..={MAX_STRING_LIMIT}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Default initial reputation score.
const fn default_initial_reputation() -> u32 {
    DEFAULT_INITIAL_REPUTATION
}

/// Default genesis block height.
const fn default_genesis_height() -> u64 {
    DEFAULT_GENESIS_HEIGHT
}

/// Default maximum provider count.
const fn default_max_providers() -> usize {
    DEFAULT_MAX_PROVIDERS
}

/// Default maximum name length.
const fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

/// Default maximum principal length.
const fn default_max_principal_length() -> usize {
    DEFAULT_MAX_PRINCIPAL_LENGTH
}
