//! Submission configuration from environment variables.

use std::env;
use std::fmt;
use std::time::Duration;

use shared_crypto::Ed25519KeyPair;
use shared_types::FarcasterNetwork;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::domain::errors::SubmitError;
use crate::telemetry::LogConfig;

/// Local hub HTTP API.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:2281/v1/submitMessage";

/// Placeholder seed; never valid for submission.
pub const PLACEHOLDER_SEED: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Invalid configuration value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("No signer seed configured (set HUB_SIGNER_SEED)")]
    MissingSigner,

    #[error("No fid configured (set HUB_FID)")]
    MissingFid,
}

/// Everything needed to sign and submit.
#[derive(Clone)]
pub struct SubmitConfig {
    /// Full URL of the `submitMessage` endpoint
    pub endpoint: String,

    /// Hex Ed25519 seed of the app signer
    pub signer_seed: Zeroizing<String>,

    /// Author id
    pub fid: u64,

    pub network: FarcasterNetwork,

    /// Whole-request timeout
    pub timeout: Duration,

    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,

    pub log: LogConfig,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            signer_seed: Zeroizing::new(PLACEHOLDER_SEED.to_string()),
            fid: 0,
            network: FarcasterNetwork::Mainnet,
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            log: LogConfig::default(),
        }
    }
}

impl fmt::Debug for SubmitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitConfig")
            .field("endpoint", &self.endpoint)
            .field("signer_seed", &"<redacted>")
            .field("fid", &self.fid)
            .field("network", &self.network)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("log", &self.log)
            .finish()
    }
}

impl SubmitConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HUB_ENDPOINT`: submitMessage URL (default: http://127.0.0.1:2281/v1/submitMessage)
    /// - `HUB_SIGNER_SEED`: hex Ed25519 seed (default: all-zero placeholder)
    /// - `HUB_FID`: author fid (default: 0, rejected by `validate`)
    /// - `HUB_NETWORK`: mainnet, testnet or devnet (default: mainnet)
    /// - `HUB_TIMEOUT_SECS`: request timeout (default: 10)
    /// - `HUB_CONNECT_TIMEOUT_SECS`: connect timeout (default: 5)
    /// - `HUB_LOG_LEVEL` or `RUST_LOG`: log filter (default: info)
    /// - `HUB_JSON_LOGS`: JSON log output (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let network = match lookup("HUB_NETWORK") {
            Some(value) => value
                .parse::<FarcasterNetwork>()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: "HUB_NETWORK",
                    value,
                    reason,
                })?,
            None => defaults.network,
        };

        Ok(Self {
            endpoint: lookup("HUB_ENDPOINT").unwrap_or(defaults.endpoint),
            signer_seed: lookup("HUB_SIGNER_SEED")
                .map(Zeroizing::new)
                .unwrap_or(defaults.signer_seed),
            fid: parse_number(&lookup, "HUB_FID")?.unwrap_or(defaults.fid),
            network,
            timeout: parse_number(&lookup, "HUB_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            connect_timeout: parse_number(&lookup, "HUB_CONNECT_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            log: LogConfig {
                log_level: lookup("HUB_LOG_LEVEL")
                    .or_else(|| lookup("RUST_LOG"))
                    .unwrap_or(defaults.log.log_level),
                json_logs: lookup("HUB_JSON_LOGS")
                    .map(|v| v.to_lowercase() == "true" || v == "1")
                    .unwrap_or(defaults.log.json_logs),
            },
        })
    }

    /// Check that the configuration can sign and submit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "HUB_ENDPOINT",
                value: self.endpoint.clone(),
                reason: "must be an http(s) URL".to_string(),
            });
        }

        let seed = self.signer_seed.trim();
        if seed.is_empty() || seed.trim_start_matches("0x") == PLACEHOLDER_SEED {
            return Err(ConfigError::MissingSigner);
        }

        if self.fid == 0 {
            return Err(ConfigError::MissingFid);
        }

        for (key, timeout) in [
            ("HUB_TIMEOUT_SECS", self.timeout),
            ("HUB_CONNECT_TIMEOUT_SECS", self.connect_timeout),
        ] {
            if timeout.is_zero() {
                return Err(ConfigError::InvalidValue {
                    key,
                    value: timeout.as_secs().to_string(),
                    reason: "timeout must be positive".to_string(),
                });
            }
        }

        if self.network == FarcasterNetwork::None {
            return Err(ConfigError::InvalidValue {
                key: "HUB_NETWORK",
                value: self.network.to_string(),
                reason: "network must be set".to_string(),
            });
        }

        Ok(())
    }

    /// Decode the configured seed into a signing key.
    pub fn signer(&self) -> Result<Ed25519KeyPair, SubmitError> {
        Ok(Ed25519KeyPair::from_hex_seed(&self.signer_seed)?)
    }
}

fn parse_number<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    key,
                    reason: e.to_string(),
                    value,
                })
        })
        .transpose()
}
