//! # Runtime Configuration
//!
//! An explicit configuration struct built once at startup and handed down
//! into the lookup engine. Base URLs come from the environment with the
//! public endpoints as defaults, which keeps the engine testable: tests
//! inject their own URLs instead of touching the process environment.

use std::env;
use std::time::Duration;

pub const BRASIL_API_ENV: &str = "BASE_URI_BRASIL_API";
pub const VIA_CEP_ENV: &str = "BASE_URI_VIA_CEP";

pub const DEFAULT_BRASIL_API_BASE_URL: &str = "https://brasilapi.com.br/api/cep/v1/";
pub const DEFAULT_VIA_CEP_BASE_URL: &str = "https://viacep.com.br/ws/";

/// Deadline for the whole race.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the BrasilAPI provider appends the CEP to.
    pub brasil_api_base_url: String,
    /// Base URL the ViaCEP provider appends the CEP and `/json` to.
    pub via_cep_base_url: String,
    /// How long the selector waits before declaring a timeout.
    pub timeout: Duration,
    /// Suppresses the header and spinner, results only.
    pub quiet: bool,
}

impl Config {
    /// Builds a config from the environment, falling back to the public
    /// service endpoints when the override variables are unset.
    pub fn from_env(timeout: Duration, quiet: bool) -> Self {
        Self {
            brasil_api_base_url: env::var(BRASIL_API_ENV)
                .unwrap_or_else(|_| DEFAULT_BRASIL_API_BASE_URL.to_string()),
            via_cep_base_url: env::var(VIA_CEP_ENV)
                .unwrap_or_else(|_| DEFAULT_VIA_CEP_BASE_URL.to_string()),
            timeout,
            quiet,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brasil_api_base_url: DEFAULT_BRASIL_API_BASE_URL.to_string(),
            via_cep_base_url: DEFAULT_VIA_CEP_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            quiet: false,
        }
    }
}
