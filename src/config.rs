//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then shared
//! read-only with the data client and the renderers.
//!
//! ## Variables
//!
//! - `API_BASE_URL` - Portfolio API base URL (default: `https://portafolio-x5gx.onrender.com/api`)
//! - `REQUEST_TIMEOUT_MS` - Request timeout reported at startup (default: 10000); not applied to requests
//! - `PLACEHOLDER_PROFILE` - Profile image placeholder
//! - `PLACEHOLDER_PROJECT` - Project image placeholder, used when a project has no image
//! - `PORTFOLIO_LOCALE` - `es` or `en` (default: `es`)
//! - `CONTACT_DELAY_MS` - Simulated contact submission latency (default: 1000)
//! - `NOTIFICATION_TTL_MS` - How long the contact notification stays visible (default: 5000)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::utils::locale::Locale;

pub const DEFAULT_API_BASE_URL: &str = "https://portafolio-x5gx.onrender.com/api";
pub const DEFAULT_PLACEHOLDER_PROFILE: &str =
    "https://via.placeholder.com/400x400/00d9ff/0a0a0a?text=Profile";
pub const DEFAULT_PLACEHOLDER_PROJECT: &str =
    "https://via.placeholder.com/600x400/00d9ff/0a0a0a?text=Project";

/// Resource paths of the portfolio API, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub personal_info: String,
    pub experience: String,
    pub skills: String,
    pub education: String,
    pub projects: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            personal_info: "/personalinfo".to_string(),
            experience: "/experience".to_string(),
            skills: "/skill".to_string(),
            education: "/education".to_string(),
            projects: "/project".to_string(),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub endpoints: Endpoints,
    /// Reported at startup only. The data client performs no timeout enforcement.
    pub request_timeout: Duration,
    pub placeholder_profile: String,
    pub placeholder_project: String,
    pub locale: Locale,
    /// Artificial latency of the simulated contact submission.
    pub contact_delay: Duration,
    /// Lifetime of the transient contact notification.
    pub notification_ttl: Duration,
    pub listen_addr: String,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            endpoints: Endpoints::default(),
            request_timeout: Duration::from_millis(10_000),
            placeholder_profile: DEFAULT_PLACEHOLDER_PROFILE.to_string(),
            placeholder_project: DEFAULT_PLACEHOLDER_PROJECT.to_string(),
            locale: Locale::default(),
            contact_delay: Duration::from_millis(1000),
            notification_ttl: Duration::from_millis(5000),
            listen_addr: "0.0.0.0:3000".to_string(),
            static_dir: "static".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is not a number or the locale is unknown.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let locale = match env::var("PORTFOLIO_LOCALE") {
            Ok(value) => Locale::from_str(&value).context("Invalid PORTFOLIO_LOCALE")?,
            Err(_) => defaults.locale,
        };

        Ok(Self {
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            endpoints: defaults.endpoints,
            request_timeout: millis_var("REQUEST_TIMEOUT_MS")?.unwrap_or(defaults.request_timeout),
            placeholder_profile: env::var("PLACEHOLDER_PROFILE")
                .unwrap_or(defaults.placeholder_profile),
            placeholder_project: env::var("PLACEHOLDER_PROJECT")
                .unwrap_or(defaults.placeholder_project),
            locale,
            contact_delay: millis_var("CONTACT_DELAY_MS")?.unwrap_or(defaults.contact_delay),
            notification_ttl: millis_var("NOTIFICATION_TTL_MS")?
                .unwrap_or(defaults.notification_ttl),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an absolute `http`/`https` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `request_timeout` is zero
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.api_base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: '{}'", self.api_base_url))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "API_BASE_URL must use http or https, got '{}'",
                self.api_base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("REQUEST_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        for line in self.summary_lines() {
            tracing::info!("  {}", line);
        }
    }

    /// One line per setting, as logged by [`Self::print_summary`].
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("API base URL: {}", self.api_base_url),
            format!(
                "Request timeout: {}ms (not enforced)",
                self.request_timeout.as_millis()
            ),
            format!("Profile placeholder: {} (not rendered)", self.placeholder_profile),
            format!("Project placeholder: {}", self.placeholder_project),
            format!("Locale: {}", self.locale),
            format!("Contact delay: {}ms", self.contact_delay.as_millis()),
            format!("Notification TTL: {}ms", self.notification_ttl.as_millis()),
            format!("Listen address: {}", self.listen_addr),
            format!("Static dir: {}", self.static_dir),
            format!("Log level: {}", self.log_level),
            format!("Log format: {}", self.log_format),
        ]
    }
}

/// Reads an optional millisecond duration variable.
fn millis_var(name: &str) -> Result<Option<Duration>> {
    match env::var(name) {
        Ok(value) => {
            let millis: u64 = value
                .trim()
                .parse()
                .with_context(|| format!("{name} must be a number of milliseconds, got '{value}'"))?;
            Ok(Some(Duration::from_millis(millis)))
        }
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
