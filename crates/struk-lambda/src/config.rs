use std::env;
use std::path::PathBuf;
use std::time::Duration;

use struk_export::pdf::LaunchConfig;
use struk_export::store::StoreProfile;

const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read once at cold start.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Chrome/Chromium binary. Auto-detected when unset.
    pub chrome_path: Option<PathBuf>,
    pub chrome_sandbox: bool,
    pub chrome_idle_timeout: Duration,
    /// IANA zone name used to display epoch timestamps.
    pub time_zone: String,
    pub store: StoreProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            chrome_sandbox: false,
            chrome_idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            time_zone: "UTC".to_string(),
            store: StoreProfile::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = var("CHROME_PATH") {
            config.chrome_path = Some(PathBuf::from(path));
        }
        if let Some(sandbox) = var("CHROME_SANDBOX") {
            config.chrome_sandbox = parse_bool("CHROME_SANDBOX", &sandbox)?;
        }
        if let Some(secs) = var("CHROME_IDLE_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                eyre::eyre!("CHROME_IDLE_TIMEOUT_SECS must be a whole number of seconds: {e}")
            })?;
            config.chrome_idle_timeout = Duration::from_secs(secs);
        }
        if let Some(tz) = var("STRUK_TIMEZONE") {
            config.time_zone = tz.trim().to_string();
        }
        if let Some(name) = var("STRUK_STORE_NAME") {
            config.store.name = name;
        }
        if let Some(address) = var("STRUK_STORE_ADDRESS") {
            config.store.address = address;
        }
        if let Some(greeting) = var("STRUK_STORE_GREETING") {
            config.store.greeting = greeting;
        }
        if let Some(contact) = var("STRUK_SUPPORT_CONTACT") {
            config.store.support_contact = contact;
        }

        Ok(config)
    }

    pub fn launch_config(&self) -> LaunchConfig {
        LaunchConfig {
            executable: self.chrome_path.clone(),
            sandbox: self.chrome_sandbox,
            idle_timeout: self.chrome_idle_timeout,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> eyre::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre::eyre!("{key} must be a boolean, got {other:?}")),
    }
}
