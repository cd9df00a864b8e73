use tracing::info;

/// Environment variable holding the booking API base URL
pub const API_BASE_URL_VAR: &str = "BOOKING_API_BASE_URL";

/// Path of the booking endpoint, relative to the base URL
pub const BOOKING_PATH: &str = "/book-appointment";

/// Application configuration
/// In debug builds: loads from .env file, then the process environment
/// In the browser: only the value baked in at compile time is available
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Base URL of the booking server. `None` means same-origin.
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load configuration once at startup
    pub fn load() -> Self {
        #[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                tracing::debug!("Config: No .env file found");
            }
        }

        let config = Self::from_env();
        match &config.api_base_url {
            Some(base) => info!("Config: booking endpoint base URL is {}", base),
            None => info!("Config: no base URL configured, using relative booking path"),
        }
        config
    }

    /// Read the base URL from the process environment, falling back to the
    /// value captured at compile time
    fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(API_BASE_URL_VAR).ok();
        #[cfg(target_arch = "wasm32")]
        let runtime: Option<String> = None;

        let raw = runtime.or_else(|| option_env!("BOOKING_API_BASE_URL").map(str::to_string));
        Self::with_base_url(raw)
    }

    /// Build a config from an explicit base URL. Empty values mean unset.
    pub fn with_base_url(base: Option<String>) -> Self {
        Self {
            api_base_url: base.filter(|b| !b.is_empty()),
        }
    }

    /// Full URL of the booking endpoint
    pub fn booking_url(&self) -> String {
        let base = self
            .api_base_url
            .as_deref()
            .map(|b| b.strip_suffix('/').unwrap_or(b))
            .unwrap_or_default();

        if base.is_empty() {
            BOOKING_PATH.to_string()
        } else {
            format!("{}{}", base, BOOKING_PATH)
        }
    }
}
