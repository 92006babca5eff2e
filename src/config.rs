use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // AI fallback
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_api_key: String,
    /// Applied by the binary around the whole parse; the library never times out.
    pub ai_timeout_secs: u64,

    // Default template
    pub default_symbol: String,
    pub default_leverage: u32,
    /// IANA zone name used for the "now" fallback of the open time.
    pub timezone: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            ai_base_url: env("AI_BASE_URL", "https://generativelanguage.googleapis.com"),
            ai_model: env("AI_MODEL", "gemini-2.0-flash"),
            ai_api_key: env("AI_API_KEY", ""),
            ai_timeout_secs: env("AI_TIMEOUT_SECS", "30").parse().unwrap_or(30),
            default_symbol: env("DEFAULT_SYMBOL", "ETH").to_uppercase(),
            default_leverage: env("DEFAULT_LEVERAGE", "100").parse().unwrap_or(100),
            timezone: env("TIMEZONE", "Asia/Ho_Chi_Minh"),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
