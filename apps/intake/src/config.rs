use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::extraction::name::NameCasePolicy;

const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub recommend_api_url: String,
    pub translate_api_url: String,
    pub name_case_policy: NameCasePolicy,
    pub resume_upload_required: bool,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            recommend_api_url: env_or("RECOMMEND_API_URL", DEFAULT_SERVICE_URL),
            translate_api_url: env_or("TRANSLATE_API_URL", DEFAULT_SERVICE_URL),
            name_case_policy: env_or("NAME_CASE_POLICY", "lenient")
                .parse::<NameCasePolicy>()
                .map_err(anyhow::Error::msg)
                .context("NAME_CASE_POLICY must be 'lenient' or 'strict'")?,
            resume_upload_required: parse_bool(&env_or("RESUME_UPLOAD_REQUIRED", "false"))
                .context("RESUME_UPLOAD_REQUIRED must be a boolean")?,
            http_timeout: Duration::from_secs(
                env_or("HTTP_TIMEOUT_SECS", "120")
                    .parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool(" YES ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
