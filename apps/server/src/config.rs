use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use tvagent_market_data::provider::{stooq, yahoo};
use tvagent_tools::DEFAULT_CHART_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Bound on each outbound provider request.
    pub fetch_timeout: Duration,
    pub primary_base_url: String,
    pub secondary_base_url: String,
    /// Chart opened by the backtest tool when the caller gives none.
    pub tv_chart_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            fetch_timeout: Duration::from_millis(10_000),
            primary_base_url: stooq::DEFAULT_BASE_URL.to_string(),
            secondary_base_url: yahoo::DEFAULT_BASE_URL.to_string(),
            tv_chart_url: DEFAULT_CHART_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment (and `.env` when present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let mut listen_addr: SocketAddr = match std::env::var("TVA_LISTEN_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("Invalid TVA_LISTEN_ADDR '{}'", addr))?,
            Err(_) => defaults.listen_addr,
        };
        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT '{}'", port))?;
            listen_addr.set_port(port);
        }

        let cors_allow = std::env::var("TVA_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: env_millis("TVA_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            fetch_timeout: env_millis("TVA_FETCH_TIMEOUT_MS", defaults.fetch_timeout),
            primary_base_url: env_or("TVA_PRIMARY_BASE_URL", defaults.primary_base_url),
            secondary_base_url: env_or("TVA_SECONDARY_BASE_URL", defaults.secondary_base_url),
            tv_chart_url: env_or("TV_CHART_URL", defaults.tv_chart_url),
        })
    }
}

fn env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.primary_base_url, "https://stooq.com");
        assert_eq!(config.secondary_base_url, "https://query1.finance.yahoo.com");
        assert_eq!(config.tv_chart_url, "https://www.tradingview.com/chart/");
    }

    #[test]
    fn test_env_millis_ignores_garbage() {
        std::env::set_var("TVA_TEST_MILLIS", "abc");
        assert_eq!(
            env_millis("TVA_TEST_MILLIS", Duration::from_millis(5)),
            Duration::from_millis(5)
        );
        std::env::set_var("TVA_TEST_MILLIS", "250");
        assert_eq!(
            env_millis("TVA_TEST_MILLIS", Duration::from_millis(5)),
            Duration::from_millis(250)
        );
        std::env::remove_var("TVA_TEST_MILLIS");
    }
}
