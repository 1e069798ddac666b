use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tvagent_market_data::{ProviderMappings, ProviderRegistry, StooqProvider, YahooProvider};
use tvagent_tools::ToolRegistry;

use crate::config::Config;

pub struct AppState {
    pub tools: ToolRegistry,
}

impl AppState {
    /// State serving the standard tool set on top of `candles`.
    pub fn new(candles: Arc<ProviderRegistry>, chart_url: impl Into<String>) -> Self {
        Self {
            tools: ToolRegistry::standard(candles, chart_url),
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("TVA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let primary = StooqProvider::new(config.primary_base_url.clone(), config.fetch_timeout);
    let fallback = YahooProvider::new(config.secondary_base_url.clone(), config.fetch_timeout);
    let candles = ProviderRegistry::new(
        Arc::new(primary),
        Arc::new(fallback),
        ProviderMappings::default(),
    );
    let (primary_id, fallback_id) = candles.provider_ids();
    tracing::info!(
        "Candle providers: primary {} ({}), fallback {} ({})",
        primary_id,
        config.primary_base_url,
        fallback_id,
        config.secondary_base_url
    );

    let state = AppState::new(Arc::new(candles), config.tv_chart_url.clone());
    tracing::info!("Registered tools: {}", state.tools.names().join(", "));
    Ok(Arc::new(state))
}
