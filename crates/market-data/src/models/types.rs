use std::sync::Arc;

/// Provider-specific symbol produced by the symbol map
pub type ProviderSymbol = Arc<str>;
