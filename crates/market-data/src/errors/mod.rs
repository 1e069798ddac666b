//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers both query validation and provider failures.
//! Only [`MarketDataError::InvalidQuery`] ever leaves
//! [`ProviderRegistry::fetch_candles`](crate::ProviderRegistry::fetch_candles);
//! every provider-level variant is absorbed by the fallback path.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The query is structurally invalid (missing symbol, limit out of range).
    /// Rejected before any network I/O.
    #[error("Invalid query: {field} - {message}")]
    InvalidQuery {
        /// The offending field
        field: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    Http {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider payload could not be decoded.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        /// The provider whose payload was malformed
        provider: String,
        /// Decoder message
        message: String,
    },

    /// A provider-specific error reported inside an otherwise valid payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {provider} - {source}")]
    Network {
        /// The provider being called
        provider: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
}

impl MarketDataError {
    /// Create a new invalid query error.
    pub fn invalid_query(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            field,
            message: message.into(),
        }
    }

    /// Classify a transport error, splitting out timeouts.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Http {
                provider: provider.to_string(),
                status: status.as_u16(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                source: err,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::invalid_query("limit", "must be between 10 and 5000");
        assert_eq!(
            format!("{}", error),
            "Invalid query: limit - must be between 10 and 5000"
        );

        let error = MarketDataError::Http {
            provider: "STOOQ".to_string(),
            status: 404,
        };
        assert_eq!(format!("{}", error), "HTTP 404 from STOOQ");

        let error = MarketDataError::Timeout {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: YAHOO");
    }
}
