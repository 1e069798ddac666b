use serde::{Deserialize, Serialize};

/// One time-series bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Provider-native date string or ISO-8601 timestamp
    pub time: String,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    /// Trading volume, omitted when the provider has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Candle {
    /// Create a full OHLCV candle
    pub fn new(
        time: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<f64>,
    ) -> Self {
        Self {
            time: time.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// True when every price field is a finite number.
    pub fn has_finite_prices(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_omitted_when_absent() {
        let candle = Candle::new("2024-01-02", 1.0, 2.0, 0.5, 1.5, None);
        let json = serde_json::to_string(&candle).unwrap();
        assert!(!json.contains("volume"));
    }

    #[test]
    fn test_volume_serialized_when_present() {
        let candle = Candle::new("2024-01-02", 1.0, 2.0, 0.5, 1.5, Some(1200.0));
        let json = serde_json::to_value(&candle).unwrap();
        assert_eq!(json["volume"], 1200.0);
    }

    #[test]
    fn test_has_finite_prices() {
        assert!(Candle::new("t", 1.0, 2.0, 0.5, 1.5, None).has_finite_prices());
        assert!(!Candle::new("t", f64::NAN, 2.0, 0.5, 1.5, None).has_finite_prices());
        assert!(!Candle::new("t", 1.0, f64::INFINITY, 0.5, 1.5, None).has_finite_prices());
    }
}
