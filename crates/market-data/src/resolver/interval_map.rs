//! Per-provider interval tokens.

use std::collections::HashMap;

use crate::models::Interval;

/// Maps [`Interval`] values to a provider's native interval token.
///
/// Intervals missing from the table resolve to the daily token.
#[derive(Clone, Debug)]
pub struct IntervalMap {
    tokens: HashMap<Interval, String>,
    daily: String,
}

impl IntervalMap {
    /// Build a map from explicit pairs. `daily` is the token for unmapped intervals.
    pub fn new<I, S>(pairs: I, daily: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (Interval, S)>,
        S: Into<String>,
    {
        Self {
            tokens: pairs.into_iter().map(|(i, t)| (i, t.into())).collect(),
            daily: daily.into(),
        }
    }

    /// Stooq CSV tokens.
    pub fn stooq() -> Self {
        Self::new(
            [
                (Interval::OneMinute, "1"),
                (Interval::FiveMinutes, "5"),
                (Interval::FifteenMinutes, "15"),
                (Interval::ThirtyMinutes, "30"),
                (Interval::OneHour, "60"),
                (Interval::FourHours, "240"),
                (Interval::OneDay, "d"),
                (Interval::OneWeek, "w"),
                (Interval::OneMonth, "m"),
            ],
            "d",
        )
    }

    /// Yahoo chart tokens. Yahoo has no 4h bars, so `4h` falls through to daily.
    pub fn yahoo() -> Self {
        Self::new(
            [
                (Interval::OneMinute, "1m"),
                (Interval::FiveMinutes, "5m"),
                (Interval::FifteenMinutes, "15m"),
                (Interval::ThirtyMinutes, "30m"),
                (Interval::OneHour, "1h"),
                (Interval::OneDay, "1d"),
                (Interval::OneWeek, "1wk"),
                (Interval::OneMonth, "1mo"),
            ],
            "1d",
        )
    }

    pub fn token(&self, interval: Interval) -> &str {
        self.tokens
            .get(&interval)
            .map(String::as_str)
            .unwrap_or(&self.daily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stooq_tokens() {
        let map = IntervalMap::stooq();
        assert_eq!(map.token(Interval::OneHour), "60");
        assert_eq!(map.token(Interval::OneDay), "d");
        assert_eq!(map.token(Interval::OneMonth), "m");
        assert_eq!(map.token(Interval::OneMinute), "1");
    }

    #[test]
    fn test_yahoo_tokens() {
        let map = IntervalMap::yahoo();
        assert_eq!(map.token(Interval::OneHour), "1h");
        assert_eq!(map.token(Interval::OneWeek), "1wk");
    }

    #[test]
    fn test_unmapped_interval_uses_daily_token() {
        assert_eq!(IntervalMap::yahoo().token(Interval::FourHours), "1d");

        let sparse = IntervalMap::new([(Interval::OneHour, "H")], "D");
        assert_eq!(sparse.token(Interval::OneHour), "H");
        assert_eq!(sparse.token(Interval::FiveMinutes), "D");
    }
}
