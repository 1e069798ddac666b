//! Candle data validation.
//!
//! Validates bars from providers before they reach the caller:
//! - Finite prices (hard: the bar is dropped)
//! - High/low ordering and negative volume (soft: logged, bar kept)

use log::{debug, warn};

use crate::models::Candle;

/// Validation severity levels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationSeverity {
    /// Hard failure - drop the bar.
    Hard,
    /// Soft warning - keep the bar but log it.
    Soft,
}

/// A single finding on a bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: ValidationSeverity,
    pub message: String,
}

/// Candle validator configuration.
#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    /// Whether to warn when high < low.
    pub warn_on_inverted_range: bool,
    /// Whether to warn on negative volume.
    pub warn_on_negative_volume: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            warn_on_inverted_range: true,
            warn_on_negative_volume: true,
        }
    }
}

/// Candle data validator.
///
/// Non-finite prices are always rejected; the soft checks are configurable.
#[derive(Clone, Debug, Default)]
pub struct CandleValidator {
    config: ValidatorConfig,
}

impl CandleValidator {
    /// Create a new validator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Collect every issue found on `candle`.
    pub fn inspect(&self, candle: &Candle) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if !candle.has_finite_prices() {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Hard,
                message: format!(
                    "Non-finite price (o={} h={} l={} c={})",
                    candle.open, candle.high, candle.low, candle.close
                ),
            });
            return issues;
        }

        if self.config.warn_on_inverted_range && candle.high < candle.low {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Soft,
                message: format!("High ({}) is less than Low ({})", candle.high, candle.low),
            });
        }

        if self.config.warn_on_negative_volume && candle.volume.is_some_and(|v| v < 0.0) {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Soft,
                message: "Negative volume".to_string(),
            });
        }

        issues
    }

    /// True unless `candle` has a hard issue. Soft issues are logged.
    pub fn is_valid(&self, candle: &Candle) -> bool {
        let mut valid = true;
        for issue in self.inspect(candle) {
            match issue.severity {
                ValidationSeverity::Hard => {
                    debug!("Dropping bar at {}: {}", candle.time, issue.message);
                    valid = false;
                }
                ValidationSeverity::Soft => {
                    warn!("Bar validation warning at {}: {}", candle.time, issue.message);
                }
            }
        }
        valid
    }

    /// Keep only valid bars, preserving order.
    pub fn retain_valid(&self, mut candles: Vec<Candle>) -> Vec<Candle> {
        candles.retain(|c| self.is_valid(c));
        candles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle::new("2024-01-02", open, high, low, close, Some(100.0))
    }

    #[test]
    fn test_finite_candle_is_valid() {
        let validator = CandleValidator::new();
        assert!(validator.inspect(&candle(10.0, 12.0, 9.0, 11.0)).is_empty());
        assert!(validator.is_valid(&candle(10.0, 12.0, 9.0, 11.0)));
    }

    #[test]
    fn test_non_finite_prices_are_hard_failures() {
        let validator = CandleValidator::new();
        for bad in [
            candle(f64::NAN, 12.0, 9.0, 11.0),
            candle(10.0, f64::INFINITY, 9.0, 11.0),
            candle(10.0, 12.0, f64::NEG_INFINITY, 11.0),
            candle(10.0, 12.0, 9.0, f64::NAN),
        ] {
            let issues = validator.inspect(&bad);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].severity, ValidationSeverity::Hard);
            assert!(!validator.is_valid(&bad));
        }
    }

    #[test]
    fn test_inverted_range_is_soft() {
        let validator = CandleValidator::new();
        let inverted = candle(10.0, 9.0, 12.0, 11.0);
        let issues = validator.inspect(&inverted);
        assert_eq!(issues[0].severity, ValidationSeverity::Soft);
        assert!(validator.is_valid(&inverted));
    }

    #[test]
    fn test_soft_checks_can_be_disabled() {
        let validator = CandleValidator::with_config(ValidatorConfig {
            warn_on_inverted_range: false,
            warn_on_negative_volume: false,
        });
        let mut odd = candle(10.0, 9.0, 12.0, 11.0);
        odd.volume = Some(-5.0);
        assert!(validator.inspect(&odd).is_empty());
    }

    #[test]
    fn test_retain_valid_preserves_order() {
        let validator = CandleValidator::new();
        let mut first = candle(1.0, 2.0, 0.5, 1.5);
        first.time = "a".to_string();
        let mut last = candle(3.0, 4.0, 2.5, 3.5);
        last.time = "c".to_string();

        let kept = validator.retain_valid(vec![
            first.clone(),
            candle(f64::NAN, 2.0, 1.0, 1.5),
            last.clone(),
        ]);
        assert_eq!(kept, vec![first, last]);
    }
}
