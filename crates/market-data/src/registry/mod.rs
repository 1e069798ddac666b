//! Provider registry module.
//!
//! This module orchestrates candle retrieval:
//! - Primary attempt, then at most one fallback attempt
//! - Explicit per-attempt outcomes ([`ProviderOutcome`])
//! - Candle validation and tail truncation to `limit`

mod outcome;
mod provider_registry;
mod validator;

pub use outcome::{EmptyReason, ProviderOutcome};
pub use provider_registry::{truncate_tail, ProviderRegistry};
pub use validator::{CandleValidator, ValidationIssue, ValidationSeverity, ValidatorConfig};
