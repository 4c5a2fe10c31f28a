use thiserror::Error;

/// Failures that abort a simulated day.
///
/// Unknown categories and out-of-range benefits are not errors: the former
/// fall back to the standard rule and the latter are clamped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("expiration counter overflowed for item `{name}`")]
    ExpirationOverflow { name: String },
    #[error("rule `{rule}` rejected item `{name}`: {reason}")]
    Rejected {
        rule: &'static str,
        name: String,
        reason: String,
    },
}

impl RuleError {
    pub fn rejected(
        rule: &'static str,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Rejected {
            rule,
            name: name.into(),
            reason: reason.into(),
        }
    }
}
