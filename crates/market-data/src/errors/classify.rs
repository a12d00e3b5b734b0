/// Signatures of responses where the provider is actively blocking the
/// caller: HTTP 429, rate-limit text, or an authentication-crumb
/// rejection.
const RATE_LIMIT_SIGNATURES: &[&str] = &["429", "Too Many Requests", "Invalid Crumb"];

/// Signatures of infrastructure failures expected to clear on retry:
/// timeouts, connection-retry exhaustion, truncated responses.
const TRANSIENT_SIGNATURES: &[&str] = &["timed out", "Max retries", "EOF"];

/// Classification of a provider failure.
///
/// Matching against the signature sets happens once, where the failure is
/// constructed; the retry loop and the orchestrator only look at the
/// resulting class.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// The provider is rate limiting or blocking the request.
    /// Retry with backoff; once the budget is spent, surface as
    /// `MarketDataError::RateLimited`.
    RateLimited,

    /// Transient infrastructure failure, including an empty-but-successful
    /// payload. Retry with backoff; once the budget is spent, surface as
    /// `MarketDataError::UpstreamFailed`.
    Transient,

    /// Anything else. Retrying will not help; fail after the single
    /// attempt.
    Permanent,
}

impl FailureClass {
    /// Whether the retry loop may try again.
    pub fn is_transient(self) -> bool {
        !matches!(self, FailureClass::Permanent)
    }
}

/// Classify a failure message against the known signature sets.
pub fn classify_message(message: &str) -> FailureClass {
    if RATE_LIMIT_SIGNATURES.iter().any(|s| message.contains(s)) {
        FailureClass::RateLimited
    } else if TRANSIENT_SIGNATURES.iter().any(|s| message.contains(s)) {
        FailureClass::Transient
    } else {
        FailureClass::Permanent
    }
}
