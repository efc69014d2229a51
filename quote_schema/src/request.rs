//! Request descriptor handed to a quote fetch collaborator.
//!
//! A `QuoteRequest` names the symbol to resolve and carries a `RequestContext`,
//! the request-scoped cancellation/deadline signal. The context is cooperative:
//! nothing here blocks on it, the fetcher polls it between steps or awaits
//! [`RequestContext::cancelled`]. A cancelled or expired context gives no
//! guarantee about whether the fetch completed.
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::error::SchemaError;

/// Form key the upstream API expects for the symbol list.
pub const SYMBOLS_PARAM: &str = "symbols";

/// Cancellation and deadline carrier.
///
/// Clones share one cancellation state. Contexts derived with
/// [`with_timeout`](Self::with_timeout) or [`with_deadline`](Self::with_deadline)
/// are children: cancelling the parent cancels them, cancelling a child leaves
/// the parent and its siblings live.
#[derive(Debug, Clone)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled on its own and has no deadline.
    pub fn background() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Derives a child context expiring after `timeout`.
    ///
    /// An existing earlier deadline wins. A timeout too large to represent
    /// keeps the current deadline (or none).
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.child(self.deadline),
        }
    }

    /// Derives a child context expiring at `deadline`.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };
        self.child(Some(deadline))
    }

    fn child(&self, deadline: Option<Instant>) -> Self {
        Self {
            token: self.token.child_token(),
            deadline,
        }
    }

    /// Cancels this context, its clones and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancellation was requested here or on an ancestor.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once this context is cancelled; for fetchers that `select!`
    /// on it instead of polling.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// The deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Either cancelled or expired.
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }

    /// Deadline attached to this context, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` without one.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// `Ok(())` while the context is live, otherwise the reason it ended.
    ///
    /// Cancellation takes precedence over an elapsed deadline.
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.is_cancelled() {
            return Err(SchemaError::Cancelled);
        }
        if self.is_expired() {
            return Err(SchemaError::DeadlineExceeded);
        }
        Ok(())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}

/// Which quote to retrieve, and the context governing the fetch.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    symbol: String,
    context: RequestContext,
}

impl QuoteRequest {
    /// Creates a request for `symbol` with a background context.
    pub fn new(symbol: &str) -> Result<Self, SchemaError> {
        Self::with_context(symbol, RequestContext::background())
    }

    /// Creates a request for `symbol` governed by `context`.
    pub fn with_context(symbol: &str, context: RequestContext) -> Result<Self, SchemaError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(SchemaError::EmptySymbol);
        }
        Ok(Self {
            symbol: trimmed.to_string(),
            context,
        })
    }

    /// Ticker to resolve.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Cancellation/deadline carrier for this fetch.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Form parameters for the upstream request.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![(SYMBOLS_PARAM, self.symbol.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_symbol() {
        let request = QuoteRequest::new("  AAPL ").expect("valid symbol");
        assert_eq!(request.symbol(), "AAPL");
        assert_eq!(request.query_pairs(), vec![("symbols", "AAPL".to_string())]);
    }

    #[test]
    fn rejects_blank_symbol() {
        let err = QuoteRequest::new("   ").expect_err("must fail");
        assert!(matches!(err, SchemaError::EmptySymbol));
    }

    #[test]
    fn background_context_stays_live() {
        let ctx = RequestContext::background();
        assert!(!ctx.is_done());
        assert!(ctx.remaining().is_none());
        assert!(ctx.check().is_ok());
    }

    #[test]
    fn parent_cancellation_reaches_derived_contexts() {
        let parent = RequestContext::background();
        let request =
            QuoteRequest::with_context("MSFT", parent.with_timeout(Duration::from_secs(60)))
                .expect("valid symbol");

        assert!(request.context().check().is_ok());
        parent.cancel();
        assert!(request.context().is_cancelled());
        assert!(matches!(
            request.context().check(),
            Err(SchemaError::Cancelled)
        ));
    }

    #[test]
    fn child_cancellation_stays_local() {
        let parent = RequestContext::background();
        let first = parent.with_timeout(Duration::from_secs(60));
        let second = parent.with_timeout(Duration::from_secs(60));
        let first_clone = first.clone();

        first.cancel();
        assert!(first_clone.is_cancelled());
        assert!(!parent.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(parent.check().is_ok());
    }

    #[test]
    fn unrepresentable_timeout_keeps_existing_deadline() {
        let ctx = RequestContext::background().with_timeout(Duration::MAX);
        assert!(ctx.deadline().is_none());
        assert!(ctx.check().is_ok());

        let soon = Instant::now() + Duration::from_secs(1);
        let bounded = RequestContext::background()
            .with_deadline(soon)
            .with_timeout(Duration::MAX);
        assert_eq!(bounded.deadline(), Some(soon));
    }

    #[test]
    fn elapsed_deadline_is_reported() {
        let ctx = RequestContext::background().with_deadline(Instant::now());
        assert!(ctx.is_expired());
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
        assert!(matches!(ctx.check(), Err(SchemaError::DeadlineExceeded)));
    }

    #[test]
    fn earlier_deadline_wins() {
        let soon = Instant::now() + Duration::from_secs(1);
        let ctx = RequestContext::background()
            .with_deadline(soon)
            .with_timeout(Duration::from_secs(3600));
        assert_eq!(ctx.deadline(), Some(soon));
    }
}
