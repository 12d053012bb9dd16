//! Request correlation identifier.
//!
//! The HTTP `Trace` middleware opens a scope per request; anything running
//! inside that scope (handlers, services, error constructors) can read the
//! identifier through [`TraceId::current`]. Task-locals do not cross
//! `tokio::spawn`, so wrap spawned work in [`TraceId::scope`] explicitly.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT_TRACE: TraceId;
}

/// Per-request trace identifier backed by a UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the enclosing request, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT_TRACE.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use picnic_backend::domain::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let trace_id = TraceId::generate();
    /// let seen = TraceId::scope(trace_id, async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(trace_id));
    /// # });
    /// ```
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        CURRENT_TRACE.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
