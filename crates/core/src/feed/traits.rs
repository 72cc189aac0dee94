//! The status feed seam.

use async_trait::async_trait;

use crate::order::StatusEvent;

/// A source of order status events.
#[async_trait]
pub trait StatusFeed: Send {
    /// Name of the feed implementation (for logging).
    fn name(&self) -> &str;

    /// Wait for the next status change.
    ///
    /// Returns `None` once the feed is exhausted; after that the feed must
    /// keep returning `None` and must not hold any pending timers.
    async fn next_event(&mut self) -> Option<StatusEvent>;
}
