//! Demo status source that walks the tracked sequence on a fixed timer.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::order::{OrderStatus, StatusEvent};

use super::config::AutoAdvanceConfig;
use super::traits::StatusFeed;

/// A [`StatusFeed`] that advances one step through the tracked sequence per
/// interval, then ends at the terminal status.
///
/// A feed created at the terminal status (or at a status with no successor)
/// ends immediately without arming a timer. Dropping the feed cancels any
/// pending wait; at most one wait is pending per feed.
pub struct AutoAdvanceFeed {
    interval: Duration,
    current: OrderStatus,
}

impl AutoAdvanceFeed {
    pub fn new(config: &AutoAdvanceConfig) -> Self {
        Self::from_status(config.start, Duration::from_millis(config.advance_interval_ms))
    }

    /// Create a feed starting from the given status.
    pub fn from_status(start: OrderStatus, interval: Duration) -> Self {
        Self {
            interval,
            current: start,
        }
    }

    /// The status the feed last emitted (or started from).
    pub fn current(&self) -> OrderStatus {
        self.current
    }
}

#[async_trait]
impl StatusFeed for AutoAdvanceFeed {
    fn name(&self) -> &str {
        "autoadvance"
    }

    async fn next_event(&mut self) -> Option<StatusEvent> {
        // Resolve the successor before sleeping: at the end of the sequence
        // the feed ends without arming a timer at all.
        let next = self.current.next_tracked()?;

        tokio::time::sleep(self.interval).await;
        self.current = next;
        debug!("Autoadvance stepped to {}", next.as_slug());

        Some(StatusEvent::new(next, Utc::now()))
    }
}
