//! Scripted status feed for tests.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::feed::StatusFeed;
use crate::order::{OrderStatus, StatusEvent};

/// A [`StatusFeed`] that replays a fixed script of events.
///
/// By default events are handed out as fast as the consumer asks for them;
/// `with_delay` paces them out to exercise timing-sensitive paths.
pub struct ScriptedFeed {
    events: VecDeque<StatusEvent>,
    delay: Option<Duration>,
}

impl ScriptedFeed {
    /// Create a feed replaying the given events.
    pub fn new(events: Vec<StatusEvent>) -> Self {
        Self {
            events: events.into(),
            delay: None,
        }
    }

    /// Create a feed replaying the given statuses, stamped with the current
    /// time.
    pub fn from_statuses(statuses: &[OrderStatus]) -> Self {
        Self::new(
            statuses
                .iter()
                .map(|s| StatusEvent::new(*s, Utc::now()))
                .collect(),
        )
    }

    /// Wait this long before handing out each event.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of events not yet handed out.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl StatusFeed for ScriptedFeed {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn next_event(&mut self) -> Option<StatusEvent> {
        // An exhausted script ends immediately, without waiting out the delay.
        if self.events.is_empty() {
            return None;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.events.pop_front()
    }
}
