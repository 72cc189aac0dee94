//! Tracking session: one controller per tracked order.
//!
//! The session owns the order's state explicitly and advances it through pure
//! reducer transitions (`state.apply(event)`), so the journey deriver and the
//! status feeds stay independently testable. A thin timer-free runner consumes
//! the feed and publishes recomputed snapshots over a watch channel.

mod runner;
mod types;

pub use runner::TrackingSession;
pub use types::{SessionStatus, TrackingSnapshot, TrackingState};
