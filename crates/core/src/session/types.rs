//! Tracking session data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::journey::{derive_journey, Journey};
use crate::mapview::MapScene;
use crate::order::{OrderInfo, OrderStatus, StatusEvent};

/// Explicit state of one tracked order.
///
/// `anchor` is the most recent status that belongs to the tracked sequence.
/// When an out-of-band `Delayed` status arrives, the live `status` moves but
/// the anchor holds, so the derived journey never loses progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingState {
    pub order: OrderInfo,
    /// The live status as last reported.
    pub status: OrderStatus,
    /// Last status that was part of the tracked sequence, if any.
    pub anchor: Option<OrderStatus>,
    /// Whether the order is currently reported as delayed.
    pub delayed: bool,
    /// When the state last changed.
    pub updated_at: DateTime<Utc>,
}

impl TrackingState {
    /// Create the initial state for an order.
    pub fn new(order: OrderInfo, initial: OrderStatus, at: DateTime<Utc>) -> Self {
        Self {
            order,
            status: initial,
            anchor: initial.is_tracked().then_some(initial),
            delayed: !initial.is_tracked(),
            updated_at: at,
        }
    }

    /// Pure reducer transition: fold one status event into a new state.
    pub fn apply(&self, event: &StatusEvent) -> TrackingState {
        let mut next = self.clone();
        next.status = event.status;
        next.updated_at = event.at;

        if event.status.is_tracked() {
            next.anchor = Some(event.status);
            next.delayed = false;
        } else {
            // Out-of-band status: keep the anchor where it was.
            next.delayed = true;
        }

        next
    }

    /// Recompute the full derived view of this state.
    ///
    /// The journey is derived from the anchor so a delayed order keeps showing
    /// the progress it had already made; an order that was never at a tracked
    /// status shows an all-pending journey.
    pub fn snapshot(&self) -> TrackingSnapshot {
        let journey = match self.anchor {
            Some(anchor) => derive_journey(anchor, self.updated_at),
            None => derive_journey(self.status, self.updated_at),
        };

        TrackingSnapshot {
            order_id: self.order.id.clone(),
            status: self.status,
            delayed: self.delayed,
            journey,
            map: MapScene::compose(&self.order, self.status),
            updated_at: self.updated_at,
        }
    }
}

/// Fully derived view of a tracked order, recomputed on every status change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingSnapshot {
    pub order_id: String,
    pub status: OrderStatus,
    pub delayed: bool,
    pub journey: Journey,
    pub map: MapScene,
    pub updated_at: DateTime<Utc>,
}

/// Current status of a tracking session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Whether the session loop is running.
    pub running: bool,
    /// The live order status as of the latest snapshot.
    pub status: OrderStatus,
    /// Whether the order is currently reported as delayed.
    pub delayed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::MilestoneTone;
    use crate::mapview::MapStatus;
    use crate::order::{GeoPoint, RestaurantInfo};
    use chrono::TimeZone;

    fn test_order() -> OrderInfo {
        OrderInfo {
            id: "FD-6B3A9".to_string(),
            eta: "07:45 PM".to_string(),
            restaurant: RestaurantInfo::new(
                "The Gourmet Kitchen",
                GeoPoint::new(34.0522, -118.2437),
            ),
            destination: GeoPoint::new(34.0722, -118.2637).with_address("123 AppDev Lane"),
            driver_location: Some(GeoPoint::new(34.06, -118.25)),
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 19, minute, 0).unwrap()
    }

    #[test]
    fn test_initial_state_anchors_on_tracked_status() {
        let state = TrackingState::new(test_order(), OrderStatus::Preparing, at(0));
        assert_eq!(state.anchor, Some(OrderStatus::Preparing));
        assert!(!state.delayed);
    }

    #[test]
    fn test_initial_state_with_delayed_status_has_no_anchor() {
        let state = TrackingState::new(test_order(), OrderStatus::Delayed, at(0));
        assert_eq!(state.anchor, None);
        assert!(state.delayed);

        let snapshot = state.snapshot();
        assert!(snapshot.journey.all_pending());
        assert_eq!(snapshot.journey.progress_pct, 0.0);
    }

    #[test]
    fn test_apply_tracked_status_moves_anchor() {
        let state = TrackingState::new(test_order(), OrderStatus::Confirmed, at(0));
        let next = state.apply(&StatusEvent::new(OrderStatus::Preparing, at(5)));

        assert_eq!(next.status, OrderStatus::Preparing);
        assert_eq!(next.anchor, Some(OrderStatus::Preparing));
        assert_eq!(next.updated_at, at(5));
        assert!(!next.delayed);

        // Reducer is pure: the original state is untouched.
        assert_eq!(state.status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_apply_delayed_holds_the_anchor() {
        let state = TrackingState::new(test_order(), OrderStatus::Preparing, at(0));
        let delayed = state.apply(&StatusEvent::new(OrderStatus::Delayed, at(7)));

        assert_eq!(delayed.status, OrderStatus::Delayed);
        assert_eq!(delayed.anchor, Some(OrderStatus::Preparing));
        assert!(delayed.delayed);

        let snapshot = delayed.snapshot();
        // Journey holds at the last tracked status instead of resetting.
        assert_eq!(snapshot.journey.progress_pct, 20.0);
        assert_eq!(
            snapshot.journey.current().map(|m| m.status),
            Some(OrderStatus::Preparing)
        );
        // The map still reports the live delayed status.
        assert_eq!(snapshot.map.status, MapStatus::Delayed);
        assert!(snapshot.delayed);
    }

    #[test]
    fn test_recovery_after_delay_clears_the_flag() {
        let state = TrackingState::new(test_order(), OrderStatus::Preparing, at(0));
        let delayed = state.apply(&StatusEvent::new(OrderStatus::Delayed, at(7)));
        let recovered = delayed.apply(&StatusEvent::new(OrderStatus::DriverAssigned, at(12)));

        assert!(!recovered.delayed);
        assert_eq!(recovered.anchor, Some(OrderStatus::DriverAssigned));
        assert_eq!(recovered.snapshot().journey.progress_pct, 40.0);
    }

    #[test]
    fn test_snapshot_is_fully_recomputed() {
        let state = TrackingState::new(test_order(), OrderStatus::OutForDelivery, at(30));
        let snapshot = state.snapshot();

        assert_eq!(snapshot.order_id, "FD-6B3A9");
        assert_eq!(snapshot.journey.progress_pct, 60.0);
        assert_eq!(snapshot.journey.completed_count(), 3);
        assert_eq!(
            snapshot
                .journey
                .current()
                .map(|m| (m.status, m.tone)),
            Some((OrderStatus::OutForDelivery, MilestoneTone::Active))
        );
        assert!(snapshot.map.driver.is_some());
        assert_eq!(snapshot.updated_at, at(30));
    }

    #[test]
    fn test_snapshot_serialization_round_trip() {
        let state = TrackingState::new(test_order(), OrderStatus::Arriving, at(40));
        let snapshot = state.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: TrackingSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
