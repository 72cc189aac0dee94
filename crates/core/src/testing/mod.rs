//! Testing utilities for driving tracking sessions without real feeds.
//!
//! # Example
//!
//! ```rust,ignore
//! use ordertrail_core::testing::{fixtures, ScriptedFeed};
//! use ordertrail_core::{OrderStatus, TrackingSession};
//!
//! let feed = ScriptedFeed::from_statuses(&[OrderStatus::Preparing]);
//! let session = TrackingSession::new(
//!     fixtures::sample_order(),
//!     OrderStatus::Confirmed,
//!     Box::new(feed),
//! );
//! ```

mod scripted_feed;

pub use scripted_feed::ScriptedFeed;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::Utc;

    use crate::order::{GeoPoint, OrderInfo, OrderStatus, RestaurantInfo, StatusEvent};

    /// An order with reasonable defaults, mirroring the demo order.
    pub fn sample_order() -> OrderInfo {
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

    /// A status event stamped with the current time.
    pub fn status_event(status: OrderStatus) -> StatusEvent {
        StatusEvent::new(status, Utc::now())
    }
}
