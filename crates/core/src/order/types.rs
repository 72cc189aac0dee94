//! Core order data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback image shown when a restaurant has no photo configured.
pub const PLACEHOLDER_PHOTO_URL: &str = "https://placehold.co/600x400?text=Restaurant";

/// Coarse fulfillment status of an order.
///
/// Six values form the ordered tracked sequence
/// (`Confirmed -> Preparing -> DriverAssigned -> OutForDelivery -> Arriving ->
/// Delivered`). `Delayed` sits outside the ordering: it can be reported at any
/// point and carries no position of its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order accepted by the platform.
    Confirmed,
    /// The restaurant is preparing the food.
    Preparing,
    /// A courier has been matched to the order.
    DriverAssigned,
    /// The courier has picked up the order.
    OutForDelivery,
    /// The courier is close to the destination.
    Arriving,
    /// Order handed over to the customer (terminal).
    Delivered,
    /// Out-of-band: the order is running late.
    Delayed,
}

/// The ordered sequence of statuses a tracked order moves through.
pub const TRACKED_SEQUENCE: [OrderStatus; 6] = [
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::DriverAssigned,
    OrderStatus::OutForDelivery,
    OrderStatus::Arriving,
    OrderStatus::Delivered,
];

impl OrderStatus {
    /// Position within the tracked sequence, `None` for out-of-band statuses.
    pub fn position(&self) -> Option<usize> {
        TRACKED_SEQUENCE.iter().position(|s| s == self)
    }

    /// Returns true if this status is part of the tracked sequence.
    pub fn is_tracked(&self) -> bool {
        self.position().is_some()
    }

    /// Returns true if no further progression occurs after this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// The successor in the tracked sequence.
    ///
    /// `None` at the terminal status and for out-of-band statuses.
    pub fn next_tracked(&self) -> Option<OrderStatus> {
        let idx = self.position()?;
        TRACKED_SEQUENCE.get(idx + 1).copied()
    }

    /// Returns the status slug (for filtering and log fields).
    pub fn as_slug(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::DriverAssigned => "driver_assigned",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Arriving => "arriving",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Delayed => "delayed",
        }
    }

    /// Human-readable name, as shown on the order journey.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Preparing => "Restaurant Preparing",
            OrderStatus::DriverAssigned => "Driver Assigned",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Arriving => "Arriving Soon",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Delayed => "Delayed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A geographic point with an optional street address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    /// Street address or place label, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl GeoPoint {
    /// Create a point without an address.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: None,
        }
    }

    /// Attach a street address or place label.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// The restaurant an order originates from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantInfo {
    pub name: String,
    pub location: GeoPoint,
    /// Photo URL, when the restaurant has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl RestaurantInfo {
    pub fn new(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            location,
            photo_url: None,
        }
    }

    /// Attach a photo URL.
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// The restaurant photo, falling back to a placeholder when unset.
    pub fn photo_url_or_placeholder(&self) -> &str {
        self.photo_url.as_deref().unwrap_or(PLACEHOLDER_PHOTO_URL)
    }
}

/// Static details of one tracked order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInfo {
    /// Order reference shown to the customer (e.g. "FD-6B3A9").
    pub id: String,
    /// Estimated delivery time, preformatted for display.
    pub eta: String,
    pub restaurant: RestaurantInfo,
    /// Where the order is delivered to.
    pub destination: GeoPoint,
    /// Last reported courier position, when one has been reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_location: Option<GeoPoint>,
}

/// One status change reported by a status feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusEvent {
    pub status: OrderStatus,
    /// When the change was observed.
    pub at: DateTime<Utc>,
}

impl StatusEvent {
    pub fn new(status: OrderStatus, at: DateTime<Utc>) -> Self {
        Self { status, at }
    }

    /// Stamp an event with the current time.
    pub fn now(status: OrderStatus) -> Self {
        Self::new(status, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_sequence_positions() {
        for (idx, status) in TRACKED_SEQUENCE.iter().enumerate() {
            assert_eq!(status.position(), Some(idx));
            assert!(status.is_tracked());
        }
    }

    #[test]
    fn test_delayed_has_no_position() {
        assert_eq!(OrderStatus::Delayed.position(), None);
        assert!(!OrderStatus::Delayed.is_tracked());
        assert!(!OrderStatus::Delayed.is_terminal());
    }

    #[test]
    fn test_only_delivered_is_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        for status in TRACKED_SEQUENCE.iter().take(TRACKED_SEQUENCE.len() - 1) {
            assert!(!status.is_terminal(), "{} should not be terminal", status);
        }
    }

    #[test]
    fn test_next_tracked_walks_the_sequence() {
        assert_eq!(
            OrderStatus::Confirmed.next_tracked(),
            Some(OrderStatus::Preparing)
        );
        assert_eq!(
            OrderStatus::Arriving.next_tracked(),
            Some(OrderStatus::Delivered)
        );
        assert_eq!(OrderStatus::Delivered.next_tracked(), None);
        assert_eq!(OrderStatus::Delayed.next_tracked(), None);
    }

    #[test]
    fn test_status_slugs() {
        assert_eq!(OrderStatus::DriverAssigned.as_slug(), "driver_assigned");
        assert_eq!(OrderStatus::OutForDelivery.as_slug(), "out_for_delivery");
        assert_eq!(OrderStatus::Delayed.as_slug(), "delayed");
    }

    #[test]
    fn test_status_display_names() {
        assert_eq!(OrderStatus::Confirmed.to_string(), "Order Confirmed");
        assert_eq!(OrderStatus::Preparing.to_string(), "Restaurant Preparing");
        assert_eq!(OrderStatus::Arriving.to_string(), "Arriving Soon");
    }

    #[test]
    fn test_status_serialization_uses_slugs() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, r#""out_for_delivery""#);

        let parsed: OrderStatus = serde_json::from_str(r#""driver_assigned""#).unwrap();
        assert_eq!(parsed, OrderStatus::DriverAssigned);
    }

    #[test]
    fn test_photo_url_falls_back_to_placeholder() {
        let plain = RestaurantInfo::new("The Gourmet Kitchen", GeoPoint::new(34.0522, -118.2437));
        assert_eq!(plain.photo_url_or_placeholder(), PLACEHOLDER_PHOTO_URL);

        let with_photo = plain.with_photo_url("https://cdn.example.com/kitchen.jpg");
        assert_eq!(
            with_photo.photo_url_or_placeholder(),
            "https://cdn.example.com/kitchen.jpg"
        );
    }

    #[test]
    fn test_geo_point_with_address() {
        let point = GeoPoint::new(34.0722, -118.2637).with_address("123 AppDev Lane");
        assert_eq!(point.address.as_deref(), Some("123 AppDev Lane"));
    }

    #[test]
    fn test_order_info_serialization() {
        let order = OrderInfo {
            id: "FD-6B3A9".to_string(),
            eta: "07:45 PM".to_string(),
            restaurant: RestaurantInfo::new(
                "The Gourmet Kitchen",
                GeoPoint::new(34.0522, -118.2437),
            ),
            destination: GeoPoint::new(34.0722, -118.2637).with_address("123 AppDev Lane"),
            driver_location: None,
        };

        let json = serde_json::to_string(&order).unwrap();
        // Unset driver location is skipped entirely
        assert!(!json.contains("driver_location"));

        let parsed: OrderInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn test_status_event_round_trip() {
        let event = StatusEvent::new(OrderStatus::Preparing, Utc::now());
        let json = serde_json::to_string(&event).unwrap();
        let parsed: StatusEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
