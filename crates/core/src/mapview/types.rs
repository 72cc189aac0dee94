//! Map view data types.

use serde::{Deserialize, Serialize};

use crate::order::{GeoPoint, OrderInfo, OrderStatus};

/// Notice shown on the map overlay while an order is delayed.
pub const DELAY_NOTICE: &str =
    "We apologize for the delay. Your order is taking longer than expected.";

/// Coarse order status as shown on the tracking map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MapStatus {
    Preparing,
    OutForDelivery,
    ArrivingSoon,
    Delivered,
    Delayed,
}

impl From<OrderStatus> for MapStatus {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Confirmed | OrderStatus::Preparing => MapStatus::Preparing,
            OrderStatus::DriverAssigned | OrderStatus::OutForDelivery => MapStatus::OutForDelivery,
            OrderStatus::Arriving => MapStatus::ArrivingSoon,
            OrderStatus::Delivered => MapStatus::Delivered,
            OrderStatus::Delayed => MapStatus::Delayed,
        }
    }
}

impl std::fmt::Display for MapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MapStatus::Preparing => "Preparing",
            MapStatus::OutForDelivery => "Out for Delivery",
            MapStatus::ArrivingSoon => "Arriving Soon",
            MapStatus::Delivered => "Delivered",
            MapStatus::Delayed => "Delayed",
        };
        f.write_str(label)
    }
}

/// Everything the map surface needs to render one order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapScene {
    pub order_id: String,
    pub status: MapStatus,
    /// Restaurant marker.
    pub restaurant: GeoPoint,
    /// Delivery destination marker.
    pub destination: GeoPoint,
    /// Courier marker; omitted unless the status warrants one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<GeoPoint>,
    /// Estimated delivery time, preformatted for display.
    pub eta: String,
    /// Delay notice; present only while the order is delayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_notice: Option<String>,
}

impl MapScene {
    /// Compose the scene for an order at the given status.
    ///
    /// The courier marker appears only when the order has a reported courier
    /// position and the status is one where that position is meaningful; in
    /// every other case the marker is simply omitted.
    pub fn compose(order: &OrderInfo, status: OrderStatus) -> Self {
        let map_status = MapStatus::from(status);

        let driver = if driver_marker_warranted(status) {
            order.driver_location.clone()
        } else {
            None
        };

        let delay_notice = if map_status == MapStatus::Delayed {
            Some(DELAY_NOTICE.to_string())
        } else {
            None
        };

        Self {
            order_id: order.id.clone(),
            status: map_status,
            restaurant: order.restaurant.location.clone(),
            destination: order.destination.clone(),
            driver,
            eta: order.eta.clone(),
            delay_notice,
        }
    }
}

/// Statuses during which the courier position is meaningful.
fn driver_marker_warranted(status: OrderStatus) -> bool {
    matches!(
        status,
        OrderStatus::DriverAssigned | OrderStatus::OutForDelivery | OrderStatus::Arriving
    )
}
