//! Order domain types: status sequence, order details, status events.

mod types;

pub use types::{
    GeoPoint, OrderInfo, OrderStatus, RestaurantInfo, StatusEvent, PLACEHOLDER_PHOTO_URL,
    TRACKED_SEQUENCE,
};
