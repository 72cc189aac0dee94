//! Tracking map view model.
//!
//! Reduces the fine-grained order status to the coarse status the map surface
//! shows and composes the marker set for one order.

mod types;

pub use types::{MapScene, MapStatus, DELAY_NOTICE};
