pub mod config;
pub mod feed;
pub mod journey;
pub mod mapview;
pub mod order;
pub mod session;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DestinationConfig,
    DriverConfig, OrderConfig, RestaurantConfig,
};
pub use feed::{AutoAdvanceConfig, AutoAdvanceFeed, StatusFeed};
pub use journey::{derive_journey, progress_pct, Journey, Milestone, MilestoneTone};
pub use mapview::{MapScene, MapStatus, DELAY_NOTICE};
pub use order::{
    GeoPoint, OrderInfo, OrderStatus, RestaurantInfo, StatusEvent, PLACEHOLDER_PHOTO_URL,
    TRACKED_SEQUENCE,
};
pub use session::{SessionStatus, TrackingSession, TrackingSnapshot, TrackingState};
