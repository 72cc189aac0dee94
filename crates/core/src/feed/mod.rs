//! Status feeds: where order status changes come from.
//!
//! The tracking session consumes any [`StatusFeed`]; the bundled
//! [`AutoAdvanceFeed`] is a demo harness that walks the tracked sequence on a
//! fixed timer. A production deployment would implement the same trait on top
//! of a backend event stream without touching the session or the deriver.

mod autoadvance;
mod config;
mod traits;

pub use autoadvance::AutoAdvanceFeed;
pub use config::AutoAdvanceConfig;
pub use traits::StatusFeed;
