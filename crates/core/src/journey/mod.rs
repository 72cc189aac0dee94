//! Order journey derivation.
//!
//! Given the current order status, derives the full milestone timeline and the
//! overall progress percentage. Derivation is a pure function of
//! (status, clock): the journey carries no state of its own and is recomputed
//! in full on every status change.

mod timeline;
mod types;

pub use timeline::{derive_journey, progress_pct};
pub use types::{Journey, Milestone, MilestoneTone};
