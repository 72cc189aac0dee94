//! Journey data types.

use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

/// Visual state of a milestone.
///
/// The rendering layer resolves each tone to an icon; derivation never deals
/// in concrete glyphs or image references.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneTone {
    /// The step has been passed.
    Done,
    /// The step the order is currently at.
    Active,
    /// The step has not been reached yet.
    Pending,
}

/// One named step in an order's fulfillment sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub status: OrderStatus,
    /// Display name of the step.
    pub name: String,
    pub tone: MilestoneTone,
    pub completed: bool,
    pub current: bool,
    /// Synthetic display timestamp; absent for pending steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// The derived view of an order's journey: all milestones plus overall progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Journey {
    pub milestones: Vec<Milestone>,
    /// Progress through the tracked sequence, 0.0 to 100.0.
    pub progress_pct: f32,
}

impl Journey {
    /// The milestone the order is currently at, if the status maps to one.
    pub fn current(&self) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.current)
    }

    /// Number of milestones already passed.
    pub fn completed_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }

    /// Returns true if every milestone is still pending.
    pub fn all_pending(&self) -> bool {
        self.milestones
            .iter()
            .all(|m| m.tone == MilestoneTone::Pending)
    }
}
