//! Milestone timeline derivation.

use chrono::{DateTime, Duration, Utc};

use crate::order::{OrderStatus, TRACKED_SEQUENCE};

use super::types::{Journey, Milestone, MilestoneTone};

/// Minutes between two consecutive completed milestones.
const COMPLETED_STEP_MINUTES: i64 = 10;
/// Extra minutes added to every completed milestone's offset.
const COMPLETED_BASE_MINUTES: i64 = 5;
/// How long ago the current milestone is shown to have been reached.
const CURRENT_RECENCY_MINUTES: i64 = 2;

/// Derive the full journey view for the given status.
///
/// Pure and total: every status value yields a journey. A status outside the
/// tracked sequence (`Delayed`) yields all-pending milestones and 0% progress;
/// callers that want to hold the timeline at the last known tracked status do
/// so before calling (see `session::TrackingState`).
///
/// Timestamps are synthetic display strings derived from `now`: the further a
/// completed milestone sits behind the current one, the longer ago it is shown
/// to have happened. Pending milestones carry no timestamp.
pub fn derive_journey(status: OrderStatus, now: DateTime<Utc>) -> Journey {
    let current_idx = status.position();

    let milestones = TRACKED_SEQUENCE
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            let (completed, current) = match current_idx {
                Some(c) => (idx < c, idx == c),
                None => (false, false),
            };

            let tone = if completed {
                MilestoneTone::Done
            } else if current {
                MilestoneTone::Active
            } else {
                MilestoneTone::Pending
            };

            let time = match current_idx {
                Some(c) if completed => Some(clock_display(
                    now,
                    (c - idx) as i64 * COMPLETED_STEP_MINUTES + COMPLETED_BASE_MINUTES,
                )),
                Some(_) if current => Some(clock_display(now, CURRENT_RECENCY_MINUTES)),
                _ => None,
            };

            Milestone {
                status: *step,
                name: step.display_name().to_string(),
                tone,
                completed,
                current,
                time,
            }
        })
        .collect();

    Journey {
        milestones,
        progress_pct: progress_pct(status),
    }
}

/// Progress through the tracked sequence as a percentage.
///
/// The terminal status is pinned to exactly 100; intermediate statuses divide
/// the remaining span evenly, with the terminal step excluded from the
/// denominator. Statuses outside the sequence yield 0.
pub fn progress_pct(status: OrderStatus) -> f32 {
    if status.is_terminal() {
        return 100.0;
    }
    match status.position() {
        Some(idx) => {
            let span = (TRACKED_SEQUENCE.len() - 1) as f32;
            ((idx as f32 / span) * 100.0).clamp(0.0, 100.0)
        }
        None => 0.0,
    }
}

/// Render "now minus `minutes_ago`" as a wall-clock display string.
fn clock_display(now: DateTime<Utc>, minutes_ago: i64) -> String {
    (now - Duration::minutes(minutes_ago))
        .format("%I:%M %p")
        .to_string()
}
