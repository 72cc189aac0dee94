//! Tracking session runner.
//!
//! Consumes a status feed, folds each event into the tracking state through
//! the pure reducer, and publishes recomputed snapshots over a watch channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, watch, Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::feed::StatusFeed;
use crate::order::{OrderInfo, OrderStatus};

use super::types::{SessionStatus, TrackingSnapshot, TrackingState};

/// Drives one tracked order: owns its state, consumes a [`StatusFeed`], and
/// publishes derived [`TrackingSnapshot`]s.
///
/// The session is one-shot: `start` spawns the event loop and consumes the
/// feed; once the feed ends or `stop` is called, a fresh session (created from
/// the current status) stands in for a re-mounted observer.
pub struct TrackingSession {
    state: Arc<RwLock<TrackingState>>,
    feed: Mutex<Option<Box<dyn StatusFeed>>>,
    running: Arc<AtomicBool>,
    shutdown_tx: broadcast::Sender<()>,
    snapshot_tx: watch::Sender<TrackingSnapshot>,
}

impl TrackingSession {
    /// Create a session for an order starting at the given status.
    pub fn new(order: OrderInfo, initial: OrderStatus, feed: Box<dyn StatusFeed>) -> Self {
        let state = TrackingState::new(order, initial, chrono::Utc::now());
        let (shutdown_tx, _) = broadcast::channel(1);
        let (snapshot_tx, _) = watch::channel(state.snapshot());

        Self {
            state: Arc::new(RwLock::new(state)),
            feed: Mutex::new(Some(feed)),
            running: Arc::new(AtomicBool::new(false)),
            shutdown_tx,
            snapshot_tx,
        }
    }

    /// Start the session (spawns the event loop).
    pub async fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Tracking session already running");
            return;
        }

        let mut feed = match self.feed.lock().await.take() {
            Some(feed) => feed,
            None => {
                warn!("Tracking session feed already consumed, not restarting");
                self.running.store(false, Ordering::SeqCst);
                return;
            }
        };

        info!("Starting tracking session ({} feed)", feed.name());

        let state = Arc::clone(&self.state);
        let running = Arc::clone(&self.running);
        let snapshot_tx = self.snapshot_tx.clone();
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            info!("Tracking loop started");
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        info!("Tracking loop received shutdown signal");
                        break;
                    }
                    event = feed.next_event() => {
                        let Some(event) = event else {
                            info!("Status feed ended");
                            break;
                        };

                        let next = {
                            let mut guard = state.write().await;
                            let next = guard.apply(&event);
                            *guard = next.clone();
                            next
                        };

                        debug!(
                            "Order {} moved to {}",
                            next.order.id,
                            event.status.as_slug()
                        );
                        // send_replace keeps the latest snapshot readable even
                        // when nobody is subscribed yet.
                        snapshot_tx.send_replace(next.snapshot());
                    }
                }
            }
            running.store(false, Ordering::SeqCst);
            info!("Tracking loop stopped");
        });
    }

    /// Stop the session gracefully.
    pub async fn stop(&self) {
        if !self.running.load(Ordering::SeqCst) {
            warn!("Tracking session not running");
            return;
        }

        info!("Stopping tracking session");
        let _ = self.shutdown_tx.send(());
    }

    /// Subscribe to derived snapshots.
    ///
    /// The receiver immediately holds the latest snapshot; every subsequent
    /// status change replaces it.
    pub fn subscribe(&self) -> watch::Receiver<TrackingSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The latest published snapshot.
    pub fn latest_snapshot(&self) -> TrackingSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        let snapshot = self.snapshot_tx.borrow();
        SessionStatus {
            running: self.running.load(Ordering::Relaxed),
            status: snapshot.status,
            delayed: snapshot.delayed,
        }
    }
}
