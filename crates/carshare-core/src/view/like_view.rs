//! Optimistic like view-state and its reconciliation protocol.
//!
//! A `LikeView` holds what a viewer currently sees for one image: a liked
//! flag and a displayed count, seeded from server data. Toggling applies an
//! optimistic local flip immediately, then either reconciles with the
//! authoritative result returned by the backend or rolls back to the exact
//! pre-toggle pair on failure. The displayed values are a rendering aid
//! only; the backend counter always wins.

use std::sync::{Arc, Mutex, PoisonError};

use crate::entities::LikeToggle;

/// Exact (liked, count) pair captured before an optimistic flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeSnapshot {
    pub liked: bool,
    pub count: i64,
}

/// Why a toggle was refused before any backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ToggleRefusal {
    /// No signed-in viewer; the backend must not be contacted
    #[error("sign in required to like images")]
    SignedOut,

    /// A toggle for this image is already in flight
    #[error("a toggle is already in flight for this image")]
    InFlight,
}

/// Per-image like view-state for the current viewer
#[derive(Debug)]
pub struct LikeView {
    liked: bool,
    count: i64,
    busy: bool,
}

impl LikeView {
    /// Seed from server data
    pub fn seeded(liked: bool, count: i64) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self {
            liked,
            count,
            busy: false,
        }))
    }

    /// Currently displayed liked flag
    pub fn liked(&self) -> bool {
        self.liked
    }

    /// Currently displayed count
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Whether a toggle is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Begin a toggle: check preconditions, snapshot, apply the optimistic
    /// flip, and mark the view busy.
    ///
    /// Refuses when no viewer is signed in (`SignedOut`, view untouched) or
    /// when a toggle is already in flight (`InFlight`). On success the
    /// returned [`PendingToggle`] must be settled with
    /// [`PendingToggle::reconcile`] or [`PendingToggle::rollback`]; dropping
    /// it unsettled rolls back and releases the busy flag, so an error path
    /// can never leave the control permanently disabled.
    pub fn begin_toggle(
        view: &Arc<Mutex<Self>>,
        signed_in: bool,
    ) -> Result<PendingToggle, ToggleRefusal> {
        if !signed_in {
            return Err(ToggleRefusal::SignedOut);
        }

        let mut state = lock(view);
        if state.busy {
            return Err(ToggleRefusal::InFlight);
        }

        let snapshot = LikeSnapshot {
            liked: state.liked,
            count: state.count,
        };

        // Optimistic flip: count moves in the direction the flip implies
        state.liked = !state.liked;
        state.count += if state.liked { 1 } else { -1 };
        state.busy = true;
        drop(state);

        Ok(PendingToggle {
            view: Arc::clone(view),
            snapshot,
            settled: false,
        })
    }
}

/// In-flight toggle holding the rollback snapshot.
///
/// Settling consumes the guard; an unsettled drop restores the snapshot.
/// The busy flag is released on every exit path.
#[derive(Debug)]
pub struct PendingToggle {
    view: Arc<Mutex<LikeView>>,
    snapshot: LikeSnapshot,
    settled: bool,
}

impl PendingToggle {
    /// The pre-toggle pair this guard would restore
    pub fn snapshot(&self) -> LikeSnapshot {
        self.snapshot
    }

    /// Overwrite the view with the authoritative result from the backend.
    ///
    /// This corrects any drift between the optimistic local math and true
    /// server state, e.g. when a concurrent viewer changed the count while
    /// the request was in flight.
    pub fn reconcile(mut self, outcome: LikeToggle) {
        let mut state = lock(&self.view);
        state.liked = outcome.is_liked;
        state.count = outcome.like_count;
        state.busy = false;
        self.settled = true;
    }

    /// Restore the exact pre-toggle pair after a failed backend call
    pub fn rollback(mut self) {
        let mut state = lock(&self.view);
        state.liked = self.snapshot.liked;
        state.count = self.snapshot.count;
        state.busy = false;
        self.settled = true;
    }
}

impl Drop for PendingToggle {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        // Unsettled drop behaves like a failure: restore and release
        let mut state = lock(&self.view);
        state.liked = self.snapshot.liked;
        state.count = self.snapshot.count;
        state.busy = false;
    }
}

fn lock(view: &Arc<Mutex<LikeView>>) -> std::sync::MutexGuard<'_, LikeView> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}
