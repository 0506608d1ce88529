//! Two-instance endpoints joined by a pair of FIFO queues.
//!
//! A [`Link`] owns everything the two instances share: one queue per
//! direction, a waiting flag and a finished flag per instance, and the
//! deadlock flag. All of it sits behind a single mutex, so "am I the second
//! one to block?" and "go to sleep" happen as one atomic step. Sleeping
//! receivers are woken through one condition variable.
//!
//! A receive returns [`Received::Terminated`] when:
//! - both instances are waiting and both queues are empty (deadlock), or
//! - the inbound queue is empty and the peer's run has already ended.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use super::{Channel, Received};

#[derive(Debug, Default)]
struct LinkState {
    /// `inbound[i]` holds values sent to instance `i`.
    inbound: [VecDeque<i64>; 2],
    waiting: [bool; 2],
    finished: [bool; 2],
    deadlocked: bool,
}

/// Coordination state shared by the two sides of a dual run.
#[derive(Debug, Default)]
pub struct Link {
    state: Mutex<LinkState>,
    wake: Condvar,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two cross-wired endpoints: what instance 0 sends, instance 1
    /// receives, and the other way round.
    ///
    /// Call once per link; each id must have exactly one endpoint.
    pub fn endpoints(&self) -> (LinkedChannel<'_>, LinkedChannel<'_>) {
        (LinkedChannel::new(self, 0), LinkedChannel::new(self, 1))
    }

    /// Whether both instances were ever blocked together on empty queues.
    pub fn is_deadlocked(&self) -> bool {
        self.lock().deadlocked
    }

    /// Whether instance `id` is inside `receive` without a value yet.
    pub fn is_waiting(&self, id: usize) -> bool {
        self.lock().waiting[id]
    }

    /// Values queued for instance `id` and not yet received.
    pub fn pending(&self, id: usize) -> usize {
        self.lock().inbound[id].len()
    }

    // A panic in one instance must not wedge the other, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, LinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One instance's end of a [`Link`].
#[derive(Debug)]
pub struct LinkedChannel<'a> {
    link: &'a Link,
    id: usize,
    closed: bool,
}

impl<'a> LinkedChannel<'a> {
    fn new(link: &'a Link, id: usize) -> Self {
        Self {
            link,
            id,
            closed: false,
        }
    }

    /// The instance id this endpoint belongs to (0 or 1).
    pub fn id(&self) -> usize {
        self.id
    }

    fn peer(&self) -> usize {
        1 - self.id
    }
}

impl Channel for LinkedChannel<'_> {
    fn send(&mut self, value: i64) {
        let peer = self.peer();
        let mut state = self.link.lock();
        state.inbound[peer].push_back(value);
        trace!(from = self.id, value, queued = state.inbound[peer].len(), "sent");
        drop(state);
        self.link.wake.notify_all();
    }

    fn receive(&mut self) -> Received {
        let (me, peer) = (self.id, self.peer());
        let mut state = self.link.lock();
        state.waiting[me] = true;

        let received = loop {
            if let Some(value) = state.inbound[me].pop_front() {
                trace!(to = me, value, "received");
                break Received::Value(value);
            }
            if state.deadlocked {
                break Received::Terminated;
            }
            if state.finished[peer] {
                debug!(id = me, "peer finished with nothing pending");
                break Received::Terminated;
            }
            // Our inbound queue is empty here. A waiting peer with a
            // non-empty queue has been woken but has not run yet.
            if state.waiting[peer] && state.inbound[peer].is_empty() {
                debug!(id = me, "deadlock detected");
                state.deadlocked = true;
                self.link.wake.notify_all();
                break Received::Terminated;
            }
            state = self
                .link
                .wake
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        };

        state.waiting[me] = false;
        received
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let mut state = self.link.lock();
        state.finished[self.id] = true;
        state.waiting[self.id] = false;
        drop(state);
        self.link.wake.notify_all();
    }
}

impl Drop for LinkedChannel<'_> {
    fn drop(&mut self) {
        self.close();
    }
}
