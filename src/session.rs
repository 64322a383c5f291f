use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    AwaitingSelection,
    Committed(usize),
}

/// One round of "present choices, wait for the user to commit".
///
/// The UI calls [`commit`](Self::commit) once the user presses *Set*; any
/// number of threads may block in [`await_selection`](Self::await_selection)
/// until then. After the commit every wait returns immediately.
#[derive(Debug)]
pub struct SelectionSession {
    state: Mutex<State>,
    committed: Condvar,
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::AwaitingSelection),
            committed: Condvar::new(),
        }
    }

    // A panicking committer cannot leave the state half-written, so a poisoned
    // lock is still usable.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the selected index and wake every waiter.
    ///
    /// Commits are serialized; if more than one arrives the last one wins.
    pub fn commit(&self, index: usize) {
        let mut state = self.lock();
        if let State::Committed(previous) = *state {
            log::warn!(
                "Selection already committed ({}), replacing with {}",
                previous,
                index
            );
        }
        *state = State::Committed(index);
        self.committed.notify_all();
    }

    /// The committed index, without blocking.
    pub fn selection(&self) -> Option<usize> {
        match *self.lock() {
            State::Committed(index) => Some(index),
            State::AwaitingSelection => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        self.selection().is_some()
    }

    /// Block until a selection is committed and return it.
    ///
    /// There is no cancellation: the only way out is a commit.
    pub fn await_selection(&self) -> usize {
        let mut state = self.lock();
        loop {
            if let State::Committed(index) = *state {
                return index;
            }
            state = self
                .committed
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Like [`await_selection`](Self::await_selection), but gives up after
    /// `timeout` and returns `None`. A timeout too long to represent as a
    /// deadline waits without limit.
    pub fn await_selection_timeout(&self, timeout: Duration) -> Option<usize> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return Some(self.await_selection());
        };
        let mut state = self.lock();
        loop {
            if let State::Committed(index) = *state {
                return Some(index);
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            state = self
                .committed
                .wait_timeout(state, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }
}
