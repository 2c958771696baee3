// src/application/client/request.rs
//! Generation tracking shared by the client controllers.
//!
//! Every request takes a fresh generation number. Only the response of the
//! latest generation may touch controller state; older responses are
//! dropped. The loading flag follows the latest request.

use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub(crate) struct RequestState {
    latest: u64,
    loading: bool,
}

impl RequestState {
    pub(crate) fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.loading = true;
        self.latest
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.latest == generation
    }

    pub(crate) fn finish(&mut self, generation: u64) {
        if self.is_current(generation) {
            self.loading = false;
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }
}

pub(crate) trait TracksRequests {
    fn requests(&mut self) -> &mut RequestState;
}

/// Lock a controller mutex. State is plain data and stays consistent
/// even if a holder panicked, so poisoning is ignored.
pub(crate) fn lock<S>(state: &Mutex<S>) -> MutexGuard<'_, S> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the loading flag of its generation when dropped, whichever way
/// the request ended.
pub(crate) struct LoadingGuard<'a, S: TracksRequests> {
    state: &'a Mutex<S>,
    generation: u64,
}

impl<'a, S: TracksRequests> LoadingGuard<'a, S> {
    pub(crate) fn begin(state: &'a Mutex<S>) -> Self {
        let generation = lock(state).requests().begin();
        Self { state, generation }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl<S: TracksRequests> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        lock(self.state).requests().finish(self.generation);
    }
}
