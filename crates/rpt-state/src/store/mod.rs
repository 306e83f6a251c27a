//! The stores.
//!
//! Each store owns its state behind a lock and an injected dependency it
//! talks to. Operations take `&self`; the lock is never held across an
//! `.await`, so the loading flag and last error can be read while an
//! operation is waiting on I/O. Overlapping operations are not serialized:
//! whichever finishes last wins.

mod filter_store;
mod report_store;

use parking_lot::RwLock;

use crate::state::Tracked;

pub use filter_store::{FilterStore, LOAD_FILTERS_FALLBACK};
pub use report_store::{
    CREATE_REPORT_FAILED, DELETE_REPORT_FAILED, FETCH_REPORTS_FAILED, ReportStore,
    UPDATE_REPORT_FAILED,
};

/// Marks an operation in flight for as long as it is alive.
///
/// Dropping the guard clears the loading flag, including when the
/// operation's future is dropped before completion.
struct Busy<'a, T: Tracked> {
    state: &'a RwLock<T>,
}

impl<'a, T: Tracked> Busy<'a, T> {
    fn start(state: &'a RwLock<T>) -> Self {
        state.write().begin();
        Self { state }
    }
}

impl<T: Tracked> Drop for Busy<'_, T> {
    fn drop(&mut self) {
        self.state.write().finish();
    }
}
