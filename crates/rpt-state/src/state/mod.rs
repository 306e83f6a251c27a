//! Plain state held by the stores.
//!
//! The state types carry the derivations (selected option, flattened
//! summary, filtered report views) so they can be tested without any
//! async machinery. Stores wrap them in a lock.

mod filter_state;
mod report_state;

pub use filter_state::FilterState;
pub use report_state::ReportState;

/// State with a loading flag and a last-error slot.
pub trait Tracked {
    /// Mark an operation as started: set loading, clear the last error.
    fn begin(&mut self);

    /// Mark an operation as finished: clear loading.
    fn finish(&mut self);
}
