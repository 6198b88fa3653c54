//! Clock port - Time source for the tracking engine.
//!
//! Elapsed-time accounting must be a pure function of observed timestamps,
//! so the time source itself sits behind a seam that tests can control.

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    fn now(&self) -> Timestamp;
}
