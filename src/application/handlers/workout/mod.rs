//! Active workout lifecycle handlers.

mod finish_workout;
mod ticker;
mod tracker;

pub use finish_workout::{FailedSetLog, FinishReport, FinishWorkoutHandler};
pub use ticker::spawn_elapsed_ticker;
pub use tracker::WorkoutTracker;
