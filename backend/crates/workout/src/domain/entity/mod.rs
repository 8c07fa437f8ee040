pub mod workout;

pub use workout::{NewWorkout, Workout, WorkoutPatch};
