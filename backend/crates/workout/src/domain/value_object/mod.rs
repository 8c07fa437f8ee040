pub mod discipline;
pub mod duration;
pub mod intensity;
pub mod page;
pub mod workout_date;

pub use discipline::Discipline;
pub use duration::DurationMinutes;
pub use intensity::Intensity;
pub use page::Page;
pub use workout_date::WorkoutDate;
