pub mod admin;
pub mod log_workout;
pub mod not_found;
pub mod workouts;
