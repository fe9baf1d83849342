pub mod dashboard;
pub mod exercise_detail;
pub mod progress;
pub mod scheduler;
pub mod workout_builder;
pub mod workouts;
