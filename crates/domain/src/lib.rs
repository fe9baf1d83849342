#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::slice::Iter;

pub mod catalog;
mod difficulty;
mod draft;
mod error;
mod exercise;
mod name;
mod progress;
mod schedule;
mod service;
mod template;

pub use catalog::Catalog;
pub use difficulty::{Difficulty, DifficultyError, DifficultyFilter};
pub use draft::{CustomWorkoutDraft, DraftError, DraftExercise, DraftField};
pub use error::{CreateError, DeleteError, ReadError, StorageError, ValidationError};
pub use exercise::{Exercise, ExerciseID, find_exercise};
pub use name::{Name, NameError};
pub use progress::{
    ProgressMetric, ProgressPoint, ProgressSeries, ProgressSummary, Weight, WeightError,
    series_points, summary,
};
pub use schedule::{
    ScheduleError, ScheduleID, ScheduleRepository, ScheduleService, ScheduledWorkout,
    sort_schedule, upcoming,
};
pub use service::Service;
pub use template::{
    Reps, RepsError, Sets, SetsError, TemplateExercise, TemplateFilter, TemplateID,
    TemplateRepository, TemplateService, WorkoutTemplate, filter_templates, next_template_id,
};

/// A closed set of labeled values, as offered in select fields.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
