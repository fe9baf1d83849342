use std::collections::VecDeque;

use chrono::NaiveDate;
use fitdash_domain as domain;
use fitdash_web_app::{Settings, SettingsRepository, log};
use gloo_storage::{Storage as _, errors::StorageError};
use ::log::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Browser local storage, one JSON value per key.
#[derive(Clone, Copy)]
pub struct LocalStorage;

const KEY_TEMPLATES: &str = "templates";
const KEY_SCHEDULE: &str = "schedule";
const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

fn read<T: DeserializeOwned + Default>(key: &str) -> Result<T, StorageError> {
    match gloo_storage::LocalStorage::get(key) {
        Ok(value) => Ok(value),
        Err(StorageError::KeyNotFound(_)) => Ok(T::default()),
        Err(err) => Err(err),
    }
}

fn write<T: Serialize>(key: &str, value: T) -> Result<(), StorageError> {
    gloo_storage::LocalStorage::set(key, value)
}

impl From<StorageError> for Error {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::JsError(_) => Error(domain::StorageError::Unavailable),
            err => Error(domain::StorageError::Other(Box::new(err))),
        }
    }
}

struct Error(domain::StorageError);

impl From<Error> for domain::ReadError {
    fn from(value: Error) -> Self {
        value.0.into()
    }
}

impl From<Error> for domain::CreateError {
    fn from(value: Error) -> Self {
        value.0.into()
    }
}

impl From<Error> for domain::DeleteError {
    fn from(value: Error) -> Self {
        value.0.into()
    }
}

impl domain::TemplateRepository for LocalStorage {
    async fn read_templates(&self) -> Result<Vec<domain::WorkoutTemplate>, domain::ReadError> {
        Ok(valid_templates(
            read::<Vec<Template>>(KEY_TEMPLATES).map_err(Error::from)?,
        ))
    }

    async fn create_template(
        &self,
        template: domain::WorkoutTemplate,
    ) -> Result<domain::WorkoutTemplate, domain::CreateError> {
        let mut templates = read::<Vec<Template>>(KEY_TEMPLATES).map_err(Error::from)?;
        if templates.iter().any(|t| t.id == *template.id) {
            return Err(domain::CreateError::Conflict);
        }
        templates.push(Template::from(&template));
        write(KEY_TEMPLATES, templates).map_err(Error::from)?;
        Ok(template)
    }

    async fn delete_template(
        &self,
        id: domain::TemplateID,
    ) -> Result<domain::TemplateID, domain::DeleteError> {
        let mut templates = read::<Vec<Template>>(KEY_TEMPLATES).map_err(Error::from)?;
        let len = templates.len();
        templates.retain(|t| t.id != *id);
        if templates.len() == len {
            return Err(domain::DeleteError::NotFound(format!("Workout template {id}")));
        }
        write(KEY_TEMPLATES, templates).map_err(Error::from)?;
        Ok(id)
    }
}

impl domain::ScheduleRepository for LocalStorage {
    async fn read_schedule(&self) -> Result<Vec<domain::ScheduledWorkout>, domain::ReadError> {
        Ok(read::<Vec<ScheduledWorkout>>(KEY_SCHEDULE)
            .map_err(Error::from)?
            .into_iter()
            .map(domain::ScheduledWorkout::from)
            .collect())
    }

    async fn create_scheduled_workout(
        &self,
        template_id: domain::TemplateID,
        date: NaiveDate,
    ) -> Result<domain::ScheduledWorkout, domain::CreateError> {
        let mut schedule = read::<Vec<ScheduledWorkout>>(KEY_SCHEDULE).map_err(Error::from)?;
        let scheduled_workout = ScheduledWorkout {
            id: next_schedule_id(&schedule)?,
            template_id: *template_id,
            date,
        };
        schedule.push(scheduled_workout.clone());
        write(KEY_SCHEDULE, schedule).map_err(Error::from)?;
        Ok(scheduled_workout.into())
    }

    async fn delete_scheduled_workout(
        &self,
        id: domain::ScheduleID,
    ) -> Result<domain::ScheduleID, domain::DeleteError> {
        let mut schedule = read::<Vec<ScheduledWorkout>>(KEY_SCHEDULE).map_err(Error::from)?;
        let len = schedule.len();
        schedule.retain(|s| s.id != *id);
        if schedule.len() == len {
            return Err(domain::DeleteError::NotFound(format!("Scheduled workout {id}")));
        }
        write(KEY_SCHEDULE, schedule).map_err(Error::from)?;
        Ok(id)
    }
}

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        read(KEY_SETTINGS).map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        write(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        read(KEY_LOG).map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        write(KEY_LOG, entries).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

/// Records that no longer form a valid template are skipped.
fn valid_templates(records: Vec<Template>) -> Vec<domain::WorkoutTemplate> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            domain::WorkoutTemplate::try_from(record)
                .inspect_err(|err| warn!("skipping invalid workout template {id}: {err}"))
                .ok()
        })
        .collect()
}

fn next_schedule_id(schedule: &[ScheduledWorkout]) -> Result<u32, domain::CreateError> {
    schedule
        .iter()
        .map(|s| s.id)
        .max()
        .unwrap_or_default()
        .checked_add(1)
        .ok_or(domain::CreateError::NoFreeId)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Template {
    id: u32,
    name: String,
    difficulty: domain::Difficulty,
    duration: String,
    exercises: Vec<TemplateExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TemplateExercise {
    exercise_name: String,
    sets: u32,
    reps: u32,
}

impl From<&domain::WorkoutTemplate> for Template {
    fn from(value: &domain::WorkoutTemplate) -> Self {
        Self {
            id: *value.id,
            name: value.name.clone(),
            difficulty: value.difficulty,
            duration: value.duration.clone(),
            exercises: value
                .exercises
                .iter()
                .map(|e| TemplateExercise {
                    exercise_name: e.exercise_name.clone(),
                    sets: *e.sets,
                    reps: *e.reps,
                })
                .collect(),
        }
    }
}

impl TryFrom<Template> for domain::WorkoutTemplate {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            difficulty: value.difficulty,
            duration: value.duration,
            exercises: value
                .exercises
                .into_iter()
                .map(|e| -> Result<domain::TemplateExercise, Self::Error> {
                    Ok(domain::TemplateExercise {
                        exercise_name: e.exercise_name,
                        sets: domain::Sets::new(e.sets)?,
                        reps: domain::Reps::new(e.reps)?,
                    })
                })
                .collect::<Result<Vec<_>, Self::Error>>()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ScheduledWorkout {
    id: u32,
    template_id: u32,
    date: NaiveDate,
}

impl From<ScheduledWorkout> for domain::ScheduledWorkout {
    fn from(value: ScheduledWorkout) -> Self {
        Self {
            id: value.id.into(),
            template_id: value.template_id.into(),
            date: value.date,
        }
    }
}
