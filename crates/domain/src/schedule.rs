use chrono::NaiveDate;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use crate::{CreateError, DeleteError, ReadError, TemplateID};

#[allow(async_fn_in_trait)]
pub trait ScheduleService {
    async fn get_schedule(&self) -> Result<Vec<ScheduledWorkout>, ReadError>;
    async fn schedule_workout(
        &self,
        template_id: TemplateID,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<ScheduledWorkout, ScheduleError>;
    async fn unschedule_workout(&self, id: ScheduleID) -> Result<ScheduleID, DeleteError>;

    fn validate_schedule_date(
        &self,
        date: &str,
        today: NaiveDate,
    ) -> Result<NaiveDate, ScheduleError> {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed_date) => {
                if parsed_date < today {
                    Err(ScheduleError::InThePast(parsed_date))
                } else {
                    Ok(parsed_date)
                }
            }
            Err(_) => Err(ScheduleError::InvalidDate(date.to_string())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ScheduleRepository {
    async fn read_schedule(&self) -> Result<Vec<ScheduledWorkout>, ReadError>;
    async fn create_scheduled_workout(
        &self,
        template_id: TemplateID,
        date: NaiveDate,
    ) -> Result<ScheduledWorkout, CreateError>;
    async fn delete_scheduled_workout(&self, id: ScheduleID) -> Result<ScheduleID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    pub id: ScheduleID,
    pub template_id: TemplateID,
    pub date: NaiveDate,
}

#[derive(
    Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ScheduleID(u32);

impl ScheduleID {
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for ScheduleID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Date must not be in the past ({0})")]
    InThePast(NaiveDate),
    #[error("Invalid date \"{0}\"")]
    InvalidDate(String),
    #[error("Workout template {0} does not exist")]
    UnknownTemplate(TemplateID),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Create(#[from] CreateError),
}

/// Sort entries by date, entries on the same date by creation order.
pub fn sort_schedule(schedule: &mut [ScheduledWorkout]) {
    schedule.sort_by_key(|s| (s.date, s.id));
}

/// Entries on or after `today`, in schedule order.
#[must_use]
pub fn upcoming(schedule: &[ScheduledWorkout], today: NaiveDate) -> Vec<&ScheduledWorkout> {
    let mut result = schedule
        .iter()
        .filter(|s| s.date >= today)
        .collect::<Vec<_>>();
    result.sort_by_key(|s| (s.date, s.id));
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn entry(id: u32, day: u32) -> ScheduledWorkout {
        ScheduledWorkout {
            id: id.into(),
            template_id: 1.into(),
            date: date(day),
        }
    }

    #[test]
    fn test_sort_schedule() {
        let mut schedule = vec![entry(1, 20), entry(3, 10), entry(2, 10)];
        sort_schedule(&mut schedule);
        assert_eq!(schedule, vec![entry(2, 10), entry(3, 10), entry(1, 20)]);
    }

    #[test]
    fn test_upcoming() {
        let schedule = vec![entry(1, 20), entry(2, 5), entry(3, 15), entry(4, 15)];
        assert_eq!(
            upcoming(&schedule, date(15)),
            vec![&schedule[2], &schedule[3], &schedule[0]]
        );
        assert!(upcoming(&schedule, date(21)).is_empty());
        assert!(upcoming(&[], date(1)).is_empty());
    }

    #[test]
    fn test_schedule_id_next() {
        assert_eq!(ScheduleID::default().next(), Some(ScheduleID(1)));
        assert_eq!(ScheduleID(u32::MAX).next(), None);
    }
}
