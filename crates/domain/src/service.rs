use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    Catalog, CreateError, CustomWorkoutDraft, DeleteError, ReadError, ScheduleError, ScheduleID,
    ScheduleRepository, ScheduleService, ScheduledWorkout, TemplateID, TemplateRepository,
    TemplateService, WorkoutTemplate, next_template_id, sort_schedule,
};

pub struct Service<R> {
    repository: R,
    catalog: Catalog,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_catalog(repository, Catalog::default())
    }

    pub fn with_catalog(repository: R, catalog: Catalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: TemplateRepository + ScheduleRepository> TemplateService for Service<R> {
    async fn get_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError> {
        let custom_templates = log_on_error!(
            self.repository.read_templates(),
            ReadError,
            "get",
            "templates"
        )?;
        Ok(self
            .catalog
            .templates()
            .iter()
            .cloned()
            .chain(custom_templates)
            .collect())
    }

    async fn create_template(
        &self,
        draft: &CustomWorkoutDraft,
    ) -> Result<WorkoutTemplate, CreateError> {
        let templates = self.get_templates().await?;
        let id = next_template_id(&templates).ok_or(CreateError::NoFreeId)?;
        let template = draft.to_template(id)?;
        self.validate_template_name(&template.name, TemplateID::nil())
            .await?;
        log_on_error!(
            self.repository.create_template(template),
            CreateError,
            "create",
            "template"
        )
    }

    /// Scheduled workouts of the template are removed as well, as template ids are reused.
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
        if self.catalog.contains_template(id) {
            return Err(DeleteError::Protected(format!("Workout template {id}")));
        }
        log_on_error!(
            self.repository.delete_template(id),
            DeleteError,
            "delete",
            "template"
        )?;
        let schedule = log_on_error!(
            self.repository.read_schedule(),
            ReadError,
            "get",
            "schedule"
        )?;
        for scheduled_workout in schedule.iter().filter(|s| s.template_id == id) {
            log_on_error!(
                self.repository.delete_scheduled_workout(scheduled_workout.id),
                DeleteError,
                "delete",
                "scheduled workout"
            )?;
        }
        Ok(id)
    }
}

impl<R: ScheduleRepository + TemplateRepository> ScheduleService for Service<R> {
    async fn get_schedule(&self) -> Result<Vec<ScheduledWorkout>, ReadError> {
        let mut schedule = log_on_error!(
            self.repository.read_schedule(),
            ReadError,
            "get",
            "schedule"
        )?;
        sort_schedule(&mut schedule);
        Ok(schedule)
    }

    async fn schedule_workout(
        &self,
        template_id: TemplateID,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<ScheduledWorkout, ScheduleError> {
        if date < today {
            return Err(ScheduleError::InThePast(date));
        }
        if !self
            .get_templates()
            .await?
            .iter()
            .any(|t| t.id == template_id)
        {
            return Err(ScheduleError::UnknownTemplate(template_id));
        }
        Ok(log_on_error!(
            self.repository.create_scheduled_workout(template_id, date),
            CreateError,
            "create",
            "scheduled workout"
        )?)
    }

    async fn unschedule_workout(&self, id: ScheduleID) -> Result<ScheduleID, DeleteError> {
        log_on_error!(
            self.repository.delete_scheduled_workout(id),
            DeleteError,
            "delete",
            "scheduled workout"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Difficulty, DraftError, DraftField, NameError, StorageError, ValidationError,
    };

    #[derive(Default)]
    struct FakeRepository {
        templates: RefCell<Vec<WorkoutTemplate>>,
        schedule: RefCell<Vec<ScheduledWorkout>>,
    }

    impl TemplateRepository for FakeRepository {
        async fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError> {
            Ok(self.templates.borrow().clone())
        }

        async fn create_template(
            &self,
            template: WorkoutTemplate,
        ) -> Result<WorkoutTemplate, CreateError> {
            self.templates.borrow_mut().push(template.clone());
            Ok(template)
        }

        async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
            let mut templates = self.templates.borrow_mut();
            let len = templates.len();
            templates.retain(|t| t.id != id);
            if templates.len() == len {
                return Err(DeleteError::NotFound(format!("Workout template {id}")));
            }
            Ok(id)
        }
    }

    impl ScheduleRepository for FakeRepository {
        async fn read_schedule(&self) -> Result<Vec<ScheduledWorkout>, ReadError> {
            Ok(self.schedule.borrow().clone())
        }

        async fn create_scheduled_workout(
            &self,
            template_id: TemplateID,
            date: NaiveDate,
        ) -> Result<ScheduledWorkout, CreateError> {
            let mut schedule = self.schedule.borrow_mut();
            let id = schedule
                .iter()
                .map(|s| s.id)
                .max()
                .unwrap_or_default()
                .next()
                .ok_or(CreateError::NoFreeId)?;
            let scheduled_workout = ScheduledWorkout {
                id,
                template_id,
                date,
            };
            schedule.push(scheduled_workout.clone());
            Ok(scheduled_workout)
        }

        async fn delete_scheduled_workout(
            &self,
            id: ScheduleID,
        ) -> Result<ScheduleID, DeleteError> {
            self.schedule.borrow_mut().retain(|s| s.id != id);
            Ok(id)
        }
    }

    struct UnavailableRepository;

    impl TemplateRepository for UnavailableRepository {
        async fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError> {
            Err(StorageError::Unavailable.into())
        }

        async fn create_template(
            &self,
            _: WorkoutTemplate,
        ) -> Result<WorkoutTemplate, CreateError> {
            Err(StorageError::Unavailable.into())
        }

        async fn delete_template(&self, _: TemplateID) -> Result<TemplateID, DeleteError> {
            Err(StorageError::Unavailable.into())
        }
    }

    impl ScheduleRepository for UnavailableRepository {
        async fn read_schedule(&self) -> Result<Vec<ScheduledWorkout>, ReadError> {
            Err(StorageError::Unavailable.into())
        }

        async fn create_scheduled_workout(
            &self,
            _: TemplateID,
            _: NaiveDate,
        ) -> Result<ScheduledWorkout, CreateError> {
            Err(StorageError::Unavailable.into())
        }

        async fn delete_scheduled_workout(
            &self,
            _: ScheduleID,
        ) -> Result<ScheduleID, DeleteError> {
            Err(StorageError::Unavailable.into())
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn arm_day() -> CustomWorkoutDraft {
        CustomWorkoutDraft::default()
            .set_name("Arm Day")
            .set_difficulty(Difficulty::Advanced)
            .add_exercise("Push-ups")
            .edit_exercise_field(0, DraftField::Sets, "4")
            .unwrap()
            .edit_exercise_field(0, DraftField::Reps, "25")
            .unwrap()
    }

    #[test]
    fn test_get_templates_includes_catalog() {
        let service = Service::new(FakeRepository::default());
        let templates = block_on(service.get_templates()).unwrap();
        assert_eq!(templates, service.catalog().templates().to_vec());
    }

    #[test]
    fn test_create_template() {
        let service = Service::new(FakeRepository::default());

        let template = block_on(service.create_template(&arm_day())).unwrap();

        assert_eq!(template.id, TemplateID::from(3));
        assert_eq!(template.name, "Arm Day");
        assert_eq!(template.difficulty, Difficulty::Advanced);
        assert_eq!(template.duration, "4 mins");
        assert_eq!(
            block_on(service.get_templates()).unwrap().last(),
            Some(&template)
        );
    }

    #[test]
    fn test_create_template_assigns_next_id() {
        let service = Service::new(FakeRepository::default());
        block_on(service.create_template(&arm_day())).unwrap();
        let template =
            block_on(service.create_template(&arm_day().set_name("Arm Day II"))).unwrap();
        assert_eq!(template.id, TemplateID::from(4));
    }

    #[test]
    fn test_create_template_name_conflict() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            block_on(service.create_template(&arm_day().set_name("full body blast"))),
            Err(CreateError::Validation(ValidationError::Conflict(_)))
        ));
    }

    #[test]
    fn test_create_template_invalid_draft() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            block_on(service.create_template(&arm_day().set_name(" "))),
            Err(CreateError::Draft(DraftError::Name(NameError::Empty)))
        ));
        assert!(matches!(
            block_on(service.create_template(&arm_day().remove_exercise(0))),
            Err(CreateError::Draft(DraftError::NoExercises))
        ));
        assert!(
            block_on(service.get_templates()).unwrap().len() == service.catalog().templates().len()
        );
    }

    #[test]
    fn test_create_template_storage_unavailable() {
        let service = Service::new(UnavailableRepository);
        assert!(matches!(
            block_on(service.create_template(&arm_day())),
            Err(CreateError::Storage(StorageError::Unavailable))
        ));
    }

    #[test]
    fn test_validate_template_name() {
        let service = Service::new(FakeRepository::default());
        assert_eq!(
            block_on(service.validate_template_name(" Arm Day ", TemplateID::nil()))
                .unwrap()
                .to_string(),
            "Arm Day"
        );
        assert!(matches!(
            block_on(service.validate_template_name("Full Body Blast", TemplateID::nil())),
            Err(ValidationError::Conflict(_))
        ));
        assert!(
            block_on(service.validate_template_name("Full Body Blast", TemplateID::from(1)))
                .is_ok()
        );
        assert!(matches!(
            block_on(service.validate_template_name("", TemplateID::nil())),
            Err(ValidationError::Other(_))
        ));
    }

    #[test]
    fn test_delete_template() {
        let service = Service::new(FakeRepository::default());
        let template = block_on(service.create_template(&arm_day())).unwrap();

        assert_eq!(
            block_on(service.delete_template(template.id)).unwrap(),
            template.id
        );
        assert!(!block_on(service.get_templates()).unwrap().contains(&template));
    }

    #[test]
    fn test_delete_template_removes_scheduled_workouts() {
        let service = Service::new(FakeRepository::default());
        let deleted = block_on(service.create_template(&arm_day())).unwrap();
        let kept = block_on(service.schedule_workout(1.into(), date(20), date(10))).unwrap();
        block_on(service.schedule_workout(deleted.id, date(20), date(10))).unwrap();

        block_on(service.delete_template(deleted.id)).unwrap();
        let created =
            block_on(service.create_template(&arm_day().set_name("Leg Day"))).unwrap();

        assert_eq!(created.id, deleted.id);
        assert_eq!(block_on(service.get_schedule()).unwrap(), vec![kept]);
    }

    #[test]
    fn test_delete_template_storage_unavailable() {
        let service = Service::new(UnavailableRepository);
        assert!(matches!(
            block_on(service.delete_template(TemplateID::from(3))),
            Err(DeleteError::Storage(StorageError::Unavailable))
        ));
    }

    #[test]
    fn test_create_template_without_free_id() {
        let repository = FakeRepository::default();
        repository.templates.borrow_mut().push(WorkoutTemplate {
            id: TemplateID::from(u32::MAX),
            ..block_on(Service::new(FakeRepository::default()).create_template(&arm_day()))
                .unwrap()
        });
        let service = Service::new(repository);
        assert!(matches!(
            block_on(service.create_template(&arm_day().set_name("Leg Day"))),
            Err(CreateError::NoFreeId)
        ));
    }

    #[test]
    fn test_delete_catalog_template() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            block_on(service.delete_template(TemplateID::from(1))),
            Err(DeleteError::Protected(_))
        ));
    }

    #[test]
    fn test_schedule_workout() {
        let service = Service::new(FakeRepository::default());

        let second = block_on(service.schedule_workout(1.into(), date(20), date(10))).unwrap();
        let first = block_on(service.schedule_workout(2.into(), date(10), date(10))).unwrap();

        assert_eq!(
            block_on(service.get_schedule()).unwrap(),
            vec![first.clone(), second.clone()]
        );

        assert_eq!(
            block_on(service.unschedule_workout(first.id)).unwrap(),
            first.id
        );
        assert_eq!(block_on(service.get_schedule()).unwrap(), vec![second]);
    }

    #[test]
    fn test_schedule_workout_in_the_past() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            block_on(service.schedule_workout(1.into(), date(9), date(10))),
            Err(ScheduleError::InThePast(d)) if d == date(9)
        ));
    }

    #[test]
    fn test_schedule_workout_unknown_template() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            block_on(service.schedule_workout(42.into(), date(10), date(10))),
            Err(ScheduleError::UnknownTemplate(id)) if id == TemplateID::from(42)
        ));
    }

    #[test]
    fn test_validate_schedule_date() {
        let service = Service::new(FakeRepository::default());
        assert_eq!(
            service
                .validate_schedule_date("2024-01-12", date(10))
                .unwrap(),
            date(12)
        );
        assert!(matches!(
            service.validate_schedule_date("2024-01-09", date(10)),
            Err(ScheduleError::InThePast(_))
        ));
        assert!(matches!(
            service.validate_schedule_date("tomorrow", date(10)),
            Err(ScheduleError::InvalidDate(_))
        ));
    }
}
