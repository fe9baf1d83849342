use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use fitdash_domain::{
    self as domain, Catalog, CustomWorkoutDraft, Difficulty, DifficultyError, DifficultyFilter,
    DraftError, DraftField, TemplateFilter, TemplateID, WorkoutTemplate,
};

#[derive(Debug, Default, Display, EnumIter, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Dashboard,
    Workouts,
    Progress,
}

/// View state of one dashboard session.
///
/// The modals are independent of each other: opening one never closes
/// another. The exercise detail modal is open while `selected_exercise` is
/// set, the scheduler while `scheduler` refers to a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub tab: Tab,
    pub selected_exercise: Option<String>,
    pub workout_builder_open: bool,
    pub scheduler: Option<TemplateID>,
    pub filter: TemplateFilter,
    pub draft: CustomWorkoutDraft,
    pub progress_exercise: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            selected_exercise: None,
            workout_builder_open: false,
            scheduler: None,
            filter: TemplateFilter::default(),
            draft: CustomWorkoutDraft::default(),
            progress_exercise: String::from("Push-ups"),
        }
    }
}

impl SessionState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn set_search_term(&mut self, search_term: &str) {
        self.filter.name = search_term.to_string();
    }

    /// Unknown labels keep the current filter.
    pub fn set_difficulty_filter(&mut self, label: &str) -> Result<(), DifficultyError> {
        match DifficultyFilter::try_from(label) {
            Ok(difficulty) => {
                self.filter.difficulty = difficulty;
                Ok(())
            }
            Err(err) => {
                warn!("ignoring difficulty filter: {err}");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn visible_templates<'a>(
        &self,
        templates: &'a [WorkoutTemplate],
    ) -> Vec<&'a WorkoutTemplate> {
        self.filter.templates(templates)
    }

    /// Show the details of an exercise. Names missing from the catalog are
    /// ignored and leave the modal closed.
    pub fn open_exercise_detail(&mut self, catalog: &Catalog, name: &str) {
        if catalog.find_exercise(name).is_some() {
            self.selected_exercise = Some(name.to_string());
        } else {
            debug!("no exercise named \"{name}\"");
        }
    }

    pub fn close_exercise_detail(&mut self) {
        self.selected_exercise = None;
    }

    #[must_use]
    pub fn selected_exercise(&self, catalog: &Catalog) -> Option<&'static domain::Exercise> {
        self.selected_exercise
            .as_deref()
            .and_then(|name| catalog.find_exercise(name))
    }

    pub fn open_workout_builder(&mut self) {
        self.workout_builder_open = true;
    }

    /// Close the builder and discard the draft.
    pub fn cancel_workout_builder(&mut self) {
        self.workout_builder_open = false;
        self.draft = CustomWorkoutDraft::default();
    }

    /// Close the builder after the draft has been stored.
    pub fn finish_workout_builder(&mut self) {
        self.cancel_workout_builder();
    }

    pub fn rename_draft(&mut self, name: &str) {
        self.draft = self.draft.set_name(name);
    }

    /// Unknown labels keep the current difficulty.
    pub fn set_draft_difficulty(&mut self, label: &str) -> Result<(), DifficultyError> {
        let difficulty = Difficulty::try_from(label).inspect_err(|err| {
            warn!("ignoring workout difficulty: {err}");
        })?;
        self.draft = self.draft.set_difficulty(difficulty);
        Ok(())
    }

    pub fn add_draft_exercise(&mut self, exercise_name: &str) {
        self.draft = self.draft.add_exercise(exercise_name);
    }

    pub fn edit_draft_exercise(
        &mut self,
        index: usize,
        field: DraftField,
        value: &str,
    ) -> Result<(), DraftError> {
        self.draft = self.draft.edit_exercise_field(index, field, value)?;
        Ok(())
    }

    pub fn remove_draft_exercise(&mut self, index: usize) {
        self.draft = self.draft.remove_exercise(index);
    }

    pub fn open_scheduler(&mut self, template_id: TemplateID) {
        self.scheduler = Some(template_id);
    }

    pub fn close_scheduler(&mut self) {
        self.scheduler = None;
    }

    pub fn select_progress_exercise(&mut self, exercise_name: &str) {
        self.progress_exercise = exercise_name.to_string();
    }
}
