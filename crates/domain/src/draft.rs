use serde::{Deserialize, Serialize};

use crate::{
    Difficulty, Name, NameError, Reps, RepsError, Sets, SetsError, TemplateExercise, TemplateID,
    WorkoutTemplate,
};

/// A custom workout while it is being composed in the workout builder.
///
/// Every transition returns a new draft and leaves `self` untouched, so the
/// UI can keep the previous value around and replay edits.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWorkoutDraft {
    pub name: String,
    pub difficulty: Difficulty,
    pub exercises: Vec<DraftExercise>,
}

/// Sets and reps are kept as entered and only parsed on save.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftExercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Sets,
    Reps,
}

impl CustomWorkoutDraft {
    #[must_use]
    pub fn set_name(&self, value: &str) -> Self {
        Self {
            name: value.to_string(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn set_difficulty(&self, value: Difficulty) -> Self {
        Self {
            difficulty: value,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn add_exercise(&self, exercise_name: &str) -> Self {
        let mut exercises = self.exercises.clone();
        exercises.push(DraftExercise {
            name: exercise_name.to_string(),
            sets: String::new(),
            reps: String::new(),
        });
        Self {
            exercises,
            ..self.clone()
        }
    }

    pub fn edit_exercise_field(
        &self,
        index: usize,
        field: DraftField,
        value: &str,
    ) -> Result<Self, DraftError> {
        if index >= self.exercises.len() {
            return Err(DraftError::InvalidIndex(index));
        }

        let exercises = self
            .exercises
            .iter()
            .enumerate()
            .map(|(i, e)| {
                if i != index {
                    return e.clone();
                }
                match field {
                    DraftField::Sets => DraftExercise {
                        sets: value.to_string(),
                        ..e.clone()
                    },
                    DraftField::Reps => DraftExercise {
                        reps: value.to_string(),
                        ..e.clone()
                    },
                }
            })
            .collect();

        Ok(Self {
            exercises,
            ..self.clone()
        })
    }

    /// Removing an index that does not exist leaves the draft unchanged.
    #[must_use]
    pub fn remove_exercise(&self, index: usize) -> Self {
        Self {
            exercises: self
                .exercises
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, e)| e.clone())
                .collect(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.exercises.is_empty()
    }

    /// Turn the draft into a template with the given id.
    ///
    /// The duration label is estimated as one minute per set.
    pub fn to_template(&self, id: TemplateID) -> Result<WorkoutTemplate, DraftError> {
        let name = Name::new(&self.name)?;

        if self.exercises.is_empty() {
            return Err(DraftError::NoExercises);
        }

        let exercises = self
            .exercises
            .iter()
            .enumerate()
            .map(|(row, e)| {
                Ok(TemplateExercise {
                    exercise_name: e.name.clone(),
                    sets: Sets::try_from(e.sets.trim())
                        .map_err(|source| DraftError::Sets { row, source })?,
                    reps: Reps::try_from(e.reps.trim())
                        .map_err(|source| DraftError::Reps { row, source })?,
                })
            })
            .collect::<Result<Vec<_>, DraftError>>()?;

        let mut template = WorkoutTemplate {
            id,
            name: name.to_string(),
            difficulty: self.difficulty,
            duration: String::new(),
            exercises,
        };
        template.duration = format!("{} mins", template.num_sets().max(1));

        Ok(template)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DraftError {
    #[error("No exercise at position {}", .0 + 1)]
    InvalidIndex(usize),
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Workout must contain at least one exercise")]
    NoExercises,
    #[error("Exercise {}: {source}", .row + 1)]
    Sets { row: usize, source: SetsError },
    #[error("Exercise {}: {source}", .row + 1)]
    Reps { row: usize, source: RepsError },
}
