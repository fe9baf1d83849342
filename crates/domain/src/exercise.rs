use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use crate::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: &'static str,
    pub muscle_group: &'static str,
    pub equipment: &'static str,
    pub difficulty: Difficulty,
    pub instructions: &'static [&'static str],
}

#[derive(
    Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ExerciseID(pub(crate) u32);

impl From<u32> for ExerciseID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Look up an exercise by its exact name.
///
/// Template entries refer to exercises only by name, so a miss is an
/// ordinary outcome and not an error.
#[must_use]
pub fn find_exercise<'a>(exercises: &'a [Exercise], name: &str) -> Option<&'a Exercise> {
    exercises.iter().find(|e| e.name == name)
}
