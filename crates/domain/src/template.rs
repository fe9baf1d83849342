use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};

use crate::{
    CreateError, CustomWorkoutDraft, DeleteError, Difficulty, DifficultyFilter, Name, ReadError,
    ValidationError,
};

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn get_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError>;
    async fn create_template(
        &self,
        draft: &CustomWorkoutDraft,
    ) -> Result<WorkoutTemplate, CreateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;

    async fn validate_template_name(
        &self,
        name: &str,
        id: TemplateID,
    ) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_templates().await {
                Ok(templates) => {
                    if templates.iter().all(|t| {
                        t.id == id
                            || !Name::new(&t.name)
                                .is_ok_and(|other| other.matches_ignore_case(&name))
                    }) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

/// Storage for user-defined templates. Catalog templates are never stored.
#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    async fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError>;
    async fn create_template(
        &self,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, CreateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: TemplateID,
    pub name: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub exercises: Vec<TemplateExercise>,
}

impl WorkoutTemplate {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| *e.sets).sum()
    }
}

#[derive(
    Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TemplateID(pub(crate) u32);

impl TemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for TemplateID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Smallest id above every id in use, `None` once the id space is used up.
#[must_use]
pub fn next_template_id(templates: &[WorkoutTemplate]) -> Option<TemplateID> {
    templates
        .iter()
        .map(|t| t.id)
        .max()
        .unwrap_or_default()
        .next()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub exercise_name: String,
    pub sets: Sets,
    pub reps: Reps,
}

#[derive(
    Deref, Display, Into, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Sets(pub(crate) u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..1000).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 999")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

#[derive(
    Deref, Display, Into, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Reps(pub(crate) u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateFilter {
    pub name: String,
    pub difficulty: DifficultyFilter,
}

impl TemplateFilter {
    /// Select the matching templates, keeping their order.
    #[must_use]
    pub fn templates<'a>(
        &self,
        templates: impl IntoIterator<Item = &'a WorkoutTemplate>,
    ) -> Vec<&'a WorkoutTemplate> {
        templates.into_iter().filter(|t| self.matches(t)).collect()
    }

    #[must_use]
    pub fn matches(&self, template: &WorkoutTemplate) -> bool {
        self.difficulty.matches(template.difficulty)
            && template
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase())
    }
}

#[must_use]
pub fn filter_templates<'a>(
    templates: &'a [WorkoutTemplate],
    search_term: &str,
    difficulty: DifficultyFilter,
) -> Vec<&'a WorkoutTemplate> {
    TemplateFilter {
        name: search_term.to_string(),
        difficulty,
    }
    .templates(templates)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn template(id: u32, name: &str, difficulty: Difficulty) -> WorkoutTemplate {
        WorkoutTemplate {
            id: id.into(),
            name: name.to_string(),
            difficulty,
            duration: "30 mins".to_string(),
            exercises: vec![TemplateExercise {
                exercise_name: "Push-ups".to_string(),
                sets: Sets(3),
                reps: Reps(15),
            }],
        }
    }

    static TEMPLATES: std::sync::LazyLock<Vec<WorkoutTemplate>> = std::sync::LazyLock::new(|| {
        vec![
            template(1, "Full Body Blast", Difficulty::Beginner),
            template(2, "Leg Day", Difficulty::Intermediate),
            template(3, "Blast Off", Difficulty::Advanced),
            template(4, "Upper Body", Difficulty::Beginner),
        ]
    });

    fn ids(templates: &[&WorkoutTemplate]) -> Vec<u32> {
        templates.iter().map(|t| *t.id).collect()
    }

    #[rstest]
    #[case("", DifficultyFilter::All, vec![1, 2, 3, 4])]
    #[case("", DifficultyFilter::Only(Difficulty::Beginner), vec![1, 4])]
    #[case("", DifficultyFilter::Only(Difficulty::Intermediate), vec![2])]
    #[case("blast", DifficultyFilter::All, vec![1, 3])]
    #[case("BLAST", DifficultyFilter::All, vec![1, 3])]
    #[case("blast", DifficultyFilter::Only(Difficulty::Beginner), vec![1])]
    #[case("blast", DifficultyFilter::Only(Difficulty::Intermediate), vec![])]
    #[case("body", DifficultyFilter::Only(Difficulty::Beginner), vec![1, 4])]
    #[case(" body", DifficultyFilter::All, vec![1, 4])]
    #[case("body ", DifficultyFilter::All, vec![1])]
    #[case("body  ", DifficultyFilter::All, vec![])]
    #[case("yoga", DifficultyFilter::All, vec![])]
    fn test_filter_templates(
        #[case] search_term: &str,
        #[case] difficulty: DifficultyFilter,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(
            ids(&filter_templates(&TEMPLATES, search_term, difficulty)),
            expected
        );
    }

    #[test]
    fn test_filter_templates_empty() {
        assert!(filter_templates(&[], "blast", DifficultyFilter::All).is_empty());
    }

    #[test]
    fn test_filter_templates_without_filter_is_identity() {
        assert_eq!(
            filter_templates(&TEMPLATES, "", DifficultyFilter::All),
            TEMPLATES.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_filter_templates_is_deterministic() {
        for search_term in ["", "b", "day"] {
            for difficulty in DifficultyFilter::options() {
                assert_eq!(
                    filter_templates(&TEMPLATES, search_term, difficulty),
                    filter_templates(&TEMPLATES, search_term, difficulty)
                );
            }
        }
    }

    #[test]
    fn test_filter_templates_properties() {
        for search_term in ["", "b", "BO", "day", "x"] {
            for difficulty in DifficultyFilter::options() {
                let result = filter_templates(&TEMPLATES, search_term, difficulty);
                for t in &result {
                    assert!(TEMPLATES.contains(t));
                    assert!(difficulty.matches(t.difficulty));
                    assert!(t.name.to_lowercase().contains(&search_term.to_lowercase()));
                }
            }
        }
    }

    #[test]
    fn test_next_template_id() {
        assert_eq!(next_template_id(&[]), Some(TemplateID(1)));
        assert_eq!(next_template_id(&TEMPLATES), Some(TemplateID(5)));
        assert_eq!(
            next_template_id(&[template(u32::MAX, "Last", Difficulty::Beginner)]),
            None
        );
    }

    #[test]
    fn test_workout_template_num_sets() {
        assert_eq!(TEMPLATES[0].num_sets(), 3);
    }

    #[rstest]
    #[case("3", Ok(Sets(3)))]
    #[case("100", Ok(Sets(100)))]
    #[case("999", Ok(Sets(999)))]
    #[case("0", Err(SetsError::OutOfRange))]
    #[case("1000", Err(SetsError::OutOfRange))]
    #[case("", Err(SetsError::ParseError))]
    #[case("three", Err(SetsError::ParseError))]
    fn test_sets_try_from(#[case] value: &str, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::try_from(value), expected);
    }

    #[rstest]
    #[case("12", Ok(Reps(12)))]
    #[case("999", Ok(Reps(999)))]
    #[case("0", Err(RepsError::OutOfRange))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("-1", Err(RepsError::ParseError))]
    #[case("1.5", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }
}
