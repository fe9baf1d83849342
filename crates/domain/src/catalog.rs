use crate::{
    Difficulty, Exercise, ExerciseID, ProgressPoint, ProgressSeries, Reps, Sets, TemplateExercise,
    TemplateID, Weight, WorkoutTemplate, find_exercise,
};

/// The built-in exercises and workout templates.
///
/// Entries are fixed at load time. User-defined templates are kept by the
/// template repository and never added here.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    exercises: &'static [Exercise],
    templates: &'static [WorkoutTemplate],
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: &'static [Exercise], templates: &'static [WorkoutTemplate]) -> Self {
        Self {
            exercises,
            templates,
        }
    }

    #[must_use]
    pub fn exercises(&self) -> &'static [Exercise] {
        self.exercises
    }

    #[must_use]
    pub fn templates(&self) -> &'static [WorkoutTemplate] {
        self.templates
    }

    #[must_use]
    pub fn find_exercise(&self, name: &str) -> Option<&'static Exercise> {
        find_exercise(self.exercises, name)
    }

    #[must_use]
    pub fn contains_template(&self, id: TemplateID) -> bool {
        self.templates.iter().any(|t| t.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&EXERCISES, &TEMPLATES)
    }
}

pub static EXERCISES: [Exercise; 2] = [
    Exercise {
        id: ExerciseID(1),
        name: "Push-ups",
        muscle_group: "Chest",
        equipment: "None",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Start in a plank position",
            "Lower your body until chest nearly touches ground",
            "Push back up to starting position",
            "Repeat",
        ],
    },
    Exercise {
        id: ExerciseID(2),
        name: "Squats",
        muscle_group: "Legs",
        equipment: "None",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Lower your body as if sitting back into a chair",
            "Keep chest up and back straight",
            "Return to standing position",
        ],
    },
];

pub static TEMPLATES: std::sync::LazyLock<Vec<WorkoutTemplate>> = std::sync::LazyLock::new(|| {
    vec![
        WorkoutTemplate {
            id: TemplateID(1),
            name: "Full Body Blast".to_string(),
            difficulty: Difficulty::Beginner,
            duration: "30 mins".to_string(),
            exercises: vec![
                template_exercise("Push-ups", Sets(3), Reps(15)),
                template_exercise("Squats", Sets(3), Reps(12)),
            ],
        },
        WorkoutTemplate {
            id: TemplateID(2),
            name: "Lower Body Strength".to_string(),
            difficulty: Difficulty::Intermediate,
            duration: "45 mins".to_string(),
            exercises: vec![
                template_exercise("Squats", Sets(4), Reps(10)),
                template_exercise("Push-ups", Sets(3), Reps(20)),
            ],
        },
    ]
});

fn template_exercise(name: &str, sets: Sets, reps: Reps) -> TemplateExercise {
    TemplateExercise {
        exercise_name: name.to_string(),
        sets,
        reps,
    }
}

pub static PROGRESS: std::sync::LazyLock<ProgressSeries> = std::sync::LazyLock::new(|| {
    ProgressSeries::from([
        (
            "Push-ups".to_string(),
            vec![
                progress_point("1/1", Weight(0.0), 15),
                progress_point("1/8", Weight(0.0), 17),
                progress_point("1/15", Weight(0.0), 20),
                progress_point("1/22", Weight(0.0), 22),
            ],
        ),
        (
            "Squats".to_string(),
            vec![
                progress_point("1/1", Weight(95.0), 12),
                progress_point("1/8", Weight(105.0), 12),
                progress_point("1/15", Weight(115.0), 10),
                progress_point("1/22", Weight(125.0), 10),
            ],
        ),
    ])
});

fn progress_point(date: &str, weight: Weight, reps: u32) -> ProgressPoint {
    ProgressPoint {
        date: date.to_string(),
        weight,
        reps,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{DifficultyFilter, filter_templates};

    #[test]
    fn test_unique_exercise_ids_and_names() {
        for (i, a) in EXERCISES.iter().enumerate() {
            for b in &EXERCISES[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_unique_template_ids() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_template_exercises_exist() {
        let catalog = Catalog::default();
        for template in catalog.templates() {
            for exercise in &template.exercises {
                assert!(
                    catalog.find_exercise(&exercise.exercise_name).is_some(),
                    "{} not found",
                    exercise.exercise_name
                );
            }
        }
    }

    #[test]
    fn test_find_exercise() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.find_exercise("Push-ups").map(|e| e.muscle_group),
            Some("Chest")
        );
        assert_eq!(catalog.find_exercise("Deadlift"), None);
    }

    #[test]
    fn test_filter_sample_templates() {
        let catalog = Catalog::default();
        assert_eq!(
            filter_templates(
                catalog.templates(),
                "blast",
                DifficultyFilter::Only(Difficulty::Beginner)
            )
            .into_iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>(),
            vec!["Full Body Blast"]
        );
        assert!(
            filter_templates(
                catalog.templates(),
                "blast",
                DifficultyFilter::Only(Difficulty::Advanced)
            )
            .is_empty()
        );
    }

    #[test]
    fn test_contains_template() {
        let catalog = Catalog::default();
        assert!(catalog.contains_template(1.into()));
        assert!(!catalog.contains_template(3.into()));
    }

    #[test]
    fn test_progress() {
        assert_eq!(
            PROGRESS.exercise_names().collect::<Vec<_>>(),
            vec!["Push-ups", "Squats"]
        );
        assert_eq!(PROGRESS.get("Squats").len(), 4);
        assert_eq!(PROGRESS.get("Push-ups")[3].reps, 22);
    }
}
