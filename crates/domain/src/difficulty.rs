use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

use crate::Property;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Labels are matched exactly, `"beginner"` is not a difficulty.
impl TryFrom<&str> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Difficulty::iter()
            .find(|d| d.name() == value)
            .copied()
            .ok_or_else(|| DifficultyError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Unknown difficulty \"{0}\"")]
    Unknown(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub const ALL_LABEL: &'static str = "all";

    #[must_use]
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => d == difficulty,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::All => Self::ALL_LABEL,
            DifficultyFilter::Only(d) => d.name(),
        }
    }

    #[must_use]
    pub fn options() -> Vec<DifficultyFilter> {
        std::iter::once(DifficultyFilter::All)
            .chain(Difficulty::iter().map(|d| DifficultyFilter::Only(*d)))
            .collect()
    }
}

impl TryFrom<&str> for DifficultyFilter {
    type Error = DifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == Self::ALL_LABEL {
            return Ok(DifficultyFilter::All);
        }
        Difficulty::try_from(value).map(DifficultyFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Beginner", Ok(Difficulty::Beginner))]
    #[case("Intermediate", Ok(Difficulty::Intermediate))]
    #[case("Advanced", Ok(Difficulty::Advanced))]
    #[case("advanced", Err(DifficultyError::Unknown("advanced".to_string())))]
    #[case("", Err(DifficultyError::Unknown(String::new())))]
    fn test_difficulty_try_from(
        #[case] label: &str,
        #[case] expected: Result<Difficulty, DifficultyError>,
    ) {
        assert_eq!(Difficulty::try_from(label), expected);
    }

    #[rstest]
    #[case("all", Ok(DifficultyFilter::All))]
    #[case("Beginner", Ok(DifficultyFilter::Only(Difficulty::Beginner)))]
    #[case("All", Err(DifficultyError::Unknown("All".to_string())))]
    fn test_difficulty_filter_try_from(
        #[case] label: &str,
        #[case] expected: Result<DifficultyFilter, DifficultyError>,
    ) {
        assert_eq!(DifficultyFilter::try_from(label), expected);
    }

    #[test]
    fn test_difficulty_filter_label_round_trip() {
        for filter in DifficultyFilter::options() {
            assert_eq!(DifficultyFilter::try_from(filter.label()), Ok(filter));
        }
    }

    #[rstest]
    #[case(DifficultyFilter::All, Difficulty::Advanced, true)]
    #[case(DifficultyFilter::Only(Difficulty::Beginner), Difficulty::Beginner, true)]
    #[case(DifficultyFilter::Only(Difficulty::Beginner), Difficulty::Advanced, false)]
    fn test_difficulty_filter_matches(
        #[case] filter: DifficultyFilter,
        #[case] difficulty: Difficulty,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(difficulty), expected);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate");
    }
}
