use std::{collections::BTreeSet, fmt, slice::Iter, str::FromStr};

use crate::{Property, ReadError};

pub const MAX_SUGGESTIONS: usize = 5;

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<CatalogExercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<CatalogExercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogExercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 6] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MuscleGroup {
    type Err = MuscleGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuscleGroup::iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| MuscleGroupError::Invalid(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Invalid muscle group: {0}")]
    Invalid(String),
}

/// Catalog exercises targeting one of the selected muscle groups, in catalog order.
#[must_use]
pub fn suggest_exercises<'a>(
    catalog: &'a [CatalogExercise],
    selected: &BTreeSet<MuscleGroup>,
) -> Vec<&'a CatalogExercise> {
    catalog
        .iter()
        .filter(|e| selected.contains(&e.muscle_group))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(name: &str, muscle_group: MuscleGroup) -> CatalogExercise {
        CatalogExercise {
            name: name.to_string(),
            muscle_group,
            equipment: "Barbell".to_string(),
        }
    }

    fn catalog() -> Vec<CatalogExercise> {
        vec![
            exercise("Bench Press", MuscleGroup::Chest),
            exercise("Squat", MuscleGroup::Legs),
            exercise("Deadlift", MuscleGroup::Back),
            exercise("Lunge", MuscleGroup::Legs),
            exercise("Plank", MuscleGroup::Core),
            exercise("Leg Press", MuscleGroup::Legs),
            exercise("Push-up", MuscleGroup::Chest),
            exercise("Calf Raise", MuscleGroup::Legs),
            exercise("Leg Curl", MuscleGroup::Legs),
            exercise("Leg Extension", MuscleGroup::Legs),
        ]
    }

    fn names(exercises: &[&CatalogExercise]) -> Vec<String> {
        exercises.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_muscle_group_name() {
        let mut names = HashSet::new();

        for muscle_group in MuscleGroup::iter() {
            let name = muscle_group.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));
            assert_eq!(name.parse::<MuscleGroup>(), Ok(*muscle_group));

            names.insert(name);
        }
    }

    #[rstest]
    #[case("Legs", Ok(MuscleGroup::Legs))]
    #[case("legs", Err(MuscleGroupError::Invalid("legs".to_string())))]
    #[case("Glutes", Err(MuscleGroupError::Invalid("Glutes".to_string())))]
    fn test_muscle_group_from_str(
        #[case] value: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(value.parse::<MuscleGroup>(), expected);
    }

    #[test]
    fn test_suggest_exercises_empty_selection() {
        assert!(suggest_exercises(&catalog(), &BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_suggest_exercises_capped_at_five() {
        let catalog = catalog();
        assert_eq!(
            names(&suggest_exercises(
                &catalog,
                &BTreeSet::from([MuscleGroup::Legs])
            )),
            vec!["Squat", "Lunge", "Leg Press", "Calf Raise", "Leg Curl"]
        );
    }

    #[test]
    fn test_suggest_exercises_keeps_catalog_order() {
        let catalog = catalog();
        assert_eq!(
            names(&suggest_exercises(
                &catalog,
                &BTreeSet::from([MuscleGroup::Core, MuscleGroup::Chest])
            )),
            vec!["Bench Press", "Plank", "Push-up"]
        );
    }

    #[rstest]
    #[case(&[MuscleGroup::Back], &["Deadlift"])]
    #[case(&[MuscleGroup::Arms], &[])]
    #[case(&[MuscleGroup::Chest, MuscleGroup::Back], &["Bench Press", "Deadlift", "Push-up"])]
    #[case(
        &[MuscleGroup::Chest, MuscleGroup::Legs],
        &["Bench Press", "Squat", "Lunge", "Leg Press", "Push-up"]
    )]
    fn test_suggest_exercises_only_selected_groups(
        #[case] selected: &[MuscleGroup],
        #[case] expected: &[&str],
    ) {
        let catalog = catalog();
        let selected = selected.iter().copied().collect::<BTreeSet<_>>();
        let suggestions = suggest_exercises(&catalog, &selected);

        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert!(
            suggestions
                .iter()
                .all(|e| selected.contains(&e.muscle_group))
        );
        assert_eq!(names(&suggestions), expected);
    }
}
