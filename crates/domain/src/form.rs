//! Workout form
//!
//! All inputs are kept as entered. Numbers are only parsed when the form is converted into a
//! [`NewWorkout`], so the user can freely type intermediate values.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::{
    CatalogExercise, ExerciseEntry, FormError, MuscleGroup, NewWorkout, PLACEHOLDER_USER_ID,
    WorkoutType, suggest_exercises,
};

const DEFAULT_SETS: &str = "3";
const DEFAULT_REPS: &str = "10";
const DEFAULT_WEIGHT: &str = "0";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutForm {
    pub workout_type: WorkoutType,
    pub duration: String,
    pub notes: String,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub exercises: Vec<ExerciseEntryInput>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntryInput {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl ExerciseEntryInput {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: DEFAULT_SETS.to_string(),
            reps: DEFAULT_REPS.to_string(),
            weight: DEFAULT_WEIGHT.to_string(),
        }
    }

    #[must_use]
    pub fn to_entry(&self) -> ExerciseEntry {
        ExerciseEntry {
            name: self.name.clone(),
            sets: parse_integer(&self.sets),
            reps: parse_integer(&self.reps),
            weight: parse_decimal(&self.weight),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Sets,
    Reps,
    Weight,
}

impl WorkoutForm {
    pub fn select_type(&mut self, workout_type: WorkoutType) {
        self.workout_type = workout_type;
    }

    pub fn set_duration(&mut self, duration: String) {
        self.duration = duration;
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    pub fn toggle_muscle_group(&mut self, muscle_group: MuscleGroup) {
        if !self.muscle_groups.remove(&muscle_group) {
            self.muscle_groups.insert(muscle_group);
        }
    }

    #[must_use]
    pub fn is_selected(&self, muscle_group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&muscle_group)
    }

    #[must_use]
    pub fn suggestions<'a>(&self, catalog: &'a [CatalogExercise]) -> Vec<&'a CatalogExercise> {
        suggest_exercises(catalog, &self.muscle_groups)
    }

    pub fn add_exercise(&mut self, name: &str) -> Result<(), FormError> {
        if self.exercises.iter().any(|e| e.name == name) {
            return Err(FormError::AlreadyAdded(name.to_string()));
        }
        self.exercises.push(ExerciseEntryInput::new(name));
        Ok(())
    }

    pub fn update_exercise(&mut self, index: usize, field: EntryField, value: String) {
        if let Some(exercise) = self.exercises.get_mut(index) {
            match field {
                EntryField::Sets => exercise.sets = value,
                EntryField::Reps => exercise.reps = value,
                EntryField::Weight => exercise.weight = value,
            }
        }
    }

    pub fn remove_exercise(&mut self, index: usize) {
        if index < self.exercises.len() {
            self.exercises.remove(index);
        }
    }

    pub fn to_new_workout(&self, date: DateTime<Utc>) -> Result<NewWorkout, FormError> {
        if self.duration.trim().is_empty() || self.exercises.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(NewWorkout {
            user_id: PLACEHOLDER_USER_ID.to_string(),
            workout_type: self.workout_type,
            duration_minutes: parse_integer(&self.duration),
            date,
            notes: self.notes.clone(),
            exercises: self
                .exercises
                .iter()
                .map(ExerciseEntryInput::to_entry)
                .collect(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parses the leading digits of `value`. Anything that does not start with a digit results in 0.
#[must_use]
pub fn parse_integer(value: &str) -> u32 {
    let value = value.trim();
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    if end == 0 {
        return 0;
    }
    // only overflow can fail here
    value[..end].parse().unwrap_or(u32::MAX)
}

/// Parses the leading decimal number of `value`, accepting a comma as decimal separator. Anything
/// that does not start with a number or does not fit into a finite `f32` results in 0.
#[must_use]
pub fn parse_decimal(value: &str) -> f32 {
    let value = value.trim().replace(',', ".");
    let mut end = 0;
    let mut seen_point = false;
    for (i, c) in value.char_indices() {
        match c {
            '-' | '+' if i == 0 => {}
            '.' if !seen_point => seen_point = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    value[..end]
        .parse::<f32>()
        .ok()
        .filter(|weight| weight.is_finite())
        .unwrap_or(0.)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
    }

    fn form_with_exercises(names: &[&str]) -> WorkoutForm {
        let mut form = WorkoutForm {
            duration: "45".to_string(),
            ..WorkoutForm::default()
        };
        for name in names {
            form.add_exercise(name).unwrap();
        }
        form
    }

    #[test]
    fn test_default() {
        let form = WorkoutForm::default();
        assert_eq!(form.workout_type, WorkoutType::Strength);
        assert!(form.duration.is_empty());
        assert!(form.notes.is_empty());
        assert!(form.muscle_groups.is_empty());
        assert!(form.exercises.is_empty());
    }

    #[test]
    fn test_toggle_muscle_group() {
        let mut form = WorkoutForm::default();

        form.toggle_muscle_group(MuscleGroup::Legs);
        form.toggle_muscle_group(MuscleGroup::Back);
        assert!(form.is_selected(MuscleGroup::Legs));
        assert!(form.is_selected(MuscleGroup::Back));

        form.toggle_muscle_group(MuscleGroup::Legs);
        assert!(!form.is_selected(MuscleGroup::Legs));
        assert_eq!(form.muscle_groups, BTreeSet::from([MuscleGroup::Back]));
    }

    #[test]
    fn test_suggestions_legs() {
        let catalog = (1..=6)
            .map(|i| CatalogExercise {
                name: format!("Leg exercise {i}"),
                muscle_group: MuscleGroup::Legs,
                equipment: "Machine".to_string(),
            })
            .collect::<Vec<_>>();
        let mut form = WorkoutForm::default();

        assert!(form.suggestions(&catalog).is_empty());

        form.toggle_muscle_group(MuscleGroup::Legs);

        let suggestions = form.suggestions(&catalog);
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].name, "Leg exercise 1");
        assert_eq!(suggestions[4].name, "Leg exercise 5");
    }

    #[test]
    fn test_add_exercise() {
        let mut form = WorkoutForm::default();

        assert_eq!(form.add_exercise("Squat"), Ok(()));
        assert_eq!(
            form.exercises,
            vec![ExerciseEntryInput {
                name: "Squat".to_string(),
                sets: "3".to_string(),
                reps: "10".to_string(),
                weight: "0".to_string(),
            }]
        );
    }

    #[test]
    fn test_add_exercise_duplicate() {
        let mut form = form_with_exercises(&["Squat", "Lunge"]);
        form.update_exercise(0, EntryField::Weight, "100".to_string());
        let before = form.clone();

        assert_eq!(
            form.add_exercise("Squat"),
            Err(FormError::AlreadyAdded("Squat".to_string()))
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_add_exercise_duplicate_is_case_sensitive() {
        let mut form = form_with_exercises(&["Squat"]);

        assert_eq!(form.add_exercise("squat"), Ok(()));
        assert_eq!(form.exercises.len(), 2);
    }

    #[test]
    fn test_update_exercise() {
        let mut form = form_with_exercises(&["Squat"]);

        form.update_exercise(0, EntryField::Sets, "5".to_string());
        form.update_exercise(0, EntryField::Reps, "abc".to_string());
        form.update_exercise(0, EntryField::Weight, "62,5".to_string());
        form.update_exercise(1, EntryField::Sets, "9".to_string());

        assert_eq!(
            form.exercises,
            vec![ExerciseEntryInput {
                name: "Squat".to_string(),
                sets: "5".to_string(),
                reps: "abc".to_string(),
                weight: "62,5".to_string(),
            }]
        );
    }

    #[test]
    fn test_remove_exercise() {
        let mut form = form_with_exercises(&["Squat", "Lunge", "Plank"]);

        form.remove_exercise(1);
        form.remove_exercise(5);

        assert_eq!(
            form.exercises
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Squat", "Plank"]
        );
    }

    #[rstest]
    #[case("", &["Squat"])]
    #[case("   ", &["Squat"])]
    #[case("45", &[])]
    #[case("", &[])]
    fn test_to_new_workout_missing_fields(#[case] duration: &str, #[case] exercises: &[&str]) {
        let mut form = form_with_exercises(exercises);
        form.set_duration(duration.to_string());

        assert_eq!(form.to_new_workout(date()), Err(FormError::MissingFields));
    }

    #[test]
    fn test_to_new_workout() {
        let mut form = form_with_exercises(&["Squat", "Bench Press"]);
        form.select_type(WorkoutType::Cardio);
        form.set_duration("60".to_string());
        form.set_notes("Felt good".to_string());
        form.update_exercise(0, EntryField::Sets, "4".to_string());
        form.update_exercise(0, EntryField::Weight, "135".to_string());
        form.update_exercise(1, EntryField::Sets, String::new());
        form.update_exercise(1, EntryField::Reps, String::new());
        form.update_exercise(1, EntryField::Weight, String::new());

        assert_eq!(
            form.to_new_workout(date()),
            Ok(NewWorkout {
                user_id: "123".to_string(),
                workout_type: WorkoutType::Cardio,
                duration_minutes: 60,
                date: date(),
                notes: "Felt good".to_string(),
                exercises: vec![
                    ExerciseEntry {
                        name: "Squat".to_string(),
                        sets: 4,
                        reps: 10,
                        weight: 135.0,
                    },
                    ExerciseEntry {
                        name: "Bench Press".to_string(),
                        sets: 0,
                        reps: 0,
                        weight: 0.0,
                    },
                ],
            })
        );
    }

    #[test]
    fn test_reset() {
        let mut form = form_with_exercises(&["Squat"]);
        form.toggle_muscle_group(MuscleGroup::Legs);
        form.set_notes("Notes".to_string());

        form.reset();

        assert_eq!(form, WorkoutForm::default());
    }

    #[rstest]
    #[case("", 0)]
    #[case("  ", 0)]
    #[case("12", 12)]
    #[case(" 12 ", 12)]
    #[case("+7", 7)]
    #[case("12x", 12)]
    #[case("3.9", 3)]
    #[case("abc", 0)]
    #[case("-5", 0)]
    #[case("99999999999", u32::MAX)]
    fn test_parse_integer(#[case] value: &str, #[case] expected: u32) {
        assert_eq!(parse_integer(value), expected);
    }

    #[rstest]
    #[case("", 0.0)]
    #[case("0", 0.0)]
    #[case("62.5", 62.5)]
    #[case("62,5", 62.5)]
    #[case(" 80 ", 80.0)]
    #[case("80kg", 80.0)]
    #[case(".5", 0.5)]
    #[case("1.2.3", 1.2)]
    #[case("-2.5", -2.5)]
    #[case("kg", 0.0)]
    #[case("-", 0.0)]
    #[case("99999999999999999999999999999999999999999999999999", 0.0)]
    #[case("-99999999999999999999999999999999999999999999999999", 0.0)]
    fn test_parse_decimal(#[case] value: &str, #[case] expected: f32) {
        assert_approx_eq!(parse_decimal(value), expected);
    }

    #[test]
    fn test_to_new_workout_with_huge_weight() {
        let mut form = form_with_exercises(&["Squats"]);
        form.update_exercise(0, EntryField::Weight, "9".repeat(50));

        let workout = form.to_new_workout(date()).unwrap();

        assert!(workout.exercises[0].weight.is_finite());
        assert_approx_eq!(workout.exercises[0].weight, 0.0);
    }
}
