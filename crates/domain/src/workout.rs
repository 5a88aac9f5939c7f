use std::{fmt, slice::Iter, str::FromStr};

use chrono::{DateTime, Utc};
use derive_more::{AsRef, Deref, Display};

use crate::{CreateError, Property, ReadError};

/// User identifier sent with every new workout until the server knows about users.
pub const PLACEHOLDER_USER_ID: &str = "123";

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: NewWorkout) -> Result<(), CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: NewWorkout) -> Result<(), CreateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub workout_type: WorkoutType,
    pub duration_minutes: u32,
    pub date: DateTime<Utc>,
    pub notes: String,
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(String);

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    #[default]
    Strength,
    Cardio,
    Flexibility,
}

impl Property for WorkoutType {
    fn iter() -> Iter<'static, WorkoutType> {
        static WORKOUT_TYPES: [WorkoutType; 3] = [
            WorkoutType::Strength,
            WorkoutType::Cardio,
            WorkoutType::Flexibility,
        ];
        WORKOUT_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Flexibility => "Flexibility",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutType::iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| WorkoutTypeError::Invalid(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutTypeError {
    #[error("Invalid workout type: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f32,
}

impl fmt::Display for ExerciseEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} sets x {} reps ({} kg)",
            self.name, self.sets, self.reps, self.weight
        )
    }
}

/// Content of a workout that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub user_id: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: u32,
    pub date: DateTime<Utc>,
    pub notes: String,
    pub exercises: Vec<ExerciseEntry>,
}
