//! REST
//!
//! Client of the fitness tracker API. Every call is a single HTTP request without caching or
//! retries.

use chrono::{DateTime, Utc};
use gloo_net::http::{Request, Response};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use fitrack_domain as domain;

/// Base URL of the API server, set by `FITRACK_API_URL` at build time.
pub const API_BASE_URL: &str = match option_env!("FITRACK_API_URL") {
    Some(url) => url,
    None => "http://10.0.0.78:3000",
};

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub base_url: &'static str,
    pub sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base_url: API_BASE_URL,
            sender: GlooNetSendRequest,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> REST<S> {
    fn url(&self, path: &str) -> String {
        url(self.base_url, path)
    }

    async fn fetch<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, domain::StorageError>
    where
        T: 'static + for<'de> Deserialize<'de>,
    {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|err| domain::StorageError::Other(Box::new(err)))
    }

    async fn fetch_no_content(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<(), domain::StorageError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, domain::StorageError> {
        let request = request.map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        let response = self
            .sender
            .send_request(request)
            .await
            .map_err(|err| domain::StorageError::NoConnection(err.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let message = match response.text().await {
            Ok(text) => text,
            Err(_) => response.status_text(),
        };
        Err(domain::StorageError::Status { status, message })
    }
}

fn url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl<S: SendRequest> domain::WorkoutRepository for REST<S> {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        let workouts: Vec<Workout> = self
            .fetch(Request::get(&self.url("api/workouts")).build())
            .await?;
        Ok(workouts
            .into_iter()
            .filter_map(|workout| {
                let id = workout.id.clone();
                domain::Workout::try_from(workout)
                    .inspect_err(|err| warn!("ignoring workout {id}: {err}"))
                    .ok()
            })
            .collect())
    }

    async fn create_workout(&self, workout: domain::NewWorkout) -> Result<(), domain::CreateError> {
        Ok(self
            .fetch_no_content(
                Request::post(&self.url("api/workouts")).json(&NewWorkout::from(workout)),
            )
            .await?)
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_exercises(&self) -> Result<Vec<domain::CatalogExercise>, domain::ReadError> {
        let exercises: Vec<CatalogExercise> = self
            .fetch(Request::get(&self.url("api/exercises")).build())
            .await?;
        Ok(exercises
            .into_iter()
            .filter_map(|exercise| {
                let name = exercise.name.clone();
                domain::CatalogExercise::try_from(exercise)
                    .inspect_err(|err| warn!("ignoring exercise {name}: {err}"))
                    .ok()
            })
            .collect())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_minutes: u32,
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<ExerciseEntry>,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self {
            id: value.id.to_string(),
            workout_type: value.workout_type.to_string(),
            duration_minutes: value.duration_minutes,
            date: value.date,
            notes: value.notes,
            exercises: value.exercises.into_iter().map(ExerciseEntry::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = domain::WorkoutTypeError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            workout_type: value.workout_type.parse()?,
            duration_minutes: value.duration_minutes,
            date: value.date,
            notes: value.notes,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseEntry::from)
                .collect(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sets: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reps: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f32,
}

impl From<domain::ExerciseEntry> for ExerciseEntry {
    fn from(value: domain::ExerciseEntry) -> Self {
        Self {
            name: value.name,
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
        }
    }
}

impl From<ExerciseEntry> for domain::ExerciseEntry {
    fn from(value: ExerciseEntry) -> Self {
        Self {
            name: value.name,
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub user_id: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration_minutes: u32,
    pub date: DateTime<Utc>,
    pub notes: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl From<domain::NewWorkout> for NewWorkout {
    fn from(value: domain::NewWorkout) -> Self {
        Self {
            user_id: value.user_id,
            workout_type: value.workout_type.to_string(),
            duration_minutes: value.duration_minutes,
            date: value.date,
            notes: value.notes,
            exercises: value.exercises.into_iter().map(ExerciseEntry::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExercise {
    pub name: String,
    pub muscle_group: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub equipment: String,
}

impl From<domain::CatalogExercise> for CatalogExercise {
    fn from(value: domain::CatalogExercise) -> Self {
        Self {
            name: value.name,
            muscle_group: value.muscle_group.to_string(),
            equipment: value.equipment,
        }
    }
}

impl TryFrom<CatalogExercise> for domain::CatalogExercise {
    type Error = domain::MuscleGroupError;

    fn try_from(value: CatalogExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            muscle_group: value.muscle_group.parse()?,
            equipment: value.equipment,
        })
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
