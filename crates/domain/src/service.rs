use log::{debug, error};

use crate::{
    CatalogExercise, CreateError, ExerciseRepository, ExerciseService, NewWorkout, ReadError,
    Workout, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            if err.is_no_connection() {
                debug!("failed to {} {}: {err}", $action, $entity);
            } else {
                error!("failed to {} {}: {err}", $action, $entity);
            }
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            "get",
            "workouts"
        )
    }

    async fn create_workout(&self, workout: NewWorkout) -> Result<(), CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            "create",
            "workout"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<CatalogExercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            "get",
            "exercises"
        )
    }
}
