use chrono::Local;
use dioxus::prelude::*;

use fitrack_domain::{self as domain, WorkoutService};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE, Route,
    component::element::{ConnectionError, EmptyState, FloatingActionButton, LoadingPage},
};

#[component]
pub fn Workouts() -> Element {
    let mut workouts = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_workouts().await
    });
    let navigator = use_navigator();

    let state = workouts.state().cloned();
    let result = workouts.read();

    rsx! {
        match view(&state, (*result).as_ref()) {
            View::Loading => rsx! {
                LoadingPage {}
            },
            View::Empty => rsx! {
                EmptyState { text: "No workouts found." }
            },
            View::List(workouts) => rsx! {
                for workout in workouts {
                    WorkoutCard { key: "{workout.id}", workout: workout.clone() }
                }
            },
            View::Error(message) => rsx! {
                ConnectionError {
                    message,
                    retry_event: move |_| workouts.restart(),
                }
            },
        }
        FloatingActionButton {
            icon: "plus".to_string(),
            onclick: move |_| { navigator.push(Route::LogWorkout {}); },
        }
    }
}

#[derive(Debug, PartialEq)]
enum View<'a> {
    Loading,
    Empty,
    List(&'a [domain::Workout]),
    Error(String),
}

/// A restarted resource keeps its previous value while pending, so the state decides first.
fn view<'a>(
    state: &UseResourceState,
    result: Option<&'a Result<Vec<domain::Workout>, domain::ReadError>>,
) -> View<'a> {
    match (state, result) {
        (UseResourceState::Pending, _) | (_, None) => View::Loading,
        (_, Some(Ok(workouts))) if workouts.is_empty() => View::Empty,
        (_, Some(Ok(workouts))) => View::List(workouts),
        (_, Some(Err(err))) => View::Error(err.to_string()),
    }
}

#[component]
fn WorkoutCard(workout: domain::Workout) -> Element {
    let date = workout.date.with_timezone(&Local).format("%Y-%m-%d");
    rsx! {
        div {
            class: "card workout-card mx-2 mb-4",
            div {
                class: "card-content",
                p { class: "title is-5", "{workout.workout_type} Workout" }
                p { "Duration: {workout.duration_minutes} min" }
                p { class: "has-text-grey", "Date: {date}" }
                if !workout.notes.is_empty() {
                    p { class: "is-italic mt-2", "{workout.notes}" }
                }
                if !workout.exercises.is_empty() {
                    div {
                        class: "content mt-3",
                        p { class: "has-text-weight-bold mb-1", "Key Exercises:" }
                        ul {
                            for exercise in &workout.exercises {
                                li { "{exercise}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
