use chrono::Utc;
use dioxus::prelude::*;

use fitrack_domain::{
    self as domain, EntryField, ExerciseService, MuscleGroup, Property, WorkoutService,
    WorkoutType,
};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE, Route,
    component::{
        element::{Color, Container, Icon, LoadingPage, Title},
        form::{
            ButtonSelectField, ButtonSelectOption, InputField, TextareaField, ToggleTag,
            ToggleTags,
        },
    },
    notify, signal_changed_data,
};

#[component]
pub fn LogWorkout() -> Element {
    let catalog = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_exercises().await
    });
    let mut form = use_signal(domain::WorkoutForm::default);
    let mut is_saving = use_signal(|| false);

    use_effect(move || {
        if let Some(Err(err)) = &*catalog.read() {
            notify(
                Color::Danger,
                "Error",
                format!("Failed to load exercises: {err}"),
            );
        }
    });

    let catalog = match &*catalog.read() {
        Some(Ok(catalog)) => catalog.clone(),
        Some(Err(_)) => vec![],
        None => {
            return rsx! {
                LoadingPage {}
                p { class: "has-text-centered has-text-grey", "Loading Exercises..." }
            };
        }
    };

    let add_exercise = move |name: String| {
        if let Err(err) = form.write().add_exercise(&name) {
            notify(Color::Warning, "Already added", err.to_string());
        }
    };

    let save = move |_| async move {
        let new_workout = match form.read().to_new_workout(Utc::now()) {
            Ok(new_workout) => new_workout,
            Err(err) => {
                notify(Color::Warning, "Missing fields", err.to_string());
                return;
            }
        };

        *is_saving.write() = true;
        let result = DOMAIN_SERVICE.read().create_workout(new_workout).await;
        *is_saving.write() = false;

        match result {
            Ok(()) => {
                form.write().reset();
                notify(
                    Color::Success,
                    "Success!",
                    "Your workout has been logged.".to_string(),
                );
                signal_changed_data();
                let navigator = navigator();
                if navigator.can_go_back() {
                    navigator.go_back();
                } else {
                    navigator.push(Route::Workouts {});
                }
            }
            Err(err) => {
                notify(
                    Color::Danger,
                    "Error",
                    format!("Could not save workout: {err}"),
                );
            }
        }
    };

    let is_disabled = is_saving();
    let current = form.read().clone();
    let suggestions = current
        .suggestions(&catalog)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    rsx! {
        Container {
            Title { title: "Log New Workout" }
            ButtonSelectField {
                label: "Workout Type",
                options: WorkoutType::iter()
                    .map(|workout_type| ButtonSelectOption {
                        text: workout_type.name().to_string(),
                        value: *workout_type,
                    })
                    .collect::<Vec<_>>(),
                selected: current.workout_type,
                is_disabled,
                onclick: move |(_, workout_type)| form.write().select_type(workout_type),
            }
            InputField {
                label: "Duration (minutes)",
                placeholder: "e.g., 45",
                inputmode: "numeric",
                value: current.duration.clone(),
                is_disabled,
                oninput: move |event: FormEvent| form.write().set_duration(event.value()),
            }
            ToggleTags {
                label: "1. Select Target Muscle Groups",
                tags: MuscleGroup::iter()
                    .map(|muscle_group| ToggleTag {
                        text: muscle_group.name().to_string(),
                        value: *muscle_group,
                        is_active: current.is_selected(*muscle_group),
                    })
                    .collect::<Vec<_>>(),
                is_disabled,
                onclick: move |muscle_group| form.write().toggle_muscle_group(muscle_group),
            }
            if !current.muscle_groups.is_empty() {
                Suggestions { suggestions, is_disabled, onadd: add_exercise }
            }
            h2 {
                class: "subtitle has-text-weight-bold mt-5",
                "3. Logged Workout Details ({current.exercises.len()} Exercises)"
            }
            for (index, entry) in current.exercises.iter().enumerate() {
                div {
                    key: "{entry.name}",
                    class: "box exercise-entry",
                    div {
                        class: "is-flex is-justify-content-space-between mb-2",
                        span { class: "has-text-weight-bold", "{entry.name}" }
                        a {
                            class: "has-text-danger",
                            onclick: move |_| {
                                if !is_saving() {
                                    form.write().remove_exercise(index);
                                }
                            },
                            Icon { name: "trash" }
                        }
                    }
                    div {
                        class: "columns is-mobile",
                        for (field, label, inputmode, value) in [
                            (EntryField::Sets, "Sets", "numeric", entry.sets.clone()),
                            (EntryField::Reps, "Reps", "numeric", entry.reps.clone()),
                            (EntryField::Weight, "Weight", "decimal", entry.weight.clone()),
                        ] {
                            div {
                                class: "column",
                                InputField {
                                    label,
                                    inputmode,
                                    value,
                                    has_text_right: true,
                                    is_disabled,
                                    oninput: move |event: FormEvent| {
                                        form.write().update_exercise(index, field, event.value());
                                    },
                                }
                            }
                        }
                    }
                }
            }
            TextareaField {
                label: "Notes / Comments",
                placeholder: "How did the session feel? Any pain?",
                value: current.notes.clone(),
                is_disabled,
                oninput: move |event: FormEvent| form.write().set_notes(event.value()),
            }
            div {
                class: "field is-grouped is-grouped-centered mt-5 mb-6",
                div {
                    class: "control",
                    button {
                        class: "button is-success",
                        class: if is_disabled { "is-loading" },
                        disabled: is_disabled,
                        onclick: save,
                        "Complete & Log Workout"
                    }
                }
            }
        }
    }
}

#[component]
fn Suggestions(
    suggestions: Vec<domain::CatalogExercise>,
    is_disabled: bool,
    onadd: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "box",
            h2 { class: "subtitle has-text-weight-bold", "2. Suggested Exercises" }
            if suggestions.is_empty() {
                p { "No exercises found for these groups." }
            }
            for exercise in suggestions {
                div {
                    key: "{exercise.name}",
                    class: "is-flex is-justify-content-space-between is-align-items-center py-1",
                    span {
                        "{exercise.name} "
                        span { class: "has-text-grey", "({exercise.muscle_group} / {exercise.equipment})" }
                    }
                    button {
                        class: "button is-small is-success is-light",
                        disabled: is_disabled,
                        onclick: {
                            let name = exercise.name.clone();
                            move |_| onadd.call(name.clone())
                        },
                        Icon { name: "plus" }
                    }
                }
            }
        }
    }
}
