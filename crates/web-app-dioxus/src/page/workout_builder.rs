use dioxus::prelude::*;

use fitdash_domain::{self as domain, Property, TemplateService};

use crate::{
    DOMAIN_SERVICE, SESSION,
    component::{
        element::{Dialog, Error, Icon, NoData},
        form::{FieldValue, FieldValueState, InputField, SelectField, SelectOption},
    },
    signal_changed_data,
};

#[component]
pub fn WorkoutBuilder() -> Element {
    if !SESSION.read().workout_builder_open {
        return rsx! {};
    }

    rsx! { WorkoutBuilderDialog {} }
}

#[component]
fn WorkoutBuilderDialog() -> Element {
    let mut name = use_signal(FieldValue::<domain::Name>::default);
    let mut save_error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let catalog = DOMAIN_SERVICE.read().catalog();
    let draft = SESSION.read().draft.clone();
    let name_value = name.read().clone();
    let error = save_error.read().clone();

    let cancel = move |_: MouseEvent| {
        SESSION.write().cancel_workout_builder();
    };

    let save = move |_: MouseEvent| async move {
        *is_loading.write() = true;
        let draft = SESSION.read().draft.clone();
        match DOMAIN_SERVICE.read().create_template(&draft).await {
            Ok(_) => {
                SESSION.write().finish_workout_builder();
                signal_changed_data();
            }
            Err(err) => *save_error.write() = Some(err.to_string()),
        }
        *is_loading.write() = false;
    };

    rsx! {
        Dialog {
            title: rsx! { "Create workout" },
            close_event: cancel,
            InputField {
                label: "Name".to_string(),
                placeholder: "My workout".to_string(),
                value: name_value.input.clone(),
                error: name_value.error(),
                has_changed: name_value.changed(),
                oninput: move |event: FormEvent| {
                    async move {
                        let input = event.value();
                        SESSION.write().rename_draft(&input);
                        let validated = DOMAIN_SERVICE
                            .read()
                            .validate_template_name(&input, domain::TemplateID::nil())
                            .await
                            .map_err(|err| err.to_string());
                        name.write().update(input, validated);
                        *save_error.write() = None;
                    }
                },
            }
            SelectField {
                label: "Difficulty".to_string(),
                options: domain::Difficulty::iter()
                    .map(|difficulty| rsx! {
                        SelectOption {
                            text: difficulty.name(),
                            value: difficulty.name(),
                            selected: *difficulty == draft.difficulty,
                        }
                    })
                    .collect::<Vec<_>>(),
                has_changed: false,
                onchange: move |event: FormEvent| {
                    let _ = SESSION.write().set_draft_difficulty(&event.value());
                },
            }
            label { class: "label", "Exercises" }
            if draft.exercises.is_empty() {
                NoData { text: "No exercises added".to_string() }
            }
            for (index, exercise) in draft.exercises.iter().enumerate() {
                DraftExerciseRow {
                    key: "{index}-{exercise.name}",
                    index,
                    exercise: exercise.clone(),
                }
            }
            SelectField {
                options: std::iter::once(rsx! {
                    SelectOption { text: "Add exercise...", value: "", selected: true }
                })
                .chain(catalog.exercises().iter().map(|exercise| rsx! {
                    SelectOption {
                        text: exercise.name,
                        value: exercise.name,
                        selected: false,
                    }
                }))
                .collect::<Vec<_>>(),
                has_changed: false,
                onchange: move |event: FormEvent| {
                    let value = event.value();
                    if !value.is_empty() {
                        SESSION.write().add_draft_exercise(&value);
                        *save_error.write() = None;
                    }
                },
            }
            if let Some(err) = error {
                div { class: "block", Error { message: err } }
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    onclick: cancel,
                    button { class: "button is-light is-soft", "Cancel" }
                }
                div {
                    class: "control",
                    button {
                        class: "button is-primary",
                        class: if is_loading() { "is-loading" },
                        disabled: !name_value.valid() || draft.exercises.is_empty(),
                        onclick: save,
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
fn DraftExerciseRow(index: usize, exercise: domain::DraftExercise) -> Element {
    let edit = move |field: domain::DraftField, value: String| {
        if let Err(err) = SESSION.write().edit_draft_exercise(index, field, &value) {
            log::warn!("failed to edit exercise: {err}");
        }
    };

    rsx! {
        div {
            class: "box p-3 mb-2",
            div {
                class: "is-flex is-justify-content-space-between is-align-items-center mb-2",
                span { class: "has-text-weight-bold", "{exercise.name}" }
                Icon {
                    name: "times",
                    onclick: move |_| SESSION.write().remove_draft_exercise(index),
                }
            }
            div {
                class: "columns is-mobile",
                div {
                    class: "column",
                    InputField {
                        label: "Sets".to_string(),
                        inputmode: "numeric".to_string(),
                        placeholder: "3".to_string(),
                        value: exercise.sets.clone(),
                        has_changed: false,
                        has_text_right: true,
                        oninput: move |event: FormEvent| edit(domain::DraftField::Sets, event.value()),
                    }
                }
                div {
                    class: "column",
                    InputField {
                        label: "Reps".to_string(),
                        inputmode: "numeric".to_string(),
                        placeholder: "10".to_string(),
                        value: exercise.reps.clone(),
                        has_changed: false,
                        has_text_right: true,
                        oninput: move |event: FormEvent| edit(domain::DraftField::Reps, event.value()),
                    }
                }
            }
        }
    }
}
