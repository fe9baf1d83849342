use dioxus::prelude::*;

use fitdash_domain::{self as domain, TemplateService};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE, NOTIFICATIONS, SESSION,
    component::{
        element::{
            DeleteConfirmationDialog, ErrorMessage, Icon, IconText, LoadingPage, NoData, SearchBox,
        },
        form::{SelectField, SelectOption},
    },
    signal_changed_data,
};

#[component]
pub fn Workouts() -> Element {
    let templates = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_templates().await
    });
    let mut delete_dialog = use_signal(|| None::<domain::WorkoutTemplate>);

    match &*templates.read() {
        Some(Ok(templates)) => {
            let visible_templates = SESSION
                .read()
                .visible_templates(templates)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            let pending_deletion = delete_dialog.read().clone();
            rsx! {
                SearchBar {}
                if visible_templates.is_empty() {
                    NoData { text: "No matching workouts".to_string() }
                }
                div {
                    class: "columns is-multiline px-3",
                    for template in visible_templates {
                        div {
                            key: "{template.id}",
                            class: "column is-half",
                            TemplateCard {
                                template: template.clone(),
                                is_custom: !DOMAIN_SERVICE.read().catalog().contains_template(template.id),
                                delete_event: move |template| *delete_dialog.write() = Some(template),
                            }
                        }
                    }
                }
                if let Some(template) = pending_deletion {
                    DeleteConfirmationDialog {
                        element_type: "workout",
                        element_name: rsx! { "{template.name}" },
                        delete_event: move |_| {
                            async move {
                                match DOMAIN_SERVICE.read().delete_template(template.id).await {
                                    Ok(_) => signal_changed_data(),
                                    Err(err) => NOTIFICATIONS
                                        .write()
                                        .push(format!("Failed to delete workout: {err}")),
                                }
                                *delete_dialog.write() = None;
                            }
                        },
                        cancel_event: move |_| *delete_dialog.write() = None,
                    }
                }
            }
        }
        Some(Err(err)) => rsx! { ErrorMessage { message: err.to_string() } },
        None => rsx! { LoadingPage {} },
    }
}

#[component]
fn SearchBar() -> Element {
    let filter = SESSION.read().filter.clone();

    rsx! {
        div {
            class: "field is-grouped is-grouped-multiline px-4",
            SearchBox {
                search_term: filter.name.clone(),
                placeholder: "Search workouts...".to_string(),
                oninput: move |event: FormEvent| SESSION.write().set_search_term(&event.value()),
            }
            div {
                class: "control",
                SelectField {
                    options: domain::DifficultyFilter::options()
                        .into_iter()
                        .map(|option| rsx! {
                            SelectOption {
                                text: match option {
                                    domain::DifficultyFilter::All => "All Difficulties".to_string(),
                                    domain::DifficultyFilter::Only(difficulty) => difficulty.to_string(),
                                },
                                value: option.label(),
                                selected: option == filter.difficulty,
                            }
                        })
                        .collect::<Vec<_>>(),
                    has_changed: filter.difficulty != domain::DifficultyFilter::All,
                    onchange: move |event: FormEvent| {
                        let _ = SESSION.write().set_difficulty_filter(&event.value());
                    },
                }
            }
            div {
                class: "control",
                button {
                    class: "button is-link",
                    onclick: move |_| SESSION.write().open_workout_builder(),
                    Icon { name: "plus" }
                    span { "Create Workout" }
                }
            }
        }
    }
}

#[component]
fn TemplateCard(
    template: domain::WorkoutTemplate,
    is_custom: bool,
    delete_event: EventHandler<domain::WorkoutTemplate>,
) -> Element {
    let catalog = DOMAIN_SERVICE.read().catalog();
    let template_id = template.id;
    let template_to_delete = template.clone();

    rsx! {
        div {
            class: "card",
            header {
                class: "card-header",
                p { class: "card-header-title", "{template.name}" }
                span {
                    class: "card-header-icon",
                    span { class: "tag is-link is-light", "{template.difficulty}" }
                }
            }
            div {
                class: "card-content",
                div {
                    class: "block has-text-grey",
                    IconText { icon: "clock", text: template.duration.clone() }
                }
                for exercise in template.exercises.clone() {
                    a {
                        class: "box is-flex is-justify-content-space-between p-2 mb-2",
                        onclick: move |_| {
                            SESSION.write().open_exercise_detail(&catalog, &exercise.exercise_name);
                        },
                        span { "{exercise.exercise_name}" }
                        span {
                            class: "is-size-7 has-text-grey",
                            "{exercise.sets} sets × {exercise.reps} reps"
                        }
                    }
                }
            }
            footer {
                class: "card-footer",
                a {
                    class: "card-footer-item",
                    onclick: move |_| SESSION.write().open_scheduler(template_id),
                    IconText { icon: "calendar", text: "Schedule" }
                }
                if is_custom {
                    a {
                        class: "card-footer-item has-text-danger",
                        onclick: move |_| delete_event.call(template_to_delete.clone()),
                        IconText { icon: "trash", text: "Delete" }
                    }
                }
            }
        }
    }
}
