use dioxus::prelude::*;

use crate::{
    DOMAIN_SERVICE, SESSION,
    component::element::{Color, Dialog, IconText},
};

#[component]
pub fn ExerciseDetail() -> Element {
    let catalog = DOMAIN_SERVICE.read().catalog();
    let Some(exercise) = SESSION.read().selected_exercise(&catalog) else {
        return rsx! {};
    };

    rsx! {
        Dialog {
            color: Color::Info,
            title: rsx! { "{exercise.name}" },
            close_event: move |_| SESSION.write().close_exercise_detail(),
            div {
                class: "tags",
                span { class: "tag is-info is-light", "{exercise.muscle_group}" }
                span { class: "tag is-light", "{exercise.equipment}" }
                span { class: "tag is-link is-light", "{exercise.difficulty}" }
            }
            if exercise.instructions.is_empty() {
                p { class: "block has-text-grey", "No instructions available" }
            } else {
                h2 { class: "subtitle is-6 mb-2", IconText { icon: "list-ol", text: "Instructions" } }
                ol {
                    class: "ml-5 mb-5",
                    for instruction in exercise.instructions {
                        li { "{instruction}" }
                    }
                }
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    button {
                        class: "button is-light is-soft",
                        onclick: move |_| SESSION.write().close_exercise_detail(),
                        "Close"
                    }
                }
            }
        }
    }
}
