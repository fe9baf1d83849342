use dioxus::prelude::*;
use strum::Display;

use fitdash_web_app::chart;

#[derive(Display, Clone, Copy, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Primary,
    Info,
    Danger,
}

#[component]
pub fn Block(children: Element, class: Option<String>) -> Element {
    rsx! {
        div {
            class: "block",
            class: if let Some(class) = &class { "{class}" },
            {children}
        }
    }
}

#[component]
pub fn DataBox(children: Element, title: String) -> Element {
    rsx! {
        div {
            class: "box has-text-centered mx-2 p-3",
            p {
                class: "is-size-6",
                {title}
            }
            p {
                class: "is-size-5",
                {children}
            }
        }
    }
}

#[component]
pub fn LoadingPage() -> Element {
    rsx! {
        div {
            class: "is-size-2 has-text-centered m-6",
            i { class: "fas fa-spinner fa-pulse" }
        }
    }
}

#[component]
pub fn Error(message: String) -> Element {
    rsx! {
        IconText { icon: "triangle-exclamation", text: message, color: Color::Danger }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn NoData(text: Option<String>) -> Element {
    rsx! {
        div {
            class: "block is-size-7 has-text-centered has-text-grey-light mb-6",
            {text.unwrap_or_else(|| "No data".to_string())}
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    px: Option<u8>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(
    icon: String,
    text: String,
    color: Option<Color>,
) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            Icon { name: icon }
            span { {text} }
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

#[component]
pub fn DeleteConfirmationDialog(
    element_type: String,
    element_name: Element,
    delete_event: EventHandler<MouseEvent>,
    cancel_event: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        Dialog {
            title: rsx! {
                span {
                    "Delete the {element_type} "
                    {element_name}
                    "?"
                }
            },
            close_event: move |evt| cancel_event.call(evt),
            color: Color::Danger,
            div {
                class: "block",
                "This cannot be undone."
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    onclick: move |evt| cancel_event.call(evt),
                    button {
                        class: "button is-light is-soft",
                        "Keep"
                    }
                }
                div {
                    class: "control",
                    onclick: move |evt| delete_event.call(evt),
                    button {
                        class: "button is-danger",
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Title(title: String, class: Option<String>) -> Element {
    rsx! {
        div {
            class: "block has-text-centered",
            h1 {
                class: "title is-5",
                class: if let Some(c) = &class { "{c}" },
                "{title}"
            }
        }
    }
}

#[component]
pub fn Table(head: Option<Vec<Element>>, body: Vec<Vec<Element>>) -> Element {
    rsx! {
        div {
            class: "table-container mt-4",
            table {
                class: "table is-fullwidth is-hoverable",
                if let Some(head) = head {
                    thead {
                        tr {
                            for element in head {
                                th {
                                    {element}
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in body {
                        tr {
                            for element in row {
                                td {
                                    {element}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Chart(labels: Vec<ChartLabel>, chart: Result<Option<String>, String>) -> Element {
    match chart {
        Ok(None) => rsx! { NoData {} },
        Ok(Some(value)) => rsx! {
            div {
                class: "container has-text-centered",
                h1 {
                    class: "is-size-6 has-text-weight-bold",
                    for label in labels {
                        span {
                            class: "icon-text mx-1",
                            span {
                                class: "icon",
                                style: "color:{chart::color_hex(label.color)}",
                                i { class: "fas fa-square" }
                            }
                            span { "{label.name}" }
                        }
                    }
                }
                div {
                    dangerous_inner_html: value,
                }
            }
        },
        Err(err) => rsx! { Error { message: err } },
    }
}

#[derive(Clone, PartialEq)]
pub struct ChartLabel {
    pub name: String,
    pub color: usize,
}

#[component]
pub fn SearchBox(
    search_term: String,
    placeholder: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "control has-icons-left is-flex-grow-1",
            span {
                class: "icon is-left",
                i { class: "fas fa-search" }
            }
            input {
                class: "input",
                r#type: "text",
                placeholder: if let Some(placeholder) = placeholder { placeholder },
                value: search_term,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
