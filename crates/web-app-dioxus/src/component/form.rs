use dioxus::prelude::*;

#[component]
pub fn InputField(
    label: Option<String>,
    r#type: Option<String>,
    inputmode: Option<String>,
    min: Option<String>,
    placeholder: Option<String>,
    value: String,
    error: Option<String>,
    has_changed: bool,
    has_text_right: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let error = error.and_then(|error| if error.is_empty() { None } else { Some(error) });
    let has_error = error.is_some();
    rsx! {
        div {
            class: "field",
            if let Some(label) = label { label { class: "label", "{label}" } }
            div {
                class: "control",
                input {
                    class: "input",
                    class: if has_error { "is-danger" },
                    class: if has_changed { "is-info" },
                    class: if has_text_right.unwrap_or_default() { "has-text-right" },
                    r#type: if let Some(r#type) = r#type { r#type } else { "text" },
                    inputmode: if let Some(inputmode) = inputmode { inputmode },
                    min: if let Some(min) = min { min },
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
            if let Some(ref error) = error {
                p { class: "help is-danger", "{error}" }
            }
        }
    }
}

#[component]
pub fn SelectField(
    label: Option<String>,
    options: Vec<Element>,
    has_changed: bool,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            if let Some(label) = label { label { class: "label", "{label}" } }
            div {
                class: "control",
                div {
                    class: "select",
                    select {
                        class: if has_changed { "has-text-info" },
                        onchange,
                        for option in options {
                            {option}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SelectOption(text: String, value: String, selected: bool) -> Element {
    rsx! {
        option {
            selected,
            value,
            "{text}"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue<T> {
    pub input: String,
    pub validated: Result<T, String>,
    pub orig: String,
}

impl<T> Default for FieldValue<T> {
    fn default() -> Self {
        Self {
            input: String::new(),
            validated: Err(String::new()),
            orig: String::new(),
        }
    }
}

impl<T> FieldValue<T> {
    /// An unchanged field holding an already validated value.
    pub fn new(input: String, validated: Result<T, String>) -> Self {
        Self {
            orig: input.clone(),
            input,
            validated,
        }
    }

    pub fn update(&mut self, input: String, validated: Result<T, String>) {
        self.input = input;
        self.validated = validated;
    }

    pub fn error(&self) -> Option<String> {
        self.validated.as_ref().err().cloned()
    }
}

pub trait FieldValueState {
    fn valid(&self) -> bool;
    fn changed(&self) -> bool;
}

impl<T> FieldValueState for FieldValue<T> {
    fn valid(&self) -> bool {
        self.validated.is_ok()
    }

    fn changed(&self) -> bool {
        self.input.trim() != self.orig.trim()
    }
}
