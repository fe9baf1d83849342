use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use fitdash_domain::{self as domain, ScheduleService, TemplateService};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE, SESSION,
    component::{
        element::{Dialog, Error},
        form::{FieldValue, FieldValueState, InputField},
    },
    signal_changed_data,
};

#[component]
pub fn Scheduler() -> Element {
    let Some(template_id) = SESSION.read().scheduler else {
        return rsx! {};
    };

    rsx! { SchedulerDialog { template_id } }
}

#[component]
fn SchedulerDialog(template_id: domain::TemplateID) -> Element {
    let today = Local::now().date_naive();
    let mut date = use_signal(|| {
        FieldValue::<NaiveDate>::new(today.format("%Y-%m-%d").to_string(), Ok(today))
    });
    let mut save_error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);
    let templates = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_templates().await
    });

    let template_name = match &*templates.read() {
        Some(Ok(templates)) => templates
            .iter()
            .find(|t| t.id == template_id)
            .map(|t| t.name.clone()),
        Some(Err(_)) | None => None,
    };
    let date_value = date.read().clone();
    let error = save_error.read().clone();

    let close = move |_: MouseEvent| {
        SESSION.write().close_scheduler();
    };

    let save = move |_: MouseEvent| async move {
        let Ok(selected_date) = date.read().validated.clone() else {
            return;
        };
        *is_loading.write() = true;
        match DOMAIN_SERVICE
            .read()
            .schedule_workout(template_id, selected_date, Local::now().date_naive())
            .await
        {
            Ok(_) => {
                SESSION.write().close_scheduler();
                signal_changed_data();
            }
            Err(err) => *save_error.write() = Some(err.to_string()),
        }
        *is_loading.write() = false;
    };

    rsx! {
        Dialog {
            title: rsx! {
                if let Some(name) = template_name {
                    "Schedule {name}"
                } else {
                    "Schedule workout"
                }
            },
            close_event: close,
            InputField {
                label: "Date".to_string(),
                r#type: "date".to_string(),
                min: today.format("%Y-%m-%d").to_string(),
                value: date_value.input.clone(),
                error: date_value.error(),
                has_changed: date_value.changed(),
                oninput: move |event: FormEvent| {
                    let input = event.value();
                    let validated = DOMAIN_SERVICE
                        .read()
                        .validate_schedule_date(&input, Local::now().date_naive())
                        .map_err(|err| err.to_string());
                    date.write().update(input, validated);
                    *save_error.write() = None;
                },
            }
            if let Some(err) = error {
                div { class: "block", Error { message: err } }
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    onclick: close,
                    button { class: "button is-light is-soft", "Cancel" }
                }
                div {
                    class: "control",
                    button {
                        class: "button is-primary",
                        class: if is_loading() { "is-loading" },
                        disabled: !date_value.valid(),
                        onclick: save,
                        "Schedule"
                    }
                }
            }
        }
    }
}
