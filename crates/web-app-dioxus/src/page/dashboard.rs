use chrono::Local;
use dioxus::prelude::*;

use fitdash_domain::{self as domain, ScheduleService, TemplateService};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE, NOTIFICATIONS, SESSION,
    component::element::{
        Block, DataBox, DeleteConfirmationDialog, ErrorMessage, IconText, LoadingPage, NoData,
        Title,
    },
    page::progress::ProgressChart,
    signal_changed_data,
};

#[component]
pub fn Dashboard() -> Element {
    let templates = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_templates().await
    });
    let schedule = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_schedule().await
    });
    let exercise_name = SESSION.read().progress_exercise.clone();

    match (&*templates.read(), &*schedule.read()) {
        (Some(Ok(templates)), Some(Ok(schedule))) => {
            let today = Local::now().date_naive();
            let upcoming = domain::upcoming(schedule, today);
            let num_custom = templates
                .iter()
                .filter(|t| !DOMAIN_SERVICE.read().catalog().contains_template(t.id))
                .count();
            rsx! {
                div {
                    class: "is-flex is-justify-content-center",
                    DataBox { title: "Workouts", "{templates.len()}" }
                    DataBox { title: "Custom", "{num_custom}" }
                    DataBox { title: "Scheduled", "{upcoming.len()}" }
                }
                Title { title: "{exercise_name} progress" }
                ProgressChart { exercise_name: exercise_name.clone() }
                Title { title: "Upcoming workouts" }
                UpcomingWorkouts {
                    upcoming: upcoming.into_iter().cloned().collect::<Vec<_>>(),
                    templates: templates.clone(),
                }
            }
        }
        (Some(Err(err)), _) => rsx! { ErrorMessage { message: err.to_string() } },
        (_, Some(Err(err))) => rsx! { ErrorMessage { message: err.to_string() } },
        (None, _) | (_, None) => rsx! { LoadingPage {} },
    }
}

#[component]
fn UpcomingWorkouts(
    upcoming: Vec<domain::ScheduledWorkout>,
    templates: Vec<domain::WorkoutTemplate>,
) -> Element {
    let mut unschedule = use_signal(|| None::<domain::ScheduledWorkout>);

    if upcoming.is_empty() {
        return rsx! { NoData { text: "No workouts scheduled".to_string() } };
    }

    let pending = unschedule.read().clone();

    rsx! {
        Block {
            class: "px-3".to_string(),
            for scheduled_workout in upcoming {
                div {
                    class: "box is-flex is-justify-content-space-between is-align-items-center p-3 mb-2",
                    IconText {
                        icon: "calendar",
                        text: format!(
                            "{}  {}",
                            scheduled_workout.date.format("%a, %b %d"),
                            templates
                                .iter()
                                .find(|t| t.id == scheduled_workout.template_id)
                                .map_or("Unknown workout", |t| t.name.as_str())
                        ),
                    }
                    a {
                        class: "has-text-grey",
                        onclick: {
                            let scheduled_workout = scheduled_workout.clone();
                            move |_| *unschedule.write() = Some(scheduled_workout.clone())
                        },
                        IconText { icon: "times", text: "" }
                    }
                }
            }
        }
        if let Some(scheduled_workout) = pending {
            DeleteConfirmationDialog {
                element_type: "scheduled workout",
                element_name: rsx! { "on {scheduled_workout.date}" },
                delete_event: move |_| {
                    async move {
                        match DOMAIN_SERVICE
                            .read()
                            .unschedule_workout(scheduled_workout.id)
                            .await
                        {
                            Ok(_) => signal_changed_data(),
                            Err(err) => NOTIFICATIONS
                                .write()
                                .push(format!("Failed to remove scheduled workout: {err}")),
                        }
                        *unschedule.write() = None;
                    }
                },
                cancel_event: move |_| *unschedule.write() = None,
            }
        }
    }
}
