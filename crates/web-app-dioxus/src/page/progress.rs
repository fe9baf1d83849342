use dioxus::prelude::*;

use fitdash_domain::{self as domain, Property, catalog::PROGRESS};
use fitdash_web_app::{self as web_app, SettingsService, chart};

use crate::{
    SESSION, SETTINGS_CHANGED, WEB_APP_SERVICE,
    component::{
        element::{Block, Chart, ChartLabel, DataBox, NoData, Table, Title},
        form::{SelectField, SelectOption},
    },
};

#[component]
pub fn Progress() -> Element {
    let exercise_name = SESSION.read().progress_exercise.clone();
    let points = PROGRESS.get(&exercise_name);

    rsx! {
        Title { title: "Progress" }
        SelectField {
            options: PROGRESS
                .exercise_names()
                .map(|name| rsx! {
                    SelectOption {
                        text: name,
                        value: name,
                        selected: name == exercise_name,
                    }
                })
                .collect::<Vec<_>>(),
            has_changed: false,
            onchange: move |event: FormEvent| {
                SESSION.write().select_progress_exercise(&event.value());
            },
        }
        if points.is_empty() {
            NoData {}
        } else {
            div {
                class: "is-flex is-justify-content-center",
                for metric in domain::ProgressMetric::iter() {
                    if let Some(summary) = domain::summary(points, *metric) {
                        DataBox {
                            title: metric.name(),
                            "{summary.last:.0} "
                            span {
                                class: if summary.change > 0. { "has-text-success" },
                                class: if summary.change < 0. { "has-text-danger" },
                                "({summary.change:+.0})"
                            }
                        }
                    }
                }
            }
            ProgressChart { exercise_name: exercise_name.clone() }
            Table {
                head: vec![rsx! { "Date" }, rsx! { "Reps" }, rsx! { "Weight (lbs)" }],
                body: points
                    .iter()
                    .rev()
                    .map(|p| {
                        let weight = f32::from(p.weight);
                        vec![
                            rsx! { "{p.date}" },
                            rsx! { "{p.reps}" },
                            rsx! { "{weight:.1}" },
                        ]
                    })
                    .collect::<Vec<_>>(),
            }
        }
    }
}

#[component]
pub fn ProgressChart(exercise_name: String) -> Element {
    let settings = use_resource(|| async {
        let _ = SETTINGS_CHANGED.read();
        WEB_APP_SERVICE.read().get_settings().await
    });
    let settings = match &*settings.read() {
        Some(Ok(settings)) => *settings,
        Some(Err(_)) | None => web_app::Settings::default(),
    };
    let points = PROGRESS.get(&exercise_name);

    let mut labels = vec![ChartLabel {
        name: domain::ProgressMetric::Reps.name().to_string(),
        color: chart::COLOR_REPS,
    }];
    if settings.show_weight {
        labels.push(ChartLabel {
            name: domain::ProgressMetric::Weight.name().to_string(),
            color: chart::COLOR_WEIGHT,
        });
    }

    rsx! {
        Block {
            Chart {
                labels,
                chart: chart::plot_progress(points, settings.show_weight, settings.current_theme())
                    .map_err(|err| err.to_string()),
            }
        }
    }
}
