#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use log::error;

use fitdash_domain as domain;
use fitdash_storage as storage;
use fitdash_web_app as web_app;

use component::{
    element::{Color, Dialog},
    navbar::Navbar,
};
use page::{
    dashboard::Dashboard, exercise_detail::ExerciseDetail, progress::Progress,
    scheduler::Scheduler, workout_builder::WorkoutBuilder, workouts::Workouts,
};

mod component;
mod page;

const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.7.2/css/all.min.css";

static DOMAIN_SERVICE: GlobalSignal<domain::Service<storage::LocalStorage>> =
    Signal::global(|| domain::Service::new(storage::LocalStorage));
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::LocalStorage>> =
    Signal::global(|| web_app::Service::new(storage::LocalStorage));
static SESSION: GlobalSignal<web_app::SessionState> =
    Signal::global(web_app::SessionState::default);
static NOTIFICATIONS: GlobalSignal<Vec<String>> = Signal::global(Vec::new);
static DATA_CHANGED: GlobalSignal<usize> = Signal::global(|| 0);
static SETTINGS_CHANGED: GlobalSignal<usize> = Signal::global(|| 0);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(Arc::new(Mutex::new(storage::LocalStorage)));
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the dashboard cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    let tab = SESSION.read().tab;

    rsx! {
        document::Link { rel: "stylesheet", href: BULMA_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }

        div {
            class: "container is-max-desktop py-4",
            Navbar {}
            match tab {
                web_app::Tab::Dashboard => rsx! { Dashboard {} },
                web_app::Tab::Workouts => rsx! { Workouts {} },
                web_app::Tab::Progress => rsx! { Progress {} },
            }
            WorkoutBuilder {}
            Scheduler {}
            ExerciseDetail {}
            Notification {}
        }
    }
}

#[component]
fn Notification() -> Element {
    let notification = NOTIFICATIONS.read().last().cloned();

    rsx! {
        if let Some(message) = notification {
            Dialog {
                color: Color::Danger,
                title: rsx! { "Error" },
                close_event: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                div {
                    class: "block",
                    "{message}"
                }
                div {
                    class: "field is-grouped is-grouped-centered",
                    div {
                        class: "control",
                        button {
                            class: "button is-danger",
                            onclick: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

fn signal_changed_data() {
    *DATA_CHANGED.write() += 1;
}

fn signal_changed_settings() {
    *SETTINGS_CHANGED.write() += 1;
}
