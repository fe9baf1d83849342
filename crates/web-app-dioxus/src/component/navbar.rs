use dioxus::prelude::*;
use strum::IntoEnumIterator;

use fitdash_web_app::{self as web_app, SettingsService, log::Service as _};

use crate::{
    NOTIFICATIONS, SESSION, SETTINGS_CHANGED, WEB_APP_SERVICE,
    component::element::{Color, Dialog, Error, ErrorMessage, Icon, LoadingPage, NoData},
    signal_changed_settings,
};

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let mut settings_visible = use_signal(|| false);
    let settings = use_resource(|| async {
        let _ = SETTINGS_CHANGED.read();
        WEB_APP_SERVICE.read().get_settings().await
    });
    let current_tab = SESSION.read().tab;

    rsx! {
        nav {
            class: "navbar is-primary has-shadow has-text-weight-bold mb-5",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    div {
                        class: "navbar-item is-size-5",
                        Icon { name: "dumbbell", px: 2 }
                        "Fitdash"
                    }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *settings_visible.write() = true;
                                *menu_visible.write() = false;
                            },
                            Icon { name: "gear", px: 5 }
                            "Settings"
                        }
                    }
                }
            }
        }

        div {
            class: "tabs is-centered",
            ul {
                for tab in web_app::Tab::iter() {
                    li {
                        class: if tab == current_tab { "is-active" },
                        a {
                            onclick: move |_| SESSION.write().select_tab(tab),
                            "{tab}"
                        }
                    }
                }
            }
        }

        if *settings_visible.read() {
            Settings { settings, settings_visible }
        }
    }
}

async fn save_settings(settings: web_app::Settings) {
    match WEB_APP_SERVICE.read().set_settings(settings).await {
        Ok(()) => signal_changed_settings(),
        Err(err) => NOTIFICATIONS
            .write()
            .push(format!("Failed to save settings: {err}")),
    }
}

#[component]
fn Settings(
    settings: Resource<Result<web_app::Settings, String>>,
    settings_visible: Signal<bool>,
) -> Element {
    match settings.read().clone() {
        Some(Ok(settings)) => rsx! {
            Dialog {
                color: Color::Primary,
                title: rsx! { "Settings" },
                close_event: move |_| *settings_visible.write() = false,
                p {
                    class: "mb-5",
                    h1 { class: "subtitle", "Theme" }
                    div {
                        class: "field has-addons",
                        for (theme, icon) in [
                            (web_app::Theme::Light, "sun"),
                            (web_app::Theme::Dark, "moon"),
                            (web_app::Theme::System, "desktop"),
                        ] {
                            p {
                                class: "control",
                                button {
                                    class: "button",
                                    class: if settings.theme == theme { "is-link" },
                                    onclick: move |_| {
                                        let mut settings = settings;
                                        settings.theme = theme;
                                        save_settings(settings)
                                    },
                                    Icon { name: icon, is_small: true }
                                    span { "{theme}" }
                                }
                            }
                        }
                    }
                }
                p {
                    class: "mb-5",
                    onclick: move |_| {
                        let mut settings = settings;
                        settings.show_weight = !settings.show_weight;
                        save_settings(settings)
                    },
                    h1 { class: "subtitle", "Weight in progress charts" }
                    if settings.show_weight {
                        button { class: "button is-link", "Shown" }
                    } else {
                        button { class: "button", "Hidden" }
                    }
                }
                h1 { class: "subtitle", "Log" }
                Log {}
            }
        },
        Some(Err(err)) => rsx! {
            ErrorMessage { message: "Failed to get settings: {err}" }
        },
        None => rsx! { LoadingPage {} },
    }
}

#[component]
fn Log() -> Element {
    match WEB_APP_SERVICE.read().get_log_entries() {
        Ok(entries) if entries.is_empty() => rsx! { NoData { text: "No log entries".to_string() } },
        Ok(entries) => rsx! {
            div {
                style: "max-height: 40vh; overflow-y: auto",
                for entry in entries {
                    div {
                        class: "mb-2",
                        p {
                            class: format!(
                                "is-size-7 {}",
                                match entry.level {
                                    log::Level::Error => "has-text-danger",
                                    log::Level::Warn => "has-text-warning",
                                    log::Level::Info | log::Level::Debug | log::Level::Trace => "has-text-grey",
                                }
                            ),
                            "{entry.time} {entry.level}"
                        }
                        p { class: "is-size-7", "{entry.message}" }
                    }
                }
            }
        },
        Err(err) => rsx! { Error { message: err.to_string() } },
    }
}
