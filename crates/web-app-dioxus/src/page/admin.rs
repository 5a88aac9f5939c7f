use dioxus::prelude::*;

use fitrack_storage::rest::API_BASE_URL;
use fitrack_web_app::log::Service;

use crate::{
    WEB_APP_SERVICE,
    component::element::{Color, Container, Error, Icon, Message, Title},
    notify,
};

#[component]
pub fn Admin() -> Element {
    rsx! {
        Server {}
        Log {}
    }
}

#[component]
fn Server() -> Element {
    rsx! {
        Container {
            Title { title: "Server" }
            p {
                class: "has-text-centered mb-5",
                span {
                    class: "icon-text",
                    Icon { name: "server" }
                    span { "{API_BASE_URL}" }
                }
            }
        }
    }
}

#[component]
fn Log() -> Element {
    let mut entries = use_signal(|| WEB_APP_SERVICE.read().get_log_entries());
    rsx! {
        Title { title: "Log" }
        Container {
            match &*entries.read() {
                Ok(entries) => rsx! {
                    for entry in entries {
                        Message {
                            color: match entry.level {
                                log::Level::Error => Color::Danger,
                                log::Level::Warn => Color::Warning,
                                log::Level::Info => Color::Primary,
                                log::Level::Debug => Color::Info,
                                log::Level::Trace => Color::Dark,
                            },
                            p { class: "is-size-7", "{entry.time}" }
                            p { "{entry.message}" }
                        }
                    }
                },
                Err(err) => rsx! {
                    Error { message: err.to_string() }
                },
            }
            div {
                class: "has-text-centered my-5",
                button {
                    class: "button is-danger is-light",
                    onclick: move |_| {
                        if let Err(err) = WEB_APP_SERVICE.read().clear_log_entries() {
                            notify(Color::Danger, "Error", format!("Failed to clear log: {err}"));
                        }
                        *entries.write() = WEB_APP_SERVICE.read().get_log_entries();
                    },
                    Icon { name: "trash" }
                    span { "Clear log" }
                }
            }
        }
    }
}
