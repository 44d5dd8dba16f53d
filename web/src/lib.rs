#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::{debug, error};

use config::{get_app_config, AppConfig};
use route::Route;
use services::{
    profile_service::{profile_service, PROFILE},
    session_service::{session_service, watch_session_changes, CURRENT_SESSION},
};

mod components;
mod config;
mod pages;
mod route;
mod services;
mod utils;

#[component]
pub fn App() -> Element {
    let session_service_handle =
        use_coroutine(move |rx| session_service(rx, CURRENT_SESSION.signal()));
    use_hook(move || watch_session_changes(session_service_handle));

    let app_config = use_hook(|| {
        get_app_config().map_err(|err| {
            error!("Failed to load the application configuration: {err:?}");
            err.to_string()
        })
    });

    debug!("Rendering app");
    match app_config {
        Ok(app_config) => rsx! { ConfiguredApp { app_config } },
        Err(error) => rsx! {
            div {
                class: "h-full flex justify-center items-center text-error",
                "Unable to start Career Compass: {error}"
            }
        },
    }
}

#[component]
fn ConfiguredApp(app_config: AppConfig) -> Element {
    let api_base_url = app_config.api_base_url.clone();
    let _profile_service_handle = use_coroutine(move |rx| {
        profile_service(
            rx,
            api_base_url.clone(),
            PROFILE.signal(),
            CURRENT_SESSION.signal(),
        )
    });

    rsx! {
        div {
            class: "h-full flex flex-col text-sm",

            Router::<Route> {}
        }
    }
}
