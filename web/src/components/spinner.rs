#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn Spinner(label: Option<String>) -> Element {
    let label = label.unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div {
            role: "status",

            span { class: "loading loading-spinner loading-lg text-primary" }
            span { class: "sr-only", "{label}" }
        }
    }
}

#[component]
pub fn FullPageSpinner(label: Option<String>) -> Element {
    rsx! {
        div {
            class: "min-h-[80vh] flex justify-center items-center",

            Spinner { label }
        }
    }
}
