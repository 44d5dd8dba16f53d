#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div {
            class: "min-h-[80vh] flex flex-col gap-4 justify-center items-center",

            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "text-base-content/70", "Nothing lives at /{path}" }
            Link { class: "btn btn-primary", to: Route::ProfilePage {}, "Back to profile" }
        }
    }
}
