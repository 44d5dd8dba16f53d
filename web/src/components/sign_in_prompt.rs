#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{icons::bs_icons::BsPerson, Icon};

use career_compass::navigation::ProfileLink;

#[component]
pub fn SignInPrompt() -> Element {
    rsx! {
        div {
            class: "min-h-[80vh] flex items-center justify-center bg-base-200",

            div {
                class: "text-center",

                div {
                    class: "flex justify-center mb-4 text-base-content/40",
                    Icon { class: "w-16 h-16", icon: BsPerson }
                }
                h2 { class: "text-2xl font-bold mb-2", "Sign in Required" }
                p { class: "text-base-content/70 mb-4", "Please sign in to view your profile" }
                a {
                    class: "btn btn-primary",
                    href: "{ProfileLink::SignIn}",
                    "Sign In"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    use crate::components::render_to_html;

    fn sign_in_prompt(_: ()) -> Element {
        rsx! { SignInPrompt {} }
    }

    #[wasm_bindgen_test]
    fn test_render_sign_in_prompt() {
        let html = render_to_html(sign_in_prompt, ());

        assert!(html.contains("Sign in Required"));
        assert!(html.contains("Please sign in to view your profile"));
        assert!(html.contains(r#"href="/auth""#));
    }
}
