#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{icons::bs_icons::BsChevronRight, Icon};

use career_compass::navigation::ProfileLink;

pub mod bookmarked_careers_card;
pub mod recent_tests_card;
pub mod sign_in_prompt;
pub mod spinner;
pub mod user_profile_card;

#[component]
fn SectionCard(
    title: String,
    icon: Element,
    header_action: Option<Element>,
    class: Option<String>,
    children: Element,
) -> Element {
    let card_style = class.unwrap_or_default();

    rsx! {
        div {
            class: "card w-full bg-base-100 shadow-md p-8 {card_style}",

            div {
                class: "flex items-center justify-between mb-6",

                h2 {
                    class: "text-2xl font-bold flex items-center gap-3",
                    { icon }
                    "{title}"
                }

                if let Some(header_action) = header_action {
                    { header_action }
                }
            }

            { children }
        }
    }
}

/// Call-to-action displayed in place of an empty list
#[component]
fn EmptyState(icon: Element, message: String, link: ProfileLink, link_label: String) -> Element {
    rsx! {
        div {
            class: "text-center py-12 bg-base-200 rounded-lg",

            div {
                class: "flex justify-center mb-4 text-base-content/30",
                { icon }
            }
            p { class: "text-base-content/70 mb-4", "{message}" }
            a {
                class: "btn btn-primary",
                href: "{link}",
                "{link_label}"
                Icon { class: "w-4 h-4", icon: BsChevronRight }
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn render_to_html<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
