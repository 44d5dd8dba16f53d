#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsAward, BsClipboardCheck, BsClockHistory},
    Icon,
};

use career_compass::{navigation::ProfileLink, test_history::TestHistoryEntry};

use crate::components::{EmptyState, SectionCard};

#[component]
pub fn RecentTestsCard(test_history: ReadOnlySignal<Vec<TestHistoryEntry>>) -> Element {
    rsx! {
        SectionCard {
            title: "Recent Tests",
            icon: rsx! { Icon { class: "w-6 h-6 text-secondary", icon: BsClockHistory } },
            class: "mt-8",

            if test_history.read().is_empty() {
                EmptyState {
                    icon: rsx! { Icon { class: "w-12 h-12", icon: BsClipboardCheck } },
                    message: "No tests taken yet",
                    link: ProfileLink::TakeTest,
                    link_label: "Take Personality Test",
                }
            } else {
                div {
                    class: "space-y-4",

                    // Entries carry no identifier
                    for (i, entry) in test_history().into_iter().enumerate() {
                        TestHistoryCard { key: "{i}", entry }
                    }
                }
            }
        }
    }
}

#[component]
fn TestHistoryCard(entry: ReadOnlySignal<TestHistoryEntry>) -> Element {
    let entry = entry();
    let completed_on = entry.completed_on_label();
    let score = entry.score_label();

    rsx! {
        div {
            class: "flex items-center justify-between p-6 bg-base-200 rounded-lg",

            div {
                h3 { class: "font-semibold text-lg", "{entry.name}" }
                p { class: "text-sm text-base-content/70", "{completed_on}" }
            }

            div {
                class: "flex items-center gap-2",
                Icon { class: "w-5 h-5 text-warning", icon: BsAward }
                span { class: "font-bold text-lg", "{score}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::*;

    use crate::components::render_to_html;

    fn recent_tests_card(test_history: Vec<TestHistoryEntry>) -> Element {
        rsx! { RecentTestsCard { test_history } }
    }

    fn entry(name: &str, date: &str, score: f64) -> TestHistoryEntry {
        TestHistoryEntry {
            name: name.to_string(),
            date: date.to_string(),
            score,
        }
    }

    #[wasm_bindgen_test]
    fn test_render_one_card_per_entry() {
        let html = render_to_html(
            recent_tests_card,
            vec![
                entry("Big Five", "2024-01-01", 82.0),
                entry("Holland Code", "2024-02-15T09:00:00Z", 64.5),
            ],
        );

        assert_eq!(html.matches("Completed on").count(), 2);
        assert!(html.contains("Big Five"));
        assert!(html.contains("Completed on 1/1/2024"));
        assert!(html.contains("Score: 82%"));
        assert!(html.contains("Holland Code"));
        assert!(html.contains("Completed on 2/15/2024"));
        assert!(html.contains("Score: 64.5%"));
        assert!(!html.contains("href="));
    }

    #[wasm_bindgen_test]
    fn test_render_empty_test_history() {
        let html = render_to_html(recent_tests_card, vec![]);

        assert_eq!(html.matches("Completed on").count(), 0);
        assert!(html.contains("No tests taken yet"));
        assert!(html.contains("Take Personality Test"));
        assert!(html.contains(r#"href="/test""#));
    }
}
