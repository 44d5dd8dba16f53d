#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsBookmarkCheck, BsBookmarkStar, BsChevronRight},
    Icon,
};

use career_compass::{bookmark::Bookmark, navigation::ProfileLink};

use crate::components::{EmptyState, SectionCard};

#[component]
pub fn BookmarkedCareersCard(bookmarks: ReadOnlySignal<Vec<Bookmark>>) -> Element {
    rsx! {
        SectionCard {
            title: "Bookmarked Careers",
            icon: rsx! { Icon { class: "w-6 h-6 text-success", icon: BsBookmarkCheck } },
            header_action: rsx! {
                a {
                    class: "link link-primary flex items-center gap-1",
                    href: "{ProfileLink::Explore}",
                    "View All"
                    Icon { class: "w-4 h-4", icon: BsChevronRight }
                }
            },

            if bookmarks.read().is_empty() {
                EmptyState {
                    icon: rsx! { Icon { class: "w-12 h-12", icon: BsBookmarkStar } },
                    message: "No bookmarked careers yet",
                    link: ProfileLink::Explore,
                    link_label: "Explore Careers",
                }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",

                    for (i, bookmark) in bookmarks().into_iter().enumerate() {
                        BookmarkCard { key: "{i}-{bookmark.id}", bookmark }
                    }
                }
            }
        }
    }
}

#[component]
fn BookmarkCard(bookmark: ReadOnlySignal<Bookmark>) -> Element {
    let bookmark = bookmark();
    let details_link = bookmark.details_link();

    rsx! {
        div {
            class: "p-6 bg-base-200 rounded-lg hover:shadow-md transition-shadow",

            div {
                class: "flex justify-between items-start",

                div {
                    h3 { class: "text-xl font-semibold mb-2", "{bookmark.name}" }
                    p { class: "text-base-content/70", "{bookmark.category}" }
                }
                Icon { class: "w-5 h-5 text-success", icon: BsBookmarkCheck }
            }

            a {
                class: "mt-4 link link-primary flex items-center gap-1",
                href: "{details_link}",
                "View Details"
                Icon { class: "w-4 h-4", icon: BsChevronRight }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_compass::bookmark::BookmarkId;
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::*;

    use crate::components::render_to_html;

    fn bookmarks_card(bookmarks: Vec<Bookmark>) -> Element {
        rsx! { BookmarkedCareersCard { bookmarks } }
    }

    fn bookmark(id: &str, name: &str, category: &str) -> Bookmark {
        Bookmark {
            id: BookmarkId(id.to_string()),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_render_one_card_per_bookmark() {
        let html = render_to_html(
            bookmarks_card,
            vec![
                bookmark("1", "Doctor", "Medicine"),
                bookmark("2", "Data Scientist", "Technology"),
                bookmark("", "Pilot", ""),
            ],
        );

        assert_eq!(html.matches("View Details").count(), 3);
        assert!(html.contains("Bookmarked Careers"));
        assert!(html.contains("Medicine"));
        assert!(html.contains("Technology"));
        assert!(html.contains(r#"href="/career-details/Doctor""#));
        assert!(html.contains(r#"href="/career-details/Data%20Scientist""#));
        assert!(html.contains(r#"href="/career-details/Pilot""#));
        assert!(!html.contains("No bookmarked careers yet"));
    }

    #[wasm_bindgen_test]
    fn test_render_empty_bookmarks() {
        let html = render_to_html(bookmarks_card, vec![]);

        assert_eq!(html.matches("View Details").count(), 0);
        assert!(html.contains("No bookmarked careers yet"));
        assert!(html.contains("Explore Careers"));
        // "View All" and the call-to-action both lead to the explore page
        assert_eq!(html.matches(r#"href="/explore""#).count(), 2);
    }
}
