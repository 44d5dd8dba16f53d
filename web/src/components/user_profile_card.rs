#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsBookmarkCheck, BsCalendar, BsClockHistory, BsEnvelope, BsPerson},
    Icon,
};

use career_compass::{profile::ProfileData, user::Session};

#[component]
pub fn UserProfileCard(session: ReadOnlySignal<Session>, profile: ReadOnlySignal<ProfileData>) -> Element {
    let session = session();
    let profile = profile();
    let user_name = session.display_name_or_default().to_string();
    let tests_completed = profile.tests_completed_label();
    let careers_bookmarked = profile.careers_bookmarked_label();

    rsx! {
        div {
            class: "card w-full bg-base-100 shadow-md p-8 mb-8",

            div {
                class: "flex flex-col md:flex-row items-center gap-8",

                div {
                    class: "relative",

                    if let Some(photo_url) = session.photo_url.as_ref() {
                        img {
                            class: "w-32 h-32 rounded-full object-cover border-4 border-primary/10 shadow-lg",
                            src: "{photo_url}",
                            alt: "Profile",
                        }
                    } else {
                        div {
                            class: "w-32 h-32 rounded-full bg-primary/20 flex items-center justify-center shadow-lg text-primary",
                            Icon { class: "w-16 h-16", icon: BsPerson }
                        }
                    }
                    div { class: "absolute bottom-2 right-2 w-6 h-6 bg-success border-4 border-base-100 rounded-full shadow" }
                }

                div {
                    class: "flex-1",

                    div {
                        class: "text-center md:text-left",

                        h1 { class: "text-3xl font-bold mb-2", "{user_name}" }

                        div {
                            class: "flex flex-col md:flex-row gap-4 items-center md:items-start text-base-content/70",

                            div {
                                class: "flex items-center gap-2",
                                Icon { class: "w-5 h-5", icon: BsEnvelope }
                                "{session.email}"
                            }

                            if let Some(joined_on) = session.joined_on_label() {
                                div {
                                    class: "flex items-center gap-2",
                                    Icon { class: "w-5 h-5", icon: BsCalendar }
                                    "{joined_on}"
                                }
                            }
                        }
                    }

                    div {
                        class: "mt-6 flex flex-wrap gap-3 justify-center md:justify-start",

                        span {
                            class: "badge badge-lg badge-secondary gap-2",
                            Icon { class: "w-4 h-4", icon: BsClockHistory }
                            "{tests_completed}"
                        }
                        span {
                            class: "badge badge-lg badge-success gap-2",
                            Icon { class: "w-4 h-4", icon: BsBookmarkCheck }
                            "{careers_bookmarked}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_compass::{
        bookmark::{Bookmark, BookmarkId},
        test_history::TestHistoryEntry,
    };
    use chrono::{TimeZone, Utc};
    use email_address::EmailAddress;
    use wasm_bindgen_test::*;

    use crate::components::render_to_html;

    fn profile_card((session, profile): (Session, ProfileData)) -> Element {
        rsx! { UserProfileCard { session, profile } }
    }

    fn session(display_name: Option<&str>) -> Session {
        Session {
            email: EmailAddress::new_unchecked("a@x.com"),
            display_name: display_name.map(str::to_string),
            photo_url: None,
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 7, 10, 30, 0).unwrap()),
            id_token: None,
        }
    }

    fn profile(bookmarks: usize, tests: usize) -> ProfileData {
        ProfileData {
            bookmarks: (0..bookmarks)
                .map(|i| Bookmark {
                    id: BookmarkId(i.to_string()),
                    name: format!("Career {i}"),
                    category: "Technology".to_string(),
                })
                .collect(),
            test_history: (0..tests)
                .map(|i| TestHistoryEntry {
                    name: format!("Test {i}"),
                    date: "2024-01-01".to_string(),
                    score: 50.0,
                })
                .collect(),
        }
    }

    #[wasm_bindgen_test]
    fn test_render_header_badges() {
        let html = render_to_html(profile_card, (session(Some("Ada")), profile(3, 2)));

        assert!(html.contains("Ada"));
        assert!(html.contains("a@x.com"));
        assert!(html.contains("Joined 3/7/2024"));
        assert!(html.contains("2 Tests Completed"));
        assert!(html.contains("3 Careers Bookmarked"));
    }

    #[wasm_bindgen_test]
    fn test_render_header_without_name_or_photo() {
        let mut anonymous = session(None);
        anonymous.created_at = None;

        let html = render_to_html(profile_card, (anonymous, profile(0, 0)));

        assert!(html.contains("Anonymous User"));
        assert!(html.contains("0 Tests Completed"));
        assert!(html.contains("0 Careers Bookmarked"));
        assert!(!html.contains("Joined"));
        assert!(!html.contains("<img"));
    }
}
