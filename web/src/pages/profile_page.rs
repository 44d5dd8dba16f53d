#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::debug;

use career_compass::{
    profile::{ProfileData, ProfileView},
    user::Session,
};

use crate::{
    components::{
        bookmarked_careers_card::BookmarkedCareersCard, recent_tests_card::RecentTestsCard,
        sign_in_prompt::SignInPrompt, spinner::FullPageSpinner,
        user_profile_card::UserProfileCard,
    },
    services::{
        profile_service::{ProfileCommand, PROFILE},
        session_service::CURRENT_SESSION,
    },
};

#[component]
pub fn ProfilePage() -> Element {
    let profile_service = use_coroutine_handle::<ProfileCommand>();

    use_effect(move || {
        let session_key = CURRENT_SESSION.read().as_ref().map(Session::key);
        debug!("Refreshing profile for session {session_key:?}");
        profile_service.send(ProfileCommand::Refresh);
    });
    use_drop(|| PROFILE.write().reset());

    let session = CURRENT_SESSION.read().clone();
    let profile = PROFILE.read();
    let view = profile.view(session.as_ref());

    match view {
        ProfileView::SignedOut => rsx! { SignInPrompt {} },
        ProfileView::Loading => rsx! { FullPageSpinner { label: "Loading profile..." } },
        ProfileView::Ready { session, data } => rsx! {
            ProfileContent { session: session.clone(), profile: data.clone() }
        },
    }
}

#[component]
fn ProfileContent(session: ReadOnlySignal<Session>, profile: ReadOnlySignal<ProfileData>) -> Element {
    debug!("Rendering profile of {}", session.read().key());

    rsx! {
        div {
            class: "min-h-full bg-base-200 py-12 px-4 overflow-y-auto",

            div {
                class: "max-w-6xl mx-auto",

                UserProfileCard { session, profile }
                BookmarkedCareersCard { bookmarks: profile.read().bookmarks.clone() }
                RecentTestsCard { test_history: profile.read().test_history.clone() }
            }
        }
    }
}
