use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use log::error;
use url::Url;

use career_compass::{
    api::HttpProfileApi,
    profile::{ProfileLoader, ProfileStore},
    user::Session,
};

use crate::services::session_service::SessionSignal;

#[derive(Debug)]
pub enum ProfileCommand {
    Refresh,
}

pub static PROFILE: GlobalSignal<ProfileStore> = Signal::global(ProfileStore::new);

pub async fn profile_service(
    mut rx: UnboundedReceiver<ProfileCommand>,
    api_base_url: Url,
    mut profile: Signal<ProfileStore>,
    session: Signal<Option<Session>>,
) {
    let api = match HttpProfileApi::try_new(api_base_url) {
        Ok(api) => api,
        Err(err) => {
            error!("Unable to start the profile service: {err}");
            return;
        }
    };
    let loader = Rc::new(ProfileLoader::new(SessionSignal(session), api));

    while let Some(msg) = rx.next().await {
        match msg {
            ProfileCommand::Refresh => {
                let Some(pending) = loader.prepare(&mut profile.write()) else {
                    continue;
                };

                // Stale results are rejected by the store
                let loader = loader.clone();
                spawn(async move {
                    let (ticket, state) = loader.run(pending).await;
                    profile.write().complete(ticket, state);
                });
            }
        }
    }
}
