use dioxus::prelude::*;
use futures_util::StreamExt;
use log::{debug, error};
use wasm_bindgen::prelude::*;

use career_compass::{auth::CurrentSessionProvider, user::Session};

#[wasm_bindgen(module = "/js/auth.js")]
extern "C" {
    fn auth_current_session() -> JsValue;
    fn auth_on_session_changed(callback: &Closure<dyn FnMut(JsValue)>);
}

#[derive(Debug)]
pub enum SessionCommand {
    Changed(Option<Session>),
}

pub static CURRENT_SESSION: GlobalSignal<Option<Session>> =
    Signal::global(|| BrowserSessionProvider.current_session());

/// Reads the session straight from the host page authentication provider
pub struct BrowserSessionProvider;

impl CurrentSessionProvider for BrowserSessionProvider {
    fn current_session(&self) -> Option<Session> {
        decode_session(auth_current_session())
    }
}

/// Reads the session from a signal without subscribing to it
#[derive(Clone, Copy)]
pub struct SessionSignal(pub Signal<Option<Session>>);

impl CurrentSessionProvider for SessionSignal {
    fn current_session(&self) -> Option<Session> {
        (*self.0.peek()).clone()
    }
}

fn decode_session(value: JsValue) -> Option<Session> {
    match serde_wasm_bindgen::from_value::<Option<Session>>(value) {
        Ok(session) => session,
        Err(err) => {
            error!("Failed to decode the session from the authentication provider: {err}");
            None
        }
    }
}

pub async fn session_service(
    mut rx: UnboundedReceiver<SessionCommand>,
    mut current_session: Signal<Option<Session>>,
) {
    while let Some(msg) = rx.next().await {
        match msg {
            SessionCommand::Changed(session) => {
                if *current_session.peek() == session {
                    continue;
                }

                debug!(
                    "Session changed to {}",
                    session
                        .as_ref()
                        .map(|session| session.key().to_string())
                        .unwrap_or_else(|| "<signed out>".to_string())
                );
                current_session.set(session);
            }
        }
    }
}

/// Forwards authentication state changes of the host page to the session service
pub fn watch_session_changes(session_service: Coroutine<SessionCommand>) {
    let handler = Closure::wrap(Box::new(move |value: JsValue| {
        session_service.send(SessionCommand::Changed(decode_session(value)));
    }) as Box<dyn FnMut(JsValue)>);

    auth_on_session_changed(&handler);
    handler.forget();
}
