//! Loading and rendering decisions for the profile view.
//!
//! The view is driven by two inputs: the current [`Session`] (owned by the
//! authentication provider) and a [`ProfileStore`]. Each change of session
//! identity starts a new load identified by a [`LoadTicket`]; results of
//! superseded loads are discarded when they complete.

use futures_util::join;
use log::{debug, error};

use crate::{
    api::ProfileApi,
    auth::CurrentSessionProvider,
    bookmark::Bookmark,
    test_history::TestHistoryEntry,
    user::{Session, SessionKey},
};

#[derive(Debug, PartialEq, Clone, Default)]
pub struct ProfileData {
    pub bookmarks: Vec<Bookmark>,
    pub test_history: Vec<TestHistoryEntry>,
}

impl ProfileData {
    pub fn tests_completed_label(&self) -> String {
        format!("{} Tests Completed", self.test_history.len())
    }

    pub fn careers_bookmarked_label(&self) -> String {
        format!("{} Careers Bookmarked", self.bookmarks.len())
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub enum ProfileLoadState {
    #[default]
    Idle,
    Loading,
    Loaded(ProfileData),
    /// At least one fetch failed; `partial` holds whatever was fetched successfully
    Failed { partial: ProfileData, error: String },
}

impl ProfileLoadState {
    pub fn data(&self) -> Option<&ProfileData> {
        match self {
            ProfileLoadState::Loaded(data) | ProfileLoadState::Failed { partial: data, .. } => {
                Some(data)
            }
            ProfileLoadState::Idle | ProfileLoadState::Loading => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LoadTicket {
    generation: u64,
}

/// What the profile view should display
#[derive(Debug, PartialEq)]
pub enum ProfileView<'a> {
    SignedOut,
    Loading,
    Ready {
        session: &'a Session,
        data: &'a ProfileData,
    },
}

#[derive(Debug, Default)]
pub struct ProfileStore {
    generation: u64,
    session_key: Option<SessionKey>,
    state: ProfileLoadState,
}

impl ProfileStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn state(&self) -> &ProfileLoadState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Aligns the store with the given session.
    ///
    /// Returns a ticket when a new load must be started, that is when the
    /// session identity differs from the one the store was loaded for.
    pub fn sync_session(&mut self, session: Option<&Session>) -> Option<LoadTicket> {
        let Some(session) = session else {
            if self.session_key.take().is_some() {
                debug!("Session closed, resetting profile");
                self.generation += 1;
            }
            self.state = ProfileLoadState::Idle;
            return None;
        };

        let session_key = session.key();
        if self.session_key.as_ref() == Some(&session_key)
            && self.state != ProfileLoadState::Idle
        {
            return None;
        }

        self.generation += 1;
        debug!(
            "Loading profile for {session_key} (generation {})",
            self.generation
        );
        self.session_key = Some(session_key);
        self.state = ProfileLoadState::Loading;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Forgets the loaded profile so that the next `sync_session` starts a
    /// new load, and supersedes any load still in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.session_key = None;
        self.state = ProfileLoadState::Idle;
    }

    /// Applies the result of a load, unless it has been superseded.
    pub fn complete(&mut self, ticket: LoadTicket, state: ProfileLoadState) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale profile load (generation {}, current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        self.state = state;
        true
    }

    pub fn view<'a>(&'a self, session: Option<&'a Session>) -> ProfileView<'a> {
        let Some(session) = session else {
            return ProfileView::SignedOut;
        };

        if self.session_key.as_ref() != Some(&session.key()) {
            return ProfileView::Loading;
        }

        match self.state.data() {
            Some(data) => ProfileView::Ready { session, data },
            None => ProfileView::Loading,
        }
    }
}

/// Fetches bookmarks and test history concurrently.
///
/// Failures are logged and never propagated: the returned state always
/// settles to `Loaded` or `Failed`.
pub async fn load_profile<A: ProfileApi + ?Sized>(api: &A, session: &Session) -> ProfileLoadState {
    let (bookmarks, test_history) = join!(
        api.fetch_bookmarks(session),
        api.fetch_test_history(session)
    );

    let mut data = ProfileData::default();
    let mut errors = vec![];
    match bookmarks {
        Ok(bookmarks) => data.bookmarks = bookmarks,
        Err(err) => {
            error!("Failed to fetch bookmarks for {}: {err}", session.key());
            errors.push(err.to_string());
        }
    }
    match test_history {
        Ok(test_history) => data.test_history = test_history,
        Err(err) => {
            error!("Failed to fetch test history for {}: {err}", session.key());
            errors.push(err.to_string());
        }
    }

    if errors.is_empty() {
        ProfileLoadState::Loaded(data)
    } else {
        ProfileLoadState::Failed {
            partial: data,
            error: errors.join("; "),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PendingLoad {
    pub ticket: LoadTicket,
    pub session: Session,
}

pub struct ProfileLoader<P, A> {
    session_provider: P,
    api: A,
}

impl<P: CurrentSessionProvider, A: ProfileApi> ProfileLoader<P, A> {
    pub fn new(session_provider: P, api: A) -> Self {
        Self {
            session_provider,
            api,
        }
    }

    /// Reads the current session and returns the load to run, if any.
    pub fn prepare(&self, store: &mut ProfileStore) -> Option<PendingLoad> {
        let session = self.session_provider.current_session();
        let ticket = store.sync_session(session.as_ref())?;
        session.map(|session| PendingLoad { ticket, session })
    }

    pub async fn run(&self, pending: PendingLoad) -> (LoadTicket, ProfileLoadState) {
        let state = load_profile(&self.api, &pending.session).await;
        (pending.ticket, state)
    }
}
