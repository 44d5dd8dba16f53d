use std::fmt;

use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{auth::AuthIdToken, utils::date::format_short_date};

pub const ANONYMOUS_USER_NAME: &str = "Anonymous User";

/// The signed-in user as exposed by the authentication provider.
///
/// This crate never creates or mutates sessions: they are read from a
/// [`CurrentSessionProvider`](crate::auth::CurrentSessionProvider).
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: EmailAddress,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<Url>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub id_token: Option<AuthIdToken>,
}

impl Session {
    pub fn key(&self) -> SessionKey {
        SessionKey(self.email.as_str().to_lowercase())
    }

    pub fn display_name_or_default(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_USER_NAME)
    }

    pub fn joined_on_label(&self) -> Option<String> {
        self.created_at
            .map(|created_at| format!("Joined {}", format_short_date(created_at.date_naive())))
    }
}

/// Identity of a session. Two sessions with the same key are the same user.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct SessionKey(String);

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
