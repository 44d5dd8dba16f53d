use std::fmt;

use serde::{Deserialize, Serialize};

use crate::user::Session;

/// Identity token issued by the external authentication provider.
#[derive(Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
#[serde(transparent)]
pub struct AuthIdToken(pub String);

impl AuthIdToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthIdToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AuthIdToken(<redacted>)")
    }
}

impl From<String> for AuthIdToken {
    fn from(auth_id_token: String) -> Self {
        Self(auth_id_token)
    }
}

/// Gives access to the session of the currently signed-in user, if any.
pub trait CurrentSessionProvider {
    fn current_session(&self) -> Option<Session>;
}

impl<P: CurrentSessionProvider + ?Sized> CurrentSessionProvider for &P {
    fn current_session(&self) -> Option<Session> {
        (**self).current_session()
    }
}

/// A session fixed at construction time
impl CurrentSessionProvider for Option<Session> {
    fn current_session(&self) -> Option<Session> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_auth_id_token_debug_is_redacted() {
        let token = AuthIdToken::from("secret-token".to_string());

        assert_eq!(format!("{token:?}"), "AuthIdToken(<redacted>)");
        assert_eq!(token.as_str(), "secret-token");
    }

    #[rstest]
    fn test_absent_session_provider() {
        let provider: Option<Session> = None;

        assert_eq!((&provider).current_session(), None);
    }
}
