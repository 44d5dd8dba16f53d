use async_trait::async_trait;
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::{
    bookmark::{Bookmark, BookmarksResponse},
    test_history::{TestHistoryEntry, TestHistoryResponse},
    user::Session,
};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/";
pub const BOOKMARKS_PATH: &str = "bookmark/get-bookmarks";
pub const TEST_HISTORY_PATH: &str = "api/users/test-history";

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Failed to initialize the HTTP client: {0}")]
    ClientInitialization(#[source] reqwest::Error),

    #[error("Network error while calling `{path}`: {source}")]
    NetworkError {
        #[source]
        source: reqwest::Error,
        path: String,
    },

    #[error("Unexpected status {status} while calling `{path}`")]
    UnexpectedStatus { status: StatusCode, path: String },

    #[error("Json parsing error for `{path}` response: {source}")]
    JsonParsingError {
        #[source]
        source: serde_json::Error,
        path: String,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Request body shared by both profile endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserLookupRequest {
    pub user_id: String,
}

impl UserLookupRequest {
    pub fn for_session(session: &Session) -> Self {
        Self {
            user_id: session.email.to_string(),
        }
    }
}

#[async_trait(?Send)]
pub trait ProfileApi {
    async fn fetch_bookmarks(&self, session: &Session) -> Result<Vec<Bookmark>, ApiClientError>;

    async fn fetch_test_history(
        &self,
        session: &Session,
    ) -> Result<Vec<TestHistoryEntry>, ApiClientError>;
}

#[async_trait(?Send)]
impl<A: ProfileApi + ?Sized> ProfileApi for &A {
    async fn fetch_bookmarks(&self, session: &Session) -> Result<Vec<Bookmark>, ApiClientError> {
        (**self).fetch_bookmarks(session).await
    }

    async fn fetch_test_history(
        &self,
        session: &Session,
    ) -> Result<Vec<TestHistoryEntry>, ApiClientError> {
        (**self).fetch_test_history(session).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpProfileApi {
    client: Client,
    base_url: Url,
}

impl HttpProfileApi {
    pub fn try_new(base_url: Url) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiClientError::ClientInitialization)?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, mut base_url: Url) -> Self {
        // `Url::join` replaces the last path segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post_for_user<R: DeserializeOwned>(
        &self,
        path: &str,
        session: &Session,
    ) -> Result<R, ApiClientError> {
        let url = self.base_url.join(path)?;
        debug!("Calling POST {url} for {}", session.key());

        let mut request = self
            .client
            .post(url)
            .json(&UserLookupRequest::for_session(session));
        if let Some(id_token) = &session.id_token {
            request = request.bearer_auth(id_token.as_str());
        }

        let network_error = |source| ApiClientError::NetworkError {
            source,
            path: path.to_string(),
        };
        let response = request.send().await.map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::UnexpectedStatus {
                status,
                path: path.to_string(),
            });
        }

        let body = response.text().await.map_err(network_error)?;
        serde_json::from_str(&body).map_err(|source| ApiClientError::JsonParsingError {
            source,
            path: path.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl ProfileApi for HttpProfileApi {
    async fn fetch_bookmarks(&self, session: &Session) -> Result<Vec<Bookmark>, ApiClientError> {
        let response: BookmarksResponse = self.post_for_user(BOOKMARKS_PATH, session).await?;
        Ok(response.into())
    }

    async fn fetch_test_history(
        &self,
        session: &Session,
    ) -> Result<Vec<TestHistoryEntry>, ApiClientError> {
        let response: TestHistoryResponse =
            self.post_for_user(TEST_HISTORY_PATH, session).await?;
        Ok(response.into())
    }
}
