use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::navigation::ProfileLink;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash, Default)]
#[serde(transparent)]
pub struct BookmarkId(pub String);

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A career saved by the user
#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct Bookmark {
    #[serde(rename = "_id", default)]
    #[serde_as(as = "DefaultOnNull")]
    pub id: BookmarkId,
    pub name: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub category: String,
}

impl Bookmark {
    pub fn details_link(&self) -> ProfileLink {
        ProfileLink::CareerDetails(self.name.clone())
    }
}

/// Response of the `bookmark/get-bookmarks` endpoint.
///
/// A missing or `null` `bookmarks` field means the user has no bookmark.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct BookmarksResponse {
    #[serde(default)]
    pub bookmarks: Option<Vec<Bookmark>>,
}

impl From<BookmarksResponse> for Vec<Bookmark> {
    fn from(response: BookmarksResponse) -> Self {
        response.bookmarks.unwrap_or_default()
    }
}
