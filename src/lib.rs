pub mod api;
pub mod auth;
pub mod bookmark;
pub mod navigation;
pub mod profile;
pub mod test_history;
pub mod user;
pub mod utils;
