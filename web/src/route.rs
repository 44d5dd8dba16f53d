use dioxus::prelude::*;

use crate::pages::{page_not_found::PageNotFound, profile_page::ProfilePage};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::ProfilePage {})]
    #[route("/profile")]
    ProfilePage {},
    #[route("/:..route")]
    PageNotFound {
        route: Vec<String>
    },
}
