pub mod page_not_found;
pub mod profile_page;
