use std::fmt;

use url::form_urlencoded;

/// Routes of the host application linked from the profile view.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub enum ProfileLink {
    SignIn,
    Explore,
    CareerDetails(String),
    TakeTest,
}

impl ProfileLink {
    pub fn path(&self) -> String {
        match self {
            ProfileLink::SignIn => "/auth".to_string(),
            ProfileLink::Explore => "/explore".to_string(),
            ProfileLink::CareerDetails(name) => {
                format!("/career-details/{}", encode_path_segment(name))
            }
            ProfileLink::TakeTest => "/test".to_string(),
        }
    }
}

impl fmt::Display for ProfileLink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

// form encoding turns spaces into `+` and escapes literal `+` as `%2B`
fn encode_path_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
