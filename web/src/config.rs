use anyhow::{anyhow, Context, Result};
use url::{ParseError, Url};
use wasm_bindgen::prelude::*;

use career_compass::api::DEFAULT_API_BASE_URL;

use crate::utils::current_origin;

#[derive(Debug, PartialEq, Clone)]
pub struct AppConfig {
    pub api_base_url: Url,
}

#[wasm_bindgen(module = "/js/api.js")]
extern "C" {
    fn api_base_url() -> String;
}

pub fn get_app_config() -> Result<AppConfig> {
    let api_base_url = resolve_api_base_url(&api_base_url(), current_origin().ok().as_ref())?;

    Ok(AppConfig { api_base_url })
}

pub fn resolve_api_base_url(configured: &str, origin: Option<&Url>) -> Result<Url> {
    let configured = match configured.trim() {
        "" => DEFAULT_API_BASE_URL,
        configured => configured,
    };

    match Url::parse(configured) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => origin
            .context(format!(
                "Unable to resolve relative api_base_url `{configured}` without an origin"
            ))?
            .join(configured)
            .with_context(|| format!("Failed to resolve api_base_url `{configured}`")),
        Err(err) => Err(anyhow!("Failed to parse api_base_url `{configured}`: {err}")),
    }
}
