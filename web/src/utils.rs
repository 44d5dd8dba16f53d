use anyhow::{anyhow, Context, Result};
use url::Url;

pub fn current_origin() -> Result<Url> {
    let window = web_sys::window().context("Unable to load `window`")?;
    let origin = window
        .location()
        .origin()
        .map_err(|err| anyhow!("Unable to read the page origin: {err:?}"))?;

    Ok(Url::parse(&origin)?)
}
