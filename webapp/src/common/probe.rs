use anyhow::{Context, Result};

use portfolio::theme::SystemThemeProbe;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MediaQueryProbe;

impl SystemThemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> Result<bool> {
        let list = web_sys::window()
            .context("no window")?
            .match_media(DARK_QUERY)
            .map_err(|err| anyhow::Error::msg(format!("{err:?}")))?
            .context("matchMedia returned no list")?;

        Ok(list.matches())
    }
}
