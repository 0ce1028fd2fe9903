use anyhow::{Context, Result};

use gloo_console::error as console_error;
use web_sys::{Storage, wasm_bindgen::JsValue};

use portfolio::theme::{PreferenceStore, THEME_KEY};

// localStorage-backed preference store
//
// failures are reported to the browser console here and nowhere else. the value is written raw ("dark" / "light") rather than json-encoded so that it stays
// readable by anything else on the page that looks at the same key
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalPreferences;

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// private browsing modes and disabled storage surface here, either as an Err or as None
fn local_storage() -> Result<Storage> {
    web_sys::window()
        .context("no window")?
        .local_storage()
        .map_err(js_error)?
        .context("local storage is disabled")
}

impl PreferenceStore for LocalPreferences {
    fn load(&self) -> Result<Option<String>> {
        let res = local_storage().and_then(|storage| storage.get_item(THEME_KEY).map_err(js_error));

        if let Err(err) = &res {
            console_error!(format!("Failed to fetch local storage {THEME_KEY}: {err}"));
        }

        res
    }

    fn save(&self, value: &str) -> Result<()> {
        let res = local_storage().and_then(|storage| storage.set_item(THEME_KEY, value).map_err(js_error));

        if let Err(err) = &res {
            console_error!(format!("Failed to set local storage {THEME_KEY}: {err}"));
        }

        res
    }
}
