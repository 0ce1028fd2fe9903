use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::theme::{PreferenceStore, SystemThemeProbe};

use super::{probe::MediaQueryProbe, storage::LocalPreferences};

pub type SharedStore = Rc<dyn PreferenceStore>;
pub type SharedProbe = Rc<dyn SystemThemeProbe>;

// hands the browser-backed store and probe to every component below the caller
pub fn use_browser_platform() {
    use_context_provider(|| Rc::new(LocalPreferences) as SharedStore);
    use_context_provider(|| Rc::new(MediaQueryProbe) as SharedProbe);
}
