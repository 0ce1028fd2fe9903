use std::cell::RefCell;

use anyhow::Result;

use portfolio::theme::{PreferenceStore, SystemThemeProbe};

#[derive(Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new(value: Option<&str>) -> Self {
        MemoryStore {
            value: RefCell::new(value.map(str::to_owned)),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(value.to_owned());
        Ok(())
    }
}

pub struct FixedProbe(pub bool);

impl SystemThemeProbe for FixedProbe {
    fn prefers_dark(&self) -> Result<bool> {
        Ok(self.0)
    }
}
