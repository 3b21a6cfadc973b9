use anyhow::{Result, bail, ensure};
use serde::Deserialize;

use weft_plugin_api::DarkMode;

/// Dark-mode options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DarkModeSection {
    pub(super) strategy: Option<String>,
    pub(super) selector: Option<String>,
}

impl DarkModeSection {
    pub(super) fn resolve(self) -> Result<DarkMode> {
        let strategy = self
            .strategy
            .as_deref()
            .map(|value| value.trim().to_ascii_lowercase());

        match strategy.as_deref() {
            None | Some("class") => Ok(match self.selector {
                Some(selector) => DarkMode::ClassBased { selector },
                None => DarkMode::class_based(),
            }),
            Some("media") => {
                ensure!(
                    self.selector.is_none(),
                    "dark_mode.selector only applies to the class strategy"
                );
                Ok(DarkMode::MediaQuery)
            }
            Some("disabled") | Some("none") => {
                ensure!(
                    self.selector.is_none(),
                    "dark_mode.selector only applies to the class strategy"
                );
                Ok(DarkMode::Disabled)
            }
            Some(other) => {
                bail!("unknown dark_mode.strategy '{other}' (expected class, media or disabled)")
            }
        }
    }
}
