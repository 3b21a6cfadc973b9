use serde::Deserialize;

use crate::resolver::ContentOptions;

use super::super::util::sanitize_globs;

/// Content scanning options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ContentSection {
    pub(super) globs: Option<Vec<String>>,
}

impl ContentSection {
    pub(super) fn resolve(self) -> ContentOptions {
        match self.globs {
            // An explicitly empty list stays empty: it is the valid
            // "generate nothing" configuration, not a request for defaults.
            Some(globs) => ContentOptions {
                globs: sanitize_globs(globs),
            },
            None => ContentOptions::default(),
        }
    }
}
