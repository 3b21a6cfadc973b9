use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) content_globs: Option<SettingSource>,
    pub(crate) themes: Option<SettingSource>,
    pub(crate) engine_class_prefix: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_globs(&self) -> SettingSource {
        self.content_globs
            .clone()
            .unwrap_or(SettingSource::ConfigKey("content.globs"))
    }

    pub(crate) fn source_for_themes(&self) -> SettingSource {
        self.themes
            .clone()
            .unwrap_or(SettingSource::ConfigKey("themes"))
    }

    pub(crate) fn source_for_class_prefix(&self) -> SettingSource {
        self.engine_class_prefix
            .clone()
            .unwrap_or(SettingSource::ConfigKey("engine.class_prefix"))
    }
}
