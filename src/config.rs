// std imports
use std::path::PathBuf;

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source},
};

// ---

pub const APP_NAME: &str = "wsub";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the global settings, or the default settings if they have not been initialized yet.
pub fn get() -> &'static Settings {
    global::get().unwrap_or_else(default)
}

/// Returns the default settings.
pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Returns a loader for settings overlaid with the given configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader::new(paths.into_iter().map(Into::into).collect())
}

/// Returns the path of the per-user configuration file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the per-user configuration file.
    pub fn no_default(mut self, val: bool) -> Self {
        self.no_default = val;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let user = if self.no_default { None } else { user_config_path() };

        Settings::load(
            user.into_iter()
                .map(Source::optional)
                .chain(self.paths.into_iter().map(Source::required)),
        )
    }
}

// ---

pub mod global {
    use super::*;

    use once_cell::sync::OnceCell;

    static GLOBAL: OnceCell<Settings> = OnceCell::new();

    /// Sets the global settings, subsequent calls have no effect.
    pub fn initialize(settings: Settings) {
        if GLOBAL.set(settings).is_err() {
            log::debug!("global settings are already initialized");
        }
    }

    pub fn get() -> Option<&'static Settings> {
        GLOBAL.get()
    }
}
