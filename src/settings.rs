// std imports
use std::{io::IsTerminal, path::PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub buffer_size: String,
    pub color: ColorOption,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with the given sources in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for source in sources {
            log::debug!("add configuration source {:?}", source);
            builder = builder.add_source(File::from(source.path).required(source.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            buffer_size: "64 KiB".into(),
            color: ColorOption::Auto,
        }
    }
}

// ---

/// A configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub required: bool,
}

impl Source {
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// Decides whether to use colors for the given stream.
    pub fn resolve<S: IsTerminal>(self, stream: &S) -> bool {
        match self {
            Self::Auto => stream.is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}
