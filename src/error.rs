// std imports
use std::io::{self, Write};
use std::num::{ParseIntError, TryFromIntError};

// third-party imports
use config::ConfigError;
use owo_colors::{OwoColorize, Style};
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

// local imports
use crate::range::LineRangeError;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    NonZeroSizeParseError(#[from] NonZeroSizeParseError),
    #[error("{source}")]
    Usage { kind: ExitKind, source: clap::Error },
    #[error("not enough arguments, expected {expected} or more, got {actual}")]
    NotEnoughArguments { expected: usize, actual: usize },
    #[error("both input and output files must be specified")]
    MissingFiles,
    #[error("option '-{option}' is specified more than once")]
    DuplicateArgument { option: char },
    #[error("search string is not specified, use '-s <SEARCH>'")]
    MissingSearch,
    #[error("invalid search string {value:?}, it must not be empty or start with '-'")]
    InvalidSearch { value: String },
    #[error("replacement string is not specified, use '-r <REPLACEMENT>'")]
    MissingReplacement,
    #[error("invalid replacement string {value:?}, it must not start with '-'")]
    InvalidReplacement { value: String },
    #[error("invalid line range: {0}")]
    InvalidLineRange(#[from] LineRangeError),
    #[error(transparent)]
    InvalidWildcard(#[from] wildcard::Error),
    #[error("failed to open input {input}: {source}")]
    InputFileMissing { input: String, source: io::Error },
    #[error("failed to create output {output}: {source}")]
    OutputFileUnwritable { output: String, source: io::Error },
    #[error("output {output} is the same file as the input, in-place editing is not supported")]
    SameFile { output: String },
}

impl Error {
    /// Returns the kind of failure used to select the exit code.
    pub fn kind(&self) -> ExitKind {
        match self {
            Self::Usage { kind, .. } => *kind,
            Self::NotEnoughArguments { .. } | Self::MissingFiles => ExitKind::MissingArgument,
            Self::DuplicateArgument { .. } => ExitKind::DuplicateArgument,
            Self::MissingSearch | Self::InvalidSearch { .. } => ExitKind::SArgumentMissing,
            Self::MissingReplacement | Self::InvalidReplacement { .. } => ExitKind::RArgumentMissing,
            Self::InvalidLineRange(_) => ExitKind::LArgumentInvalid,
            Self::InvalidWildcard(_) => ExitKind::WildcardInvalid,
            Self::InputFileMissing { .. } => ExitKind::InputFileMissing,
            Self::OutputFileUnwritable { .. } | Self::SameFile { .. } => ExitKind::OutputFileUnwritable,
            Self::Io(_) | Self::Config(_) | Self::NonZeroSizeParseError(_) => ExitKind::Failure,
        }
    }

    /// Writes the error to stderr.
    pub fn log(&self, colored: bool) {
        self.log_to(&mut io::stderr(), colored).ok();
    }

    /// Writes the error to the given output.
    pub fn log_to<W: Write + ?Sized>(&self, out: &mut W, colored: bool) -> io::Result<()> {
        if let Self::Usage { source, .. } = self {
            let text = source.render();
            return if colored {
                write!(out, "{}", text.ansi())
            } else {
                write!(out, "{}", text)
            };
        }

        if colored {
            writeln!(out, "{} {}", "error:".style(ERROR), self)
        } else {
            writeln!(out, "error: {}", self)
        }
    }
}

const ERROR: Style = Style::new().bright_red().bold();

// ---

/// Named failure kinds, each with its own process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ExitKind {
    MissingArgument,
    DuplicateArgument,
    SArgumentMissing,
    RArgumentMissing,
    LArgumentInvalid,
    InputFileMissing,
    OutputFileUnwritable,
    WildcardInvalid,
    Failure,
}

impl ExitKind {
    pub fn code(self) -> i32 {
        match self {
            Self::MissingArgument => 1,
            Self::DuplicateArgument => 2,
            Self::SArgumentMissing => 3,
            Self::RArgumentMissing => 4,
            Self::LArgumentInvalid => 5,
            Self::InputFileMissing => 6,
            Self::OutputFileUnwritable => 7,
            Self::WildcardInvalid => 8,
            Self::Failure => 9,
        }
    }
}

// ---

/// SizeParseError is an error which may occur when parsing size.
#[derive(Error, Debug)]
pub enum SizeParseError {
    #[error(transparent)]
    ParseIntError(#[from] ParseIntError),
    #[error(transparent)]
    TryFromIntError(#[from] TryFromIntError),
    #[error(
        "invalid size {0:?}, use {iec_short:?} or {iec_long:?} format for IEC units or {si:?} format for SI units",
        iec_short = "64K",
        iec_long = "64KiB",
        si = "64KB"
    )]
    InvalidSize(String),
}

/// NonZeroSizeParseError is an error which may occur when parsing non-zero size.
#[derive(Error, Debug)]
pub enum NonZeroSizeParseError {
    #[error(transparent)]
    SizeParseError(#[from] SizeParseError),
    #[error("zero size")]
    ZeroSize,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
