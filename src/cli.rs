// std imports
use std::{ffi::OsStr, num::NonZeroUsize, path::PathBuf};

// third-party imports
use clap::{
    ArgAction, Parser,
    error::{ContextKind, ContextValue},
};
use clap_complete::Shell;

// local imports
use crate::{error::*, range::LineRange};

// ---

/// Minimal number of command-line arguments: `-s SEARCH -r REPLACEMENT INPUT OUTPUT`.
pub const MIN_ARGS: usize = 6;

// ---

/// Replaces text in a file line by line.
#[derive(Parser)]
#[command(version)]
pub struct Opt {
    /// Configuration file path, may be specified multiple times, empty value or '-' discards previously listed and default configuration files.
    #[arg(long, value_name = "FILE", num_args = 1, action = ArgAction::Append)]
    pub config: Vec<String>,

    /// Text to search for, with -w it must start or end with '*'.
    #[arg(short = 's', value_name = "SEARCH", allow_hyphen_values = true, num_args = 1, action = ArgAction::Append)]
    pub search: Vec<String>,

    /// Replacement text.
    #[arg(short = 'r', value_name = "REPLACEMENT", allow_hyphen_values = true, num_args = 1, action = ArgAction::Append)]
    pub replacement: Vec<String>,

    /// Replace only within lines MIN through MAX, both inclusive and starting from 1.
    #[arg(short = 'l', value_name = "MIN,MAX", allow_hyphen_values = true, num_args = 1, action = ArgAction::Append)]
    pub lines: Vec<String>,

    /// Replace whole words starting with the search text ('text*') or ending with it ('*text').
    #[arg(short = 'w', overrides_with = "wildcard")]
    pub wildcard: bool,

    /// Input and output buffer size, overrides the buffer-size setting.
    #[arg(long, value_name = "SIZE", value_parser = parse_non_zero_size, overrides_with = "buffer_size")]
    pub buffer_size: Option<NonZeroUsize>,

    /// Print shell auto-completion script and exit.
    #[arg(long, value_name = "SHELL")]
    pub shell_completions: Option<Shell>,

    /// Input and output files, '-' stands for stdin or stdout.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Validates the options and builds a request from them.
    pub fn validate(self) -> Result<Request> {
        let search = single('s', self.search)?;
        let replacement = single('r', self.replacement)?;
        let lines = single('l', self.lines)?;

        if let Some(value) = &search {
            if value.is_empty() || value.starts_with('-') {
                return Err(Error::InvalidSearch { value: value.clone() });
            }
        }
        if let Some(value) = &replacement {
            if value.starts_with('-') {
                return Err(Error::InvalidReplacement { value: value.clone() });
            }
        }
        let range = match lines {
            Some(value) => value.parse()?,
            None => LineRange::all(),
        };

        let search = search.ok_or(Error::MissingSearch)?;
        let replacement = replacement.ok_or(Error::MissingReplacement)?;

        let mut files = self.files.into_iter();
        let (Some(input), Some(output)) = (files.next(), files.next()) else {
            return Err(Error::MissingFiles);
        };
        let extra = files.count();
        if extra != 0 {
            log::debug!("ignoring {extra} extra file argument(s)");
        }

        Ok(Request {
            search,
            replacement,
            range,
            wildcard: self.wildcard,
            input,
            output,
        })
    }
}

// ---

/// Validated command-line request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub search: String,
    pub replacement: String,
    pub range: LineRange,
    pub wildcard: bool,
    pub input: PathBuf,
    pub output: PathBuf,
}

// ---

/// Checks the number of command-line arguments, including the program name, before any of them is parsed.
///
/// Help, version and shell completion requests pass regardless of the count.
pub fn check_args<S: AsRef<OsStr>>(args: &[S]) -> Result<()> {
    let args = args.get(1..).unwrap_or_default();
    if args.len() >= MIN_ARGS || args.iter().any(|arg| is_informational(arg.as_ref())) {
        return Ok(());
    }

    Err(Error::NotEnoughArguments {
        expected: MIN_ARGS,
        actual: args.len(),
    })
}

fn is_informational(arg: &OsStr) -> bool {
    match arg.to_str() {
        Some("-h" | "--help" | "-V" | "--version" | "--shell-completions") => true,
        Some(arg) => arg.starts_with("--shell-completions="),
        None => false,
    }
}

/// Converts a clap parsing error to an application error, choosing the failure kind by the argument it refers to.
pub fn usage_error(err: clap::Error) -> Error {
    let option = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.split_whitespace().next().map(|x| x.to_owned()),
        _ => None,
    };

    let kind = match option.as_deref() {
        Some("-s") => ExitKind::SArgumentMissing,
        Some("-r") => ExitKind::RArgumentMissing,
        Some("-l") => ExitKind::LArgumentInvalid,
        _ => ExitKind::MissingArgument,
    };

    Error::Usage { kind, source: err }
}

fn single(option: char, mut values: Vec<String>) -> Result<Option<String>> {
    if values.len() > 1 {
        return Err(Error::DuplicateArgument { option });
    }
    Ok(values.pop())
}

fn parse_size(s: &str) -> std::result::Result<usize, SizeParseError> {
    match bytefmt::parse(s) {
        Ok(value) => Ok(usize::try_from(value)?),
        Err(_) => {
            if let Ok(value) = bytefmt::parse(s.to_owned() + "ib") {
                return Ok(usize::try_from(value)?);
            }
            Err(SizeParseError::InvalidSize(s.into()))
        }
    }
}

pub fn parse_non_zero_size(s: &str) -> std::result::Result<NonZeroUsize, NonZeroSizeParseError> {
    NonZeroUsize::new(parse_size(s)?).ok_or(NonZeroSizeParseError::ZeroSize)
}

#[cfg(test)]
mod tests;
