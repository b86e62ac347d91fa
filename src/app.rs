// std imports
use std::{
    fs,
    io::{BufRead, Write},
    num::NonZeroUsize,
};

// third-party imports
use wildcard::Pattern;

// local imports
use crate::{
    error::*,
    input::InputReference,
    output::OutputReference,
    processing::{LineProcessor, Stats},
    range::LineRange,
    replace::{LiteralReplacer, WordReplacer},
};

// ---

pub struct Options {
    pub search: String,
    pub wildcard: bool,
    pub replacement: String,
    pub range: LineRange,
    pub buffer_size: NonZeroUsize,
}

impl Options {
    /// Classifies the search text, validating the wildcard shape in wildcard mode.
    pub fn pattern(&self) -> Result<Pattern> {
        Ok(Pattern::new(self.search.as_str(), self.wildcard)?)
    }
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Opens the input and the output and processes the input.
    ///
    /// The search pattern is checked once the input is open, so a missing input takes precedence.
    /// The output is not created if the input cannot be opened or the pattern is invalid.
    pub fn run(&self, input: &InputReference, output: &OutputReference) -> Result<Stats> {
        let buffer_size = self.options.buffer_size.get();

        log::debug!("open input {}", input.description());
        let mut reader = input.open(buffer_size).map_err(|source| Error::InputFileMissing {
            input: input.description(),
            source,
        })?;

        if is_same_file(input, output) {
            return Err(Error::SameFile {
                output: output.description(),
            });
        }

        let pattern = self.options.pattern()?;

        log::debug!("create output {}", output.description());
        let mut writer = output.create(buffer_size).map_err(|source| Error::OutputFileUnwritable {
            output: output.description(),
            source,
        })?;

        self.transform(&pattern, &mut reader, &mut writer)
    }

    /// Processes the input stream, writing the result to the output stream.
    pub fn process<I, O>(&self, input: &mut I, output: &mut O) -> Result<Stats>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        let pattern = self.options.pattern()?;
        self.transform(&pattern, input, output)
    }

    fn transform<I, O>(&self, pattern: &Pattern, input: &mut I, output: &mut O) -> Result<Stats>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        let Options { replacement, range, .. } = &self.options;

        log::debug!("replace {:?} with {:?} in lines {}", pattern, replacement, range);

        let stats = match pattern {
            Pattern::Literal(needle) => {
                LineProcessor::new(LiteralReplacer::new(needle, replacement.as_bytes()), *range).run(input, output)?
            }
            Pattern::Affix(affix) => {
                LineProcessor::new(WordReplacer::new(affix.clone(), replacement.as_bytes()), *range).run(input, output)?
            }
        };

        log::debug!("{:?}", stats);
        Ok(stats)
    }
}

fn is_same_file(input: &InputReference, output: &OutputReference) -> bool {
    let (Some(input), Some(output)) = (input.path(), output.path()) else {
        return false;
    };

    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}
