// std imports
use std::io::{BufRead, Write};

// local imports
use crate::{error::Result, range::LineRange, replace::Replace};

// ---

/// Counters collected while processing an input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Lines read.
    pub lines: u64,
    /// Lines within the line range.
    pub selected: u64,
    /// Lines with at least one replacement.
    pub changed: u64,
    /// Replacements made.
    pub replacements: u64,
}

// ---

/// Copies input to output line by line, rewriting lines within the range.
pub struct LineProcessor<R> {
    replacer: R,
    range: LineRange,
}

impl<R: Replace> LineProcessor<R> {
    pub fn new(replacer: R, range: LineRange) -> Self {
        Self { replacer, range }
    }

    /// Processes the whole input and flushes the output.
    ///
    /// Lines outside the range are written unchanged. A final line without a
    /// trailing newline is processed like any other and written back without one.
    pub fn run<I, O>(&self, input: &mut I, output: &mut O) -> Result<Stats>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        let mut stats = Stats::default();
        let mut line = Vec::new();
        let mut buf = Vec::new();

        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            stats.lines += 1;

            if !self.range.contains(stats.lines) {
                output.write_all(&line)?;
                continue;
            }
            stats.selected += 1;

            buf.clear();
            let n = self.process_line(&line, &mut buf);
            if n != 0 {
                stats.changed += 1;
                stats.replacements += n as u64;
            }
            output.write_all(&buf)?;
        }

        output.flush()?;
        Ok(stats)
    }

    /// Appends the rewritten line to `buf`, keeping its terminator intact.
    pub fn process_line(&self, line: &[u8], buf: &mut Vec<u8>) -> usize {
        let (content, terminator) = split_terminator(line);
        let n = self.replacer.replace(content, buf);
        buf.extend_from_slice(terminator);
        n
    }
}

fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    match line.last() {
        Some(b'\n') => line.split_at(line.len() - 1),
        _ => (line, &[][..]),
    }
}
