// std imports
use std::{
    fs::File,
    io::{self, BufWriter, Write, stdout},
    path::{Path, PathBuf},
};

// ---

pub type OutputStream = Box<dyn Write + Send + Sync>;

// ---

/// A reference to an output, either a file or stdout.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OutputReference {
    Stdout,
    File(PathBuf),
}

impl OutputReference {
    /// Creates or truncates the output and wraps it into a buffered writer.
    pub fn create(&self, buffer_size: usize) -> io::Result<OutputStream> {
        Ok(match self {
            Self::Stdout => Box::new(BufWriter::with_capacity(buffer_size, stdout())),
            Self::File(path) => Box::new(BufWriter::with_capacity(buffer_size, File::create(path)?)),
        })
    }

    /// Returns a description of the output reference.
    pub fn description(&self) -> String {
        match self {
            Self::Stdout => "<stdout>".into(),
            Self::File(path) => format!("file {:?}", path.to_string_lossy()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }
}

impl From<PathBuf> for OutputReference {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }
}
