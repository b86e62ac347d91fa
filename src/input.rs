// std imports
use std::{
    fs::File,
    io::{self, BufRead, BufReader, stdin},
    path::{Path, PathBuf},
};

// ---

pub type InputStream = Box<dyn BufRead + Send + Sync>;

// ---

/// A reference to an input, either a file or stdin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Opens the input for buffered reading.
    pub fn open(&self, buffer_size: usize) -> io::Result<InputStream> {
        Ok(match self {
            Self::Stdin => Box::new(BufReader::with_capacity(buffer_size, stdin())),
            Self::File(path) => {
                let file = File::open(path)?;
                if file.metadata()?.is_dir() {
                    return Err(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"));
                }
                Box::new(BufReader::with_capacity(buffer_size, file))
            }
        })
    }

    /// Returns a description of the input reference.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path.to_string_lossy()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }
}

impl From<PathBuf> for InputReference {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}
