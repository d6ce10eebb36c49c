//! Reading CV text.
//!
//! The CV is plain text from a file or standard input. It must be valid UTF-8
//! and contain at least one non-whitespace character.

use std::{
    fmt, fs,
    io::{self, Read},
    path::PathBuf,
};

use thiserror::Error;

/// The CV could not be turned into text.
#[derive(Debug, Error)]
pub enum InputError {
    /// The source could not be read.
    #[error("could not read CV from {source_name}: {source}")]
    Read {
        /// Where the CV was read from.
        source_name: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source is not UTF-8 text.
    #[error("could not parse CV from {source_name}: not UTF-8 text")]
    NotUtf8 {
        /// Where the CV was read from.
        source_name: String,
    },

    /// The source contains only whitespace.
    #[error("CV from {source_name} is empty")]
    Blank {
        /// Where the CV was read from.
        source_name: String,
    },
}

/// Where to read the CV from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl CvSource {
    /// Interprets a command-line argument; `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Reads the CV text from this source.
    pub fn read(&self) -> Result<String, InputError> {
        let source_name = self.to_string();
        match self {
            Self::Stdin => read_text(io::stdin().lock(), &source_name),
            Self::File(path) => {
                let file =
                    fs::File::open(path).map_err(|source| InputError::Read {
                        source_name: source_name.clone(),
                        source,
                    })?;
                read_text(file, &source_name)
            }
        }
    }
}

impl fmt::Display for CvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads all of `reader` as UTF-8 text, rejecting blank content.
pub fn read_text<R: Read>(mut reader: R, source_name: &str) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::Read {
            source_name: source_name.to_string(),
            source,
        })?;
    let text = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        source_name: source_name.to_string(),
    })?;
    if text.trim().is_empty() {
        return Err(InputError::Blank {
            source_name: source_name.to_string(),
        });
    }
    Ok(text)
}
