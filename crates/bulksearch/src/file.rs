//! Loading the bulk search list from the filesystem.
//!
//! The list is a plain text file whose first line is the [`HEADER`] followed by one
//! `<identifier>,<title>` pair per line. Only the first comma separates the two, so titles may
//! contain commas. The file is created on first use and never written to again.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind as IoErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{info, trace};

use crate::{Error, ErrorKind};

/// The first line of every bulk search file.
pub const HEADER: &str = "Format: ISBN, Title";

/// A single line of the bulk search file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// The ISBN as written, which may be empty or malformed.
    pub identifier: String,
    /// The title as written.
    pub label: String,
}

/// A non-blank line of the bulk search file after the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// An `<identifier>,<title>` pair.
    Record(Record),
    /// A trimmed line without a comma.
    Invalid(String),
}

/// The lines of a bulk search file in file order, header and blank lines removed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    #[allow(missing_docs)]
    pub lines: Vec<Line>,
}

impl Parsed {
    /// Iterates over the readable records.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.lines.iter().filter_map(|line| match line {
            Line::Record(record) => Some(record),
            Line::Invalid(_) => None,
        })
    }

    /// Iterates over the lines that could not be read as a record.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Record(_) => None,
            Line::Invalid(text) => Some(text.as_str()),
        })
    }
}

/// The outcome of [`load`].
#[derive(Debug, PartialEq, Eq)]
pub enum Loaded {
    /// The file did not exist and has been created with only the [`HEADER`].
    Created(PathBuf),
    /// The file existed and has been parsed.
    Parsed(Parsed),
}

/// Reads the bulk search file at `path`, creating it when it does not exist.
///
/// # Errors
/// This function will return an error if the file (or its parent directory) cannot be created,
/// or an existing file cannot be read as UTF-8 text.
///
/// # Examples
/// ```no_run
/// use bulksearch::file::{self, Loaded};
///
/// fn main() -> Result<(), bulksearch::Error> {
///     if let Loaded::Parsed(parsed) = file::load("bulksearch.txt")? {
///         println!("{} records", parsed.records().count());
///     }
///     Ok(())
/// }
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Loaded, Error> {
    let path = path.as_ref();
    trace!("Reading bulk search file '{}'", path.display());

    match fs::read_to_string(path) {
        Ok(content) => Ok(Loaded::Parsed(parse(&content))),
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            create_with_header(path)?;
            Ok(Loaded::Created(path.to_owned()))
        }
        Err(e) => Err(Error::wrap(ErrorKind::IO, e)),
    }
}

fn create_with_header(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::wrap(ErrorKind::IO, e))?;
    }

    info!("Creating bulk search file '{}'", path.display());

    OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .and_then(|mut file| writeln!(file, "{HEADER}"))
        .map_err(|e| Error::wrap(ErrorKind::IO, e))
}

/// Parses the content of a bulk search file, discarding the header line.
#[must_use]
pub fn parse(content: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for line in content.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line = if let Some((identifier, label)) = line.split_once(',') {
            Line::Record(Record {
                identifier: identifier.trim().to_owned(),
                label: label.trim().to_owned(),
            })
        } else {
            trace!("Line '{line}' has no comma");
            Line::Invalid(line.to_owned())
        };
        parsed.lines.push(line);
    }

    parsed
}
