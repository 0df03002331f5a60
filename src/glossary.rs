//! Acronym definition files.
//!
//! An acronym file is plain text with one `ACRONYM: definition` line per
//! entry. [`AcronymFile::initialize`] starts the file over with a single
//! entry and [`AcronymFile::append`] adds one to the end.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{EngineError, EngineResult};

/// One acronym and its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymEntry {
    acronym: String,
    definition: String,
}

impl AcronymEntry {
    /// Creates an entry, trimming both parts.
    ///
    /// Blank parts and parts that span lines are rejected, as is a colon in
    /// the acronym, since either would corrupt the line format.
    pub fn new(acronym: &str, definition: &str) -> EngineResult<Self> {
        let acronym = acronym.trim();
        let definition = definition.trim();

        if acronym.is_empty() {
            return Err(EngineError::invalid_input("acronym", "must not be blank"));
        }
        if acronym.contains(':') {
            return Err(EngineError::invalid_input("acronym", "must not contain ':'"));
        }
        if definition.is_empty() {
            return Err(EngineError::invalid_input("definition", "must not be blank"));
        }
        for (field, value) in [("acronym", acronym), ("definition", definition)] {
            if value.contains(['\n', '\r']) {
                return Err(EngineError::invalid_input(field, "must be a single line"));
            }
        }

        Ok(Self {
            acronym: acronym.to_string(),
            definition: definition.to_string(),
        })
    }

    /// Returns the acronym.
    pub fn acronym(&self) -> &str {
        &self.acronym
    }

    /// Returns the definition.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns the entry as written to the file, newline included.
    pub fn to_line(&self) -> String {
        format!("{}: {}\n", self.acronym, self.definition)
    }

    /// Parses a line written by [`AcronymEntry::to_line`].
    pub fn parse_line(line: &str) -> EngineResult<Self> {
        let (acronym, definition) = line.split_once(':').ok_or_else(|| {
            EngineError::invalid_input("line", format!("'{}' has no ':' separator", line))
        })?;
        Self::new(acronym, definition)
    }
}

impl fmt::Display for AcronymEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.acronym, self.definition)
    }
}

/// A text file of acronym definitions.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::glossary::{AcronymEntry, AcronymFile};
///
/// let file = AcronymFile::new("acronyms.txt");
/// file.initialize(&AcronymEntry::new("API", "Application Programming Interface")?)?;
/// file.append(&AcronymEntry::new("OOP", "Object-Oriented Programming")?)?;
/// assert_eq!(file.entries()?.len(), 2);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AcronymFile {
    path: PathBuf,
}

impl AcronymFile {
    /// Points at a file, which need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the whole file with a single entry.
    pub fn initialize(&self, entry: &AcronymEntry) -> EngineResult<()> {
        fs::write(&self.path, entry.to_line())
            .map_err(|e| EngineError::io(format!("writing {}", self.path.display()), e))?;
        info!(path = %self.path.display(), acronym = entry.acronym(), "Initialized acronym file");
        Ok(())
    }

    /// Adds an entry to the end of the file, creating it if needed.
    pub fn append(&self, entry: &AcronymEntry) -> EngineResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| EngineError::io(format!("opening {}", self.path.display()), e))?;
        file.write_all(entry.to_line().as_bytes())
            .map_err(|e| EngineError::io(format!("appending to {}", self.path.display()), e))?;
        info!(path = %self.path.display(), acronym = entry.acronym(), "Appended acronym");
        Ok(())
    }

    /// Reads every entry back, skipping blank lines. A missing file is empty.
    pub fn entries(&self) -> EngineResult<Vec<AcronymEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(EngineError::io(format!("reading {}", self.path.display()), e));
            }
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(AcronymEntry::parse_line)
            .collect()
    }
}
