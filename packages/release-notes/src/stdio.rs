//! File-or-stream endpoints.
//!
//! Both `--input` and `--output` accept a path, where the literal `-`
//! stands for the process's standard stream (stdin for input, stdout for
//! output).

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NotesError, Result};

/// Path value that selects the standard stream instead of a file.
pub const STDIO_SENTINEL: &str = "-";

/// Where the changelog comes from or the notes go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// stdin when reading, stdout when writing
    Stdio,
    Path(PathBuf),
}

impl Endpoint {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str() == STDIO_SENTINEL {
            Endpoint::Stdio
        } else {
            Endpoint::Path(path)
        }
    }

    pub fn is_stdio(&self) -> bool {
        matches!(self, Endpoint::Stdio)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Endpoint::Stdio => None,
            Endpoint::Path(path) => Some(path.as_path()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Stdio => write!(f, "stdio"),
            Endpoint::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read a whole changelog from any reader.
pub fn read_from<R: Read>(mut reader: R) -> io::Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Write notes to any writer, optionally followed by a newline.
pub fn write_to<W: Write>(mut writer: W, notes: &str, trailing_newline: bool) -> io::Result<()> {
    writer.write_all(notes.as_bytes())?;
    if trailing_newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Read the full changelog text from `endpoint`.
pub fn read_changelog(endpoint: &Endpoint) -> Result<String> {
    let result = match endpoint {
        Endpoint::Stdio => read_from(io::stdin().lock()),
        Endpoint::Path(path) => File::open(path).and_then(read_from),
    };

    let content = result.map_err(|source| NotesError::Read {
        endpoint: endpoint.clone(),
        source,
    })?;
    debug!(%endpoint, bytes = content.len(), "Read changelog");
    Ok(content)
}

/// Write the extracted notes to `endpoint`.
///
/// stdout gets a trailing newline like any line-oriented output; a file
/// receives the notes byte-for-byte, created or truncated.
pub fn write_notes(endpoint: &Endpoint, notes: &str) -> Result<()> {
    let result = match endpoint {
        Endpoint::Stdio => write_to(io::stdout().lock(), notes, true),
        Endpoint::Path(path) => File::create(path).and_then(|file| write_to(file, notes, false)),
    };

    result.map_err(|source| NotesError::Write {
        endpoint: endpoint.clone(),
        source,
    })?;
    debug!(%endpoint, bytes = notes.len(), "Wrote release notes");
    Ok(())
}
