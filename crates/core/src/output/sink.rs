//! Scoped append handle for the output document.

use super::error::{OutputError, OutputResult};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// An output document opened for appending.
///
/// The file handle is released when the sink is dropped, so an early
/// return on an error path never leaks it. Call [`MarkdownSink::finish`] on
/// the success path to surface flush errors instead of ignoring them in
/// `Drop`.
#[derive(Debug)]
pub struct MarkdownSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl MarkdownSink {
    /// Opens `path` for appending, creating it if it does not exist.
    pub fn open_append(path: &Path) -> OutputResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| OutputError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `text` after everything already in the document.
    pub fn append(&mut self, text: &str) -> OutputResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Flushes buffered text and closes the document.
    pub fn finish(mut self) -> OutputResult<()> {
        self.writer.flush().map_err(|source| OutputError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
