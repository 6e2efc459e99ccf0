//! File-backed line storage.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::mode::OpenMode;

/// A single text file opened with an explicit set of capabilities.
///
/// Every read and write is checked against the [`OpenMode`] first; a
/// missing capability or a closed handle is reported as an error and the
/// file is left untouched.
///
/// The handle is closed on [`close`](Self::close) or when the store is
/// dropped, whichever comes first.
#[derive(Debug)]
pub struct LineStore {
    path: PathBuf,
    mode: OpenMode,
    file: Option<File>,
}

impl LineStore {
    /// Creates a store bound to `path` without opening it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: OpenMode::DEFAULT,
            file: None,
        }
    }

    /// Creates a store and opens `path` with `mode`.
    pub fn open(path: impl Into<PathBuf>, mode: OpenMode) -> Result<Self> {
        let mut store = Self::new(path);
        store.open_path(store.path.clone(), mode)?;
        Ok(store)
    }

    /// Opens `path` with `mode`, closing any previously open handle first.
    ///
    /// The path and mode are recorded even if opening fails, leaving the
    /// store closed.
    pub fn open_path(&mut self, path: impl Into<PathBuf>, mode: OpenMode) -> Result<()> {
        self.close();
        self.path = path.into();
        self.mode = mode;

        let mut options = OpenOptions::new();
        options.read(mode.can_read());
        if mode.opens_for_write() {
            options.write(true).create(true);
        }
        options.truncate(mode.contains(OpenMode::TRUNCATE));

        let mut file = options.open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;

        if mode.contains(OpenMode::SEEK_END) {
            file.seek(SeekFrom::End(0))
                .map_err(|source| StoreError::Seek {
                    path: self.path.clone(),
                    source,
                })?;
        }

        debug!(path = %self.path.display(), %mode, "Opened line store");
        self.file = Some(file);
        Ok(())
    }

    /// Reopens the current path with a different mode.
    ///
    /// This is how a caller regains capabilities after [`clear`](Self::clear).
    pub fn reopen_with(&mut self, mode: OpenMode) -> Result<()> {
        let path = self.path.clone();
        self.open_path(path, mode)
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Releases the handle. Safe to call on a closed store.
    pub fn close(&mut self) {
        if self.file.take().is_some() {
            debug!(path = %self.path.display(), "Closed line store");
        }
    }

    /// Forces written data to disk. Does nothing if closed.
    pub fn flush(&mut self) -> Result<()> {
        let writable = self.mode.opens_for_write();
        let path = &self.path;
        if let Some(file) = self.file.as_mut() {
            file.flush().map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;
            if writable {
                file.sync_data().map_err(|source| StoreError::Write {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Writes `text` verbatim.
    ///
    /// With [`OpenMode::APPEND`] the text always lands at end of file;
    /// with only [`OpenMode::WRITE`] it lands at the current cursor.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.require("write", OpenMode::WRITE | OpenMode::APPEND, self.mode.can_write())?;
        let to_end = self.mode.can_append();
        self.write_at(text, to_end, "write")
    }

    /// Writes `text` followed by a newline.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{}\n", text))
    }

    /// Writes each item as its own line, in order.
    pub fn write_lines<I, S>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.write_line(item.as_ref())?;
        }
        Ok(())
    }

    /// Writes `text` at end of file. Needs [`OpenMode::APPEND`]; plain
    /// write access is not enough.
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.require("append", OpenMode::APPEND, self.mode.can_append())?;
        self.write_at(text, true, "append")
    }

    /// Appends every line of the file to `buffer`, each with a trailing
    /// newline.
    ///
    /// Rewinds to the start first. `buffer` is untouched on error.
    pub fn read(&mut self, buffer: &mut String) -> Result<()> {
        let content = self.read_from_start("read")?;
        for line in decode_lines(&content) {
            buffer.push_str(&line);
            buffer.push('\n');
        }
        Ok(())
    }

    /// Returns the whole file, one newline-terminated line at a time.
    pub fn read_all(&mut self) -> Result<String> {
        let mut buffer = String::new();
        self.read(&mut buffer)?;
        Ok(buffer)
    }

    /// Returns every line with its separator stripped.
    ///
    /// A final newline does not produce a trailing empty entry; blank lines
    /// in the middle do. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD rather than failing the read.
    pub fn read_lines(&mut self) -> Result<Vec<String>> {
        let content = self.read_from_start("read lines")?;
        Ok(decode_lines(&content))
    }

    /// Copies every line from the current cursor onward to `out`.
    pub fn echo<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.require("echo", OpenMode::READ, self.mode.can_read())?;
        let (path, file) = self.parts("echo")?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        // Raw bytes go through unchanged.
        for line in split_lines(&content) {
            out.write_all(line)
                .and_then(|()| out.write_all(b"\n"))
                .map_err(|source| StoreError::Echo {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Returns the file length in bytes, leaving the cursor where it was.
    pub fn size(&mut self) -> Result<u64> {
        let (path, file) = self.parts("size")?;
        let seek_err = |source| StoreError::Seek {
            path: path.to_path_buf(),
            source,
        };

        let current = file.stream_position().map_err(seek_err)?;
        let end = file.seek(SeekFrom::End(0)).map_err(seek_err)?;
        file.seek(SeekFrom::Start(current)).map_err(seek_err)?;
        Ok(end)
    }

    /// Truncates the file to zero length.
    ///
    /// Reopens the file as `WRITE | TRUNCATE` (keeping [`OpenMode::BINARY`]
    /// if it was set), and that becomes the store's mode: read and append
    /// access are gone until [`reopen_with`](Self::reopen_with) is called.
    pub fn clear(&mut self) -> Result<()> {
        self.require("clear", OpenMode::WRITE | OpenMode::APPEND, self.mode.can_write())?;

        let truncate_mode = (self.mode & OpenMode::BINARY) | OpenMode::WRITE | OpenMode::TRUNCATE;
        info!(
            path = %self.path.display(),
            from = %self.mode,
            to = %truncate_mode,
            "Clearing line store"
        );

        self.reopen_with(truncate_mode)
    }

    /// Moves the cursor to the start of the file.
    ///
    /// Files carry no sticky error or end-of-file state, so there is
    /// nothing to reset beyond the position.
    pub fn seek_to_start(&mut self) -> Result<u64> {
        self.seek(SeekFrom::Start(0), "seek")
    }

    /// Moves the cursor to the end of the file and returns the new position.
    pub fn seek_to_end(&mut self) -> Result<u64> {
        self.seek(SeekFrom::End(0), "seek")
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks the handle is open, then that `allowed` holds.
    fn require(&self, operation: &'static str, required: OpenMode, allowed: bool) -> Result<()> {
        if self.file.is_none() {
            return Err(StoreError::NotOpen {
                path: self.path.clone(),
                operation,
            });
        }
        if !allowed {
            return Err(StoreError::CapabilityDenied {
                path: self.path.clone(),
                operation,
                required,
                mode: self.mode,
            });
        }
        Ok(())
    }

    fn parts(&mut self, operation: &'static str) -> Result<(&Path, &mut File)> {
        match self.file.as_mut() {
            Some(file) => Ok((self.path.as_path(), file)),
            None => Err(StoreError::NotOpen {
                path: self.path.clone(),
                operation,
            }),
        }
    }

    fn seek(&mut self, pos: SeekFrom, operation: &'static str) -> Result<u64> {
        let (path, file) = self.parts(operation)?;
        file.seek(pos).map_err(|source| StoreError::Seek {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_at(&mut self, text: &str, to_end: bool, operation: &'static str) -> Result<()> {
        let (path, file) = self.parts(operation)?;
        if to_end {
            file.seek(SeekFrom::End(0))
                .map_err(|source| StoreError::Seek {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        file.write_all(text.as_bytes())
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read_from_start(&mut self, operation: &'static str) -> Result<Vec<u8>> {
        self.require(operation, OpenMode::READ, self.mode.can_read())?;
        self.seek(SeekFrom::Start(0), operation)?;

        let (path, file) = self.parts(operation)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(content)
    }
}

/// Splits on `\n`, dropping a `\r` before it and the empty tail after a
/// final newline.
fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let lines = if content.is_empty() {
        None
    } else {
        Some(body.split(|&b| b == b'\n'))
    };
    lines
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

fn decode_lines(content: &[u8]) -> Vec<String> {
    split_lines(content)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect()
}

impl Drop for LineStore {
    fn drop(&mut self) {
        self.close();
    }
}
