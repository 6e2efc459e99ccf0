//! Line sources for the REPL.

use std::io::{self, BufRead};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

/// What a line source produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// A line with its terminator removed.
    Line(String),
    /// The user pressed Ctrl-C.
    Interrupted,
    /// Input is exhausted.
    Eof,
}

/// Something the REPL can read command lines from.
pub trait LineSource {
    /// Reads one line, showing `prompt` if the source is interactive.
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult>;

    /// Records a line in history, if the source keeps one.
    fn add_history(&mut self, _line: &str) {}

    /// Called once when the REPL stops.
    fn finish(&mut self) {}
}

/// Interactive input through a rustyline editor.
pub struct EditorSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl EditorSource {
    /// Creates an editor, loading history from `history_path` if given.
    pub fn new(history_path: Option<PathBuf>) -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history_path {
            if path.exists() {
                let _ = editor.load_history(path);
            }
        }
        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            debug!(error = %e, "Failed to add history entry");
        }
    }

    fn finish(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "Failed to save history");
            }
        }
    }
}

/// Non-interactive input from any buffered reader.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<ReadResult> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadResult::Eof);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(ReadResult::Line(line))
    }
}
