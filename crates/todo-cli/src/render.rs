//! Rendering of notices and listings to an output stream.

use std::io::{self, Write};

use serde::Serialize;
use todo_models::{Entry, Notice};

use crate::session::Listing;

/// Output format for REPL responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[SUCCESS] TODO ADDED` style lines
    #[default]
    Text,
    /// One JSON object per response line
    Json,
}

const OPTIONS: &str = "OPTIONS:
 - [A]DD TODO <TEXT>
 - [L]IST TODO
 - [R]EMOVE TODO <IDX>
 - [S]AVE
 - [H]ELP
 - [Q]UIT
";

#[derive(Serialize)]
struct ListingJson<'a> {
    todos: &'a [Entry<'a>],
}

/// Writes REPL responses in the configured [`OutputFormat`].
pub struct Renderer<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Writes the startup banner followed by the options.
    pub fn banner(&mut self) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "AMCTD")?;
                writeln!(self.out, "=====")?;
                self.help()
            }
            OutputFormat::Json => Ok(()),
        }
    }

    pub fn help(&mut self) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", OPTIONS),
            OutputFormat::Json => self.json_line(&serde_json::json!({ "help": OPTIONS })),
        }
    }

    pub fn notice(&mut self, notice: &Notice) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", notice),
            OutputFormat::Json => self.json_line(notice),
        }
    }

    /// Writes a listing, or a "no todos" warning if it is empty.
    pub fn listing(&mut self, listing: &Listing<'_>) -> io::Result<()> {
        match listing {
            Listing::Empty => self.notice(&Notice::warn("NO TODOS")),
            Listing::Entries(entries) => match self.format {
                OutputFormat::Text => {
                    for entry in entries {
                        writeln!(self.out, "[{}] {}", entry.index, entry.text)?;
                    }
                    Ok(())
                }
                OutputFormat::Json => self.json_line(&ListingJson { todos: entries }),
            },
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn json_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_models::TodoList;

    fn render(format: OutputFormat, f: impl FnOnce(&mut Renderer<Vec<u8>>)) -> String {
        let mut renderer = Renderer::new(Vec::new(), format);
        f(&mut renderer);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_text_notice() {
        let out = render(OutputFormat::Text, |r| {
            r.notice(&Notice::success("TODO ADDED")).unwrap()
        });
        assert_eq!(out, "[SUCCESS] TODO ADDED\n");
    }

    #[test]
    fn test_text_listing() {
        let list = TodoList::from_items(vec!["Buy milk".into(), "Walk dog".into()]);
        let listing = Listing::Entries(list.entries().collect());

        let out = render(OutputFormat::Text, |r| r.listing(&listing).unwrap());

        assert_eq!(out, "[0] Buy milk\n[1] Walk dog\n");
    }

    #[test]
    fn test_empty_listing_warns() {
        let out = render(OutputFormat::Text, |r| r.listing(&Listing::Empty).unwrap());
        assert_eq!(out, "[WARN] NO TODOS\n");
    }

    #[test]
    fn test_json_notice() {
        let out = render(OutputFormat::Json, |r| {
            r.notice(&Notice::error("UNKNOWN COMMAND")).unwrap()
        });
        assert_eq!(out, "{\"level\":\"error\",\"message\":\"UNKNOWN COMMAND\"}\n");
    }

    #[test]
    fn test_json_listing() {
        let list = TodoList::from_items(vec!["Walk dog".into()]);
        let listing = Listing::Entries(list.entries().collect());

        let out = render(OutputFormat::Json, |r| r.listing(&listing).unwrap());

        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["todos"][0]["index"], 0);
        assert_eq!(value["todos"][0]["text"], "Walk dog");
    }

    #[test]
    fn test_banner_includes_options() {
        let out = render(OutputFormat::Text, |r| r.banner().unwrap());
        assert!(out.starts_with("AMCTD\n=====\nOPTIONS:\n"));
        assert!(out.contains(" - [S]AVE\n"));
        assert!(out.contains(" - [Q]UIT\n"));
    }

    #[test]
    fn test_json_banner_is_silent() {
        let out = render(OutputFormat::Json, |r| r.banner().unwrap());
        assert!(out.is_empty());
    }
}
