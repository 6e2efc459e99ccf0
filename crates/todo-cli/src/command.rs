//! Single-letter command parsing.

use crate::error::{Result, SessionError};

/// A parsed REPL command.
///
/// Dispatch is on the lowercased first character of the line. For `a` and
/// `r` the argument is everything after the first two characters, so
/// `a Buy milk` adds `Buy milk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a todo
    Add(String),
    /// Remove the todo at an index
    Remove(i64),
    /// List todos
    List,
    /// Save to the store
    Save,
    /// Show help
    Help,
    /// Save and exit
    Quit,
}

impl Command {
    /// Parses one line of input.
    ///
    /// An empty line is [`SessionError::EmptyPrompt`] and is never
    /// dispatched. A remove argument that is not an integer is
    /// [`SessionError::ParseIndex`].
    pub fn parse(input: &str) -> Result<Self> {
        let mut chars = input.chars();
        let first = chars.next().ok_or(SessionError::EmptyPrompt)?;
        chars.next();
        let rest = chars.as_str();

        match first.to_ascii_lowercase() {
            'a' => Ok(Command::Add(rest.to_string())),
            'r' => rest
                .trim()
                .parse()
                .map(Command::Remove)
                .map_err(|_| SessionError::ParseIndex(rest.to_string())),
            'l' => Ok(Command::List),
            's' => Ok(Command::Save),
            'h' => Ok(Command::Help),
            'q' => Ok(Command::Quit),
            other => Err(SessionError::UnknownCommand(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("a Buy milk").unwrap(),
            Command::Add("Buy milk".to_string())
        );
        assert_eq!(
            Command::parse("A  padded").unwrap(),
            Command::Add(" padded".to_string())
        );
    }

    #[test]
    fn test_parse_add_without_text() {
        assert_eq!(Command::parse("a").unwrap(), Command::Add(String::new()));
        assert_eq!(Command::parse("a ").unwrap(), Command::Add(String::new()));
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(Command::parse("r 2").unwrap(), Command::Remove(2));
        assert_eq!(Command::parse("R 0").unwrap(), Command::Remove(0));
        assert_eq!(Command::parse("r -1").unwrap(), Command::Remove(-1));
    }

    #[test]
    fn test_parse_remove_bad_index() {
        assert!(matches!(
            Command::parse("r two"),
            Err(SessionError::ParseIndex(raw)) if raw == "two"
        ));
        assert!(matches!(Command::parse("r"), Err(SessionError::ParseIndex(_))));
    }

    #[test]
    fn test_parse_first_letter_only() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("L").unwrap(), Command::List);
        assert_eq!(Command::parse("save").unwrap(), Command::Save);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("Q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Command::parse(""), Err(SessionError::EmptyPrompt)));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Command::parse("x marks"),
            Err(SessionError::UnknownCommand('x'))
        ));
        assert!(matches!(
            Command::parse(" a leading space"),
            Err(SessionError::UnknownCommand(' '))
        ));
    }

    #[test]
    fn test_parse_multibyte_argument() {
        assert_eq!(
            Command::parse("a café").unwrap(),
            Command::Add("café".to_string())
        );
    }
}
