//! Interactive REPL (Read-Eval-Print Loop) for the todo manager.

use std::io::{self, Write};

use todo_models::Notice;
use tracing::{debug, error, info};

use crate::command::Command;
use crate::error::SessionError;
use crate::input::{LineSource, ReadResult};
use crate::render::Renderer;
use crate::session::TodoSession;

/// Prompt shown before each command.
pub const PROMPT: &str = "> ";

/// Whether the loop should keep going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// REPL state
pub struct Repl<S, W> {
    source: S,
    session: TodoSession,
    renderer: Renderer<W>,
}

impl<S: LineSource, W: Write> Repl<S, W> {
    pub fn new(source: S, session: TodoSession, renderer: Renderer<W>) -> Self {
        Self {
            source,
            session,
            renderer,
        }
    }

    /// Runs the REPL loop until `q` or end of input.
    ///
    /// End of input and input errors save the list the same way `q` does.
    pub fn run(&mut self) -> io::Result<()> {
        self.renderer.banner()?;

        let result = loop {
            match self.source.read_line(PROMPT) {
                Ok(ReadResult::Line(line)) => match self.handle_line(&line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break Ok(()),
                    Err(e) => break Err(e),
                },
                Ok(ReadResult::Interrupted) => {
                    debug!("Interrupted, clearing line");
                }
                Ok(ReadResult::Eof) => {
                    info!("End of input, saving and exiting");
                    break self.quit().map(|_| ());
                }
                Err(e) => {
                    error!(error = %e, "Failed to read input");
                    if let Err(save_err) = self.quit() {
                        error!(error = %save_err, "Failed to report quit");
                    }
                    break Err(e);
                }
            }
        };

        self.source.finish();
        result
    }

    /// Parses and executes one line of input.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if !line.is_empty() {
            self.source.add_history(line);
        }

        match Command::parse(line) {
            Ok(cmd) => {
                debug!(?cmd, "Parsed command");
                self.execute(cmd)
            }
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, cmd: Command) -> io::Result<Flow> {
        match cmd {
            Command::Add(text) => {
                match self.session.add_todo(&text) {
                    Ok(_) => self.renderer.notice(&Notice::success("TODO ADDED"))?,
                    Err(e) => self.report(&e)?,
                }
                Ok(Flow::Continue)
            }

            Command::Remove(index) => {
                match self.session.remove_todo(index) {
                    Ok(_) => self.renderer.notice(&Notice::success("TODO REMOVED"))?,
                    Err(e) => self.report(&e)?,
                }
                Ok(Flow::Continue)
            }

            Command::List => {
                self.renderer.listing(&self.session.list_todo())?;
                Ok(Flow::Continue)
            }

            Command::Save => {
                match self.session.save() {
                    Ok(()) => self.renderer.notice(&Notice::success("SAVED"))?,
                    Err(e) => self.report(&e)?,
                }
                Ok(Flow::Continue)
            }

            Command::Help => {
                self.renderer.help()?;
                Ok(Flow::Continue)
            }

            Command::Quit => self.quit(),
        }
    }

    pub fn session(&self) -> &TodoSession {
        &self.session
    }

    /// Consumes the REPL, returning the session and the output stream.
    pub fn into_parts(self) -> (TodoSession, W) {
        (self.session, self.renderer.into_inner())
    }

    /// Saves and says goodbye. A failed save is reported, not retried.
    fn quit(&mut self) -> io::Result<Flow> {
        match self.session.save() {
            Ok(()) => self.renderer.notice(&Notice::success("GOODBYE"))?,
            Err(e) => {
                self.report(&e)?;
                self.renderer.notice(&Notice::info("GOODBYE"))?;
            }
        }
        Ok(Flow::Quit)
    }

    fn report(&mut self, err: &SessionError) -> io::Result<()> {
        debug!(error = %err, "Command failed");
        self.renderer.notice(&err.to_notice())
    }
}
