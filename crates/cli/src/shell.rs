//! # Interactive shell
//!
//! [`Session`] owns the live [`NetworkDirectory`] and turns one input line into
//! a [`Response`]. It is synchronous and does no I/O apart from network files.
//! [`Shell`] drives a session from any async line source and writes replies to
//! any async sink. `main` wires it to stdin/stdout. Tests use in-memory buffers.
//!
//! By default malformed commands and lookup misses are silently ignored. In
//! strict mode both produce an `Error: ...` line. File errors from
//! `network-save` and `network-load` are always reported, and a failed load
//! keeps the current network.

use std::future::Future;
use std::io;
use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, warn};
use trunkline_core::{NetworkDirectory, PhoneAddress};

use crate::command::{Command, CommandError};

/// What to print after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing to print
    Silent,
    /// Text to print verbatim. Lines are newline-terminated.
    Output(String),
    /// Stop reading commands
    Quit,
}

impl Response {
    fn line(text: impl AsRef<str>) -> Self {
        Response::Output(format!("{}\n", text.as_ref()))
    }

    fn error(text: impl std::fmt::Display) -> Self {
        Response::line(format!("Error: {}", text))
    }
}

/// Command dispatch over a live directory
#[derive(Debug, Default)]
pub struct Session {
    directory: NetworkDirectory,
    strict: bool,
}

impl Session {
    pub fn new(strict: bool) -> Self {
        Self {
            directory: NetworkDirectory::new(),
            strict,
        }
    }

    /// Start from an already loaded directory
    pub fn with_directory(directory: NetworkDirectory, strict: bool) -> Self {
        Self { directory, strict }
    }

    pub fn directory(&self) -> &NetworkDirectory {
        &self.directory
    }

    /// Replace the directory from a network file, keeping the current one on error
    pub fn load(&mut self, path: &Path) -> trunkline_core::Result<()> {
        self.directory = NetworkDirectory::load(path)?;
        Ok(())
    }

    /// Decode and run one input line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => Response::Silent,
            Err(e) => {
                debug!(line, error = %e, "ignoring malformed command");
                self.miss(e)
            }
        }
    }

    /// Run one decoded command
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::SwitchAdd(area) => {
                self.directory.add_switchboard(area);
                Response::Silent
            }
            Command::SwitchConnect(a, b) => {
                if self.directory.connect_switchboards(a, b) {
                    Response::Silent
                } else {
                    let missing = if self.directory.contains(a) { b } else { a };
                    self.miss(format!("no switchboard with area code {}", missing))
                }
            }
            Command::PhoneAdd(address) => {
                if self.directory.add_phone(address.area_code, address.local_number) {
                    Response::Silent
                } else {
                    self.miss(format!("no switchboard with area code {}", address.area_code))
                }
            }
            Command::NetworkSave(path) => match self.directory.save(&path) {
                Ok(()) => Response::line(format!("Network saved to {}.", path.display())),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "save failed");
                    Response::error(e)
                }
            },
            Command::NetworkLoad(path) => match self.load(&path) {
                Ok(()) => Response::line(format!("Network loaded from {}.", path.display())),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "load failed, keeping current network");
                    Response::error(e)
                }
            },
            Command::StartCall(from, to) => {
                Response::line(self.directory.start_call(from, to).to_string())
            }
            Command::EndCall(address) => self.end_call(address),
            Command::Display => Response::Output(self.directory.to_string()),
            Command::Quit => Response::Quit,
        }
    }

    fn end_call(&mut self, address: PhoneAddress) -> Response {
        if self.directory.end_call(address) {
            Response::Silent
        } else {
            self.miss(format!("no phone {}", address))
        }
    }

    /// Silent by default, reported in strict mode
    fn miss(&self, reason: impl std::fmt::Display) -> Response {
        if self.strict {
            Response::error(reason)
        } else {
            Response::Silent
        }
    }
}

/// Line-oriented driver for a [`Session`]
pub struct Shell<R, W> {
    lines: Lines<R>,
    writer: W,
    session: Session,
    prompt: Option<String>,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, session: Session) -> Self {
        Self {
            lines: reader.lines(),
            writer,
            session,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each command
    pub fn with_prompt(mut self, prompt: Option<&str>) -> Self {
        self.prompt = prompt.map(str::to_string);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.writer)
    }

    /// Run until `quit` or end of input
    pub async fn run(&mut self) -> io::Result<()> {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Run until `quit`, end of input, or `shutdown` completes
    pub async fn run_until<F>(&mut self, shutdown: F) -> io::Result<()>
    where
        F: Future,
    {
        tokio::pin!(shutdown);

        loop {
            if let Some(prompt) = &self.prompt {
                self.writer.write_all(prompt.as_bytes()).await?;
                self.writer.flush().await?;
            }

            let line = tokio::select! {
                line = self.lines.next_line() => line?,
                _ = &mut shutdown => {
                    info!("shutdown requested");
                    break;
                }
            };
            let Some(line) = line else {
                debug!("end of input");
                break;
            };

            match self.session.handle_line(&line) {
                Response::Silent => {}
                Response::Output(text) => {
                    self.writer.write_all(text.as_bytes()).await?;
                }
                Response::Quit => break,
            }
            self.writer.flush().await?;
        }

        self.writer.flush().await
    }
}
