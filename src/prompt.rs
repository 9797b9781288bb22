//! Line-oriented input sources for the shell
//!
//! [`TerminalPrompt`] is used when stdin is attached to a terminal and renders
//! prompts through `dialoguer`. [`LinePrompt`] reads plain lines from any
//! `BufRead`, which covers piped stdin and in-memory test sessions.

use dialoguer::Input;
use std::io::{self, BufRead, Write};

use crate::core::validation::strip_line_ending;
use crate::error::{Result, UmsError};

pub trait Prompt {
    /// Shows `prompt` and reads one line without its line ending.
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}: ")
            .and_then(|_| self.writer.flush())
            .map_err(|e| UmsError::io_error("writing prompt", e))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| UmsError::io_error("reading input", e))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
