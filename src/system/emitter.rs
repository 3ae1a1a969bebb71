// src/system/emitter.rs

use crate::core::paths;
use crate::models::ScriptAction;
use std::borrow::Cow;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write shell output: {0}")]
    Io(#[from] std::io::Error),
    #[error("value cannot be represented as a shell word: {0}")]
    Quote(#[from] shlex::QuoteError),
}

/// Shell-quotes a single value so that embedded whitespace, quotes, `$`,
/// backticks, and semicolons stay inert under `eval`.
pub fn quote(value: &str) -> Result<Cow<'_, str>, EmitError> {
    Ok(shlex::try_quote(value)?)
}

/// Renders logical actions into `;`-terminated shell statements.
///
/// Statements are written in exactly the order the actions were produced;
/// the emitter never reorders or batches. All policy (verbose echoes, path
/// checks, failure aborts) lives upstream in the orchestrator.
#[derive(Debug)]
pub struct ShellEmitter<W: Write> {
    out: W,
}

impl<W: Write> ShellEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit_all(&mut self, actions: &[ScriptAction]) -> Result<(), EmitError> {
        for action in actions {
            self.emit(action)?;
        }
        Ok(())
    }

    pub fn emit(&mut self, action: &ScriptAction) -> Result<(), EmitError> {
        match action {
            ScriptAction::ChangeDirectory(path) => {
                let clean = paths::clean(path);
                let lossy = clean.to_string_lossy();
                let quoted = quote(&lossy)?;
                self.statement(&format!("cd {quoted}"))
            }
            ScriptAction::ExportVar { name, value } => {
                // `export NAME=value` both sets and exports in one statement,
                // so the variable is visible to later run statements and to
                // the parent shell once evaluation completes.
                let quoted = quote(value)?;
                self.statement(&format!("export {name}={quoted}"))
            }
            // The command text is already fully expanded; it is the statement.
            ScriptAction::RunCommand(command) => self.statement(command),
            ScriptAction::Echo(text) => {
                let quoted = quote(text)?;
                self.statement(&format!("echo {quoted}"))
            }
        }
    }

    fn statement(&mut self, text: &str) -> Result<(), EmitError> {
        log::debug!("emit: {}", text);
        writeln!(self.out, "{text};")?;
        Ok(())
    }
}
