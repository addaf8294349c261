use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};
use traycraft_core::{
    application::{ApplicationError, ports::SourceFormatter},
    error::{TraycraftError, TraycraftResult},
};

use super::PlainFormatter;

/// Pipes Rust sources through `rustfmt`. Markdown is normalized by
/// [`PlainFormatter`].
#[derive(Debug, Clone)]
pub struct RustfmtFormatter {
    program: String,
    edition: String,
}

impl RustfmtFormatter {
    pub fn new() -> Self {
        Self {
            program: "rustfmt".into(),
            edition: "2021".into(),
        }
    }

    /// Use a different `rustfmt` binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for RustfmtFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFormatter for RustfmtFormatter {
    #[instrument(skip_all, fields(program = %self.program))]
    fn format_rust(&self, source: &str) -> TraycraftResult<String> {
        let mut child = Command::new(&self.program)
            .args(["--emit", "stdout", "--edition", self.edition.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| failed(format!("cannot run {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| failed(format!("cannot write to {}: {e}", self.program)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| failed(format!("{} did not finish: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let formatted = String::from_utf8(output.stdout)
            .map_err(|e| failed(format!("{} produced invalid UTF-8: {e}", self.program)))?;
        debug!(bytes = formatted.len(), "Rust source formatted");
        Ok(formatted)
    }

    fn format_markdown(&self, source: &str) -> TraycraftResult<String> {
        Ok(PlainFormatter::normalize_markdown(source))
    }
}

fn failed(reason: String) -> TraycraftError {
    ApplicationError::FormattingFailed { reason }.into()
}
