//! CLI output: the console streams, error mapping and exit codes.
//!
//! stdout carries data (values, keys, JSON payloads); stderr carries everything else. In JSON
//! mode the human-oriented writes are dropped so that stdout holds exactly one JSON value.

use crate::error::ApiError;
use crate::state::PageSink;
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
/// Operator closed a prompt.
pub const EXIT_CANCELLED: i32 = 2;
pub const EXIT_JSON_ERROR: i32 = 2;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}

pub fn exit_code(e: &ApiError, json: bool) -> i32 {
    if e.is_cancelled() {
        EXIT_CANCELLED
    } else if json {
        EXIT_JSON_ERROR
    } else {
        EXIT_ERROR
    }
}

type Stream = Box<dyn Write + Send>;

pub struct Console {
    out: Mutex<Stream>,
    err: Mutex<Stream>,
    json: bool,
    color: bool,
}

impl Console {
    pub fn new(out: Stream, err: Stream, json: bool, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
            json,
            color,
        }
    }

    /// Process stdout/stderr. Color follows the stderr terminal and `NO_COLOR`.
    pub fn stdio(json: bool) -> Self {
        let color = std::env::var_os("NO_COLOR").is_none()
            && dialoguer::console::colors_enabled_stderr();
        Self::new(
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
            json,
            color,
        )
    }

    /// Console writing into memory buffers, without color.
    pub fn captured(json: bool) -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        let console = Self::new(
            Box::new(captured.out.clone()),
            Box::new(captured.err.clone()),
            json,
            false,
        );
        (console, captured)
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Data to stdout, as is.
    pub fn out(&self, text: &str) -> Result<(), ApiError> {
        if self.json {
            return Ok(());
        }
        let mut out = self.out.lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// One line of data to stdout.
    pub fn line(&self, text: &str) -> Result<(), ApiError> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out.lock(), "{}", text)?;
        Ok(())
    }

    /// Secondary information to stderr, dimmed.
    pub fn diag(&self, text: &str) -> Result<(), ApiError> {
        if self.json {
            return Ok(());
        }
        if self.color {
            write!(self.err.lock(), "{}", text.dimmed())?;
        } else {
            write!(self.err.lock(), "{}", text)?;
        }
        Ok(())
    }

    /// Non-fatal warning to stderr, every line prefixed with `> `.
    pub fn warn(&self, message: &str) -> Result<(), ApiError> {
        if self.json {
            return Ok(());
        }
        let text = format!("> Warning: {}", message.replace('\n', "\n> "));
        if self.color {
            writeln!(self.err.lock(), "{}", text.yellow())?;
        } else {
            writeln!(self.err.lock(), "{}", text)?;
        }
        Ok(())
    }

    /// The single JSON result of a command; written in JSON mode only.
    pub fn json_result(&self, value: &Value) -> Result<(), ApiError> {
        if !self.json {
            return Ok(());
        }
        let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
        writeln!(self.out.lock(), "{}", rendered)?;
        Ok(())
    }

    /// Report a failed command on stderr and return the process exit code.
    ///
    /// Cancellation prints nothing. JSON mode writes `{"error": message}`.
    pub fn report_error(&self, e: &ApiError) -> i32 {
        let code = exit_code(e, self.json);
        if e.is_cancelled() {
            return code;
        }

        let message = map_error(e);
        let mut err = self.err.lock();
        let _ = if self.json {
            writeln!(err, "{}", serde_json::json!({ "error": message }))
        } else if self.color {
            writeln!(err, "{}", format!("Error: {}", message).red())
        } else {
            writeln!(err, "Error: {}", message)
        };
        code
    }
}

impl PageSink for Console {
    fn emit_page(&self, keys: &[String]) -> Result<(), ApiError> {
        if self.json {
            return Ok(());
        }
        let mut out = self.out.lock();
        for key in keys {
            writeln!(out, "{}", key)?;
        }
        out.flush()?;
        Ok(())
    }

    fn emit_warning(&self, message: &str) -> Result<(), ApiError> {
        self.warn(message)
    }
}

/// Cloneable in-memory writer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Both streams of a captured console.
#[derive(Clone, Default)]
pub struct CapturedOutput {
    pub out: SharedBuffer,
    pub err: SharedBuffer,
}

impl CapturedOutput {
    pub fn stdout(&self) -> String {
        self.out.contents()
    }

    pub fn stderr(&self) -> String {
        self.err.contents()
    }
}
