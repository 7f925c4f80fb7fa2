use std::io::{self, BufRead, Write};

use crate::{error::Error, interpret, interpreter::store::Store};

/// The prompt printed before each line in interactive sessions.
pub const DEFAULT_PROMPT: &str = " enter expression > ";

/// Settings for one run of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Text written before each line is read, or `None` for no prompt.
    pub prompt: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { prompt: Some(DEFAULT_PROMPT.to_string()) }
    }
}

/// Counts of what happened during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines that were processed.
    pub lines_run:    usize,
    /// Lines that ended in an error.
    pub lines_failed: usize,
}

/// A sequence of lines sharing one variable store.
#[derive(Debug, Default)]
pub struct Session {
    store: Store,
}

impl Session {
    /// Starts a session with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one line against the session store.
    ///
    /// # Example
    /// ```
    /// use minicalc::repl::Session;
    ///
    /// let mut session = Session::new();
    /// session.run_line("x = 1; x = 2;").unwrap();
    ///
    /// assert_eq!(session.store().to_string(), "x = 2");
    /// ```
    pub fn run_line(&mut self, line: &str) -> Result<Option<i64>, Error> {
        interpret(line, &mut self.store)
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

/// Runs the shell over `input` until it is exhausted.
///
/// Blank lines are skipped. After each successful line, every variable in the
/// store is written to `output` as `name = value`. A failed line writes
/// `error`, is logged with its full cause, and the session carries on with
/// the store as the line left it. A line that is not valid UTF-8 counts as a
/// failed line.
///
/// # Errors
/// Returns an I/O error if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use minicalc::repl::{SessionOptions, run_session};
///
/// let input = "x = 11;\ny = x + 1;\ny = z + 1;\n";
/// let mut output = Vec::new();
///
/// let summary = run_session(input.as_bytes(), &mut output, &SessionOptions { prompt: None }).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "x = 11\nx = 11\ny = 12\nerror\n");
/// assert_eq!(summary.lines_failed, 1);
/// ```
pub fn run_session<R, W>(mut input: R,
                         output: &mut W,
                         options: &SessionOptions)
                         -> io::Result<SessionSummary>
    where R: BufRead,
          W: Write
{
    let mut session = Session::new();
    let mut summary = SessionSummary::default();
    let mut line = Vec::new();

    loop {
        if let Some(prompt) = &options.prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let source = match std::str::from_utf8(&line) {
            Ok(text) => text.trim_end_matches(['\n', '\r']),
            Err(e) => {
                summary.lines_run += 1;
                summary.lines_failed += 1;
                tracing::warn!(error = %e, "line is not valid UTF-8");
                writeln!(output, "error")?;
                continue;
            },
        };
        if source.trim().is_empty() {
            continue;
        }

        summary.lines_run += 1;
        match session.run_line(source) {
            Ok(value) => {
                tracing::debug!(line = source, ?value, "line succeeded");
                if !session.store().is_empty() {
                    writeln!(output, "{}", session.store())?;
                }
            },
            Err(e) => {
                summary.lines_failed += 1;
                tracing::warn!(line = source, error = %e, "line failed");
                writeln!(output, "error")?;
            },
        }
    }

    Ok(summary)
}
