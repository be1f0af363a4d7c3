//! Diagnostic module - Error reporting infrastructure.
//!
//! Phases never print or abort when they find a problem. They build a
//! [`Diagnostic`] and hand it to a caller-owned [`Handler`], then carry on.
//! The caller decides afterwards (or, with an emitter, as it happens) what
//! the accumulated errors mean for the run.
//!
//! # Examples
//!
//! ```
//! use octo_util::diagnostic::{DiagnosticBuilder, Handler};
//! use octo_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .span(Span::new(0, 1, 1))
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{diag}");
//!     }
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::error::{DiagnosticError, DiagnosticResult};
use crate::Span;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// A line-tagged error message
///
/// Displays in the front end's report format:
///
/// ```
/// use octo_util::{Diagnostic, Span};
///
/// let diag = Diagnostic::error("Unterminated string.", Span::new(0, 4, 3));
/// assert_eq!(diag.to_string(), "[line 3] Error: Unterminated string.");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Line the error is reported on (1-based)
    pub line: u32,
    /// Source location of the offending text
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic reported on the span's line
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            line: span.line,
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

type Emitter = Box<dyn Fn(&Diagnostic)>;

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` is the "had error" state of a run. It is owned by the
/// caller and lent to each phase; every diagnostic is recorded in emission
/// order. An optional emitter sees each diagnostic as it is reported, which
/// is how a host prints errors without the phases knowing about stderr.
///
/// # Examples
///
/// ```
/// use octo_util::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Unexpected character.", Span::DUMMY));
///
/// assert_eq!(handler.error_count(), 1);
/// assert!(handler.abort_if_errors().is_err());
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
    /// Called with every diagnostic before it is stored
    emitter: Option<Emitter>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
            emitter: None,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            panic_on_error: true,
            ..Self::new()
        }
    }

    /// Create a handler that forwards every diagnostic to `emitter`
    ///
    /// Diagnostics are still collected, so counts and
    /// [`abort_if_errors`](Self::abort_if_errors) keep working.
    ///
    /// ```
    /// use octo_util::{Diagnostic, Handler, Span};
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let printed = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&printed);
    /// let handler = Handler::with_emitter(move |d| sink.borrow_mut().push(d.to_string()));
    ///
    /// handler.emit_diagnostic(Diagnostic::error("Unexpected character.", Span::point(0, 1)));
    /// assert_eq!(*printed.borrow(), vec!["[line 1] Error: Unexpected character."]);
    /// ```
    pub fn with_emitter(emitter: impl Fn(&Diagnostic) + 'static) -> Self {
        Self {
            emitter: Some(Box::new(emitter)),
            ..Self::new()
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error {
            panic!("Diagnostic error: {}", diagnostic);
        }
        if let Some(emitter) = &self.emitter {
            emitter(&diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Report an error on `line` with no further location
    ///
    /// This is the plain `(line, message)` sink; phases that know the span
    /// of the offending text should use [`DiagnosticBuilder`] instead.
    pub fn error(&self, line: u32, message: impl Into<String>) {
        DiagnosticBuilder::error(message).line(line).emit(self);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Clear all diagnostics
    ///
    /// An interactive host calls this between inputs so one bad line does
    /// not poison the next.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }

    /// Turn the accumulated state into a `Result`
    ///
    /// Returns [`DiagnosticError::ErrorsEmitted`] if anything was reported.
    pub fn abort_if_errors(&self) -> DiagnosticResult<()> {
        match self.error_count() {
            0 => Ok(()),
            count => Err(DiagnosticError::ErrorsEmitted { count }),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow())
            .field("panic_on_error", &self.panic_on_error)
            .field("emitter", &self.emitter.is_some())
            .finish()
    }
}
