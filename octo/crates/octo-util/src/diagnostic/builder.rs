//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// Builder for [`Diagnostic`] values
///
/// # Examples
///
/// ```
/// use octo_util::{DiagnosticBuilder, DiagnosticCode, Span};
///
/// let diag = DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 13, 1))
///     .note("string literals may span several lines")
///     .build();
///
/// assert_eq!(diag.line, 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    line: Option<u32>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            line: None,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    ///
    /// Unless overridden with [`line`](Self::line), the diagnostic is
    /// reported on the span's line.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Report the diagnostic on `line` instead of the span's line.
    ///
    /// A lexer reports some errors on the line the cursor has reached,
    /// which for multi-line constructs is past the line the span starts on.
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            line: self.line.unwrap_or(self.span.line),
            span: self.span,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// ```
    /// use octo_util::{DiagnosticBuilder, Handler, Span};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong")
    ///     .span(Span::DUMMY)
    ///     .emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
