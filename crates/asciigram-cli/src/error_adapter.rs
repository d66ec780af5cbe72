//! Error adapter for converting AsciigramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! type and miette's rich diagnostic formatting used in the CLI. The one
//! diagnosable failure is a malformed arrow label, which is reported with
//! the label text as its source snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use asciigram::AsciigramError;

/// Adapter wrapping an [`AsciigramError`] for miette rendering.
pub struct Reportable<'a>(pub &'a AsciigramError);

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AsciigramError::MalformedArrowLabel(_) => "asciigram::arrow_label",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "arrow labels use `<marker>:<text>`, e.g. `-->:Manage` or `<->: Run against`",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            AsciigramError::MalformedArrowLabel(inner) => {
                Some(inner.label() as &dyn miette::SourceCode)
            }
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match &self.0 {
            AsciigramError::MalformedArrowLabel(inner) => {
                let span = SourceSpan::new(0.into(), inner.label().len());
                Some(Box::new(std::iter::once(
                    LabeledSpan::new_primary_with_span(
                        Some("expected `marker:text`".to_string()),
                        span,
                    ),
                )))
            }
        }
    }
}
