//! Miette-based error diagnostics for CLI error presentation.
//!
//! The struct fields are read by miette's derive macros to render the
//! configuration file with the offending span underlined.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(envios::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: miette::NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        name: impl AsRef<str>,
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: miette::NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build a diagnostic from a TOML parse error in `src`.
    ///
    /// Errors without a span point at the start of the file.
    #[must_use]
    pub fn from_toml(name: impl AsRef<str>, src: &str, err: &toml::de::Error) -> Self {
        let (offset, len) = err
            .span()
            .map_or((0, 0), |span| (span.start, span.end.saturating_sub(span.start)));
        Self::new(name, err.message().trim().to_string(), src, offset, len)
            .with_help("run `envios config init --force` to regenerate a documented template")
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_error_span_points_at_bad_value() {
        let src = "[quote]\nrefresh_interval_secs = soon\n";
        let err = toml::from_str::<toml::Table>(src).unwrap_err();
        let diagnostic = ConfigDiagnostic::from_toml("config.toml", src, &err);

        assert!(!diagnostic.message.is_empty());
        assert!(diagnostic.help.is_some());
        assert!(diagnostic.span.offset() > 0);
    }
}
