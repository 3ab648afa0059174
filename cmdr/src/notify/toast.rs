// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One line notifications. Command output (tables, cards, event info) goes to stdout and
//! toasts go to stderr, so `mc-admin registrants list > out.txt` keeps only the data.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{dim, emphasis, error, normal, sanitize, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    #[rustfmt::skip]
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            ToastKind::Success => "Sucesso",
            ToastKind::Error =>   "Erro",
            ToastKind::Warning => "Atencao",
            ToastKind::Info =>    "Informacao",
        }
    }

    #[rustfmt::skip]
    #[must_use]
    pub fn sigil(self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error =>   "✖",
            ToastKind::Warning => "⚠",
            ToastKind::Info =>    "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self { Self::new(ToastKind::Success, message) }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self { Self::new(ToastKind::Error, message) }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self { Self::new(ToastKind::Warning, message) }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self { Self::new(ToastKind::Info, message) }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.kind.default_title())
    }

    /// Writes to stderr.
    pub fn show(&self) {
        // % is Display, ? is Debug.
        tracing::debug!(message = "toast", kind = ?self.kind, text = %self.message);
        eprintln!("{self}");
    }
}

/// `✔ Sucesso: Modulo salvo com sucesso!`. The message may carry backend text, it is
/// sanitized.
impl Display for Toast {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let head = format!("{} {}", self.kind.sigil(), self.title());
        let head = match self.kind {
            ToastKind::Success => emphasis(head),
            ToastKind::Error => error(head),
            ToastKind::Warning => warning(head),
            ToastKind::Info => normal(head),
        };
        write!(f, "{head}{} {}", dim(":"), normal(sanitize(&self.message)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::strip_styles;

    #[test_case(ToastKind::Success, "✔ Sucesso: ok")]
    #[test_case(ToastKind::Error, "✖ Erro: ok")]
    #[test_case(ToastKind::Warning, "⚠ Atencao: ok")]
    #[test_case(ToastKind::Info, "ℹ Informacao: ok")]
    fn test_default_titles(kind: ToastKind, expected: &str) {
        assert_eq!(strip_styles(&Toast::new(kind, "ok").to_string()), expected);
    }

    #[test]
    fn test_custom_title_and_sanitized_message() {
        let it = Toast::error("nome \u{1b}[2Jinvalido").with_title("Falha");
        assert_eq!(strip_styles(&it.to_string()), "✖ Falha: nome invalido");
    }
}
