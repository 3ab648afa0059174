// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use minicurso_list_engine::{EngineError, SourceError};

/// Everything that stops a command. Source and engine errors pass through with their own
/// diagnostic codes.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum MinicursoError {
    #[error("🔑 Nenhuma sessao ativa")]
    #[diagnostic(
        code(minicurso::session::not_logged_in),
        help("Run `mc-admin login` first.")
    )]
    NotLoggedIn,

    #[error("⛔ Acesso negado. Usuario {username} nao e administrador.")]
    #[diagnostic(code(minicurso::session::access_denied))]
    AccessDenied { username: String },

    #[error("🔒 {detail}")]
    #[diagnostic(code(minicurso::session::login_failed))]
    LoginFailed { detail: String },

    #[error("📁 Could not access the config folder")]
    #[diagnostic(
        code(minicurso::config::folder_unavailable),
        help("The OS did not report a user config folder (is $HOME set?).")
    )]
    ConfigFolderUnavailable,

    #[error("💾 Could not {action} {path}")]
    #[diagnostic(code(minicurso::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("🔍 {what} nao encontrado")]
    #[diagnostic(code(minicurso::not_found))]
    NotFound { what: String },

    #[error("📝 O formulario tem {count} campo(s) invalido(s)")]
    #[diagnostic(
        code(minicurso::signup::invalid_form),
        help("Fix the fields listed above and submit again.")
    )]
    InvalidForm { count: usize },

    #[error("🚫 {reason}")]
    #[diagnostic(code(minicurso::signup::refused))]
    RegistrationRefused { reason: String },

    #[error("✋ Operacao cancelada")]
    #[diagnostic(code(minicurso::cancelled))]
    Cancelled,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

impl MinicursoError {
    /// Whether the stored session should be dropped because of this error.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, MinicursoError::Source(SourceError::Unauthorized))
    }
}
