// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Failures of the data provider. Every one of these is caught at the boundary and turned
/// into a notification, none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SourceError {
    #[error("🔌 Could not reach the server: {message}")]
    #[diagnostic(
        code(minicurso::source::transport),
        help("Check that the API is running and that `--api-url` points to it.")
    )]
    Transport { message: String },

    #[error("🧩 Unexpected response from the server: {message}")]
    #[diagnostic(code(minicurso::source::decode))]
    Decode { message: String },

    #[error("🔍 Not found: {what}")]
    #[diagnostic(
        code(minicurso::source::not_found),
        help("It was probably removed already. Reload the list.")
    )]
    NotFound { what: String },

    #[error("🔒 Session expired")]
    #[diagnostic(
        code(minicurso::source::unauthorized),
        help("Run `mc-admin login` again.")
    )]
    Unauthorized,

    #[error("⚔️ Conflict: {detail}")]
    #[diagnostic(code(minicurso::source::conflict))]
    Conflict { detail: String },

    #[error("❌ Request rejected ({status}): {detail}")]
    #[diagnostic(code(minicurso::source::rejected))]
    Rejected { status: u16, detail: String },
}

/// Caller supplied parameters that are malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum EngineError {
    #[error("📏 Invalid {what}: {value:?}")]
    #[diagnostic(code(minicurso::engine::validation), help("Allowed values: {allowed}"))]
    Validation {
        what: &'static str,
        value: String,
        allowed: String,
    },
}
