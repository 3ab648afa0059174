// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! URL builders for every route the clients call. The base URL points at the API root,
//! e.g.: `http://localhost:8090/api`.

pub const DEFAULT_API_URL: &str = "http://localhost:8090/api";

/// Environment variable read by the `--api-url` flag of both binaries.
pub const API_URL_ENV_VAR: &str = "MC_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self { Self::new(DEFAULT_API_URL) }
}

impl Endpoints {
    /// Trailing slashes are dropped so routes can be appended with `/`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str { &self.base_url }

    fn auth(&self, path: &str) -> String { format!("{}/auth{path}", self.base_url) }

    fn minicurso(&self, path: &str) -> String {
        format!("{}/minicurso{path}", self.base_url)
    }

    #[must_use]
    pub fn login(&self) -> String { self.auth("/login") }

    #[must_use]
    pub fn event(&self) -> String { self.minicurso("/evento") }

    #[must_use]
    pub fn registration_count(&self) -> String { self.minicurso("/inscricoes/count") }

    /// The `email` query parameter is added by the caller.
    #[must_use]
    pub fn email_check(&self) -> String { self.minicurso("/inscricao/check") }

    #[must_use]
    pub fn register(&self) -> String { self.minicurso("/inscricao") }

    #[must_use]
    pub fn registrants(&self) -> String { self.minicurso("/inscricoes") }

    #[must_use]
    pub fn registrant(&self, id: i64) -> String { self.minicurso(&format!("/inscricoes/{id}")) }

    #[must_use]
    pub fn registrants_export(&self) -> String { self.minicurso("/inscricoes/export") }

    #[must_use]
    pub fn modules(&self) -> String { self.minicurso("/modulos") }

    #[must_use]
    pub fn module(&self, id: i64) -> String { self.minicurso(&format!("/modulos/{id}")) }

    #[must_use]
    pub fn module_items(&self, module_id: i64) -> String {
        self.minicurso(&format!("/modulos/{module_id}/itens"))
    }

    #[must_use]
    pub fn item(&self, id: i64) -> String { self.minicurso(&format!("/itens/{id}")) }

    #[must_use]
    pub fn instructors(&self) -> String { self.minicurso("/instrutores") }

    #[must_use]
    pub fn instructor(&self, id: i64) -> String {
        self.minicurso(&format!("/instrutores/{id}"))
    }
}
