// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_list_engine::SourceError;

use super::{GlobalOption, ui_str};
use crate::{ApiClient, MinicursoError, SessionStore, Toast};

/// What every `mc-admin` command gets: the API client (without a token) and the session
/// store.
#[derive(Debug, Clone)]
pub struct AdminContext {
    client: ApiClient,
    store: SessionStore,
}

impl AdminContext {
    #[must_use]
    pub fn new(client: ApiClient, store: SessionStore) -> Self { Self { client, store } }

    /// # Errors
    ///
    /// When the HTTP client can't be built or there is no user config folder.
    pub fn try_from_options(options: &GlobalOption) -> miette::Result<Self> {
        Ok(Self::new(
            ApiClient::try_new(&options.api_url)?,
            SessionStore::try_default()?,
        ))
    }

    /// For endpoints that don't need a session.
    #[must_use]
    pub fn public_client(&self) -> &ApiClient { &self.client }

    #[must_use]
    pub fn store(&self) -> &SessionStore { &self.store }

    /// A client carrying the stored token.
    ///
    /// # Errors
    ///
    /// [`MinicursoError::NotLoggedIn`] without a session.
    pub fn authorized_client(&self) -> Result<ApiClient, MinicursoError> {
        let session = self.store.require()?;
        tracing::debug!(message = "using session", session = ?session);
        Ok(self.client.clone().with_token(session.token))
    }

    /// Tells the user what went wrong and hands back the error for the exit status. An
    /// expired session is removed, like a forced logout.
    pub fn report_failure(&self, message: &str, error: SourceError) -> MinicursoError {
        // % is Display, ? is Debug.
        tracing::warn!(message = "command failed", toast = %message, error = ?error);
        match &error {
            SourceError::Unauthorized => {
                if let Err(clear_error) = self.store.clear() {
                    tracing::error!(message = "could not remove session", error = ?clear_error);
                }
                Toast::warning(ui_str::auth::SESSION_EXPIRED).show();
            }
            SourceError::Transport { .. } => {
                Toast::error(format!("{message}. {}", ui_str::auth::CONNECTION_ERROR)).show();
            }
            _ => Toast::error(message).show(),
        }
        MinicursoError::Source(error)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::Session;

    fn context(dir: &TempDir) -> AdminContext {
        AdminContext::new(
            ApiClient::try_new("http://127.0.0.1:9/api").unwrap(),
            SessionStore::new(dir.path()),
        )
    }

    #[test]
    fn test_authorized_client_requires_session() {
        let dir = TempDir::new().unwrap();
        let it = context(&dir);
        assert!(matches!(
            it.authorized_client(),
            Err(MinicursoError::NotLoggedIn)
        ));

        it.store()
            .save(&Session {
                token: "t".into(),
                username: "admin".into(),
                roles: vec!["ADMIN".into()],
            })
            .unwrap();
        assert!(it.authorized_client().is_ok());
    }

    #[test]
    fn test_unauthorized_clears_session() {
        let dir = TempDir::new().unwrap();
        let it = context(&dir);
        it.store()
            .save(&Session {
                token: "t".into(),
                username: "admin".into(),
                roles: vec![],
            })
            .unwrap();

        let error = it.report_failure("Erro", SourceError::Unauthorized);

        assert!(error.is_session_expired());
        assert_eq!(it.store().load().unwrap(), None);
    }

    #[test]
    fn test_other_failures_keep_session() {
        let dir = TempDir::new().unwrap();
        let it = context(&dir);
        it.store()
            .save(&Session {
                token: "t".into(),
                username: "admin".into(),
                roles: vec![],
            })
            .unwrap();

        let error = it.report_failure(
            "Erro",
            SourceError::Rejected {
                status: 500,
                detail: "boom".into(),
            },
        );

        assert!(!error.is_session_expired());
        assert!(it.store().load().unwrap().is_some());
    }
}
