// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The admin session, persisted between `mc-admin` runs as `session.json` in the config
//! folder. Login writes it, logout and an expired token remove it.

use std::{fs,
          io::ErrorKind,
          path::{Path, PathBuf}};

use minicurso_schema::{ADMIN_ROLES, LoginResponse};
use serde::{Deserialize, Serialize};

use crate::{MinicursoError, config::config_folder};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The token is never printed.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Turns a login response into a session, refusing accounts without an admin role.
    /// `typed_username` is used when the server doesn't echo the user name back.
    ///
    /// # Errors
    ///
    /// [`MinicursoError::AccessDenied`] when none of the roles is an admin role.
    pub fn try_from_login(
        response: LoginResponse,
        typed_username: &str,
    ) -> Result<Self, MinicursoError> {
        let username = response
            .username
            .clone()
            .filter(|it| !it.trim().is_empty())
            .unwrap_or_else(|| typed_username.to_owned());

        if !response.is_admin() {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "login refused, no admin role",
                username = %username,
                roles = ?response.roles,
                accepted = ?ADMIN_ROLES
            );
            return Err(MinicursoError::AccessDenied { username });
        }

        Ok(Self {
            token: response.token,
            username,
            roles: response.roles,
        })
    }
}

/// Reads and writes [`Session`] in one folder. [`SessionStore::try_default`] uses the user
/// config folder, tests point it at a temp folder.
#[derive(Debug, Clone)]
pub struct SessionStore {
    folder: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// # Errors
    ///
    /// When the OS has no user config folder.
    pub fn try_default() -> Result<Self, MinicursoError> {
        config_folder::try_get_config_folder_path()
            .map(Self::new)
            .ok_or(MinicursoError::ConfigFolderUnavailable)
    }

    #[must_use]
    pub fn file_path(&self) -> PathBuf { config_folder::get_session_file_path(&self.folder) }

    /// `None` when nobody is logged in. A file that can't be parsed counts as logged out
    /// (and is logged), so a corrupt file never locks the user out of `login`.
    ///
    /// # Errors
    ///
    /// When the file exists but can't be read.
    pub fn load(&self) -> Result<Option<Session>, MinicursoError> {
        let path = self.file_path();
        let content = match fs::read_to_string(&path) {
            Ok(it) => it,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(io_error("read", &path, error)),
        };

        match serde_json::from_str::<Session>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "ignoring unreadable session file",
                    path = ?path,
                    error = %error
                );
                Ok(None)
            }
        }
    }

    /// # Errors
    ///
    /// [`MinicursoError::NotLoggedIn`] if there is no session.
    pub fn require(&self) -> Result<Session, MinicursoError> {
        self.load()?.ok_or(MinicursoError::NotLoggedIn)
    }

    /// # Errors
    ///
    /// When the folder or the file can't be written.
    pub fn save(&self, session: &Session) -> Result<(), MinicursoError> {
        fs::create_dir_all(&self.folder)
            .map_err(|error| io_error("create", &self.folder, error))?;
        let path = self.file_path();
        let json = serde_json::to_string_pretty(session).map_err(|error| {
            io_error("write", &path, std::io::Error::new(ErrorKind::InvalidData, error))
        })?;
        fs::write(&path, json).map_err(|error| io_error("write", &path, error))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "session saved", session = ?session, path = ?path);
        Ok(())
    }

    /// Returns whether there was a session to remove.
    ///
    /// # Errors
    ///
    /// When the file exists but can't be removed.
    pub fn clear(&self) -> Result<bool, MinicursoError> {
        let path = self.file_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(message = "session removed", path = ?path);
                Ok(true)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(error) => Err(io_error("remove", &path, error)),
        }
    }
}

fn io_error(action: &'static str, path: &Path, source: std::io::Error) -> MinicursoError {
    MinicursoError::Io {
        action,
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn login_response(roles: &[&str], username: Option<&str>) -> LoginResponse {
        LoginResponse {
            token: "jwt.token.here".into(),
            username: username.map(ToOwned::to_owned),
            roles: roles.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_try_from_login_accepts_admin_roles() {
        for role in ADMIN_ROLES {
            let it = Session::try_from_login(login_response(&[role], None), "maria").unwrap();
            assert_eq!(it.username, "maria");
        }
        let it =
            Session::try_from_login(login_response(&["ADMIN"], Some("Maria S")), "maria")
                .unwrap();
        assert_eq!(it.username, "Maria S");
    }

    #[test]
    fn test_try_from_login_refuses_other_roles() {
        let error = Session::try_from_login(login_response(&["USER"], None), "joao").unwrap_err();
        assert!(matches!(error, MinicursoError::AccessDenied { username } if username == "joao"));
        let error = Session::try_from_login(login_response(&[], None), "joao").unwrap_err();
        assert!(matches!(error, MinicursoError::AccessDenied { .. }));
    }

    #[test]
    fn test_debug_hides_token() {
        let it = Session::try_from_login(login_response(&["ADMIN"], None), "maria").unwrap();
        assert!(!format!("{it:?}").contains("jwt.token.here"));
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("minicurso-cmdr"));

        assert_eq!(store.load().unwrap(), None);
        assert!(matches!(store.require(), Err(MinicursoError::NotLoggedIn)));
        assert!(!store.clear().unwrap());

        let session = Session {
            token: "abc".into(),
            username: "maria".into(),
            roles: vec!["ROLE_ADMIN".into()],
        };
        store.save(&session).unwrap();
        assert_eq!(store.require().unwrap(), session);

        assert!(store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_counts_as_logged_out() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        fs::write(store.file_path(), "{not json").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
