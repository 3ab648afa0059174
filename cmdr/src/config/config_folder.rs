/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{fmt::{Display, Formatter, Result},
          fs::{self},
          path::{Path, PathBuf}};

use dirs::config_dir;

use crate::MinicursoError;

/// Overrides the config folder, e.g.: to keep two admin sessions apart.
pub const CONFIG_DIR_ENV_VAR: &str = "MC_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    SessionFile,
}

impl Display for ConfigPaths {
    /// This generates a `to_string()` method used by [`get_session_file_path`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "minicurso-cmdr",
            ConfigPaths::SessionFile => "session.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the session file is stored.
#[must_use]
pub fn get_session_file_path(path: &Path) -> PathBuf {
    path.join(ConfigPaths::SessionFile.to_string())
}

/// This is where the config folder is: `$MC_CONFIG_DIR` when set, else
/// `<os config dir>/minicurso-cmdr`.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    if let Some(it) = std::env::var_os(CONFIG_DIR_ENV_VAR)
        && !it.is_empty()
    {
        return Some(PathBuf::from(it));
    }
    let home_config_folder_path = config_dir()?;
    let config_file_path =
        home_config_folder_path.join(ConfigPaths::TopLevelFolderName.to_string());
    Some(config_file_path)
}

#[must_use]
pub fn exists() -> bool {
    match try_get_config_folder_path() {
        Some(config_file_path) => config_file_path.exists(),
        None => false,
    }
}

/// # Errors
///
/// When the OS has no config folder, or it can't be created.
pub fn create() -> std::result::Result<PathBuf, MinicursoError> {
    match try_get_config_folder_path() {
        Some(config_folder_path) => match fs::create_dir_all(&config_folder_path) {
            Ok(()) => {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Successfully created config folder.",
                    config_folder = ?config_folder_path
                );
                Ok(config_folder_path)
            }
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "Could not create config folder.",
                    error = ?error
                );
                Err(MinicursoError::Io {
                    action: "create",
                    path: config_folder_path,
                    source: error,
                })
            }
        },
        None => {
            // % is Display, ? is Debug.
            tracing::error!(message = "Could not access config folder.", error = "None");
            Err(MinicursoError::ConfigFolderUnavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_session_file_path() {
        let it = get_session_file_path(Path::new("/tmp/minicurso-cmdr"));
        assert_eq!(it, PathBuf::from("/tmp/minicurso-cmdr/session.json"));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_config_folder() {
        let dir = tempfile::TempDir::new().unwrap();
        let folder = dir.path().join("nested").join("cfg");
        unsafe {
            std::env::set_var(CONFIG_DIR_ENV_VAR, &folder);
        }

        assert_eq!(try_get_config_folder_path(), Some(folder.clone()));
        assert!(!exists());
        assert_eq!(create().unwrap(), folder);
        assert!(exists());

        unsafe {
            std::env::remove_var(CONFIG_DIR_ENV_VAR);
        }
    }
}
