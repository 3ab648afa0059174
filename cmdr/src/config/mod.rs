// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod config_folder;
pub mod session;

// Re-export.
pub use config_folder::{CONFIG_DIR_ENV_VAR, ConfigPaths};
pub use session::*;
