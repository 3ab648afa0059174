// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `mc-admin`, the administrative console.

// Attach.
pub mod auth_command;
pub mod browse;
pub mod clap_config;
pub mod context;
pub mod event_command;
pub mod instructor_command;
pub mod launcher;
pub mod programme_command;
pub mod registrant_command;
pub mod ui_str;

// Re-export.
pub use auth_command::*;
pub use browse::*;
pub use clap_config::*;
pub use context::*;
pub use event_command::*;
pub use instructor_command::*;
pub use launcher::*;
pub use programme_command::*;
pub use registrant_command::*;
