// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `mc-signup`, the public registration page for the terminal.

// Attach.
pub mod clap_config;
pub mod info;
pub mod launcher;
pub mod register;
pub mod ui_str;
pub mod validation;

// Re-export.
pub use clap_config::*;
pub use info::*;
pub use launcher::*;
pub use register::*;
pub use validation::*;
