// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod date_fmt;
pub mod error;
pub mod fmt;
pub mod prompt;
pub mod sanitize;

// Re-export.
pub use date_fmt::*;
pub use error::*;
pub use fmt::*;
pub use prompt::*;
pub use sanitize::*;
