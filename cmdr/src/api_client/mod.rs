// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod endpoints;
pub mod http_client;
pub mod rest_client;
pub mod status_mapping;

// Re-export.
pub use endpoints::*;
pub use http_client::*;
pub use rest_client::*;
pub use status_mapping::*;
