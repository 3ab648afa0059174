// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod event_view;
pub mod instructor_view;
pub mod pagination_bar;
pub mod programme_view;
pub mod registrant_view;
pub mod table;

// Re-export.
pub use event_view::*;
pub use instructor_view::*;
pub use pagination_bar::*;
pub use programme_view::*;
pub use registrant_view::*;
pub use table::*;
