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

//! # Registrant list engine
//!
//! Holds the full registrant collection fetched from the backend, derives a filtered view
//! from the per-column [`FilterCriteria`], and slices that view into pages.
//!
//! ```text
//! fetch ─▶ sort by name ─▶ filter ─▶ paginate ─▶ render
//!                          ▲          ▲
//!   criteria / page size ──┘          └── page navigation
//! ```
//!
//! Any criteria or page size change re-runs filter and paginate (and resets to page 1).
//! Page navigation re-runs paginate only.
//!
//! Pieces, from the bottom up:
//!
//! - [`apply_filters`]: conjunctive, stable, pure.
//! - [`paginate`]: slices a filtered sequence, [`PageResult::Empty`] for no results.
//! - [`compute_visible_pages`]: which page numbers to show as controls, with gaps.
//! - [`RegistrantListState`]: the single view state, changed only through [`Action`]s
//!   and load completions (tagged with a [`LoadTicket`], last request wins).
//! - [`RegistrantListController`]: drives the state against a [`RegistrantSource`].
//!
//! Nothing in here does IO. The REST client lives in `minicurso-cmdr`.

// https://github.com/rust-lang/rust-clippy
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod collation;
pub mod controller;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod page_window;
pub mod paginate;
pub mod source;
pub mod view_state;

// Re-export.
pub use collation::*;
pub use controller::*;
pub use criteria::*;
pub use error::*;
pub use filter::*;
pub use page_window::*;
pub use paginate::*;
pub use source::*;
pub use view_state::*;
