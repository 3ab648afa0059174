/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

//! # minicurso-cmdr
//!
//! Two command line front-ends for the minicurso registration REST API.
//!
//! - 🎓 `mc-signup` - the public page: event date, schedule, place, seats, live
//!   registrant count and programme (`mc-signup info`), plus a validated registration
//!   form (`mc-signup register`).
//! - 🛠️ `mc-admin` - the administrative console: log in with an admin account, see a
//!   dashboard, edit the event, its modules, items and instructors, and work with the
//!   registrants (list, filter, paginate, delete, export to a spreadsheet, or browse
//!   them interactively).
//!
//! The filtering, sorting and pagination of registrants live in the
//! [`minicurso_list_engine`] crate. This crate is the REST client, the rendering and the
//! CLI plumbing around it.
//!
//! # Run the binaries
//!
//! ```bash
//! mc-signup info
//! mc-signup register --name "Ana Lima" --email ana@x.io --course Computacao --level iniciante
//! mc-admin login -u admin
//! mc-admin registrants list --course comp --page-size 25 --view cards
//! mc-admin registrants browse
//! ```
//!
//! Point them at another server with `--api-url` or the `MC_API_URL` environment
//! variable. The admin session is kept in the user config folder, `MC_CONFIG_DIR`
//! overrides it.
//!
//! # Logging
//!
//! Pass `-l` (`--enable-logging`) to any command to write DEBUG logs to `log.txt` in the
//! current folder. Nothing is logged otherwise, so logs never mix with command output.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
// - `#!` (Inner Attribute): The `!` indicates that this is an inner attribute. Inner
//   attributes apply to the entire item containing them. When you use
//   #![warn(clippy::<Lint>)] at the crate level (i.e., in your lib.rs or main.rs), it
//   will make Clippy emit a warning for any `Lint` violations found anywhere within that
//   entire crate. If placed inside a module, it would apply to that module and all its
//   sub-modules.
// - `#` (Outer Attribute): This is an outer attribute. Outer attributes apply to the item
//   immediately following them.
// Production library code is not allowed to use .unwrap() in functions returning Result.
// Tests are allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::manual_is_multiple_of)]
#![warn(clippy::needless_return)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_else)]
#![warn(clippy::iter_without_into_iter)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::ignored_unit_patterns)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::manual_instant_elapsed)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unused_self)]
#![warn(clippy::single_char_pattern)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::unnecessary_semicolon)]
#![warn(clippy::if_not_else)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::single_match_else)]
#![warn(clippy::return_self_not_must_use)]
#![warn(clippy::needless_pass_by_value)]

// Attach sources.
pub mod admin;
pub mod api_client;
pub mod common;
pub mod config;
pub mod log_support;
pub mod notify;
pub mod render;
pub mod signup;

// Re-export.
pub use api_client::*;
pub use common::*;
pub use config::*;
pub use log_support::*;
pub use notify::*;
pub use render::*;
