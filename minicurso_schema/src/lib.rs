/*
 *   Copyright (c) 2023-2025 R3BL LLC
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

//! Wire types for the minicurso REST API, shared by `minicurso_list_engine` and
//! `minicurso-cmdr`.
//!
//! The backend speaks Portuguese on the wire (`nome`, `curso`, `nivelProgramacao`, ...).
//! The Rust side uses English field names and maps them with `#[serde(rename = ...)]`, so
//! every JSON key is visible right next to the field it fills.
//!
//! | Wire entity  | Rust type                                   |
//! |--------------|---------------------------------------------|
//! | `inscricao`  | [`Registrant`], [`NewRegistration`]         |
//! | `evento`     | [`Event`], [`EventUpdate`]                  |
//! | `modulo`     | [`Module`], [`ModuleUpsert`]                |
//! | `item`       | [`Item`], [`ItemUpsert`]                    |
//! | `instrutor`  | [`Instructor`], [`InstructorUpsert`]        |

// https://github.com/rust-lang/rust-clippy
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod api_error;
pub mod auth;
pub mod event;
pub mod instructor;
pub mod iso_datetime;
pub mod registrant;

// Re-export.
pub use api_error::*;
pub use auth::*;
pub use event::*;
pub use instructor::*;
pub use registrant::*;
