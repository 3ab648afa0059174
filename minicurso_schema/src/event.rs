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

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Instructor;

/// The single event (minicurso) configured on the backend, with its programme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "dataEvento", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "horarioInicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "horarioFim", default)]
    pub end_time: Option<String>,
    #[serde(rename = "local", default)]
    pub place: Option<String>,
    #[serde(rename = "quantidadeVagas", default)]
    pub total_seats: Option<i64>,
    #[serde(rename = "vagasDisponiveis", default)]
    pub available_seats: Option<i64>,
    #[serde(rename = "inscricoesAbertas", default)]
    pub registrations_open: Option<bool>,
    #[serde(rename = "cargaHorariaTotalFormatada", default)]
    pub total_workload_formatted: Option<String>,
    #[serde(rename = "modulos", default)]
    pub modules: Vec<Module>,
}

/// Whether the signup form may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationStatus {
    Open,
    Closed,
    SoldOut,
}

impl Event {
    /// Sold out wins over closed. A missing `inscricoesAbertas` flag counts as open, only
    /// an explicit `false` closes registrations.
    #[must_use]
    pub fn registration_status(&self) -> RegistrationStatus {
        match (self.available_seats, self.registrations_open) {
            (Some(seats), _) if seats <= 0 => RegistrationStatus::SoldOut,
            (_, Some(false)) => RegistrationStatus::Closed,
            _ => RegistrationStatus::Open,
        }
    }

    #[must_use]
    pub fn find_module(&self, module_id: i64) -> Option<&Module> {
        self.modules.iter().find(|it| it.id == module_id)
    }

    #[must_use]
    pub fn find_item(&self, module_id: i64, item_id: i64) -> Option<&Item> {
        self.find_module(module_id)?
            .items
            .iter()
            .find(|it| it.id == item_id)
    }
}

/// Body of `PUT /minicurso/evento`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "dataEvento")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "horarioInicio")]
    pub start_time: Option<String>,
    #[serde(rename = "horarioFim")]
    pub end_time: Option<String>,
    #[serde(rename = "local")]
    pub place: Option<String>,
    #[serde(rename = "quantidadeVagas")]
    pub total_seats: Option<i64>,
    #[serde(rename = "inscricoesAbertas")]
    pub registrations_open: bool,
}

impl From<&Event> for EventUpdate {
    fn from(event: &Event) -> Self {
        EventUpdate {
            title: event.title.clone(),
            date: event.date,
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            place: event.place.clone(),
            total_seats: event.total_seats,
            registrations_open: event.registrations_open.unwrap_or(true),
        }
    }
}

/// A unit of the course curriculum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    #[serde(rename = "ordem", default)]
    pub order: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Minutes.
    #[serde(rename = "cargaHoraria", default)]
    pub workload_minutes: Option<i32>,
    #[serde(rename = "cargaHorariaFormatada", default)]
    pub workload_formatted: Option<String>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(rename = "itens", default)]
    pub items: Vec<Item>,
    #[serde(rename = "instrutores", default)]
    pub instructors: Vec<Instructor>,
}

/// Body of `POST /minicurso/modulos` and `PUT /minicurso/modulos/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleUpsert {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "ordem")]
    pub order: i32,
    #[serde(rename = "cargaHoraria")]
    pub workload_minutes: Option<i32>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl From<&Module> for ModuleUpsert {
    fn from(module: &Module) -> Self {
        ModuleUpsert {
            title: module.title.clone(),
            description: module.description.clone(),
            order: module.order,
            workload_minutes: module.workload_minutes,
            active: module.active,
        }
    }
}

/// A topic inside a [`Module`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(rename = "ordem", default)]
    pub order: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Minutes.
    #[serde(rename = "duracao", default)]
    pub duration_minutes: Option<i32>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
}

/// Body of `POST /minicurso/modulos/{id}/itens` and `PUT /minicurso/itens/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpsert {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "ordem")]
    pub order: i32,
    #[serde(rename = "duracao")]
    pub duration_minutes: Option<i32>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl From<&Item> for ItemUpsert {
    fn from(item: &Item) -> Self {
        ItemUpsert {
            title: item.title.clone(),
            description: item.description.clone(),
            order: item.order,
            duration_minutes: item.duration_minutes,
            active: item.active,
        }
    }
}

fn default_active() -> bool { true }
