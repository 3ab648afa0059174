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

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use minicurso_list_engine::{FilterCriteria, FilterField, PageSize};

use crate::{API_URL_ENV_VAR, DEFAULT_API_URL, render::ViewMode};

pub const PASSWORD_ENV_VAR: &str = "MC_ADMIN_PASSWORD";

#[derive(Debug, Parser)]
#[command(bin_name = "mc-admin")]
#[command(about = "🎓 Administre o minicurso: evento, modulos, instrutores e inscricoes")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  mc-admin [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        env = API_URL_ENV_VAR,
        default_value = DEFAULT_API_URL,
        help = "Base URL of the minicurso REST API"
    )]
    pub api_url: String,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🔑 Log in with an admin account and keep the session")]
    Login {
        #[arg(long, short = 'u', help = "Prompted for when missing")]
        username: Option<String>,

        #[arg(
            long,
            env = PASSWORD_ENV_VAR,
            hide_env_values = true,
            help = "Prompted for (without echo) when missing"
        )]
        password: Option<String>,
    },

    #[clap(about = "🚪 Forget the stored session")]
    Logout,

    #[clap(about = "📊 Registrants, seats, modules and registration status at a glance")]
    Dashboard,

    #[clap(about = "📅 Show or change the event settings")]
    Event {
        #[command(subcommand)]
        command: EventCommand,
    },

    #[clap(about = "📚 Manage the modules of the programme\n💡 Eg: `mc-admin modules list`")]
    Modules {
        #[command(subcommand)]
        command: ModuleCommand,
    },

    #[clap(about = "📝 Manage the items inside a module")]
    Items {
        #[command(subcommand)]
        command: ItemCommand,
    },

    #[clap(about = "🧑‍🏫 Manage the instructors")]
    Instructors {
        #[command(subcommand)]
        command: InstructorCommand,
    },

    #[clap(
        about = "👥 List, filter, delete and export registrations\n💡 Eg: `mc-admin registrants list --course comp --page 2`"
    )]
    Registrants {
        #[command(subcommand)]
        command: RegistrantCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    #[clap(about = "Show the event settings")]
    Show,
    #[clap(about = "Change the given settings, the others keep their current value")]
    Update(EventFields),
}

#[derive(Debug, Clone, Default, Args)]
pub struct EventFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, help = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
    #[arg(long, help = "HH:MM")]
    pub start: Option<String>,
    #[arg(long, help = "HH:MM")]
    pub end: Option<String>,
    #[arg(long)]
    pub place: Option<String>,
    #[arg(long)]
    pub seats: Option<i64>,
    #[arg(long, conflicts_with = "close", help = "Open registrations")]
    pub open: bool,
    #[arg(long, help = "Close registrations")]
    pub close: bool,
}

#[derive(Debug, Subcommand)]
pub enum ModuleCommand {
    #[clap(about = "List every module with its items")]
    List,
    #[clap(about = "Add a module")]
    Create {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: ContentFields,
    },
    #[clap(about = "Change a module")]
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ContentFields,
    },
    #[clap(about = "Delete a module and all of its items")]
    Delete {
        id: i64,
        #[arg(long, short = 'y', help = "Don't ask for confirmation")]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    #[clap(about = "Add an item to a module")]
    Create {
        #[arg(long = "module", short = 'm')]
        module_id: i64,
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: ContentFields,
    },
    #[clap(about = "Change an item")]
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ContentFields,
    },
    #[clap(about = "Delete an item")]
    Delete {
        id: i64,
        #[arg(long, short = 'y', help = "Don't ask for confirmation")]
        yes: bool,
    },
}

/// Shared by modules and items. `minutes` is the workload of a module or the duration of
/// an item.
#[derive(Debug, Clone, Default, Args)]
pub struct ContentFields {
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, help = "Position in the list, defaults to the end")]
    pub order: Option<i32>,
    #[arg(long)]
    pub minutes: Option<i32>,
    #[arg(long, help = "true or false")]
    pub active: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum InstructorCommand {
    #[clap(about = "List the instructors")]
    List,
    #[clap(about = "Add an instructor")]
    Create {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: InstructorFields,
    },
    #[clap(about = "Change an instructor")]
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: InstructorFields,
    },
    #[clap(about = "Delete an instructor")]
    Delete {
        id: i64,
        #[arg(long, short = 'y', help = "Don't ask for confirmation")]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct InstructorFields {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long = "module", short = 'm', help = "Module id, repeat for several")]
    pub module_ids: Vec<i64>,
}

#[derive(Debug, Subcommand)]
pub enum RegistrantCommand {
    #[clap(about = "Print one page of registrations")]
    List(ListArgs),
    #[clap(about = "Delete a registration")]
    Delete {
        id: i64,
        #[arg(long, short = 'y', help = "Don't ask for confirmation")]
        yes: bool,
    },
    #[clap(about = "Download the registrations spreadsheet")]
    Export {
        #[arg(long, short = 'o', help = "Defaults to inscricoes_<date>.xlsx")]
        output: Option<PathBuf>,
        #[arg(long, help = "Open the file when done")]
        open: bool,
    },
    #[clap(about = "Browse registrations interactively (filter, page, delete, export)")]
    Browse {
        #[arg(long, value_enum, default_value_t)]
        view: ViewMode,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[arg(long, help = "Name contains (case insensitive)")]
    pub name: Option<String>,
    #[arg(long, help = "Email contains (case insensitive)")]
    pub email: Option<String>,
    #[arg(long, help = "Course contains (case insensitive)")]
    pub course: Option<String>,
    #[arg(long, help = "Exact level, e.g. INICIANTE")]
    pub level: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long, default_value_t, help = "10, 25, 50 or 100")]
    pub page_size: PageSize,
    #[arg(long, value_enum, default_value_t)]
    pub view: ViewMode,
}

impl ListArgs {
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        [
            (FilterField::Name, &self.name),
            (FilterField::Email, &self.email),
            (FilterField::Course, &self.course),
            (FilterField::Level, &self.level),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_ref().map(|it| (field, it)))
        .fold(FilterCriteria::default(), |acc, (field, value)| {
            acc.with(field, value.as_str())
        })
    }
}
