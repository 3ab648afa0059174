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

use clap::{Args, Parser, Subcommand};

use super::SignupForm;
use crate::{API_URL_ENV_VAR, DEFAULT_API_URL};

#[derive(Debug, Parser)]
#[command(bin_name = "mc-signup")]
#[command(about = "🎓 Conheca o minicurso e faca sua inscricao")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  mc-signup [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
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
    #[clap(about = "📅 Date, place, seats and programme of the event")]
    Info,

    #[clap(
        about = "✍️ Register for the event\n💡 Eg: `mc-signup register --name \"Ana Lima\" --email ana@x.io --course Computacao --level iniciante`"
    )]
    Register(RegisterArgs),
}

/// Required fields that are missing get prompted for.
#[derive(Debug, Clone, Default, Args)]
pub struct RegisterArgs {
    #[arg(long, short = 'n', help = "Full name, at least 3 characters")]
    pub name: Option<String>,

    #[arg(long, short = 'e')]
    pub email: Option<String>,

    #[arg(long, short = 't', help = "Phone (optional)")]
    pub phone: Option<String>,

    #[arg(long, short = 'c')]
    pub course: Option<String>,

    #[arg(long, short = 'p', help = "Current period or semester (optional)")]
    pub period: Option<String>,

    #[arg(long, help = "iniciante, intermediario or avancado")]
    pub level: Option<String>,

    #[arg(long, short = 'x', help = "What you expect from the event (optional)")]
    pub expectation: Option<String>,

    #[arg(long, help = "Never prompt, submit the flags as given")]
    pub no_input: bool,
}

impl RegisterArgs {
    /// The flags as a form. Missing required fields are left empty so validation reports
    /// them.
    #[must_use]
    pub fn to_form(&self) -> SignupForm {
        SignupForm {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone(),
            course: self.course.clone().unwrap_or_default(),
            period: self.period.clone(),
            level: self.level.clone().unwrap_or_default(),
            expectation: self.expectation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_register_flags_to_form() {
        let cli_arg = CLIArg::try_parse_from([
            "mc-signup",
            "register",
            "--name",
            "Ana Lima",
            "--email",
            "ana@x.io",
            "--level",
            "avancado",
        ])
        .unwrap();
        let CLICommand::Register(args) = cli_arg.command else {
            panic!("expected register");
        };
        let form = args.to_form();
        assert_eq!(form.name, "Ana Lima");
        assert_eq!(form.course, "");
        assert_eq!(form.level, "avancado");
        assert_eq!(form.phone, None);
    }
}
