// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, CLICommand, try_info, try_register};
use crate::ApiClient;

/// Runs one `mc-signup` command to completion.
///
/// # Errors
///
/// Whatever the command reports, after the user got a toast for it.
pub async fn try_run_command(cli_arg: CLIArg) -> miette::Result<()> {
    let client = ApiClient::try_new(&cli_arg.global_options.api_url)?;
    match cli_arg.command {
        CLICommand::Info => try_info(&client).await?,
        CLICommand::Register(args) => try_register(&client, &args).await?,
    }
    Ok(())
}
