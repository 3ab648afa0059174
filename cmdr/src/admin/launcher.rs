// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AdminContext, CLIArg, CLICommand, EventCommand, try_dashboard, try_login,
            try_logout, try_run_instructor_command, try_run_item_command,
            try_run_module_command, try_run_registrant_command, try_show_event,
            try_update_event};
use crate::MinicursoError;

/// Runs one `mc-admin` command to completion.
///
/// # Errors
///
/// Whatever the command reports. The user has already been notified with a toast when
/// it came from the API.
pub async fn try_run_command(cli_arg: CLIArg) -> miette::Result<()> {
    let context = AdminContext::try_from_options(&cli_arg.global_options)?;
    run_with_context(&context, cli_arg.command).await?;
    Ok(())
}

/// # Errors
///
/// Whatever the command reports.
pub async fn run_with_context(
    context: &AdminContext,
    command: CLICommand,
) -> Result<(), MinicursoError> {
    match command {
        CLICommand::Login { username, password } => try_login(context, username, password).await,
        CLICommand::Logout => try_logout(context),
        CLICommand::Dashboard => try_dashboard(context).await,
        CLICommand::Event { command } => match command {
            EventCommand::Show => try_show_event(context).await,
            EventCommand::Update(fields) => try_update_event(context, fields).await,
        },
        CLICommand::Modules { command } => try_run_module_command(context, command).await,
        CLICommand::Items { command } => try_run_item_command(context, command).await,
        CLICommand::Instructors { command } => {
            try_run_instructor_command(context, command).await
        }
        CLICommand::Registrants { command } => {
            try_run_registrant_command(context, command).await
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{ApiClient, SessionStore, admin::RegistrantCommand};

    #[tokio::test]
    async fn test_authenticated_command_without_session_fails_before_any_request() {
        let dir = TempDir::new().unwrap();
        let context = AdminContext::new(
            ApiClient::try_new("http://127.0.0.1:9/api").unwrap(),
            SessionStore::new(dir.path()),
        );

        let result = run_with_context(
            &context,
            CLICommand::Registrants {
                command: RegistrantCommand::Delete { id: 1, yes: true },
            },
        )
        .await;

        assert!(matches!(result, Err(MinicursoError::NotLoggedIn)));
    }

    #[tokio::test]
    async fn test_logout_without_session_is_ok() {
        let dir = TempDir::new().unwrap();
        let context = AdminContext::new(
            ApiClient::try_new("http://127.0.0.1:9/api").unwrap(),
            SessionStore::new(dir.path()),
        );
        assert!(run_with_context(&context, CLICommand::Logout).await.is_ok());
    }
}
