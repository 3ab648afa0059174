// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use chrono::Local;
use minicurso_list_engine::{Action, ExportBlob, MutationOutcome, RegistrantListController,
                            RegistrantSource};

use super::{AdminContext, ListArgs, RegistrantCommand, browse, ui_str};
use crate::common::prompt;
use crate::{MinicursoError, Toast, export_file_name, render::render_registrant_view};

/// # Errors
///
/// API failures or a declined confirmation.
pub async fn try_run_registrant_command(
    context: &AdminContext,
    command: RegistrantCommand,
) -> Result<(), MinicursoError> {
    let mut controller = RegistrantListController::new(context.authorized_client()?);
    match command {
        RegistrantCommand::List(args) => try_list(context, &mut controller, &args).await,
        RegistrantCommand::Delete { id, yes } => {
            if !yes && !confirm_delete()? {
                return Err(MinicursoError::Cancelled);
            }
            try_delete(context, &mut controller, id).await
        }
        RegistrantCommand::Export { output, open } => {
            try_export(context, &controller, output, open).await
        }
        RegistrantCommand::Browse { view } => {
            browse::try_browse(context, &mut controller, view).await
        }
    }
}

/// Applies the list flags in the order that keeps `--page` meaningful: criteria and page
/// size first (both reset to page 1), then the page.
#[must_use]
pub fn list_actions(args: &ListArgs) -> Vec<Action> {
    vec![
        Action::SetCriteria(args.criteria()),
        Action::SetPageSize(args.page_size),
        Action::GoToPage(args.page),
    ]
}

async fn try_list<S: RegistrantSource>(
    context: &AdminContext,
    controller: &mut RegistrantListController<S>,
    args: &ListArgs,
) -> Result<(), MinicursoError> {
    controller
        .reload()
        .await
        .map_err(|error| context.report_failure(ui_str::registrant::LOAD_FAILED, error))?;
    for action in list_actions(args) {
        controller.dispatch(action);
    }
    println!("{}", render_registrant_view(controller.state(), args.view));
    Ok(())
}

/// # Errors
///
/// When stdin can't be read.
pub fn confirm_delete() -> Result<bool, MinicursoError> {
    prompt::confirm(&ui_str::confirm_prompt_msg(
        ui_str::registrant::CONFIRM_TITLE,
        ui_str::registrant::CONFIRM_TEXT,
    ))
}

/// Deletes, then reloads the whole list. A failed reload after a successful delete is
/// only a warning.
///
/// # Errors
///
/// When the delete itself fails.
pub async fn try_delete<S: RegistrantSource>(
    context: &AdminContext,
    controller: &mut RegistrantListController<S>,
    id: i64,
) -> Result<(), MinicursoError> {
    let outcome = controller
        .delete(id)
        .await
        .map_err(|error| context.report_failure(ui_str::registrant::DELETE_FAILED, error))?;
    Toast::success(ui_str::registrant::DELETED).show();
    if let MutationOutcome::ReloadFailed(error) = outcome {
        // % is Display, ? is Debug.
        tracing::warn!(message = "reload after delete failed", error = %error);
        Toast::warning(ui_str::registrant::RELOAD_FAILED).show();
    }
    Ok(())
}

/// `inscricoes_<today>.xlsx` in the current folder unless `output` is given.
#[must_use]
pub fn resolve_export_path(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(export_file_name(Local::now().date_naive())))
}

/// # Errors
///
/// When the file can't be written.
pub async fn save_export(blob: &ExportBlob, path: &Path) -> Result<(), MinicursoError> {
    tokio::fs::write(path, &blob.bytes)
        .await
        .map_err(|source| MinicursoError::Io {
            action: "write",
            path: path.to_owned(),
            source,
        })?;
    // % is Display, ? is Debug.
    tracing::debug!(
        message = "export saved",
        path = ?path,
        bytes = blob.len(),
        content_type = ?blob.content_type
    );
    Ok(())
}

/// # Errors
///
/// When the download fails or the file can't be written. Failing to open the file is
/// only a warning.
pub async fn try_export<S: RegistrantSource>(
    context: &AdminContext,
    controller: &RegistrantListController<S>,
    output: Option<PathBuf>,
    open: bool,
) -> Result<(), MinicursoError> {
    let blob = controller
        .export()
        .await
        .map_err(|error| context.report_failure(ui_str::registrant::EXPORT_FAILED, error))?;

    let path = resolve_export_path(output);
    if let Err(error) = save_export(&blob, &path).await {
        Toast::error(ui_str::registrant::EXPORT_FAILED).show();
        return Err(error);
    }
    Toast::success(ui_str::registrant::EXPORTED).show();
    Toast::info(ui_str::registrant::saved_to_msg(&path, blob.len())).show();

    if open && let Err(error) = open::that(&path) {
        tracing::warn!(message = "could not open export", error = %error);
        Toast::warning(format!("{}: {error}", path.display())).show();
    }
    Ok(())
}
