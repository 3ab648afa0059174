// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_schema::InstructorUpsert;

use super::{AdminContext, InstructorCommand, InstructorFields, ui_str};
use crate::common::prompt;
use crate::{MinicursoError, Toast, render::render_instructor_table};

/// Empty text clears email or bio. Module ids replace the current links only when at
/// least one was given.
pub fn apply_instructor_fields(upsert: &mut InstructorUpsert, fields: InstructorFields) {
    let non_blank = |it: String| {
        let it = it.trim().to_owned();
        (!it.is_empty()).then_some(it)
    };
    if let Some(email) = fields.email {
        upsert.email = non_blank(email);
    }
    if let Some(bio) = fields.bio {
        upsert.bio = non_blank(bio);
    }
    if !fields.module_ids.is_empty() {
        upsert.module_ids = fields.module_ids;
    }
}

/// # Errors
///
/// API failures, an unknown instructor, or a declined confirmation.
pub async fn try_run_instructor_command(
    context: &AdminContext,
    command: InstructorCommand,
) -> Result<(), MinicursoError> {
    match command {
        InstructorCommand::List => {
            let instructors = context
                .public_client()
                .list_instructors()
                .await
                .map_err(|error| context.report_failure(ui_str::instructor::LOAD_FAILED, error))?;
            println!("{}", render_instructor_table(&instructors));
        }
        InstructorCommand::Create { name, fields } => {
            let client = context.authorized_client()?;
            let mut upsert = InstructorUpsert {
                name: name.trim().to_owned(),
                ..Default::default()
            };
            apply_instructor_fields(&mut upsert, fields);
            client
                .create_instructor(&upsert)
                .await
                .map_err(|error| context.report_failure(ui_str::instructor::SAVE_FAILED, error))?;
            Toast::success(ui_str::instructor::SAVED).show();
        }
        InstructorCommand::Update { id, name, fields } => {
            let client = context.authorized_client()?;
            let instructors = client
                .list_instructors()
                .await
                .map_err(|error| context.report_failure(ui_str::instructor::LOAD_FAILED, error))?;
            let current = instructors
                .iter()
                .find(|it| it.id == id)
                .ok_or_else(|| MinicursoError::NotFound {
                    what: format!("instrutor {id}"),
                })?;
            let mut upsert = InstructorUpsert::from(current);
            if let Some(name) = name {
                upsert.name = name.trim().to_owned();
            }
            apply_instructor_fields(&mut upsert, fields);
            client
                .update_instructor(id, &upsert)
                .await
                .map_err(|error| context.report_failure(ui_str::instructor::SAVE_FAILED, error))?;
            Toast::success(ui_str::instructor::SAVED).show();
        }
        InstructorCommand::Delete { id, yes } => {
            let client = context.authorized_client()?;
            let prompt_text = ui_str::confirm_prompt_msg(
                ui_str::instructor::CONFIRM_TITLE,
                ui_str::instructor::CONFIRM_TEXT,
            );
            if !yes && !prompt::confirm(&prompt_text)? {
                return Err(MinicursoError::Cancelled);
            }
            client
                .delete_instructor(id)
                .await
                .map_err(|error| {
                    context.report_failure(ui_str::instructor::DELETE_FAILED, error)
                })?;
            Toast::success(ui_str::instructor::DELETED).show();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_apply_fields() {
        let mut upsert = InstructorUpsert {
            name: "Carla".into(),
            email: Some("c@x.io".into()),
            bio: Some("bio".into()),
            module_ids: vec![1],
        };

        apply_instructor_fields(
            &mut upsert,
            InstructorFields {
                email: Some(String::new()),
                bio: None,
                module_ids: vec![],
            },
        );
        assert_eq!(upsert.email, None);
        assert_eq!(upsert.bio.as_deref(), Some("bio"));
        assert_eq!(upsert.module_ids, vec![1]);

        apply_instructor_fields(
            &mut upsert,
            InstructorFields {
                module_ids: vec![2, 3],
                ..Default::default()
            },
        );
        assert_eq!(upsert.module_ids, vec![2, 3]);
    }
}
