// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `modules` and `items`. The programme is read through the public event endpoint, the
//! changes go to the authenticated content endpoints.

use minicurso_schema::{Event, Item, ItemUpsert, Module, ModuleUpsert};

use super::{AdminContext, ContentFields, ItemCommand, ModuleCommand, ui_str};
use crate::common::prompt;
use crate::{ApiClient, MinicursoError, Toast, render::render_module_list};

/// `max(order) + 1`, or 1 for an empty list.
#[must_use]
pub fn next_order(orders: impl IntoIterator<Item = i32>) -> i32 {
    orders.into_iter().max().map_or(1, |it| it.saturating_add(1))
}

fn non_blank(text: Option<String>) -> Option<Option<String>> {
    text.map(|it| {
        let it = it.trim().to_owned();
        (!it.is_empty()).then_some(it)
    })
}

/// Applies the flags to a module body. `None` flags keep the current value.
pub fn apply_module_fields(upsert: &mut ModuleUpsert, fields: ContentFields) {
    if let Some(description) = non_blank(fields.description) {
        upsert.description = description;
    }
    if let Some(order) = fields.order {
        upsert.order = order;
    }
    if let Some(minutes) = fields.minutes {
        upsert.workload_minutes = Some(minutes);
    }
    if let Some(active) = fields.active {
        upsert.active = active;
    }
}

pub fn apply_item_fields(upsert: &mut ItemUpsert, fields: ContentFields) {
    if let Some(description) = non_blank(fields.description) {
        upsert.description = description;
    }
    if let Some(order) = fields.order {
        upsert.order = order;
    }
    if let Some(minutes) = fields.minutes {
        upsert.duration_minutes = Some(minutes);
    }
    if let Some(active) = fields.active {
        upsert.active = active;
    }
}

/// Items are addressed by id alone, so every module is searched.
#[must_use]
pub fn find_item_anywhere(event: &Event, item_id: i64) -> Option<(&Module, &Item)> {
    event.modules.iter().find_map(|module| {
        module
            .items
            .iter()
            .find(|it| it.id == item_id)
            .map(|item| (module, item))
    })
}

async fn fetch_event(
    context: &AdminContext,
    client: &ApiClient,
) -> Result<Option<Event>, MinicursoError> {
    client
        .get_event()
        .await
        .map_err(|error| context.report_failure(ui_str::module::LOAD_FAILED, error))
}

fn confirmed(yes: bool, title: &str, text: &str) -> Result<bool, MinicursoError> {
    if yes {
        return Ok(true);
    }
    prompt::confirm(&ui_str::confirm_prompt_msg(title, text))
}

/// # Errors
///
/// API failures, a missing module or item, or a declined confirmation.
pub async fn try_run_module_command(
    context: &AdminContext,
    command: ModuleCommand,
) -> Result<(), MinicursoError> {
    match command {
        ModuleCommand::List => {
            let event = fetch_event(context, context.public_client()).await?;
            let modules = event.map(|it| it.modules).unwrap_or_default();
            println!("{}", render_module_list(&modules));
        }
        ModuleCommand::Create { title, fields } => {
            let client = context.authorized_client()?;
            let event = fetch_event(context, &client).await?;
            let order = next_order(event.iter().flat_map(|it| it.modules.iter().map(|m| m.order)));
            let mut upsert = ModuleUpsert {
                title: title.trim().to_owned(),
                order,
                active: true,
                ..Default::default()
            };
            apply_module_fields(&mut upsert, fields);
            client
                .create_module(&upsert)
                .await
                .map_err(|error| context.report_failure(ui_str::module::SAVE_FAILED, error))?;
            Toast::success(ui_str::module::SAVED).show();
        }
        ModuleCommand::Update { id, title, fields } => {
            let client = context.authorized_client()?;
            let event = fetch_event(context, &client).await?;
            let module = event
                .as_ref()
                .and_then(|it| it.find_module(id))
                .ok_or_else(|| MinicursoError::NotFound {
                    what: format!("modulo {id}"),
                })?;
            let mut upsert = ModuleUpsert::from(module);
            if let Some(title) = title {
                upsert.title = title.trim().to_owned();
            }
            apply_module_fields(&mut upsert, fields);
            client
                .update_module(id, &upsert)
                .await
                .map_err(|error| context.report_failure(ui_str::module::SAVE_FAILED, error))?;
            Toast::success(ui_str::module::SAVED).show();
        }
        ModuleCommand::Delete { id, yes } => {
            let client = context.authorized_client()?;
            if !confirmed(yes, ui_str::module::CONFIRM_TITLE, ui_str::module::CONFIRM_TEXT)? {
                return Err(MinicursoError::Cancelled);
            }
            client
                .delete_module(id)
                .await
                .map_err(|error| context.report_failure(ui_str::module::DELETE_FAILED, error))?;
            Toast::success(ui_str::module::DELETED).show();
        }
    }
    Ok(())
}

/// # Errors
///
/// API failures, a missing module or item, or a declined confirmation.
pub async fn try_run_item_command(
    context: &AdminContext,
    command: ItemCommand,
) -> Result<(), MinicursoError> {
    let client = context.authorized_client()?;
    match command {
        ItemCommand::Create {
            module_id,
            title,
            fields,
        } => {
            let event = fetch_event(context, &client).await?;
            let module = event
                .as_ref()
                .and_then(|it| it.find_module(module_id))
                .ok_or_else(|| MinicursoError::NotFound {
                    what: format!("modulo {module_id}"),
                })?;
            let mut upsert = ItemUpsert {
                title: title.trim().to_owned(),
                order: next_order(module.items.iter().map(|it| it.order)),
                active: true,
                ..Default::default()
            };
            apply_item_fields(&mut upsert, fields);
            client
                .create_item(module_id, &upsert)
                .await
                .map_err(|error| context.report_failure(ui_str::item::SAVE_FAILED, error))?;
            Toast::success(ui_str::item::SAVED).show();
        }
        ItemCommand::Update { id, title, fields } => {
            let event = fetch_event(context, &client).await?;
            let (_, item) = event
                .as_ref()
                .and_then(|it| find_item_anywhere(it, id))
                .ok_or_else(|| MinicursoError::NotFound {
                    what: format!("item {id}"),
                })?;
            let mut upsert = ItemUpsert::from(item);
            if let Some(title) = title {
                upsert.title = title.trim().to_owned();
            }
            apply_item_fields(&mut upsert, fields);
            client
                .update_item(id, &upsert)
                .await
                .map_err(|error| context.report_failure(ui_str::item::SAVE_FAILED, error))?;
            Toast::success(ui_str::item::SAVED).show();
        }
        ItemCommand::Delete { id, yes } => {
            if !confirmed(yes, ui_str::item::CONFIRM_TITLE, ui_str::item::CONFIRM_TEXT)? {
                return Err(MinicursoError::Cancelled);
            }
            client
                .delete_item(id)
                .await
                .map_err(|error| context.report_failure(ui_str::item::DELETE_FAILED, error))?;
            Toast::success(ui_str::item::DELETED).show();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(vec![], 1)]
    #[test_case(vec![1, 2, 3], 4)]
    #[test_case(vec![5, 2], 6)]
    fn test_next_order(orders: Vec<i32>, expected: i32) {
        assert_eq!(next_order(orders), expected);
    }

    #[test]
    fn test_apply_module_fields_keeps_unset() {
        let mut upsert = ModuleUpsert {
            title: "Ownership".into(),
            description: Some("Move".into()),
            order: 2,
            workload_minutes: Some(60),
            active: true,
        };
        apply_module_fields(
            &mut upsert,
            ContentFields {
                minutes: Some(90),
                active: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(upsert.description.as_deref(), Some("Move"));
        assert_eq!(upsert.order, 2);
        assert_eq!(upsert.workload_minutes, Some(90));
        assert!(!upsert.active);
    }

    #[test]
    fn test_blank_description_clears_it() {
        let mut upsert = ItemUpsert {
            description: Some("old".into()),
            ..Default::default()
        };
        apply_item_fields(
            &mut upsert,
            ContentFields {
                description: Some(" ".into()),
                ..Default::default()
            },
        );
        assert_eq!(upsert.description, None);
    }

    #[test]
    fn test_find_item_anywhere() {
        let event = Event {
            modules: vec![
                Module { id: 1, items: vec![Item { id: 10, ..Default::default() }], ..Default::default() },
                Module { id: 2, items: vec![Item { id: 20, ..Default::default() }], ..Default::default() },
            ],
            ..Default::default()
        };
        assert_eq!(find_item_anywhere(&event, 20).map(|(m, i)| (m.id, i.id)), Some((2, 20)));
        assert_eq!(find_item_anywhere(&event, 30), None);
    }
}
