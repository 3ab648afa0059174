// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use minicurso_schema::{Item, Module};

use crate::{dim, emphasis, header, normal, sanitize, warning};

pub const PROGRAMME_SOON_MESSAGE: &str = "Conteudo programatico em breve.";
pub const NO_MODULES_MESSAGE: &str = "Nenhum modulo cadastrado. Cadastre o evento primeiro.";
pub const NO_ITEMS_MESSAGE: &str = "Nenhum item cadastrado.";

fn inactive_badge(active: bool) -> String {
    if active { String::new() } else { format!(" {}", warning("[Inativo]")) }
}

/// What the public signup page shows: active modules only, items as bullets.
#[must_use]
pub fn render_programme(modules: &[Module]) -> String {
    let active: Vec<&Module> = modules.iter().filter(|it| it.active).collect();
    if active.is_empty() {
        return dim(PROGRAMME_SOON_MESSAGE);
    }

    active
        .into_iter()
        .map(|module| {
            let mut lines = vec![format!(
                "{} {}{}",
                emphasis(format!("{:>2}.", module.order)),
                header(sanitize(&module.title)),
                module
                    .workload_formatted
                    .as_deref()
                    .map(|it| format!("  {}", dim(format!("({})", sanitize(it)))))
                    .unwrap_or_default()
            )];
            if let Some(description) = module.description.as_deref()
                && !description.trim().is_empty()
            {
                lines.push(format!("    {}", normal(sanitize(description))));
            }
            lines.extend(
                module
                    .items
                    .iter()
                    .filter(|it| it.active)
                    .map(|it| format!("    • {}", sanitize(&it.title))),
            );
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_item_row(item: &Item) -> String {
    format!(
        "    {} {}. {}{}",
        dim(format!("#{}", item.id)),
        item.order,
        sanitize(&item.title),
        inactive_badge(item.active)
    )
}

/// The admin list: every module (active or not) with its ids, workload and item count,
/// then its items.
#[must_use]
pub fn render_module_list(modules: &[Module]) -> String {
    if modules.is_empty() {
        return warning(NO_MODULES_MESSAGE);
    }

    modules
        .iter()
        .map(|module| {
            let meta = [
                module.workload_formatted.as_deref().map(sanitize),
                Some(format!("{} itens", module.items.len())),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" | ");

            let mut lines = vec![
                format!(
                    "{} {}. {}{}",
                    dim(format!("#{}", module.id)),
                    module.order,
                    header(sanitize(&module.title)),
                    inactive_badge(module.active)
                ),
                format!("    {}", dim(meta)),
            ];
            if module.items.is_empty() {
                lines.push(format!("    {}", dim(NO_ITEMS_MESSAGE)));
            } else {
                lines.extend(module.items.iter().map(render_item_row));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
