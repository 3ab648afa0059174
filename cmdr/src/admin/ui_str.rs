// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every user facing string of `mc-admin`. Toast messages are plain, the renderers add
//! the styling.

use crate::{dim, emphasis, emphasis_delete, normal};

pub mod auth {
    pub const ACCESS_DENIED: &str = "Acesso negado. Usuario nao e administrador.";
    pub const INVALID_CREDENTIALS: &str = "Usuario ou senha invalidos";
    pub const CONNECTION_ERROR: &str = "Erro de conexao. Tente novamente.";
    pub const SESSION_EXPIRED: &str = "Sessao expirada. Faca login novamente.";
    pub const LOGGED_OUT: &str = "Sessao encerrada.";
    pub const NOT_LOGGED_IN: &str = "Nenhuma sessao ativa.";
    pub const USERNAME_PROMPT: &str = "Usuario: ";
    pub const PASSWORD_PROMPT: &str = "Senha: ";

    #[must_use]
    pub fn welcome_msg(username: &str) -> String { format!("Bem-vindo, {username}!") }
}

pub mod event {
    pub const SAVED: &str = "Configuracoes do evento salvas com sucesso!";
    pub const SAVE_FAILED: &str = "Erro ao salvar configuracoes do evento";
    pub const LOAD_FAILED: &str = "Erro ao carregar evento";
}

pub mod module {
    pub const SAVED: &str = "Modulo salvo com sucesso!";
    pub const SAVE_FAILED: &str = "Erro ao salvar modulo";
    pub const DELETED: &str = "Modulo excluido com sucesso!";
    pub const DELETE_FAILED: &str = "Erro ao excluir modulo";
    pub const LOAD_FAILED: &str = "Erro ao carregar modulos.";
    pub const CONFIRM_TITLE: &str = "Excluir Modulo";
    pub const CONFIRM_TEXT: &str =
        "Tem certeza que deseja excluir este modulo e todos os seus itens?";
}

pub mod item {
    pub const SAVED: &str = "Item salvo com sucesso!";
    pub const SAVE_FAILED: &str = "Erro ao salvar item";
    pub const DELETED: &str = "Item excluido com sucesso!";
    pub const DELETE_FAILED: &str = "Erro ao excluir item";
    pub const CONFIRM_TITLE: &str = "Excluir Item";
    pub const CONFIRM_TEXT: &str = "Tem certeza que deseja excluir este item?";
}

pub mod instructor {
    pub const SAVED: &str = "Instrutor salvo com sucesso!";
    pub const SAVE_FAILED: &str = "Erro ao salvar instrutor";
    pub const DELETED: &str = "Instrutor excluido com sucesso!";
    pub const DELETE_FAILED: &str = "Erro ao excluir instrutor";
    pub const LOAD_FAILED: &str = "Erro ao carregar instrutores";
    pub const CONFIRM_TITLE: &str = "Excluir Instrutor";
    pub const CONFIRM_TEXT: &str = "Tem certeza que deseja excluir este instrutor?";
}

pub mod registrant {
    pub const LOAD_FAILED: &str = "Erro ao carregar inscricoes";
    pub const DELETED: &str = "Inscricao excluida com sucesso!";
    pub const DELETE_FAILED: &str = "Erro ao excluir inscricao";
    pub const RELOAD_FAILED: &str =
        "Inscricao excluida, mas a lista nao pode ser recarregada";
    pub const EXPORTED: &str = "Exportacao concluida com sucesso!";
    pub const EXPORT_FAILED: &str = "Erro ao exportar inscricoes";
    pub const CONFIRM_TITLE: &str = "Excluir Inscricao";
    pub const CONFIRM_TEXT: &str = "Tem certeza que deseja excluir esta inscricao?";

    #[must_use]
    pub fn saved_to_msg(path: &std::path::Path, bytes: usize) -> String {
        format!("Arquivo salvo em {} ({bytes} bytes)", path.display())
    }
}

pub mod browse {
    pub const PROMPT: &str = "inscricoes> ";
    pub const BYE: &str = "Ate logo!";
}

#[must_use]
pub fn confirm_prompt_msg(title: &str, text: &str) -> String {
    format!(
        "{}\n{} {} ",
        emphasis_delete(title),
        normal(text),
        dim("[s/N]")
    )
}

#[must_use]
pub fn browse_banner_msg() -> String {
    format!(
        "{}\n{}",
        emphasis("Navegador de inscricoes"),
        dim("Digite `help` para ver os comandos, `quit` para sair.")
    )
}
