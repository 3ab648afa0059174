// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{dim, emphasis, error, header};

pub mod validation {
    pub const NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 3 caracteres";
    pub const INVALID_EMAIL: &str = "Email invalido";
    pub const COURSE_REQUIRED: &str = "Curso e obrigatorio";
    pub const LEVEL_REQUIRED: &str = "Selecione seu nivel de programacao";
}

pub mod register {
    pub const REGISTERED: &str = "Inscricao realizada com sucesso!";
    pub const DUPLICATE_EMAIL: &str = "Este email ja esta inscrito";
    pub const SOLD_OUT: &str = "Desculpe, as vagas foram esgotadas.";
    pub const CLOSED: &str = "Desculpe, as inscricoes foram encerradas.";
    pub const FAILED: &str = "Ocorreu um erro ao processar sua inscricao. Tente novamente.";
    pub const CONNECTION_ERROR: &str =
        "Erro de conexao. Verifique sua internet e tente novamente.";
}

pub mod prompt {
    pub const NAME: &str = "Nome completo: ";
    pub const EMAIL: &str = "Email: ";
    pub const COURSE: &str = "Curso: ";
    pub const LEVEL: &str = "Nivel de programacao (Iniciante, Intermediario, Avancado): ";
}

pub mod info {
    pub const LOAD_FAILED: &str =
        "Nao foi possivel carregar o conteudo. Tente novamente mais tarde.";
    pub const PROGRAMME_HEADER: &str = "Conteudo programatico";
    pub const CLOSED_TITLE: &str = "Inscricoes encerradas";
    pub const CLOSED_TEXT: &str = "As inscricoes para este evento estao encerradas.";
    pub const SOLD_OUT_TITLE: &str = "Vagas esgotadas";
    pub const SOLD_OUT_TEXT: &str = "Todas as vagas para este evento ja foram preenchidas.";
    pub const HOW_TO_REGISTER: &str = "Para se inscrever: mc-signup register";
}

/// `  Email: Email invalido`, one line per failing field.
#[must_use]
pub fn field_issue_line(label: &str, message: &str) -> String {
    format!("  {} {}", emphasis(format!("{label}:")), error(message))
}

#[must_use]
pub fn closed_notice_msg(title: &str, text: &str) -> String {
    format!("{}\n{}", header(title), dim(text))
}
