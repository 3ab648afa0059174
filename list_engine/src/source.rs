// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use async_trait::async_trait;
use minicurso_schema::Registrant;

use crate::SourceError;

/// The data provider the engine loads from. In production this is the REST client in
/// `minicurso-cmdr`, in tests an in-memory fake.
#[async_trait]
pub trait RegistrantSource: Send + Sync {
    /// # Errors
    ///
    /// [`SourceError::Transport`] if the server can't be reached, [`SourceError::Decode`]
    /// if the payload is malformed.
    async fn fetch_registrants(&self) -> Result<Vec<Registrant>, SourceError>;

    /// On success the caller reloads the whole list, nothing is removed locally.
    ///
    /// # Errors
    ///
    /// [`SourceError::NotFound`] if it was already deleted, or a transport error.
    async fn delete_registrant(&self, id: i64) -> Result<(), SourceError>;

    /// Never retried automatically.
    ///
    /// # Errors
    ///
    /// Any [`SourceError`] the provider reports.
    async fn export_registrants(&self) -> Result<ExportBlob, SourceError>;
}

/// Lets one provider be shared between a controller and whoever else needs it.
#[async_trait]
impl<T: RegistrantSource + ?Sized> RegistrantSource for Arc<T> {
    async fn fetch_registrants(&self) -> Result<Vec<Registrant>, SourceError> {
        self.as_ref().fetch_registrants().await
    }

    async fn delete_registrant(&self, id: i64) -> Result<(), SourceError> {
        self.as_ref().delete_registrant(id).await
    }

    async fn export_registrants(&self) -> Result<ExportBlob, SourceError> {
        self.as_ref().export_registrants().await
    }
}

/// Opaque spreadsheet bytes produced by the backend, to be saved as-is.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExportBlob {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl ExportBlob {
    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }
}

/// Bytes are not printed.
impl std::fmt::Debug for ExportBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportBlob")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}
