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

use async_trait::async_trait;
use minicurso_list_engine::{ExportBlob, RegistrantSource, SourceError};
use minicurso_schema::{ApiErrorBody, EmailCheck, Event, EventUpdate, Instructor,
                       InstructorUpsert, ItemUpsert, LoginRequest, LoginResponse,
                       ModuleUpsert, NewRegistration, Registrant, RegistrationCount};
use reqwest::{RequestBuilder, Response, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;

use super::{Endpoints, create_client_with_user_agent, map_decode_error,
            map_error_status, map_transport_error};

/// Answer to a form submission (login, signup). A refusal is an expected outcome the
/// caller explains to the user, so it is not a [`SourceError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome<T> {
    Accepted(T),
    Refused { status: u16, body: ApiErrorBody },
}

/// The REST API of the minicurso backend. Cheap to clone, `reqwest::Client` is an `Arc`
/// inside.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    endpoints: Endpoints,
    token: Option<String>,
}

/// The token is never printed.
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.endpoints.base_url())
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

// Construct.
impl ApiClient {
    /// # Errors
    ///
    /// If the HTTP client can't be built (TLS backend initialization).
    pub fn try_new(base_url: &str) -> miette::Result<Self> {
        Ok(Self {
            client: create_client_with_user_agent(None)?,
            endpoints: Endpoints::new(base_url),
            token: None,
        })
    }

    /// Every request made by the returned client carries `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints { &self.endpoints }
}

// Plumbing.
impl ApiClient {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send_raw(&self, request: RequestBuilder) -> Result<Response, SourceError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|error| map_transport_error(&error))
    }

    /// Sends, then turns any non 2xx status into a [`SourceError`]. `what` names the
    /// resource for a 404.
    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response, SourceError> {
        let response = self.send_raw(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = map_error_status(status.as_u16(), &body, what);
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "request failed",
            status = status.as_u16(),
            error = ?error
        );
        Err(error)
    }

    async fn text(response: Response) -> Result<String, SourceError> {
        response
            .text()
            .await
            .map_err(|error| map_transport_error(&error))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
        let body = Self::text(response).await?;
        serde_json::from_str(&body).map_err(|error| map_decode_error(&error))
    }

    /// `Accepted(body)` for a 2xx, else the parsed error body. Only transport problems
    /// are errors.
    async fn submit(
        &self,
        request: RequestBuilder,
    ) -> Result<FormOutcome<String>, SourceError> {
        let response = self.send_raw(request).await?;
        let status = response.status();
        let body = Self::text(response).await?;
        if status.is_success() {
            Ok(FormOutcome::Accepted(body))
        } else {
            Ok(FormOutcome::Refused {
                status: status.as_u16(),
                body: ApiErrorBody::parse_lenient(&body),
            })
        }
    }
}

// Public endpoints.
impl ApiClient {
    /// # Errors
    ///
    /// Transport failures, or a 2xx with a body that is not a login response.
    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<FormOutcome<LoginResponse>, SourceError> {
        let http = self.client.post(self.endpoints.login()).json(request);
        match self.submit(http).await? {
            FormOutcome::Accepted(body) => serde_json::from_str(&body)
                .map(FormOutcome::Accepted)
                .map_err(|error| map_decode_error(&error)),
            FormOutcome::Refused { status, body } => Ok(FormOutcome::Refused { status, body }),
        }
    }

    /// `None` when no event is configured yet, which the API signals with an empty body.
    ///
    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn get_event(&self) -> Result<Option<Event>, SourceError> {
        let response = self
            .send(self.client.get(self.endpoints.event()), "evento")
            .await?;
        let body = Self::text(response).await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|error| map_decode_error(&error))
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn registration_count(&self) -> Result<RegistrationCount, SourceError> {
        let response = self
            .send(self.client.get(self.endpoints.registration_count()), "contador")
            .await?;
        Self::json(response).await
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn check_email(&self, email: &str) -> Result<EmailCheck, SourceError> {
        let request = self
            .client
            .get(self.endpoints.email_check())
            .query(&[("email", email)]);
        let response = self.send(request, "email").await?;
        Self::json(response).await
    }

    /// # Errors
    ///
    /// Transport failures only, refusals come back as [`FormOutcome::Refused`].
    pub async fn register(
        &self,
        registration: &NewRegistration,
    ) -> Result<FormOutcome<()>, SourceError> {
        let http = self.client.post(self.endpoints.register()).json(registration);
        Ok(match self.submit(http).await? {
            FormOutcome::Accepted(_) => FormOutcome::Accepted(()),
            FormOutcome::Refused { status, body } => FormOutcome::Refused { status, body },
        })
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn list_instructors(&self) -> Result<Vec<Instructor>, SourceError> {
        let response = self
            .send(self.client.get(self.endpoints.instructors()), "instrutores")
            .await?;
        Self::json(response).await
    }
}

// Admin endpoints, these need [`ApiClient::with_token`].
impl ApiClient {
    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn update_event(&self, update: &EventUpdate) -> Result<(), SourceError> {
        self.send(self.client.put(self.endpoints.event()).json(update), "evento")
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn list_registrants(&self) -> Result<Vec<Registrant>, SourceError> {
        let response = self
            .send(self.client.get(self.endpoints.registrants()), "inscricoes")
            .await?;
        Self::json(response).await
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn delete_registrant(&self, id: i64) -> Result<(), SourceError> {
        self.send(
            self.client.delete(self.endpoints.registrant(id)),
            &format!("inscricao {id}"),
        )
        .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn export_registrants(&self) -> Result<ExportBlob, SourceError> {
        let response = self
            .send(self.client.get(self.endpoints.registrants_export()), "exportacao")
            .await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|it| it.to_str().ok())
            .map(ToOwned::to_owned);
        let bytes = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(&error))?;
        Ok(ExportBlob {
            bytes: bytes.to_vec(),
            content_type,
        })
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn create_module(&self, module: &ModuleUpsert) -> Result<(), SourceError> {
        self.send(self.client.post(self.endpoints.modules()).json(module), "modulo")
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn update_module(&self, id: i64, module: &ModuleUpsert) -> Result<(), SourceError> {
        self.send(
            self.client.put(self.endpoints.module(id)).json(module),
            &format!("modulo {id}"),
        )
        .await?;
        Ok(())
    }

    /// Removes the module and all of its items.
    ///
    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn delete_module(&self, id: i64) -> Result<(), SourceError> {
        self.send(self.client.delete(self.endpoints.module(id)), &format!("modulo {id}"))
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn create_item(&self, module_id: i64, item: &ItemUpsert) -> Result<(), SourceError> {
        self.send(
            self.client.post(self.endpoints.module_items(module_id)).json(item),
            &format!("modulo {module_id}"),
        )
        .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn update_item(&self, id: i64, item: &ItemUpsert) -> Result<(), SourceError> {
        self.send(
            self.client.put(self.endpoints.item(id)).json(item),
            &format!("item {id}"),
        )
        .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn delete_item(&self, id: i64) -> Result<(), SourceError> {
        self.send(self.client.delete(self.endpoints.item(id)), &format!("item {id}"))
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn create_instructor(
        &self,
        instructor: &InstructorUpsert,
    ) -> Result<(), SourceError> {
        self.send(
            self.client.post(self.endpoints.instructors()).json(instructor),
            "instrutor",
        )
        .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn update_instructor(
        &self,
        id: i64,
        instructor: &InstructorUpsert,
    ) -> Result<(), SourceError> {
        self.send(
            self.client.put(self.endpoints.instructor(id)).json(instructor),
            &format!("instrutor {id}"),
        )
        .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`SourceError`].
    pub async fn delete_instructor(&self, id: i64) -> Result<(), SourceError> {
        self.send(
            self.client.delete(self.endpoints.instructor(id)),
            &format!("instrutor {id}"),
        )
        .await?;
        Ok(())
    }
}

/// The registrant list engine loads through the same client.
#[async_trait]
impl RegistrantSource for ApiClient {
    async fn fetch_registrants(&self) -> Result<Vec<Registrant>, SourceError> {
        self.list_registrants().await
    }

    async fn delete_registrant(&self, id: i64) -> Result<(), SourceError> {
        ApiClient::delete_registrant(self, id).await
    }

    async fn export_registrants(&self) -> Result<ExportBlob, SourceError> {
        ApiClient::export_registrants(self).await
    }
}
