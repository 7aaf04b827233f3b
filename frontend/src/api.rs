//! HTTP implementation of the save/load collaborator.
//!
//! Maps the backend's status codes onto [`StoreError`]: 404 becomes
//! `NotFound`, 400 becomes `Validation` carrying the response body,
//! everything else (including transport failures) becomes `Network`.
//! Overlapping requests for the same form are not serialized; the last
//! response to arrive wins, as everywhere else in this client.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use common::model::form::FormSchema;
use common::model::participant::Participant;
use common::store::{SchemaStore, StoreError};

use crate::session::Session;

pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// For the endpoints that serve drafts and published forms to anyone.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Carries the session token as a bearer credential on every request.
    pub fn with_session(session: &Session) -> Self {
        Self {
            token: session.token().map(str::to_owned),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    match response.status() {
        200 | 201 => response.json::<T>().await.map_err(as_network),
        404 => Err(StoreError::NotFound),
        400 => Err(StoreError::Validation(
            response.text().await.unwrap_or_default(),
        )),
        status => Err(StoreError::Network(format!("unexpected status {status}"))),
    }
}

fn as_network(err: gloo_net::Error) -> StoreError {
    StoreError::Network(err.to_string())
}

#[async_trait(?Send)]
impl SchemaStore for ApiClient {
    async fn fetch(&self, id: u64) -> Result<FormSchema, StoreError> {
        let response = self
            .authorized(Request::get(&format!("/api/forms/{id}")))
            .send()
            .await
            .map_err(as_network)?;
        read_json(response).await
    }

    async fn create(&self, schema: &FormSchema) -> Result<FormSchema, StoreError> {
        let response = self
            .authorized(Request::post("/api/forms"))
            .json(schema)
            .map_err(as_network)?
            .send()
            .await
            .map_err(as_network)?;
        read_json(response).await
    }

    async fn update(&self, id: u64, schema: &FormSchema) -> Result<FormSchema, StoreError> {
        let response = self
            .authorized(Request::put(&format!("/api/forms/{id}")))
            .json(schema)
            .map_err(as_network)?
            .send()
            .await
            .map_err(as_network)?;
        read_json(response).await
    }

    async fn participants(&self, form_id: u64) -> Result<Vec<Participant>, StoreError> {
        let response = self
            .authorized(Request::get(&format!("/api/forms/{form_id}/participants")))
            .send()
            .await
            .map_err(as_network)?;
        read_json(response).await
    }

    async fn create_participant(
        &self,
        form_id: u64,
        name: &str,
        email: &str,
    ) -> Result<Participant, StoreError> {
        let response = self
            .authorized(Request::post(&format!("/api/forms/{form_id}/participants")))
            .json(&json!({ "name": name, "email": email }))
            .map_err(as_network)?
            .send()
            .await
            .map_err(as_network)?;
        read_json(response).await
    }

    async fn regenerate_password(&self, participant_id: u64) -> Result<Participant, StoreError> {
        let response = self
            .authorized(Request::post(&format!(
                "/api/participants/{participant_id}/password"
            )))
            .send()
            .await
            .map_err(as_network)?;
        read_json(response).await
    }
}
