//! HTTP client for the `/modelo` endpoint.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::traits::ModeloApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Modelo, ModeloDraft, ModeloId};

/// reqwest-backed client; on wasm32 this goes through the browser's fetch
#[derive(Debug, Clone)]
pub struct HttpModeloClient {
    http: Client,
    config: ClientConfig,
}

impl HttpModeloClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Turn non-2xx into an error; the body of a failed response is never read
    fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait(?Send)]
impl ModeloApi for HttpModeloClient {
    async fn list(&self) -> ApiResult<Vec<Modelo>> {
        let url = self.config.collection_url();
        debug!(%url, "GET");
        let response = Self::check(self.http.get(&url).send().await?)?;
        response
            .json::<Vec<Modelo>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &ModeloDraft) -> ApiResult<()> {
        let url = self.config.collection_url();
        debug!(%url, "POST");
        Self::check(self.http.post(&url).json(draft).send().await?)?;
        Ok(())
    }

    async fn update(&self, id: &ModeloId, draft: &ModeloDraft) -> ApiResult<()> {
        let url = self.config.record_url(id);
        debug!(%url, "PUT");
        Self::check(self.http.put(&url).json(draft).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: &ModeloId) -> ApiResult<()> {
        let url = self.config.record_url(id);
        debug!(%url, "DELETE");
        Self::check(self.http.delete(&url).send().await?)?;
        Ok(())
    }
}
