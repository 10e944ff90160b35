//! HTTP client for the developer REST API

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::domain::{Developer, DeveloperId, DeveloperPatch, NewDeveloper};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the `/api/devs` routes.
///
/// The plain methods collapse every failure into `None`, which callers treat
/// as "no data". The `try_` variants keep the cause.
#[derive(Clone)]
pub struct DevelopersClient {
    client: Client,
    base_url: String,
}

impl DevelopersClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("devroster/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn try_get_developers(&self) -> Result<Vec<Developer>, ClientError> {
        let response = self.client.get(self.url("/api/devs")).send().await?;
        decode(response).await
    }

    pub async fn try_get_developer(
        &self,
        id: &DeveloperId,
    ) -> Result<Option<Developer>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/devs/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn try_add_developer(
        &self,
        developer: &NewDeveloper,
    ) -> Result<Developer, ClientError> {
        let response = self
            .client
            .post(self.url("/api/devs"))
            .json(developer)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn try_edit_developer(
        &self,
        id: &DeveloperId,
        patch: &DeveloperPatch,
    ) -> Result<Developer, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/api/devs/{}", id)))
            .json(patch)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get_developers(&self) -> Option<Vec<Developer>> {
        self.try_get_developers()
            .await
            .map_err(|e| warn!(error = %e, "Fetching developers failed"))
            .ok()
    }

    pub async fn get_developer(&self, id: &DeveloperId) -> Option<Developer> {
        self.try_get_developer(id)
            .await
            .map_err(|e| warn!(error = %e, %id, "Fetching developer failed"))
            .ok()
            .flatten()
    }

    pub async fn add_developer(&self, developer: &NewDeveloper) -> Option<Developer> {
        self.try_add_developer(developer)
            .await
            .map_err(|e| warn!(error = %e, "Adding developer failed"))
            .ok()
    }

    pub async fn edit_developer(
        &self,
        id: &DeveloperId,
        patch: &DeveloperPatch,
    ) -> Option<Developer> {
        self.try_edit_developer(id, patch)
            .await
            .map_err(|e| warn!(error = %e, %id, "Editing developer failed"))
            .ok()
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::Http {
            status: status.as_u16(),
            message,
        });
    }
    response.json::<T>().await.map_err(ClientError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DevelopersClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/api/devs"), "http://localhost:3000/api/devs");
    }
}
