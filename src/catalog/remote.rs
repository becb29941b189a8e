//! Remote exercise catalog over HTTP.
//!
//! The catalog is keyed by muscle group and returns a JSON array of exercise
//! objects; only their `name` field is used.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::service::ExerciseCatalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Catalog API key is not configured")]
    NotConfigured,
}

#[derive(Debug, Deserialize)]
struct CatalogExercise {
    name: String,
}

/// Client for an API Ninjas style `/v1/exercises?muscle=` endpoint.
#[derive(Clone, Debug)]
pub struct NinjaCatalogClient {
    base_url: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl NinjaCatalogClient {
    pub fn new(
        base_url: &str,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    pub async fn fetch_names(&self, muscle_group: &str) -> Result<Vec<String>, CatalogError> {
        let api_key = self.api_key.as_ref().ok_or(CatalogError::NotConfigured)?;
        let url = format!("{}/v1/exercises", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("muscle", muscle_group)])
            .header("X-Api-Key", api_key.expose_secret())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(256).collect(),
            });
        }

        let exercises: Vec<CatalogExercise> = resp.json().await?;
        Ok(exercises.into_iter().map(|e| e.name).collect())
    }
}

#[async_trait]
impl ExerciseCatalog for NinjaCatalogClient {
    async fn names_for(&self, muscle_group: &str) -> Result<Vec<String>, CatalogError> {
        self.fetch_names(muscle_group).await
    }
}
