use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

/// Fetches documents over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn resource_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl DataSource for HttpSource {
    async fn fetch<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T> {
        let url = self.resource_url(path);
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        // No status check: any body that parses as the expected document
        // counts as a success, whatever the status code.
        let doc = response.json::<T>().await?;
        Ok(doc)
    }
}

/// Reads documents from the local site root.
#[derive(Debug, Clone)]
pub struct LocalSource {
    base_path: PathBuf,
}

impl LocalSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl DataSource for LocalSource {
    async fn fetch<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading {}", full_path.display());

        let data = fs::read(full_path)?;
        let doc = serde_json::from_slice(&data)?;
        Ok(doc)
    }
}
