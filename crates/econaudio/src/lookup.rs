use crate::prelude::*;
use async_trait::async_trait;
use econaudio_core::lookup::{
    parse_search_editions, EditionLookup, LookupError, LookupKey, RemoteEdition,
};
use std::time::Duration;

/// Edition index served over HTTP, one JSON document per year
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: reqwest::Client,
    index_url: String,
}

impl HttpLookup {
    pub fn new(client: reqwest::Client, index_url: impl Into<String>) -> Self {
        Self {
            client,
            index_url: index_url.into(),
        }
    }

    /// Build a lookup from the global CLI configuration
    pub fn from_global(global: &crate::Global) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(global.timeout))
            .user_agent(concat!("econaudio/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::new(client, global.index_url.clone()))
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }
}

#[async_trait]
impl EditionLookup for HttpLookup {
    async fn fetch_year_list(&self, key: &LookupKey) -> Result<Vec<RemoteEdition>, LookupError> {
        let url = key.endpoint(&self.index_url);
        tracing::debug!(%url, year = key.year, "fetching edition index");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(LookupError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| LookupError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        parse_search_editions(&body)
    }
}
