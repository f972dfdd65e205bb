//! reqwest による取得口

use crate::error::Result;
use async_trait::async_trait;
use champ_gallery_common::{CatalogSource, Error};
use std::time::Duration;

const USER_AGENT: &str = concat!("champ-gallery/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> champ_gallery_common::Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "HTTP応答");
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))
    }
}
