//! Roster loading: where the champion list comes from before the dashboard
//! ever sees it.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::Champion;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_API_BASE_URL: &str = "https://api.pandascore.co";

/// Largest page the Pandascore API will serve.
const API_PAGE_SIZE: usize = 100;
/// Upper bound on followed pages; the LoL roster fits in two.
const API_MAX_PAGES: usize = 20;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("roster request failed (connection error): {0}")]
    Http(#[from] reqwest::Error),
    #[error("roster API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("missing API token; set PANDASCORE_TOKEN or pass --api-token")]
    MissingToken,
}

#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Human-readable origin, used in logs and the status line.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Champion>, RosterError>;
}

/// Reads a JSON array of champions from disk.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for FileRoster {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<Champion>, RosterError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RosterError::Io {
                path: self.path.clone(),
                source,
            })?;
        let champions: Vec<Champion> = serde_json::from_str(&raw)?;
        info!(
            path = %self.path.display(),
            count = champions.len(),
            "loaded roster from file"
        );
        Ok(champions)
    }
}

/// Pages through `GET /lol/champions` on the Pandascore REST API.
#[derive(Debug, Clone)]
pub struct PandascoreRoster {
    http: Client,
    base_url: String,
    token: String,
}

impl PandascoreRoster {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, RosterError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(RosterError::MissingToken)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http: Client::new(),
            base_url,
            token,
        })
    }

    async fn fetch_page(&self, page_number: usize) -> Result<Vec<Champion>, RosterError> {
        let response = self
            .http
            .get(format!("{}/lol/champions", self.base_url))
            .bearer_auth(&self.token)
            .query(&[
                ("page[size]", API_PAGE_SIZE.to_string()),
                ("page[number]", page_number.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RosterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RosterSource for PandascoreRoster {
    fn describe(&self) -> String {
        format!("{}/lol/champions", self.base_url)
    }

    async fn fetch(&self) -> Result<Vec<Champion>, RosterError> {
        let mut champions = Vec::new();

        for page_number in 1..=API_MAX_PAGES {
            let page = self.fetch_page(page_number).await?;
            let short_page = page.len() < API_PAGE_SIZE;
            debug!(page = page_number, count = page.len(), "fetched roster page");
            champions.extend(page);
            if short_page {
                break;
            }
        }

        info!(
            source = %self.describe(),
            count = champions.len(),
            "loaded roster from api"
        );
        Ok(champions)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
