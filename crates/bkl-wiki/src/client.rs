//! Wiki client.

use bkl_common_http::{extract_error_message, params, DispatchConfig, Dispatcher};
use regex::Regex;
use reqwest::{Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::WikiError;
use crate::page::{Page, Renamed, Replaced};
use crate::replace::Replacer;

/// Retry budget used by [`WikiClient::from_credentials`].
pub const DEFAULT_MAX_RETRY_ATTEMPTS: u32 = 5;

/// Jitter bound used by [`WikiClient::from_credentials`].
pub const DEFAULT_MAX_JITTER_MILLIS: u64 = 3000;

const WIKIS_PATH: &str = "/api/v2/wikis";

/// Client for the Backlog wiki API.
#[derive(Debug, Clone)]
pub struct WikiClient {
    dispatcher: Dispatcher,
}

impl WikiClient {
    /// Create a client from a full dispatch configuration.
    pub fn new(config: DispatchConfig) -> Result<Self, WikiError> {
        if config.base_url().is_empty() {
            return Err(WikiError::invalid("empty URL"));
        }
        if config.api_key().is_empty() {
            return Err(WikiError::invalid("empty api key"));
        }

        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
        })
    }

    /// Create a client with the default retry budget and jitter.
    pub fn from_credentials(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, WikiError> {
        let config = DispatchConfig::new(
            base_url,
            api_key,
            DEFAULT_MAX_RETRY_ATTEMPTS,
            DEFAULT_MAX_JITTER_MILLIS,
        )?;
        Self::new(config)
    }

    /// List the wiki pages of a project, keeping only those whose name
    /// matches `pattern` when one is given.
    pub async fn list(&self, project_key: &str, pattern: Option<&str>) -> Result<Vec<Page>, WikiError> {
        if project_key.is_empty() {
            return Err(WikiError::invalid("empty project key"));
        }

        let matcher = pattern
            .filter(|p| !p.is_empty())
            .map(Regex::new)
            .transpose()?;

        let request = self
            .dispatcher
            .request(Method::GET, WIKIS_PATH)
            .query(&[(params::PROJECT_ID_OR_KEY, project_key)])
            .build()
            .map_err(WikiError::Build)?;

        let pages: Vec<Page> = self.send_json(request, "list wikis").await?;
        let total = pages.len();

        let pages: Vec<Page> = match matcher {
            Some(re) => pages.into_iter().filter(|page| re.is_match(&page.name)).collect(),
            None => pages,
        };

        debug!(project_key, total, matched = pages.len(), "listed wiki pages");
        Ok(pages)
    }

    /// Fetch a single page, including its content.
    pub async fn get(&self, id: i64) -> Result<Page, WikiError> {
        if id <= 0 {
            return Err(WikiError::invalid(format!("invalid wikiId: {id}")));
        }

        let request = self
            .dispatcher
            .request(Method::GET, &page_path(id))
            .build()
            .map_err(WikiError::Build)?;

        self.send_json(request, "get wiki page").await
    }

    /// Rename `page`, replacing every occurrence of `before` in its name with
    /// `after`.
    pub async fn rename(&self, page: &Page, before: &str, after: &str) -> Result<Renamed, WikiError> {
        if before.is_empty() {
            return Err(WikiError::invalid("old strings must not be empty"));
        }

        let new_name = page.name.replace(before, after);

        let request = self
            .dispatcher
            .request(Method::PATCH, &page_path(page.id))
            .form(&[(params::NAME, new_name.as_str())])
            .build()
            .map_err(WikiError::Build)?;

        self.send(request, "update wiki page").await?;

        let renamed = Renamed {
            id: page.id,
            old_name: page.name.clone(),
            new_name,
        };
        info!(wiki_id = renamed.id, old = %renamed.old_name, new = %renamed.new_name, "renamed wiki page");
        Ok(renamed)
    }

    /// Rewrite the content of `page` with the flat `[old, new, ...]` pairs.
    ///
    /// `page` must carry its content, as returned by [`WikiClient::get`];
    /// a page without content is treated as empty.
    pub async fn replace<S: AsRef<str>>(&self, page: &Page, pairs: &[S]) -> Result<Replaced, WikiError> {
        let replacer = Replacer::new(pairs)?;
        let content = replacer.replace(page.content.as_deref().unwrap_or_default());

        let request = self
            .dispatcher
            .request(Method::PATCH, &page_path(page.id))
            .form(&[(params::CONTENT, content.as_str())])
            .build()
            .map_err(WikiError::Build)?;

        self.send(request, "update wiki page content").await?;

        info!(wiki_id = page.id, name = %page.name, "replaced wiki page content");
        Ok(Replaced {
            id: page.id,
            name: page.name.clone(),
        })
    }

    async fn send(&self, request: Request, action: &'static str) -> Result<Response, WikiError> {
        let response = self.dispatcher.dispatch(request).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = extract_error_message(Some(response)).await;
            return Err(WikiError::Status {
                action,
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: Request,
        action: &'static str,
    ) -> Result<T, WikiError> {
        let response = self.send(request, action).await?;
        let body = response.bytes().await.map_err(WikiError::Read)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn page_path(id: i64) -> String {
    format!("{WIKIS_PATH}/{id}")
}
