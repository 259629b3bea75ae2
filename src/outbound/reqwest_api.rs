use crate::config::NotionConfig;
use crate::domain::{
    models::api::{
        CreatePageRequest, DatabaseObject, PageObject, PaginatedList, QueryDatabaseRequest,
    },
    ports::NotionApi,
    service::DatabaseClient,
};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;


/// [NotionApi] over HTTPS using [reqwest].
///
/// The session headers (token, API version, content type) are built once from
/// the [NotionConfig] and sent with every request.
#[derive(Clone, Debug)]
pub struct NotionHttpApi {
    inner: reqwest::Client,
    api_base: String,
}

impl NotionHttpApi {
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .default_headers(config.headers()?)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            inner,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn database_url(&self, database_id: &str) -> String {
        format!("{}/databases/{}", self.api_base, database_id)
    }

    fn query_url(&self, database_id: &str) -> String {
        format!("{}/query", self.database_url(database_id))
    }

    fn pages_url(&self) -> String {
        format!("{}/pages", self.api_base)
    }

    fn block_children_url(&self, block_id: &str) -> String {
        format!("{}/blocks/{}/children", self.api_base, block_id)
    }
}

/// Fail on non-success statuses with the body attached, otherwise parse the body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response, endpoint: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("HTTP {}: {}", status, body);
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("failed to parse {endpoint} response"))
}

impl NotionApi for NotionHttpApi {
    #[tracing::instrument(skip(self), err)]
    async fn retrieve_database(&self, database_id: &str) -> Result<DatabaseObject> {
        let response = self
            .inner
            .get(self.database_url(database_id))
            .send()
            .await
            .context("failed to send retrieve database request")?;

        read_json(response, "retrieve database").await
    }

    #[tracing::instrument(skip(self), err)]
    async fn query_database(
        &self,
        database_id: &str,
        start_cursor: Option<String>,
    ) -> Result<PaginatedList<PageObject>> {
        let response = self
            .inner
            .post(self.query_url(database_id))
            .json(&QueryDatabaseRequest { start_cursor })
            .send()
            .await
            .context("failed to send query database request")?;

        read_json(response, "query database").await
    }

    #[tracing::instrument(skip(self, request), err)]
    async fn create_page(&self, request: CreatePageRequest) -> Result<Value> {
        let response = self
            .inner
            .post(self.pages_url())
            .json(&request)
            .send()
            .await
            .context("failed to send create page request")?;

        read_json(response, "create page").await
    }

    #[tracing::instrument(skip(self), err)]
    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<String>,
    ) -> Result<PaginatedList<Value>> {
        let mut request = self.inner.get(self.block_children_url(block_id));
        if let Some(start_cursor) = &start_cursor {
            request = request.query(&[("start_cursor", start_cursor)]);
        }

        let response = request
            .send()
            .await
            .context("failed to send list block children request")?;

        read_json(response, "list block children").await
    }
}

impl DatabaseClient<NotionHttpApi> {
    /// A disconnected client talking to the API described by `config`.
    pub fn from_config(config: &NotionConfig) -> Result<Self> {
        Ok(Self::new(NotionHttpApi::new(config)?))
    }
}
