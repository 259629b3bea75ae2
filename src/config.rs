use anyhow::Context;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};


pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_API_VERSION: &str = "2021-05-13";

const NOTION_INTEGRATION_TOKEN: &str = "NOTION_INTEGRATION_TOKEN";
const NOTION_API_BASE: &str = "NOTION_API_BASE";
const NOTION_VERSION: &str = "NOTION_VERSION";

const NOTION_VERSION_HEADER: &str = "notion-version";

/// Connection parameters for the Notion API.
///
/// Use [NotionConfig::from_env] in deployed code and [NotionConfig::new] when the
/// integration token comes from somewhere else.
#[derive(Clone)]
pub struct NotionConfig {
    /// base url that the `databases`, `pages` and `blocks` resources hang off
    pub api_base: String,
    /// secret of the Notion integration, sent as a bearer token
    pub integration_token: String,
    /// value of the `Notion-Version` header
    pub notion_version: String,
}

impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_base", &self.api_base)
            .field("integration_token", &"<redacted>")
            .field("notion_version", &self.notion_version)
            .finish()
    }
}

impl NotionConfig {
    pub fn new(integration_token: impl Into<String>) -> Self {
        Self {
            api_base: NOTION_API_BASE_URL.to_string(),
            integration_token: integration_token.into(),
            notion_version: NOTION_API_VERSION.to_string(),
        }
    }

    pub fn with_api_base(self, api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..self
        }
    }

    pub fn with_notion_version(self, notion_version: impl Into<String>) -> Self {
        Self {
            notion_version: notion_version.into(),
            ..self
        }
    }

    /// Reads `NOTION_INTEGRATION_TOKEN` (required), `NOTION_API_BASE` and `NOTION_VERSION`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let integration_token = lookup(NOTION_INTEGRATION_TOKEN)
            .context("NOTION_INTEGRATION_TOKEN must be provided")?;

        let mut config = Self::new(integration_token);
        if let Some(api_base) = lookup(NOTION_API_BASE) {
            config = config.with_api_base(api_base);
        }
        if let Some(notion_version) = lookup(NOTION_VERSION) {
            config = config.with_notion_version(notion_version);
        }

        Ok(config)
    }

    /// The headers sent with every request of a session.
    pub fn headers(&self) -> anyhow::Result<HeaderMap> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.integration_token))
                .context("integration token is not a valid header value")?;
        authorization.set_sensitive(true);

        let notion_version = HeaderValue::from_str(&self.notion_version)
            .context("notion version is not a valid header value")?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(HeaderName::from_static(NOTION_VERSION_HEADER), notion_version);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}
