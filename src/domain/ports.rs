//! The outbound port the [crate::DatabaseClient] talks to

use crate::domain::models::api::{
    CreatePageRequest, DatabaseObject, PageObject, PaginatedList,
};
use anyhow::Result;
use serde_json::Value;

/// The subset of the Notion HTTP API this crate needs.
///
/// Implementations own authentication; callers never pass credentials.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait NotionApi: Send + Sync + 'static {
    /// `GET /databases/{database_id}`
    fn retrieve_database(
        &self,
        database_id: &str,
    ) -> impl Future<Output = Result<DatabaseObject>> + Send;

    /// `POST /databases/{database_id}/query`, continuing from `start_cursor` when given
    fn query_database(
        &self,
        database_id: &str,
        start_cursor: Option<String>,
    ) -> impl Future<Output = Result<PaginatedList<PageObject>>> + Send;

    /// `POST /pages`, returns the created page as sent by the service
    fn create_page(
        &self,
        request: CreatePageRequest,
    ) -> impl Future<Output = Result<Value>> + Send;

    /// `GET /blocks/{block_id}/children`
    fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<String>,
    ) -> impl Future<Output = Result<PaginatedList<Value>>> + Send;
}
