//! Request and response bodies exchanged with the Notion API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `GET /databases/{id}`. Only the property catalogue is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseObject {
    /// property name to property schema object, in the order the service sent them
    pub properties: Map<String, Value>,
}

/// A single page (row) of a database query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageObject {
    #[serde(default)]
    pub id: Option<String>,
    /// property name to encoded property payload
    pub properties: Map<String, Value>,
}

/// One segment of a cursor paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    pub results: Vec<T>,
    /// opaque token for the next segment, only meaningful when `has_more` is set
    #[serde(default)]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageParent {
    pub database_id: String,
}

/// Body of `POST /pages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePageRequest {
    pub parent: PageParent,
    pub properties: Map<String, Value>,
}
