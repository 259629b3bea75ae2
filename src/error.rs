use crate::domain::models::PropertyType;
use thiserror::Error;

/// Errors produced while turning a wire property payload into a [crate::CellValue]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeErr {
    #[error("property payload has no string `type` field")]
    MissingType,
}

/// Errors produced while turning a [crate::CellValue] into a wire property payload
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeErr {
    #[error("no encoder is registered for {0} properties")]
    Unsupported(PropertyType),

    #[error("{property_type} properties cannot be written from a {found} value")]
    ValueMismatch {
        property_type: PropertyType,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum NotionClientErr {
    #[error("client is not connected, call connect first")]
    NotConnected,

    #[error("database {0} is not in the schema cache")]
    UnknownDatabase(String),

    #[error("property {property} is not part of database {database_id}")]
    UnknownProperty {
        database_id: String,
        property: String,
    },

    #[error("page reported more results without a next_cursor")]
    MissingCursor,

    #[error(transparent)]
    Decode(#[from] DecodeErr),

    #[error(transparent)]
    Encode(#[from] EncodeErr),

    /// transport failures, error statuses and malformed responses
    #[error(transparent)]
    Api(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, NotionClientErr>;
