//! Client for reading Notion databases into tables and adding rows to them.
//!
//! - **domain**: the property codec, tabular models and [DatabaseClient]
//! - **outbound**: the [NotionHttpApi] adapter used against the real service
//! - **config**: [NotionConfig], the connection parameters and session headers
//!
//! ```no_run
//! # async fn run() -> notion_db_client::Result<()> {
//! use notion_db_client::{DatabaseClient, NotionConfig, PropertyValue};
//!
//! let config = NotionConfig::from_env()?;
//! let mut client = DatabaseClient::from_config(&config)?;
//! client.connect(["database_id"]).await?;
//!
//! let table = client.get_database("database_id").await?;
//! println!("{} rows, columns {:?}", table.len(), table.columns());
//!
//! client
//!     .create_page("database_id", vec![PropertyValue::new("Done", false)])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod outbound;

pub use config::NotionConfig;
pub use domain::codec::{decode, encode};
pub use domain::models::{
    CellValue, DatabaseSchema, PropertyDefinition, PropertyType, PropertyValue, Row, Table,
};
pub use domain::ports::NotionApi;
pub use domain::service::DatabaseClient;
pub use error::{DecodeErr, EncodeErr, NotionClientErr, Result};
pub use outbound::reqwest_api::NotionHttpApi;

#[cfg(feature = "mock")]
pub use domain::ports::MockNotionApi;
