use crate::domain::{
    codec,
    models::{
        CellValue, DatabaseSchema, PropertyDefinition, PropertyType, PropertyValue, Row, Table,
        api::{CreatePageRequest, DatabaseObject, PageObject, PageParent, PaginatedList},
    },
    ports::NotionApi,
};
use crate::error::{NotionClientErr, Result};
use anyhow::Context;
use serde_json::{Map, Value};
use std::collections::HashMap;


enum ClientState {
    Disconnected,
    /// database id to the schema discovered by the last successful connect
    Connected(HashMap<String, DatabaseSchema>),
}

/// Reads and writes the rows of Notion databases through a [NotionApi].
///
/// The client starts disconnected. [DatabaseClient::connect] discovers the
/// schema of every database the client will work with; that schema is then
/// used for every write until the next connect.
pub struct DatabaseClient<T> {
    api: T,
    state: ClientState,
}

impl<T> DatabaseClient<T>
where
    T: NotionApi,
{
    pub fn new(api: T) -> Self {
        Self {
            api,
            state: ClientState::Disconnected,
        }
    }

    /// the port this client sends its requests through
    pub fn api(&self) -> &T {
        &self.api
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, ClientState::Connected(_))
    }

    /// Fetch and cache the schema of each database.
    ///
    /// Stops at the first database that cannot be fetched; the previously
    /// cached schemas stay in place in that case.
    #[tracing::instrument(skip(self, database_ids), err)]
    pub async fn connect<I, S>(&mut self, database_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut schemas = HashMap::new();

        for database_id in database_ids {
            let database_id = database_id.into();
            let database = self
                .api
                .retrieve_database(&database_id)
                .await
                .with_context(|| format!("failed to retrieve database {database_id}"))?;
            let schema = schema_from_database(&database_id, database)?;
            tracing::debug!(%database_id, columns = schema.definitions().len(), "cached database schema");
            schemas.insert(database_id, schema);
        }

        self.state = ClientState::Connected(schemas);
        Ok(())
    }

    /// The cached schema of a database.
    pub fn schema(&self, database_id: &str) -> Result<&DatabaseSchema> {
        self.schemas()?
            .get(database_id)
            .ok_or_else(|| NotionClientErr::UnknownDatabase(database_id.to_string()))
    }

    fn schemas(&self) -> Result<&HashMap<String, DatabaseSchema>> {
        match &self.state {
            ClientState::Connected(schemas) => Ok(schemas),
            ClientState::Disconnected => Err(NotionClientErr::NotConnected),
        }
    }

    /// Read every row of a database into a [Table].
    ///
    /// When the database has no rows the table still carries the cached
    /// schema's columns.
    #[tracing::instrument(skip(self), err)]
    pub async fn get_database(&self, database_id: &str) -> Result<Table> {
        self.schemas()?;

        let api = &self.api;
        let pages = collect_all_pages(|start_cursor| {
            api.query_database(database_id, start_cursor)
        })
        .await?;

        if pages.is_empty() {
            let columns = self.schema(database_id)?.column_names();
            return Ok(Table::empty(columns));
        }

        let rows = pages
            .into_iter()
            .map(decode_page)
            .collect::<Result<Vec<_>>>()?;

        Ok(Table::from_rows(rows))
    }

    /// Add a row to a database.
    #[tracing::instrument(skip(self, properties), fields(property_count = properties.len()), err)]
    pub async fn create_page(
        &self,
        database_id: &str,
        properties: Vec<PropertyValue>,
    ) -> Result<()> {
        let request = self.create_page_request(database_id, properties)?;

        self.api
            .create_page(request)
            .await
            .with_context(|| format!("failed to create page in database {database_id}"))?;

        Ok(())
    }

    fn create_page_request(
        &self,
        database_id: &str,
        properties: Vec<PropertyValue>,
    ) -> Result<CreatePageRequest> {
        let schema = self.schema(database_id)?;

        let mut encoded = Map::new();
        for PropertyValue { name, value } in properties {
            let property_type = schema.property_type(&name).ok_or_else(|| {
                NotionClientErr::UnknownProperty {
                    database_id: database_id.to_string(),
                    property: name.clone(),
                }
            })?;
            encoded.insert(name, codec::encode(value, property_type)?);
        }

        Ok(CreatePageRequest {
            parent: PageParent {
                database_id: database_id.to_string(),
            },
            properties: encoded,
        })
    }

    /// Every child block of a page, as the raw block objects the service returns.
    #[tracing::instrument(skip(self), err)]
    pub async fn get_page_blocks(&self, page_id: &str) -> Result<Vec<Value>> {
        self.schemas()?;

        let api = &self.api;
        collect_all_pages(|start_cursor| api.list_block_children(page_id, start_cursor)).await
    }
}

/// Walk a cursor paginated endpoint until it reports no more results.
async fn collect_all_pages<P, F, Fut>(mut fetch: F) -> Result<Vec<P>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = anyhow::Result<PaginatedList<P>>>,
{
    let mut items = Vec::new();
    let mut start_cursor = None;

    loop {
        let page = fetch(start_cursor.take()).await?;
        tracing::debug!(
            results = page.results.len(),
            has_more = page.has_more,
            "fetched result segment"
        );
        items.extend(page.results);

        if !page.has_more {
            break;
        }
        start_cursor = Some(page.next_cursor.ok_or(NotionClientErr::MissingCursor)?);
    }

    Ok(items)
}

fn schema_from_database(database_id: &str, database: DatabaseObject) -> Result<DatabaseSchema> {
    database
        .properties
        .into_iter()
        .map(|(name, property)| -> Result<PropertyDefinition> {
            let wire_type = property
                .get("type")
                .and_then(Value::as_str)
                .with_context(|| {
                    format!("property {name} of database {database_id} has no type")
                })?;
            Ok(PropertyDefinition::new(
                name,
                PropertyType::classify(wire_type),
            ))
        })
        .collect()
}

fn decode_page(page: PageObject) -> Result<Row> {
    let cells = page
        .properties
        .into_iter()
        .map(|(name, payload)| -> Result<(String, CellValue)> {
            Ok((name, codec::decode(payload)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Row::with_cells(page.id, cells))
}
