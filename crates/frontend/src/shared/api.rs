//! API client for the pipeline introspection server
//!
//! Each entity tab maps to exactly one [`Endpoint`]; [`ApiClient::fetch_tab`]
//! decodes the body into the [`TabPayload`] shape that endpoint serves.

use contracts::pipeline::{
    BroadcastDefinition, DefinitionPayload, FunctionSource, InjectableRepr, SchemaListing,
    SeriesPayload, TableColumns, TabularPayload,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::api_utils::{api_url, encode_segment};
use super::config::BrowserConfig;
use super::error::{FetchError, FetchResult};

const SCHEMA_PATH: &str = "/schema";

/// Read-only endpoint backing one entity tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    TableInfo { table: String },
    TablePreview { table: String },
    TableDescribe { table: String },
    TableDefinition { table: String },
    TableColumns { table: String },
    ColumnPreview { table: String, column: String },
    ColumnDescribe { table: String, column: String },
    ColumnDefinition { table: String, column: String },
    StepDefinition { step: String },
    InjectableDefinition { name: String },
    InjectableRepr { name: String },
    BroadcastDefinition { cast: String, onto: String },
}

impl Endpoint {
    /// Absolute request path with encoded segments
    pub fn path(&self) -> String {
        let enc = |s: &str| encode_segment(s);
        match self {
            Self::TableInfo { table } => format!("/tables/{}/info", enc(table)),
            Self::TablePreview { table } => format!("/tables/{}/preview", enc(table)),
            Self::TableDescribe { table } => format!("/tables/{}/describe", enc(table)),
            Self::TableDefinition { table } => format!("/tables/{}/definition", enc(table)),
            Self::TableColumns { table } => format!("/tables/{}/columns", enc(table)),
            Self::ColumnPreview { table, column } => {
                format!("/tables/{}/columns/{}/preview", enc(table), enc(column))
            }
            Self::ColumnDescribe { table, column } => {
                format!("/tables/{}/columns/{}/describe", enc(table), enc(column))
            }
            Self::ColumnDefinition { table, column } => {
                format!("/tables/{}/columns/{}/definition", enc(table), enc(column))
            }
            Self::StepDefinition { step } => format!("/steps/{}/definition", enc(step)),
            Self::InjectableDefinition { name } => {
                format!("/injectables/{}/definition", enc(name))
            }
            Self::InjectableRepr { name } => format!("/injectables/{}/repr", enc(name)),
            Self::BroadcastDefinition { cast, onto } => {
                format!("/broadcasts/{}/{}/definition", enc(cast), enc(onto))
            }
        }
    }
}

/// Decoded body of a tab's endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum TabPayload {
    /// Pre-formatted text, shown verbatim
    Text(String),
    Table(TabularPayload),
    Series(SeriesPayload),
    Definition(DefinitionPayload),
    /// Column names of `table`
    Columns { table: String, columns: Vec<String> },
    Repr(InjectableRepr),
    Broadcast(BroadcastDefinition),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.base, path)
    }

    /// Full schema listing
    pub async fn fetch_schema(&self) -> FetchResult<SchemaListing> {
        self.get_json(SCHEMA_PATH).await
    }

    /// Fetch and decode the payload behind one entity tab
    pub async fn fetch_tab(&self, endpoint: &Endpoint) -> FetchResult<TabPayload> {
        let path = endpoint.path();
        let payload = match endpoint {
            Endpoint::TableInfo { .. } => TabPayload::Text(self.get_text(&path).await?),
            Endpoint::TablePreview { .. } | Endpoint::TableDescribe { .. } => {
                TabPayload::Table(self.get_json(&path).await?)
            }
            Endpoint::ColumnPreview { .. } | Endpoint::ColumnDescribe { .. } => {
                TabPayload::Series(self.get_json(&path).await?)
            }
            Endpoint::TableDefinition { .. }
            | Endpoint::ColumnDefinition { .. }
            | Endpoint::InjectableDefinition { .. } => {
                TabPayload::Definition(self.get_json(&path).await?)
            }
            Endpoint::StepDefinition { .. } => {
                let source: FunctionSource = self.get_json(&path).await?;
                TabPayload::Definition(source.into())
            }
            Endpoint::TableColumns { table } => {
                let body: TableColumns = self.get_json(&path).await?;
                TabPayload::Columns {
                    table: table.clone(),
                    columns: body.columns,
                }
            }
            Endpoint::InjectableRepr { .. } => TabPayload::Repr(self.get_json(&path).await?),
            Endpoint::BroadcastDefinition { .. } => {
                TabPayload::Broadcast(self.get_json(&path).await?)
            }
        };
        Ok(payload)
    }

    async fn get(&self, path: &str) -> FetchResult<Response> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        self.get(path)
            .await?
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn get_text(&self, path: &str) -> FetchResult<String> {
        self.get(path)
            .await?
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_endpoint_paths() {
        let table = "orders".to_string();
        assert_eq!(Endpoint::TableInfo { table: table.clone() }.path(), "/tables/orders/info");
        assert_eq!(
            Endpoint::TableDefinition { table: table.clone() }.path(),
            "/tables/orders/definition"
        );
        assert_eq!(Endpoint::TableColumns { table }.path(), "/tables/orders/columns");
    }

    #[test]
    fn test_nested_endpoint_paths_encode_every_segment() {
        let endpoint = Endpoint::ColumnDescribe {
            table: "land use".to_string(),
            column: "far/ratio".to_string(),
        };
        assert_eq!(endpoint.path(), "/tables/land%20use/columns/far%2Fratio/describe");

        let endpoint = Endpoint::BroadcastDefinition {
            cast: "persons".to_string(),
            onto: "households".to_string(),
        };
        assert_eq!(endpoint.path(), "/broadcasts/persons/households/definition");
    }

    #[test]
    fn test_client_prefixes_base() {
        let config = BrowserConfig {
            api_base: "http://localhost:8765/".to_string(),
            ..BrowserConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.url("/schema"), "http://localhost:8765/schema");
    }
}
