//! Table endpoints of the BigQuery v2 API.

use bqview::model::{Table, TableReference};
use serde_derive::Deserialize;

use super::fetch::fetch;
use super::{configuration::Configuration, urlencode, Error, ErrorResponse};

/// One page of a table listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableList {
    pub tables: Vec<TableListItem>,
    pub next_page_token: Option<String>,
}

/// Listing entry; carries less than the full table resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableListItem {
    pub table_reference: TableReference,
    #[serde(rename = "type", default)]
    pub table_type: Option<String>,
}

pub async fn list_tables(
    configuration: &Configuration,
    project_id: &str,
    dataset_id: &str,
    page_token: Option<String>,
) -> Result<TableList, Error<ErrorResponse>> {
    let query_params = page_token.map(|token| vec![("pageToken", token)]);
    fetch(
        configuration,
        reqwest::Method::GET,
        &format!(
            "/projects/{}/datasets/{}/tables",
            urlencode(project_id),
            urlencode(dataset_id)
        ),
        &(),
        query_params,
    )
    .await
}

pub async fn insert_table(
    configuration: &Configuration,
    project_id: &str,
    dataset_id: &str,
    table: &Table,
) -> Result<Table, Error<ErrorResponse>> {
    fetch(
        configuration,
        reqwest::Method::POST,
        &format!(
            "/projects/{}/datasets/{}/tables",
            urlencode(project_id),
            urlencode(dataset_id)
        ),
        table,
        None,
    )
    .await
}
