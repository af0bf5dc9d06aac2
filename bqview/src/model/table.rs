/*!
Table resource, including the view definition of virtual tables.
*/

use serde_derive::{Deserialize, Serialize};

use super::reference::TableReference;

/// Stored query backing a view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewDefinition {
    /// Query the view evaluates
    pub query: String,
    /// Whether the query is legacy SQL; always false for created views
    pub use_legacy_sql: bool,
}

/// A table or view resource.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Project, dataset and name of the table
    pub table_reference: TableReference,
    /// View definition, present for views only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewDefinition>,
    /// Resource type as reported by the service, e.g. `TABLE` or `VIEW`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
}

impl Table {
    /// A standard SQL view over the given query.
    pub fn view(table_reference: TableReference, query: &str) -> Self {
        Table {
            table_reference,
            view: Some(ViewDefinition {
                query: query.to_owned(),
                use_legacy_sql: false,
            }),
            table_type: None,
        }
    }
}
