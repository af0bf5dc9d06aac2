/*!
Defining the [DatasetReference] and [TableReference] structs for identifying
datasets and tables across projects.
*/

use core::fmt::{self, Display};

use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// Separator between the components of a dotted reference path.
pub static SEPARATOR: &str = ".";

/// Identifies a dataset within a project.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    /// Project that owns the dataset
    pub project_id: String,
    /// Dataset name, unique within the project
    pub dataset_id: String,
}

impl DatasetReference {
    /// Create a dataset reference, rejecting empty components.
    pub fn try_new(project_id: &str, dataset_id: &str) -> Result<Self, Error> {
        if project_id.is_empty() || dataset_id.is_empty() {
            Err(Error::InvalidFormat(
                "dataset reference with an empty component".to_owned(),
            ))
        } else {
            Ok(DatasetReference {
                project_id: project_id.to_owned(),
                dataset_id: dataset_id.to_owned(),
            })
        }
    }
    /// Parse from a `project.dataset` path.
    pub fn parse(reference: &str) -> Result<Self, Error> {
        match reference.split_once(SEPARATOR) {
            Some((project_id, dataset_id)) if !dataset_id.contains(SEPARATOR) => {
                DatasetReference::try_new(project_id, dataset_id)
            }
            _ => Err(Error::InvalidFormat(format!(
                "dataset reference {reference}"
            ))),
        }
    }
    /// Reference a table inside this dataset.
    pub fn table(&self, table_id: &str) -> TableReference {
        TableReference {
            project_id: self.project_id.clone(),
            dataset_id: self.dataset_id.clone(),
            table_id: table_id.to_owned(),
        }
    }
}

impl Display for DatasetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.project_id, SEPARATOR, self.dataset_id)
    }
}

/// Identifies a table or view within a dataset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    /// Project that owns the dataset
    pub project_id: String,
    /// Dataset containing the table
    pub dataset_id: String,
    /// Table name, unique within the dataset
    pub table_id: String,
}

impl TableReference {
    /// Create a table reference, rejecting empty components.
    pub fn try_new(project_id: &str, dataset_id: &str, table_id: &str) -> Result<Self, Error> {
        if project_id.is_empty() || dataset_id.is_empty() || table_id.is_empty() {
            Err(Error::InvalidFormat(
                "table reference with an empty component".to_owned(),
            ))
        } else {
            Ok(TableReference {
                project_id: project_id.to_owned(),
                dataset_id: dataset_id.to_owned(),
                table_id: table_id.to_owned(),
            })
        }
    }
    /// Parse from a `project.dataset.table` path.
    pub fn parse(reference: &str) -> Result<Self, Error> {
        let parts = reference.split(SEPARATOR).collect::<Vec<_>>();
        match parts[..] {
            [project_id, dataset_id, table_id] => {
                TableReference::try_new(project_id, dataset_id, table_id)
            }
            _ => Err(Error::InvalidFormat(format!("table reference {reference}"))),
        }
    }
    /// The dataset containing this table.
    pub fn dataset(&self) -> DatasetReference {
        DatasetReference {
            project_id: self.project_id.clone(),
            dataset_id: self.dataset_id.clone(),
        }
    }
    /// The backtick-quoted path used to address the table in standard SQL.
    pub fn quoted(&self) -> String {
        format!("`{self}`")
    }
}

impl Display for TableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.project_id, SEPARATOR, self.dataset_id, SEPARATOR, self.table_id
        )
    }
}
