/*!
Dataset resource as returned by the control plane.
*/

use serde_derive::{Deserialize, Serialize};

use super::{access::AccessEntry, reference::DatasetReference};

/// A dataset together with the fields of interest to the mirroring run.
///
/// Fields the API returns but the tool never reads are not modeled.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    /// Project and dataset the resource lives in
    pub dataset_reference: DatasetReference,
    /// Access control list of the dataset
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<AccessEntry>,
    /// Opaque resource version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Geographic location of the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Descriptive name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

impl Dataset {
    /// A bare dataset resource for a create request.
    pub fn new(dataset_reference: DatasetReference) -> Self {
        Dataset {
            dataset_reference,
            ..Default::default()
        }
    }
}
