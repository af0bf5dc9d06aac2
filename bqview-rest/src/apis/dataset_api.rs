//! Dataset endpoints of the BigQuery v2 API.

use bqview::model::{AccessEntry, Dataset};
use serde_derive::Serialize;

use super::fetch::{fetch, fetch_empty};
use super::{configuration::Configuration, urlencode, Error, ErrorResponse};

/// Patch body replacing only the access control list of a dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetAccessPatch {
    pub access: Vec<AccessEntry>,
}

pub async fn insert_dataset(
    configuration: &Configuration,
    project_id: &str,
    dataset: &Dataset,
) -> Result<Dataset, Error<ErrorResponse>> {
    fetch(
        configuration,
        reqwest::Method::POST,
        &format!("/projects/{}/datasets", urlencode(project_id)),
        dataset,
        None,
    )
    .await
}

pub async fn get_dataset(
    configuration: &Configuration,
    project_id: &str,
    dataset_id: &str,
) -> Result<Dataset, Error<ErrorResponse>> {
    fetch(
        configuration,
        reqwest::Method::GET,
        &format!(
            "/projects/{}/datasets/{}",
            urlencode(project_id),
            urlencode(dataset_id)
        ),
        &(),
        None,
    )
    .await
}

pub async fn delete_dataset(
    configuration: &Configuration,
    project_id: &str,
    dataset_id: &str,
    delete_contents: bool,
) -> Result<(), Error<ErrorResponse>> {
    fetch_empty(
        configuration,
        reqwest::Method::DELETE,
        &format!(
            "/projects/{}/datasets/{}",
            urlencode(project_id),
            urlencode(dataset_id)
        ),
        &(),
        Some(vec![("deleteContents", delete_contents.to_string())]),
    )
    .await
}

/// Replaces the access list of a dataset; other dataset fields are untouched.
pub async fn patch_dataset_access(
    configuration: &Configuration,
    project_id: &str,
    dataset_id: &str,
    patch: &DatasetAccessPatch,
) -> Result<Dataset, Error<ErrorResponse>> {
    fetch(
        configuration,
        reqwest::Method::PATCH,
        &format!(
            "/projects/{}/datasets/{}",
            urlencode(project_id),
            urlencode(dataset_id)
        ),
        patch,
        None,
    )
    .await
}
