/*!
Defines the trait to communicate with the warehouse control plane.
*/

use std::fmt::Debug;

use crate::error::Error;
use crate::model::{AccessEntry, Dataset, DatasetReference, Table, TableReference};

pub mod memory;

/// A trait representing the warehouse control-plane operations the mirroring
/// run needs.
///
/// The Warehouse trait provides methods to:
/// - Create, delete and read datasets
/// - Replace a dataset's access control list
/// - List tables and create views
///
/// Implementations must be Send + Sync for concurrent access and Debug for
/// logging/debugging.
#[async_trait::async_trait]
pub trait Warehouse: Send + Sync + Debug {
    /// Creates a new dataset.
    ///
    /// # Errors
    /// Returns an error if:
    /// * The dataset already exists
    /// * The control plane rejects the request
    async fn create_dataset(&self, dataset: &DatasetReference) -> Result<Dataset, Error>;
    /// Deletes a dataset.
    ///
    /// # Arguments
    /// * `dataset` - The dataset to delete
    /// * `delete_contents` - Whether to delete the dataset even when it still
    ///   contains tables
    ///
    /// # Errors
    /// Returns an error if:
    /// * The dataset doesn't exist
    /// * The dataset is non-empty and `delete_contents` is false
    async fn delete_dataset(
        &self,
        dataset: &DatasetReference,
        delete_contents: bool,
    ) -> Result<(), Error>;
    /// Reads a dataset, including its access control list.
    ///
    /// # Errors
    /// Returns an error if the dataset doesn't exist.
    async fn get_dataset(&self, dataset: &DatasetReference) -> Result<Dataset, Error>;
    /// Replaces the access control list of a dataset.
    ///
    /// # Returns
    /// * `Result<Dataset, Error>` - The dataset after the update
    ///
    /// # Errors
    /// Returns an error if the dataset doesn't exist or the update is
    /// rejected.
    async fn update_access(
        &self,
        dataset: &DatasetReference,
        access: Vec<AccessEntry>,
    ) -> Result<Dataset, Error>;
    /// Lists the tables of a dataset, in the order the service reports them.
    ///
    /// # Errors
    /// Returns an error if the dataset doesn't exist.
    async fn list_tables(&self, dataset: &DatasetReference) -> Result<Vec<TableReference>, Error>;
    /// Creates a view.
    ///
    /// # Arguments
    /// * `view` - The table resource to create; its `view` field carries the
    ///   stored query
    ///
    /// # Errors
    /// Returns an error if:
    /// * The containing dataset doesn't exist
    /// * A table of the same name already exists
    async fn create_view(&self, view: Table) -> Result<Table, Error>;
}
