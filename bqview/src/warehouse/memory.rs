/*!
Defining an in memory warehouse struct.
*/

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use futures::lock::Mutex;

use crate::error::Error;
use crate::model::{AccessEntry, Dataset, DatasetReference, Table, TableReference};

use super::Warehouse;

#[derive(Debug, Default)]
struct DatasetState {
    dataset: Dataset,
    tables: BTreeMap<String, Table>,
}

/// In memory warehouse, used by tests in place of the remote control plane.
#[derive(Debug, Default)]
pub struct MemoryWarehouse {
    datasets: Mutex<HashMap<DatasetReference, DatasetState>>,
}

impl MemoryWarehouse {
    /// Create a new in memory warehouse with no datasets.
    pub fn new() -> Self {
        Self::default()
    }
    /// Insert a table into an existing dataset, for seeding test fixtures.
    ///
    /// # Errors
    /// Returns an error if the containing dataset doesn't exist.
    pub async fn insert_table(&self, table: Table) -> Result<(), Error> {
        let mut datasets = self.datasets.lock().await;
        let dataset = table.table_reference.dataset();
        let state = datasets
            .get_mut(&dataset)
            .ok_or_else(|| Error::NotFound(format!("Dataset {dataset}")))?;
        state
            .tables
            .insert(table.table_reference.table_id.clone(), table);
        Ok(())
    }
    /// Insert a dataset with the given access list, for seeding test fixtures.
    pub async fn insert_dataset(&self, dataset: Dataset) {
        let mut datasets = self.datasets.lock().await;
        datasets.insert(
            dataset.dataset_reference.clone(),
            DatasetState {
                dataset,
                tables: BTreeMap::new(),
            },
        );
    }
}

#[async_trait]
impl Warehouse for MemoryWarehouse {
    async fn create_dataset(&self, dataset: &DatasetReference) -> Result<Dataset, Error> {
        let mut datasets = self.datasets.lock().await;
        if datasets.contains_key(dataset) {
            return Err(Error::AlreadyExists(format!("Dataset {dataset}")));
        }
        let created = Dataset::new(dataset.clone());
        datasets.insert(
            dataset.clone(),
            DatasetState {
                dataset: created.clone(),
                tables: BTreeMap::new(),
            },
        );
        Ok(created)
    }
    async fn delete_dataset(
        &self,
        dataset: &DatasetReference,
        delete_contents: bool,
    ) -> Result<(), Error> {
        let mut datasets = self.datasets.lock().await;
        let state = datasets
            .get(dataset)
            .ok_or_else(|| Error::NotFound(format!("Dataset {dataset}")))?;
        if !state.tables.is_empty() && !delete_contents {
            return Err(Error::InvalidFormat(format!(
                "dataset {dataset} is not empty"
            )));
        }
        datasets.remove(dataset);
        Ok(())
    }
    async fn get_dataset(&self, dataset: &DatasetReference) -> Result<Dataset, Error> {
        let datasets = self.datasets.lock().await;
        datasets
            .get(dataset)
            .map(|state| state.dataset.clone())
            .ok_or_else(|| Error::NotFound(format!("Dataset {dataset}")))
    }
    async fn update_access(
        &self,
        dataset: &DatasetReference,
        access: Vec<AccessEntry>,
    ) -> Result<Dataset, Error> {
        let mut datasets = self.datasets.lock().await;
        let state = datasets
            .get_mut(dataset)
            .ok_or_else(|| Error::NotFound(format!("Dataset {dataset}")))?;
        state.dataset.access = access;
        Ok(state.dataset.clone())
    }
    async fn list_tables(&self, dataset: &DatasetReference) -> Result<Vec<TableReference>, Error> {
        let datasets = self.datasets.lock().await;
        let state = datasets
            .get(dataset)
            .ok_or_else(|| Error::NotFound(format!("Dataset {dataset}")))?;
        Ok(state
            .tables
            .values()
            .map(|table| table.table_reference.clone())
            .collect())
    }
    async fn create_view(&self, view: Table) -> Result<Table, Error> {
        let mut datasets = self.datasets.lock().await;
        let dataset = view.table_reference.dataset();
        let state = datasets
            .get_mut(&dataset)
            .ok_or_else(|| Error::NotFound(format!("Dataset {dataset}")))?;
        if state.tables.contains_key(&view.table_reference.table_id) {
            return Err(Error::AlreadyExists(format!(
                "Table {}",
                view.table_reference
            )));
        }
        state
            .tables
            .insert(view.table_reference.table_id.clone(), view.clone());
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryWarehouse;
    use crate::model::{DatasetReference, Table};
    use crate::warehouse::Warehouse;

    #[tokio::test]
    async fn test_create_list_drop_dataset() {
        let warehouse = MemoryWarehouse::new();
        let dataset = DatasetReference::parse("project.sales").unwrap();

        warehouse
            .create_dataset(&dataset)
            .await
            .expect("Failed to create dataset");
        assert!(warehouse.create_dataset(&dataset).await.is_err());

        warehouse
            .create_view(Table::view(
                dataset.table("orders"),
                "SELECT * FROM `other.sales.orders`",
            ))
            .await
            .expect("Failed to create view");

        let tables = warehouse
            .list_tables(&dataset)
            .await
            .expect("Failed to list tables");
        assert_eq!(tables.len(), 1);
        assert_eq!(&format!("{}", tables[0]), "project.sales.orders");

        assert!(warehouse.delete_dataset(&dataset, false).await.is_err());
        warehouse
            .delete_dataset(&dataset, true)
            .await
            .expect("Failed to delete dataset");
        assert!(warehouse.get_dataset(&dataset).await.is_err());
    }
}
