/*!
BigQuery REST implementation of the warehouse trait.
*/

use async_trait::async_trait;
use bqview::{
    error::Error,
    model::{AccessEntry, Dataset, DatasetReference, Table, TableReference},
    warehouse::Warehouse,
};

use crate::apis::{
    configuration::Configuration,
    dataset_api::{self, DatasetAccessPatch},
    table_api::{self, TableList},
};

/// Drives a page fetcher until the service stops returning a
/// `nextPageToken`, accumulating the table references in service order.
async fn collect_table_pages<F, Fut>(mut next_page: F) -> Result<Vec<TableReference>, Error>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<TableList, Error>>,
{
    let mut tables = Vec::new();
    let mut token = None;

    loop {
        let page = next_page(token).await?;

        tables.extend(page.tables.into_iter().map(|item| item.table_reference));
        token = page.next_page_token;

        if token.is_none() {
            break;
        }
    }

    Ok(tables)
}

/// Warehouse backed by the BigQuery v2 REST API.
///
/// The project is part of every request path, so one instance serves both
/// the source and the destination project of a mirroring run.
#[derive(Debug, Clone)]
pub struct RestWarehouse {
    configuration: Configuration,
}

impl RestWarehouse {
    pub fn new(configuration: Configuration) -> Self {
        RestWarehouse { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

#[async_trait]
impl Warehouse for RestWarehouse {
    async fn create_dataset(&self, dataset: &DatasetReference) -> Result<Dataset, Error> {
        let created = dataset_api::insert_dataset(
            &self.configuration,
            &dataset.project_id,
            &Dataset::new(dataset.clone()),
        )
        .await?;
        Ok(created)
    }
    async fn delete_dataset(
        &self,
        dataset: &DatasetReference,
        delete_contents: bool,
    ) -> Result<(), Error> {
        dataset_api::delete_dataset(
            &self.configuration,
            &dataset.project_id,
            &dataset.dataset_id,
            delete_contents,
        )
        .await?;
        Ok(())
    }
    async fn get_dataset(&self, dataset: &DatasetReference) -> Result<Dataset, Error> {
        let dataset = dataset_api::get_dataset(
            &self.configuration,
            &dataset.project_id,
            &dataset.dataset_id,
        )
        .await?;
        Ok(dataset)
    }
    async fn update_access(
        &self,
        dataset: &DatasetReference,
        access: Vec<AccessEntry>,
    ) -> Result<Dataset, Error> {
        let updated = dataset_api::patch_dataset_access(
            &self.configuration,
            &dataset.project_id,
            &dataset.dataset_id,
            &DatasetAccessPatch { access },
        )
        .await?;
        Ok(updated)
    }
    async fn list_tables(&self, dataset: &DatasetReference) -> Result<Vec<TableReference>, Error> {
        let tables = collect_table_pages(|token| async move {
            table_api::list_tables(
                &self.configuration,
                &dataset.project_id,
                &dataset.dataset_id,
                token,
            )
            .await
            .map_err(Error::from)
        })
        .await?;

        tracing::debug!(dataset = %dataset, tables = tables.len(), "listed tables");
        Ok(tables)
    }
    async fn create_view(&self, view: Table) -> Result<Table, Error> {
        let created = table_api::insert_table(
            &self.configuration,
            &view.table_reference.project_id,
            &view.table_reference.dataset_id,
            &view,
        )
        .await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use bqview::model::TableReference;

    use super::collect_table_pages;
    use crate::apis::table_api::{TableList, TableListItem};

    fn item(table_id: &str) -> TableListItem {
        TableListItem {
            table_reference: TableReference::try_new("analytics-prod", "sales", table_id).unwrap(),
            table_type: Some("TABLE".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_listing_follows_pagination() {
        let requested = RefCell::new(Vec::new());

        let tables = collect_table_pages(|token| {
            requested.borrow_mut().push(token.clone());
            let page = match token.as_deref() {
                None => TableList {
                    tables: vec![item("customers"), item("orders")],
                    next_page_token: Some("page-2".to_owned()),
                },
                Some("page-2") => TableList {
                    tables: vec![item("refunds")],
                    next_page_token: None,
                },
                Some(other) => panic!("unexpected page token {other}"),
            };
            async move { Ok(page) }
        })
        .await
        .expect("Failed to collect pages");

        assert_eq!(
            requested.into_inner(),
            vec![None, Some("page-2".to_owned())]
        );
        let ids = tables
            .iter()
            .map(|table| table.table_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["customers", "orders", "refunds"]);
    }
}
