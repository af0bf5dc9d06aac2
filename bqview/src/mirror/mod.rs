/*!
The mirroring operations and the sequential driver.

A run recreates the destination dataset, strips stale authorized view
entries from the source dataset, creates one passthrough view per source
table, and grants the fresh views read access to the source dataset. Every
step catches its own failures, logs them, and lets the run continue; the
driver reports what happened in a [MirrorSummary] and never short-circuits.
*/

use crate::error::Error;
use crate::model::{AccessEntry, Dataset, DatasetReference, Table, TableReference};
use crate::warehouse::Warehouse;

/// Outcome of a mirroring run.
///
/// Partial failures don't abort the run, so callers inspect the summary to
/// learn what was skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MirrorSummary {
    /// Tables found in the source dataset
    pub tables: usize,
    /// Views created in the destination dataset
    pub views_created: usize,
    /// View creations that failed and were skipped
    pub views_failed: usize,
    /// Stale authorized view entries removed from the source dataset
    pub grants_removed: usize,
    /// Authorized view entries added to the source dataset
    pub grants_added: usize,
}

/// Deletes and recreates the destination dataset.
///
/// A failing delete (typically because the dataset doesn't exist yet) is
/// logged and ignored; the create is issued unconditionally. Destination
/// data is gone the moment the delete succeeds.
pub async fn recreate_view_dataset(
    destination: &dyn Warehouse,
    dataset: &DatasetReference,
) -> Result<Dataset, Error> {
    match destination.delete_dataset(dataset, true).await {
        Ok(()) => tracing::info!(dataset = %dataset, "deleted view dataset"),
        Err(err) => tracing::warn!(%err, dataset = %dataset, "failed to delete view dataset"),
    }
    let created = destination.create_dataset(dataset).await?;
    tracing::info!(dataset = %dataset, "created view dataset");
    Ok(created)
}

/// Creates a passthrough view over a source table in the destination dataset.
pub async fn create_passthrough_view(
    destination: &dyn Warehouse,
    view_dataset: &DatasetReference,
    source_table: &TableReference,
) -> Result<Table, Error> {
    let query = format!("SELECT * FROM {}", source_table.quoted());
    destination
        .create_view(Table::view(
            view_dataset.table(&source_table.table_id),
            &query,
        ))
        .await
}

/// Removes every authorized view entry for the destination dataset from the
/// source dataset's access control list.
///
/// Matching is structural, on the parsed view reference; the same comparison
/// the grant pass uses for its duplicate check.
///
/// # Returns
/// The number of entries removed.
pub async fn clear_stale_view_access(
    source: &dyn Warehouse,
    source_dataset: &DatasetReference,
    view_dataset: &DatasetReference,
) -> Result<usize, Error> {
    let dataset = source.get_dataset(source_dataset).await?;
    let before = dataset.access.len();
    let access = dataset
        .access
        .into_iter()
        .filter(|entry| !entry.grants_view_in(view_dataset))
        .collect::<Vec<_>>();
    let removed = before - access.len();
    if removed > 0 {
        source.update_access(source_dataset, access).await?;
    }
    tracing::info!(dataset = %source_dataset, removed, "cleared stale authorized view entries");
    Ok(removed)
}

/// Grants every view in the destination dataset read access to the source
/// dataset.
///
/// Entries structurally equal to an existing one are not appended again.
///
/// # Returns
/// The number of entries added.
pub async fn grant_view_access(
    source: &dyn Warehouse,
    destination: &dyn Warehouse,
    source_dataset: &DatasetReference,
    view_dataset: &DatasetReference,
) -> Result<usize, Error> {
    let mut access = source.get_dataset(source_dataset).await?.access;
    let tables = destination.list_tables(view_dataset).await?;
    let mut added = 0;
    for table in tables {
        let entry = AccessEntry::view(table.clone());
        if access.contains(&entry) {
            tracing::debug!(view = %table, "authorized view entry already present");
        } else {
            access.push(entry);
            added += 1;
        }
    }
    if added > 0 {
        source.update_access(source_dataset, access).await?;
    }
    tracing::info!(dataset = %source_dataset, added, "granted authorized view entries");
    Ok(added)
}

/// Mirrors a dataset: recreates the destination dataset, creates one
/// passthrough view per source table and synchronizes the authorized view
/// entries on the source dataset.
///
/// Steps run strictly in sequence. Failures of individual calls are logged
/// and skipped; only invalid identifiers fail the run as a whole.
pub async fn mirror_dataset(
    source: &dyn Warehouse,
    destination: &dyn Warehouse,
    source_project: &str,
    view_project: &str,
    dataset: &str,
) -> Result<MirrorSummary, Error> {
    let source_dataset = DatasetReference::try_new(source_project, dataset)?;
    let view_dataset = DatasetReference::try_new(view_project, dataset)?;
    let mut summary = MirrorSummary::default();

    if let Err(err) = recreate_view_dataset(destination, &view_dataset).await {
        tracing::warn!(%err, dataset = %view_dataset, "failed to recreate view dataset");
    }

    match clear_stale_view_access(source, &source_dataset, &view_dataset).await {
        Ok(removed) => summary.grants_removed = removed,
        Err(err) => {
            tracing::warn!(%err, dataset = %source_dataset, "failed to clear stale authorized view entries")
        }
    }

    let tables = match source.list_tables(&source_dataset).await {
        Ok(tables) => tables,
        Err(err) => {
            tracing::warn!(%err, dataset = %source_dataset, "failed to list source tables");
            Vec::new()
        }
    };
    summary.tables = tables.len();

    for table in &tables {
        match create_passthrough_view(destination, &view_dataset, table).await {
            Ok(view) => {
                tracing::info!(view = %view.table_reference, source = %table, "created view");
                summary.views_created += 1;
            }
            Err(err) => {
                tracing::warn!(%err, source = %table, "failed to create view");
                summary.views_failed += 1;
            }
        }
    }

    match grant_view_access(source, destination, &source_dataset, &view_dataset).await {
        Ok(added) => summary.grants_added = added,
        Err(err) => {
            tracing::warn!(%err, dataset = %source_dataset, "failed to grant authorized view entries")
        }
    }

    Ok(summary)
}
