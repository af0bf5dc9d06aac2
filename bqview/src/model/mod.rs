/*!
Serde data model for the BigQuery control-plane resources the tool touches.

The wire form follows the BigQuery REST v2 API, so every struct serializes
with camelCase field names and optional fields are skipped when absent.
*/

pub mod access;
pub mod dataset;
pub mod reference;
pub mod table;

pub use access::AccessEntry;
pub use dataset::Dataset;
pub use reference::{DatasetReference, TableReference};
pub use table::{Table, ViewDefinition};
