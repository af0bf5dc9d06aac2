/*!
BigQuery REST v2 implementation of the [bqview::warehouse::Warehouse] trait.

The [apis] module holds the endpoint functions and the request plumbing; the
[warehouse] module adapts them to the trait the mirroring run drives.
*/

pub mod apis;
pub mod error;
pub mod warehouse;

pub use apis::configuration::Configuration;
pub use warehouse::RestWarehouse;
