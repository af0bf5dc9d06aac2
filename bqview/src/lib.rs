#![deny(missing_docs)]
//! Mirror a BigQuery dataset as passthrough views in another project
//!
//! This crate recreates a "view" dataset in a destination project: it deletes
//! and recreates the destination dataset, creates one `SELECT *` view per
//! table of the source dataset, and keeps the source dataset's authorized
//! view entries in sync so the views can read across projects.
//!
//! # Components
//!
//! The main components of this crate are:
//!
//! * [`model`] - Serde data model of the BigQuery resources the tool touches
//! * [`warehouse`] - The [`Warehouse`](warehouse::Warehouse) trait over the
//!   control-plane API, plus an in-memory implementation for tests
//! * [`mirror`] - The mirroring operations and the sequential driver
//! * [`error`] - Error types and handling
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), bqview::error::Error> {
//! use bqview::{mirror, warehouse::memory::MemoryWarehouse};
//!
//! let warehouse = MemoryWarehouse::new();
//!
//! let summary = mirror::mirror_dataset(
//!     &warehouse,
//!     &warehouse,
//!     "analytics-prod",
//!     "analytics-views",
//!     "sales",
//! )
//! .await?;
//!
//! println!("Created {} views", summary.views_created);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mirror;
pub mod model;
pub mod warehouse;
