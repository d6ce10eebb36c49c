//! jobfit: rank job descriptions against a CV.
//!
//! The binary reads a plain-text CV, loads a job catalog and scores every job
//! with a configurable backend from `jobfit-rank`. This library half holds the
//! pieces the command handlers share: catalog loading, CV input, scorer
//! construction and logging setup.

#![warn(missing_docs)]

pub mod backend;
pub mod catalog;
pub mod input;
pub mod logging;

pub use backend::build_scorer;
pub use catalog::{Catalog, CatalogError, DEMO_CATALOG_NAME, Job};
pub use input::{CvSource, InputError, read_text};
