//! Job catalog loading.
//!
//! A catalog is a TOML file of `[[job]]` tables. Each job carries an id, a
//! title, an optional employer and the description text that gets scored.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use jobfit_rank::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::de;
use tracing::debug;

/// Catalog bundled with the binary, used when none is configured.
const DEMO_CATALOG: &str = include_str!("../templates/demo-catalog.toml");

/// Display name for the bundled catalog in errors and status output.
pub const DEMO_CATALOG_NAME: &str = "<demo catalog>";

/// Errors raised while loading or filtering a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    ReadFile {
        /// Path to the catalog.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The catalog is not valid TOML or does not match the schema.
    #[error("failed to parse catalog {path}: {source}")]
    ParseToml {
        /// Path to the catalog.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A job has an empty id.
    #[error("job '{title}' in {path} has an empty id")]
    EmptyId {
        /// Path to the catalog.
        path: PathBuf,
        /// Title of the offending job.
        title: String,
    },

    /// Two jobs share an id.
    #[error("duplicate job id '{id}' in {path}")]
    DuplicateId {
        /// Path to the catalog.
        path: PathBuf,
        /// The repeated id.
        id: String,
    },

    /// A requested job id is not in the catalog.
    #[error("unknown job id '{id}'")]
    UnknownJob {
        /// The requested id.
        id: String,
    },
}

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Unique id within the catalog.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Hiring organisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    /// Job description, the text compared against the CV.
    pub description: String,
}

impl Job {
    /// Converts the job into a ranking candidate.
    pub fn to_document(&self) -> Document {
        Document::new(&self.id, &self.title, &self.description)
    }
}

/// On-disk catalog layout.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    /// `[[job]]` tables.
    #[serde(default)]
    job: Vec<Job>,
}

/// An ordered, id-unique list of jobs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Jobs in file order.
    jobs: Vec<Job>,
}

impl Catalog {
    /// Loads and validates a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&contents, path)?;
        debug!(path = %path.display(), jobs = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Returns the bundled demo catalog.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::parse(DEMO_CATALOG, Path::new(DEMO_CATALOG_NAME))
    }

    /// Parses catalog TOML. `path` is used for error reporting.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(contents).map_err(|source| CatalogError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_jobs(file.job, path)
    }

    /// Builds a catalog, rejecting empty and duplicate ids.
    fn from_jobs(jobs: Vec<Job>, path: &Path) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if job.id.trim().is_empty() {
                return Err(CatalogError::EmptyId {
                    path: path.to_path_buf(),
                    title: job.title.clone(),
                });
            }
            if !seen.insert(job.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    path: path.to_path_buf(),
                    id: job.id.clone(),
                });
            }
        }
        Ok(Self { jobs })
    }

    /// Jobs in catalog order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Looks up a job by id.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if the catalog has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Restricts the catalog to the given ids, keeping catalog order.
    ///
    /// An empty id list keeps every job. Any id not in the catalog is an error.
    pub fn select(&self, ids: &[String]) -> Result<Self, CatalogError> {
        if ids.is_empty() {
            return Ok(self.clone());
        }
        if let Some(missing) = ids.iter().find(|id| self.get(id).is_none()) {
            return Err(CatalogError::UnknownJob {
                id: missing.clone(),
            });
        }
        let jobs = self
            .jobs
            .iter()
            .filter(|job| ids.contains(&job.id))
            .cloned()
            .collect();
        Ok(Self { jobs })
    }

    /// Ranking candidates for every job, in catalog order.
    pub fn documents(&self) -> Vec<Document> {
        self.jobs.iter().map(Job::to_document).collect()
    }
}
