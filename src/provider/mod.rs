//! Data providers
//!
//! A provider answers the four questions the browser asks about each table:
//! which tables exist, their columns, their index names and their rows. The
//! whole workspace is fetched once, before the event loop starts.

pub mod json;
pub mod sample;

use std::collections::BTreeSet;

use crate::config::Config;
use crate::model::{ColumnMetadata, RowRecord, TableSession, Workspace};

pub use json::JsonFileProvider;
pub use sample::SampleProvider;

/// Source of tables, schema and rows.
pub trait DataProvider {
    /// Short human-readable name shown in the status bar
    fn label(&self) -> String;

    fn list_tables(&self) -> Result<Vec<String>, ProviderError>;

    fn fetch_columns(&self, table: &str) -> Result<Vec<ColumnMetadata>, ProviderError>;

    fn fetch_index_names(&self, table: &str) -> Result<BTreeSet<String>, ProviderError>;

    fn fetch_rows(&self, table: &str, limit: usize) -> Result<Vec<RowRecord>, ProviderError>;
}

/// Fetch every table the provider lists, in listing order.
pub fn load_workspace(
    provider: &dyn DataProvider,
    row_limit: usize,
) -> Result<Workspace, ProviderError> {
    let names = provider.list_tables()?;
    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let columns = provider.fetch_columns(&name)?;
        let indices = provider.fetch_index_names(&name)?;
        let rows = provider.fetch_rows(&name, row_limit)?;
        tracing::debug!(
            "Loaded table {}: {} columns, {} rows, {} indices",
            name,
            columns.len(),
            rows.len(),
            indices.len()
        );
        tables.push(TableSession::new(name, columns, rows, indices));
    }
    Ok(Workspace::new(tables))
}

/// Workspace chosen at startup, plus where it came from
#[derive(Debug)]
pub struct LoadedWorkspace {
    pub workspace: Workspace,
    /// Data source label for the status bar
    pub source_label: String,
    /// Set when the configured data file could not be used
    pub notice: Option<String>,
}

/// Load the configured data file, or the sample dataset when none is set.
///
/// A data file that fails to load is not fatal: the sample dataset is used
/// instead and `notice` says why.
pub fn open_configured(config: &Config) -> LoadedWorkspace {
    let Some(path) = &config.data_file else {
        return load_sample(config.row_limit, None);
    };

    let loaded = JsonFileProvider::open(path).and_then(|provider| {
        load_workspace(&provider, config.row_limit).map(|ws| (ws, provider.label()))
    });
    match loaded {
        Ok((workspace, source_label)) => {
            tracing::info!(
                "Loaded {} tables from {}",
                workspace.len(),
                path.display()
            );
            LoadedWorkspace {
                workspace,
                source_label,
                notice: None,
            }
        }
        Err(e) => {
            tracing::warn!("Failed to load {}: {}, using sample data", path.display(), e);
            load_sample(
                config.row_limit,
                Some(format!("{}: {} (showing sample data)", path.display(), e)),
            )
        }
    }
}

fn load_sample(row_limit: usize, notice: Option<String>) -> LoadedWorkspace {
    let workspace = load_workspace(&SampleProvider, row_limit).unwrap_or_else(|e| {
        tracing::error!("Sample dataset failed to load: {}", e);
        Workspace::default()
    });
    LoadedWorkspace {
        workspace,
        source_label: SampleProvider.label(),
        notice,
    }
}

/// Provider error types
#[derive(Debug)]
pub enum ProviderError {
    Io(String),
    Parse(String),
    MissingTable(String),
    Invalid(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Io(msg) => write!(f, "IO error: {msg}"),
            ProviderError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ProviderError::MissingTable(name) => write!(f, "No such table: {name}"),
            ProviderError::Invalid(msg) => write!(f, "Invalid dataset: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}
