//! Load pipeline: fetch → decode → normalise.

use crate::{decode_rows, DataSource};
use jobboard_core::{JobCatalog, LoadError};

/// Fetch the job sheet from `source` and build a catalog from its first sheet.
pub async fn load_catalog(source: &DataSource) -> Result<JobCatalog, LoadError> {
    tracing::info!(%source, "loading jobs");
    let result = async {
        let bytes = source.fetch().await?;
        let rows = decode_rows(&bytes)?;
        JobCatalog::from_rows(rows)
    }
    .await;

    match &result {
        Ok(catalog) => {
            tracing::info!(%source, jobs = catalog.len(), skipped = catalog.skipped(), "jobs loaded")
        }
        Err(e) => tracing::error!(%source, error = %e, "failed to load jobs"),
    }
    result
}
