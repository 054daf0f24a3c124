//! Reading catalogs and interaction fixtures from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rxmatch_model::{Catalog, SeverityTable};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::source::{FixtureFile, FixtureSource};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parse {}", path.display()))
}

/// Load a `{"name": "reference", ...}` catalog, keeping file order.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog: Catalog = read_json(path)?;
    debug!(entries = catalog.len(), path = %path.display(), "loaded catalog");
    Ok(catalog)
}

/// Load an interaction fixture file. See [`FixtureFile`] for the format.
pub fn load_fixture(path: &Path) -> Result<FixtureFile> {
    let fixture: FixtureFile = read_json(path)?;
    debug!(drugs = fixture.drugs.len(), path = %path.display(), "loaded interaction fixture");
    Ok(fixture)
}

/// Load a fixture and wrap it as an interaction source.
pub fn load_source(path: &Path, severity: SeverityTable) -> Result<FixtureSource> {
    Ok(FixtureSource::new(load_fixture(path)?, severity))
}
