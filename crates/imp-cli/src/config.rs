use std::path::Path;

use imp_instruments::catalog::Catalog;
use imp_instruments::Instrument;
use imp_instruments::instruments::imp::Imp;

/// Build the catalog used for the whole process: the file at `path` when
/// given, otherwise the built-in IMP catalog.
pub fn load_catalog(path: Option<&Path>) -> eyre::Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
            let catalog = Catalog::from_json(&contents)
                .map_err(|e| eyre::eyre!("invalid catalog at {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
            catalog
        }
        None => {
            let catalog = Imp.catalog()?;
            tracing::debug!(instrument = Imp.id(), items = catalog.len(), "built-in catalog loaded");
            catalog
        }
    };
    Ok(catalog)
}
