// Template catalog file loader
// Reads/writes a JSON object of {category: [template, ...]}.
// System works without the file (falls back to the built-in table).

use std::collections::BTreeMap;
use std::path::Path;

use super::{Catalog, Category, ProfileTemplate};
use crate::error::{DevprofError, Result};
use crate::store::TextStore;

/// Load a catalog from a JSON file. Categories absent from the file stay empty.
/// Returns `Ok(None)` when the file does not exist.
pub fn load_catalog(store: &dyn TextStore, path: &Path) -> Result<Option<Catalog>> {
    let content = match store.read_text(path) {
        Ok(Some(content)) => content,
        Ok(None) => return Ok(None),
        Err(source) => {
            return Err(DevprofError::PersistenceRead { path: path.to_path_buf(), source });
        }
    };

    let malformed = |reason: String| DevprofError::MalformedCatalog {
        path: path.to_path_buf(),
        reason,
    };

    let raw: BTreeMap<String, Vec<ProfileTemplate>> =
        serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?;

    let mut grouped: BTreeMap<Category, Vec<ProfileTemplate>> = BTreeMap::new();
    for (key, templates) in raw {
        let category = key.parse::<Category>().map_err(|e| malformed(e.to_string()))?;
        grouped.entry(category).or_default().extend(templates);
    }

    Catalog::from_templates(grouped)
        .map(Some)
        .map_err(|e| malformed(e.to_string()))
}

/// Write the catalog in the same shape `load_catalog` reads
pub fn save_catalog(store: &dyn TextStore, catalog: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.grouped())?;
    store
        .write_text(path, &json)
        .map_err(|source| DevprofError::PersistenceWrite { path: path.to_path_buf(), source })
}

/// Load the catalog file if present, otherwise the built-in table.
/// A broken file is reported and ignored rather than aborting startup.
pub fn auto_load_catalog(store: &dyn TextStore, path: &Path) -> Catalog {
    match load_catalog(store, path) {
        Ok(Some(catalog)) => {
            log::info!("Loaded {} templates from {}", catalog.total(), path.display());
            catalog
        }
        Ok(None) => Catalog::builtin(),
        Err(e) => {
            log::warn!("Ignoring template file {}: {}", path.display(), e);
            Catalog::builtin()
        }
    }
}

/// Load the catalog that a template edit will be applied to and written back.
///
/// Same fallback as `auto_load_catalog` for a missing file, but a broken file
/// is an error: saving the built-in table over it would lose the user's rows.
pub fn load_catalog_for_update(store: &dyn TextStore, path: &Path) -> Result<Catalog> {
    Ok(load_catalog(store, path)?.unwrap_or_else(Catalog::builtin))
}
