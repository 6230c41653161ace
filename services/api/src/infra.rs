use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use vida_insights::catalog::{Catalog, CatalogImporter};
use vida_insights::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads the catalog export at `path`, or falls back to the built-in articles.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    let catalog = match path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), articles = catalog.len(), "catalog loaded from file");
            catalog
        }
        None => Catalog::standard(),
    };

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_path_uses_standard_catalog() {
        let catalog = load_catalog(None).expect("standard catalog");
        assert_eq!(catalog.len(), Catalog::standard().len());
    }

    #[test]
    fn unreadable_file_is_reported() {
        let path = PathBuf::from("does-not-exist/catalog.csv");
        assert!(matches!(
            load_catalog(Some(path.as_path())),
            Err(AppError::CatalogImport(_))
        ));
    }
}
