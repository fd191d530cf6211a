//! Destination catalog loading
//!
//! The catalog is an ordered, static list of destinations loaded once at
//! process start. A small built-in catalog ships with the crate; deployments
//! with a richer table point the loader at a JSON file instead.

use crate::models::Destination;
use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{debug, info, warn};

/// The static destination catalog
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Load the built-in catalog bundled with the crate
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(include_str!("destinations.json"))
            .expect("bundled destination catalog is valid")
    }

    /// Load a catalog from a JSON file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading destination catalog from {}", path.display());

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        info!("Loaded {} destinations from catalog", catalog.len());
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json(raw: &str) -> Result<Self> {
        let destinations: Vec<Destination> =
            serde_json::from_str(raw).context("Catalog is not a valid destination list")?;

        if destinations.is_empty() {
            bail!("Catalog contains no destinations");
        }

        Self::warn_on_suspect_entries(&destinations);
        debug!("Parsed {} catalog entries", destinations.len());

        Ok(Self { destinations })
    }

    /// Warn about entries that look wrong without rejecting the catalog
    fn warn_on_suspect_entries(destinations: &[Destination]) {
        let mut seen_ids = std::collections::HashSet::new();
        for destination in destinations {
            if !seen_ids.insert(destination.id.as_str()) {
                warn!("Duplicate destination id in catalog: {}", destination.id);
            }
            for month in &destination.best_months {
                if !(1..=12).contains(month) {
                    warn!(
                        "Destination {} has out-of-range best month {}",
                        destination.id, month
                    );
                }
            }
            if destination.average_cost <= 0.0 {
                warn!(
                    "Destination {} has non-positive average cost {}",
                    destination.id, destination.average_cost
                );
            }
        }
    }

    /// All destinations in catalog order
    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Look up a destination by id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Number of destinations in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
