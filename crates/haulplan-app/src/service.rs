//! Planning service
//!
//! Glue between stored configuration, manifest files and the planning
//! engine. The engine itself stays pure; everything filesystem-shaped
//! lives here.

use std::path::Path;

use haulplan_domain::{plan_loads, recommend, standard_catalog};
use haulplan_types::{
    CargoItem, ConfigError, Error, LegalLimits, LoadPlan, Recommendation, Result, TruckType,
};

use crate::config::Config;
use crate::manifest::load_manifest;

/// Load a custom trailer catalog: a JSON array of truck records
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<TruckType>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let catalog: Vec<TruckType> = serde_json::from_str(&content)?;
    if catalog.is_empty() {
        return Err(Error::Config(ConfigError::EmptyCatalog));
    }
    Ok(catalog)
}

/// Resolved planning context: catalog and limits for one request
pub struct PlanningService {
    catalog: Vec<TruckType>,
    limits: LegalLimits,
}

impl PlanningService {
    /// Build a service from configuration, honoring an explicit catalog
    /// override (e.g. from the command line) over the configured one.
    pub fn from_config(config: &Config, catalog_override: Option<&Path>) -> Result<Self> {
        let catalog = match catalog_override.or(config.catalog_path.as_deref()) {
            Some(path) => load_catalog(path)?,
            None => standard_catalog().to_vec(),
        };
        config.limits.validate()?;
        Ok(Self {
            catalog,
            limits: config.limits,
        })
    }

    pub fn catalog(&self) -> &[TruckType] {
        &self.catalog
    }

    pub fn limits(&self) -> &LegalLimits {
        &self.limits
    }

    /// Plan the cargo in a manifest file
    pub fn plan_manifest<P: AsRef<Path>>(&self, path: P) -> Result<LoadPlan> {
        let items = self.read_manifest(path)?;
        self.plan(&items)
    }

    /// Plan an in-memory cargo list
    pub fn plan(&self, items: &[CargoItem]) -> Result<LoadPlan> {
        plan_loads(items, &self.catalog, &self.limits)
    }

    /// Recommend a trailer for the cargo in a manifest file, without
    /// computing placements
    pub fn check_manifest<P: AsRef<Path>>(&self, path: P) -> Result<Recommendation> {
        let items = self.read_manifest(path)?;
        recommend(&items, &self.catalog, &self.limits)
    }

    fn read_manifest<P: AsRef<Path>>(&self, path: P) -> Result<Vec<CargoItem>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        load_manifest(path).map_err(|e| Error::Manifest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_plan_from_csv_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cargo.csv");
        std::fs::write(
            &path,
            "id,description,quantity,length_ft,width_ft,height_ft,weight_lbs\n\
             gen-1,generator,1,20.0,8.0,7.0,20000\n",
        )
        .unwrap();

        let service = PlanningService::from_config(&Config::default(), None).unwrap();
        let plan = service.plan_manifest(&path).unwrap();
        assert_eq!(plan.total_trucks, 1);
        assert!(plan.unassigned_items.is_empty());
    }

    #[test]
    fn test_missing_manifest_is_file_not_found() {
        let service = PlanningService::from_config(&Config::default(), None).unwrap();
        let err = service.plan_manifest("no-such-file.csv").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_custom_catalog_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.json");
        let fleet = serde_json::to_string(&vec![haulplan_domain::truck_by_id("flatbed-48")
            .unwrap()
            .clone()])
        .unwrap();
        std::fs::write(&path, fleet).unwrap();

        let service = PlanningService::from_config(&Config::default(), Some(&path)).unwrap();
        assert_eq!(service.catalog().len(), 1);
        assert_eq!(service.catalog()[0].id, "flatbed-48");
    }

    #[test]
    fn test_empty_catalog_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(load_catalog(&path).is_err());
    }
}
