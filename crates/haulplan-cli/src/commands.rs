//! Command handlers

use std::path::PathBuf;

use haulplan_app::{Config, PlanningService};
use haulplan_types::{Error, Result, TrailerCategory};

use crate::cli::{Cli, Commands};
use crate::output::{output_catalog, output_plan, output_recommendation};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli
        .format
        .unwrap_or_else(|| config.output_format.into());

    match cli.command {
        Commands::Plan {
            manifest,
            output,
            catalog,
        } => {
            let service = PlanningService::from_config(&config, catalog.as_deref())?;
            let plan = service.plan_manifest(&manifest)?;
            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&plan)?)?;
                eprintln!("Plan written to {}", path.display());
            }
            output_plan(format, &plan)
        }

        Commands::Check { manifest, catalog } => {
            let service = PlanningService::from_config(&config, catalog.as_deref())?;
            let rec = service.check_manifest(&manifest)?;
            output_recommendation(format, &rec)
        }

        Commands::Catalog { category } => {
            let service = PlanningService::from_config(&config, None)?;
            let filter = category.map(|c| parse_category(&c)).transpose()?;
            let trucks: Vec<_> = service
                .catalog()
                .iter()
                .filter(|t| filter.map(|c| t.category == c).unwrap_or(true))
                .cloned()
                .collect();
            output_catalog(format, &trucks)
        }

        Commands::Config {
            show,
            set_max_length,
            set_max_width,
            set_max_height,
            set_max_weight,
            set_axle_limit,
            set_output,
            set_catalog,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(v) = set_max_length {
                config.limits.max_legal_length = v;
                changed = true;
            }
            if let Some(v) = set_max_width {
                config.limits.max_legal_width = v;
                changed = true;
            }
            if let Some(v) = set_max_height {
                config.limits.max_legal_height = v;
                changed = true;
            }
            if let Some(v) = set_max_weight {
                config.limits.max_legal_weight = v;
                changed = true;
            }
            if let Some(v) = set_axle_limit {
                config.limits.per_axle_weight_limit = v;
                changed = true;
            }
            if let Some(v) = set_output {
                config.output_format = v.into();
                changed = true;
            }
            if let Some(path) = set_catalog {
                config.catalog_path =
                    if path.as_os_str().is_empty() { None } else { Some(path) };
                changed = true;
            }

            if changed {
                config.limits.validate()?;
                config.save()?;
                println!("Configuration updated");
            }
            if show || !changed {
                print!("{}", config);
            }
            Ok(())
        }
    }
}

/// Accepts the serialized category names (FLATBED, STEP_DECK, ...) in
/// any case.
fn parse_category(input: &str) -> Result<TrailerCategory> {
    let normalized = input.trim().to_uppercase().replace([' ', '-'], "_");
    serde_json::from_str(&format!("\"{}\"", normalized)).map_err(|_| {
        Error::InvalidArgument(format!(
            "Unknown trailer category `{}` (expected e.g. FLATBED, STEP_DECK, RGN)",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_forms() {
        assert_eq!(parse_category("FLATBED").unwrap(), TrailerCategory::Flatbed);
        assert_eq!(parse_category("step_deck").unwrap(), TrailerCategory::StepDeck);
        assert_eq!(parse_category("Step Deck").unwrap(), TrailerCategory::StepDeck);
        assert_eq!(parse_category("rgn").unwrap(), TrailerCategory::Rgn);
        assert!(parse_category("hoverboard").is_err());
    }
}
