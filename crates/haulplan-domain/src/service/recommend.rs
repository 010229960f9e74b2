//! Truck recommendation service
//!
//! Picks the cheapest adequate trailer for one group of cargo: the
//! catalog is scanned in preference order and the first entry that fits
//! the aggregate requirements wins. When nothing fits, a multi-trailer
//! split is suggested; the actual re-partitioning is the planner's job.

use haulplan_types::{
    CargoItem, Error, LegalLimits, LoadRequirements, MultiTruckSuggestion, Recommendation, Result,
    TruckType,
};

use crate::service::fit::evaluate_fit;

/// Aggregate needs of a group. Each item is oriented with its longer
/// side along the deck before taking maxima, so `length_required >=
/// width_required`.
pub fn requirements(items: &[CargoItem]) -> LoadRequirements {
    let mut req = LoadRequirements {
        length_required: 0.0,
        width_required: 0.0,
        height_required: 0.0,
        weight_required: 0.0,
    };
    for item in items {
        req.length_required = req.length_required.max(item.long_side());
        req.width_required = req.width_required.max(item.short_side());
        req.height_required = req.height_required.max(item.height);
        req.weight_required += item.total_weight();
    }
    req
}

/// Recommend a trailer for `items`, or a multi-trailer split when no
/// single catalog entry can carry them.
pub fn recommend(
    items: &[CargoItem],
    catalog: &[TruckType],
    limits: &LegalLimits,
) -> Result<Recommendation> {
    limits.validate().map_err(Error::Config)?;
    for item in items {
        item.validate().map_err(|source| Error::InvalidItem {
            id: item.id.clone(),
            source,
        })?;
    }
    if items.is_empty() {
        return Err(Error::InvalidRequirements(
            "cannot recommend a trailer for an empty cargo list".to_string(),
        ));
    }

    let req = requirements(items);

    let is_oversize_permit_required = req.length_required > limits.max_legal_length
        || req.width_required > limits.max_legal_width
        || req.height_required > limits.max_legal_height;
    let is_overweight_permit_required = req.weight_required > limits.max_legal_weight
        || req.weight_required > limits.per_axle_weight_limit;

    let mut chosen = None;
    for truck in catalog {
        if evaluate_fit(truck, &req)?.fits {
            chosen = Some(truck.clone());
            break;
        }
    }

    let (reason, multi_truck_suggestion) = match &chosen {
        Some(truck) => (
            format!(
                "{} is the first preference-order trailer that carries {:.0} lbs with a {:.0} ft by {:.1} ft by {:.1} ft envelope",
                truck.name,
                req.weight_required,
                req.length_required,
                req.width_required,
                req.height_required,
            ),
            None,
        ),
        None => {
            let suggestion = suggest_split(&req, catalog);
            (suggestion.reason.clone(), Some(suggestion))
        }
    };

    Ok(Recommendation {
        recommended_truck: chosen,
        reason,
        is_oversize_permit_required,
        is_overweight_permit_required,
        multi_truck_suggestion,
        requirements: req,
    })
}

/// Catalog-wide maxima decide whether a failure is weight-only (split by
/// weight across copies of the biggest trailer) or dimensional (no count
/// of trailers fixes it; suggest 2 as a starting point).
fn suggest_split(req: &LoadRequirements, catalog: &[TruckType]) -> MultiTruckSuggestion {
    let max_weight = catalog.iter().map(|t| t.max_cargo_weight).fold(0.0, f64::max);
    let max_length = catalog.iter().map(|t| t.deck_length).fold(0.0, f64::max);
    let max_width = catalog.iter().map(|t| t.deck_width).fold(0.0, f64::max);
    let max_height = catalog
        .iter()
        .map(|t| t.max_legal_cargo_height)
        .fold(0.0, f64::max);

    if req.length_required > max_length {
        return MultiTruckSuggestion {
            count: 2,
            reason: format!(
                "No catalog trailer has a deck longer than {:.0} ft; {:.0} ft cargo needs specialized equipment or sectioning",
                max_length, req.length_required,
            ),
        };
    }
    if req.width_required > max_width {
        return MultiTruckSuggestion {
            count: 2,
            reason: format!(
                "No catalog trailer deck is wider than {:.1} ft; {:.1} ft cargo needs specialized equipment or sectioning",
                max_width, req.width_required,
            ),
        };
    }
    if req.height_required > max_height {
        return MultiTruckSuggestion {
            count: 2,
            reason: format!(
                "No catalog trailer clears {:.1} ft of cargo height; {:.1} ft cargo needs specialized equipment or sectioning",
                max_height, req.height_required,
            ),
        };
    }

    let count = (req.weight_required / max_weight).ceil().max(2.0) as u32;
    MultiTruckSuggestion {
        count,
        reason: format!(
            "Total weight {:.0} lbs exceeds the largest trailer capacity {:.0} lbs; split across {} trailers",
            req.weight_required, max_weight, count,
        ),
    }
}
