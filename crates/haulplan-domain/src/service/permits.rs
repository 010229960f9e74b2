//! Permit and legality evaluation
//!
//! Applies configurable legal thresholds to a load's packed envelope and
//! weight. Warning strings are shown verbatim by the quoting UI and
//! stored with the plan, so they stay human-readable and self-contained.

use serde::Serialize;

use haulplan_types::{CargoItem, ItemPlacement, LegalLimits, PermitKind, TruckType};

/// Legality verdict for one packed load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCheck {
    pub is_legal: bool,
    pub permits_required: Vec<PermitKind>,
    pub warnings: Vec<String>,
}

/// Evaluate one packed load. `items` are the placed items; `placements`
/// their deck positions; `weight` the aggregate placed weight in pounds.
pub fn evaluate_legal(
    truck: &TruckType,
    items: &[CargoItem],
    placements: &[ItemPlacement],
    weight: f64,
    limits: &LegalLimits,
) -> LegalCheck {
    let mut permits = Vec::new();
    let mut warnings = Vec::new();

    let (envelope_length, envelope_width) = packed_envelope(items, placements);
    let cargo_height = items.iter().map(|i| i.height).fold(0.0, f64::max);

    if envelope_length > limits.max_legal_length {
        permits.push(PermitKind::OversizeLength);
        warnings.push(format!(
            "Load is {:.1} ft long (legal limit {:.1} ft): oversize permit required",
            envelope_length, limits.max_legal_length,
        ));
    }
    if envelope_width > limits.max_legal_width {
        permits.push(PermitKind::OversizeWidth);
        warnings.push(format!(
            "Load is {:.1} ft wide (legal limit {:.1} ft): oversize permit required",
            envelope_width, limits.max_legal_width,
        ));
    }
    if cargo_height > limits.max_legal_height {
        permits.push(PermitKind::OversizeHeight);
        warnings.push(format!(
            "Cargo stands {:.1} ft above the deck (legal limit {:.1} ft): oversize permit required",
            cargo_height, limits.max_legal_height,
        ));
    }
    if weight > limits.max_legal_weight {
        permits.push(PermitKind::Overweight);
        warnings.push(format!(
            "Load weighs {:.0} lbs (legal gross limit {:.0} lbs): overweight permit required",
            weight, limits.max_legal_weight,
        ));
    } else if weight > limits.per_axle_weight_limit {
        permits.push(PermitKind::OverweightAxle);
        warnings.push(format!(
            "Load weighs {:.0} lbs (per-axle threshold {:.0} lbs): overweight permit may be required",
            weight, limits.per_axle_weight_limit,
        ));
    }

    // The planner keeps loads under capacity; a load over it is flagged,
    // never silently accepted.
    if weight > truck.max_cargo_weight {
        warnings.push(format!(
            "Load weighs {:.0} lbs, over the {:.0} lbs capacity of {}",
            weight, truck.max_cargo_weight, truck.name,
        ));
    }

    LegalCheck {
        is_legal: permits.is_empty(),
        permits_required: permits,
        warnings,
    }
}

/// Axis-aligned envelope of the placements, using rotated dimensions
/// where a piece was rotated. Falls back to item maxima when a load has
/// no placements (nothing was seated).
fn packed_envelope(items: &[CargoItem], placements: &[ItemPlacement]) -> (f64, f64) {
    let mut length: f64 = 0.0;
    let mut width: f64 = 0.0;
    for p in placements {
        let Some(item) = items.iter().find(|i| i.id == p.item_id) else {
            continue;
        };
        let (len, wid) = if p.rotated {
            (item.width, item.length)
        } else {
            (item.length, item.width)
        };
        length = length.max(p.x + len);
        width = width.max(p.z + wid);
    }
    (length, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::truck_by_id;
    use crate::service::placement::place;

    fn item(id: &str, quantity: u32, l: f64, w: f64, h: f64, weight: f64) -> CargoItem {
        CargoItem::new(id, "", quantity, l, w, h, weight)
    }

    fn check(truck_id: &str, items: &[CargoItem], weight: f64) -> LegalCheck {
        let truck = truck_by_id(truck_id).unwrap();
        let packed = place(truck, items);
        evaluate_legal(truck, items, &packed.placements, weight, &LegalLimits::default())
    }

    #[test]
    fn test_legal_load_has_no_permits() {
        let items = vec![item("a", 1, 40.0, 8.0, 8.0, 30_000.0)];
        let result = check("flatbed-48", &items, 30_000.0);
        assert!(result.is_legal);
        assert!(result.permits_required.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_tall_load_needs_height_permit() {
        let items = vec![item("a", 1, 40.0, 8.0, 14.0, 30_000.0)];
        let truck = truck_by_id("perimeter-80").unwrap();
        let packed = place(truck, &items);
        let result =
            evaluate_legal(truck, &items, &packed.placements, 30_000.0, &LegalLimits::default());
        assert!(!result.is_legal);
        assert_eq!(result.permits_required, vec![PermitKind::OversizeHeight]);
    }

    #[test]
    fn test_axle_threshold_before_gross() {
        let items = vec![item("a", 1, 20.0, 8.0, 8.0, 50_000.0)];
        let result = check("multiaxle-40", &items, 50_000.0);
        assert_eq!(result.permits_required, vec![PermitKind::OverweightAxle]);
        assert!(result.warnings[0].contains("per-axle"));
    }

    #[test]
    fn test_gross_overweight() {
        let items = vec![item("a", 1, 30.0, 8.0, 8.0, 90_000.0)];
        let result = check("multiaxle-40", &items, 90_000.0);
        assert_eq!(result.permits_required, vec![PermitKind::Overweight]);
    }

    #[test]
    fn test_over_capacity_warns() {
        let items = vec![item("a", 1, 40.0, 8.0, 8.0, 47_000.0)];
        let truck = truck_by_id("landoll-48").unwrap();
        let packed = place(truck, &items);
        let result =
            evaluate_legal(truck, &items, &packed.placements, 47_000.0, &LegalLimits::default());
        assert!(result.warnings.iter().any(|w| w.contains("capacity")));
    }

    #[test]
    fn test_envelope_uses_rotated_dimensions() {
        // Piece stated 8 x 40 rotates on the deck; envelope length must
        // still be 40 ft.
        let items = vec![item("beam", 1, 8.0, 40.0, 6.0, 10_000.0)];
        let truck = truck_by_id("flatbed-48").unwrap();
        let packed = place(truck, &items);
        assert!(packed.placements[0].rotated);
        let (len, wid) = packed_envelope(&items, &packed.placements);
        assert!((len - 40.0).abs() < 1e-9);
        assert!((wid - 8.0).abs() < 1e-9);
    }
}
