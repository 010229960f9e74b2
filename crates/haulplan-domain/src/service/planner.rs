//! Load planning orchestrator
//!
//! Drives one planning request through grouping, trailer selection,
//! deck placement and legality checks, assembling the final `LoadPlan`.
//! The engine holds no state between calls; the same cargo list and
//! configuration always produce a structurally identical plan.
//!
//! Recoverable conditions (invalid items, cargo no trailer can carry,
//! pieces that would not seat) surface through `warnings` and
//! `unassigned_items`. Only configuration misuse is an error.

use haulplan_types::{
    CargoItem, Error, LegalLimits, Load, LoadPlan, Result, TruckType, Utilization,
};

use crate::service::fit::evaluate_fit;
use crate::service::permits::evaluate_legal;
use crate::service::placement::{place, Placement};
use crate::service::recommend::{recommend, requirements};

/// One piece of one item, the granularity at which groups are filled
struct PlanUnit {
    item_idx: usize,
    weight: f64,
    area: f64,
}

/// Plan the transport of `items` across one or more trailers from
/// `catalog`, applying `limits` for permit evaluation.
pub fn plan_loads(
    items: &[CargoItem],
    catalog: &[TruckType],
    limits: &LegalLimits,
) -> Result<LoadPlan> {
    limits.validate().map_err(Error::Config)?;
    if catalog.is_empty() {
        return Err(Error::Config(
            haulplan_types::ConfigError::EmptyCatalog,
        ));
    }

    let mut warnings = Vec::new();
    let mut unassigned = Vec::new();

    // Invalid items are excluded up front, by name, never coerced.
    let mut plannable: Vec<CargoItem> = Vec::new();
    for item in items {
        match item.validate() {
            Ok(()) => plannable.push(item.clone()),
            Err(e) => {
                warnings.push(format!("Cargo item `{}` excluded from planning: {}", item.id, e));
                unassigned.push(item.clone());
            }
        }
    }

    // Items no single trailer can carry even alone cannot join any group.
    let mut fitting: Vec<CargoItem> = Vec::new();
    for item in plannable {
        let single = CargoItem {
            quantity: 1,
            ..item.clone()
        };
        let rec = recommend(std::slice::from_ref(&single), catalog, limits)?;
        match rec.recommended_truck {
            Some(_) => fitting.push(item),
            None => {
                warnings.push(format!(
                    "No catalog trailer can carry `{}`: {}",
                    item.id, rec.reason
                ));
                unassigned.push(item);
            }
        }
    }

    let groups = form_groups(&fitting, catalog, limits)?;

    let mut loads = Vec::new();
    for group in &groups {
        let (truck, packed) = pack_group(group, catalog)?;

        let mut load_items = Vec::new();
        let mut load_weight = 0.0;
        let mut load_area = 0.0;
        for item in group {
            let unplaced_qty = packed
                .unplaced
                .iter()
                .find(|u| u.id == item.id)
                .map(|u| u.quantity)
                .unwrap_or(0);
            let placed_qty = item.quantity - unplaced_qty;
            if placed_qty > 0 {
                let placed = CargoItem {
                    quantity: placed_qty,
                    ..item.clone()
                };
                load_weight += placed.total_weight();
                load_area += placed.footprint_area() * f64::from(placed_qty);
                load_items.push(placed);
            }
        }
        for leftover in &packed.unplaced {
            warnings.push(format!(
                "{} piece(s) of `{}` did not fit on {} and were left unassigned",
                leftover.quantity, leftover.id, truck.name
            ));
            unassigned.push(leftover.clone());
        }
        if load_items.is_empty() {
            continue;
        }

        let legal = evaluate_legal(&truck, &load_items, &packed.placements, load_weight, limits);
        warnings.extend(legal.warnings.iter().cloned());

        loads.push(Load {
            id: format!("load-{}", loads.len() + 1),
            items: load_items,
            utilization: Utilization {
                weight_percent: load_weight / truck.max_cargo_weight * 100.0,
                space_percent: load_area / truck.deck_area() * 100.0,
            },
            placements: packed.placements,
            weight: load_weight,
            warnings: legal.warnings,
            is_legal: legal.is_legal,
            permits_required: legal.permits_required,
            recommended_truck: truck,
        });
    }

    let total_weight = loads.iter().map(|l| l.weight).sum();
    let total_items = loads
        .iter()
        .flat_map(|l| l.items.iter())
        .map(|i| i.quantity)
        .sum();
    Ok(LoadPlan {
        total_trucks: loads.len() as u32,
        total_weight,
        total_items,
        loads,
        unassigned_items: unassigned,
        warnings,
    })
}

/// Greedy deterministic bin-fill. Pieces are taken heaviest first; a
/// piece joins the current group while the group-plus-piece aggregate
/// still fits the group's trailer and the rough footprint sum stays
/// within its deck area. Otherwise the group closes and a new one seeds.
/// Not optimal (bin packing is NP-hard); deterministic by construction.
fn form_groups(
    items: &[CargoItem],
    catalog: &[TruckType],
    limits: &LegalLimits,
) -> Result<Vec<Vec<CargoItem>>> {
    let mut units = Vec::new();
    for (item_idx, item) in items.iter().enumerate() {
        for _ in 0..item.quantity {
            units.push(PlanUnit {
                item_idx,
                weight: item.weight,
                area: item.footprint_area(),
            });
        }
    }
    units.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.area
                    .partial_cmp(&a.area)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    let mut groups: Vec<Vec<CargoItem>> = Vec::new();
    let mut counts: Vec<u32> = vec![0; items.len()];
    let mut truck: Option<TruckType> = None;
    let mut area_sum = 0.0;

    for unit in &units {
        if let Some(current) = &truck {
            counts[unit.item_idx] += 1;
            let candidate = collect_group(items, &counts);
            let req = requirements(&candidate);
            let fits = evaluate_fit(current, &req)?.fits
                && area_sum + unit.area <= current.deck_area();
            if fits {
                area_sum += unit.area;
                continue;
            }
            counts[unit.item_idx] -= 1;
            groups.push(collect_group(items, &counts));
            counts.iter_mut().for_each(|c| *c = 0);
        }
        // Seed a new group with this piece; its own cheapest trailer
        // sets the group's budget. Every piece reaching this point fits
        // some trailer alone, so the recommendation cannot be empty.
        counts[unit.item_idx] = 1;
        area_sum = unit.area;
        let seed = collect_group(items, &counts);
        truck = recommend(&seed, catalog, limits)?.recommended_truck;
    }
    if counts.iter().any(|&c| c > 0) {
        groups.push(collect_group(items, &counts));
    }
    Ok(groups)
}

fn collect_group(items: &[CargoItem], counts: &[u32]) -> Vec<CargoItem> {
    items
        .iter()
        .zip(counts)
        .filter(|(_, &count)| count > 0)
        .map(|(item, &count)| CargoItem {
            quantity: count,
            ..item.clone()
        })
        .collect()
}

/// Pick the trailer the group actually packs onto. Candidates are the
/// catalog entries fitting the aggregate, in preference order; the first
/// that seats every piece wins, else the one leaving the fewest pieces
/// unseated.
fn pack_group(group: &[CargoItem], catalog: &[TruckType]) -> Result<(TruckType, Placement)> {
    let req = requirements(group);
    let mut best: Option<(TruckType, Placement, u32)> = None;
    for truck in catalog {
        if !evaluate_fit(truck, &req)?.fits {
            continue;
        }
        let packed = place(truck, group);
        if packed.unplaced.is_empty() {
            return Ok((truck.clone(), packed));
        }
        let leftover: u32 = packed.unplaced.iter().map(|u| u.quantity).sum();
        if best.as_ref().map(|(_, _, n)| leftover < *n).unwrap_or(true) {
            best = Some((truck.clone(), packed, leftover));
        }
    }
    match best {
        Some((truck, packed, _)) => Ok((truck, packed)),
        // Groups are formed against a fitting trailer, so this is
        // unreachable with a consistent catalog; fail loudly if not.
        None => Err(Error::InvalidRequirements(format!(
            "no catalog trailer fits a formed group ({:.0} lbs, {:.0} ft)",
            req.weight_required, req.length_required
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_catalog;
    use haulplan_types::TrailerCategory;

    fn item(id: &str, quantity: u32, l: f64, w: f64, h: f64, weight: f64) -> CargoItem {
        CargoItem::new(id, "", quantity, l, w, h, weight)
    }

    fn plan(items: &[CargoItem]) -> LoadPlan {
        plan_loads(items, standard_catalog(), &LegalLimits::default()).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_plan() {
        let p = plan(&[]);
        assert_eq!(p.total_trucks, 0);
        assert!(p.loads.is_empty());
        assert!(p.unassigned_items.is_empty());
        assert!(p.warnings.is_empty());
    }

    #[test]
    fn test_single_small_item_single_load() {
        let p = plan(&[item("a", 1, 20.0, 8.0, 7.0, 20_000.0)]);
        assert_eq!(p.total_trucks, 1);
        assert_eq!(p.total_items, 1);
        assert!((p.total_weight - 20_000.0).abs() < 1e-9);
        assert!(p.unassigned_items.is_empty());
        assert_eq!(p.loads[0].placements.len(), 1);
    }

    #[test]
    fn test_mixed_cargo_shares_one_trailer() {
        let p = plan(&[
            item("mill", 1, 30.0, 8.0, 9.0, 28_000.0),
            item("crate", 4, 4.0, 4.0, 4.0, 2_000.0),
        ]);
        assert_eq!(p.total_trucks, 1);
        assert_eq!(p.total_items, 5);
        assert_eq!(p.loads[0].placements.len(), 5);
        assert!(p.unassigned_items.is_empty());
    }

    #[test]
    fn test_overweight_pair_splits() {
        let p = plan(&[item("press", 2, 45.0, 8.0, 12.0, 45_000.0)]);
        assert_eq!(p.total_trucks, 2);
        assert!(p.unassigned_items.is_empty());
        for load in &p.loads {
            assert!(load.weight <= load.recommended_truck.max_cargo_weight);
        }
    }

    #[test]
    fn test_invalid_item_excluded_with_warning() {
        let p = plan(&[
            item("bad", 1, 0.0, 8.0, 7.0, 10_000.0),
            item("good", 1, 20.0, 8.0, 7.0, 20_000.0),
        ]);
        assert_eq!(p.total_trucks, 1);
        assert_eq!(p.unassigned_items.len(), 1);
        assert_eq!(p.unassigned_items[0].id, "bad");
        assert!(p.warnings.iter().any(|w| w.contains("`bad`")));
    }

    #[test]
    fn test_unsatisfiable_item_goes_unassigned() {
        let p = plan(&[
            item("span", 1, 150.0, 8.0, 6.0, 30_000.0),
            item("good", 1, 20.0, 8.0, 7.0, 20_000.0),
        ]);
        assert_eq!(p.total_trucks, 1);
        assert_eq!(p.unassigned_items.len(), 1);
        assert_eq!(p.unassigned_items[0].id, "span");
        assert!(p.warnings.iter().any(|w| w.contains("No catalog trailer")));
    }

    #[test]
    fn test_conservation_of_weight() {
        let items = vec![
            item("a", 3, 10.0, 8.0, 6.0, 12_000.0),
            item("b", 2, 20.0, 8.0, 7.0, 24_000.0),
        ];
        let p = plan(&items);
        let input_total: f64 = items.iter().map(|i| i.total_weight()).sum();
        let unassigned_total: f64 = p.unassigned_items.iter().map(|i| i.total_weight()).sum();
        assert!((p.total_weight + unassigned_total - input_total).abs() < 1e-6);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            item("a", 3, 10.0, 8.0, 6.0, 12_000.0),
            item("b", 2, 45.0, 8.0, 11.5, 30_000.0),
            item("c", 7, 5.0, 5.0, 5.0, 2_000.0),
        ];
        let first = plan(&items);
        let second = plan(&items);
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_ids_are_sequential() {
        let p = plan(&[item("press", 2, 45.0, 8.0, 12.0, 45_000.0)]);
        let ids: Vec<&str> = p.loads.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["load-1", "load-2"]);
    }

    #[test]
    fn test_empty_catalog_is_config_error() {
        let result = plan_loads(
            &[item("a", 1, 20.0, 8.0, 7.0, 20_000.0)],
            &[],
            &LegalLimits::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_step_deck_preferred_for_tall_legal_cargo() {
        let p = plan(&[item("hoe", 1, 40.0, 8.0, 10.0, 30_000.0)]);
        assert_eq!(p.total_trucks, 1);
        assert!(matches!(
            p.loads[0].recommended_truck.category,
            TrailerCategory::Flatbed | TrailerCategory::StepDeck
        ));
        assert!(p.loads[0].is_legal);
    }
}
