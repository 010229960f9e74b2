//! 2D deck placement engine
//!
//! Shelf/first-fit heuristic. The deck is divided into lateral lanes
//! (width strips running the length of the deck); each lane keeps its own
//! cursor along the length axis. Units are seated largest-footprint-first
//! to reduce fragmentation, with a stable tie-break on input order so the
//! same cargo list always packs identically.

use std::cmp::Ordering;

use serde::Serialize;

use haulplan_types::{CargoItem, ItemPlacement, TruckType};

/// Guard against float jitter when cargo is sized exactly to the deck
const EPS: f64 = 1e-6;

/// Result of packing one group onto one trailer deck
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub placements: Vec<ItemPlacement>,
    /// Items (with remaining quantity) for which no deck space was left.
    /// Never silently dropped.
    pub unplaced: Vec<CargoItem>,
}

struct Lane {
    z: f64,
    width: f64,
    cursor: f64,
}

struct Unit {
    item_idx: usize,
    unit: u32,
    length: f64,
    width: f64,
    area: f64,
}

/// Compute non-overlapping placements for every piece of `items` on the
/// deck of `truck`. Pieces that cannot be seated are reported in
/// `unplaced`; a hard-to-place piece never aborts the rest.
pub fn place(truck: &TruckType, items: &[CargoItem]) -> Placement {
    let mut units = Vec::new();
    for (item_idx, item) in items.iter().enumerate() {
        for unit in 0..item.quantity {
            units.push(Unit {
                item_idx,
                unit,
                length: item.length,
                width: item.width,
                area: item.footprint_area(),
            });
        }
    }

    // Largest footprint first; stable sort preserves input order on ties.
    units.sort_by(|a, b| b.area.partial_cmp(&a.area).unwrap_or(Ordering::Equal));

    let mut lanes: Vec<Lane> = Vec::new();
    let mut placements = Vec::new();
    let mut unplaced_count = vec![0u32; items.len()];

    for unit in &units {
        match seat_unit(truck, &mut lanes, unit.length, unit.width) {
            Some((x, z, rotated)) => placements.push(ItemPlacement {
                item_id: items[unit.item_idx].id.clone(),
                unit: unit.unit,
                x,
                z,
                rotated,
            }),
            None => unplaced_count[unit.item_idx] += 1,
        }
    }

    let unplaced = items
        .iter()
        .zip(&unplaced_count)
        .filter(|(_, &count)| count > 0)
        .map(|(item, &count)| CargoItem {
            quantity: count,
            ..item.clone()
        })
        .collect();

    Placement {
        placements,
        unplaced,
    }
}

/// Try both orientations against existing lanes, then against a fresh
/// lane at the current width watermark. Returns (x, z, rotated).
fn seat_unit(
    truck: &TruckType,
    lanes: &mut Vec<Lane>,
    length: f64,
    width: f64,
) -> Option<(f64, f64, bool)> {
    let orientations: [(f64, f64, bool); 2] = [(length, width, false), (width, length, true)];

    let last = lanes.len().saturating_sub(1);
    for (i, lane) in lanes.iter_mut().enumerate() {
        for (len, wid, rotated) in orientations {
            if lane.cursor + len > truck.deck_length + EPS {
                continue;
            }
            // Only the newest lane may widen; earlier lanes are capped by
            // the lane opened beyond them.
            let fits_width = if wid <= lane.width + EPS {
                true
            } else {
                i == last && lane.z + wid <= truck.deck_width + EPS
            };
            if !fits_width {
                continue;
            }
            let x = lane.cursor;
            lane.cursor += len;
            lane.width = lane.width.max(wid);
            return Some((x, lane.z, rotated));
        }
    }

    // Open a new lane beyond the occupied width
    let z = lanes.last().map(|l| l.z + l.width).unwrap_or(0.0);
    for (len, wid, rotated) in orientations {
        if len <= truck.deck_length + EPS && z + wid <= truck.deck_width + EPS {
            lanes.push(Lane {
                z,
                width: wid,
                cursor: len,
            });
            return Some((0.0, z, rotated));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::truck_by_id;

    fn item(id: &str, quantity: u32, length: f64, width: f64, weight: f64) -> CargoItem {
        CargoItem::new(id, "", quantity, length, width, 5.0, weight)
    }

    fn dims(items: &[CargoItem], p: &ItemPlacement) -> (f64, f64) {
        let i = items.iter().find(|i| i.id == p.item_id).unwrap();
        if p.rotated {
            (i.width, i.length)
        } else {
            (i.length, i.width)
        }
    }

    fn assert_no_overlap(items: &[CargoItem], placements: &[ItemPlacement]) {
        for (a_idx, a) in placements.iter().enumerate() {
            for b in &placements[a_idx + 1..] {
                let (al, aw) = dims(items, a);
                let (bl, bw) = dims(items, b);
                let disjoint = a.x + al <= b.x + EPS
                    || b.x + bl <= a.x + EPS
                    || a.z + aw <= b.z + EPS
                    || b.z + bw <= a.z + EPS;
                assert!(
                    disjoint,
                    "{}#{} overlaps {}#{}",
                    a.item_id, a.unit, b.item_id, b.unit
                );
            }
        }
    }

    #[test]
    fn test_single_item_at_origin() {
        let truck = truck_by_id("flatbed-48").unwrap();
        let items = vec![item("a", 1, 40.0, 8.0, 30_000.0)];
        let result = place(truck, &items);
        assert!(result.unplaced.is_empty());
        assert_eq!(result.placements.len(), 1);
        let p = &result.placements[0];
        assert!((p.x - 0.0).abs() < EPS);
        assert!((p.z - 0.0).abs() < EPS);
        assert!(!p.rotated);
    }

    #[test]
    fn test_quantity_expands_to_units() {
        let truck = truck_by_id("flatbed-48").unwrap();
        let items = vec![item("pallet", 4, 10.0, 4.0, 1_500.0)];
        let result = place(truck, &items);
        assert_eq!(result.placements.len(), 4);
        assert!(result.unplaced.is_empty());
        let units: Vec<u32> = result.placements.iter().map(|p| p.unit).collect();
        assert_eq!(units, vec![0, 1, 2, 3]);
        assert_no_overlap(&items, &result.placements);
    }

    #[test]
    fn test_rotation_used_when_natural_fails() {
        // Stated as 8 ft long and 40 ft wide; only the rotated
        // orientation lies within an 8.5 ft deck.
        let truck = truck_by_id("flatbed-48").unwrap();
        let items = vec![item("beam", 1, 8.0, 40.0, 20_000.0)];
        let result = place(truck, &items);
        assert!(result.unplaced.is_empty());
        let p = &result.placements[0];
        assert!(p.rotated, "40 ft side must lie along the deck");
        assert_no_overlap(&items, &result.placements);
    }

    #[test]
    fn test_second_lane_opens() {
        let truck = truck_by_id("flatbed-48").unwrap();
        // Two 40 x 4 pieces cannot share one length run but fit side by side.
        let items = vec![item("a", 2, 40.0, 4.0, 5_000.0)];
        let result = place(truck, &items);
        assert!(result.unplaced.is_empty());
        assert_eq!(result.placements.len(), 2);
        let zs: Vec<f64> = result.placements.iter().map(|p| p.z).collect();
        assert!((zs[0] - 0.0).abs() < EPS);
        assert!((zs[1] - 4.0).abs() < EPS);
        assert_no_overlap(&items, &result.placements);
    }

    #[test]
    fn test_unplaced_reported_not_dropped() {
        let truck = truck_by_id("flatbed-48").unwrap();
        // Three 40 x 4 pieces: two lanes fit, the third exceeds deck width.
        let items = vec![item("a", 3, 40.0, 4.0, 5_000.0)];
        let result = place(truck, &items);
        assert_eq!(result.placements.len(), 2);
        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.unplaced[0].id, "a");
        assert_eq!(result.unplaced[0].quantity, 1);
    }

    #[test]
    fn test_largest_first_ordering() {
        let truck = truck_by_id("flatbed-48").unwrap();
        let items = vec![item("small", 1, 5.0, 5.0, 1_000.0), item("big", 1, 30.0, 8.0, 9_000.0)];
        let result = place(truck, &items);
        // Largest footprint seats first, so it owns the front of the deck.
        let big = result.placements.iter().find(|p| p.item_id == "big").unwrap();
        assert!((big.x - 0.0).abs() < EPS);
        assert_no_overlap(&items, &result.placements);
    }

    #[test]
    fn test_deterministic_on_equal_areas() {
        let truck = truck_by_id("flatbed-48").unwrap();
        let items = vec![item("a", 1, 10.0, 5.0, 1_000.0), item("b", 1, 5.0, 10.0, 1_000.0)];
        let first = place(truck, &items);
        let second = place(truck, &items);
        assert_eq!(first, second);
        // Equal areas keep input order: "a" seats before "b".
        assert_eq!(first.placements[0].item_id, "a");
    }

    #[test]
    fn test_exact_deck_length_fits() {
        let truck = truck_by_id("flatbed-48").unwrap();
        let items = vec![item("beam", 1, 48.0, 8.5, 10_000.0)];
        let result = place(truck, &items);
        assert!(result.unplaced.is_empty());
    }

    #[test]
    fn test_oversized_piece_is_unplaced() {
        let truck = truck_by_id("flatbed-48").unwrap();
        let items = vec![item("monster", 1, 60.0, 9.0, 10_000.0)];
        let result = place(truck, &items);
        assert!(result.placements.is_empty());
        assert_eq!(result.unplaced.len(), 1);
    }
}
