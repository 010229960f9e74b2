//! Standard trailer catalog
//!
//! Static, versioned reference data for a typical US heavy-haul fleet.
//! Entries are stored in recommendation preference order: common, cheap
//! categories first, specialized heavy-haul equipment last, and within a
//! category smaller decks before larger ones. Callers in other
//! jurisdictions can substitute their own `&[TruckType]`.

use std::sync::LazyLock;

use haulplan_types::{TrailerCategory, TruckType};

/// Preference rank used to keep the catalog ordered. Lower is cheaper /
/// more common and therefore tried first by the recommender.
pub fn category_rank(category: TrailerCategory) -> u8 {
    match category {
        TrailerCategory::Flatbed => 0,
        TrailerCategory::StepDeck => 1,
        TrailerCategory::DryVan => 2,
        TrailerCategory::Reefer => 3,
        TrailerCategory::CurtainSide => 4,
        TrailerCategory::Conestoga => 5,
        TrailerCategory::Landoll => 6,
        TrailerCategory::DoubleDrop => 7,
        TrailerCategory::Lowboy => 8,
        TrailerCategory::Rgn => 9,
        TrailerCategory::Tanker => 10,
        TrailerCategory::Hopper => 11,
        TrailerCategory::MultiAxle => 12,
        TrailerCategory::Steerable => 13,
        TrailerCategory::Blade => 14,
        TrailerCategory::Perimeter => 15,
        TrailerCategory::Schnabel => 16,
        TrailerCategory::Specialized => 17,
    }
}

fn truck(
    id: &str,
    name: &str,
    category: TrailerCategory,
    deck_length: f64,
    deck_width: f64,
    deck_height: f64,
    max_legal_cargo_height: f64,
    max_cargo_weight: f64,
    best_for: &[&str],
    description: &str,
) -> TruckType {
    TruckType {
        id: id.to_string(),
        name: name.to_string(),
        category,
        deck_length,
        deck_width,
        deck_height,
        max_legal_cargo_height,
        max_cargo_weight,
        best_for: best_for.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}

/// Standard trailer catalog, in preference order
static STANDARD_CATALOG: LazyLock<Vec<TruckType>> = LazyLock::new(|| {
    vec![
        truck(
            "flatbed-48",
            "48 ft Flatbed",
            TrailerCategory::Flatbed,
            48.0,
            8.5,
            5.0,
            8.5,
            48_000.0,
            &["steel", "lumber", "palletized machinery"],
            "The workhorse for general freight that loads from any side.",
        ),
        truck(
            "flatbed-53",
            "53 ft Flatbed",
            TrailerCategory::Flatbed,
            53.0,
            8.5,
            5.0,
            8.5,
            48_000.0,
            &["long steel", "pipe", "structural beams"],
            "Extended flatbed for long but legal-height freight.",
        ),
        truck(
            "stepdeck-48",
            "48 ft Step Deck",
            TrailerCategory::StepDeck,
            48.0,
            8.5,
            3.5,
            10.0,
            48_000.0,
            &["forklifts", "compact excavators", "tall crates"],
            "Lower main deck buys two feet of cargo height over a flatbed.",
        ),
        truck(
            "stepdeck-53",
            "53 ft Step Deck",
            TrailerCategory::StepDeck,
            53.0,
            8.5,
            3.5,
            10.0,
            48_000.0,
            &["long tall machinery"],
            "Extended step deck.",
        ),
        truck(
            "dryvan-53",
            "53 ft Dry Van",
            TrailerCategory::DryVan,
            53.0,
            8.2,
            4.0,
            9.0,
            45_000.0,
            &["boxed parts", "weather-sensitive freight"],
            "Enclosed van; cargo must clear the interior envelope.",
        ),
        truck(
            "reefer-53",
            "53 ft Reefer",
            TrailerCategory::Reefer,
            53.0,
            8.2,
            4.0,
            8.5,
            43_500.0,
            &["temperature-controlled freight"],
            "Refrigerated van; insulation narrows the interior.",
        ),
        truck(
            "curtainside-53",
            "53 ft Curtain Side",
            TrailerCategory::CurtainSide,
            53.0,
            8.2,
            4.5,
            9.0,
            44_000.0,
            &["side-loaded palletized freight"],
            "Flatbed loading with van weather protection.",
        ),
        truck(
            "conestoga-48",
            "48 ft Conestoga",
            TrailerCategory::Conestoga,
            48.0,
            8.2,
            5.0,
            8.0,
            44_000.0,
            &["covered machinery"],
            "Rolling tarp system over a flatbed deck.",
        ),
        truck(
            "landoll-48",
            "48 ft Landoll",
            TrailerCategory::Landoll,
            48.0,
            8.5,
            3.2,
            10.0,
            40_000.0,
            &["rolling stock", "containers", "dead equipment"],
            "Tilt deck for drive-on or winched loading.",
        ),
        truck(
            "doubledrop-50",
            "50 ft Stretch Double Drop",
            TrailerCategory::DoubleDrop,
            50.0,
            8.5,
            1.5,
            12.0,
            48_000.0,
            &["tall long machinery", "press sections"],
            "Extendable well for tall pieces that are also long.",
        ),
        truck(
            "lowboy-26",
            "26 ft Lowboy",
            TrailerCategory::Lowboy,
            26.0,
            8.5,
            1.5,
            12.0,
            50_000.0,
            &["dozers", "excavators"],
            "Low well for tall tracked equipment.",
        ),
        truck(
            "rgn-29",
            "29 ft RGN",
            TrailerCategory::Rgn,
            29.0,
            8.5,
            1.5,
            11.5,
            42_000.0,
            &["drive-on equipment"],
            "Removable gooseneck; loads over the front.",
        ),
        truck(
            "tanker-43",
            "43 ft Tanker",
            TrailerCategory::Tanker,
            43.0,
            8.0,
            4.0,
            8.0,
            45_000.0,
            &["bulk liquids"],
            "Liquid bulk; listed for fleet completeness.",
        ),
        truck(
            "hopper-40",
            "40 ft Hopper",
            TrailerCategory::Hopper,
            40.0,
            8.0,
            4.5,
            7.5,
            50_000.0,
            &["bulk aggregate", "grain"],
            "Bottom-dump bulk trailer.",
        ),
        truck(
            "multiaxle-40",
            "13-Axle Lowboy",
            TrailerCategory::MultiAxle,
            40.0,
            10.0,
            2.0,
            13.0,
            240_000.0,
            &["transformers", "mill housings"],
            "Spread-axle configuration for concentrated weight.",
        ),
        truck(
            "steerable-60",
            "60 ft Steerable Extendable",
            TrailerCategory::Steerable,
            60.0,
            10.0,
            2.5,
            12.5,
            130_000.0,
            &["long heavy vessels"],
            "Rear-steer dolly for long loads on tight routes.",
        ),
        truck(
            "blade-110",
            "110 ft Blade Trailer",
            TrailerCategory::Blade,
            110.0,
            8.5,
            3.0,
            10.0,
            52_000.0,
            &["wind turbine blades"],
            "Single-purpose blade carrier.",
        ),
        truck(
            "perimeter-80",
            "80 ft Perimeter Deck",
            TrailerCategory::Perimeter,
            80.0,
            12.0,
            1.2,
            14.5,
            180_000.0,
            &["stators", "pressure vessels"],
            "Open-center frame rides the cargo inches off the road.",
        ),
        truck(
            "schnabel-100",
            "100 ft Schnabel",
            TrailerCategory::Schnabel,
            100.0,
            14.0,
            1.0,
            16.0,
            500_000.0,
            &["generator stators", "reactor vessels"],
            "The cargo itself spans the trailer halves.",
        ),
        truck(
            "specialized-120",
            "120 ft Heavy-Haul Platform",
            TrailerCategory::Specialized,
            120.0,
            16.0,
            1.5,
            16.0,
            800_000.0,
            &["one-off superloads"],
            "Engineered platform assembled per move.",
        ),
    ]
});

/// The built-in catalog, in preference order
pub fn standard_catalog() -> &'static [TruckType] {
    &STANDARD_CATALOG
}

/// Look up a catalog entry by id
pub fn truck_by_id(id: &str) -> Option<&'static TruckType> {
    STANDARD_CATALOG.iter().find(|t| t.id == id)
}
