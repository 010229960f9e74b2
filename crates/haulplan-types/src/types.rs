//! Core value types for load planning
//!
//! All dimensions are feet, all weights are pounds. Plan-facing types
//! serialize in camelCase so a stored plan round-trips as the JSON shape
//! the quoting UI persists inside a quote record.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ItemError};

/// Trailer category. Closed enumeration; category-specific behavior
/// (preference ordering, display names) matches exhaustively so adding a
/// category is a compile-time event at every use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrailerCategory {
    Flatbed,
    StepDeck,
    Rgn,
    Lowboy,
    DoubleDrop,
    Landoll,
    Conestoga,
    DryVan,
    Reefer,
    CurtainSide,
    MultiAxle,
    Schnabel,
    Perimeter,
    Steerable,
    Blade,
    Tanker,
    Hopper,
    Specialized,
}

impl TrailerCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TrailerCategory::Flatbed => "Flatbed",
            TrailerCategory::StepDeck => "Step Deck",
            TrailerCategory::Rgn => "RGN",
            TrailerCategory::Lowboy => "Lowboy",
            TrailerCategory::DoubleDrop => "Double Drop",
            TrailerCategory::Landoll => "Landoll",
            TrailerCategory::Conestoga => "Conestoga",
            TrailerCategory::DryVan => "Dry Van",
            TrailerCategory::Reefer => "Reefer",
            TrailerCategory::CurtainSide => "Curtain Side",
            TrailerCategory::MultiAxle => "Multi-Axle",
            TrailerCategory::Schnabel => "Schnabel",
            TrailerCategory::Perimeter => "Perimeter",
            TrailerCategory::Steerable => "Steerable",
            TrailerCategory::Blade => "Blade",
            TrailerCategory::Tanker => "Tanker",
            TrailerCategory::Hopper => "Hopper",
            TrailerCategory::Specialized => "Specialized",
        }
    }
}

impl std::fmt::Display for TrailerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One kind of physical object to transport. A single record may
/// represent multiple identical pieces via `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoItem {
    /// Opaque identifier, unique within one planning request
    pub id: String,
    /// Free-text description (e.g. "CAT 320 excavator")
    #[serde(default)]
    pub description: String,
    /// Number of identical pieces
    pub quantity: u32,
    /// Length in feet, per piece
    pub length: f64,
    /// Width in feet, per piece
    pub width: f64,
    /// Height in feet, per piece
    pub height: f64,
    /// Weight in pounds, per piece
    pub weight: f64,
}

impl CargoItem {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            length,
            width,
            height,
            weight,
        }
    }

    /// Check the invariants the planning engine relies on: positive,
    /// finite dimensions and weight, quantity at least 1.
    pub fn validate(&self) -> Result<(), ItemError> {
        let dims = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ];
        for (field, value) in dims {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ItemError::NonPositiveDimension { field, value });
            }
        }
        if !(self.weight > 0.0) || !self.weight.is_finite() {
            return Err(ItemError::NonPositiveWeight(self.weight));
        }
        if self.quantity == 0 {
            return Err(ItemError::ZeroQuantity);
        }
        Ok(())
    }

    /// Footprint of a single piece in square feet
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Combined weight of all pieces in pounds
    pub fn total_weight(&self) -> f64 {
        self.weight * f64::from(self.quantity)
    }

    /// Longer of length/width (the side laid along the deck)
    pub fn long_side(&self) -> f64 {
        self.length.max(self.width)
    }

    /// Shorter of length/width
    pub fn short_side(&self) -> f64 {
        self.length.min(self.width)
    }
}

/// Immutable trailer reference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckType {
    /// Catalog identifier (e.g. "flatbed-48")
    pub id: String,
    /// Display name
    pub name: String,
    pub category: TrailerCategory,
    /// Usable deck length in feet
    pub deck_length: f64,
    /// Usable deck width in feet
    pub deck_width: f64,
    /// Deck height above road in feet
    pub deck_height: f64,
    /// Legal total stack height minus deck height, in feet
    pub max_legal_cargo_height: f64,
    /// Maximum cargo weight in pounds
    pub max_cargo_weight: f64,
    /// Informational tags; never used in fit logic
    #[serde(default)]
    pub best_for: Vec<String>,
    /// Free-text description; never used in fit logic
    #[serde(default)]
    pub description: String,
}

impl TruckType {
    /// Usable deck area in square feet
    pub fn deck_area(&self) -> f64 {
        self.deck_length * self.deck_width
    }
}

/// Per-dimension outcome of checking one truck against aggregate needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitResult {
    pub fits: bool,
    pub fits_weight: bool,
    pub fits_length: bool,
    pub fits_width: bool,
    pub fits_height: bool,
}

/// Aggregate needs of one group of cargo items.
///
/// `length_required` and `width_required` are normalized so that
/// `length_required >= width_required`: each item is oriented with its
/// longer side along the deck before taking maxima.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequirements {
    pub length_required: f64,
    pub width_required: f64,
    pub height_required: f64,
    pub weight_required: f64,
}

/// Suggestion to split cargo across several trailers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiTruckSuggestion {
    /// Suggested number of trailers
    pub count: u32,
    pub reason: String,
}

/// Output of the truck recommender for one group of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// First catalog entry, in preference order, that fits the aggregate
    /// requirements. None when no single trailer can carry the group.
    pub recommended_truck: Option<TruckType>,
    pub reason: String,
    pub is_oversize_permit_required: bool,
    pub is_overweight_permit_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_truck_suggestion: Option<MultiTruckSuggestion>,
    pub requirements: LoadRequirements,
}

/// Kinds of road-transport permits a load can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermitKind {
    OversizeLength,
    OversizeWidth,
    OversizeHeight,
    Overweight,
    OverweightAxle,
}

impl PermitKind {
    pub fn label(&self) -> &'static str {
        match self {
            PermitKind::OversizeLength => "Oversize (length)",
            PermitKind::OversizeWidth => "Oversize (width)",
            PermitKind::OversizeHeight => "Oversize (height)",
            PermitKind::Overweight => "Overweight (gross)",
            PermitKind::OverweightAxle => "Overweight (axle)",
        }
    }
}

impl std::fmt::Display for PermitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Position of one cargo piece on a deck.
///
/// `x` is feet from the front of the deck, `z` feet from the left edge.
/// `unit` distinguishes pieces of the same item when `quantity > 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPlacement {
    pub item_id: String,
    /// 0-based piece index within the item's quantity
    pub unit: u32,
    pub x: f64,
    pub z: f64,
    /// True when length/width were swapped to fit
    pub rotated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilization {
    pub weight_percent: f64,
    pub space_percent: f64,
}

/// One assigned trailer and the cargo placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: String,
    /// Items actually placed on this trailer (quantities reflect placed
    /// pieces only; pieces that could not be seated are escalated to the
    /// plan's `unassigned_items`)
    pub items: Vec<CargoItem>,
    pub recommended_truck: TruckType,
    pub placements: Vec<ItemPlacement>,
    /// Aggregate weight of placed pieces in pounds
    pub weight: f64,
    pub utilization: Utilization,
    pub warnings: Vec<String>,
    pub is_legal: bool,
    pub permits_required: Vec<PermitKind>,
}

/// Complete assignment of a planning request's cargo across trailers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPlan {
    pub loads: Vec<Load>,
    pub total_trucks: u32,
    /// Sum of all loads' weight in pounds
    pub total_weight: f64,
    /// Sum of quantities assigned to loads
    pub total_items: u32,
    /// Items (with remaining quantity) that no trailer could carry
    pub unassigned_items: Vec<CargoItem>,
    pub warnings: Vec<String>,
}

/// Legal road-transport thresholds. Configuration, not constants, so a
/// jurisdiction can override them per planning request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalLimits {
    /// Feet; beyond this an oversize (length) permit is required
    #[serde(default = "default_max_legal_length")]
    pub max_legal_length: f64,
    /// Feet
    #[serde(default = "default_max_legal_width")]
    pub max_legal_width: f64,
    /// Feet, cargo height above the deck
    #[serde(default = "default_max_legal_height")]
    pub max_legal_height: f64,
    /// Pounds, gross cargo weight
    #[serde(default = "default_max_legal_weight")]
    pub max_legal_weight: f64,
    /// Pounds; stricter per-axle-group threshold
    #[serde(default = "default_per_axle_weight_limit")]
    pub per_axle_weight_limit: f64,
}

fn default_max_legal_length() -> f64 {
    53.0
}

fn default_max_legal_width() -> f64 {
    8.5
}

fn default_max_legal_height() -> f64 {
    13.5
}

fn default_max_legal_weight() -> f64 {
    80_000.0
}

fn default_per_axle_weight_limit() -> f64 {
    48_000.0
}

impl Default for LegalLimits {
    fn default() -> Self {
        Self {
            max_legal_length: default_max_legal_length(),
            max_legal_width: default_max_legal_width(),
            max_legal_height: default_max_legal_height(),
            max_legal_weight: default_max_legal_weight(),
            per_axle_weight_limit: default_per_axle_weight_limit(),
        }
    }
}

impl LegalLimits {
    /// Non-positive limits indicate a caller bug, not a data condition;
    /// fail fast at entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("maxLegalLength", self.max_legal_length),
            ("maxLegalWidth", self.max_legal_width),
            ("maxLegalHeight", self.max_legal_height),
            ("maxLegalWeight", self.max_legal_weight),
            ("perAxleWeightLimit", self.per_axle_weight_limit),
        ];
        for (name, value) in fields {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::InvalidLimit { name, value });
            }
        }
        Ok(())
    }
}
