//! Fit evaluation service
//!
//! Pure check of one trailer against the aggregate needs of a cargo
//! group. Rotation is considered: a footprint fits when either
//! orientation lies within the deck.

use haulplan_types::{Error, FitResult, LoadRequirements, Result, TruckType};

/// Evaluate whether `truck` can carry a group with the given aggregate
/// requirements. Rejects non-positive requirements; those indicate a bug
/// upstream of the engine, not a data condition.
pub fn evaluate_fit(truck: &TruckType, req: &LoadRequirements) -> Result<FitResult> {
    validate_requirements(req)?;

    let fits_weight = req.weight_required <= truck.max_cargo_weight;
    let fits_height = req.height_required <= truck.max_legal_cargo_height;

    let natural =
        req.length_required <= truck.deck_length && req.width_required <= truck.deck_width;
    let rotated =
        req.width_required <= truck.deck_length && req.length_required <= truck.deck_width;

    // When either orientation seats the footprint both axes report true;
    // otherwise each axis reports its natural-orientation comparison so
    // the caller can name the failing dimension.
    let (fits_length, fits_width) = if natural || rotated {
        (true, true)
    } else {
        (
            req.length_required <= truck.deck_length,
            req.width_required <= truck.deck_width,
        )
    };

    Ok(FitResult {
        fits: fits_weight && fits_height && fits_length && fits_width,
        fits_weight,
        fits_length,
        fits_width,
        fits_height,
    })
}

fn validate_requirements(req: &LoadRequirements) -> Result<()> {
    let fields = [
        ("lengthRequired", req.length_required),
        ("widthRequired", req.width_required),
        ("heightRequired", req.height_required),
        ("weightRequired", req.weight_required),
    ];
    for (name, value) in fields {
        if !(value > 0.0) || !value.is_finite() {
            return Err(Error::InvalidRequirements(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }
    Ok(())
}
