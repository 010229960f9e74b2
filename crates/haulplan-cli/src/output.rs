//! Output formatting module

use haulplan_types::{LoadPlan, Recommendation, Result, TruckType};

use crate::cli::OutputFormat;

pub fn output_plan(format: OutputFormat, plan: &LoadPlan) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!("\nLoad Plan");
    println!("=========");
    println!("Trailers:        {}", plan.total_trucks);
    println!("Pieces assigned: {}", plan.total_items);
    println!("Total weight:    {:.0} lbs", plan.total_weight);

    for load in &plan.loads {
        println!("\n--- {} ---", load.id);
        println!(
            "Trailer:     {} ({})",
            load.recommended_truck.name, load.recommended_truck.category
        );
        println!(
            "Weight:      {:.0} / {:.0} lbs ({:.1}%)",
            load.weight,
            load.recommended_truck.max_cargo_weight,
            load.utilization.weight_percent
        );
        println!("Deck usage:  {:.1}%", load.utilization.space_percent);
        println!("Legal:       {}", if load.is_legal { "yes" } else { "no" });
        if !load.permits_required.is_empty() {
            let permits: Vec<String> =
                load.permits_required.iter().map(|p| p.to_string()).collect();
            println!("Permits:     {}", permits.join(", "));
        }

        println!(
            "{:<16} {:>5} {:>8} {:>8} {:>8}",
            "Item", "Piece", "X (ft)", "Z (ft)", "Rotated"
        );
        for p in &load.placements {
            println!(
                "{:<16} {:>5} {:>8.1} {:>8.1} {:>8}",
                p.item_id,
                p.unit,
                p.x,
                p.z,
                if p.rotated { "yes" } else { "no" }
            );
        }
    }

    if !plan.unassigned_items.is_empty() {
        println!("\nUnassigned items:");
        for item in &plan.unassigned_items {
            println!("  {} x{} ({:.0} lbs each)", item.id, item.quantity, item.weight);
        }
    }

    if !plan.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &plan.warnings {
            println!("  - {}", warning);
        }
    }

    Ok(())
}

pub fn output_recommendation(format: OutputFormat, rec: &Recommendation) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(rec)?);
        return Ok(());
    }

    println!("\nTrailer Recommendation");
    println!("======================");
    match &rec.recommended_truck {
        Some(truck) => {
            println!("Trailer:     {} ({})", truck.name, truck.category);
            println!(
                "Deck:        {:.0} ft x {:.1} ft, {:.0} lbs capacity",
                truck.deck_length, truck.deck_width, truck.max_cargo_weight
            );
        }
        None => println!("Trailer:     none fits"),
    }
    println!(
        "Cargo needs: {:.1} ft x {:.1} ft x {:.1} ft, {:.0} lbs",
        rec.requirements.length_required,
        rec.requirements.width_required,
        rec.requirements.height_required,
        rec.requirements.weight_required
    );
    println!(
        "Oversize:    {}",
        if rec.is_oversize_permit_required { "permit required" } else { "no" }
    );
    println!(
        "Overweight:  {}",
        if rec.is_overweight_permit_required { "permit required" } else { "no" }
    );
    if let Some(suggestion) = &rec.multi_truck_suggestion {
        println!("Suggestion:  split across {} trailers", suggestion.count);
    }
    println!("\n{}", rec.reason);

    Ok(())
}

pub fn output_catalog(format: OutputFormat, catalog: &[TruckType]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    println!(
        "{:<16} {:<26} {:<12} {:>8} {:>7} {:>8} {:>10}",
        "Id", "Name", "Category", "Deck ft", "Wide", "Cargo ft", "Cap lbs"
    );
    println!("{}", "-".repeat(94));
    for truck in catalog {
        println!(
            "{:<16} {:<26} {:<12} {:>8.0} {:>7.1} {:>8.1} {:>10.0}",
            truck.id,
            truck.name,
            truck.category.to_string(),
            truck.deck_length,
            truck.deck_width,
            truck.max_legal_cargo_height,
            truck.max_cargo_weight
        );
    }

    Ok(())
}
