//! Load planning engine
//!
//! A pure, synchronous computation from a cargo list (plus legal-limit
//! configuration) to a `LoadPlan`: trailer choice per group, 2D deck
//! placement per piece, and oversize/overweight permit flags. The engine
//! keeps no state between calls and performs no I/O, so independent
//! planning requests can run concurrently.

pub mod catalog;
pub mod service;

pub use catalog::{category_rank, standard_catalog, truck_by_id};
pub use service::{evaluate_fit, evaluate_legal, place, plan_loads, recommend, requirements};
