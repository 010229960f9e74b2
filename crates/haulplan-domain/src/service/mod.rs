//! Domain services for load planning

pub mod fit;
pub mod permits;
pub mod placement;
pub mod planner;
pub mod recommend;

pub use fit::evaluate_fit;
pub use permits::{evaluate_legal, LegalCheck};
pub use placement::{place, Placement};
pub use planner::plan_loads;
pub use recommend::{recommend, requirements};
