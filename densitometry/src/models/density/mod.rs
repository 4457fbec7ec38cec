pub mod density_breakdown;
pub mod mineral_density;
