// Domain layer - Wire payloads and pure chart shaping

pub mod actions;
pub mod chart;
pub mod payload;
pub mod series;
pub mod summary;
