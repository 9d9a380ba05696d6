pub mod quiz;
pub mod result;
pub mod variant;
pub mod welcome;
