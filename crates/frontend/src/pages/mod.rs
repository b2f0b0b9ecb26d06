pub mod admin;
pub mod analytics;
pub mod contracts;
pub mod dashboard;
pub mod market_intel;
pub mod orders;
pub mod sellers;
pub mod settings;
