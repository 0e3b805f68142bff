pub mod config;
pub mod offset;
pub mod plan;
pub mod zones;
