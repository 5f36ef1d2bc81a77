//! Centros Salud - read-only API over the municipal health center dataset
//!
//! The core of this library is pure and framework-free: coordinate parsing,
//! great-circle distance, and proximity ranking over an in-memory dataset.
//! The HTTP layer in [`routes`] is a thin actix-web shell around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{parse_coordinates, Coordinate, CoordinateError, ProximityRanker, RankError, RankedCenter};
pub use models::{CenterRecord, GeoValue, Service};
pub use services::Dataset;
